//! Runtime configuration read once at startup.

/// Database connection settings. Values are taken as-is from the environment; nothing is defaulted.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DbConfig {
    pub dialect: String,
    pub host: String,
    pub port: String,
    pub user: String,
    pub name: String,
    pub password: String,
}

/// Listener and process settings.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ServerConfig {
    pub listen_addr: String,
    pub max_connections: u32,
    /// Insert the demo person and books at startup when no live person has the demo email.
    pub seed_demo_data: bool,
}

impl Default for ServerConfig {
    fn default() -> Self {
        ServerConfig {
            listen_addr: DEFAULT_LISTEN_ADDR.to_string(),
            max_connections: DEFAULT_MAX_CONNECTIONS,
            seed_demo_data: false,
        }
    }
}

pub const DEFAULT_LISTEN_ADDR: &str = "localhost:8080";
pub const DEFAULT_MAX_CONNECTIONS: u32 = 5;
