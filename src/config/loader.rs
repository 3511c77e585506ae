//! Load config from process environment (or any key lookup, for tests).

use crate::config::types::{DbConfig, ServerConfig, DEFAULT_LISTEN_ADDR, DEFAULT_MAX_CONNECTIONS};
use crate::error::ConfigError;

pub const ENV_DIALECT: &str = "DIALECT";
pub const ENV_HOST: &str = "HOST";
pub const ENV_DB_PORT: &str = "DBPORT";
pub const ENV_USER: &str = "USER";
pub const ENV_NAME: &str = "NAME";
pub const ENV_PASSWORD: &str = "PASSWORD";

pub const ENV_LISTEN_ADDR: &str = "LISTEN_ADDR";
pub const ENV_MAX_CONNECTIONS: &str = "DB_MAX_CONNECTIONS";
pub const ENV_SEED_DEMO_DATA: &str = "SEED_DEMO_DATA";

impl DbConfig {
    /// Read the six connection variables. Unset variables become empty strings.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).unwrap_or_default();
        DbConfig {
            dialect: get(ENV_DIALECT),
            host: get(ENV_HOST),
            port: get(ENV_DB_PORT),
            user: get(ENV_USER),
            name: get(ENV_NAME),
            password: get(ENV_PASSWORD),
        }
    }

    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }
}

impl ServerConfig {
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let listen_addr = lookup(ENV_LISTEN_ADDR)
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .unwrap_or_else(|| DEFAULT_LISTEN_ADDR.to_string());

        let max_connections = match lookup(ENV_MAX_CONNECTIONS).filter(|s| !s.trim().is_empty()) {
            Some(raw) => raw
                .trim()
                .parse::<u32>()
                .ok()
                .filter(|n| *n > 0)
                .ok_or(ConfigError::InvalidValue {
                    key: ENV_MAX_CONNECTIONS,
                    value: raw,
                })?,
            None => DEFAULT_MAX_CONNECTIONS,
        };

        let seed_demo_data = match lookup(ENV_SEED_DEMO_DATA) {
            Some(raw) => parse_flag(&raw).ok_or(ConfigError::InvalidValue {
                key: ENV_SEED_DEMO_DATA,
                value: raw,
            })?,
            None => false,
        };

        Ok(ServerConfig {
            listen_addr,
            max_connections,
            seed_demo_data,
        })
    }

    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }
}

fn parse_flag(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "" | "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
