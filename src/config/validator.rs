//! Turn raw connection settings into driver options.

use crate::config::types::DbConfig;
use crate::error::ConfigError;
use sqlx::postgres::{PgConnectOptions, PgSslMode};

const SUPPORTED_DIALECTS: &[&str] = &["postgres", "postgresql"];

impl DbConfig {
    /// Only the PostgreSQL driver is linked in.
    pub fn check_dialect(&self) -> Result<(), ConfigError> {
        let dialect = self.dialect.trim().to_ascii_lowercase();
        if SUPPORTED_DIALECTS.contains(&dialect.as_str()) {
            Ok(())
        } else {
            Err(ConfigError::UnsupportedDialect(self.dialect.clone()))
        }
    }

    /// Connection options equivalent to
    /// `host=.. user=.. dbname=.. sslmode=disable password=.. port=..`.
    /// Empty values are passed through unchanged.
    pub fn connect_options(&self) -> Result<PgConnectOptions, ConfigError> {
        self.check_dialect()?;
        let port: u16 = self
            .port
            .trim()
            .parse()
            .map_err(|_| ConfigError::InvalidPort(self.port.clone()))?;
        Ok(PgConnectOptions::new()
            .host(&self.host)
            .port(port)
            .username(&self.user)
            .database(&self.name)
            .password(&self.password)
            .ssl_mode(PgSslMode::Disable))
    }

    /// Key/value connection string with the password redacted, for logs.
    pub fn dsn(&self) -> String {
        let password = if self.password.is_empty() { "" } else { "***" };
        format!(
            "host={} user={} dbname={} sslmode=disable password={} port={}",
            self.host, self.user, self.name, password, self.port
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> DbConfig {
        DbConfig {
            dialect: "postgres".into(),
            host: "localhost".into(),
            port: "5432".into(),
            user: "jack".into(),
            name: "library".into(),
            password: "hunter2".into(),
        }
    }

    #[test]
    fn accepts_postgres_dialects() {
        assert!(sample().check_dialect().is_ok());
        let cfg = DbConfig { dialect: "PostgreSQL".into(), ..sample() };
        assert!(cfg.check_dialect().is_ok());
    }

    #[test]
    fn rejects_other_dialects() {
        for dialect in ["mysql", "sqlite3", ""] {
            let cfg = DbConfig { dialect: dialect.into(), ..sample() };
            assert!(matches!(
                cfg.connect_options(),
                Err(ConfigError::UnsupportedDialect(d)) if d == dialect
            ));
        }
    }

    #[test]
    fn rejects_non_numeric_port() {
        let cfg = DbConfig { port: "".into(), ..sample() };
        assert!(matches!(cfg.connect_options(), Err(ConfigError::InvalidPort(_))));
        let cfg = DbConfig { port: "54x".into(), ..sample() };
        assert!(matches!(cfg.connect_options(), Err(ConfigError::InvalidPort(p)) if p == "54x"));
    }

    #[test]
    fn builds_connect_options() {
        let opts = sample().connect_options().unwrap();
        assert_eq!(opts.get_host(), "localhost");
        assert_eq!(opts.get_port(), 5432);
        assert_eq!(opts.get_username(), "jack");
        assert_eq!(opts.get_database(), Some("library"));
    }

    #[test]
    fn dsn_redacts_password() {
        assert_eq!(
            sample().dsn(),
            "host=localhost user=jack dbname=library sslmode=disable password=*** port=5432"
        );
    }
}
