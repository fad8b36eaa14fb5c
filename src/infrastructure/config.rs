//! Database configuration
//!
//! Connection parameters come from `FLYWAY_DB`, `FLYWAY_USER` and
//! `FLYWAY_PASS`, the same variables the migration tooling reads. JDBC
//! style URLs (`jdbc:postgresql://...`) are accepted.

use sqlx::postgres::PgConnectOptions;
use std::str::FromStr;
use thiserror::Error;

pub const DATABASE_URL_ENV: &str = "FLYWAY_DB";
pub const DATABASE_USER_ENV: &str = "FLYWAY_USER";
pub const DATABASE_PASSWORD_ENV: &str = "FLYWAY_PASS";

pub const DEFAULT_DATABASE_URL: &str = "jdbc:postgresql://localhost:5432/adm_videos";
pub const DEFAULT_DATABASE_USER: &str = "postgres";
pub const DEFAULT_DATABASE_PASSWORD: &str = "root";
pub const DEFAULT_MAX_CONNECTIONS: u32 = 10;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid database url '{url}': {reason}")]
    InvalidDatabaseUrl { url: String, reason: String },
}

#[derive(Clone, PartialEq, Eq)]
pub struct DatabaseConfig {
    /// 数据库地址，可带 `jdbc:` 前缀
    pub url: String,
    pub user: String,
    pub password: String,
    /// 连接池上限
    pub max_connections: u32,
}

impl DatabaseConfig {
    pub fn new(
        url: impl Into<String>,
        user: impl Into<String>,
        password: impl Into<String>,
        max_connections: u32,
    ) -> Self {
        Self {
            url: url.into(),
            user: user.into(),
            password: password.into(),
            max_connections,
        }
    }

    /// Reads the connection parameters from the environment, falling back
    /// to the local development defaults
    pub fn from_env() -> Self {
        let var = |name: &str, default: &str| std::env::var(name).unwrap_or_else(|_| default.to_string());

        Self::new(
            var(DATABASE_URL_ENV, DEFAULT_DATABASE_URL),
            var(DATABASE_USER_ENV, DEFAULT_DATABASE_USER),
            var(DATABASE_PASSWORD_ENV, DEFAULT_DATABASE_PASSWORD),
            DEFAULT_MAX_CONNECTIONS,
        )
    }

    /// The URL in the form the Postgres driver understands
    pub fn driver_url(&self) -> &str {
        self.url.strip_prefix("jdbc:").unwrap_or(&self.url)
    }

    /// Connection options with the configured credentials applied
    pub fn connect_options(&self) -> Result<PgConnectOptions, ConfigError> {
        let options = PgConnectOptions::from_str(self.driver_url()).map_err(|e| {
            ConfigError::InvalidDatabaseUrl {
                url: self.url.clone(),
                reason: e.to_string(),
            }
        })?;

        Ok(options.username(&self.user).password(&self.password))
    }
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self::new(
            DEFAULT_DATABASE_URL,
            DEFAULT_DATABASE_USER,
            DEFAULT_DATABASE_PASSWORD,
            DEFAULT_MAX_CONNECTIONS,
        )
    }
}

// Keeps the password out of logs.
impl std::fmt::Debug for DatabaseConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DatabaseConfig")
            .field("url", &self.url)
            .field("user", &self.user)
            .field("password", &"***")
            .field("max_connections", &self.max_connections)
            .finish()
    }
}
