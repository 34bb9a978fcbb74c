// src/config.rs
use std::{env, time::Duration};
use thiserror::Error;

#[derive(Clone, Debug)]
pub struct AppConfig {
    database_url: String,
    listen_addr: String,
    session_ttl: Duration,
    admin_credentials: Option<AdminCredentials>,
}

/// Seed credentials for the first admin account, applied only when the
/// user table is empty at startup.
#[derive(Clone, Debug)]
pub struct AdminCredentials {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing environment variable: {0}")]
    Missing(&'static str),
    #[error("invalid configuration: {0}")]
    Invalid(String),
}

fn default_database_url() -> String {
    "sqlite:newsroom.db?mode=rwc".into()
}

fn default_listen_addr() -> String {
    "127.0.0.1:8080".into()
}

fn default_session_ttl() -> u64 {
    3600
}

impl AppConfig {
    /// Build configuration from environment variables. Uses sensible
    /// defaults for optional values and validates the rest.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Allow dotenv files to populate env vars when present.
        dotenvy::dotenv().ok();

        let database_url = env::var("DATABASE_URL").unwrap_or_else(|_| default_database_url());
        let listen_addr = env::var("LISTEN_ADDR").unwrap_or_else(|_| default_listen_addr());

        let session_ttl_secs = match env::var("SESSION_TTL_SECONDS") {
            Ok(raw) => raw.parse::<u64>().map_err(|_| {
                ConfigError::Invalid("SESSION_TTL_SECONDS must be a positive integer".into())
            })?,
            Err(_) => default_session_ttl(),
        };
        if session_ttl_secs == 0 {
            return Err(ConfigError::Invalid(
                "SESSION_TTL_SECONDS must be non-zero".into(),
            ));
        }

        let admin_credentials = match (env::var("ADMIN_USERNAME"), env::var("ADMIN_PASSWORD")) {
            (Ok(username), Ok(password)) => Some(AdminCredentials { username, password }),
            (Ok(_), Err(_)) => return Err(ConfigError::Missing("ADMIN_PASSWORD")),
            (Err(_), Ok(_)) => return Err(ConfigError::Missing("ADMIN_USERNAME")),
            (Err(_), Err(_)) => None,
        };

        Ok(Self {
            database_url,
            listen_addr,
            session_ttl: Duration::from_secs(session_ttl_secs),
            admin_credentials,
        })
    }

    pub fn database_url(&self) -> &str {
        &self.database_url
    }

    pub fn listen_addr(&self) -> &str {
        &self.listen_addr
    }

    pub fn session_ttl(&self) -> Duration {
        self.session_ttl
    }

    pub fn admin_credentials(&self) -> Option<&AdminCredentials> {
        self.admin_credentials.as_ref()
    }
}
