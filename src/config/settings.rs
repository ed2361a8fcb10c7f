//! Application settings loaded from environment variables.

use std::env;
use std::fmt;
use std::str::FromStr;

use super::constants::{
    DEFAULT_DATABASE_MAX_CONNECTIONS, DEFAULT_DATABASE_URL, DEFAULT_SERVER_HOST,
    DEFAULT_SERVER_PORT, POLICY_IGNORE, POLICY_NOT_FOUND,
};

/// How update/delete respond when the target enrollment does not exist.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MissingRecordPolicy {
    /// Answer with `404 Not Found`
    #[default]
    NotFound,
    /// Report success without touching storage (legacy behavior)
    Ignore,
}

impl FromStr for MissingRecordPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            POLICY_NOT_FOUND => Ok(Self::NotFound),
            POLICY_IGNORE => Ok(Self::Ignore),
            other => Err(format!(
                "unknown missing record policy '{}', expected '{}' or '{}'",
                other, POLICY_NOT_FOUND, POLICY_IGNORE
            )),
        }
    }
}

impl fmt::Display for MissingRecordPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotFound => write!(f, "{}", POLICY_NOT_FOUND),
            Self::Ignore => write!(f, "{}", POLICY_IGNORE),
        }
    }
}

/// Application configuration
#[derive(Clone)]
pub struct Config {
    pub database_url: String,
    pub database_max_connections: u32,
    pub server_host: String,
    pub server_port: u16,
    pub missing_records: MissingRecordPolicy,
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("database_url", &"[REDACTED]")
            .field("database_max_connections", &self.database_max_connections)
            .field("server_host", &self.server_host)
            .field("server_port", &self.server_port)
            .field("missing_records", &self.missing_records)
            .finish()
    }
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// The connection string is looked up as `VESTIBULAR_DB_URL` first,
    /// then `DATABASE_URL`.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        let missing_records = match env::var("MISSING_RECORD_POLICY") {
            Ok(raw) => raw.parse().unwrap_or_else(|e| {
                tracing::warn!("{}; falling back to '{}'", e, MissingRecordPolicy::default());
                MissingRecordPolicy::default()
            }),
            Err(_) => MissingRecordPolicy::default(),
        };

        Self {
            database_url: env::var("VESTIBULAR_DB_URL")
                .or_else(|_| env::var("DATABASE_URL"))
                .unwrap_or_else(|_| DEFAULT_DATABASE_URL.to_string()),
            database_max_connections: env::var("DATABASE_MAX_CONNECTIONS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(DEFAULT_DATABASE_MAX_CONNECTIONS),
            server_host: env::var("SERVER_HOST")
                .unwrap_or_else(|_| DEFAULT_SERVER_HOST.to_string()),
            server_port: env::var("SERVER_PORT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(DEFAULT_SERVER_PORT),
            missing_records,
        }
    }

    /// Get the full server address.
    pub fn server_addr(&self) -> String {
        format!("{}:{}", self.server_host, self.server_port)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database_url: DEFAULT_DATABASE_URL.to_string(),
            database_max_connections: DEFAULT_DATABASE_MAX_CONNECTIONS,
            server_host: DEFAULT_SERVER_HOST.to_string(),
            server_port: DEFAULT_SERVER_PORT,
            missing_records: MissingRecordPolicy::default(),
        }
    }
}
