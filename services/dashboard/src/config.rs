//! Service configuration
//!
//! Defaults are layered under environment variables prefixed with
//! `HEALTHDESK_`, using `__` between nested keys
//! (e.g. `HEALTHDESK_SERVER__PORT=8080`, `HEALTHDESK_SESSION__BACKEND=redis`).

use config::{Config, ConfigError, Environment};
use serde::Deserialize;

use crate::session::SESSION_KEY;

/// Where session blobs are persisted
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SessionBackend {
    Redis,
    Memory,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SessionSettings {
    pub backend: SessionBackend,
    /// Prefix of every session key
    pub key_prefix: String,
    /// Expiry of persisted sessions; none means they live until logout
    pub ttl_seconds: Option<u64>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RedisSettings {
    pub url: String,
}

/// Top-level configuration
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub session: SessionSettings,
    pub redis: RedisSettings,
}

impl AppConfig {
    /// Load configuration from defaults and `HEALTHDESK_*` variables
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::load(
            Environment::with_prefix("HEALTHDESK")
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        )
    }

    fn load(environment: Environment) -> Result<Self, ConfigError> {
        Config::builder()
            .set_default("server.host", "0.0.0.0")?
            .set_default("server.port", 3000)?
            .set_default("session.backend", "memory")?
            .set_default("session.key_prefix", SESSION_KEY)?
            .set_default("redis.url", "redis://localhost:6379")?
            .add_source(environment)
            .build()?
            .try_deserialize()
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}
