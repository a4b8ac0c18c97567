//! Configuration for nullkv
//!
//! Centralized configuration with sensible defaults, overridable from the
//! environment (`NULL_HOST`, `NULL_PORT`) or through the builder.

use crate::error::{KvError, Result};

/// Environment variable naming the server host
pub const HOST_ENV: &str = "NULL_HOST";

/// Environment variable naming the server port
pub const PORT_ENV: &str = "NULL_PORT";

/// Shared configuration for the server and the client
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    // -------------------------------------------------------------------------
    // Network Configuration
    // -------------------------------------------------------------------------
    /// Host the server binds to and the client connects to
    pub host: String,

    /// TCP port of the HTTP endpoint
    pub port: u16,

    // -------------------------------------------------------------------------
    // Client Configuration
    // -------------------------------------------------------------------------
    /// Per-request timeout applied by the client (milliseconds, 0 = none)
    pub request_timeout_ms: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: "localhost".to_string(),
            port: 4567,
            request_timeout_ms: 5000,
        }
    }
}

impl Config {
    /// Create a new config builder
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::default()
    }

    /// Defaults overridden by `NULL_HOST` / `NULL_PORT`
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Defaults overridden by whatever `lookup` returns for the two
    /// environment variable names
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Config::default();

        if let Some(host) = lookup(HOST_ENV) {
            config.host = host;
        }

        if let Some(port) = lookup(PORT_ENV) {
            config.port = port.trim().parse().map_err(|_| {
                KvError::Config(format!("{} is not a valid port: {:?}", PORT_ENV, port))
            })?;
        }

        Ok(config)
    }

    /// `host:port`, suitable for binding a listener
    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Base URL the client prefixes to every route
    pub fn base_url(&self) -> String {
        format!("http://{}", self.addr())
    }
}

/// Builder for Config
#[derive(Default)]
pub struct ConfigBuilder {
    config: Config,
}

impl ConfigBuilder {
    /// Start from an existing config instead of the defaults
    pub fn from_config(config: Config) -> Self {
        Self { config }
    }

    /// Set the host
    pub fn host(mut self, host: impl Into<String>) -> Self {
        self.config.host = host.into();
        self
    }

    /// Set the port
    pub fn port(mut self, port: u16) -> Self {
        self.config.port = port;
        self
    }

    /// Set the client request timeout (in milliseconds)
    pub fn request_timeout_ms(mut self, ms: u64) -> Self {
        self.config.request_timeout_ms = ms;
        self
    }

    pub fn build(self) -> Config {
        self.config
    }
}
