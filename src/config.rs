//! Application configuration loaded from environment variables.

use std::net::{IpAddr, SocketAddr};

use serde::Deserialize;

use crate::error::VidlyError;

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    // === Server Configuration ===
    /// Address the HTTP server binds to.
    #[serde(default = "default_addr")]
    pub addr: String,

    /// Port the HTTP server listens on.
    #[serde(default = "default_port")]
    pub port: u16,

    // === Logging ===
    /// Log level (trace, debug, info, warn, error).
    #[serde(default = "default_log_level")]
    pub rust_log: String,

    /// Enable verbose logging.
    #[serde(default)]
    pub verbose: bool,
}

fn default_addr() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    3000
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Config {
    /// Load configuration from environment, reading .env file first.
    pub fn load() -> Result<Self, VidlyError> {
        dotenvy::dotenv().ok();
        Ok(envy::from_env()?)
    }

    /// Check if the configuration is valid.
    pub fn validate(&self) -> Result<(), String> {
        if self.port == 0 {
            return Err("PORT must be nonzero".to_string());
        }

        if self.addr.parse::<IpAddr>().is_err() {
            return Err(format!("ADDR is not a valid IP address: {}", self.addr));
        }

        Ok(())
    }

    /// Socket address the server binds to.
    pub fn socket_addr(&self) -> Result<SocketAddr, VidlyError> {
        Ok(format!("{}:{}", self.addr, self.port).parse()?)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            addr: default_addr(),
            port: default_port(),
            rust_log: default_log_level(),
            verbose: false,
        }
    }
}
