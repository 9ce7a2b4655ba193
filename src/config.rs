//! HTTP server configuration

use std::net::SocketAddr;

/// Environment variable holding the listen address
pub const ADDR_VAR: &str = "MGRS_API_ADDR";
/// Environment variable holding the request body limit in bytes
pub const BODY_LIMIT_VAR: &str = "MGRS_API_BODY_LIMIT";

const DEFAULT_ADDR: &str = "0.0.0.0:3000";
const DEFAULT_BODY_LIMIT: usize = 100 * 1024 * 1024;

/// Invalid configuration value
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid value {value:?} for {var}")]
pub struct ConfigError {
    pub var: &'static str,
    pub value: String,
}

/// Settings for the API server
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub bind_addr: SocketAddr,
    /// Largest accepted upload, in bytes
    pub body_limit_bytes: usize,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: SocketAddr::from(([0, 0, 0, 0], 3000)),
            body_limit_bytes: DEFAULT_BODY_LIMIT,
        }
    }
}

impl ServerConfig {
    /// Reads the configuration from the process environment
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Builds the configuration from any variable lookup; unset variables
    /// take their defaults
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let addr = lookup(ADDR_VAR).unwrap_or_else(|| DEFAULT_ADDR.to_string());
        let bind_addr = addr.trim().parse().map_err(|_| ConfigError {
            var: ADDR_VAR,
            value: addr.clone(),
        })?;

        let body_limit_bytes = match lookup(BODY_LIMIT_VAR) {
            Some(value) => value.trim().parse().map_err(|_| ConfigError {
                var: BODY_LIMIT_VAR,
                value,
            })?,
            None => DEFAULT_BODY_LIMIT,
        };

        Ok(Self {
            bind_addr,
            body_limit_bytes,
        })
    }
}
