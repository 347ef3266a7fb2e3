//! Server configuration.
//!
//! Values come from the environment with sensible defaults:
//!
//! - `TRIP_SERVER_ADDR`: listen address (default `127.0.0.1:8000`)
//! - `TRIP_CATALOG_PATH`: optional JSON reference catalog
//! - `OSRM_BASE_URL`: optional OSRM endpoint; enables driving routes
//! - `OSRM_TIMEOUT_SECS`: OSRM request timeout (default 12)

use std::net::SocketAddr;
use std::path::PathBuf;

/// Default OSRM request timeout in seconds.
const DEFAULT_OSRM_TIMEOUT_SECS: u64 = 12;

/// Configuration errors.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    /// An environment variable held an unusable value.
    #[error("invalid value for {name}: {value:?}")]
    InvalidValue { name: &'static str, value: String },
}

/// Configuration for the HTTP server.
#[derive(Debug, Clone, PartialEq)]
pub struct ServerConfig {
    /// Address to listen on.
    pub addr: SocketAddr,
    /// Reference catalog file; built-in tables when `None`.
    pub catalog_path: Option<PathBuf>,
    /// OSRM base URL; routing backend disabled when `None`.
    pub osrm_base_url: Option<String>,
    /// OSRM request timeout in seconds.
    pub osrm_timeout_secs: u64,
}

impl ServerConfig {
    /// Read the configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Read the configuration through a variable lookup function.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |name: &str| lookup(name).filter(|v| !v.trim().is_empty());
        let mut config = Self::default();

        if let Some(value) = get("TRIP_SERVER_ADDR") {
            config.addr = value
                .trim()
                .parse::<SocketAddr>()
                .map_err(|_| ConfigError::InvalidValue {
                    name: "TRIP_SERVER_ADDR",
                    value,
                })?;
        }

        config.catalog_path = get("TRIP_CATALOG_PATH").map(PathBuf::from);
        config.osrm_base_url = get("OSRM_BASE_URL").map(|v| v.trim().to_string());

        if let Some(value) = get("OSRM_TIMEOUT_SECS") {
            config.osrm_timeout_secs = value
                .trim()
                .parse::<u64>()
                .ok()
                .filter(|secs| *secs > 0)
                .ok_or(ConfigError::InvalidValue {
                    name: "OSRM_TIMEOUT_SECS",
                    value,
                })?;
        }

        Ok(config)
    }

    /// Set the listen address.
    pub fn with_addr(mut self, addr: SocketAddr) -> Self {
        self.addr = addr;
        self
    }

    /// Use a catalog file.
    pub fn with_catalog_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.catalog_path = Some(path.into());
        self
    }

    /// Enable the OSRM routing backend.
    pub fn with_osrm(mut self, base_url: impl Into<String>) -> Self {
        self.osrm_base_url = Some(base_url.into());
        self
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            addr: SocketAddr::from(([127, 0, 0, 1], 8000)),
            catalog_path: None,
            osrm_base_url: None,
            osrm_timeout_secs: DEFAULT_OSRM_TIMEOUT_SECS,
        }
    }
}
