//! Server configuration from environment variables.

use std::net::{IpAddr, Ipv4Addr, SocketAddr};

use thiserror::Error;

use crate::telemetry::DEFAULT_LOG_FILTER;

pub const HOST_ENV: &str = "PWD_STRENGTH_HOST";
pub const PORT_ENV: &str = "PWD_STRENGTH_PORT";
pub const LOG_ENV: &str = "RUST_LOG";

pub const DEFAULT_PORT: u16 = 8000;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Invalid {var} value '{value}': {reason}")]
    Invalid {
        var: &'static str,
        value: String,
        reason: String,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub host: IpAddr,
    pub port: u16,
    pub log_filter: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: IpAddr::V4(Ipv4Addr::UNSPECIFIED),
            port: DEFAULT_PORT,
            log_filter: DEFAULT_LOG_FILTER.to_string(),
        }
    }
}

impl ServerConfig {
    /// Reads the configuration from the environment.
    ///
    /// Priority for each value:
    /// 1. Environment variable (`PWD_STRENGTH_HOST`, `PWD_STRENGTH_PORT`, `RUST_LOG`)
    /// 2. Default (`0.0.0.0`, `8000`, `info,tower_http=debug`)
    ///
    /// # Errors
    ///
    /// Returns error if the host is not an IP address or the port is not a `u16`.
    pub fn from_env() -> Result<Self, ConfigError> {
        let defaults = Self::default();

        let host = match std::env::var(HOST_ENV) {
            Ok(value) => value.parse::<IpAddr>().map_err(|e| {
                ConfigError::Invalid {
                    var: HOST_ENV,
                    reason: e.to_string(),
                    value,
                }
            })?,
            Err(_) => defaults.host,
        };

        let port = match std::env::var(PORT_ENV) {
            Ok(value) => value.parse::<u16>().map_err(|e| {
                ConfigError::Invalid {
                    var: PORT_ENV,
                    reason: e.to_string(),
                    value,
                }
            })?,
            Err(_) => defaults.port,
        };

        let log_filter = std::env::var(LOG_ENV).unwrap_or(defaults.log_filter);

        Ok(Self {
            host,
            port,
            log_filter,
        })
    }

    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}
