//! Server configuration parsed from environment variables.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use std::net::{IpAddr, Ipv4Addr, SocketAddr};

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_HOST: IpAddr = IpAddr::V4(Ipv4Addr::UNSPECIFIED);

#[derive(Debug, thiserror::Error)]
pub enum ServerConfigError {
    #[error("invalid PORT: {0}")]
    InvalidPort(String),
    #[error("invalid HOST: {0}")]
    InvalidHost(String),
    #[error("leptos configuration: {0}")]
    Leptos(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ServerConfig {
    pub host: IpAddr,
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self { host: DEFAULT_HOST, port: DEFAULT_PORT }
    }
}

impl ServerConfig {
    /// Build typed server config from environment variables.
    ///
    /// Optional:
    /// - `HOST`: bind address, default `0.0.0.0`
    /// - `PORT`: default 3000
    ///
    /// # Errors
    ///
    /// Returns an error when either variable is set but unparseable.
    pub fn from_env() -> Result<Self, ServerConfigError> {
        Self::from_values(std::env::var("HOST").ok().as_deref(), std::env::var("PORT").ok().as_deref())
    }

    /// Parse raw values; blank counts as absent.
    ///
    /// # Errors
    ///
    /// Returns an error when a present value does not parse.
    pub fn from_values(host: Option<&str>, port: Option<&str>) -> Result<Self, ServerConfigError> {
        let host = match non_blank(host) {
            Some(raw) => raw.parse().map_err(|_| ServerConfigError::InvalidHost(raw.to_owned()))?,
            None => DEFAULT_HOST,
        };
        let port = match non_blank(port) {
            Some(raw) => raw.parse().map_err(|_| ServerConfigError::InvalidPort(raw.to_owned()))?,
            None => DEFAULT_PORT,
        };
        Ok(Self { host, port })
    }

    #[must_use]
    pub fn bind_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

fn non_blank(raw: Option<&str>) -> Option<&str> {
    raw.map(str::trim).filter(|v| !v.is_empty())
}
