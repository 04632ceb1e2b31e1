//! HTTP listener configuration.

use std::net::{IpAddr, SocketAddr};

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

fn default_host() -> String {
    "127.0.0.1".to_string()
}

/// Default listen port.
const fn default_port() -> u16 {
    5555
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServerConfig {
    /// IP address to bind (e.g., `0.0.0.0` to listen on all interfaces).
    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

impl ServerConfig {
    /// Resolve `host` and `port` into a socket address.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` if `host` is not an IP address.
    pub fn bind_addr(&self) -> Result<SocketAddr, ConfigError> {
        let ip: IpAddr = self.host.parse().map_err(|e| ConfigError::InvalidValue {
            field: "server.host".into(),
            reason: format!("'{}' is not an IP address: {e}", self.host),
        })?;
        Ok(SocketAddr::new(ip, self.port))
    }
}
