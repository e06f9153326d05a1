use super::errors::ConfigError;
use serde::{Deserialize, Serialize};
use std::net::{IpAddr, SocketAddr};

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServerConfig {
    #[serde(default = "default_listen_port")]
    pub listen_port: u16,

    #[serde(default = "default_bind_address")]
    pub bind_address: String,

    /// Handle each datagram on its own task instead of one at a time.
    #[serde(default)]
    pub concurrent: bool,
}

impl ServerConfig {
    /// Listen address. IPv6 addresses are given bare, e.g. `::`.
    pub fn socket_addr(&self) -> Result<SocketAddr, ConfigError> {
        let ip: IpAddr = self.bind_address.trim().parse().map_err(|_| {
            ConfigError::Validation(format!(
                "Bind address '{}' is not an IP address",
                self.bind_address
            ))
        })?;
        Ok(SocketAddr::new(ip, self.listen_port))
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            listen_port: default_listen_port(),
            bind_address: default_bind_address(),
            concurrent: false,
        }
    }
}

fn default_listen_port() -> u16 {
    5353
}

fn default_bind_address() -> String {
    "0.0.0.0".to_string()
}
