pub mod constants;

use std::env;
use std::net::{IpAddr, Ipv4Addr, SocketAddr};

/// Network and client identity settings for the HTTP server
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    /// Address to bind (default: 0.0.0.0)
    pub host: IpAddr,

    /// Port to bind (default: 3000)
    pub port: u16,

    /// Use the first X-Forwarded-For entry as the client identifier
    /// (default: false)
    pub trust_forwarded_for: bool,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: IpAddr::V4(Ipv4Addr::UNSPECIFIED),
            port: 3000,
            trust_forwarded_for: false,
        }
    }
}

impl ServerConfig {
    /// Load server configuration from environment variables
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load server configuration from an arbitrary key lookup
    ///
    /// Invalid values are reported and replaced by their defaults.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(host) = lookup("HOST") {
            match host.parse() {
                Ok(addr) => config.host = addr,
                Err(_) => tracing::warn!(value = %host, "Ignoring invalid HOST"),
            }
        }

        if let Some(port) = lookup("PORT") {
            match port.parse() {
                Ok(port) => config.port = port,
                Err(_) => tracing::warn!(value = %port, "Ignoring invalid PORT"),
            }
        }

        if let Some(val) = lookup("TRUST_FORWARDED_FOR") {
            config.trust_forwarded_for = val.to_lowercase() == "true";
        }

        config
    }

    pub fn bind_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}
