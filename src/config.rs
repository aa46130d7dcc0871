//! Configuration for PeerCache
//!
//! Centralized configuration with sensible defaults.

use std::time::Duration;

/// Main configuration for a PeerCache node
#[derive(Debug, Clone)]
pub struct Config {
    // -------------------------------------------------------------------------
    // Network Configuration
    // -------------------------------------------------------------------------
    /// HTTP listen port. Also the port half of this node's own address.
    pub port: u16,

    /// Interface to bind the listener on
    pub bind_host: String,

    // -------------------------------------------------------------------------
    // Replication Configuration
    // -------------------------------------------------------------------------
    /// Peer addresses (host:port) as supplied, possibly including this node
    pub peers: Vec<String>,

    /// Host name used to recognise this node in `peers`.
    /// `None` means resolve the machine hostname at startup.
    pub self_host: Option<String>,

    /// Per-request timeout for replication calls (milliseconds).
    /// `None` leaves the HTTP client without a timeout.
    pub peer_timeout_ms: Option<u64>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            port: 5555,
            bind_host: "0.0.0.0".to_string(),
            peers: Vec::new(),
            self_host: None,
            peer_timeout_ms: None,
        }
    }
}

impl Config {
    /// Create a new config builder
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::default()
    }

    /// Address the HTTP listener binds to
    pub fn listen_addr(&self) -> String {
        format!("{}:{}", self.bind_host, self.port)
    }

    /// This node's address as it would appear in a peer list
    pub fn self_address(&self, host: &str) -> String {
        format!("{}:{}", host, self.port)
    }

    pub fn peer_timeout(&self) -> Option<Duration> {
        self.peer_timeout_ms.map(Duration::from_millis)
    }
}

/// Builder for Config
#[derive(Default)]
pub struct ConfigBuilder {
    config: Config,
}

impl ConfigBuilder {
    /// Set the HTTP listen port
    pub fn port(mut self, port: u16) -> Self {
        self.config.port = port;
        self
    }

    /// Set the interface to bind on
    pub fn bind_host(mut self, host: impl Into<String>) -> Self {
        self.config.bind_host = host.into();
        self
    }

    /// Set the peer list (host:port entries)
    pub fn peers<I, S>(mut self, peers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.config.peers = peers.into_iter().map(Into::into).collect();
        self
    }

    /// Override the host name used for self-address removal
    pub fn self_host(mut self, host: impl Into<String>) -> Self {
        self.config.self_host = Some(host.into());
        self
    }

    /// Set the replication request timeout (in milliseconds)
    pub fn peer_timeout_ms(mut self, ms: u64) -> Self {
        self.config.peer_timeout_ms = Some(ms);
        self
    }

    pub fn build(self) -> Config {
        self.config
    }
}
