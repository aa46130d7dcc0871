//! Peer set
//!
//! The ordered, immutable list of nodes a write is replicated to.

use crate::error::{CacheError, Result};

/// Peers in replication order, excluding this node
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PeerSet {
    peers: Vec<String>,
}

impl PeerSet {
    /// Use `peers` as given
    pub fn new(peers: Vec<String>) -> Self {
        Self { peers }
    }

    /// Build the peer set from a supplied list, dropping this node's own
    /// address.
    ///
    /// Every entry equal to `self_address` is removed and the order of the
    /// rest is kept. When nothing matches the list is returned unchanged.
    pub fn resolve(peers: Vec<String>, self_address: &str) -> Self {
        let before = peers.len();
        let peers: Vec<String> = peers
            .into_iter()
            .filter(|peer| peer.as_str() != self_address)
            .collect();

        if peers.len() == before {
            tracing::warn!(
                "Own address {} not found in peer list, replicating to all {} peers",
                self_address,
                before
            );
        }

        Self { peers }
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.peers.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.peers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.peers.is_empty()
    }

    pub fn as_slice(&self) -> &[String] {
        &self.peers
    }
}

/// Host name of this machine, as used in peer addresses
pub fn local_hostname() -> Result<String> {
    let host = hostname::get().map_err(|e| CacheError::Hostname(e.to_string()))?;
    host.into_string()
        .map_err(|raw| CacheError::Hostname(format!("not valid UTF-8: {:?}", raw)))
}
