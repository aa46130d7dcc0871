//! Replication coordinator
//!
//! Pushes a local mutation to every peer, one after another.

use std::time::Duration;

use reqwest::{Client, RequestBuilder};

use crate::error::{CacheError, Result};
use crate::protocol::{sync_url, SyncCommand};
use super::PeerSet;

/// Sends sync messages to the peer set
#[derive(Debug, Clone)]
pub struct Replicator {
    /// Shared HTTP client (read-only after construction)
    client: Client,

    /// Peers in replication order
    peers: PeerSet,
}

impl Replicator {
    /// Create a replicator. `timeout` bounds each peer call; `None` leaves
    /// calls unbounded.
    pub fn new(peers: PeerSet, timeout: Option<Duration>) -> Result<Self> {
        let mut builder = Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder
            .build()
            .map_err(|e| CacheError::Config(format!("can't build HTTP client: {}", e)))?;

        Ok(Self { client, peers })
    }

    pub fn peers(&self) -> &PeerSet {
        &self.peers
    }

    /// Send `command` to every peer in order.
    ///
    /// Stops at the first failure and returns it. Peers before the failing
    /// one keep the change; the failing peer and those after it never see it.
    pub async fn replicate(&self, command: &SyncCommand) -> Result<()> {
        for peer in self.peers.iter() {
            self.sync_peer(peer, command).await?;
        }
        Ok(())
    }

    /// One replication hop
    async fn sync_peer(&self, peer: &str, command: &SyncCommand) -> Result<()> {
        let key = command.key();
        let url = sync_url(peer, key)?;
        tracing::debug!("sync value with address: {}", url);

        let response = self
            .request(url, command)
            .send()
            .await
            .map_err(|e| CacheError::Replication {
                peer: peer.to_string(),
                key: key.to_string(),
                message: e.to_string(),
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(CacheError::PeerStatus {
                peer: peer.to_string(),
                key: key.to_string(),
                status: status.as_u16(),
            });
        }

        tracing::debug!("sync key: {} with peer: {} done", key, peer);
        Ok(())
    }

    fn request(&self, url: reqwest::Url, command: &SyncCommand) -> RequestBuilder {
        match command {
            SyncCommand::Put { value, .. } => self.client.put(url).body(value.clone()),
            SyncCommand::Delete { .. } => self.client.delete(url),
        }
    }
}
