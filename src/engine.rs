//! Engine Module
//!
//! The node runtime context: one store, one replicator, passed to every
//! handler.
//!
//! ## Responsibilities
//! - Execute client and sync commands against the store
//! - Fan client writes and deletes out to the peer set
//! - Hold the store lock for the whole command, replication included

use std::sync::Arc;

use crate::config::Config;
use crate::error::{CacheError, Result};
use crate::protocol::{Command, Reply, SyncCommand};
use crate::replication::{apply_sync, local_hostname, PeerSet, Replicator};
use crate::store::Store;

/// The main cache engine
///
/// ## Concurrency Model: One Lock, Held End-to-End
///
/// `execute` takes the store lock before touching the map and keeps it until
/// the command is finished. For PUT and DELETE that includes the complete
/// peer fan-out, so two local writes never interleave their replication
/// sequences, and a slow peer stalls every other request on this node.
///
/// A failed fan-out leaves the local mutation (and any peer already synced)
/// in place.
#[derive(Debug)]
pub struct Engine {
    /// Authoritative local state
    store: Store,

    /// Outbound replication to peers
    replicator: Replicator,
}

impl Engine {
    /// Create an engine from its parts
    pub fn new(store: Store, replicator: Replicator) -> Self {
        Self { store, replicator }
    }

    /// Build an engine from config
    ///
    /// On startup:
    /// 1. Determine this node's host (configured override or machine hostname)
    /// 2. Remove `host:port` from the configured peers
    /// 3. Create the HTTP client and an empty store
    pub fn open(config: &Config) -> Result<Self> {
        let host = match &config.self_host {
            Some(host) => host.clone(),
            None => local_hostname()?,
        };
        let self_address = config.self_address(&host);

        let peers = PeerSet::resolve(config.peers.clone(), &self_address);
        tracing::info!("Node address: {}, peers: {:?}", self_address, peers.as_slice());

        let replicator = Replicator::new(peers, config.peer_timeout())?;
        Ok(Self::new(Store::new(), replicator))
    }

    /// Open and wrap in an `Arc` for sharing across handlers
    pub fn open_shared(config: &Config) -> Result<Arc<Self>> {
        Self::open(config).map(Arc::new)
    }

    /// Execute a command
    ///
    /// Routes commands to the store, and on to the replicator for client
    /// writes. The store lock is released when this returns, on every path.
    pub async fn execute(&self, command: Command) -> Result<Reply> {
        tracing::trace!(
            "Executing {} command, key: {:?}",
            command.command_type().as_str(),
            command.key()
        );
        let mut store = self.store.lock().await;

        match command {
            Command::Get { key } => match store.get(&key) {
                Some(value) => Ok(Reply::Value(value)),
                None => Err(CacheError::KeyNotFound(key)),
            },
            Command::Put { key, value } => {
                store.put(key.clone(), value.clone());
                self.replicator
                    .replicate(&SyncCommand::Put { key, value })
                    .await?;
                Ok(Reply::Done)
            }
            Command::Delete { key } => {
                store.delete(&key);
                self.replicator
                    .replicate(&SyncCommand::Delete { key })
                    .await?;
                Ok(Reply::Done)
            }
            Command::All => Ok(Reply::Snapshot(store.snapshot())),
            Command::Sync(sync) => {
                apply_sync(&mut store, sync);
                Ok(Reply::Done)
            }
        }
    }

    // =========================================================================
    // Accessors (for testing and debugging)
    // =========================================================================

    pub fn store(&self) -> &Store {
        &self.store
    }

    pub fn peers(&self) -> &PeerSet {
        self.replicator.peers()
    }
}
