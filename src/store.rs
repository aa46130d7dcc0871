//! Store Module
//!
//! The authoritative local key-value state of a node.
//!
//! ## Concurrency Model: One Exclusive Lock
//!
//! Every operation, reads included, runs under a single mutex covering the
//! whole map. There is no reader/writer split: a `get` waits behind a `put`
//! and the other way round. This totally orders all local operations.
//!
//! The lock is an async mutex so that a caller can keep it across awaits.
//! [`Store::lock`] hands out a [`StoreGuard`]; the engine holds that guard
//! through a whole client command, peer fan-out included.

use std::collections::HashMap;

use bytes::Bytes;
use tokio::sync::{Mutex, MutexGuard};

/// Point-in-time copy of every entry
pub type Snapshot = HashMap<String, Bytes>;

/// In-memory key-value store guarded by one exclusive lock
#[derive(Debug, Default)]
pub struct Store {
    data: Mutex<HashMap<String, Bytes>>,
}

impl Store {
    /// Create an empty store
    pub fn new() -> Self {
        Self {
            data: Mutex::new(HashMap::new()),
        }
    }

    /// Acquire the exclusive lock.
    ///
    /// The lock is released when the returned guard is dropped, on every
    /// exit path.
    pub async fn lock(&self) -> StoreGuard<'_> {
        StoreGuard {
            data: self.data.lock().await,
        }
    }

    /// Insert or overwrite `key`
    pub async fn put(&self, key: impl Into<String>, value: impl Into<Bytes>) {
        self.lock().await.put(key, value);
    }

    /// Value stored under `key`, if any
    pub async fn get(&self, key: &str) -> Option<Bytes> {
        self.lock().await.get(key)
    }

    /// Remove `key`. Removing an absent key is a no-op.
    pub async fn delete(&self, key: &str) {
        self.lock().await.delete(key);
    }

    /// Copy of all entries
    pub async fn snapshot(&self) -> Snapshot {
        self.lock().await.snapshot()
    }
}

/// Exclusive access to the store for the lifetime of the guard
pub struct StoreGuard<'a> {
    data: MutexGuard<'a, HashMap<String, Bytes>>,
}

impl StoreGuard<'_> {
    pub fn put(&mut self, key: impl Into<String>, value: impl Into<Bytes>) {
        self.data.insert(key.into(), value.into());
    }

    /// `Bytes` clones share the buffer, so this does not copy the payload.
    pub fn get(&self, key: &str) -> Option<Bytes> {
        self.data.get(key).cloned()
    }

    /// Returns whether an entry was present
    pub fn delete(&mut self, key: &str) -> bool {
        self.data.remove(key).is_some()
    }

    pub fn snapshot(&self) -> Snapshot {
        self.data.clone()
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}
