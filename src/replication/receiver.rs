//! Sync receiver
//!
//! Applies an inbound replication message to the local store.

use crate::protocol::SyncCommand;
use crate::store::StoreGuard;

/// Apply `command` under an already-held store lock.
///
/// Makes no network calls, so a synced write is never fanned out again.
pub fn apply_sync(store: &mut StoreGuard<'_>, command: SyncCommand) {
    match command {
        SyncCommand::Put { key, value } => {
            tracing::debug!("[sync] setting value for key: {} ({} bytes)", key, value.len());
            store.put(key, value);
        }
        SyncCommand::Delete { key } => {
            tracing::debug!("[sync] deleting value for key: {}", key);
            store.delete(&key);
        }
    }
}
