//! Replication Module
//!
//! Eager, sequential propagation of client writes to a fixed peer set.
//!
//! ## Protocol
//! - A client PUT/DELETE is applied to the local store first
//! - The [`Replicator`] then sends `PUT|DELETE /sync/{key}` to each peer, in
//!   peer-set order, waiting for each answer before the next call
//! - The first peer that is unreachable, answers non-2xx, or whose request
//!   cannot be built aborts the fan-out; later peers are not contacted
//! - Nothing is rolled back: the local store and every peer already synced
//!   keep the change
//! - A peer applies `/sync` through [`apply_sync`], which never fans out again

mod peers;
mod coordinator;
mod receiver;

pub use peers::{local_hostname, PeerSet};
pub use coordinator::Replicator;
pub use receiver::apply_sync;
