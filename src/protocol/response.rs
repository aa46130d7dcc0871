//! Response definitions
//!
//! Represents the successful outcome of a command. Failures travel as
//! [`CacheError`](crate::error::CacheError).

use bytes::Bytes;

use crate::store::Snapshot;

/// A successful command result
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply {
    /// Mutation applied (and replicated, for client writes)
    Done,

    /// Value for a GET
    Value(Bytes),

    /// Every entry, for /all
    Snapshot(Snapshot),
}
