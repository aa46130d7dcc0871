//! # PeerCache
//!
//! An in-memory key-value cache served over HTTP with:
//! - A single exclusive lock totally ordering every local operation
//! - Eager, sequential replication of writes and deletes to a fixed peer set
//! - Short-circuit on the first failing peer, with no rollback
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                      HTTP Server (axum)                      │
//! │          /put  /get  /delete  /all  /sync                    │
//! └─────────────────────┬───────────────────────────────────────┘
//!                       │ Command
//! ┌─────────────────────▼───────────────────────────────────────┐
//! │                        Engine                                │
//! │           (holds the store lock for the whole command)       │
//! └─────────────────────┬───────────────────────────────────────┘
//!                       │
//!          ┌────────────┴────────────┐
//!          │                         │
//!          ▼                         ▼
//!   ┌─────────────┐          ┌─────────────┐
//!   │    Store    │          │ Replicator  │──── PUT/DELETE /sync/{key}
//!   │   (Mutex)   │          │ (peer 1..n) │     to every peer, in order
//!   └─────────────┘          └─────────────┘
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod config;

pub mod store;
pub mod protocol;
pub mod replication;
pub mod engine;
pub mod network;
pub mod client;

// =============================================================================
// Public API Re-exports
// =============================================================================

pub use error::{CacheError, Result};
pub use config::Config;
pub use engine::Engine;
pub use store::Store;

// =============================================================================
// Version Info
// =============================================================================

/// Current version of PeerCache
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
