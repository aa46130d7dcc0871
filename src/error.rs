//! Error types for PeerCache
//!
//! Provides a unified error type for all operations. Each variant maps onto
//! one HTTP status category; the message is what the client sees.

use thiserror::Error;

/// Result type alias using CacheError
pub type Result<T> = std::result::Result<T, CacheError>;

/// Unified error type for PeerCache operations
#[derive(Debug, Error)]
pub enum CacheError {
    // -------------------------------------------------------------------------
    // Request Errors
    // -------------------------------------------------------------------------
    #[error("key in path is required")]
    EmptyKey,

    #[error("key in path is not valid UTF-8")]
    InvalidKey,

    #[error("can't find value with key: {0}")]
    KeyNotFound(String),

    #[error("can't read value for key: {key}. err: {message}")]
    BodyRead { key: String, message: String },

    // -------------------------------------------------------------------------
    // Replication Errors
    // -------------------------------------------------------------------------
    #[error("can't sync value with key: {key} and peer: {peer}. err: {message}")]
    Replication {
        peer: String,
        key: String,
        message: String,
    },

    #[error("can't sync value with key: {key} and peer: {peer}. wrong http response code: {status}")]
    PeerStatus { peer: String, key: String, status: u16 },

    #[error("invalid peer address {peer}: {message}")]
    InvalidPeerAddress { peer: String, message: String },

    #[error("command task failed: {0}")]
    Task(String),

    // -------------------------------------------------------------------------
    // Serialization Errors
    // -------------------------------------------------------------------------
    #[error("can't marshal map. err: {0}")]
    Encoding(#[from] serde_json::Error),

    #[error("can't decode snapshot: {0}")]
    Decoding(String),

    // -------------------------------------------------------------------------
    // Client Errors
    // -------------------------------------------------------------------------
    #[error("request failed with status {status}: {message}")]
    Http { status: u16, message: String },

    #[error("transport error: {0}")]
    Transport(String),

    // -------------------------------------------------------------------------
    // Startup Errors
    // -------------------------------------------------------------------------
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("can't check hostname: {0}")]
    Hostname(String),

    #[error("Configuration error: {0}")]
    Config(String),
}

impl CacheError {
    /// HTTP status code for this error when it crosses the API boundary
    pub fn status_code(&self) -> u16 {
        match self {
            CacheError::EmptyKey | CacheError::InvalidKey => 400,
            CacheError::KeyNotFound(_) => 404,
            CacheError::Http { status, .. } => *status,
            _ => 500,
        }
    }

    /// Whether the error is a normal outcome rather than a failure
    pub fn is_not_found(&self) -> bool {
        matches!(self, CacheError::KeyNotFound(_))
    }
}

impl From<reqwest::Error> for CacheError {
    fn from(err: reqwest::Error) -> Self {
        CacheError::Transport(err.to_string())
    }
}
