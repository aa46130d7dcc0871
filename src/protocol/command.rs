//! Command definitions
//!
//! Validated requests, built by the HTTP handlers and executed by the engine.

use bytes::Bytes;

use crate::error::{CacheError, Result};

/// Command types
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandType {
    Get,
    Put,
    Delete,
    All,
    Sync,
}

impl CommandType {
    pub fn as_str(&self) -> &'static str {
        match self {
            CommandType::Get => "get",
            CommandType::Put => "put",
            CommandType::Delete => "delete",
            CommandType::All => "all",
            CommandType::Sync => "sync",
        }
    }
}

/// A replication message sent between peers
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SyncCommand {
    /// Store `value` under `key`
    Put { key: String, value: Bytes },

    /// Remove `key`
    Delete { key: String },
}

impl SyncCommand {
    pub fn key(&self) -> &str {
        match self {
            SyncCommand::Put { key, .. } | SyncCommand::Delete { key } => key,
        }
    }
}

/// A parsed command
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Get a value by key
    Get { key: String },

    /// Put a key-value pair and replicate it
    Put { key: String, value: Bytes },

    /// Delete a key and replicate the deletion
    Delete { key: String },

    /// Snapshot of every entry
    All,

    /// Apply a replication message locally, without fan-out
    Sync(SyncCommand),
}

impl Command {
    pub fn get(key: impl Into<String>) -> Result<Self> {
        Ok(Command::Get {
            key: validate_key(key.into())?,
        })
    }

    pub fn put(key: impl Into<String>, value: impl Into<Bytes>) -> Result<Self> {
        Ok(Command::Put {
            key: validate_key(key.into())?,
            value: value.into(),
        })
    }

    pub fn delete(key: impl Into<String>) -> Result<Self> {
        Ok(Command::Delete {
            key: validate_key(key.into())?,
        })
    }

    pub fn sync_put(key: impl Into<String>, value: impl Into<Bytes>) -> Result<Self> {
        Ok(Command::Sync(SyncCommand::Put {
            key: validate_key(key.into())?,
            value: value.into(),
        }))
    }

    pub fn sync_delete(key: impl Into<String>) -> Result<Self> {
        Ok(Command::Sync(SyncCommand::Delete {
            key: validate_key(key.into())?,
        }))
    }

    /// Get the command type
    pub fn command_type(&self) -> CommandType {
        match self {
            Command::Get { .. } => CommandType::Get,
            Command::Put { .. } => CommandType::Put,
            Command::Delete { .. } => CommandType::Delete,
            Command::All => CommandType::All,
            Command::Sync(_) => CommandType::Sync,
        }
    }

    /// Key the command addresses, if it has one
    pub fn key(&self) -> Option<&str> {
        match self {
            Command::Get { key } | Command::Put { key, .. } | Command::Delete { key } => {
                Some(key.as_str())
            }
            Command::Sync(sync) => Some(sync.key()),
            Command::All => None,
        }
    }
}

/// Keys carry no format constraint beyond being non-empty
fn validate_key(key: String) -> Result<String> {
    if key.is_empty() {
        return Err(CacheError::EmptyKey);
    }
    Ok(key)
}
