//! Request handlers
//!
//! Translate HTTP requests into engine commands.
//!
//! Every keyed route is also mounted without the key segment (`/put/`, ...),
//! in which case the key fails to extract and the request is rejected with
//! 400 before the store is touched. A key segment that does not decode to
//! UTF-8 is rejected with 400 as well, under its own message.
//!
//! Client writes and deletes run on their own task. Hyper drops the handler
//! future when the client goes away; the fan-out still runs until every peer
//! is synced or one fails.

use std::sync::Arc;

use axum::body::{to_bytes, Body};
use axum::extract::path::ErrorKind;
use axum::extract::rejection::PathRejection;
use axum::extract::{Path, State};
use bytes::Bytes;

use crate::engine::Engine;
use crate::error::{CacheError, Result};
use crate::protocol::{Command, Reply};

type SharedEngine = State<Arc<Engine>>;
type KeyPath = std::result::Result<Path<String>, PathRejection>;

/// PUT /put/{key}
pub async fn put(State(engine): SharedEngine, key: KeyPath, body: Body) -> Result<Reply> {
    let key = required_key(key)?;
    let value = read_body(&key, body).await?;
    execute_detached(engine, Command::put(key, value)?).await
}

/// GET /get/{key}
pub async fn get(State(engine): SharedEngine, key: KeyPath) -> Result<Reply> {
    engine.execute(Command::get(required_key(key)?)?).await
}

/// DELETE /delete/{key}
pub async fn delete(State(engine): SharedEngine, key: KeyPath) -> Result<Reply> {
    execute_detached(engine, Command::delete(required_key(key)?)?).await
}

/// GET /all
pub async fn all(State(engine): SharedEngine) -> Result<Reply> {
    engine.execute(Command::All).await
}

/// PUT /sync/{key}
pub async fn sync_put(State(engine): SharedEngine, key: KeyPath, body: Body) -> Result<Reply> {
    let key = required_key(key)?;
    let value = read_body(&key, body).await?;
    engine.execute(Command::sync_put(key, value)?).await
}

/// DELETE /sync/{key}
pub async fn sync_delete(State(engine): SharedEngine, key: KeyPath) -> Result<Reply> {
    engine.execute(Command::sync_delete(required_key(key)?)?).await
}

/// Run a replicating command to completion even if the caller is dropped
async fn execute_detached(engine: Arc<Engine>, command: Command) -> Result<Reply> {
    tokio::spawn(async move { engine.execute(command).await })
        .await
        .map_err(|e| CacheError::Task(e.to_string()))?
}

fn required_key(key: KeyPath) -> Result<String> {
    match key {
        Ok(Path(key)) if !key.is_empty() => Ok(key),
        Ok(_) => Err(CacheError::EmptyKey),
        Err(PathRejection::FailedToDeserializePathParams(err)) => match err.kind() {
            ErrorKind::InvalidUtf8InPathParam { .. } => Err(CacheError::InvalidKey),
            _ => Err(CacheError::EmptyKey),
        },
        Err(_) => Err(CacheError::EmptyKey),
    }
}

/// Buffer the whole request body; the core enforces no size limit.
async fn read_body(key: &str, body: Body) -> Result<Bytes> {
    to_bytes(body, usize::MAX)
        .await
        .map_err(|e| CacheError::BodyRead {
            key: key.to_string(),
            message: e.to_string(),
        })
}
