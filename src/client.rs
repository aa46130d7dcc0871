//! HTTP client for a PeerCache node
//!
//! Used by the CLI binary and by tests.

use bytes::Bytes;
use reqwest::{Response, StatusCode, Url};

use crate::error::{CacheError, Result};
use crate::protocol::{decode_snapshot, ALL_PATH, DELETE_PATH, GET_PATH, PUT_PATH};
use crate::store::Snapshot;

/// Client for one node's public API
#[derive(Debug, Clone)]
pub struct CacheClient {
    base: Url,
    http: reqwest::Client,
}

impl CacheClient {
    /// Create a client for `server`, given as `host:port` or a full
    /// `http://` URL.
    pub fn new(server: &str) -> Result<Self> {
        let raw = if server.contains("://") {
            server.to_string()
        } else {
            format!("http://{}", server)
        };
        let base = Url::parse(&raw)
            .map_err(|e| CacheError::Config(format!("invalid server address {}: {}", server, e)))?;
        if base.cannot_be_a_base() {
            return Err(CacheError::Config(format!("invalid server address {}", server)));
        }

        Ok(Self {
            base,
            http: reqwest::Client::new(),
        })
    }

    /// Store `value` under `key` on the node (and, through it, its peers)
    pub async fn put(&self, key: &str, value: impl Into<Bytes>) -> Result<()> {
        let response = self
            .http
            .put(self.url(&[PUT_PATH, key]))
            .body(value.into())
            .send()
            .await?;
        check(response).await?;
        Ok(())
    }

    /// Value under `key`, or `None` if the node doesn't have it
    pub async fn get(&self, key: &str) -> Result<Option<Bytes>> {
        let response = self.http.get(self.url(&[GET_PATH, key])).send().await?;
        if response.status() == StatusCode::NOT_FOUND {
            return Ok(None);
        }
        Ok(Some(check(response).await?.bytes().await?))
    }

    /// Delete `key` on the node and its peers
    pub async fn delete(&self, key: &str) -> Result<()> {
        let response = self.http.delete(self.url(&[DELETE_PATH, key])).send().await?;
        check(response).await?;
        Ok(())
    }

    /// Every entry the node holds
    pub async fn all(&self) -> Result<Snapshot> {
        let response = self.http.get(self.url(&[ALL_PATH])).send().await?;
        let body = check(response).await?.bytes().await?;
        decode_snapshot(&body)
    }

    fn url(&self, segments: &[&str]) -> Url {
        let mut url = self.base.clone();
        // `new` rejects cannot-be-a-base URLs, so path segments are available.
        if let Ok(mut path) = url.path_segments_mut() {
            path.clear().extend(segments);
        }
        url
    }
}

/// Turn a non-2xx response into `CacheError::Http` carrying the body text
async fn check(response: Response) -> Result<Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    let message = response.text().await.unwrap_or_default();
    Err(CacheError::Http {
        status: status.as_u16(),
        message,
    })
}
