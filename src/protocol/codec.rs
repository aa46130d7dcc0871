//! Protocol codec
//!
//! Encoding for the /all snapshot and construction of peer sync URLs.
//!
//! ## Snapshot Format
//!
//! A JSON object mapping each key to the standard (padded) base64 encoding of
//! its value:
//! ```text
//! {"greeting":"aGVsbG8=","empty":""}
//! ```
//! Keys are emitted in sorted order.

use std::collections::BTreeMap;

use base64::{engine::general_purpose, Engine as _};
use bytes::Bytes;
use reqwest::Url;

use crate::error::{CacheError, Result};
use crate::store::Snapshot;
use super::SYNC_PATH;

// =============================================================================
// Snapshot Encoding/Decoding
// =============================================================================

/// Encode a snapshot as a JSON document
pub fn encode_snapshot(snapshot: &Snapshot) -> Result<Vec<u8>> {
    let encoded: BTreeMap<&str, String> = snapshot
        .iter()
        .map(|(key, value)| (key.as_str(), general_purpose::STANDARD.encode(value)))
        .collect();

    Ok(serde_json::to_vec(&encoded)?)
}

/// Decode a JSON snapshot produced by [`encode_snapshot`]
pub fn decode_snapshot(bytes: &[u8]) -> Result<Snapshot> {
    let encoded: BTreeMap<String, String> = serde_json::from_slice(bytes)
        .map_err(|e| CacheError::Decoding(e.to_string()))?;

    encoded
        .into_iter()
        .map(|(key, value)| -> Result<(String, Bytes)> {
            let raw = general_purpose::STANDARD
                .decode(value.as_bytes())
                .map_err(|e| CacheError::Decoding(format!("value for key {}: {}", key, e)))?;
            Ok((key, Bytes::from(raw)))
        })
        .collect()
}

// =============================================================================
// Sync URLs
// =============================================================================

/// Build `http://{peer}/sync/{key}`.
///
/// The key is pushed as one percent-encoded path segment, so `/`, `%` and
/// spaces in keys survive the hop to the peer.
pub fn sync_url(peer: &str, key: &str) -> Result<Url> {
    let invalid = |message: String| CacheError::InvalidPeerAddress {
        peer: peer.to_string(),
        message,
    };

    let mut url = Url::parse(&format!("http://{}/", peer)).map_err(|e| invalid(e.to_string()))?;
    if url.host_str().map_or(true, str::is_empty) {
        return Err(invalid("missing host".to_string()));
    }

    url.path_segments_mut()
        .map_err(|_| invalid("address cannot carry a path".to_string()))?
        .clear()
        .push(SYNC_PATH)
        .push(key);

    Ok(url)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_snapshot_values_are_base64() {
        let mut snapshot = Snapshot::new();
        snapshot.insert("greeting".to_string(), Bytes::from_static(b"hello"));
        snapshot.insert("empty".to_string(), Bytes::new());

        let json = encode_snapshot(&snapshot).unwrap();
        assert_eq!(json, br#"{"empty":"","greeting":"aGVsbG8="}"#.to_vec());
    }

    #[test]
    fn test_snapshot_preserves_binary_values() {
        let mut snapshot = Snapshot::new();
        snapshot.insert("bin".to_string(), Bytes::from(vec![0u8, 255, 10, 34, 92]));

        let decoded = decode_snapshot(&encode_snapshot(&snapshot).unwrap()).unwrap();
        assert_eq!(decoded, snapshot);
    }

    #[test]
    fn test_decode_rejects_invalid_base64() {
        let result = decode_snapshot(br#"{"k":"not base64!"}"#);
        assert!(matches!(result, Err(CacheError::Decoding(_))));
    }

    #[test]
    fn test_decode_rejects_non_object() {
        assert!(matches!(decode_snapshot(b"[1,2]"), Err(CacheError::Decoding(_))));
    }

    #[test]
    fn test_sync_url() {
        let url = sync_url("node2:5555", "user").unwrap();
        assert_eq!(url.as_str(), "http://node2:5555/sync/user");
    }

    #[test]
    fn test_sync_url_escapes_key() {
        let url = sync_url("127.0.0.1:5001", "a/b c").unwrap();
        assert_eq!(url.as_str(), "http://127.0.0.1:5001/sync/a%2Fb%20c");
    }

    #[test]
    fn test_sync_url_rejects_bad_peer() {
        assert!(matches!(
            sync_url("bad host:1", "k"),
            Err(CacheError::InvalidPeerAddress { .. })
        ));
        assert!(matches!(
            sync_url("", "k"),
            Err(CacheError::InvalidPeerAddress { .. })
        ));
    }
}
