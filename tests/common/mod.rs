//! Shared harness for integration tests
//!
//! Nodes run in-process on `127.0.0.1:0` listeners. The listener is bound
//! before the server task starts, so a node accepts connections as soon as
//! `start` returns.

#![allow(dead_code)]

use std::net::SocketAddr;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use axum::body::Bytes;
use axum::http::{Method, StatusCode, Uri};
use axum::Router;
use peercache::client::CacheClient;
use peercache::network::serve;
use peercache::replication::{PeerSet, Replicator};
use peercache::{Engine, Store};
use tokio::net::TcpListener;
use tokio::task::JoinHandle;

// =============================================================================
// Cache Nodes
// =============================================================================

/// A running cache node
pub struct TestNode {
    pub addr: SocketAddr,
    pub engine: Arc<Engine>,
    task: JoinHandle<()>,
}

impl TestNode {
    /// Start a node replicating to `peers`, in order
    pub async fn start(peers: Vec<String>) -> Self {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();

        let replicator =
            Replicator::new(PeerSet::new(peers), Some(Duration::from_secs(5))).unwrap();
        let engine = Arc::new(Engine::new(Store::new(), replicator));

        let server_engine = Arc::clone(&engine);
        let task = tokio::spawn(async move {
            let _ = serve(listener, server_engine).await;
        });

        Self { addr, engine, task }
    }

    /// `host:port` as it appears in a peer list
    pub fn peer_addr(&self) -> String {
        self.addr.to_string()
    }

    pub fn url(&self, path: &str) -> String {
        format!("http://{}{}", self.addr, path)
    }

    pub fn client(&self) -> CacheClient {
        CacheClient::new(&self.peer_addr()).unwrap()
    }
}

impl Drop for TestNode {
    fn drop(&mut self) {
        self.task.abort();
    }
}

// =============================================================================
// Stub Peers
// =============================================================================

/// A request seen by a stub peer
#[derive(Debug, Clone, PartialEq)]
pub struct Recorded {
    pub peer: String,
    pub method: String,
    pub path: String,
    pub body: Bytes,
}

pub type RequestLog = Arc<Mutex<Vec<Recorded>>>;

/// A fake peer that records every request and answers with a fixed status
pub struct StubPeer {
    pub addr: SocketAddr,
    pub log: RequestLog,
    name: String,
    task: JoinHandle<()>,
}

impl StubPeer {
    pub async fn start(status: u16) -> Self {
        Self::start_with(status, Duration::ZERO, "stub", Arc::new(Mutex::new(Vec::new()))).await
    }

    /// Answer only after `delay`
    pub async fn start_slow(status: u16, delay: Duration) -> Self {
        Self::start_with(status, delay, "stub", Arc::new(Mutex::new(Vec::new()))).await
    }

    /// Record into a log shared with other stubs, tagged with `name`
    pub async fn start_shared(status: u16, name: &str, log: RequestLog) -> Self {
        Self::start_with(status, Duration::ZERO, name, log).await
    }

    async fn start_with(status: u16, delay: Duration, name: &str, log: RequestLog) -> Self {
        let status = StatusCode::from_u16(status).unwrap();
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();

        let handler_log = Arc::clone(&log);
        let peer = name.to_string();
        let app = Router::new().fallback(move |method: Method, uri: Uri, body: Bytes| {
            let log = Arc::clone(&handler_log);
            let peer = peer.clone();
            async move {
                log.lock().unwrap().push(Recorded {
                    peer,
                    method: method.to_string(),
                    path: uri.path().to_string(),
                    body,
                });
                if !delay.is_zero() {
                    tokio::time::sleep(delay).await;
                }
                status
            }
        });

        let task = tokio::spawn(async move {
            let _ = axum::serve(listener, app).await;
        });

        Self {
            addr,
            log,
            name: name.to_string(),
            task,
        }
    }

    pub fn peer_addr(&self) -> String {
        self.addr.to_string()
    }

    /// Requests this stub received
    pub fn requests(&self) -> Vec<Recorded> {
        self.log
            .lock()
            .unwrap()
            .iter()
            .filter(|r| r.peer == self.name)
            .cloned()
            .collect()
    }

    pub fn hits(&self) -> usize {
        self.requests().len()
    }
}

impl Drop for StubPeer {
    fn drop(&mut self) {
        self.task.abort();
    }
}

/// An address nothing listens on
pub fn unreachable_peer() -> String {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    addr.to_string()
}
