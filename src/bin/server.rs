//! PeerCache Server Binary
//!
//! Starts one cache node and replicates its writes to the given peers.
//!
//! ```bash
//! peercache-server --port 5001 --peers node1:5001,node2:5002,node3:5003
//! ```

use clap::Parser;
use peercache::network::Server;
use peercache::{Config, Engine};
use tracing_subscriber::{fmt, EnvFilter};

/// PeerCache Server
#[derive(Parser, Debug)]
#[command(name = "peercache-server")]
#[command(about = "Dead simple distributed cache with REST based API")]
#[command(version)]
struct Args {
    /// Peers to synchronise the state with, e.g. localhost:5001,localhost:5002
    #[arg(short = 'n', long, value_delimiter = ',', required = true)]
    peers: Vec<String>,

    /// HTTP port to start the cache on
    #[arg(short, long)]
    port: u16,

    /// Host name identifying this node in --peers (defaults to the machine hostname)
    #[arg(long)]
    host: Option<String>,

    /// Interface to listen on
    #[arg(short, long, default_value = "0.0.0.0")]
    bind: String,

    /// Timeout for each replication call in milliseconds (unbounded when unset)
    #[arg(long)]
    peer_timeout_ms: Option<u64>,
}

#[tokio::main]
async fn main() {
    // Initialize tracing/logging
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,peercache=debug,tower_http=debug"));

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_thread_ids(true)
        .init();

    let args = Args::parse();

    tracing::info!("PeerCache Server v{}", peercache::VERSION);

    // Build config from args
    let mut builder = Config::builder()
        .port(args.port)
        .bind_host(&args.bind)
        .peers(args.peers.iter().map(|p| p.trim()).filter(|p| !p.is_empty()));
    if let Some(host) = &args.host {
        builder = builder.self_host(host);
    }
    if let Some(ms) = args.peer_timeout_ms {
        builder = builder.peer_timeout_ms(ms);
    }
    let config = builder.build();

    let engine = match Engine::open_shared(&config) {
        Ok(e) => e,
        Err(e) => {
            tracing::error!("Failed to start node: {}", e);
            std::process::exit(1);
        }
    };

    if let Err(e) = Server::new(config, engine).run().await {
        tracing::error!("Server error: {}", e);
        std::process::exit(1);
    }
}
