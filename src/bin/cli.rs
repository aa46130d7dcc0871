//! PeerCache CLI Client
//!
//! Command-line interface for interacting with a PeerCache node.

use std::io::Write;

use clap::{Parser, Subcommand};
use peercache::client::CacheClient;

/// PeerCache CLI
#[derive(Parser, Debug)]
#[command(name = "peercache-cli")]
#[command(about = "CLI for the PeerCache key-value cache")]
struct Args {
    /// Server address
    #[arg(short, long, default_value = "127.0.0.1:5555")]
    server: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Get a value by key
    Get {
        /// The key to get
        key: String,
    },

    /// Set a key-value pair
    Put {
        /// The key to set
        key: String,

        /// The value to set
        value: String,
    },

    /// Delete a key
    Delete {
        /// The key to delete
        key: String,
    },

    /// List every entry on the node
    All,
}

#[tokio::main]
async fn main() {
    let args = Args::parse();

    if let Err(e) = run(args).await {
        eprintln!("error: {}", e);
        std::process::exit(1);
    }
}

async fn run(args: Args) -> peercache::Result<()> {
    let client = CacheClient::new(&args.server)?;

    match args.command {
        Commands::Get { key } => match client.get(&key).await? {
            Some(value) => {
                let mut stdout = std::io::stdout().lock();
                stdout.write_all(&value)?;
                stdout.write_all(b"\n")?;
            }
            None => {
                eprintln!("Key not found");
                std::process::exit(1);
            }
        },
        Commands::Put { key, value } => client.put(&key, value.into_bytes()).await?,
        Commands::Delete { key } => client.delete(&key).await?,
        Commands::All => {
            let mut entries: Vec<_> = client.all().await?.into_iter().collect();
            entries.sort_by(|a, b| a.0.cmp(&b.0));
            for (key, value) in entries {
                println!("{} = {}", key, String::from_utf8_lossy(&value));
            }
        }
    }

    Ok(())
}
