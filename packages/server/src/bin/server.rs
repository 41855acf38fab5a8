//! Real-time diagram room server.
//!
//! Peers join a room over `ws://{host}:{port}/ws/{room}/{username}` and every
//! diagram mutation is relayed to the other peers in the same room.
//!
//! Run with:
//! ```not_rust
//! cargo run --bin zashiki-server
//! cargo run --bin zashiki-server -- --host 0.0.0.0 --port 3000 --evict-empty-rooms
//! ```

use clap::Parser;
use zashiki_server::{bootstrap::build_server, config::ServerConfig};
use zashiki_shared::logger::setup_logger;

#[derive(Parser, Debug)]
#[command(name = "zashiki-server")]
#[command(about = "Real-time diagram room server", long_about = None)]
struct Args {
    /// Host address to bind the server to
    #[arg(short = 'H', long, default_value = "127.0.0.1")]
    host: String,

    /// Port number to bind the server to
    #[arg(short = 'p', long, default_value = "8000")]
    port: u16,

    /// Capacity of each connection's outbound queue
    #[arg(long, default_value = "64")]
    queue_capacity: usize,

    /// Remove a room once its last connection leaves
    #[arg(long)]
    evict_empty_rooms: bool,
}

impl From<Args> for ServerConfig {
    fn from(args: Args) -> Self {
        Self {
            host: args.host,
            port: args.port,
            outbound_queue_capacity: args.queue_capacity,
            evict_empty_rooms: args.evict_empty_rooms,
        }
    }
}

#[tokio::main]
async fn main() {
    // Initialize tracing
    setup_logger(env!("CARGO_BIN_NAME"), "debug");

    let config = ServerConfig::from(Args::parse());
    if let Err(e) = config.validate() {
        tracing::error!("Invalid configuration: {}", e);
        std::process::exit(1);
    }

    let server = build_server(&config);
    if let Err(e) = server.run(&config.bind_addr()).await {
        tracing::error!("Server error: {}", e);
        std::process::exit(1);
    }
}
