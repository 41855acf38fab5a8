//! Interactive CLI peer for a Zashiki diagram room.
//!
//! Connects to `{url}/ws/{room}/{name}` and prints presence, diagram and save
//! events. Input lines are sent as diagram content; `/save`, `/who` and
//! `/quit` are commands. Automatically reconnects on disconnection
//! (max 5 attempts with 5 second interval).
//!
//! Run with:
//! ```not_rust
//! cargo run --bin zashiki-client -- --room R1 --name alice
//! cargo run --bin zashiki-client -- -u ws://127.0.0.1:3000 -r R1 -n bob
//! ```

use clap::Parser;
use zashiki_client::run_client;
use zashiki_shared::logger::setup_logger;

#[derive(Parser, Debug)]
#[command(name = "zashiki-client")]
#[command(about = "Interactive CLI peer for a Zashiki diagram room", long_about = None)]
struct Args {
    /// WebSocket server base URL
    #[arg(short = 'u', long, default_value = "ws://127.0.0.1:8000")]
    url: String,

    /// Room token to join
    #[arg(short = 'r', long)]
    room: String,

    /// Display name shown to the other peers
    #[arg(short = 'n', long)]
    name: String,
}

#[tokio::main]
async fn main() {
    // Initialize tracing
    setup_logger(env!("CARGO_BIN_NAME"), "info");

    let args = Args::parse();

    // Run the client
    if let Err(e) = run_client(args.url, args.room, args.name).await {
        tracing::error!("Client error: {}", e);
        std::process::exit(1);
    }
}
