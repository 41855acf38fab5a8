//! Interactive CLI peer for a Zashiki room.

mod command;
mod error;
mod formatter;
mod runner;
mod session;
mod ui;

pub use error::ClientError;
pub use runner::run_client;
