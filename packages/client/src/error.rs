//! Error types for the CLI peer.

use thiserror::Error;

/// Client-specific errors
#[derive(Debug, Error)]
pub enum ClientError {
    /// The server rejected the room token or display name
    #[error("Server rejected room '{room}' / name '{name}'")]
    Rejected { room: String, name: String },

    /// Connection error
    #[error("Connection error: {0}")]
    ConnectionError(String),

    /// Every reconnect attempt failed
    #[error("Failed to reconnect after {0} attempts")]
    ReconnectExhausted(u32),
}
