//! WebSocket message DTOs.
//!
//! Every frame is a JSON object whose `type` field selects the variant.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

/// Message sent by a peer to the server
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ClientMessage {
    /// Diagram mutation to broadcast to the other peers
    DrawComponent {
        #[serde(default)]
        xml: String,
    },
    /// Request for a save acknowledgment
    SaveComponent,
    /// Request for a presence re-broadcast
    Login,
}

/// Message sent by the server to a peer
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ServerMessage {
    DrawComponent { xml: String },
    ReloadUsersRoom { users: Vec<String> },
    SaveResponse { success: bool, message: String },
}

/// Inbound payload that cannot be dispatched
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ProtocolError {
    #[error("payload is not a JSON object: {0}")]
    Malformed(String),

    #[error("payload has no string `type` field")]
    MissingType,

    #[error("unknown message type '{0}'")]
    UnknownType(String),

    #[error("invalid '{kind}' payload: {reason}")]
    InvalidPayload { kind: String, reason: String },
}

impl ClientMessage {
    const KNOWN_TYPES: [&'static str; 3] = ["draw_component", "save_component", "login"];

    /// Decode one inbound text frame.
    pub fn decode(text: &str) -> Result<Self, ProtocolError> {
        let value: Value =
            serde_json::from_str(text).map_err(|e| ProtocolError::Malformed(e.to_string()))?;
        if !value.is_object() {
            return Err(ProtocolError::Malformed("expected an object".to_string()));
        }

        let kind = value
            .get("type")
            .and_then(Value::as_str)
            .ok_or(ProtocolError::MissingType)?
            .to_string();
        if !Self::KNOWN_TYPES.contains(&kind.as_str()) {
            return Err(ProtocolError::UnknownType(kind));
        }

        serde_json::from_value(value).map_err(|e| ProtocolError::InvalidPayload {
            kind,
            reason: e.to_string(),
        })
    }
}
