//! Outbound events delivered to peers.

/// Message the server sends to one or more connections of a room.
///
/// Encoding to the wire format happens in the infrastructure layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RoomEvent {
    /// A peer changed the diagram.
    DiagramChanged { xml: String },
    /// Full list of display names currently in the room.
    PresenceChanged { users: Vec<String> },
    /// Acknowledgment of a save request, addressed to the requester only.
    SaveAcknowledged { success: bool, message: String },
}

impl RoomEvent {
    pub fn kind(&self) -> &'static str {
        match self {
            Self::DiagramChanged { .. } => "diagram-changed",
            Self::PresenceChanged { .. } => "presence-changed",
            Self::SaveAcknowledged { .. } => "save-acknowledged",
        }
    }
}
