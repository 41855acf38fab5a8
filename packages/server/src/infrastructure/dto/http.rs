//! HTTP API response DTOs.

use serde::{Deserialize, Serialize};

/// Entry of `GET /api/rooms`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoomSummaryDto {
    pub id: String,
    /// Display names in registration order
    pub participants: Vec<String>,
    /// RFC 3339
    pub created_at: String,
}

/// Participant entry of `GET /api/rooms/{room}`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParticipantDetailDto {
    pub connection_id: String,
    pub name: String,
    /// RFC 3339
    pub connected_at: String,
}

/// Response of `GET /api/rooms/{room}`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoomDetailDto {
    pub id: String,
    pub participants: Vec<ParticipantDetailDto>,
    /// Whether a diagram mutation has been cached for the room
    pub has_diagram: bool,
    /// RFC 3339
    pub created_at: String,
}
