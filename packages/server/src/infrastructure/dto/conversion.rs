//! Conversion logic between DTOs and domain entities.

use zashiki_shared::time::timestamp_to_rfc3339;

use crate::domain::{Participant, Room, RoomEvent};
use crate::infrastructure::dto::{
    http::{ParticipantDetailDto, RoomDetailDto, RoomSummaryDto},
    websocket::ServerMessage,
};

// ========================================
// Domain Event → WebSocket DTO
// ========================================

impl From<&RoomEvent> for ServerMessage {
    fn from(event: &RoomEvent) -> Self {
        match event {
            RoomEvent::DiagramChanged { xml } => Self::DrawComponent { xml: xml.clone() },
            RoomEvent::PresenceChanged { users } => Self::ReloadUsersRoom {
                users: users.clone(),
            },
            RoomEvent::SaveAcknowledged { success, message } => Self::SaveResponse {
                success: *success,
                message: message.clone(),
            },
        }
    }
}

// ========================================
// Domain Entity → HTTP DTO
// ========================================

impl From<Room> for RoomSummaryDto {
    fn from(room: Room) -> Self {
        Self {
            id: room.id.into_string(),
            participants: room
                .participants
                .into_iter()
                .map(|p| p.name.into_string())
                .collect(),
            created_at: timestamp_to_rfc3339(room.created_at.value()),
        }
    }
}

impl From<Participant> for ParticipantDetailDto {
    fn from(participant: Participant) -> Self {
        Self {
            connection_id: participant.connection_id.to_string(),
            name: participant.name.into_string(),
            connected_at: timestamp_to_rfc3339(participant.connected_at.value()),
        }
    }
}

impl From<Room> for RoomDetailDto {
    fn from(room: Room) -> Self {
        Self {
            id: room.id.into_string(),
            participants: room.participants.into_iter().map(Into::into).collect(),
            has_diagram: room.diagram.is_some(),
            created_at: timestamp_to_rfc3339(room.created_at.value()),
        }
    }
}
