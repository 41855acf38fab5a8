//! Entities of the room domain.

use serde::Serialize;

use super::{
    error::ConnectionStateError,
    value_object::{ConnectionId, DisplayName, RoomId, Timestamp},
};

/// A peer registered in a room
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Participant {
    pub connection_id: ConnectionId,
    pub name: DisplayName,
    pub connected_at: Timestamp,
}

impl Participant {
    pub fn new(connection_id: ConnectionId, name: DisplayName, connected_at: Timestamp) -> Self {
        Self {
            connection_id,
            name,
            connected_at,
        }
    }
}

/// A room: registered participants in join order plus the cached diagram.
///
/// The cached diagram is the content of the latest mutation. It is never
/// persisted and never replayed to late joiners.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Room {
    pub id: RoomId,
    pub participants: Vec<Participant>,
    pub diagram: Option<String>,
    pub created_at: Timestamp,
}

impl Room {
    pub fn new(id: RoomId, created_at: Timestamp) -> Self {
        Self {
            id,
            participants: Vec::new(),
            diagram: None,
            created_at,
        }
    }

    /// Append a participant. Display names are not checked for uniqueness.
    pub fn add_participant(&mut self, participant: Participant) {
        self.participants.push(participant);
    }

    /// Remove a participant by connection. Absent connections are a no-op.
    pub fn remove_participant(&mut self, connection_id: &ConnectionId) -> Option<Participant> {
        let index = self
            .participants
            .iter()
            .position(|p| &p.connection_id == connection_id)?;
        Some(self.participants.remove(index))
    }

    pub fn contains(&self, connection_id: &ConnectionId) -> bool {
        self.participants
            .iter()
            .any(|p| &p.connection_id == connection_id)
    }

    /// Overwrite the cached diagram (last write wins).
    pub fn update_diagram(&mut self, xml: String) {
        self.diagram = Some(xml);
    }

    pub fn is_empty(&self) -> bool {
        self.participants.is_empty()
    }
}

/// Lifecycle of one connection: `Connecting -> Open -> Closed`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ConnectionState {
    Connecting,
    Open,
    Closed,
}

impl ConnectionState {
    pub fn can_transition_to(self, next: ConnectionState) -> bool {
        matches!(
            (self, next),
            (Self::Connecting, Self::Open)
                | (Self::Connecting, Self::Closed)
                | (Self::Open, Self::Closed)
        )
    }

    pub fn transition_to(self, next: ConnectionState) -> Result<Self, ConnectionStateError> {
        if self.can_transition_to(next) {
            Ok(next)
        } else {
            Err(ConnectionStateError {
                from: self,
                to: next,
            })
        }
    }
}
