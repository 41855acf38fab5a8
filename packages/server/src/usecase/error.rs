//! UseCase errors.

use thiserror::Error;

use crate::domain::MessagePushError;

/// Failure to acknowledge a save request
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SaveComponentError {
    #[error("failed to deliver save response: {0}")]
    Delivery(#[from] MessagePushError),
}

/// Failure to look up a room
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GetRoomDetailError {
    #[error("invalid room id")]
    InvalidRoomId,

    #[error("room not found")]
    RoomNotFound,
}
