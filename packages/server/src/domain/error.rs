//! Domain error types.

use thiserror::Error;

/// Value object construction errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValueObjectError {
    #[error("room id must not be empty")]
    RoomIdEmpty,

    #[error("room id is too long ({0} characters)")]
    RoomIdTooLong(usize),

    #[error("display name must not be empty")]
    DisplayNameEmpty,

    #[error("display name is too long ({0} characters)")]
    DisplayNameTooLong(usize),
}

/// Room directory errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RepositoryError {
    #[error("room '{0}' not found")]
    RoomNotFound(String),
}

/// Delivery errors for a single connection's outbound queue
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MessagePushError {
    #[error("connection '{0}' is not registered")]
    ClientNotFound(String),

    #[error("outbound queue of connection '{0}' is full")]
    QueueFull(String),

    #[error("outbound queue of connection '{0}' is closed")]
    ChannelClosed(String),

    #[error("failed to encode message: {0}")]
    Encode(String),
}

/// Invalid connection lifecycle transition
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("invalid connection state transition: {from:?} -> {to:?}")]
pub struct ConnectionStateError {
    pub from: super::entity::ConnectionState,
    pub to: super::entity::ConnectionState,
}
