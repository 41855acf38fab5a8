//! Domain layer for the room server.
//!
//! This module contains business logic that is independent of
//! data transfer objects (DTOs) and infrastructure concerns.

pub mod entity;
pub mod error;
pub mod event;
pub mod message_pusher;
pub mod presence;
pub mod repository;
pub mod value_object;

pub use entity::{ConnectionState, Participant, Room};
pub use error::{ConnectionStateError, MessagePushError, RepositoryError, ValueObjectError};
pub use event::RoomEvent;
pub use message_pusher::{BroadcastReport, MessagePusher, PusherChannel};
pub use repository::RoomRepository;
pub use value_object::{ConnectionId, DisplayName, RoomId, Timestamp};
