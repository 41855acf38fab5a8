//! Infrastructure layer: concrete directory and delivery implementations, wire DTOs.

pub mod dto;
pub mod message_pusher;
pub mod repository;
