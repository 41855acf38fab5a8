//! Fixtures shared by the use case tests.

use std::sync::Arc;

use tokio::sync::mpsc;
use zashiki_shared::time::FixedClock;

use crate::{
    domain::{
        ConnectionId, DisplayName, MessagePusher, Participant, RoomId, RoomRepository, Timestamp,
    },
    infrastructure::{message_pusher::WebSocketMessagePusher, repository::InMemoryRoomRepository},
};

pub fn create_test_repository() -> Arc<InMemoryRoomRepository> {
    Arc::new(InMemoryRoomRepository::new(
        Arc::new(FixedClock::new(1000)),
        false,
    ))
}

pub fn create_test_message_pusher() -> Arc<WebSocketMessagePusher> {
    Arc::new(WebSocketMessagePusher::new())
}

pub fn room_id(value: &str) -> RoomId {
    RoomId::new(value.to_string()).unwrap()
}

pub fn display_name(value: &str) -> DisplayName {
    DisplayName::new(value.to_string()).unwrap()
}

/// Register a peer in both the directory and the pusher, bypassing presence announcements.
pub async fn join(
    repository: &Arc<InMemoryRoomRepository>,
    pusher: &Arc<WebSocketMessagePusher>,
    room: &RoomId,
    name: &str,
    capacity: usize,
) -> (ConnectionId, mpsc::Receiver<String>) {
    let (tx, rx) = mpsc::channel(capacity);
    let participant = Participant::new(
        ConnectionId::generate(),
        display_name(name),
        Timestamp::new(2000),
    );
    let connection_id = participant.connection_id;
    pusher.register_client(connection_id, tx).await;
    repository.register(room, participant).await;
    (connection_id, rx)
}

/// Drain every message currently queued for a receiver.
pub fn drain(rx: &mut mpsc::Receiver<String>) -> Vec<String> {
    let mut messages = Vec::new();
    while let Ok(message) = rx.try_recv() {
        messages.push(message);
    }
    messages
}

pub fn presence_json(users: &[&str]) -> String {
    serde_json::json!({ "type": "reload_users_room", "users": users }).to_string()
}
