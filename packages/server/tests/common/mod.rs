//! Shared helpers for the integration tests.
//!
//! Each test binds its own server on an ephemeral port, so tests run in
//! parallel without sharing room state.

#![allow(dead_code)]

use std::{net::SocketAddr, time::Duration};

use futures_util::{SinkExt, StreamExt};
use serde_json::Value;
use tokio::net::{TcpListener, TcpStream};
use tokio_tungstenite::{MaybeTlsStream, WebSocketStream, connect_async, tungstenite::Message};
use zashiki_server::{bootstrap::build_server, config::ServerConfig};

pub type Peer = WebSocketStream<MaybeTlsStream<TcpStream>>;

const RECV_TIMEOUT: Duration = Duration::from_secs(2);
const SILENCE_WINDOW: Duration = Duration::from_millis(300);

/// Start a server with the default configuration
pub async fn spawn_server() -> SocketAddr {
    spawn_server_with(ServerConfig::default()).await
}

pub async fn spawn_server_with(config: ServerConfig) -> SocketAddr {
    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind test listener");
    let addr = listener.local_addr().expect("Failed to read local addr");
    let server = build_server(&config);
    tokio::spawn(server.serve(listener));
    addr
}

/// Connect a peer and consume the presence list announced for its own join
pub async fn join(addr: SocketAddr, room: &str, name: &str) -> Peer {
    let url = format!("ws://{}/ws/{}/{}", addr, room, name);
    let (mut peer, _) = connect_async(&url).await.expect("Failed to connect");
    let first = recv_json(&mut peer).await;
    assert_eq!(first["type"], "reload_users_room");
    peer
}

/// Receive the next text frame as JSON, failing after a timeout
pub async fn recv_json(peer: &mut Peer) -> Value {
    recv_json_within(peer, RECV_TIMEOUT).await
}

pub async fn recv_json_within(peer: &mut Peer, timeout: Duration) -> Value {
    loop {
        let frame = tokio::time::timeout(timeout, peer.next())
            .await
            .expect("Timed out waiting for a message")
            .expect("Connection ended")
            .expect("WebSocket error");
        match frame {
            Message::Text(text) => {
                return serde_json::from_str(&text).expect("Server sent invalid JSON");
            }
            Message::Ping(_) | Message::Pong(_) => continue,
            other => panic!("Unexpected frame: {:?}", other),
        }
    }
}

/// Assert that no text frame arrives within a short window
pub async fn assert_silent(peer: &mut Peer) {
    if let Ok(Some(Ok(Message::Text(text)))) =
        tokio::time::timeout(SILENCE_WINDOW, peer.next()).await
    {
        panic!("Expected no message, got {}", text);
    }
}

pub async fn send_json(peer: &mut Peer, value: Value) {
    send_text(peer, &value.to_string()).await;
}

pub async fn send_text(peer: &mut Peer, text: &str) {
    peer.send(Message::Text(text.to_string().into()))
        .await
        .expect("Failed to send");
}

/// Presence users sorted, for set comparison
pub fn sorted_users(message: &Value) -> Vec<String> {
    let mut users: Vec<String> = message["users"]
        .as_array()
        .expect("users must be an array")
        .iter()
        .map(|u| u.as_str().expect("user must be a string").to_string())
        .collect();
    users.sort();
    users
}

/// Poll the HTTP API until the room directory is empty
pub async fn wait_until_no_rooms(addr: SocketAddr) {
    let url = format!("http://{}/api/rooms", addr);
    for _ in 0..50 {
        let rooms: Value = reqwest::get(&url)
            .await
            .expect("Request failed")
            .json()
            .await
            .expect("Invalid JSON");
        if rooms.as_array().is_some_and(|rooms| rooms.is_empty()) {
            return;
        }
        tokio::time::sleep(Duration::from_millis(20)).await;
    }
    panic!("Rooms were not evicted");
}
