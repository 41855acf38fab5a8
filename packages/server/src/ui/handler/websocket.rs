//! WebSocket connection handlers.

use std::sync::Arc;

use axum::{
    extract::{
        Path, State,
        ws::{Message, WebSocket, WebSocketUpgrade},
    },
    http::StatusCode,
    response::IntoResponse,
};
use futures_util::{
    sink::SinkExt,
    stream::{SplitSink, StreamExt},
};
use serde::Deserialize;
use tokio::sync::mpsc;

use crate::{
    domain::{ConnectionId, ConnectionState, DisplayName, RoomId},
    infrastructure::dto::websocket::ClientMessage,
    ui::state::AppState,
};

/// Path parameters of `/ws/{room}/{username}`
#[derive(Debug, Deserialize)]
pub struct ConnectPath {
    pub room: String,
    pub username: String,
}

pub async fn websocket_handler(
    ws: WebSocketUpgrade,
    State(state): State<Arc<AppState>>,
    Path(path): Path<ConnectPath>,
) -> Result<impl IntoResponse, StatusCode> {
    // Convert String -> Domain Models
    let room_id = match RoomId::try_from(path.room.clone()) {
        Ok(id) => id,
        Err(e) => {
            tracing::warn!("Rejecting connection, invalid room '{}': {}", path.room, e);
            return Err(StatusCode::BAD_REQUEST);
        }
    };
    let name = match DisplayName::try_from(path.username.clone()) {
        Ok(name) => name,
        Err(e) => {
            tracing::warn!(
                "Rejecting connection, invalid username '{}': {}",
                path.username,
                e
            );
            return Err(StatusCode::BAD_REQUEST);
        }
    };

    Ok(ws.on_upgrade(move |socket| handle_socket(socket, state, room_id, name)))
}

/// Spawns a task that drains the outbound queue into the WebSocket sender.
///
/// The queue closes when the connection is unregistered from the pusher,
/// either on normal disconnect or on eviction after a failed delivery. A
/// Close frame is sent in that case so the peer sees the eviction.
fn pusher_loop(
    mut rx: mpsc::Receiver<String>,
    mut sender: SplitSink<WebSocket, Message>,
) -> tokio::task::JoinHandle<()> {
    tokio::spawn(async move {
        while let Some(msg) = rx.recv().await {
            if sender.send(Message::Text(msg.into())).await.is_err() {
                return;
            }
        }
        let _ = sender.send(Message::Close(None)).await;
    })
}

async fn handle_socket(
    socket: WebSocket,
    state: Arc<AppState>,
    room_id: RoomId,
    name: DisplayName,
) {
    let mut connection_state = ConnectionState::Connecting;
    let (sender, mut receiver) = socket.split();

    // Create a bounded outbound queue for this connection
    let (tx, rx) = mpsc::channel(state.outbound_queue_capacity);

    // Start draining before the presence announcement so the first frame
    // is never lost to a full queue
    let mut send_task = pusher_loop(rx, sender);

    let participant = state
        .connect_participant_usecase
        .execute(&room_id, name, tx)
        .await;
    let connection_id = participant.connection_id;
    connection_state = advance(connection_state, ConnectionState::Open, &connection_id);

    let state_clone = state.clone();
    let room_for_recv = room_id.clone();

    // Spawn a task to receive messages from this peer
    let mut recv_task = tokio::spawn(async move {
        while let Some(msg) = receiver.next().await {
            let msg = match msg {
                Ok(msg) => msg,
                Err(e) => {
                    tracing::warn!("WebSocket error on '{}': {}", connection_id, e);
                    break;
                }
            };

            match msg {
                Message::Text(text) => {
                    let should_continue =
                        dispatch(&state_clone, &room_for_recv, &connection_id, text.as_str())
                            .await;
                    if !should_continue {
                        break;
                    }
                }
                Message::Ping(_) => {
                    tracing::debug!("Received ping");
                    // Ping/pong is handled automatically by the WebSocket protocol
                }
                Message::Close(_) => {
                    tracing::info!("Connection '{}' requested close", connection_id);
                    break;
                }
                _ => {}
            }
        }
    });

    // If any one of the tasks completes, abort the other
    tokio::select! {
        _ = &mut recv_task => send_task.abort(),
        _ = &mut send_task => recv_task.abort(),
    };

    advance(connection_state, ConnectionState::Closed, &connection_id);

    // Removing an already evicted connection is a no-op
    match state
        .disconnect_participant_usecase
        .execute(&room_id, &connection_id)
        .await
    {
        Some(participant) => tracing::info!(
            "'{}' ({}) left room '{}'",
            participant.name,
            connection_id,
            room_id
        ),
        None => tracing::debug!(
            "Connection '{}' was already removed from room '{}'",
            connection_id,
            room_id
        ),
    }
}

/// Handle one inbound text frame.
///
/// Returns `false` when the connection must be torn down.
async fn dispatch(
    state: &AppState,
    room_id: &RoomId,
    connection_id: &ConnectionId,
    text: &str,
) -> bool {
    let message = match ClientMessage::decode(text) {
        Ok(message) => message,
        Err(e) => {
            tracing::warn!("Dropping frame from '{}': {}", connection_id, e);
            return true;
        }
    };

    match message {
        ClientMessage::DrawComponent { xml } => {
            state
                .draw_component_usecase
                .execute(room_id, connection_id, xml)
                .await;
            true
        }
        ClientMessage::SaveComponent => {
            match state.save_component_usecase.execute(connection_id).await {
                Ok(()) => true,
                Err(e) => {
                    tracing::warn!("Closing '{}': {}", connection_id, e);
                    false
                }
            }
        }
        ClientMessage::Login => {
            state.refresh_presence_usecase.execute(room_id).await;
            true
        }
    }
}

fn advance(
    current: ConnectionState,
    next: ConnectionState,
    connection_id: &ConnectionId,
) -> ConnectionState {
    match current.transition_to(next) {
        Ok(state) => {
            tracing::debug!("Connection '{}' is now {:?}", connection_id, state);
            state
        }
        Err(e) => {
            tracing::warn!("Connection '{}': {}", connection_id, e);
            current
        }
    }
}
