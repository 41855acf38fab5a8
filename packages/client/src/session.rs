//! WebSocket client session management.

use futures_util::{SinkExt, StreamExt};
use tokio::sync::mpsc;
use tokio_tungstenite::{
    connect_async,
    tungstenite::{self, http::StatusCode, protocol::Message},
};
use zashiki_server::infrastructure::dto::websocket::ServerMessage;
use zashiki_shared::time::get_timestamp;

use super::{
    command::{InputCommand, parse_input},
    error::ClientError,
    formatter::MessageFormatter,
    ui::redisplay_prompt,
};

/// Build the room endpoint from the server base URL.
///
/// The room and name are percent-encoded as single path segments.
pub fn room_url(base_url: &str, room: &str, name: &str) -> String {
    format!(
        "{}/ws/{}/{}",
        base_url.trim_end_matches('/'),
        urlencoding::encode(room),
        urlencoding::encode(name)
    )
}

/// Run one WebSocket session until the user quits or the connection drops.
///
/// Input lines are read from `input_rx`, which outlives the session so that
/// a reconnect keeps the same readline thread.
///
/// # Returns
///
/// `Ok(())` when the user quits, an error when the connection is lost.
pub async fn run_client_session(
    base_url: &str,
    room: &str,
    name: &str,
    input_rx: &mut mpsc::UnboundedReceiver<String>,
) -> Result<(), ClientError> {
    let url = room_url(base_url, room, name);

    let (ws_stream, _response) = match connect_async(&url).await {
        Ok(result) => result,
        Err(tungstenite::Error::Http(response)) if response.status() == StatusCode::BAD_REQUEST => {
            return Err(ClientError::Rejected {
                room: room.to_string(),
                name: name.to_string(),
            });
        }
        Err(e) => return Err(ClientError::ConnectionError(e.to_string())),
    };

    tracing::info!("Connected to room '{}'", room);
    println!(
        "\nYou are '{}' in room '{}'. Type diagram content and press Enter to send.\n\
         Commands: /save, /who, /quit\n",
        name, room
    );

    let (mut write, mut read) = ws_stream.split();

    let name_for_read = name.to_string();

    // Spawn a task to handle incoming messages
    let mut read_task = tokio::spawn(async move {
        while let Some(message) = read.next().await {
            match message {
                Ok(Message::Text(text)) => {
                    let formatted = match serde_json::from_str::<ServerMessage>(&text) {
                        Ok(msg) => MessageFormatter::format_server_message(
                            &msg,
                            &name_for_read,
                            get_timestamp(),
                        ),
                        Err(_) => MessageFormatter::format_raw_message(&text),
                    };
                    print!("{}", formatted);
                    redisplay_prompt(&name_for_read);
                }
                Ok(Message::Binary(data)) => {
                    print!("{}", MessageFormatter::format_binary_message(data.len()));
                    redisplay_prompt(&name_for_read);
                }
                Ok(Message::Close(_)) => {
                    tracing::info!("Server closed the connection");
                    break;
                }
                Err(e) => {
                    tracing::warn!("WebSocket read error: {}", e);
                    break;
                }
                _ => {}
            }
        }
    });

    loop {
        tokio::select! {
            _ = &mut read_task => {
                return Err(ClientError::ConnectionError("Connection lost".to_string()));
            }
            line = input_rx.recv() => {
                // Input closed (Ctrl+C / Ctrl+D)
                let Some(line) = line else {
                    read_task.abort();
                    let _ = write.send(Message::Close(None)).await;
                    return Ok(());
                };

                let message = match parse_input(&line) {
                    None => continue,
                    Some(InputCommand::Quit) => {
                        read_task.abort();
                        let _ = write.send(Message::Close(None)).await;
                        return Ok(());
                    }
                    Some(InputCommand::Send(message)) => message,
                };

                let json = match serde_json::to_string(&message) {
                    Ok(json) => json,
                    Err(e) => {
                        tracing::error!("Failed to serialize message: {}", e);
                        continue;
                    }
                };

                if let Err(e) = write.send(Message::Text(json.into())).await {
                    tracing::warn!("Failed to send message: {}", e);
                    read_task.abort();
                    return Err(ClientError::ConnectionError("Connection lost".to_string()));
                }

                print!("\n{}", MessageFormatter::format_sent_confirmation(get_timestamp()));
                redisplay_prompt(name);
            }
        }
    }
}
