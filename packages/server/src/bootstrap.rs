//! Dependency wiring for the room server.

use std::sync::Arc;

use zashiki_shared::time::{Clock, SystemClock};

use crate::{
    config::ServerConfig,
    infrastructure::{message_pusher::WebSocketMessagePusher, repository::InMemoryRoomRepository},
    ui::{Server, state::AppState},
    usecase::{
        ConnectParticipantUseCase, DisconnectParticipantUseCase, DrawComponentUseCase,
        GetRoomDetailUseCase, GetRoomsUseCase, RefreshPresenceUseCase, RoomBroadcaster,
        SaveComponentUseCase,
    },
};

/// Build a server backed by the in-memory room directory.
///
/// Each call creates an independent directory, so several servers can run
/// in one process.
pub fn build_server(config: &ServerConfig) -> Server {
    // Initialize dependencies in order:
    // 1. Repository
    // 2. MessagePusher
    // 3. Broadcaster and UseCases
    // 4. Server
    let clock: Arc<dyn Clock> = Arc::new(SystemClock);

    // 1. Create Repository (in-memory room directory)
    let repository = Arc::new(InMemoryRoomRepository::new(
        clock.clone(),
        config.evict_empty_rooms,
    ));

    // 2. Create MessagePusher (WebSocket implementation)
    let message_pusher = Arc::new(WebSocketMessagePusher::new());

    // 3. Create Broadcaster and UseCases
    let broadcaster = Arc::new(RoomBroadcaster::new(
        repository.clone(),
        message_pusher.clone(),
    ));
    let connect_participant_usecase = Arc::new(ConnectParticipantUseCase::new(
        repository.clone(),
        message_pusher.clone(),
        broadcaster.clone(),
        clock,
    ));
    let disconnect_participant_usecase = Arc::new(DisconnectParticipantUseCase::new(
        repository.clone(),
        message_pusher.clone(),
        broadcaster.clone(),
    ));
    let draw_component_usecase = Arc::new(DrawComponentUseCase::new(
        repository.clone(),
        broadcaster.clone(),
    ));
    let save_component_usecase = Arc::new(SaveComponentUseCase::new(message_pusher));
    let refresh_presence_usecase = Arc::new(RefreshPresenceUseCase::new(broadcaster));
    let get_rooms_usecase = Arc::new(GetRoomsUseCase::new(repository.clone()));
    let get_room_detail_usecase = Arc::new(GetRoomDetailUseCase::new(repository));

    // 4. Create the server
    Server::new(AppState {
        connect_participant_usecase,
        disconnect_participant_usecase,
        draw_component_usecase,
        save_component_usecase,
        refresh_presence_usecase,
        get_rooms_usecase,
        get_room_detail_usecase,
        outbound_queue_capacity: config.outbound_queue_capacity,
    })
}
