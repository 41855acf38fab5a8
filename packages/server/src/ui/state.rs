//! Server state shared by every handler.

use std::sync::Arc;

use crate::usecase::{
    ConnectParticipantUseCase, DisconnectParticipantUseCase, DrawComponentUseCase,
    GetRoomDetailUseCase, GetRoomsUseCase, RefreshPresenceUseCase, SaveComponentUseCase,
};

/// Shared application state
pub struct AppState {
    /// ConnectParticipantUseCase（参加者接続のユースケース）
    pub connect_participant_usecase: Arc<ConnectParticipantUseCase>,
    /// DisconnectParticipantUseCase（参加者切断のユースケース）
    pub disconnect_participant_usecase: Arc<DisconnectParticipantUseCase>,
    /// DrawComponentUseCase（図の変更のユースケース）
    pub draw_component_usecase: Arc<DrawComponentUseCase>,
    /// SaveComponentUseCase（保存要求のユースケース）
    pub save_component_usecase: Arc<SaveComponentUseCase>,
    /// RefreshPresenceUseCase（在室者一覧の再通知のユースケース）
    pub refresh_presence_usecase: Arc<RefreshPresenceUseCase>,
    /// GetRoomsUseCase（ルーム一覧取得のユースケース）
    pub get_rooms_usecase: Arc<GetRoomsUseCase>,
    /// GetRoomDetailUseCase（ルーム詳細取得のユースケース）
    pub get_room_detail_usecase: Arc<GetRoomDetailUseCase>,
    /// Capacity of each connection's outbound queue
    pub outbound_queue_capacity: usize,
}
