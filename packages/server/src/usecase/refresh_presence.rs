//! UseCase: 在室者一覧の再通知（login）

use std::sync::Arc;

use crate::domain::RoomId;

use super::broadcast::RoomBroadcaster;

/// 在室者一覧の再通知のユースケース
pub struct RefreshPresenceUseCase {
    broadcaster: Arc<RoomBroadcaster>,
}

impl RefreshPresenceUseCase {
    /// 新しい RefreshPresenceUseCase を作成
    pub fn new(broadcaster: Arc<RoomBroadcaster>) -> Self {
        Self { broadcaster }
    }

    /// ルームの全員に現在の在室者一覧を通知
    pub async fn execute(&self, room_id: &RoomId) -> Vec<String> {
        self.broadcaster.announce_presence(room_id).await
    }
}
