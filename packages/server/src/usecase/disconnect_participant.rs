//! UseCase: 参加者切断処理
//!
//! ## テスト実装の作業記録
//!
//! ### 何をテストしているか
//! - DisconnectParticipantUseCase::execute() メソッド
//! - 参加者の登録解除と、残りの参加者への在室者一覧の再通知
//!
//! ### なぜこのテストが必要か
//! - 明示的な切断と送受信エラーによる切断は同じ後処理を受ける
//! - 既に追い出された接続の切断は何もしない（冪等性）
//!
//! ### どのような状況を想定しているか
//! - 正常系：参加者の切断と通知
//! - エッジケース：最後の参加者の切断、二重の切断

use std::sync::Arc;

use crate::domain::{ConnectionId, MessagePusher, Participant, RoomId, RoomRepository};

use super::broadcast::RoomBroadcaster;

/// 参加者切断のユースケース
pub struct DisconnectParticipantUseCase {
    /// Repository（ルームディレクトリの抽象化）
    repository: Arc<dyn RoomRepository>,
    /// MessagePusher（メッセージ通知の抽象化）
    message_pusher: Arc<dyn MessagePusher>,
    /// 在室者一覧の通知
    broadcaster: Arc<RoomBroadcaster>,
}

impl DisconnectParticipantUseCase {
    /// 新しい DisconnectParticipantUseCase を作成
    pub fn new(
        repository: Arc<dyn RoomRepository>,
        message_pusher: Arc<dyn MessagePusher>,
        broadcaster: Arc<RoomBroadcaster>,
    ) -> Self {
        Self {
            repository,
            message_pusher,
            broadcaster,
        }
    }

    /// 参加者切断を実行
    ///
    /// # Returns
    ///
    /// * `Some(Participant)` - 登録解除した参加者（残りの参加者へ通知済み）
    /// * `None` - 既に登録されていなかった
    pub async fn execute(
        &self,
        room_id: &RoomId,
        connection_id: &ConnectionId,
    ) -> Option<Participant> {
        // 1. ルームディレクトリから登録解除
        let removed = self.repository.unregister(room_id, connection_id).await;

        // 2. MessagePusher から送信キューを登録解除
        self.message_pusher.unregister_client(connection_id).await;

        // 3. 残りの参加者に在室者一覧を通知
        match &removed {
            Some(participant) => {
                let users = self.broadcaster.announce_presence(room_id).await;
                tracing::info!(
                    "'{}' ({}) left room '{}', present: {:?}",
                    participant.name,
                    connection_id,
                    room_id,
                    users
                );
            }
            None => {
                tracing::debug!(
                    "Connection '{}' was already removed from room '{}'",
                    connection_id,
                    room_id
                );
            }
        }

        removed
    }
}
