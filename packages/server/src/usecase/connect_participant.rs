//! UseCase: 参加者接続処理
//!
//! ## テスト実装の作業記録
//!
//! ### 何をテストしているか
//! - ConnectParticipantUseCase::execute() メソッド
//! - 接続の登録と、在室者一覧の通知（新規参加者を含む全員）
//!
//! ### なぜこのテストが必要か
//! - 参加直後の在室者一覧が、登録済みの接続と一致することを保証
//! - 表示名の重複が許容されることを確認
//!
//! ### どのような状況を想定しているか
//! - 正常系：新規参加者の接続
//! - エッジケース：同じ表示名での複数接続、別ルームへの接続

use std::sync::Arc;

use zashiki_shared::time::Clock;

use crate::domain::{
    ConnectionId, DisplayName, MessagePusher, Participant, PusherChannel, RoomId, RoomRepository,
    Timestamp,
};

use super::broadcast::RoomBroadcaster;

/// 参加者接続のユースケース
pub struct ConnectParticipantUseCase {
    /// Repository（ルームディレクトリの抽象化）
    repository: Arc<dyn RoomRepository>,
    /// MessagePusher（メッセージ通知の抽象化）
    message_pusher: Arc<dyn MessagePusher>,
    /// 在室者一覧の通知
    broadcaster: Arc<RoomBroadcaster>,
    /// 接続時刻の取得元
    clock: Arc<dyn Clock>,
}

impl ConnectParticipantUseCase {
    /// 新しい ConnectParticipantUseCase を作成
    pub fn new(
        repository: Arc<dyn RoomRepository>,
        message_pusher: Arc<dyn MessagePusher>,
        broadcaster: Arc<RoomBroadcaster>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            repository,
            message_pusher,
            broadcaster,
            clock,
        }
    }

    /// 参加者接続を実行
    ///
    /// 送信キューを先に登録してからディレクトリに登録するため、
    /// スナップショットに現れた接続には必ず配送先がある。
    ///
    /// # Arguments
    ///
    /// * `room_id` - 参加するルーム
    /// * `name` - 表示名（重複可）
    /// * `sender` - この接続の送信キュー
    ///
    /// # Returns
    ///
    /// 登録された参加者
    pub async fn execute(
        &self,
        room_id: &RoomId,
        name: DisplayName,
        sender: PusherChannel,
    ) -> Participant {
        let participant = Participant::new(
            ConnectionId::generate(),
            name,
            Timestamp::new(self.clock.now_millis()),
        );

        // 1. MessagePusher に送信キューを登録
        self.message_pusher
            .register_client(participant.connection_id, sender)
            .await;

        // 2. ルームディレクトリに登録（ルームが無ければ作成される）
        self.repository.register(room_id, participant.clone()).await;

        // 3. 新規参加者を含む全員に在室者一覧を通知
        let users = self.broadcaster.announce_presence(room_id).await;
        tracing::info!(
            "'{}' ({}) joined room '{}', present: {:?}",
            participant.name,
            participant.connection_id,
            room_id,
            users
        );

        participant
    }
}
