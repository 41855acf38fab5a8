//! UseCase: ルーム単位のブロードキャスト
//!
//! ## 責務
//!
//! - ルームのスナップショットを取り、除外対象以外の全接続に配送する
//! - 配送に失敗した接続を切断扱いで追い出し、在室者一覧を再通知する
//!
//! ## 追い出しの流れ
//!
//! ```text
//! snapshot ──> broadcast ──> failed? ──yes──> unregister (directory + pusher)
//!                                              │
//!                                              └──> announce_presence（失敗が無くなるまで繰り返す）
//! ```
//!
//! 配送対象の決定とキューへの投入はルームのロックを保持したまま行う。
//! 投入は `try_send` で待たないため、他のルームを止めることはない。
//! 追い出しはファンアウトが終わり、ロックを解放してから行う。

use std::sync::Arc;

use crate::domain::{
    BroadcastReport, ConnectionId, MessagePusher, RoomEvent, RoomId, RoomRepository,
    presence::{build_presence_list, get_broadcast_targets},
};

/// ルーム単位のブロードキャスト
pub struct RoomBroadcaster {
    /// Repository（ルームディレクトリの抽象化）
    repository: Arc<dyn RoomRepository>,
    /// MessagePusher（メッセージ通知の抽象化）
    message_pusher: Arc<dyn MessagePusher>,
}

impl RoomBroadcaster {
    /// 新しい RoomBroadcaster を作成
    pub fn new(
        repository: Arc<dyn RoomRepository>,
        message_pusher: Arc<dyn MessagePusher>,
    ) -> Self {
        Self {
            repository,
            message_pusher,
        }
    }

    /// ルーム内の全接続（`exclude` を除く）にイベントを配送
    ///
    /// # Returns
    ///
    /// このイベントの配送結果。失敗した接続は追い出し済み
    pub async fn broadcast(
        &self,
        room_id: &RoomId,
        event: &RoomEvent,
        exclude: Option<&ConnectionId>,
    ) -> BroadcastReport {
        let report = self.fan_out(room_id, event, exclude).await;

        if report.has_failures() {
            self.evict(room_id, &report.failed).await;
            self.announce_presence(room_id).await;
        }

        report
    }

    /// ルームの在室者一覧を、新規参加者を含む全接続に通知
    ///
    /// # Returns
    ///
    /// 最後に通知した在室者一覧（登録順）
    pub async fn announce_presence(&self, room_id: &RoomId) -> Vec<String> {
        loop {
            // 一覧の作成と投入を同じロック下で行い、入退室と直列化する
            let Some(room) = self.repository.snapshot(room_id).await else {
                return Vec::new();
            };
            let users = build_presence_list(&room.participants);
            let targets = get_broadcast_targets(&room.participants, None);
            let event = RoomEvent::PresenceChanged {
                users: users.clone(),
            };
            let report = self.message_pusher.broadcast(targets, &event).await;
            drop(room);

            if !report.has_failures() {
                tracing::debug!("Announced presence of room '{}': {:?}", room_id, users);
                return users;
            }

            // 追い出した接続を除いた一覧で通知し直す
            self.evict(room_id, &report.failed).await;
        }
    }

    /// ルームのロックを保持したまま配送対象を選び、キューに投入する
    ///
    /// 追い出しはロックを解放してから行う
    async fn fan_out(
        &self,
        room_id: &RoomId,
        event: &RoomEvent,
        exclude: Option<&ConnectionId>,
    ) -> BroadcastReport {
        let Some(room) = self.repository.snapshot(room_id).await else {
            return BroadcastReport::default();
        };
        let targets = get_broadcast_targets(&room.participants, exclude);
        self.message_pusher.broadcast(targets, event).await
    }

    /// 配送に失敗した接続を切断扱いで登録解除
    async fn evict(&self, room_id: &RoomId, failed: &[ConnectionId]) {
        for connection_id in failed {
            if let Some(participant) = self.repository.unregister(room_id, connection_id).await {
                tracing::warn!(
                    "Evicted '{}' ({}) from room '{}' after a failed delivery",
                    participant.name,
                    connection_id,
                    room_id
                );
            }
            self.message_pusher.unregister_client(connection_id).await;
        }
    }
}
