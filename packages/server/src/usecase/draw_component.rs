//! UseCase: 図の変更（draw_component）
//!
//! ## テスト実装の作業記録
//!
//! ### 何をテストしているか
//! - DrawComponentUseCase::execute() メソッド
//! - 図キャッシュの上書きと、送信者以外へのブロードキャスト
//!
//! ### なぜこのテストが必要か
//! - 競合解決は最後の書き込みが勝つ方式。バージョンもマージも無い
//! - 送信者自身には変更を送り返さない
//!
//! ### どのような状況を想定しているか
//! - 正常系：変更のブロードキャスト
//! - エッジケース：送信者のみが接続している場合（ブロードキャスト対象なし）

use std::sync::Arc;

use crate::domain::{BroadcastReport, ConnectionId, RoomEvent, RoomId, RoomRepository};

use super::broadcast::RoomBroadcaster;

/// 図の変更のユースケース
pub struct DrawComponentUseCase {
    /// Repository（ルームディレクトリの抽象化）
    repository: Arc<dyn RoomRepository>,
    /// ルーム単位のブロードキャスト
    broadcaster: Arc<RoomBroadcaster>,
}

impl DrawComponentUseCase {
    /// 新しい DrawComponentUseCase を作成
    pub fn new(repository: Arc<dyn RoomRepository>, broadcaster: Arc<RoomBroadcaster>) -> Self {
        Self {
            repository,
            broadcaster,
        }
    }

    /// 図の変更を実行
    ///
    /// # Arguments
    ///
    /// * `room_id` - 送信者のルーム
    /// * `sender` - 送信者の接続（配送対象から除外）
    /// * `xml` - 図の内容
    pub async fn execute(
        &self,
        room_id: &RoomId,
        sender: &ConnectionId,
        xml: String,
    ) -> BroadcastReport {
        // 1. 図キャッシュを上書き
        self.repository.update_diagram(room_id, xml.clone()).await;

        // 2. 送信者以外にブロードキャスト
        let event = RoomEvent::DiagramChanged { xml };
        let report = self
            .broadcaster
            .broadcast(room_id, &event, Some(sender))
            .await;
        tracing::debug!(
            "Diagram mutation from '{}' in room '{}' delivered to {} peer(s)",
            sender,
            room_id,
            report.delivered.len()
        );
        report
    }
}
