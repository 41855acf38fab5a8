//! MessagePusher trait 定義
//!
//! 接続ごとの送信キューへのメッセージ配送を抽象化します。

use async_trait::async_trait;
use tokio::sync::mpsc;

use super::{ConnectionId, MessagePushError, RoomEvent};

/// 接続ごとの送信キュー（容量固定）
///
/// エンコード済みのメッセージを WebSocket 送信タスクへ渡す。
pub type PusherChannel = mpsc::Sender<String>;

/// ブロードキャストの結果
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BroadcastReport {
    /// キューへの投入に成功した接続
    pub delivered: Vec<ConnectionId>,
    /// 送信に失敗した接続（キュー満杯・切断済み）
    pub failed: Vec<ConnectionId>,
}

impl BroadcastReport {
    pub fn has_failures(&self) -> bool {
        !self.failed.is_empty()
    }
}

/// MessagePusher trait
///
/// ## 配送の性質
///
/// - ベストエフォート、最大 1 回
/// - 接続ごとの送信順序は保たれる（FIFO）
/// - ある接続への送信失敗は他の接続への配送に影響しない
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait MessagePusher: Send + Sync {
    /// 接続の送信キューを登録
    async fn register_client(&self, connection_id: ConnectionId, sender: PusherChannel);

    /// 接続の送信キューを登録解除（キューが閉じ、送信タスクが終了する）
    async fn unregister_client(&self, connection_id: &ConnectionId);

    /// 特定の接続にイベントを送信
    async fn push_to(
        &self,
        connection_id: &ConnectionId,
        event: &RoomEvent,
    ) -> Result<(), MessagePushError>;

    /// 複数の接続にイベントを送信
    ///
    /// 一部の接続への送信失敗は許容し、結果を `BroadcastReport` で返す
    async fn broadcast(&self, targets: Vec<ConnectionId>, event: &RoomEvent) -> BroadcastReport;
}
