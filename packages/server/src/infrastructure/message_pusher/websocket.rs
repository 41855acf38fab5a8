//! WebSocket を使った MessagePusher 実装
//!
//! ## 責務
//!
//! - 接続ごとの送信キュー（`mpsc::Sender`、容量固定）を管理
//! - `RoomEvent` をワイヤ形式の JSON にエンコードし、キューへ投入（push_to, broadcast）
//!
//! ## 設計ノート
//!
//! WebSocket の生成と送信タスクは UI 層（`ui/handler/websocket.rs`）が持ちます。
//! この実装はキューへの投入だけを行い、`try_send` で待たずに失敗を返します。
//! 応答の遅いクライアントがいても、他のクライアントへの配送は止まりません。
//!
//! キューの登録を解除すると sender が破棄され、送信タスクは残りを送り切ってから終了します。

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::{RwLock, mpsc::error::TrySendError};

use crate::{
    domain::{
        BroadcastReport, ConnectionId, MessagePushError, MessagePusher, PusherChannel, RoomEvent,
    },
    infrastructure::dto::websocket::ServerMessage,
};

/// WebSocket を使った MessagePusher 実装
#[derive(Default)]
pub struct WebSocketMessagePusher {
    /// 接続中のクライアントの送信キュー
    clients: RwLock<HashMap<ConnectionId, PusherChannel>>,
}

impl WebSocketMessagePusher {
    /// 新しい WebSocketMessagePusher を作成
    pub fn new() -> Self {
        Self::default()
    }

    /// イベントをワイヤ形式にエンコード
    fn encode(event: &RoomEvent) -> Result<String, MessagePushError> {
        serde_json::to_string(&ServerMessage::from(event))
            .map_err(|e| MessagePushError::Encode(e.to_string()))
    }

    /// 送信キューに投入（待たない）
    fn try_push(
        connection_id: &ConnectionId,
        sender: &PusherChannel,
        content: String,
    ) -> Result<(), MessagePushError> {
        sender.try_send(content).map_err(|e| match e {
            TrySendError::Full(_) => MessagePushError::QueueFull(connection_id.to_string()),
            TrySendError::Closed(_) => MessagePushError::ChannelClosed(connection_id.to_string()),
        })
    }
}

#[async_trait]
impl MessagePusher for WebSocketMessagePusher {
    async fn register_client(&self, connection_id: ConnectionId, sender: PusherChannel) {
        let mut clients = self.clients.write().await;
        clients.insert(connection_id, sender);
        tracing::debug!("Connection '{}' registered to MessagePusher", connection_id);
    }

    async fn unregister_client(&self, connection_id: &ConnectionId) {
        let mut clients = self.clients.write().await;
        if clients.remove(connection_id).is_some() {
            tracing::debug!(
                "Connection '{}' unregistered from MessagePusher",
                connection_id
            );
        }
    }

    async fn push_to(
        &self,
        connection_id: &ConnectionId,
        event: &RoomEvent,
    ) -> Result<(), MessagePushError> {
        let content = Self::encode(event)?;
        let clients = self.clients.read().await;

        let sender = clients
            .get(connection_id)
            .ok_or_else(|| MessagePushError::ClientNotFound(connection_id.to_string()))?;
        Self::try_push(connection_id, sender, content)?;
        tracing::debug!("Pushed {} to connection '{}'", event.kind(), connection_id);
        Ok(())
    }

    async fn broadcast(&self, targets: Vec<ConnectionId>, event: &RoomEvent) -> BroadcastReport {
        let content = match Self::encode(event) {
            Ok(content) => content,
            Err(e) => {
                tracing::error!("Dropping {} broadcast: {}", event.kind(), e);
                return BroadcastReport::default();
            }
        };

        let clients = self.clients.read().await;
        let mut report = BroadcastReport::default();

        for target in targets {
            let Some(sender) = clients.get(&target) else {
                // スナップショット取得後に切断された接続
                tracing::debug!("Connection '{}' already gone, skipping", target);
                continue;
            };

            match Self::try_push(&target, sender, content.clone()) {
                Ok(()) => report.delivered.push(target),
                Err(e) => {
                    tracing::warn!("Failed to push {}: {}", event.kind(), e);
                    report.failed.push(target);
                }
            }
        }

        tracing::debug!(
            "Broadcasted {} to {} connection(s), {} failed",
            event.kind(),
            report.delivered.len(),
            report.failed.len()
        );
        report
    }
}
