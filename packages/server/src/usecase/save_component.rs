//! UseCase: 保存要求への応答（save_component）
//!
//! 保存要求には要求元だけに成功応答を返す。永続化はこのサーバーの責務ではなく、
//! クライアントが別の HTTP API を通じて行う。
//!
//! ## テスト実装の作業記録
//!
//! ### 何をテストしているか
//! - SaveComponentUseCase::execute() メソッド
//! - 要求元にのみ応答が届くこと、送信失敗がエラーとして返ること

use std::sync::Arc;

use crate::domain::{ConnectionId, MessagePusher, RoomEvent};

use super::error::SaveComponentError;

/// 保存要求に返すメッセージ
pub const SAVE_ACK_MESSAGE: &str = "Diagram saved successfully";

/// 保存要求のユースケース
pub struct SaveComponentUseCase {
    /// MessagePusher（メッセージ通知の抽象化）
    message_pusher: Arc<dyn MessagePusher>,
}

impl SaveComponentUseCase {
    /// 新しい SaveComponentUseCase を作成
    pub fn new(message_pusher: Arc<dyn MessagePusher>) -> Self {
        Self { message_pusher }
    }

    /// 保存要求への応答を実行
    ///
    /// # Returns
    ///
    /// * `Ok(())` - 応答をキューに投入した
    /// * `Err(SaveComponentError)` - 要求元の送信キューが使えない（要求元の切断として扱う）
    pub async fn execute(&self, requester: &ConnectionId) -> Result<(), SaveComponentError> {
        let event = RoomEvent::SaveAcknowledged {
            success: true,
            message: SAVE_ACK_MESSAGE.to_string(),
        };
        self.message_pusher.push_to(requester, &event).await?;
        tracing::debug!("Acknowledged save request from '{}'", requester);
        Ok(())
    }
}
