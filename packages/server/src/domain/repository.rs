//! Repository trait 定義
//!
//! ドメイン層が必要とするルームディレクトリのインターフェースを定義します。
//! 具体的な実装は Infrastructure 層が提供します（依存性の逆転）。

use async_trait::async_trait;
use tokio::sync::OwnedMutexGuard;

use super::{ConnectionId, Participant, RepositoryError, Room, RoomId};

/// Room Repository trait（ルームディレクトリ）
///
/// ルーム ID から、そのルームに接続中の参加者と最新の図キャッシュへの対応を保持する。
/// UseCase 層はこの trait に依存し、Infrastructure 層の具体的な実装には依存しない。
///
/// ## 一貫性
///
/// - 変更と読み取りはルーム単位で同期される
/// - 読み取りは登録途中・削除途中の参加者を観測しない
/// - `snapshot` のガードを保持している間、そのルームへの登録・解除は待たされる
#[async_trait]
pub trait RoomRepository: Send + Sync {
    /// 参加者を登録（ルームが無ければ作成する。表示名の重複はチェックしない）
    async fn register(&self, room_id: &RoomId, participant: Participant);

    /// 参加者を登録解除（存在しない場合は何もしない）
    ///
    /// 削除された参加者を返す
    async fn unregister(&self, room_id: &RoomId, connection_id: &ConnectionId)
    -> Option<Participant>;

    /// 接続中の参加者をロックしたまま取得（存在しない場合は None）
    ///
    /// ファンアウトをガードの保持中に行うと、配送対象と配送順が
    /// ディレクトリの変更と直列化される
    async fn snapshot(&self, room_id: &RoomId) -> Option<OwnedMutexGuard<Room>>;

    /// ルームの図キャッシュを上書き（ルームが無ければ何もしない）
    async fn update_diagram(&self, room_id: &RoomId, xml: String);

    /// Room エンティティを取得
    async fn get_room(&self, room_id: &RoomId) -> Result<Room, RepositoryError>;

    /// 全ての Room を ID 順で取得
    async fn list_rooms(&self) -> Vec<Room>;
}
