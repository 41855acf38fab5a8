//! InMemory Room Repository 実装
//!
//! ドメイン層が定義する RoomRepository trait の具体的な実装。
//! HashMap をインメモリのルームディレクトリとして使用します。
//!
//! ## ロック粒度
//!
//! ```text
//! rooms: RwLock<HashMap<RoomId, Arc<Mutex<Room>>>>
//!        └─ ルームの検索・作成・破棄のみ   └─ ルーム単位の変更とスナップショット
//! ```
//!
//! あるルームの入退室が、他のルームのブロードキャストを止めることはない。
//! 空ルームの破棄を有効にした場合、最後の参加者の削除と破棄は書き込みロック下で行い、
//! 同時に行われた登録が破棄済みのルームに入ることはない。

use std::{collections::HashMap, sync::Arc};

use async_trait::async_trait;
use tokio::sync::{Mutex, OwnedMutexGuard, RwLock};
use zashiki_shared::time::Clock;

use crate::domain::{
    ConnectionId, Participant, RepositoryError, Room, RoomId, RoomRepository, Timestamp,
};

/// インメモリ Room Repository 実装
pub struct InMemoryRoomRepository {
    /// ルーム ID から Room ドメインモデルへの対応
    rooms: RwLock<HashMap<RoomId, Arc<Mutex<Room>>>>,
    /// ルーム作成時刻の取得元
    clock: Arc<dyn Clock>,
    /// 最後の参加者が抜けたルームを破棄するか
    evict_empty_rooms: bool,
}

impl InMemoryRoomRepository {
    /// 新しい InMemoryRoomRepository を作成
    pub fn new(clock: Arc<dyn Clock>, evict_empty_rooms: bool) -> Self {
        Self {
            rooms: RwLock::new(HashMap::new()),
            clock,
            evict_empty_rooms,
        }
    }

    /// 既存のルームを取得
    async fn find(&self, room_id: &RoomId) -> Option<Arc<Mutex<Room>>> {
        self.rooms.read().await.get(room_id).cloned()
    }

    /// ルームを取得し、無ければ作成する
    async fn find_or_create(&self, room_id: &RoomId) -> Arc<Mutex<Room>> {
        if let Some(room) = self.find(room_id).await {
            return room;
        }

        let mut rooms = self.rooms.write().await;
        rooms
            .entry(room_id.clone())
            .or_insert_with(|| {
                tracing::info!("Room '{}' created", room_id);
                Arc::new(Mutex::new(Room::new(
                    room_id.clone(),
                    Timestamp::new(self.clock.now_millis()),
                )))
            })
            .clone()
    }
}

#[async_trait]
impl RoomRepository for InMemoryRoomRepository {
    async fn register(&self, room_id: &RoomId, participant: Participant) {
        loop {
            let room = self.find_or_create(room_id).await;

            // 読み取りロックを保持したまま登録し、破棄との競合を防ぐ
            let rooms = self.rooms.read().await;
            let still_listed = rooms
                .get(room_id)
                .is_some_and(|listed| Arc::ptr_eq(listed, &room));
            if !still_listed {
                // 取得後に破棄された。作り直して再試行する
                continue;
            }

            let mut room = room.lock().await;
            tracing::debug!(
                "Connection '{}' ({}) registered to room '{}'",
                participant.connection_id,
                participant.name,
                room_id
            );
            room.add_participant(participant);
            return;
        }
    }

    async fn unregister(
        &self,
        room_id: &RoomId,
        connection_id: &ConnectionId,
    ) -> Option<Participant> {
        if self.evict_empty_rooms {
            let mut rooms = self.rooms.write().await;
            let room = rooms.get(room_id)?.clone();
            let mut room = room.lock().await;
            let removed = room.remove_participant(connection_id);
            if removed.is_some() && room.is_empty() {
                rooms.remove(room_id);
                tracing::info!("Room '{}' is empty and was evicted", room_id);
            }
            return removed;
        }

        let room = self.find(room_id).await?;
        let removed = room.lock().await.remove_participant(connection_id);
        if removed.is_some() {
            tracing::debug!(
                "Connection '{}' unregistered from room '{}'",
                connection_id,
                room_id
            );
        }
        removed
    }

    async fn snapshot(&self, room_id: &RoomId) -> Option<OwnedMutexGuard<Room>> {
        let room = self.find(room_id).await?;
        Some(room.lock_owned().await)
    }

    async fn update_diagram(&self, room_id: &RoomId, xml: String) {
        // ルームは参加時にだけ作られる
        match self.find(room_id).await {
            Some(room) => room.lock().await.update_diagram(xml),
            None => tracing::debug!("Ignoring diagram for unknown room '{}'", room_id),
        }
    }

    async fn get_room(&self, room_id: &RoomId) -> Result<Room, RepositoryError> {
        let room = self
            .find(room_id)
            .await
            .ok_or_else(|| RepositoryError::RoomNotFound(room_id.as_str().to_string()))?;
        let room = room.lock().await;
        Ok(room.clone())
    }

    async fn list_rooms(&self) -> Vec<Room> {
        let entries: Vec<Arc<Mutex<Room>>> = self.rooms.read().await.values().cloned().collect();

        let mut rooms = Vec::with_capacity(entries.len());
        for entry in entries {
            rooms.push(entry.lock().await.clone());
        }
        rooms.sort_by(|a, b| a.id.cmp(&b.id));
        rooms
    }
}
