//! Tests of the read-only HTTP API.

mod common;

use common::{join, recv_json, send_json, spawn_server};
use serde_json::{Value, json};

#[tokio::test]
async fn test_health_check() {
    // テスト項目: ヘルスチェックが ok を返す
    // given (前提条件):
    let addr = spawn_server().await;

    // when (操作):
    let response = reqwest::get(format!("http://{}/api/health", addr))
        .await
        .expect("Request failed");

    // then (期待する結果):
    assert_eq!(response.status(), 200);
    let body: Value = response.json().await.expect("Invalid JSON");
    assert_eq!(body, json!({"status": "ok"}));
}

#[tokio::test]
async fn test_list_rooms_sorted_with_participants() {
    // テスト項目: ルーム一覧が ID 順に在室者名付きで返る
    // given (前提条件):
    let addr = spawn_server().await;
    let _carol = join(addr, "R2", "carol").await;
    let mut alice = join(addr, "R1", "alice").await;
    let _bob = join(addr, "R1", "bob").await;
    recv_json(&mut alice).await;

    // when (操作):
    let rooms: Value = reqwest::get(format!("http://{}/api/rooms", addr))
        .await
        .expect("Request failed")
        .json()
        .await
        .expect("Invalid JSON");

    // then (期待する結果):
    let rooms = rooms.as_array().expect("Expected an array");
    assert_eq!(rooms.len(), 2);
    assert_eq!(rooms[0]["id"], "R1");
    assert_eq!(rooms[0]["participants"], json!(["alice", "bob"]));
    assert_eq!(rooms[1]["id"], "R2");
    assert_eq!(rooms[1]["participants"], json!(["carol"]));
}

#[tokio::test]
async fn test_room_detail_reports_diagram() {
    // テスト項目: 図が描かれたルームの詳細で has_diagram が true になる
    // given (前提条件):
    let addr = spawn_server().await;
    let mut alice = join(addr, "R1", "alice").await;
    let mut bob = join(addr, "R1", "bob").await;
    recv_json(&mut alice).await;
    send_json(&mut alice, json!({"type": "draw_component", "xml": "<model/>"})).await;
    recv_json(&mut bob).await;

    // when (操作):
    let response = reqwest::get(format!("http://{}/api/rooms/R1", addr))
        .await
        .expect("Request failed");

    // then (期待する結果):
    assert_eq!(response.status(), 200);
    let detail: Value = response.json().await.expect("Invalid JSON");
    assert_eq!(detail["id"], "R1");
    assert_eq!(detail["has_diagram"], true);
    let participants = detail["participants"].as_array().expect("Expected an array");
    assert_eq!(participants.len(), 2);
    assert_eq!(participants[0]["name"], "alice");
    assert_eq!(participants[1]["name"], "bob");
}

#[tokio::test]
async fn test_room_detail_not_found() {
    // テスト項目: 存在しないルームは 404 を返す
    // given (前提条件):
    let addr = spawn_server().await;

    // when (操作):
    let response = reqwest::get(format!("http://{}/api/rooms/nowhere", addr))
        .await
        .expect("Request failed");

    // then (期待する結果):
    assert_eq!(response.status(), 404);
}

#[tokio::test]
async fn test_room_detail_invalid_id() {
    // テスト項目: 空白だけのルーム ID は 400 を返す
    // given (前提条件):
    let addr = spawn_server().await;

    // when (操作):
    let response = reqwest::get(format!("http://{}/api/rooms/%20", addr))
        .await
        .expect("Request failed");

    // then (期待する結果):
    assert_eq!(response.status(), 400);
}
