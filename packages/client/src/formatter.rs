//! Message formatting utilities for client display.

use zashiki_server::infrastructure::dto::websocket::ServerMessage;
use zashiki_shared::time::timestamp_to_rfc3339;

const RULE: &str = "============================================================";

/// Message formatter for client display
pub struct MessageFormatter;

impl MessageFormatter {
    /// Format any server message received at `received_at` (milliseconds)
    pub fn format_server_message(message: &ServerMessage, me: &str, received_at: i64) -> String {
        match message {
            ServerMessage::ReloadUsersRoom { users } => Self::format_presence(users, me),
            ServerMessage::DrawComponent { xml } => Self::format_diagram(xml, received_at),
            ServerMessage::SaveResponse { success, message } => {
                Self::format_save_response(*success, message)
            }
        }
    }

    /// Format the presence list, marking entries with the current name
    ///
    /// # Arguments
    ///
    /// * `users` - Display names in join order (may repeat)
    /// * `me` - The current client's display name
    pub fn format_presence(users: &[String], me: &str) -> String {
        let mut output = String::new();
        output.push_str("\n\n");
        output.push_str(RULE);
        output.push_str(&format!("\nIn room ({}):\n", users.len()));

        if users.is_empty() {
            output.push_str("(No participants)\n");
        } else {
            for user in users {
                let me_suffix = if user == me { " (me)" } else { "" };
                output.push_str(&format!("{}{}\n", user, me_suffix));
            }
        }

        output.push_str(RULE);
        output.push('\n');
        output
    }

    /// Format a diagram update from another peer
    pub fn format_diagram(xml: &str, received_at: i64) -> String {
        format!(
            "\n\n------------------------------------------------------------\n\
             ~ diagram updated at {}\n\
             {}\n\
             ------------------------------------------------------------\n",
            timestamp_to_rfc3339(received_at),
            xml
        )
    }

    pub fn format_save_response(success: bool, message: &str) -> String {
        if success {
            format!("\n[saved] {}\n", message)
        } else {
            format!("\n[save failed] {}\n", message)
        }
    }

    /// Format a confirmation message after sending
    pub fn format_sent_confirmation(sent_at: i64) -> String {
        format!("sent at {}\n", timestamp_to_rfc3339(sent_at))
    }

    /// Format a binary message notification
    pub fn format_binary_message(byte_count: usize) -> String {
        format!("\n← Received {} bytes of binary data\n", byte_count)
    }

    /// Format a raw text message (when parsing fails)
    pub fn format_raw_message(text: &str) -> String {
        format!("\n← Received: {}\n", text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_presence_with_empty_list() {
        // テスト項目: 在室者が空の場合、適切なメッセージが表示される
        // given (前提条件):
        let users: Vec<String> = vec![];

        // when (操作):
        let result = MessageFormatter::format_presence(&users, "alice");

        // then (期待する結果):
        assert!(result.contains("In room (0):"));
        assert!(result.contains("(No participants)"));
        assert!(result.contains(RULE));
    }

    #[test]
    fn test_format_presence_marks_me() {
        // テスト項目: 自分の表示名にマークが付き、他の在室者には付かない
        // given (前提条件):
        let users = vec!["alice".to_string(), "bob".to_string()];

        // when (操作):
        let result = MessageFormatter::format_presence(&users, "alice");

        // then (期待する結果):
        assert!(result.contains("In room (2):"));
        assert!(result.contains("alice (me)\n"));
        assert!(result.contains("bob\n"));
        assert!(!result.contains("bob (me)"));
    }

    #[test]
    fn test_format_presence_keeps_duplicates() {
        // テスト項目: 同名の在室者はそれぞれ表示される
        // given (前提条件):
        let users = vec!["alice".to_string(), "alice".to_string()];

        // when (操作):
        let result = MessageFormatter::format_presence(&users, "bob");

        // then (期待する結果):
        assert_eq!(result.matches("alice\n").count(), 2);
    }

    #[test]
    fn test_format_diagram() {
        // テスト項目: 図の更新が内容と受信時刻付きでフォーマットされる
        // given (前提条件):
        let xml = "<mxGraphModel/>";
        let received_at = 1672498800000;

        // when (操作):
        let result = MessageFormatter::format_diagram(xml, received_at);

        // then (期待する結果):
        assert!(result.contains("diagram updated at 2022-12-31T15:00:00.000Z"));
        assert!(result.contains("<mxGraphModel/>"));
    }

    #[test]
    fn test_format_save_response() {
        // テスト項目: 保存応答の成否に応じて表示が変わる
        // given (前提条件):
        let message = "Diagram saved successfully";

        // when (操作):
        let ok = MessageFormatter::format_save_response(true, message);
        let ng = MessageFormatter::format_save_response(false, "disk full");

        // then (期待する結果):
        assert_eq!(ok, "\n[saved] Diagram saved successfully\n");
        assert_eq!(ng, "\n[save failed] disk full\n");
    }

    #[test]
    fn test_format_server_message_dispatches_by_type() {
        // テスト項目: ServerMessage の種類ごとに対応するフォーマットが使われる
        // given (前提条件):
        let presence = ServerMessage::ReloadUsersRoom {
            users: vec!["alice".to_string()],
        };
        let draw = ServerMessage::DrawComponent {
            xml: "<x/>".to_string(),
        };

        // when (操作):
        let presence_out = MessageFormatter::format_server_message(&presence, "alice", 0);
        let draw_out = MessageFormatter::format_server_message(&draw, "alice", 0);

        // then (期待する結果):
        assert_eq!(
            presence_out,
            MessageFormatter::format_presence(&["alice".to_string()], "alice")
        );
        assert_eq!(draw_out, MessageFormatter::format_diagram("<x/>", 0));
    }

    #[test]
    fn test_format_raw_and_binary() {
        // テスト項目: 解釈できないメッセージがそのまま表示される
        // given (前提条件):
        let text = "not json";

        // when (操作):
        let raw = MessageFormatter::format_raw_message(text);
        let binary = MessageFormatter::format_binary_message(3);

        // then (期待する結果):
        assert_eq!(raw, "\n← Received: not json\n");
        assert_eq!(binary, "\n← Received 3 bytes of binary data\n");
    }
}
