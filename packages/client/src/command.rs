//! Parsing of input lines into protocol messages.

use zashiki_server::infrastructure::dto::websocket::ClientMessage;

/// What a single input line asks the client to do
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputCommand {
    /// Send a message to the room
    Send(ClientMessage),
    /// Leave the room and exit
    Quit,
}

/// Parse one input line.
///
/// `/save`, `/who` and `/quit` are commands; any other non-empty line is sent
/// verbatim as diagram content. Blank lines yield `None`.
pub fn parse_input(line: &str) -> Option<InputCommand> {
    let line = line.trim();
    if line.is_empty() {
        return None;
    }

    let command = match line {
        "/save" => InputCommand::Send(ClientMessage::SaveComponent),
        "/who" => InputCommand::Send(ClientMessage::Login),
        "/quit" => InputCommand::Quit,
        xml => InputCommand::Send(ClientMessage::DrawComponent {
            xml: xml.to_string(),
        }),
    };
    Some(command)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_commands() {
        // テスト項目: スラッシュコマンドが対応するメッセージに変換される
        // given (前提条件):
        let inputs = ["/save", "/who", "/quit"];

        // when (操作):
        let parsed: Vec<_> = inputs.iter().map(|line| parse_input(line)).collect();

        // then (期待する結果):
        assert_eq!(
            parsed,
            vec![
                Some(InputCommand::Send(ClientMessage::SaveComponent)),
                Some(InputCommand::Send(ClientMessage::Login)),
                Some(InputCommand::Quit),
            ]
        );
    }

    #[test]
    fn test_parse_plain_line_as_draw() {
        // テスト項目: コマンド以外の行は前後の空白を除いて draw_component になる
        // given (前提条件):
        let line = "  <mxGraphModel><root/></mxGraphModel>\n";

        // when (操作):
        let parsed = parse_input(line);

        // then (期待する結果):
        assert_eq!(
            parsed,
            Some(InputCommand::Send(ClientMessage::DrawComponent {
                xml: "<mxGraphModel><root/></mxGraphModel>".to_string(),
            }))
        );
    }

    #[test]
    fn test_parse_unknown_slash_is_draw() {
        // テスト項目: 未知のスラッシュ始まりの行も図の内容として送られる
        // given (前提条件):
        let line = "/unknown";

        // when (操作):
        let parsed = parse_input(line);

        // then (期待する結果):
        assert_eq!(
            parsed,
            Some(InputCommand::Send(ClientMessage::DrawComponent {
                xml: "/unknown".to_string(),
            }))
        );
    }

    #[test]
    fn test_parse_blank_line() {
        // テスト項目: 空行は何も送らない
        // given (前提条件):
        let line = "   ";

        // when (操作):
        let parsed = parse_input(line);

        // then (期待する結果):
        assert_eq!(parsed, None);
    }
}
