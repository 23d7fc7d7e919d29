#[cfg(test)]
mod tests {
    use crate::{ErrorKind, ServerMessage, SlotId, UserId, parse_server_message};

    #[test]
    fn test_parse_posted() {
        let message = parse_server_message("|posted|4").unwrap();

        assert_eq!(message, ServerMessage::Posted(SlotId(4)));
    }

    #[test]
    fn test_parse_posted_invalid() {
        assert!(parse_server_message("|posted|").is_err());
        assert!(parse_server_message("|posted").is_err());
    }

    #[test]
    fn test_parse_result() {
        let message = parse_server_message("|result|jason|mira").unwrap();
        assert_eq!(
            message,
            ServerMessage::Victory {
                winner: "jason".into(),
                loser: "mira".into()
            }
        );

        assert_eq!(parse_server_message("|result|draw").unwrap(), ServerMessage::Draw);
        assert!(parse_server_message("|result|a|b|c").is_err());
    }

    #[test]
    fn test_parse_log_keeps_pipes() {
        let message = parse_server_message("|log|Ares attacks Hera | twice").unwrap();

        assert_eq!(message, ServerMessage::Log("Ares attacks Hera | twice".into()));
    }

    #[test]
    fn test_parse_queue() {
        assert_eq!(parse_server_message("|queue|empty").unwrap(), ServerMessage::QueueEmpty);

        let message = parse_server_message("|queue|2|7|1700000000").unwrap();
        assert_eq!(
            message,
            ServerMessage::QueueOpen {
                slot: SlotId(2),
                poster: UserId(7),
                since: 1_700_000_000,
            }
        );
    }

    #[test]
    fn test_parse_account() {
        let message = parse_server_message("|account|3|65|1|0").unwrap();
        assert_eq!(
            message,
            ServerMessage::Account {
                user: UserId(3),
                tokens: 65,
                wins: 1,
                losses: 0
            }
        );
        assert!(parse_server_message("|account|3|x|1|0").is_err());
    }

    #[test]
    fn test_parse_error() {
        let message = parse_server_message("|error|conflict|A lineup is already queued").unwrap();
        assert_eq!(
            message,
            ServerMessage::Error {
                kind: ErrorKind::StateConflict,
                message: "A lineup is already queued".into()
            }
        );
        assert!(parse_server_message("|error|weird|oops").is_err());
    }

    #[test]
    fn test_parse_unknown() {
        let line = "|someunknown|data";
        let message = parse_server_message(line).unwrap();

        assert_eq!(message, ServerMessage::Raw("|someunknown|data".to_string()));
    }

    #[test]
    fn test_parse_empty() {
        let message = parse_server_message("").unwrap();

        assert_eq!(message, ServerMessage::Raw("".to_string()));
    }

    #[test]
    fn test_wire_format_parses_back() {
        let messages = [
            ServerMessage::Posted(SlotId(1)),
            ServerMessage::Draw,
            ServerMessage::Nothing,
            ServerMessage::QueueEmpty,
            ServerMessage::Log("Zeus starts the battle!".into()),
            ServerMessage::Error {
                kind: ErrorKind::NotFound,
                message: "Unknown hero 99".into(),
            },
        ];

        for message in messages {
            assert_eq!(parse_server_message(&message.to_wire_format()).unwrap(), message);
        }
    }
}
