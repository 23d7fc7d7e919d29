mod arena;
mod tests;

use crate::ids::{SlotId, UserId};
use anyhow::Result;

/// Failure category reported alongside an error message
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Bad ownership, duplicate hero, self challenge
    Validation,
    /// Queue already occupied, or nothing to challenge
    StateConflict,
    /// Unknown hero or user reference
    NotFound,
    /// The command line itself could not be parsed
    Protocol,
}

impl ErrorKind {
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "validation" => Some(ErrorKind::Validation),
            "conflict" => Some(ErrorKind::StateConflict),
            "notfound" => Some(ErrorKind::NotFound),
            "protocol" => Some(ErrorKind::Protocol),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorKind::Validation => "validation",
            ErrorKind::StateConflict => "conflict",
            ErrorKind::NotFound => "notfound",
            ErrorKind::Protocol => "protocol",
        }
    }
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Messages the arena sends back, one per line
#[derive(Debug, Clone, PartialEq)]
pub enum ServerMessage {
    /// |posted|SLOT
    Posted(SlotId),

    /// |result|WINNER|LOSER
    Victory { winner: String, loser: String },

    /// |result|draw
    Draw,

    /// |log|LINE
    Log(String),

    /// |nothing
    Nothing,

    /// |queue|empty
    QueueEmpty,

    /// |queue|SLOT|USER|SINCE (unix seconds)
    QueueOpen {
        slot: SlotId,
        poster: UserId,
        since: i64,
    },

    /// |account|USER|TOKENS|WINS|LOSSES
    Account {
        user: UserId,
        tokens: u32,
        wins: u32,
        losses: u32,
    },

    /// |error|KIND|MESSAGE
    Error { kind: ErrorKind, message: String },

    Raw(String),
}

impl ServerMessage {
    /// Serialize to a single wire line
    pub fn to_wire_format(&self) -> String {
        match self {
            Self::Posted(slot) => format!("|posted|{}", slot),
            Self::Victory { winner, loser } => format!("|result|{}|{}", winner, loser),
            Self::Draw => "|result|draw".to_string(),
            Self::Log(line) => format!("|log|{}", line),
            Self::Nothing => "|nothing".to_string(),
            Self::QueueEmpty => "|queue|empty".to_string(),
            Self::QueueOpen {
                slot,
                poster,
                since,
            } => format!("|queue|{}|{}|{}", slot, poster, since),
            Self::Account {
                user,
                tokens,
                wins,
                losses,
            } => format!("|account|{}|{}|{}|{}", user, tokens, wins, losses),
            Self::Error { kind, message } => format!("|error|{}|{}", kind, message),
            Self::Raw(line) => line.clone(),
        }
    }
}

/// Parse a single line from the arena into a ServerMessage
pub fn parse_server_message(line: &str) -> Result<ServerMessage> {
    let line = line.trim();

    if line.is_empty() {
        return Ok(ServerMessage::Raw(String::new()));
    }

    if !line.starts_with('|') {
        return Ok(ServerMessage::Raw(line.to_string()));
    }

    let parts: Vec<&str> = line.split('|').collect();

    if parts.len() < 2 {
        return Ok(ServerMessage::Raw(line.to_string()));
    }

    match parts[1] {
        "posted" => arena::parse_posted(&parts),
        "result" => arena::parse_result(&parts),
        "log" => arena::parse_log(&parts),
        "nothing" => Ok(ServerMessage::Nothing),
        "queue" => arena::parse_queue(&parts),
        "account" => arena::parse_account(&parts),
        "error" => arena::parse_error(&parts),
        _ => Ok(ServerMessage::Raw(line.to_string())),
    }
}
