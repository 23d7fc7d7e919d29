use super::{ErrorKind, ServerMessage};
use crate::ParseError;
use anyhow::Result;

pub fn parse_posted(parts: &[&str]) -> Result<ServerMessage> {
    if parts.len() < 3 {
        return Err(ParseError::MissingField("posted slot".to_string()).into());
    }

    Ok(ServerMessage::Posted(parts[2].parse()?))
}

pub fn parse_result(parts: &[&str]) -> Result<ServerMessage> {
    match parts.len() {
        3 if parts[2] == "draw" => Ok(ServerMessage::Draw),
        4 => Ok(ServerMessage::Victory {
            winner: parts[2].to_string(),
            loser: parts[3].to_string(),
        }),
        _ => Err(ParseError::InvalidFormat("result expects WINNER|LOSER or draw".to_string()).into()),
    }
}

pub fn parse_log(parts: &[&str]) -> Result<ServerMessage> {
    if parts.len() < 3 {
        return Err(ParseError::MissingField("log line".to_string()).into());
    }

    // Log lines may contain | characters
    Ok(ServerMessage::Log(parts[2..].join("|")))
}

pub fn parse_queue(parts: &[&str]) -> Result<ServerMessage> {
    if parts.len() == 3 && parts[2] == "empty" {
        return Ok(ServerMessage::QueueEmpty);
    }

    if parts.len() < 5 {
        return Err(ParseError::MissingField("queue fields".to_string()).into());
    }

    let since = parts[4]
        .parse()
        .map_err(|_| ParseError::InvalidFormat(format!("invalid timestamp: {}", parts[4])))?;

    Ok(ServerMessage::QueueOpen {
        slot: parts[2].parse()?,
        poster: parts[3].parse()?,
        since,
    })
}

pub fn parse_account(parts: &[&str]) -> Result<ServerMessage> {
    if parts.len() < 6 {
        return Err(ParseError::MissingField("account fields".to_string()).into());
    }

    let number = |raw: &str| -> Result<u32> {
        raw.parse()
            .map_err(|_| ParseError::InvalidFormat(format!("invalid counter: {raw}")).into())
    };

    Ok(ServerMessage::Account {
        user: parts[2].parse()?,
        tokens: number(parts[3])?,
        wins: number(parts[4])?,
        losses: number(parts[5])?,
    })
}

pub fn parse_error(parts: &[&str]) -> Result<ServerMessage> {
    if parts.len() < 4 {
        return Err(ParseError::MissingField("error fields".to_string()).into());
    }

    let kind = ErrorKind::parse(parts[2])
        .ok_or_else(|| ParseError::InvalidFormat(format!("unknown error kind: {}", parts[2])))?;

    Ok(ServerMessage::Error {
        kind,
        message: parts[3..].join("|"),
    })
}
