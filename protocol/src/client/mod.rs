use anyhow::Result;

use crate::ParseError;
use crate::ids::{HeroId, UserId};

/// Commands that clients can send to the arena
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClientCommand {
    /// |post|USER|H1|H2|H3
    Post { user: UserId, heroes: [HeroId; 3] },

    /// |challenge|USER|H1|H2|H3
    Challenge { user: UserId, heroes: [HeroId; 3] },

    /// |poll|USER
    Poll(UserId),

    /// |queue
    Queue,

    /// |account|USER
    Account(UserId),
}

impl ClientCommand {
    /// Serialize command to wire format
    pub fn to_wire_format(&self) -> String {
        match self {
            Self::Post { user, heroes } => {
                format!("|post|{}|{}|{}|{}", user, heroes[0], heroes[1], heroes[2])
            }
            Self::Challenge { user, heroes } => {
                format!("|challenge|{}|{}|{}|{}", user, heroes[0], heroes[1], heroes[2])
            }
            Self::Poll(user) => format!("|poll|{}", user),
            Self::Queue => "|queue".to_string(),
            Self::Account(user) => format!("|account|{}", user),
        }
    }
}

/// Parse a single command line sent by a client
pub fn parse_client_command(line: &str) -> Result<ClientCommand> {
    let line = line.trim();

    if line.is_empty() {
        return Err(ParseError::EmptyMessage.into());
    }

    let parts: Vec<&str> = line.split('|').collect();
    if parts.len() < 2 || !parts[0].is_empty() {
        return Err(ParseError::InvalidFormat(format!("expected |COMMAND, got {line}")).into());
    }

    match parts[1] {
        "post" => {
            let (user, heroes) = parse_lineup(&parts, "post")?;
            Ok(ClientCommand::Post { user, heroes })
        }
        "challenge" => {
            let (user, heroes) = parse_lineup(&parts, "challenge")?;
            Ok(ClientCommand::Challenge { user, heroes })
        }
        "poll" => Ok(ClientCommand::Poll(parse_user(&parts, "poll")?)),
        "queue" => Ok(ClientCommand::Queue),
        "account" => Ok(ClientCommand::Account(parse_user(&parts, "account")?)),
        other => Err(ParseError::UnknownCommand(other.to_string()).into()),
    }
}

fn parse_user(parts: &[&str], command: &str) -> Result<UserId> {
    let raw = parts
        .get(2)
        .ok_or_else(|| ParseError::MissingField(format!("{command} user")))?;
    Ok(raw.parse()?)
}

fn parse_lineup(parts: &[&str], command: &str) -> Result<(UserId, [HeroId; 3])> {
    // |COMMAND|USER|H1|H2|H3
    if parts.len() < 6 {
        return Err(ParseError::MissingField(format!("{command} lineup")).into());
    }
    if parts.len() > 6 {
        return Err(ParseError::InvalidFormat(format!("{command} takes exactly three heroes")).into());
    }

    let user = parts[2].parse()?;
    let heroes = [parts[3].parse()?, parts[4].parse()?, parts[5].parse()?];
    Ok((user, heroes))
}
