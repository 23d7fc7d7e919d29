//! Protocol front door for a shared arena

use std::sync::Arc;

use pantheon_protocol::{ClientCommand, ErrorKind, ServerMessage, parse_client_command};
use pantheon_roster::{AccountLedger, HeroLookup};
use tracing::warn;

use crate::arena::Arena;
use crate::error::ArenaError;

/// Cheap, cloneable access to one arena from many tasks
pub struct ArenaHandle<H = pantheon_roster::HeroCatalog, L = pantheon_roster::AccountBook> {
    arena: Arc<Arena<H, L>>,
}

impl<H, L> Clone for ArenaHandle<H, L> {
    fn clone(&self) -> Self {
        Self {
            arena: Arc::clone(&self.arena),
        }
    }
}

impl<H: HeroLookup, L: AccountLedger> ArenaHandle<H, L> {
    pub fn new(arena: Arena<H, L>) -> Self {
        Self {
            arena: Arc::new(arena),
        }
    }

    pub fn arena(&self) -> &Arena<H, L> {
        &self.arena
    }

    /// Run one command and return the lines to send back
    pub fn dispatch(&self, command: &ClientCommand) -> Vec<ServerMessage> {
        match command {
            ClientCommand::Post { user, heroes } => match self.arena.post(*user, *heroes) {
                Ok(slot) => vec![ServerMessage::Posted(slot)],
                Err(err) => vec![error_message(&err)],
            },
            ClientCommand::Challenge { user, heroes } => {
                match self.arena.challenge(*user, *heroes) {
                    Ok(result) => result.to_messages(),
                    Err(err) => vec![error_message(&err)],
                }
            }
            ClientCommand::Poll(user) => match self.arena.poll(*user) {
                Some(result) => result.to_messages(),
                None => vec![ServerMessage::Nothing],
            },
            ClientCommand::Queue => match self.arena.queued() {
                Some(lineup) => vec![lineup.to_message()],
                None => vec![ServerMessage::QueueEmpty],
            },
            ClientCommand::Account(user) => match self.arena.account(*user) {
                Some(account) => vec![ServerMessage::Account {
                    user: account.id,
                    tokens: account.tokens,
                    wins: account.wins,
                    losses: account.losses,
                }],
                None => vec![error_message(&ArenaError::UnknownUser(*user))],
            },
        }
    }

    /// Parse a raw line and dispatch it
    pub fn dispatch_line(&self, line: &str) -> Vec<ServerMessage> {
        match parse_client_command(line) {
            Ok(command) => self.dispatch(&command),
            Err(err) => {
                warn!(%line, error = %err, "unparseable command");
                vec![ServerMessage::Error {
                    kind: ErrorKind::Protocol,
                    message: err.to_string(),
                }]
            }
        }
    }
}

fn error_message(err: &ArenaError) -> ServerMessage {
    ServerMessage::Error {
        kind: err.kind(),
        message: err.to_string(),
    }
}
