use thiserror::Error;

pub mod client;
pub mod ids;
pub mod server;

pub use client::{ClientCommand, parse_client_command};
pub use ids::{HeroId, SlotId, UserId};
pub use server::{ErrorKind, ServerMessage, parse_server_message};

#[derive(Error, Debug)]
pub enum ParseError {
    #[error("Invalid message format: {0}")]
    InvalidFormat(String),

    #[error("Missing required field: {0}")]
    MissingField(String),

    #[error("Unknown command: {0}")]
    UnknownCommand(String),

    #[error("Empty message")]
    EmptyMessage,
}
