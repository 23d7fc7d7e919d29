use std::path::PathBuf;

use pantheon_protocol::{ErrorKind, HeroId, SlotId, UserId};
use thiserror::Error;

/// Why an arena operation was refused. Nothing is written when one is returned.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ArenaError {
    #[error("User {user} does not own hero {hero}")]
    NotOwned { user: UserId, hero: HeroId },

    #[error("Hero {0} appears more than once in the lineup")]
    DuplicateHero(HeroId),

    #[error("User {0} cannot challenge their own lineup")]
    SelfChallenge(UserId),

    #[error("Slot {0} is already waiting for a challenger")]
    SlotBusy(SlotId),

    #[error("No lineup is waiting for a challenger")]
    NoQueue,

    #[error("Unknown hero {0}")]
    UnknownHero(HeroId),

    #[error("Unknown user {0}")]
    UnknownUser(UserId),
}

impl ArenaError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            ArenaError::NotOwned { .. }
            | ArenaError::DuplicateHero(_)
            | ArenaError::SelfChallenge(_) => ErrorKind::Validation,
            ArenaError::SlotBusy(_) | ArenaError::NoQueue => ErrorKind::StateConflict,
            ArenaError::UnknownHero(_) | ArenaError::UnknownUser(_) => ErrorKind::NotFound,
        }
    }
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid arena config: {0}")]
    Json(#[from] serde_json::Error),
}
