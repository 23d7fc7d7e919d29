use std::path::PathBuf;

use pantheon_protocol::{HeroId, UserId};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum RosterError {
    #[error("Failed to read roster file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid roster document: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Hero {0} is defined more than once")]
    DuplicateHero(HeroId),

    #[error("Account {0} is defined more than once")]
    DuplicateAccount(UserId),

    #[error("Account {account} owns unknown hero {hero}")]
    UnknownHero { account: UserId, hero: HeroId },

    #[error("Account {account} has a username that cannot go on the wire: {username:?}")]
    InvalidUsername { account: UserId, username: String },

    #[error("Hero {hero} has a name that cannot go on the wire: {name:?}")]
    InvalidHeroName { hero: HeroId, name: String },
}
