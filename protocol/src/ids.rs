//! Identifier newtypes shared across the arena crates

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::ParseError;

/// Identifier of a hero template in the catalog
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct HeroId(pub u32);

/// Identifier of a user account
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(pub u32);

/// Identifier of a queue slot, assigned in posting order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SlotId(pub u64);

impl fmt::Display for HeroId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl fmt::Display for SlotId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for HeroId {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim()
            .parse()
            .map(HeroId)
            .map_err(|_| ParseError::InvalidFormat(format!("invalid hero id: {s}")))
    }
}

impl FromStr for UserId {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim()
            .parse()
            .map(UserId)
            .map_err(|_| ParseError::InvalidFormat(format!("invalid user id: {s}")))
    }
}

impl FromStr for SlotId {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim()
            .parse()
            .map(SlotId)
            .map_err(|_| ParseError::InvalidFormat(format!("invalid slot id: {s}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_ids() {
        assert_eq!("7".parse::<HeroId>().unwrap(), HeroId(7));
        assert_eq!(" 12 ".parse::<UserId>().unwrap(), UserId(12));
        assert_eq!("3".parse::<SlotId>().unwrap(), SlotId(3));
        assert!("x".parse::<HeroId>().is_err());
        assert!("-1".parse::<UserId>().is_err());
    }

    #[test]
    fn test_ids_serialize_transparent() {
        assert_eq!(serde_json::to_string(&HeroId(4)).unwrap(), "4");
        let user: UserId = serde_json::from_str("9").unwrap();
        assert_eq!(user, UserId(9));
    }
}
