use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Arena payouts and dice seeding
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ArenaConfig {
    /// Tokens paid to the winner, whichever role they played
    pub winner_reward: u32,
    /// Tokens paid to the loser
    pub loser_reward: u32,
    /// Tokens paid to each side of a draw
    pub draw_reward: u32,
    /// Seed for reproducible battles; entropy when unset
    pub seed: Option<u64>,
}

impl Default for ArenaConfig {
    fn default() -> Self {
        Self {
            winner_reward: 15,
            loser_reward: 5,
            draw_reward: 5,
            seed: None,
        }
    }
}

impl ArenaConfig {
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let json = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&json)
    }
}
