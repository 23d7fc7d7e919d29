//! Domain types for heroes and teams

mod hero;
mod hero_type;
mod synergy;
mod team;

pub use hero::{HeroTemplate, Participant};
pub use hero_type::{Effectiveness, HeroType, UnknownHeroType};
pub use synergy::{BoostedStat, SYNERGY_TABLE, SynergyEffect, synergy_for};
pub use team::{TEAM_SIZE, Team, TeamError};
