//! Battle resolution between two teams

mod dice;
mod log;
mod resolver;

pub use dice::{CombatDice, RandomDice, ScriptedDice};
pub use log::{BattleEvent, BattleLog};
pub use resolver::{BattleReport, MISS_CHANCE, Outcome, Side, resolve_battle, strike_damage};
