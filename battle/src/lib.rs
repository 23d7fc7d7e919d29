//! Hero types, team synergy and the turn-based battle resolver.
//!
//! # Overview
//!
//! `pantheon-battle` sits between `pantheon-protocol` (identifiers and wire
//! format) and the arena service:
//!
//! ```text
//! pantheon-protocol (ids + wire format)
//!        │
//!        ▼
//! pantheon-battle (types + resolver) ← THIS CRATE
//!        │
//!        ├─> pantheon-roster (hero catalog, accounts)
//!        └─> pantheon-arena (matchmaking queue)
//! ```
//!
//! # Main Types
//!
//! ## Domain Types
//! - [`HeroType`] - The seven elemental types and their advantage cycle
//! - [`SynergyEffect`] - Team-wide bonus unlocked by a 3-type composition
//! - [`HeroTemplate`] - Catalog stats of a hero, never mutated by a battle
//! - [`Participant`] - Per-battle snapshot of a hero
//! - [`Team`] - Three distinct participants in priority order
//!
//! ## Resolution
//! - [`resolve_battle`] - Fights two teams to a win, loss or draw
//! - [`CombatDice`] - Source of the opening side and miss rolls
//! - [`BattleLog`] - Append-only record of what happened
//!
//! # Example Usage
//!
//! ```ignore
//! use pantheon_battle::{resolve_battle, RandomDice, Team};
//!
//! let mut dice = RandomDice::new(rand::thread_rng());
//! let report = resolve_battle(team_a, team_b, "jason", "mira", &mut dice);
//!
//! for line in report.log.lines() {
//!     println!("{line}");
//! }
//! ```

pub mod combat;
pub mod types;

// Re-export main types at crate root for convenience
pub use combat::{
    BattleEvent, BattleLog, BattleReport, CombatDice, MISS_CHANCE, Outcome, RandomDice,
    ScriptedDice, Side, resolve_battle, strike_damage,
};
pub use types::{
    BoostedStat, Effectiveness, HeroTemplate, HeroType, Participant, SYNERGY_TABLE,
    SynergyEffect, TEAM_SIZE, Team, TeamError, UnknownHeroType, synergy_for,
};

pub use pantheon_protocol::HeroId;
