//! Pantheon Arena - single-slot matchmaking
//!
//! One player posts three heroes. The next player to challenge fights that
//! lineup on the spot, both accounts are paid out, and the poster picks up
//! the result with a later poll.
//!
//! ```text
//!   post ──► [Queued] ──challenge──► [ResolvedUnseen] ──poll──► [ResolvedSeen]
//!                 ▲                                                  │
//!                 └────────────────────── post ──────────────────────┘
//! ```
//!
//! # Example
//!
//! ```no_run
//! use pantheon_arena::{Arena, ArenaConfig};
//! use pantheon_protocol::{HeroId, UserId};
//! use pantheon_roster::load_roster_file;
//!
//! let roster = load_roster_file("roster.json").unwrap();
//! let arena = Arena::from_roster(roster, ArenaConfig::default());
//!
//! arena.post(UserId(1), [HeroId(1), HeroId(2), HeroId(3)]).unwrap();
//! let result = arena.challenge(UserId(2), [HeroId(4), HeroId(5), HeroId(6)]).unwrap();
//! for line in &result.log {
//!     println!("{line}");
//! }
//!
//! assert!(arena.poll(UserId(1)).is_some());
//! ```

mod arena;
mod config;
mod error;
mod handle;
mod slot;

pub use arena::Arena;
pub use config::ArenaConfig;
pub use error::{ArenaError, ConfigError};
pub use handle::ArenaHandle;
pub use slot::{
    BattleResult, Combatant, QueueSlot, QueuedLineup, SlotOutcome, SlotState, Verdict,
};
