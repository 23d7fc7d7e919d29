//! Hero catalog and account ledger for the arena.
//!
//! The arena never owns hero or account data. It reads templates through
//! [`HeroLookup`] and settles battles through [`AccountLedger`]. This crate
//! defines both contracts and ships in-memory implementations that load from
//! a single JSON roster document:
//!
//! ```json
//! {
//!   "heroes":   [{ "id": 1, "name": "Ares", "type": "alpha", "hp": 50, "attack": 20, "defense": 5 }],
//!   "accounts": [{ "id": 1, "username": "jason", "heroes": [1] }]
//! }
//! ```

mod account;
mod catalog;
mod document;
mod error;

pub use account::{Account, AccountBook, STARTING_TOKENS};
pub use catalog::HeroCatalog;
pub use document::{Roster, load_roster, load_roster_file};
pub use error::RosterError;

pub use pantheon_battle::HeroTemplate;
pub use pantheon_protocol::{HeroId, UserId};

/// Usernames travel as protocol fields: no separators, no line breaks
pub(crate) fn is_wire_safe_field(name: &str) -> bool {
    !name.is_empty() && !name.contains(['|', '\n', '\r'])
}

/// Hero names only appear inside log lines, which may contain separators
pub(crate) fn is_wire_safe_line(name: &str) -> bool {
    !name.is_empty() && !name.contains(['\n', '\r'])
}

/// Read access to hero templates
pub trait HeroLookup {
    fn hero(&self, id: HeroId) -> Option<&HeroTemplate>;
}

/// Read and write access to user accounts
pub trait AccountLedger {
    fn account(&self, id: UserId) -> Option<&Account>;

    fn account_mut(&mut self, id: UserId) -> Option<&mut Account>;
}
