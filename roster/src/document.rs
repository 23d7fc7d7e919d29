//! JSON roster documents

use std::fs;
use std::path::Path;

use pantheon_battle::HeroTemplate;
use serde::Deserialize;

use crate::account::{Account, AccountBook};
use crate::catalog::HeroCatalog;
use crate::error::RosterError;

#[derive(Debug, Deserialize)]
struct RosterDocument {
    heroes: Vec<HeroTemplate>,
    #[serde(default)]
    accounts: Vec<Account>,
}

/// A validated catalog and ledger loaded together
#[derive(Debug, Clone, Default)]
pub struct Roster {
    pub catalog: HeroCatalog,
    pub accounts: AccountBook,
}

impl Roster {
    pub fn into_parts(self) -> (HeroCatalog, AccountBook) {
        (self.catalog, self.accounts)
    }
}

/// Parse and validate a roster document
pub fn load_roster(json: &str) -> Result<Roster, RosterError> {
    let document: RosterDocument = serde_json::from_str(json)?;

    let catalog = HeroCatalog::from_templates(document.heroes)?;

    for account in &document.accounts {
        if let Some(hero) = account.heroes.iter().find(|h| !catalog.contains(**h)) {
            return Err(RosterError::UnknownHero {
                account: account.id,
                hero: *hero,
            });
        }
    }

    let accounts = AccountBook::from_accounts(document.accounts)?;

    Ok(Roster { catalog, accounts })
}

/// Read a roster document from disk
pub fn load_roster_file(path: impl AsRef<Path>) -> Result<Roster, RosterError> {
    let path = path.as_ref();
    let json = fs::read_to_string(path).map_err(|source| RosterError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    load_roster(&json)
}
