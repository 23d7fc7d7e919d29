use std::collections::{BTreeSet, HashMap};

use pantheon_protocol::{HeroId, UserId};
use serde::{Deserialize, Serialize};

use crate::{AccountLedger, is_wire_safe_field};
use crate::error::RosterError;

/// Token balance for accounts that do not state one
pub const STARTING_TOKENS: u32 = 50;

fn starting_tokens() -> u32 {
    STARTING_TOKENS
}

/// A user's balance, record and collection
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Account {
    pub id: UserId,
    pub username: String,
    #[serde(default = "starting_tokens")]
    pub tokens: u32,
    #[serde(default)]
    pub wins: u32,
    #[serde(default)]
    pub losses: u32,
    #[serde(default)]
    pub heroes: BTreeSet<HeroId>,
}

impl Account {
    pub fn new(id: UserId, username: impl Into<String>) -> Self {
        Self {
            id,
            username: username.into(),
            tokens: STARTING_TOKENS,
            wins: 0,
            losses: 0,
            heroes: BTreeSet::new(),
        }
    }

    pub fn with_heroes(mut self, heroes: impl IntoIterator<Item = HeroId>) -> Self {
        self.heroes.extend(heroes);
        self
    }

    pub fn owns(&self, hero: HeroId) -> bool {
        self.heroes.contains(&hero)
    }

    pub fn record_win(&mut self, reward: u32) {
        self.wins = self.wins.saturating_add(1);
        self.tokens = self.tokens.saturating_add(reward);
    }

    pub fn record_loss(&mut self, reward: u32) {
        self.losses = self.losses.saturating_add(1);
        self.tokens = self.tokens.saturating_add(reward);
    }

    /// A draw pays out without touching the win/loss record
    pub fn record_draw(&mut self, reward: u32) {
        self.tokens = self.tokens.saturating_add(reward);
    }
}

/// In-memory account ledger
#[derive(Debug, Clone, Default)]
pub struct AccountBook {
    accounts: HashMap<UserId, Account>,
}

impl AccountBook {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a ledger, rejecting repeated ids
    pub fn from_accounts(accounts: impl IntoIterator<Item = Account>) -> Result<Self, RosterError> {
        let mut book = Self::new();
        for account in accounts {
            book.insert(account)?;
        }
        Ok(book)
    }

    pub fn insert(&mut self, account: Account) -> Result<(), RosterError> {
        if !is_wire_safe_field(&account.username) {
            return Err(RosterError::InvalidUsername {
                account: account.id,
                username: account.username,
            });
        }
        if self.accounts.contains_key(&account.id) {
            return Err(RosterError::DuplicateAccount(account.id));
        }
        self.accounts.insert(account.id, account);
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.accounts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.accounts.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Account> {
        self.accounts.values()
    }
}

impl AccountLedger for AccountBook {
    fn account(&self, id: UserId) -> Option<&Account> {
        self.accounts.get(&id)
    }

    fn account_mut(&mut self, id: UserId) -> Option<&mut Account> {
        self.accounts.get_mut(&id)
    }
}
