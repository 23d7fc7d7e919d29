//! The arena queue manager

use std::collections::HashMap;

use pantheon_battle::{
    CombatDice, HeroTemplate, Outcome, RandomDice, Side, TEAM_SIZE, Team, TeamError,
    resolve_battle,
};
use pantheon_protocol::{HeroId, SlotId, UserId};
use pantheon_roster::{Account, AccountBook, AccountLedger, HeroCatalog, HeroLookup, Roster};
use parking_lot::Mutex;
use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing::{debug, info, trace};

use crate::config::ArenaConfig;
use crate::error::ArenaError;
use crate::slot::{
    BattleResult, Combatant, QueueSlot, QueuedLineup, SlotOutcome, SlotState, Verdict,
};

/// Everything the lock guards
struct ArenaState<L> {
    ledger: L,
    /// Latest slot per poster. Posting again replaces it.
    slots: HashMap<UserId, QueueSlot>,
    /// Poster whose slot is waiting for a challenger
    queued: Option<UserId>,
    dice: Box<dyn CombatDice + Send>,
    next_slot: u64,
}

impl<L> ArenaState<L> {
    fn queued_slot(&self) -> Option<&QueueSlot> {
        self.queued.and_then(|poster| self.slots.get(&poster))
    }
}

/// A validated lineup, ready to be snapshotted into a team
struct Lineup<'a> {
    name: String,
    templates: [&'a HeroTemplate; TEAM_SIZE],
}

/// Single-slot matchmaking queue.
///
/// At most one lineup waits at a time. A challenge fights it immediately,
/// settles both accounts and leaves the result on the slot until the poster
/// polls for it. Every operation holds one lock for its whole duration, so
/// validation, the battle and all writes are atomic with respect to each
/// other.
pub struct Arena<H = HeroCatalog, L = AccountBook> {
    heroes: H,
    config: ArenaConfig,
    state: Mutex<ArenaState<L>>,
}

impl Arena {
    /// Build an arena over an in-memory roster
    pub fn from_roster(roster: Roster, config: ArenaConfig) -> Self {
        let (catalog, accounts) = roster.into_parts();
        Self::new(catalog, accounts, config)
    }
}

impl<H: HeroLookup, L: AccountLedger> Arena<H, L> {
    /// Dice come from the config seed, or from entropy when there is none
    pub fn new(heroes: H, ledger: L, config: ArenaConfig) -> Self {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self::with_dice(heroes, ledger, config, RandomDice::new(rng))
    }

    pub fn with_dice(
        heroes: H,
        ledger: L,
        config: ArenaConfig,
        dice: impl CombatDice + Send + 'static,
    ) -> Self {
        Self {
            heroes,
            config,
            state: Mutex::new(ArenaState {
                ledger,
                slots: HashMap::new(),
                queued: None,
                dice: Box::new(dice),
                next_slot: 1,
            }),
        }
    }

    pub fn config(&self) -> &ArenaConfig {
        &self.config
    }

    pub fn heroes(&self) -> &H {
        &self.heroes
    }

    /// Queue a lineup for the next challenger
    pub fn post(&self, user: UserId, heroes: [HeroId; TEAM_SIZE]) -> Result<SlotId, ArenaError> {
        let mut state = self.state.lock();
        self.post_locked(&mut state, user, heroes)
            .inspect_err(|err| debug!(%user, %err, "post rejected"))
    }

    /// Fight the queued lineup and settle both accounts
    pub fn challenge(
        &self,
        challenger: UserId,
        heroes: [HeroId; TEAM_SIZE],
    ) -> Result<BattleResult, ArenaError> {
        let mut state = self.state.lock();
        self.challenge_locked(&mut state, challenger, heroes)
            .inspect_err(|err| debug!(user = %challenger, %err, "challenge rejected"))
    }

    /// Collect the result of the user's latest slot. Each result is handed
    /// out exactly once.
    pub fn poll(&self, user: UserId) -> Option<BattleResult> {
        let mut state = self.state.lock();
        let slot = state.slots.get_mut(&user)?;
        let slot_id = slot.id;
        let outcome = slot.outcome.as_mut().filter(|outcome| outcome.unseen)?;
        outcome.unseen = false;

        info!(%user, slot = %slot_id, "result delivered");
        Some(outcome.result.clone())
    }

    pub fn slot_state(&self, user: UserId) -> SlotState {
        self.state
            .lock()
            .slots
            .get(&user)
            .map_or(SlotState::Empty, QueueSlot::state)
    }

    /// The lineup currently waiting, if any
    pub fn queued(&self) -> Option<QueuedLineup> {
        self.state.lock().queued_slot().map(|slot| QueuedLineup {
            slot: slot.id,
            poster: slot.poster,
            since: slot.created_at,
        })
    }

    pub fn account(&self, user: UserId) -> Option<Account> {
        self.state.lock().ledger.account(user).cloned()
    }

    fn post_locked(
        &self,
        state: &mut ArenaState<L>,
        user: UserId,
        heroes: [HeroId; TEAM_SIZE],
    ) -> Result<SlotId, ArenaError> {
        if let Some(slot) = state.queued_slot() {
            return Err(ArenaError::SlotBusy(slot.id));
        }
        self.validate_lineup(&state.ledger, user, heroes)?;

        let id = SlotId(state.next_slot);
        state.next_slot += 1;
        state.slots.insert(user, QueueSlot::new(id, user, heroes));
        state.queued = Some(user);

        info!(%user, slot = %id, ?heroes, "lineup posted");
        Ok(id)
    }

    fn challenge_locked(
        &self,
        state: &mut ArenaState<L>,
        challenger: UserId,
        heroes: [HeroId; TEAM_SIZE],
    ) -> Result<BattleResult, ArenaError> {
        let (slot_id, poster, poster_heroes) = state
            .queued_slot()
            .map(|slot| (slot.id, slot.poster, slot.heroes))
            .ok_or(ArenaError::NoQueue)?;

        if poster == challenger {
            return Err(ArenaError::SelfChallenge(challenger));
        }

        let challenger_lineup = self.validate_lineup(&state.ledger, challenger, heroes)?;
        let poster_lineup = self.validate_lineup(&state.ledger, poster, poster_heroes)?;

        // Poster fights as side A
        let team_a = Team::from_templates(poster_lineup.templates).map_err(team_error)?;
        let team_b = Team::from_templates(challenger_lineup.templates).map_err(team_error)?;

        let report = resolve_battle(
            team_a,
            team_b,
            &poster_lineup.name,
            &challenger_lineup.name,
            &mut *state.dice,
        );
        trace!(
            slot = %slot_id,
            first = ?report.first,
            events = report.log.len(),
            "battle resolved"
        );

        let poster_id = poster;
        let poster = Combatant {
            id: poster,
            name: poster_lineup.name,
        };
        let challenger = Combatant {
            id: challenger,
            name: challenger_lineup.name,
        };

        let verdict = match report.outcome {
            Outcome::Winner(side) => {
                let (winner, loser) = match side {
                    Side::A => (poster, challenger),
                    Side::B => (challenger, poster),
                };
                if let Some(account) = state.ledger.account_mut(winner.id) {
                    account.record_win(self.config.winner_reward);
                }
                if let Some(account) = state.ledger.account_mut(loser.id) {
                    account.record_loss(self.config.loser_reward);
                }
                info!(slot = %slot_id, winner = %winner.id, loser = %loser.id, "challenge settled");
                Verdict::Decided { winner, loser }
            }
            Outcome::Draw => {
                for id in [poster.id, challenger.id] {
                    if let Some(account) = state.ledger.account_mut(id) {
                        account.record_draw(self.config.draw_reward);
                    }
                }
                info!(slot = %slot_id, poster = %poster.id, challenger = %challenger.id, "challenge drawn");
                Verdict::Draw
            }
        };

        let result = BattleResult {
            slot: slot_id,
            verdict,
            log: report.log.lines(),
        };

        if let Some(slot) = state.slots.get_mut(&poster_id) {
            slot.queued = false;
            slot.outcome = Some(SlotOutcome {
                result: result.clone(),
                unseen: true,
            });
        }
        state.queued = None;

        Ok(result)
    }

    /// Check a lineup against the ledger and catalog without writing anything.
    ///
    /// Order: unknown user, repeated hero, unknown hero, ownership.
    fn validate_lineup(
        &self,
        ledger: &L,
        user: UserId,
        heroes: [HeroId; TEAM_SIZE],
    ) -> Result<Lineup<'_>, ArenaError> {
        let account = ledger.account(user).ok_or(ArenaError::UnknownUser(user))?;

        for (i, hero) in heroes.iter().enumerate() {
            if heroes[..i].contains(hero) {
                return Err(ArenaError::DuplicateHero(*hero));
            }
        }

        let [a, b, c] = heroes.map(|id| self.heroes.hero(id).ok_or(ArenaError::UnknownHero(id)));
        let templates = [a?, b?, c?];

        if let Some(hero) = heroes.iter().find(|hero| !account.owns(**hero)) {
            return Err(ArenaError::NotOwned { user, hero: *hero });
        }

        Ok(Lineup {
            name: account.username.clone(),
            templates,
        })
    }
}

fn team_error(err: TeamError) -> ArenaError {
    match err {
        TeamError::DuplicateMember(hero) => ArenaError::DuplicateHero(hero),
    }
}
