//! Queue slots and the results cached on them

use chrono::{DateTime, Utc};
use pantheon_protocol::{HeroId, ServerMessage, SlotId, UserId};
use serde::Serialize;

/// Where a user's most recent slot stands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum SlotState {
    /// The user never posted
    Empty,
    /// Waiting for a challenger
    Queued,
    /// Fought, result not yet collected
    ResolvedUnseen,
    /// Fought and collected
    ResolvedSeen,
}

/// One side of a finished battle
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Combatant {
    pub id: UserId,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum Verdict {
    Decided { winner: Combatant, loser: Combatant },
    Draw,
}

/// Outcome of a challenge, as shown to both players
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BattleResult {
    pub slot: SlotId,
    pub verdict: Verdict,
    pub log: Vec<String>,
}

impl BattleResult {
    pub fn winner(&self) -> Option<&Combatant> {
        match &self.verdict {
            Verdict::Decided { winner, .. } => Some(winner),
            Verdict::Draw => None,
        }
    }

    pub fn loser(&self) -> Option<&Combatant> {
        match &self.verdict {
            Verdict::Decided { loser, .. } => Some(loser),
            Verdict::Draw => None,
        }
    }

    pub fn is_draw(&self) -> bool {
        matches!(self.verdict, Verdict::Draw)
    }

    /// Verdict line followed by every log line
    pub fn to_messages(&self) -> Vec<ServerMessage> {
        let verdict = match &self.verdict {
            Verdict::Decided { winner, loser } => ServerMessage::Victory {
                winner: winner.name.clone(),
                loser: loser.name.clone(),
            },
            Verdict::Draw => ServerMessage::Draw,
        };

        std::iter::once(verdict)
            .chain(self.log.iter().cloned().map(ServerMessage::Log))
            .collect()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SlotOutcome {
    pub result: BattleResult,
    /// Set when the battle resolves, cleared when the poster collects it
    pub unseen: bool,
}

/// A posted lineup and, once challenged, its result
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QueueSlot {
    pub id: SlotId,
    pub poster: UserId,
    pub heroes: [HeroId; 3],
    pub queued: bool,
    pub created_at: DateTime<Utc>,
    pub outcome: Option<SlotOutcome>,
}

impl QueueSlot {
    pub(crate) fn new(id: SlotId, poster: UserId, heroes: [HeroId; 3]) -> Self {
        Self {
            id,
            poster,
            heroes,
            queued: true,
            created_at: Utc::now(),
            outcome: None,
        }
    }

    pub fn state(&self) -> SlotState {
        match (&self.outcome, self.queued) {
            (_, true) => SlotState::Queued,
            (Some(outcome), false) if outcome.unseen => SlotState::ResolvedUnseen,
            (Some(_), false) => SlotState::ResolvedSeen,
            (None, false) => SlotState::Empty,
        }
    }
}

/// Public view of the lineup currently waiting
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct QueuedLineup {
    pub slot: SlotId,
    pub poster: UserId,
    pub since: DateTime<Utc>,
}

impl QueuedLineup {
    pub fn to_message(&self) -> ServerMessage {
        ServerMessage::QueueOpen {
            slot: self.slot,
            poster: self.poster,
            since: self.since.timestamp(),
        }
    }
}
