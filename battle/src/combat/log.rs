//! Append-only battle log

use std::fmt;

use crate::types::Effectiveness;

/// One entry in a battle log
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BattleEvent {
    SynergyActivated {
        team: String,
    },
    Started {
        team: String,
    },
    Strike {
        attacker: String,
        defender: String,
        effectiveness: Effectiveness,
        damage: u32,
        remaining_hp: u32,
    },
    Miss {
        attacker: String,
        defender: String,
    },
    Victory {
        team: String,
    },
    BothDefeated,
}

impl BattleEvent {
    /// Damage dealt by this event, if it was an attack
    pub fn damage(&self) -> Option<u32> {
        match self {
            BattleEvent::Strike { damage, .. } => Some(*damage),
            BattleEvent::Miss { .. } => Some(0),
            _ => None,
        }
    }
}

impl fmt::Display for BattleEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BattleEvent::SynergyActivated { team } => {
                write!(f, "{team}'s team synergy activated!")
            }
            BattleEvent::Started { team } => write!(f, "{team} starts the battle!"),
            BattleEvent::Strike {
                attacker,
                defender,
                effectiveness,
                damage,
                remaining_hp,
            } => {
                match effectiveness {
                    Effectiveness::Neutral => write!(f, "{attacker} attacks {defender}")?,
                    tier => write!(f, "{attacker} deals a {tier} hit against {defender}")?,
                }
                write!(
                    f,
                    ", dealing {damage} damage and leaving them with {remaining_hp} HP!"
                )
            }
            BattleEvent::Miss { attacker, defender } => {
                write!(f, "{attacker} tried to attack {defender} but missed!")
            }
            BattleEvent::Victory { team } => write!(f, "{team} wins the battle!"),
            BattleEvent::BothDefeated => write!(f, "Both teams are out of heroes!"),
        }
    }
}

/// Ordered record of a battle. Entries can only be appended.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BattleLog {
    events: Vec<BattleEvent>,
}

impl BattleLog {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn push(&mut self, event: BattleEvent) {
        self.events.push(event);
    }

    pub fn events(&self) -> &[BattleEvent] {
        &self.events
    }

    pub fn iter(&self) -> impl Iterator<Item = &BattleEvent> {
        self.events.iter()
    }

    /// Render every entry as a display line
    pub fn lines(&self) -> Vec<String> {
        self.events.iter().map(ToString::to_string).collect()
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}
