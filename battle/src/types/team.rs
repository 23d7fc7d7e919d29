//! Three-hero teams

use pantheon_protocol::HeroId;
use thiserror::Error;

use super::hero::{HeroTemplate, Participant};
use super::hero_type::HeroType;
use super::synergy::{SynergyEffect, synergy_for};

/// Number of heroes on every team
pub const TEAM_SIZE: usize = 3;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TeamError {
    #[error("Hero {0} appears more than once on the team")]
    DuplicateMember(HeroId),
}

/// An ordered team of three distinct participants.
///
/// Order is attack priority: the first living member always acts and
/// always takes the hits.
#[derive(Debug, Clone, PartialEq)]
pub struct Team {
    members: [Participant; TEAM_SIZE],
    synergy: Option<SynergyEffect>,
    synergy_applied: bool,
}

impl Team {
    /// Create a team, rejecting repeated heroes
    pub fn new(members: [Participant; TEAM_SIZE]) -> Result<Self, TeamError> {
        for (i, member) in members.iter().enumerate() {
            if members[i + 1..].iter().any(|other| other.id() == member.id()) {
                return Err(TeamError::DuplicateMember(member.id()));
            }
        }

        Ok(Self {
            members,
            synergy: None,
            synergy_applied: false,
        })
    }

    /// Snapshot three templates into a fresh team
    pub fn from_templates(templates: [&HeroTemplate; TEAM_SIZE]) -> Result<Self, TeamError> {
        Self::new(templates.map(Participant::from_template))
    }

    /// Members in priority order
    pub fn members(&self) -> &[Participant; TEAM_SIZE] {
        &self.members
    }

    pub fn types(&self) -> [HeroType; TEAM_SIZE] {
        [
            self.members[0].hero_type(),
            self.members[1].hero_type(),
            self.members[2].hero_type(),
        ]
    }

    /// Apply the composition's synergy to every member.
    ///
    /// Only the first call changes stats; later calls return the cached
    /// effect so the bonus never compounds.
    pub fn apply_synergy(&mut self) -> Option<SynergyEffect> {
        if self.synergy_applied {
            return self.synergy;
        }

        self.synergy_applied = true;
        self.synergy = synergy_for(self.types());
        if let Some(effect) = self.synergy {
            for member in &mut self.members {
                member.apply_synergy(&effect);
            }
        }
        self.synergy
    }

    /// Synergy applied so far, if any
    pub fn synergy(&self) -> Option<SynergyEffect> {
        self.synergy
    }

    /// Index of the first living member by list position
    pub fn first_alive(&self) -> Option<usize> {
        self.members.iter().position(Participant::is_alive)
    }

    /// Count living members
    pub fn alive_count(&self) -> usize {
        self.members.iter().filter(|m| m.is_alive()).count()
    }

    /// Check if every member is down
    pub fn all_fainted(&self) -> bool {
        self.alive_count() == 0
    }

    pub(crate) fn member(&self, index: usize) -> &Participant {
        &self.members[index]
    }

    pub(crate) fn member_mut(&mut self, index: usize) -> &mut Participant {
        &mut self.members[index]
    }
}
