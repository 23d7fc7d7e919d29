//! Hero templates and their per-battle combat snapshots

use pantheon_protocol::HeroId;

use super::hero_type::HeroType;
use super::synergy::{BoostedStat, SynergyEffect};

/// Catalog entry for a hero. Read-only to the battle code.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HeroTemplate {
    pub id: HeroId,
    pub name: String,
    #[cfg_attr(feature = "serde", serde(rename = "type"))]
    pub hero_type: HeroType,
    pub hp: u32,
    pub attack: u32,
    pub defense: u32,
}

impl HeroTemplate {
    pub fn new(
        id: HeroId,
        name: impl Into<String>,
        hero_type: HeroType,
        hp: u32,
        attack: u32,
        defense: u32,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            hero_type,
            hp,
            attack,
            defense,
        }
    }
}

/// A hero's stats for the duration of one battle.
///
/// Built from a [`HeroTemplate`] and never converted back, so damage and
/// synergy bonuses cannot leak into the catalog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Participant {
    id: HeroId,
    name: String,
    hero_type: HeroType,
    max_hp: u32,
    attack: u32,
    defense: u32,
    current_hp: u32,
}

impl Participant {
    /// Snapshot a template at full health
    pub fn from_template(template: &HeroTemplate) -> Self {
        Self {
            id: template.id,
            name: template.name.clone(),
            hero_type: template.hero_type,
            max_hp: template.hp,
            attack: template.attack,
            defense: template.defense,
            current_hp: template.hp,
        }
    }

    pub fn id(&self) -> HeroId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn hero_type(&self) -> HeroType {
        self.hero_type
    }

    pub fn max_hp(&self) -> u32 {
        self.max_hp
    }

    pub fn attack(&self) -> u32 {
        self.attack
    }

    pub fn defense(&self) -> u32 {
        self.defense
    }

    pub fn current_hp(&self) -> u32 {
        self.current_hp
    }

    pub fn is_alive(&self) -> bool {
        self.current_hp > 0
    }

    pub(crate) fn apply_synergy(&mut self, effect: &SynergyEffect) {
        match effect.stat {
            BoostedStat::Attack => self.attack = effect.boost(self.attack),
            BoostedStat::Defense => self.defense = effect.boost(self.defense),
            BoostedStat::BaseHp => {
                self.max_hp = effect.boost(self.max_hp);
                self.current_hp = effect.boost(self.current_hp);
            }
        }
    }

    /// Subtract damage, bottoming out at zero. Returns the remaining hp.
    pub(crate) fn take_damage(&mut self, damage: u32) -> u32 {
        self.current_hp = self.current_hp.saturating_sub(damage);
        self.current_hp
    }
}
