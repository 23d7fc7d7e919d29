//! Team synergy table

use super::hero_type::HeroType;

/// Base stat raised by a synergy
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BoostedStat {
    Attack,
    Defense,
    BaseHp,
}

impl BoostedStat {
    pub fn as_str(&self) -> &'static str {
        match self {
            BoostedStat::Attack => "attack_boost",
            BoostedStat::Defense => "defense_boost",
            BoostedStat::BaseHp => "base_hp_boost",
        }
    }
}

/// Multiplicative bonus unlocked by a team composition
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SynergyEffect {
    pub stat: BoostedStat,
    pub factor: f64,
}

impl SynergyEffect {
    /// Apply the factor to a single stat value, truncating toward zero.
    ///
    /// Calling this on an already boosted value compounds the bonus.
    pub fn boost(&self, value: u32) -> u32 {
        (f64::from(value) * self.factor) as u32
    }
}

/// Synergy compositions, each stored sorted in cycle order
#[rustfmt::skip]
pub static SYNERGY_TABLE: [([HeroType; 3], SynergyEffect); 6] = [
    ([HeroType::Alpha, HeroType::Beta, HeroType::Gamma],     SynergyEffect { stat: BoostedStat::Attack,  factor: 1.10 }),
    ([HeroType::Delta, HeroType::Epsilon, HeroType::Zeta],   SynergyEffect { stat: BoostedStat::Attack,  factor: 1.15 }),
    ([HeroType::Alpha, HeroType::Gamma, HeroType::Epsilon],  SynergyEffect { stat: BoostedStat::Defense, factor: 1.12 }),
    ([HeroType::Beta, HeroType::Delta, HeroType::Zeta],      SynergyEffect { stat: BoostedStat::Defense, factor: 1.18 }),
    ([HeroType::Alpha, HeroType::Delta, HeroType::Zeta],     SynergyEffect { stat: BoostedStat::BaseHp,  factor: 1.20 }),
    ([HeroType::Beta, HeroType::Gamma, HeroType::Epsilon],   SynergyEffect { stat: BoostedStat::BaseHp,  factor: 1.25 }),
];

/// Look up the synergy for a 3-type composition, in any order
pub fn synergy_for(types: [HeroType; 3]) -> Option<SynergyEffect> {
    let mut composition = types;
    composition.sort();

    SYNERGY_TABLE
        .iter()
        .find(|(key, _)| *key == composition)
        .map(|(_, effect)| *effect)
}
