//! Hero types and the advantage cycle

use std::str::FromStr;

/// Elemental hero types.
///
/// The declaration order is the advantage cycle: every type is
/// super effective against the next one, and `Eta` wraps around to `Alpha`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "String", into = "String")
)]
#[repr(u8)]
pub enum HeroType {
    Alpha = 0,
    Beta = 1,
    Gamma = 2,
    Delta = 3,
    Epsilon = 4,
    Zeta = 5,
    Eta = 6,
}

/// Outcome of looking up an attacker/defender pair in the advantage cycle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Effectiveness {
    SuperEffective,
    Neutral,
    NotVeryEffective,
}

impl Effectiveness {
    /// Multiplier applied to the attacker's attack before defense is subtracted
    pub fn multiplier(&self) -> f64 {
        match self {
            Effectiveness::SuperEffective => 1.15,
            Effectiveness::Neutral => 1.0,
            Effectiveness::NotVeryEffective => 0.85,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Effectiveness::SuperEffective => "super effective",
            Effectiveness::Neutral => "neutral",
            Effectiveness::NotVeryEffective => "not very effective",
        }
    }
}

impl std::fmt::Display for Effectiveness {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl HeroType {
    /// All 7 hero types, in cycle order
    pub const ALL: [HeroType; 7] = [
        HeroType::Alpha,
        HeroType::Beta,
        HeroType::Gamma,
        HeroType::Delta,
        HeroType::Epsilon,
        HeroType::Zeta,
        HeroType::Eta,
    ];

    /// Get all types as a slice
    pub fn all() -> &'static [HeroType] {
        &Self::ALL
    }

    /// The type this one is super effective against
    pub fn successor(&self) -> HeroType {
        Self::ALL[(*self as usize + 1) % Self::ALL.len()]
    }

    /// The type that is super effective against this one
    pub fn predecessor(&self) -> HeroType {
        Self::ALL[(*self as usize + Self::ALL.len() - 1) % Self::ALL.len()]
    }

    /// Effectiveness of an attack from this type against `defender`
    pub fn effectiveness(&self, defender: HeroType) -> Effectiveness {
        if defender == self.successor() {
            Effectiveness::SuperEffective
        } else if *self == defender.successor() {
            Effectiveness::NotVeryEffective
        } else {
            Effectiveness::Neutral
        }
    }

    /// Parse a type name (case-insensitive)
    pub fn from_name(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "alpha" => Some(HeroType::Alpha),
            "beta" => Some(HeroType::Beta),
            "gamma" => Some(HeroType::Gamma),
            "delta" => Some(HeroType::Delta),
            "epsilon" => Some(HeroType::Epsilon),
            "zeta" => Some(HeroType::Zeta),
            "eta" => Some(HeroType::Eta),
            _ => None,
        }
    }

    /// Canonical lowercase name
    pub fn as_str(&self) -> &'static str {
        match self {
            HeroType::Alpha => "alpha",
            HeroType::Beta => "beta",
            HeroType::Gamma => "gamma",
            HeroType::Delta => "delta",
            HeroType::Epsilon => "epsilon",
            HeroType::Zeta => "zeta",
            HeroType::Eta => "eta",
        }
    }
}

impl std::fmt::Display for HeroType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Error returned when a type name is not one of the seven hero types
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown hero type: {0}")]
pub struct UnknownHeroType(pub String);

impl FromStr for HeroType {
    type Err = UnknownHeroType;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(s).ok_or_else(|| UnknownHeroType(s.to_string()))
    }
}

impl TryFrom<String> for HeroType {
    type Error = UnknownHeroType;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<HeroType> for String {
    fn from(value: HeroType) -> Self {
        value.as_str().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cycle_wraps() {
        assert_eq!(HeroType::Alpha.successor(), HeroType::Beta);
        assert_eq!(HeroType::Zeta.successor(), HeroType::Eta);
        assert_eq!(HeroType::Eta.successor(), HeroType::Alpha);
        assert_eq!(HeroType::Alpha.predecessor(), HeroType::Eta);

        for t in HeroType::all() {
            assert_eq!(t.successor().predecessor(), *t);
        }
    }

    #[test]
    fn test_effectiveness_super_effective() {
        assert_eq!(
            HeroType::Alpha.effectiveness(HeroType::Beta),
            Effectiveness::SuperEffective
        );
        assert_eq!(
            HeroType::Eta.effectiveness(HeroType::Alpha),
            Effectiveness::SuperEffective
        );
    }

    #[test]
    fn test_effectiveness_not_very_effective() {
        assert_eq!(
            HeroType::Beta.effectiveness(HeroType::Alpha),
            Effectiveness::NotVeryEffective
        );
        assert_eq!(
            HeroType::Alpha.effectiveness(HeroType::Eta),
            Effectiveness::NotVeryEffective
        );
    }

    #[test]
    fn test_effectiveness_neutral() {
        assert_eq!(HeroType::Alpha.effectiveness(HeroType::Alpha), Effectiveness::Neutral);
        assert_eq!(HeroType::Alpha.effectiveness(HeroType::Gamma), Effectiveness::Neutral);
        assert_eq!(HeroType::Delta.effectiveness(HeroType::Alpha), Effectiveness::Neutral);
    }

    #[test]
    fn test_every_pair_has_one_tier() {
        // Each type has exactly one victim and one predator among the others
        for attacker in HeroType::all() {
            let supers = HeroType::all()
                .iter()
                .filter(|d| attacker.effectiveness(**d) == Effectiveness::SuperEffective)
                .count();
            let resisted = HeroType::all()
                .iter()
                .filter(|d| attacker.effectiveness(**d) == Effectiveness::NotVeryEffective)
                .count();
            assert_eq!(supers, 1);
            assert_eq!(resisted, 1);
        }
    }

    #[test]
    fn test_type_from_name() {
        assert_eq!(HeroType::from_name("alpha"), Some(HeroType::Alpha));
        assert_eq!(HeroType::from_name("Epsilon"), Some(HeroType::Epsilon));
        assert_eq!(HeroType::from_name("ZETA"), Some(HeroType::Zeta));
        assert_eq!(HeroType::from_name("omega"), None);
        assert!("theta".parse::<HeroType>().is_err());
    }

    #[test]
    fn test_multipliers() {
        assert_eq!(Effectiveness::SuperEffective.multiplier(), 1.15);
        assert_eq!(Effectiveness::NotVeryEffective.multiplier(), 0.85);
        assert_eq!(Effectiveness::Neutral.multiplier(), 1.0);
    }
}
