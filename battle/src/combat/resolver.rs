//! Turn-based battle resolution

use crate::types::{Effectiveness, Participant, SynergyEffect, Team};

use super::dice::CombatDice;
use super::log::{BattleEvent, BattleLog};

/// Rolls at or below this value miss
pub const MISS_CHANCE: u8 = 10;

/// One of the two sides of a battle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Side {
    A,
    B,
}

impl Side {
    pub fn index(&self) -> usize {
        match self {
            Side::A => 0,
            Side::B => 1,
        }
    }

    pub fn opponent(&self) -> Side {
        match self {
            Side::A => Side::B,
            Side::B => Side::A,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Outcome {
    Winner(Side),
    Draw,
}

/// Everything a finished battle produced
#[derive(Debug, Clone)]
pub struct BattleReport {
    pub outcome: Outcome,
    /// Side that acted first
    pub first: Side,
    /// Synergy that fired for each side, indexed by [`Side::index`]
    pub synergy: [Option<SynergyEffect>; 2],
    /// Final state of both teams
    pub teams: [Team; 2],
    pub log: BattleLog,
}

impl BattleReport {
    pub fn winner(&self) -> Option<Side> {
        match self.outcome {
            Outcome::Winner(side) => Some(side),
            Outcome::Draw => None,
        }
    }

    pub fn team(&self, side: Side) -> &Team {
        &self.teams[side.index()]
    }
}

/// Damage a landed hit from `attacker` deals to `defender`.
///
/// The effectiveness multiplier scales attack and is truncated before
/// defense is subtracted. A landed hit always deals at least 1 and at
/// most `u32::MAX`.
pub fn strike_damage(attacker: &Participant, defender: &Participant) -> (Effectiveness, u32) {
    let effectiveness = attacker.hero_type().effectiveness(defender.hero_type());
    let attack = (f64::from(attacker.attack()) * effectiveness.multiplier()) as i64;
    let raw = attack - i64::from(defender.defense());
    let damage = u32::try_from(raw.max(1)).unwrap_or(u32::MAX);
    (effectiveness, damage)
}

/// Fight two teams to the end.
///
/// Each team's synergy is applied once. Sides alternate strictly, starting
/// with the side the dice pick; every exchange consumes one percentile roll
/// whether or not anyone is left to act.
pub fn resolve_battle<D: CombatDice + ?Sized>(
    team_a: Team,
    team_b: Team,
    name_a: &str,
    name_b: &str,
    dice: &mut D,
) -> BattleReport {
    let names = [name_a, name_b];
    let mut teams = [team_a, team_b];
    let mut log = BattleLog::new();

    let synergy = [teams[0].apply_synergy(), teams[1].apply_synergy()];
    for (effect, name) in synergy.iter().zip(names) {
        if effect.is_some() {
            log.push(BattleEvent::SynergyActivated {
                team: name.to_string(),
            });
        }
    }

    let first = dice.starting_side();
    let mut active = first;
    log.push(BattleEvent::Started {
        team: names[first.index()].to_string(),
    });

    let outcome = loop {
        let missed = dice.roll_percent() <= MISS_CHANCE;

        let (attacking, defending) = match active {
            Side::A => {
                let [a, b] = &mut teams;
                (a, b)
            }
            Side::B => {
                let [a, b] = &mut teams;
                (b, a)
            }
        };

        let (attacker_idx, defender_idx) = match (attacking.first_alive(), defending.first_alive())
        {
            (None, None) => {
                log.push(BattleEvent::BothDefeated);
                break Outcome::Draw;
            }
            (None, Some(_)) => {
                let winner = active.opponent();
                log.push(BattleEvent::Victory {
                    team: names[winner.index()].to_string(),
                });
                break Outcome::Winner(winner);
            }
            (Some(_), None) => {
                log.push(BattleEvent::Victory {
                    team: names[active.index()].to_string(),
                });
                break Outcome::Winner(active);
            }
            (Some(a), Some(d)) => (a, d),
        };

        let attacker = attacking.member(attacker_idx);
        let defender = defending.member_mut(defender_idx);

        if missed {
            log.push(BattleEvent::Miss {
                attacker: attacker.name().to_string(),
                defender: defender.name().to_string(),
            });
        } else {
            let (effectiveness, damage) = strike_damage(attacker, defender);
            let remaining_hp = defender.take_damage(damage);
            log.push(BattleEvent::Strike {
                attacker: attacker.name().to_string(),
                defender: defender.name().to_string(),
                effectiveness,
                damage,
                remaining_hp,
            });
        }

        active = active.opponent();
    };

    BattleReport {
        outcome,
        first,
        synergy,
        teams,
        log,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::combat::{RandomDice, ScriptedDice};
    use crate::types::{HeroTemplate, HeroType};
    use pantheon_protocol::HeroId;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn hero(id: u32, name: &str, hero_type: HeroType, hp: u32, attack: u32, defense: u32) -> HeroTemplate {
        HeroTemplate::new(HeroId(id), name, hero_type, hp, attack, defense)
    }

    /// A team where only the leader can fight
    fn lone(leader: HeroTemplate) -> Team {
        let base = leader.id.0 * 10;
        let reserve_a = hero(base + 1, "reserve", HeroType::Eta, 0, 1, 0);
        let reserve_b = hero(base + 2, "reserve", HeroType::Eta, 0, 1, 0);
        Team::from_templates([&leader, &reserve_a, &reserve_b]).unwrap()
    }

    fn strikes(report: &BattleReport) -> Vec<(String, u32, u32)> {
        report
            .log
            .iter()
            .filter_map(|e| match e {
                BattleEvent::Strike {
                    attacker,
                    damage,
                    remaining_hp,
                    ..
                } => Some((attacker.clone(), *damage, *remaining_hp)),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn test_alternating_duel() {
        let ares = lone(hero(1, "Ares", HeroType::Alpha, 50, 20, 5));
        let hermes = lone(hero(2, "Hermes", HeroType::Beta, 50, 20, 5));

        let mut dice = ScriptedDice::never_miss(Side::A);
        let report = resolve_battle(ares, hermes, "jason", "mira", &mut dice);

        // Alpha beats beta: trunc(20 * 1.15) - 5 = 18.
        // Beta into alpha is resisted: trunc(20 * 0.85) - 5 = 12.
        assert_eq!(
            strikes(&report),
            vec![
                ("Ares".to_string(), 18, 32),
                ("Hermes".to_string(), 12, 38),
                ("Ares".to_string(), 18, 14),
                ("Hermes".to_string(), 12, 26),
                ("Ares".to_string(), 18, 0),
            ]
        );
        assert_eq!(report.outcome, Outcome::Winner(Side::A));
        assert_eq!(report.first, Side::A);
        assert!(report.team(Side::B).all_fainted());
        assert_eq!(report.team(Side::A).members()[0].current_hp(), 26);

        let lines = report.log.lines();
        assert_eq!(lines.first().unwrap(), "jason starts the battle!");
        assert_eq!(
            lines[1],
            "Ares deals a super effective hit against Hermes, dealing 18 damage and leaving them with 32 HP!"
        );
        assert_eq!(lines.last().unwrap(), "jason wins the battle!");
    }

    #[test]
    fn test_side_b_can_open() {
        let ares = lone(hero(1, "Ares", HeroType::Alpha, 50, 20, 5));
        let hermes = lone(hero(2, "Hermes", HeroType::Beta, 50, 20, 5));

        let mut dice = ScriptedDice::never_miss(Side::B);
        let report = resolve_battle(ares, hermes, "jason", "mira", &mut dice);

        assert_eq!(report.log.lines()[0], "mira starts the battle!");
        assert_eq!(strikes(&report)[0], ("Hermes".to_string(), 12, 38));
        // Hermes needs 5 hits, Ares needs 3; Ares still finishes first
        assert_eq!(report.outcome, Outcome::Winner(Side::A));
    }

    #[test]
    fn test_miss_is_shared_by_the_acting_side() {
        let ares = lone(hero(1, "Ares", HeroType::Alpha, 50, 20, 5));
        let hermes = lone(hero(2, "Hermes", HeroType::Beta, 50, 20, 5));

        let mut dice = ScriptedDice::new(Side::A, [10, 11]);
        let report = resolve_battle(ares, hermes, "jason", "mira", &mut dice);

        assert_eq!(
            report.log.events()[1],
            BattleEvent::Miss {
                attacker: "Ares".into(),
                defender: "Hermes".into()
            }
        );
        assert_eq!(strikes(&report)[0], ("Hermes".to_string(), 12, 38));
    }

    #[test]
    fn test_minimum_damage_is_one() {
        let wall = lone(hero(1, "Wall", HeroType::Gamma, 3, 1, 100));
        let pebble = lone(hero(2, "Pebble", HeroType::Eta, 3, 1, 100));

        let mut dice = ScriptedDice::never_miss(Side::A);
        let report = resolve_battle(wall, pebble, "a", "b", &mut dice);

        assert!(strikes(&report).iter().all(|(_, damage, _)| *damage == 1));
        assert_eq!(report.outcome, Outcome::Winner(Side::A));
    }

    #[test]
    fn test_boosted_damage_saturates() {
        let titan = Participant::from_template(&hero(1, "Titan", HeroType::Alpha, 10, u32::MAX, 0));
        let target = Participant::from_template(&hero(2, "Target", HeroType::Beta, 10, 1, 0));

        assert_eq!(
            strike_damage(&titan, &target),
            (Effectiveness::SuperEffective, u32::MAX)
        );

        let neutral = Participant::from_template(&hero(3, "Target", HeroType::Delta, 10, 1, 7));
        assert_eq!(
            strike_damage(&titan, &neutral),
            (Effectiveness::Neutral, u32::MAX - 7)
        );
    }

    #[test]
    fn test_draw_when_nobody_can_fight() {
        let a = lone(hero(1, "Ghost", HeroType::Alpha, 0, 10, 0));
        let b = lone(hero(2, "Shade", HeroType::Beta, 0, 10, 0));

        let mut dice = ScriptedDice::never_miss(Side::B);
        let report = resolve_battle(a, b, "a", "b", &mut dice);

        assert_eq!(report.outcome, Outcome::Draw);
        assert_eq!(report.winner(), None);
        assert_eq!(
            report.log.lines(),
            vec!["b starts the battle!", "Both teams are out of heroes!"]
        );
    }

    #[test]
    fn test_forfeit_when_active_side_is_empty() {
        let empty = lone(hero(1, "Ghost", HeroType::Alpha, 0, 10, 0));
        let alive = lone(hero(2, "Hermes", HeroType::Beta, 5, 10, 0));

        let mut dice = ScriptedDice::never_miss(Side::A);
        let report = resolve_battle(empty, alive, "a", "b", &mut dice);

        assert_eq!(report.outcome, Outcome::Winner(Side::B));
        assert_eq!(report.log.lines().last().unwrap(), "b wins the battle!");
    }

    #[test]
    fn test_synergy_logged_and_applied_once() {
        // alpha/beta/gamma: attack x1.10 -> 20 becomes 22
        let a = Team::from_templates([
            &hero(1, "Ares", HeroType::Alpha, 50, 20, 5),
            &hero(2, "Hermes", HeroType::Beta, 50, 20, 5),
            &hero(3, "Gaia", HeroType::Gamma, 50, 20, 5),
        ])
        .unwrap();
        let b = lone(hero(4, "Eris", HeroType::Eta, 50, 20, 5));

        let mut dice = ScriptedDice::never_miss(Side::A);
        let report = resolve_battle(a, b, "jason", "mira", &mut dice);

        let lines = report.log.lines();
        assert_eq!(lines[0], "jason's team synergy activated!");
        assert_eq!(lines[1], "jason starts the battle!");
        assert!(report.synergy[0].is_some());
        assert!(report.synergy[1].is_none());

        // Alpha into eta is resisted: trunc(22 * 0.85) - 5 = 13
        assert_eq!(strikes(&report)[0], ("Ares".to_string(), 13, 37));
    }

    #[test]
    fn test_scripted_runs_are_identical() {
        let build = || {
            (
                Team::from_templates([
                    &hero(1, "Ares", HeroType::Alpha, 40, 18, 4),
                    &hero(2, "Hermes", HeroType::Delta, 35, 22, 3),
                    &hero(3, "Gaia", HeroType::Zeta, 60, 12, 8),
                ])
                .unwrap(),
                Team::from_templates([
                    &hero(4, "Eris", HeroType::Eta, 45, 19, 5),
                    &hero(5, "Nyx", HeroType::Beta, 30, 25, 2),
                    &hero(6, "Hera", HeroType::Gamma, 55, 14, 6),
                ])
                .unwrap(),
            )
        };
        let rolls = [50, 3, 77, 9, 100, 42, 1, 64, 88, 15, 10, 99];

        let (a1, b1) = build();
        let (a2, b2) = build();
        let first = resolve_battle(a1, b1, "a", "b", &mut ScriptedDice::new(Side::B, rolls));
        let second = resolve_battle(a2, b2, "a", "b", &mut ScriptedDice::new(Side::B, rolls));

        assert_eq!(first.log, second.log);
        assert_eq!(first.outcome, second.outcome);
    }

    #[test]
    fn test_seeded_battles_hold_invariants() {
        let types = HeroType::all();
        for seed in 0..200u64 {
            let mut rng = StdRng::seed_from_u64(seed);
            let mut pick = |id: u32| {
                use rand::Rng;
                hero(
                    id,
                    &format!("h{id}"),
                    types[rng.gen_range(0..types.len())],
                    rng.gen_range(1..80),
                    rng.gen_range(1..30),
                    rng.gen_range(0..15),
                )
            };
            let a = Team::from_templates([&pick(1), &pick(2), &pick(3)]).unwrap();
            let b = Team::from_templates([&pick(4), &pick(5), &pick(6)]).unwrap();

            let mut dice = RandomDice::new(StdRng::seed_from_u64(seed ^ 0xA5A5));
            let report = resolve_battle(a, b, "a", "b", &mut dice);

            for event in report.log.iter() {
                if let BattleEvent::Strike { damage, .. } = event {
                    assert!(*damage >= 1);
                }
            }

            match report.outcome {
                Outcome::Winner(side) => {
                    assert!(report.team(side.opponent()).all_fainted());
                    assert!(report.team(side).alive_count() > 0);
                }
                Outcome::Draw => {
                    assert!(report.team(Side::A).all_fainted());
                    assert!(report.team(Side::B).all_fainted());
                }
            }
        }
    }
}
