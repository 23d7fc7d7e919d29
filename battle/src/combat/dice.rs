//! Sources of randomness for a battle

use std::collections::VecDeque;

use rand::Rng;

use super::resolver::Side;

/// Everything random about a battle: who opens, and one percentile roll
/// per exchange.
pub trait CombatDice {
    /// Pick the side that acts first
    fn starting_side(&mut self) -> Side;

    /// Roll a uniform integer in `1..=100`
    fn roll_percent(&mut self) -> u8;
}

/// Dice backed by any `rand` generator
#[derive(Debug, Clone)]
pub struct RandomDice<R> {
    rng: R,
}

impl<R: Rng> RandomDice<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl<R: Rng> CombatDice for RandomDice<R> {
    fn starting_side(&mut self) -> Side {
        if self.rng.gen_bool(0.5) { Side::A } else { Side::B }
    }

    fn roll_percent(&mut self) -> u8 {
        self.rng.gen_range(1..=100)
    }
}

/// Dice that replay a fixed script. Once the script runs out every roll is 100.
#[derive(Debug, Clone)]
pub struct ScriptedDice {
    start: Side,
    rolls: VecDeque<u8>,
}

impl ScriptedDice {
    pub fn new(start: Side, rolls: impl IntoIterator<Item = u8>) -> Self {
        Self {
            start,
            rolls: rolls.into_iter().collect(),
        }
    }

    /// Dice that never miss
    pub fn never_miss(start: Side) -> Self {
        Self::new(start, [])
    }

    /// Rolls not consumed yet
    pub fn remaining(&self) -> usize {
        self.rolls.len()
    }
}

impl CombatDice for ScriptedDice {
    fn starting_side(&mut self) -> Side {
        self.start
    }

    fn roll_percent(&mut self) -> u8 {
        self.rolls.pop_front().unwrap_or(100)
    }
}
