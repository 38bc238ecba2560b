//! Dice - Seedable RNG service for rolls and probability checks

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Inclusive range for a dice roll (e.g. 1-20)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiceRange {
    pub low: u32,
    pub high: u32,
}

impl DiceRange {
    pub const fn new(low: u32, high: u32) -> Self {
        DiceRange { low, high }
    }

    /// A standard die with faces 1..=sides
    pub const fn d(sides: u32) -> Self {
        DiceRange { low: 1, high: sides }
    }

    pub fn is_valid(&self) -> bool {
        self.low <= self.high
    }
}

impl fmt::Display for DiceRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.low, self.high)
    }
}

/// Random number service owned by the battle orchestrator
///
/// Backed by ChaCha8 so a given seed yields the same stream on every platform.
#[derive(Debug, Clone)]
pub struct Dice {
    rng: ChaCha8Rng,
}

impl Dice {
    /// Deterministic dice for reproducible battles
    pub fn seeded(seed: u64) -> Self {
        Dice {
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    /// Non-deterministic dice seeded from the OS
    pub fn from_entropy() -> Self {
        Dice {
            rng: ChaCha8Rng::from_entropy(),
        }
    }

    /// Roll uniformly over an inclusive range
    pub fn roll(&mut self, range: DiceRange) -> u32 {
        self.roll_between(range.low, range.high)
    }

    /// Roll uniformly over `low..=high`; a reversed range is swapped
    pub fn roll_between(&mut self, low: u32, high: u32) -> u32 {
        let (low, high) = if low <= high { (low, high) } else { (high, low) };
        self.rng.gen_range(low..=high)
    }

    /// True when a roll of 1..=n comes up 1
    pub fn one_in(&mut self, n: u32) -> bool {
        self.roll_between(1, n.max(1)) == 1
    }

    /// Uniform draw in [0, 1)
    pub fn chance(&mut self) -> f64 {
        self.rng.gen::<f64>()
    }

    /// Uniform index into a collection of `len` elements
    pub fn choose_index(&mut self, len: usize) -> Option<usize> {
        if len == 0 {
            None
        } else {
            Some(self.rng.gen_range(0..len))
        }
    }
}

impl Default for Dice {
    fn default() -> Self {
        Dice::from_entropy()
    }
}
