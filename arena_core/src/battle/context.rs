//! CombatContext - Dice and rules shared by every action in a battle

use crate::config::CombatRules;
use crate::dice::Dice;

/// The RNG service and rule set used to resolve actions
#[derive(Debug, Clone)]
pub struct CombatContext {
    pub dice: Dice,
    pub rules: CombatRules,
}

impl CombatContext {
    pub fn new(dice: Dice, rules: CombatRules) -> Self {
        CombatContext { dice, rules }
    }

    /// Default rules with deterministic dice
    pub fn seeded(seed: u64) -> Self {
        Self::new(Dice::seeded(seed), CombatRules::default())
    }
}

impl Default for CombatContext {
    fn default() -> Self {
        Self::new(Dice::from_entropy(), CombatRules::default())
    }
}
