//! Combat rules configuration

use super::{ArchetypeDefaults, ConfigError};
use crate::dice::DiceRange;
use serde::{Deserialize, Serialize};

/// Tunable combat constants
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct CombatRules {
    #[serde(default)]
    pub attacks: AttackRules,
    #[serde(default)]
    pub abilities: AbilityRules,
    #[serde(default)]
    pub battle: BattleRules,
    #[serde(default)]
    pub archetypes: ArchetypeDefaults,
}

impl CombatRules {
    /// Reject rules the engine cannot roll or terminate with
    pub fn validate(&self) -> Result<(), ConfigError> {
        let ranges = [
            ("attacks.warrior_die", self.attacks.warrior_die),
            ("attacks.mage_die", self.attacks.mage_die),
            ("attacks.archer_accuracy_die", self.attacks.archer_accuracy_die),
            ("attacks.archer_die", self.attacks.archer_die),
            ("attacks.monster_die", self.attacks.monster_die),
            ("attacks.orc_die", self.attacks.orc_die),
            ("abilities.strong_attack_die", self.abilities.strong_attack_die),
            ("abilities.fireball_die", self.abilities.fireball_die),
        ];
        for (name, range) in ranges {
            if !range.is_valid() {
                return Err(ConfigError::ValidationError(format!(
                    "{} has low bound above high bound ({})",
                    name, range
                )));
            }
        }

        if self.abilities.strong_attack_multiplier < 0.0
            || !self.abilities.strong_attack_multiplier.is_finite()
        {
            return Err(ConfigError::ValidationError(
                "abilities.strong_attack_multiplier must be a non-negative number".to_string(),
            ));
        }

        if self.battle.duel_ability_odds == 0 || self.battle.team_ability_odds == 0 {
            return Err(ConfigError::ValidationError(
                "battle ability odds must be at least 1".to_string(),
            ));
        }

        if self.battle.max_turns == 0 || self.battle.max_rounds == 0 {
            return Err(ConfigError::ValidationError(
                "battle.max_turns and battle.max_rounds must be at least 1".to_string(),
            ));
        }

        self.archetypes.validate()
    }
}

/// Dice and multipliers used by archetype attacks
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AttackRules {
    /// Added to attack power on every warrior swing
    #[serde(default = "default_d4")]
    pub warrior_die: DiceRange,
    /// Added to magic power on every mage cast
    #[serde(default = "default_d6")]
    pub mage_die: DiceRange,
    /// Accuracy roll; the shot hits when the roll is at most the archer's precision
    #[serde(default = "default_d20")]
    pub archer_accuracy_die: DiceRange,
    #[serde(default = "default_d4")]
    pub archer_die: DiceRange,
    /// Shared by the generic monster and goblins
    #[serde(default = "default_d4")]
    pub monster_die: DiceRange,
    /// Added after the crit check
    #[serde(default = "default_d6")]
    pub orc_die: DiceRange,
    /// Applied to attack power on an orc critical
    #[serde(default = "default_crit_multiplier")]
    pub orc_crit_multiplier: u32,
}

impl Default for AttackRules {
    fn default() -> Self {
        AttackRules {
            warrior_die: DiceRange::d(4),
            mage_die: DiceRange::d(6),
            archer_accuracy_die: DiceRange::d(20),
            archer_die: DiceRange::d(4),
            monster_die: DiceRange::d(4),
            orc_die: DiceRange::d(6),
            orc_crit_multiplier: 2,
        }
    }
}

fn default_d4() -> DiceRange {
    DiceRange::d(4)
}
fn default_d6() -> DiceRange {
    DiceRange::d(6)
}
fn default_d20() -> DiceRange {
    DiceRange::d(20)
}
fn default_crit_multiplier() -> u32 {
    2
}

/// Ability damage constants
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AbilityRules {
    /// StrongAttack: floor(strength * multiplier) + die
    pub strong_attack_multiplier: f64,
    pub strong_attack_die: DiceRange,
    /// Fireball: magic power + die + flat bonus
    pub fireball_die: DiceRange,
    pub fireball_bonus: u32,
    /// Magic power assumed for casters without one
    pub fireball_default_magic: u32,
}

impl Default for AbilityRules {
    fn default() -> Self {
        AbilityRules {
            strong_attack_multiplier: 1.8,
            strong_attack_die: DiceRange::d(4),
            fireball_die: DiceRange::d(8),
            fireball_bonus: 5,
            fireball_default_magic: 10,
        }
    }
}

/// Battle orchestration constants
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BattleRules {
    /// Duel: an actor with abilities uses one when a 1-in-N roll succeeds
    pub duel_ability_odds: u32,
    /// Team battle: same check per acting member
    pub team_ability_odds: u32,
    /// Turn guard for duels
    pub max_turns: u32,
    /// Round guard for team battles
    pub max_rounds: u32,
}

impl Default for BattleRules {
    fn default() -> Self {
        BattleRules {
            duel_ability_odds: 2,
            team_ability_odds: 3,
            max_turns: 10_000,
            max_rounds: 10_000,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::parse_rules;

    #[test]
    fn test_default_rules() {
        let rules = CombatRules::default();
        assert_eq!(rules.attacks.warrior_die, DiceRange::d(4));
        assert_eq!(rules.attacks.archer_accuracy_die, DiceRange::d(20));
        assert_eq!(rules.attacks.orc_crit_multiplier, 2);
        assert!((rules.abilities.strong_attack_multiplier - 1.8).abs() < f64::EPSILON);
        assert_eq!(rules.abilities.fireball_default_magic, 10);
        assert_eq!(rules.battle.duel_ability_odds, 2);
        assert_eq!(rules.battle.team_ability_odds, 3);
        assert!(rules.validate().is_ok());
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let toml = r#"
[attacks]
warrior_die = { low = 2, high = 8 }

[abilities]
fireball_bonus = 7
"#;

        let rules = parse_rules(toml).unwrap();
        assert_eq!(rules.attacks.warrior_die, DiceRange::new(2, 8));
        assert_eq!(rules.attacks.mage_die, DiceRange::d(6));
        assert_eq!(rules.abilities.fireball_bonus, 7);
        assert_eq!(rules.abilities.fireball_die, DiceRange::d(8));
        assert_eq!(rules.battle, BattleRules::default());
    }

    #[test]
    fn test_validation_rejects_reversed_die() {
        let mut rules = CombatRules::default();
        rules.attacks.orc_die = DiceRange::new(6, 1);

        let err = rules.validate().unwrap_err();
        assert!(err.to_string().contains("attacks.orc_die"));
    }

    #[test]
    fn test_validation_rejects_zero_odds_and_guards() {
        let mut rules = CombatRules::default();
        rules.battle.team_ability_odds = 0;
        assert!(rules.validate().is_err());

        let mut rules = CombatRules::default();
        rules.battle.max_turns = 0;
        assert!(rules.validate().is_err());
    }
}
