//! Archetypes - The closed set of character kinds

use crate::error::CombatError;

/// Character archetype and its archetype-specific stat
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Archetype {
    Warrior,
    /// Casts with `magic_power` instead of attack power
    Mage { magic_power: u32 },
    /// Hits when the accuracy roll is at most `precision`
    Archer { precision: u32 },
    Monster(MonsterKind),
}

/// Monster subtypes; all share the monster attack except the orc
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MonsterKind {
    Beast,
    Goblin,
    /// `crit_chance` in [0, 1] doubles attack power before the dice roll
    Orc { crit_chance: f64 },
}

impl Archetype {
    pub fn label(&self) -> &'static str {
        match self {
            Archetype::Warrior => "Warrior",
            Archetype::Mage { .. } => "Mage",
            Archetype::Archer { .. } => "Archer",
            Archetype::Monster(MonsterKind::Beast) => "Monster",
            Archetype::Monster(MonsterKind::Goblin) => "Goblin",
            Archetype::Monster(MonsterKind::Orc { .. }) => "Orc",
        }
    }

    pub fn is_monster(&self) -> bool {
        matches!(self, Archetype::Monster(_))
    }

    pub(crate) fn validate(&self) -> Result<(), CombatError> {
        if let Archetype::Monster(MonsterKind::Orc { crit_chance }) = self {
            if !(0.0..=1.0).contains(crit_chance) {
                return Err(CombatError::invalid(format!(
                    "crit chance must be within [0, 1], got {}",
                    crit_chance
                )));
            }
        }
        Ok(())
    }
}
