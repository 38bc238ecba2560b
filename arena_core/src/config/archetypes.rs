//! Default stats for each archetype

use super::ConfigError;
use crate::character::{Archetype, Character, MonsterKind};
use crate::error::CombatError;
use serde::{Deserialize, Serialize};

/// Base stats used when a character is built without explicit numbers
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ArchetypeDefaults {
    pub warrior: BaseStats,
    pub mage: BaseStats,
    pub mage_magic_power: u32,
    pub archer: BaseStats,
    pub archer_precision: u32,
    pub monster: BaseStats,
    pub goblin: BaseStats,
    pub goblin_name: String,
    pub orc: BaseStats,
    pub orc_name: String,
    pub orc_crit_chance: f64,
}

/// Max health and strength pair
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BaseStats {
    pub max_health: u32,
    pub strength: u32,
}

impl BaseStats {
    pub const fn new(max_health: u32, strength: u32) -> Self {
        BaseStats {
            max_health,
            strength,
        }
    }
}

impl Default for ArchetypeDefaults {
    fn default() -> Self {
        ArchetypeDefaults {
            warrior: BaseStats::new(120, 15),
            mage: BaseStats::new(80, 8),
            mage_magic_power: 20,
            archer: BaseStats::new(90, 10),
            archer_precision: 14,
            monster: BaseStats::new(60, 10),
            goblin: BaseStats::new(50, 8),
            goblin_name: "Goblin".to_string(),
            orc: BaseStats::new(100, 12),
            orc_name: "Orc".to_string(),
            orc_crit_chance: 0.2,
        }
    }
}

impl ArchetypeDefaults {
    pub(crate) fn validate(&self) -> Result<(), ConfigError> {
        let stats = [
            ("warrior", self.warrior),
            ("mage", self.mage),
            ("archer", self.archer),
            ("monster", self.monster),
            ("goblin", self.goblin),
            ("orc", self.orc),
        ];
        for (name, base) in stats {
            if base.max_health == 0 {
                return Err(ConfigError::ValidationError(format!(
                    "archetypes.{}.max_health must be positive",
                    name
                )));
            }
        }
        if !(0.0..=1.0).contains(&self.orc_crit_chance) {
            return Err(ConfigError::ValidationError(format!(
                "archetypes.orc_crit_chance must be within [0, 1], got {}",
                self.orc_crit_chance
            )));
        }
        Ok(())
    }

    pub fn warrior(&self, name: &str) -> Result<Character, CombatError> {
        self.build(name, self.warrior, Archetype::Warrior)
    }

    pub fn mage(&self, name: &str) -> Result<Character, CombatError> {
        self.build(
            name,
            self.mage,
            Archetype::Mage {
                magic_power: self.mage_magic_power,
            },
        )
    }

    pub fn archer(&self, name: &str) -> Result<Character, CombatError> {
        self.build(
            name,
            self.archer,
            Archetype::Archer {
                precision: self.archer_precision,
            },
        )
    }

    pub fn monster(&self, name: &str) -> Result<Character, CombatError> {
        self.build(name, self.monster, Archetype::Monster(MonsterKind::Beast))
    }

    /// A goblin with the default name
    pub fn goblin(&self) -> Result<Character, CombatError> {
        self.build(&self.goblin_name, self.goblin, Archetype::Monster(MonsterKind::Goblin))
    }

    /// An orc with the default name
    pub fn orc(&self) -> Result<Character, CombatError> {
        self.named_orc(&self.orc_name)
    }

    pub fn named_orc(&self, name: &str) -> Result<Character, CombatError> {
        self.build(
            name,
            self.orc,
            Archetype::Monster(MonsterKind::Orc {
                crit_chance: self.orc_crit_chance,
            }),
        )
    }

    fn build(
        &self,
        name: &str,
        base: BaseStats,
        archetype: Archetype,
    ) -> Result<Character, CombatError> {
        Character::new(name, base.max_health, base.strength, archetype)
    }
}
