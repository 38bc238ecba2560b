//! Character - Health, stats, equipment and abilities of a combatant

mod archetype;
mod attack;
mod inventory;

pub use archetype::{Archetype, MonsterKind};
pub use inventory::Inventory;

use crate::ability::Ability;
use crate::config::ArchetypeDefaults;
use crate::error::CombatError;
use crate::item::{ItemKind, Weapon};
use crate::report::{DamageReport, HealReport};
use std::fmt;
use std::rc::Rc;

/// Clamp a raw health value into `[0, max]`
///
/// Every write to a character's health goes through this.
pub fn clamp_health(raw: i64, max: u32) -> u32 {
    raw.clamp(0, i64::from(max)) as u32
}

/// A combatant
///
/// Health stays within `[0, max_health]`; the only mutator is `set_health`.
#[derive(Debug, Clone)]
pub struct Character {
    name: String,
    max_health: u32,
    health: u32,
    strength: u32,
    weapon: Option<Rc<Weapon>>,
    inventory: Inventory,
    abilities: Vec<Ability>,
    archetype: Archetype,
}

impl Character {
    /// Create a character at full health
    pub fn new(
        name: impl Into<String>,
        max_health: u32,
        strength: u32,
        archetype: Archetype,
    ) -> Result<Self, CombatError> {
        if max_health == 0 {
            return Err(CombatError::invalid("max health must be positive"));
        }
        archetype.validate()?;
        Ok(Self::with_valid_stats(name, max_health, strength, archetype))
    }

    fn with_valid_stats(
        name: impl Into<String>,
        max_health: u32,
        strength: u32,
        archetype: Archetype,
    ) -> Self {
        Character {
            name: name.into(),
            max_health,
            health: max_health,
            strength,
            weapon: None,
            inventory: Inventory::new(),
            abilities: Vec::new(),
            archetype,
        }
    }

    pub fn warrior(name: impl Into<String>) -> Self {
        let defaults = ArchetypeDefaults::default();
        Self::with_valid_stats(
            name,
            defaults.warrior.max_health,
            defaults.warrior.strength,
            Archetype::Warrior,
        )
    }

    pub fn mage(name: impl Into<String>) -> Self {
        let defaults = ArchetypeDefaults::default();
        Self::with_valid_stats(
            name,
            defaults.mage.max_health,
            defaults.mage.strength,
            Archetype::Mage {
                magic_power: defaults.mage_magic_power,
            },
        )
    }

    pub fn archer(name: impl Into<String>) -> Self {
        let defaults = ArchetypeDefaults::default();
        Self::with_valid_stats(
            name,
            defaults.archer.max_health,
            defaults.archer.strength,
            Archetype::Archer {
                precision: defaults.archer_precision,
            },
        )
    }

    pub fn monster(name: impl Into<String>) -> Self {
        let defaults = ArchetypeDefaults::default();
        Self::with_valid_stats(
            name,
            defaults.monster.max_health,
            defaults.monster.strength,
            Archetype::Monster(MonsterKind::Beast),
        )
    }

    /// A standard goblin
    pub fn goblin() -> Self {
        let defaults = ArchetypeDefaults::default();
        Self::with_valid_stats(
            defaults.goblin_name,
            defaults.goblin.max_health,
            defaults.goblin.strength,
            Archetype::Monster(MonsterKind::Goblin),
        )
    }

    /// A standard orc
    pub fn orc() -> Self {
        let defaults = ArchetypeDefaults::default();
        Self::with_valid_stats(
            defaults.orc_name,
            defaults.orc.max_health,
            defaults.orc.strength,
            Archetype::Monster(MonsterKind::Orc {
                crit_chance: defaults.orc_crit_chance,
            }),
        )
    }

    // === Accessors ===

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn max_health(&self) -> u32 {
        self.max_health
    }

    pub fn health(&self) -> u32 {
        self.health
    }

    pub fn strength(&self) -> u32 {
        self.strength
    }

    pub fn archetype(&self) -> &Archetype {
        &self.archetype
    }

    pub fn weapon(&self) -> Option<&Weapon> {
        self.weapon.as_deref()
    }

    pub fn inventory(&self) -> &Inventory {
        &self.inventory
    }

    pub fn inventory_mut(&mut self) -> &mut Inventory {
        &mut self.inventory
    }

    pub fn abilities(&self) -> &[Ability] {
        &self.abilities
    }

    pub fn magic_power(&self) -> Option<u32> {
        match self.archetype {
            Archetype::Mage { magic_power } => Some(magic_power),
            _ => None,
        }
    }

    pub fn precision(&self) -> Option<u32> {
        match self.archetype {
            Archetype::Archer { precision } => Some(precision),
            _ => None,
        }
    }

    pub fn crit_chance(&self) -> Option<f64> {
        match self.archetype {
            Archetype::Monster(MonsterKind::Orc { crit_chance }) => Some(crit_chance),
            _ => None,
        }
    }

    pub fn is_alive(&self) -> bool {
        self.health > 0
    }

    /// Strength plus equipped weapon damage
    pub fn attack_power(&self) -> i64 {
        let weapon_damage = self.weapon.as_ref().map_or(0, |w| w.damage());
        i64::from(self.strength) + i64::from(weapon_damage)
    }

    // === Mutators ===

    /// Store `raw` clamped to `[0, max_health]` and return the stored value
    pub fn set_health(&mut self, raw: i64) -> u32 {
        self.health = clamp_health(raw, self.max_health);
        self.health
    }

    /// Set health from a floating point value, truncating toward zero
    ///
    /// NaN and infinities are rejected instead of clamped.
    pub fn set_health_f64(&mut self, raw: f64) -> Result<u32, CombatError> {
        if !raw.is_finite() {
            return Err(CombatError::invalid(format!(
                "health must be a finite number, got {}",
                raw
            )));
        }
        // Saturating float-to-int conversion
        Ok(self.set_health(raw.trunc() as i64))
    }

    /// Subtract `amount` from health
    pub fn receive_damage(&mut self, amount: i64) -> Result<DamageReport, CombatError> {
        if amount < 0 {
            return Err(CombatError::invalid(format!(
                "damage cannot be negative (got {})",
                amount
            )));
        }
        let health_before = self.health;
        let health_after = self.set_health(i64::from(health_before).saturating_sub(amount));
        Ok(DamageReport {
            target: self.name.clone(),
            amount,
            health_before,
            health_after,
        })
    }

    /// Add `amount` to health; `source` names what did the healing
    pub fn heal(&mut self, source: &str, amount: u32) -> HealReport {
        let health_before = self.health;
        let health_after = self.set_health(i64::from(health_before) + i64::from(amount));
        HealReport {
            target: self.name.clone(),
            source: source.to_string(),
            amount,
            health_before,
            health_after,
        }
    }

    /// Replace the equipped weapon; weapons can be shared between characters
    pub fn equip_weapon(&mut self, weapon: impl Into<Rc<Weapon>>) {
        self.weapon = Some(weapon.into());
    }

    pub fn unequip_weapon(&mut self) -> Option<Rc<Weapon>> {
        self.weapon.take()
    }

    pub fn add_ability(&mut self, ability: Ability) {
        self.abilities.push(ability);
    }

    /// Use and remove the first potion in the inventory
    pub fn drink_first_potion(&mut self) -> Option<HealReport> {
        let item = self.inventory.find_first(ItemKind::Potion)?.clone();
        let potion = item.as_potion()?;
        let report = potion.use_on(self);
        self.inventory.remove(&item);
        tracing::debug!("{}", report);
        Some(report)
    }
}

impl fmt::Display for Character {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} | HP: {}/{} | Strength: {} | Weapon: ",
            self.name, self.health, self.max_health, self.strength
        )?;
        match &self.weapon {
            Some(weapon) => write!(f, "{}", weapon),
            None => write!(f, "None"),
        }
    }
}
