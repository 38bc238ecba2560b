//! Items - Weapons and potions carried by characters

use crate::character::Character;
use crate::report::HealReport;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A weapon adds its damage to the wielder's attack power
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Weapon {
    name: String,
    damage: u32,
}

impl Weapon {
    pub fn new(name: impl Into<String>, damage: u32) -> Self {
        Weapon {
            name: name.into(),
            damage,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn damage(&self) -> u32 {
        self.damage
    }
}

impl fmt::Display for Weapon {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (Damage: {})", self.name, self.damage)
    }
}

/// A healing potion
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Potion {
    name: String,
    heal_amount: u32,
}

impl Potion {
    pub fn new(name: impl Into<String>, heal_amount: u32) -> Self {
        Potion {
            name: name.into(),
            heal_amount,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn heal_amount(&self) -> u32 {
        self.heal_amount
    }

    /// Heal the target by this potion's amount, clamped to its max health
    pub fn use_on(&self, target: &mut Character) -> HealReport {
        target.heal(&self.name, self.heal_amount)
    }
}

impl fmt::Display for Potion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (+{} HP)", self.name, self.heal_amount)
    }
}

/// Discriminant used for inventory lookups
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ItemKind {
    Weapon,
    Potion,
}

/// Anything an inventory can hold
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Item {
    Weapon(Weapon),
    Potion(Potion),
}

impl Item {
    pub fn kind(&self) -> ItemKind {
        match self {
            Item::Weapon(_) => ItemKind::Weapon,
            Item::Potion(_) => ItemKind::Potion,
        }
    }

    pub fn name(&self) -> &str {
        match self {
            Item::Weapon(w) => w.name(),
            Item::Potion(p) => p.name(),
        }
    }

    pub fn as_weapon(&self) -> Option<&Weapon> {
        match self {
            Item::Weapon(w) => Some(w),
            Item::Potion(_) => None,
        }
    }

    pub fn as_potion(&self) -> Option<&Potion> {
        match self {
            Item::Potion(p) => Some(p),
            Item::Weapon(_) => None,
        }
    }
}

impl From<Weapon> for Item {
    fn from(weapon: Weapon) -> Self {
        Item::Weapon(weapon)
    }
}

impl From<Potion> for Item {
    fn from(potion: Potion) -> Self {
        Item::Potion(potion)
    }
}

impl fmt::Display for Item {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Item::Weapon(w) => w.fmt(f),
            Item::Potion(p) => p.fmt(f),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_item_kind_and_accessors() {
        let sword: Item = Weapon::new("Long Sword", 10).into();
        let potion: Item = Potion::new("Potion of Life", 30).into();

        assert_eq!(sword.kind(), ItemKind::Weapon);
        assert_eq!(potion.kind(), ItemKind::Potion);
        assert_eq!(sword.as_weapon().map(Weapon::damage), Some(10));
        assert!(sword.as_potion().is_none());
        assert_eq!(potion.as_potion().map(Potion::heal_amount), Some(30));
        assert_eq!(potion.name(), "Potion of Life");
    }

    #[test]
    fn test_display() {
        assert_eq!(Weapon::new("Magic Staff", 6).to_string(), "Magic Staff (Damage: 6)");
        assert_eq!(Potion::new("Potion of Life", 30).to_string(), "Potion of Life (+30 HP)");
    }

    #[test]
    fn test_potion_heals_up_to_max() {
        let mut hero = Character::warrior("Her");
        hero.receive_damage(50).unwrap();
        assert_eq!(hero.health(), 70);

        let report = Potion::new("Potion of Life", 30).use_on(&mut hero);
        assert_eq!(hero.health(), 100);
        assert_eq!(report.health_before, 70);
        assert_eq!(report.health_after, 100);

        let report = Potion::new("Potion of Life", 30).use_on(&mut hero);
        assert_eq!(hero.health(), 120);
        assert_eq!(report.healed(), 20);
        assert!(report.to_string().contains("Potion of Life"));
    }
}
