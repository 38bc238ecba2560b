//! Demo cast

use anyhow::Result;
use arena_core::config::ArchetypeDefaults;
use arena_core::{Ability, Character, Potion, Weapon};

pub struct Cast {
    pub warrior: Character,
    pub mage: Character,
    pub archer: Character,
    pub goblin: Character,
}

/// Heroes with their gear and abilities, plus the duel's goblin
pub fn build_cast(defaults: &ArchetypeDefaults) -> Result<Cast> {
    let mut warrior = defaults.warrior("Arthos")?;
    let mut mage = defaults.mage("Lunara")?;
    let archer = defaults.archer("Faelan")?;

    warrior.equip_weapon(Weapon::new("Long Sword", 10));
    mage.equip_weapon(Weapon::new("Magic Staff", 6));

    warrior.add_ability(Ability::StrongAttack);
    mage.add_ability(Ability::Fireball);

    warrior.inventory_mut().add(Potion::new("Potion of Life", 30));

    Ok(Cast {
        warrior,
        mage,
        archer,
        goblin: defaults.goblin()?,
    })
}

pub fn build_enemies(defaults: &ArchetypeDefaults) -> Result<Vec<Character>> {
    Ok(vec![defaults.goblin()?, defaults.named_orc("Uruk")?])
}
