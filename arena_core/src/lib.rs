//! arena_core - Turn-based combat resolution engine
//!
//! This library provides:
//! - Dice: Seedable RNG service for dice rolls and probability checks
//! - Character: Health, stats, weapon, inventory, abilities and archetype attacks
//! - Ability: StrongAttack / Fireball actions used against a target
//! - Battle: Duel and team battle orchestration until one side falls
//! - CombatRules: Every numeric constant, loadable from TOML

pub mod ability;
pub mod battle;
pub mod character;
pub mod config;
pub mod dice;
pub mod error;
pub mod item;
pub mod prelude;
pub mod report;

// Re-export core types for convenience
pub use ability::{use_ability_by_name, Ability};
pub use battle::{
    duel, team_battle, Battle, BattleOutcome, Combatants, CombatContext, DuelOutcome, Side,
    TeamOutcome,
};
pub use character::{clamp_health, Archetype, Character, Inventory, MonsterKind};
pub use config::{default_rules, CombatRules, ConfigError};
pub use dice::{Dice, DiceRange};
pub use error::CombatError;
pub use item::{Item, ItemKind, Potion, Weapon};
pub use report::{Action, ActionReport, DamageReport, HealReport, Outcome};
