//! Prelude - Common imports for driving combat
//!
//! ```
//! use arena_core::prelude::*;
//! ```

pub use crate::ability::{use_ability_by_name, Ability};
pub use crate::battle::{duel, team_battle, Battle, BattleOutcome, CombatContext, Side};
pub use crate::character::{Archetype, Character};
pub use crate::config::CombatRules;
pub use crate::dice::Dice;
pub use crate::error::CombatError;
pub use crate::item::{Item, Potion, Weapon};
pub use crate::report::ActionReport;
