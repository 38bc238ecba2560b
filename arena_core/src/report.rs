//! Reports - Human-readable results of resolved actions
//!
//! Every mutating operation returns one of these. `Display` produces the
//! report line shown to players; the fields carry the same numbers for callers
//! that want to inspect them.

use crate::ability::Ability;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Result of `Character::receive_damage`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DamageReport {
    pub target: String,
    pub amount: i64,
    pub health_before: u32,
    pub health_after: u32,
}

impl DamageReport {
    /// Health actually lost (less than `amount` when the hit overkills)
    pub fn health_lost(&self) -> u32 {
        self.health_before - self.health_after
    }

    pub fn is_killing_blow(&self) -> bool {
        self.health_before > 0 && self.health_after == 0
    }

    pub fn summary(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for DamageReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} took {} damage: {} -> {}",
            self.target, self.amount, self.health_before, self.health_after
        )
    }
}

/// Result of healing a character (potions)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealReport {
    pub target: String,
    /// What did the healing
    pub source: String,
    pub amount: u32,
    pub health_before: u32,
    pub health_after: u32,
}

impl HealReport {
    /// Health actually restored after the max-health clamp
    pub fn healed(&self) -> u32 {
        self.health_after - self.health_before
    }

    pub fn summary(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for HealReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} used {} (+{}): {} -> {}",
            self.target, self.source, self.amount, self.health_before, self.health_after
        )
    }
}

/// What the actor did on its turn
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Action {
    Attack,
    Ability(Ability),
}

/// How the action landed
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Outcome {
    Hit {
        damage: DamageReport,
        critical: bool,
        /// Accuracy roll, for attacks that make one
        roll: Option<u32>,
    },
    Miss {
        roll: u32,
    },
}

/// Result of an attack or ability use
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionReport {
    pub actor: String,
    /// Archetype label of the actor (Warrior, Orc, ...)
    pub archetype: String,
    pub target: String,
    pub action: Action,
    pub outcome: Outcome,
}

impl ActionReport {
    pub(crate) fn hit(
        actor: &str,
        archetype: &str,
        action: Action,
        damage: DamageReport,
    ) -> Self {
        ActionReport {
            actor: actor.to_string(),
            archetype: archetype.to_string(),
            target: damage.target.clone(),
            action,
            outcome: Outcome::Hit {
                damage,
                critical: false,
                roll: None,
            },
        }
    }

    pub(crate) fn miss(actor: &str, archetype: &str, target: &str, roll: u32) -> Self {
        ActionReport {
            actor: actor.to_string(),
            archetype: archetype.to_string(),
            target: target.to_string(),
            action: Action::Attack,
            outcome: Outcome::Miss { roll },
        }
    }

    pub(crate) fn with_critical(mut self, is_critical: bool) -> Self {
        if let Outcome::Hit { critical, .. } = &mut self.outcome {
            *critical = is_critical;
        }
        self
    }

    pub(crate) fn with_roll(mut self, accuracy_roll: u32) -> Self {
        if let Outcome::Hit { roll, .. } = &mut self.outcome {
            *roll = Some(accuracy_roll);
        }
        self
    }

    /// Damage applied to the target (0 on a miss)
    pub fn damage_dealt(&self) -> i64 {
        match &self.outcome {
            Outcome::Hit { damage, .. } => damage.amount,
            Outcome::Miss { .. } => 0,
        }
    }

    pub fn damage_report(&self) -> Option<&DamageReport> {
        match &self.outcome {
            Outcome::Hit { damage, .. } => Some(damage),
            Outcome::Miss { .. } => None,
        }
    }

    pub fn is_critical(&self) -> bool {
        matches!(self.outcome, Outcome::Hit { critical: true, .. })
    }

    pub fn is_miss(&self) -> bool {
        matches!(self.outcome, Outcome::Miss { .. })
    }

    pub fn summary(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for ActionReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (&self.action, &self.outcome) {
            (_, Outcome::Miss { roll }) => write!(
                f,
                "{} ({}) misses {} (roll {}).",
                self.actor, self.archetype, self.target, roll
            ),
            (Action::Attack, Outcome::Hit { damage, critical, roll }) => {
                write!(f, "{} ({}) attacks", self.actor, self.archetype)?;
                if *critical {
                    write!(f, " CRITICAL!")?;
                }
                write!(f, " {} for {}", self.target, damage.amount)?;
                if let Some(roll) = roll {
                    write!(f, " (roll {})", roll)?;
                }
                write!(f, ". {}", damage)
            }
            (Action::Ability(ability), Outcome::Hit { damage, .. }) => write!(
                f,
                "{} uses {} on {} for {}. {}",
                self.actor,
                ability.name(),
                self.target,
                damage.amount,
                damage
            ),
        }
    }
}
