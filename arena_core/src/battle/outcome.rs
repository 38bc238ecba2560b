//! Battle outcomes

use crate::character::Character;
use crate::report::ActionReport;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Side of a battle; A is the first argument
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Side {
    A,
    B,
}

impl Side {
    pub fn label(&self) -> &'static str {
        match self {
            Side::A => "A",
            Side::B => "B",
        }
    }

    pub fn opponent(&self) -> Side {
        match self {
            Side::A => Side::B,
            Side::B => Side::A,
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Result of a one-on-one duel
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DuelOutcome {
    pub winner: Side,
    pub winner_name: String,
    /// Turns taken (one action per turn)
    pub turns: u32,
    pub log: Vec<ActionReport>,
}

impl DuelOutcome {
    /// Map the winning side back to the duel's participants
    pub fn winner_of<'c>(&self, a: &'c Character, b: &'c Character) -> &'c Character {
        match self.winner {
            Side::A => a,
            Side::B => b,
        }
    }
}

/// Result of a team battle
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeamOutcome {
    pub winner: Side,
    pub rounds: u32,
    /// Names of the winning side's living members
    pub survivors: Vec<String>,
    pub log: Vec<ActionReport>,
}

/// Outcome of `Battle::start`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum BattleOutcome {
    Duel(DuelOutcome),
    Team(TeamOutcome),
}

impl BattleOutcome {
    pub fn winner(&self) -> Side {
        match self {
            BattleOutcome::Duel(outcome) => outcome.winner,
            BattleOutcome::Team(outcome) => outcome.winner,
        }
    }

    pub fn log(&self) -> &[ActionReport] {
        match self {
            BattleOutcome::Duel(outcome) => &outcome.log,
            BattleOutcome::Team(outcome) => &outcome.log,
        }
    }

    pub fn as_duel(&self) -> Option<&DuelOutcome> {
        match self {
            BattleOutcome::Duel(outcome) => Some(outcome),
            BattleOutcome::Team(_) => None,
        }
    }

    pub fn as_team(&self) -> Option<&TeamOutcome> {
        match self {
            BattleOutcome::Team(outcome) => Some(outcome),
            BattleOutcome::Duel(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_side_labels() {
        assert_eq!(Side::A.to_string(), "A");
        assert_eq!(Side::B.label(), "B");
        assert_eq!(Side::A.opponent(), Side::B);
    }

    #[test]
    fn test_winner_of() {
        let a = Character::warrior("Arthos");
        let b = Character::goblin();
        let outcome = DuelOutcome {
            winner: Side::B,
            winner_name: "Goblin".to_string(),
            turns: 3,
            log: Vec::new(),
        };
        assert_eq!(outcome.winner_of(&a, &b).name(), "Goblin");
    }
}
