//! Abilities - Special actions a character can use instead of its attack

use crate::battle::CombatContext;
use crate::character::Character;
use crate::error::CombatError;
use crate::report::{Action, ActionReport};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Stateless special action, scaled from the user's stats
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Ability {
    /// floor(strength * multiplier) + die
    StrongAttack,
    /// magic power (or a fallback) + die + flat bonus
    Fireball,
}

impl Ability {
    pub const ALL: [Ability; 2] = [Ability::StrongAttack, Ability::Fireball];

    pub fn name(&self) -> &'static str {
        match self {
            Ability::StrongAttack => "StrongAttack",
            Ability::Fireball => "Fireball",
        }
    }

    /// Case-insensitive lookup by type name
    pub fn from_name(name: &str) -> Option<Ability> {
        Ability::ALL
            .into_iter()
            .find(|ability| ability.name().eq_ignore_ascii_case(name.trim()))
    }

    /// Roll this ability's damage for `user`
    pub fn roll_damage(&self, user: &Character, ctx: &mut CombatContext) -> i64 {
        let rules = &ctx.rules.abilities;
        match self {
            Ability::StrongAttack => {
                // Floor of a non-negative product; `as` saturates
                let scaled =
                    (f64::from(user.strength()) * rules.strong_attack_multiplier).floor() as i64;
                scaled + i64::from(ctx.dice.roll(rules.strong_attack_die))
            }
            Ability::Fireball => {
                let magic = user.magic_power().unwrap_or(rules.fireball_default_magic);
                i64::from(magic)
                    + i64::from(ctx.dice.roll(rules.fireball_die))
                    + i64::from(rules.fireball_bonus)
            }
        }
    }

    /// Use this ability: `user` supplies the stats, `target` takes the damage
    pub fn use_on(
        &self,
        user: &Character,
        target: &mut Character,
        ctx: &mut CombatContext,
    ) -> Result<ActionReport, CombatError> {
        if !user.is_alive() {
            return Err(CombatError::invalid(format!(
                "{} cannot use {} while defeated",
                user.name(),
                self.name()
            )));
        }

        let damage = self.roll_damage(user, ctx);
        let taken = target.receive_damage(damage)?;
        let report = ActionReport::hit(
            user.name(),
            user.archetype().label(),
            Action::Ability(*self),
            taken,
        );
        tracing::debug!("{}", report);
        Ok(report)
    }
}

impl fmt::Display for Ability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Use the first ability in `user`'s list whose name matches `name`
///
/// Returns `Ok(None)` when the user has no such ability.
pub fn use_ability_by_name(
    user: &Character,
    name: &str,
    target: &mut Character,
    ctx: &mut CombatContext,
) -> Result<Option<ActionReport>, CombatError> {
    let found = user
        .abilities()
        .iter()
        .find(|ability| ability.name().eq_ignore_ascii_case(name.trim()))
        .copied();

    match found {
        Some(ability) => ability.use_on(user, target, ctx).map(Some),
        None => Ok(None),
    }
}
