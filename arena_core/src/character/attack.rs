//! Archetype attacks

use super::{Archetype, Character, MonsterKind};
use crate::battle::CombatContext;
use crate::error::CombatError;
use crate::report::{Action, ActionReport};

impl Character {
    /// Attack `target` with this character's archetype attack
    ///
    /// Damage is rolled fresh on every call:
    /// - Warrior: attack power + warrior die
    /// - Mage: magic power + mage die (weapon ignored)
    /// - Archer: accuracy roll <= precision hits for attack power + archer die
    /// - Monster / Goblin: attack power + monster die
    /// - Orc: attack power, multiplied on a crit, then + orc die
    pub fn attack(
        &self,
        target: &mut Character,
        ctx: &mut CombatContext,
    ) -> Result<ActionReport, CombatError> {
        if !self.is_alive() {
            return Err(CombatError::invalid(format!(
                "{} cannot attack while defeated",
                self.name
            )));
        }

        let rules = &ctx.rules.attacks;
        let dice = &mut ctx.dice;
        let label = self.archetype.label();

        let report = match self.archetype {
            Archetype::Warrior => {
                let damage = self.attack_power() + i64::from(dice.roll(rules.warrior_die));
                let taken = target.receive_damage(damage)?;
                ActionReport::hit(&self.name, label, Action::Attack, taken)
            }
            Archetype::Mage { magic_power } => {
                let damage = i64::from(magic_power) + i64::from(dice.roll(rules.mage_die));
                let taken = target.receive_damage(damage)?;
                ActionReport::hit(&self.name, label, Action::Attack, taken)
            }
            Archetype::Archer { precision } => {
                let roll = dice.roll(rules.archer_accuracy_die);
                if roll <= precision {
                    let damage = self.attack_power() + i64::from(dice.roll(rules.archer_die));
                    let taken = target.receive_damage(damage)?;
                    ActionReport::hit(&self.name, label, Action::Attack, taken).with_roll(roll)
                } else {
                    ActionReport::miss(&self.name, label, target.name(), roll)
                }
            }
            Archetype::Monster(MonsterKind::Beast | MonsterKind::Goblin) => {
                let damage = self.attack_power() + i64::from(dice.roll(rules.monster_die));
                let taken = target.receive_damage(damage)?;
                ActionReport::hit(&self.name, label, Action::Attack, taken)
            }
            Archetype::Monster(MonsterKind::Orc { crit_chance }) => {
                let mut damage = self.attack_power();
                let critical = dice.chance() < crit_chance;
                if critical {
                    damage *= i64::from(rules.orc_crit_multiplier);
                }
                damage += i64::from(dice.roll(rules.orc_die));
                let taken = target.receive_damage(damage)?;
                ActionReport::hit(&self.name, label, Action::Attack, taken).with_critical(critical)
            }
        };

        tracing::debug!("{}", report);
        Ok(report)
    }
}
