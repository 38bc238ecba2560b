//! Battle orchestration - Duels and team battles
//!
//! A battle is built from two sides. When both sides are single characters it
//! runs as a duel with strictly alternating turns; otherwise both sides are
//! treated as rosters and fight in full-side rounds.

mod context;
mod duel;
mod outcome;
mod team;

pub use context::CombatContext;
pub use duel::duel;
pub use outcome::{BattleOutcome, DuelOutcome, Side, TeamOutcome};
pub use team::team_battle;

use crate::character::Character;
use crate::error::CombatError;
use crate::report::ActionReport;

/// One side of a battle
#[derive(Debug)]
pub enum Combatants<'a> {
    Single(&'a mut Character),
    Roster(&'a mut [Character]),
}

impl<'a> Combatants<'a> {
    pub fn is_roster(&self) -> bool {
        matches!(self, Combatants::Roster(_))
    }

    /// View this side as a roster; a single character becomes a roster of one
    fn as_roster(&mut self) -> &mut [Character] {
        match self {
            Combatants::Single(character) => std::slice::from_mut(&mut **character),
            Combatants::Roster(roster) => &mut **roster,
        }
    }
}

impl<'a> From<&'a mut Character> for Combatants<'a> {
    fn from(character: &'a mut Character) -> Self {
        Combatants::Single(character)
    }
}

impl<'a> From<&'a mut [Character]> for Combatants<'a> {
    fn from(roster: &'a mut [Character]) -> Self {
        Combatants::Roster(roster)
    }
}

impl<'a> From<&'a mut Vec<Character>> for Combatants<'a> {
    fn from(roster: &'a mut Vec<Character>) -> Self {
        Combatants::Roster(roster.as_mut_slice())
    }
}

/// A battle between two sides, owning the dice and rules that resolve it
pub struct Battle<'a> {
    a: Combatants<'a>,
    b: Combatants<'a>,
    ctx: CombatContext,
}

impl<'a> Battle<'a> {
    pub fn new(
        a: impl Into<Combatants<'a>>,
        b: impl Into<Combatants<'a>>,
        ctx: CombatContext,
    ) -> Self {
        Battle {
            a: a.into(),
            b: b.into(),
            ctx,
        }
    }

    /// True when either side is a roster
    pub fn is_team_battle(&self) -> bool {
        self.a.is_roster() || self.b.is_roster()
    }

    pub fn context(&self) -> &CombatContext {
        &self.ctx
    }

    /// Fight until one side has no living members
    pub fn start(&mut self) -> Result<BattleOutcome, CombatError> {
        match (&mut self.a, &mut self.b) {
            (Combatants::Single(p1), Combatants::Single(p2)) => {
                duel(p1, p2, &mut self.ctx).map(BattleOutcome::Duel)
            }
            (a, b) => {
                team_battle(a.as_roster(), b.as_roster(), &mut self.ctx).map(BattleOutcome::Team)
            }
        }
    }
}

/// One actor's action: with abilities and a successful 1-in-`odds` roll it
/// uses a random ability, otherwise its own attack
fn take_action(
    actor: &Character,
    target: &mut Character,
    ability_odds: u32,
    ctx: &mut CombatContext,
) -> Result<ActionReport, CombatError> {
    if !actor.abilities().is_empty() && ctx.dice.one_in(ability_odds) {
        if let Some(index) = ctx.dice.choose_index(actor.abilities().len()) {
            let ability = actor.abilities()[index];
            return ability.use_on(actor, target, ctx);
        }
    }
    actor.attack(target, ctx)
}

fn any_alive(side: &[Character]) -> bool {
    side.iter().any(Character::is_alive)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::character::Archetype;

    #[test]
    fn test_mode_selection() {
        let mut hero = Character::warrior("Her");
        let mut goblin = Character::goblin();
        let battle = Battle::new(&mut hero, &mut goblin, CombatContext::seeded(1));
        assert!(!battle.is_team_battle());

        let mut heroes = vec![Character::warrior("Her")];
        let mut orc = Character::orc();
        let battle = Battle::new(&mut heroes, &mut orc, CombatContext::seeded(1));
        assert!(battle.is_team_battle());
    }

    #[test]
    fn test_start_duel() {
        let mut hero = Character::warrior("Her");
        let mut goblin = Character::goblin();
        let outcome = Battle::new(&mut hero, &mut goblin, CombatContext::seeded(42))
            .start()
            .unwrap();

        let duel = outcome.as_duel().expect("two singles fight a duel");
        assert!(duel.winner_of(&hero, &goblin).is_alive());
        assert_eq!(outcome.log().len() as u32, duel.turns);
    }

    #[test]
    fn test_start_team_with_single_side() {
        let mut heroes = vec![Character::warrior("Arthos"), Character::mage("Lunara")];
        let mut orc = Character::orc();
        let outcome = Battle::new(&mut heroes, &mut orc, CombatContext::seeded(7))
            .start()
            .unwrap();

        let team = outcome.as_team().expect("a roster side fights a team battle");
        match team.winner {
            Side::A => assert!(!orc.is_alive()),
            Side::B => assert!(orc.is_alive() && heroes.iter().all(|h| !h.is_alive())),
        }
    }

    #[test]
    fn test_empty_roster_loses_immediately() {
        let mut empty: Vec<Character> = Vec::new();
        let mut goblin = Character::goblin();
        let outcome = Battle::new(&mut empty, &mut goblin, CombatContext::seeded(3))
            .start()
            .unwrap();

        assert_eq!(outcome.winner(), Side::B);
        assert!(outcome.log().is_empty());
    }

    #[test]
    fn test_take_action_without_abilities_attacks() {
        let actor = Character::new("Plain", 10, 5, Archetype::Warrior).unwrap();
        let mut target = Character::goblin();
        let mut ctx = CombatContext::seeded(11);
        for _ in 0..20 {
            target.set_health(50);
            let report = take_action(&actor, &mut target, 1, &mut ctx).unwrap();
            assert_eq!(report.action, crate::report::Action::Attack);
        }
    }

    #[test]
    fn test_take_action_with_certain_odds_uses_ability() {
        let mut actor = Character::warrior("Her");
        actor.add_ability(crate::ability::Ability::StrongAttack);
        let mut target = Character::orc();
        let mut ctx = CombatContext::seeded(12);

        let report = take_action(&actor, &mut target, 1, &mut ctx).unwrap();
        assert_eq!(
            report.action,
            crate::report::Action::Ability(crate::ability::Ability::StrongAttack)
        );
    }
}
