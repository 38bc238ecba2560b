//! Team battle - Rosters fighting in full-side rounds

use super::{any_alive, take_action, CombatContext, Side, TeamOutcome};
use crate::character::Character;
use crate::error::CombatError;
use crate::report::ActionReport;

/// Fight roster `a` against roster `b` until one side has no living members
///
/// Each round every living member of `a` acts in list order against a random
/// living member of `b`, then `b` answers the same way. Side A always acts
/// first within a round. Fails with `TurnLimitExceeded` when
/// `rules.battle.max_rounds` rounds pass without a winner.
pub fn team_battle(
    a: &mut [Character],
    b: &mut [Character],
    ctx: &mut CombatContext,
) -> Result<TeamOutcome, CombatError> {
    tracing::info!("Team battle: {} vs {} combatants", a.len(), b.len());

    let limit = ctx.rules.battle.max_rounds;
    let mut log = Vec::new();
    let mut rounds: u32 = 0;

    while any_alive(a) && any_alive(b) {
        if rounds >= limit {
            tracing::warn!("Team battle hit the {} round limit", limit);
            return Err(CombatError::TurnLimitExceeded { limit });
        }
        rounds += 1;
        tracing::debug!("Round {}", rounds);

        side_acts(a, b, ctx, &mut log)?;
        side_acts(b, a, ctx, &mut log)?;
    }

    let (winner, winners) = if any_alive(a) { (Side::A, &*a) } else { (Side::B, &*b) };
    let survivors: Vec<String> = winners
        .iter()
        .filter(|c| c.is_alive())
        .map(|c| c.name().to_string())
        .collect();
    tracing::info!(
        "Side {} wins after {} rounds; survivors: {}",
        winner,
        rounds,
        survivors.join(", ")
    );

    Ok(TeamOutcome {
        winner,
        rounds,
        survivors,
        log,
    })
}

/// Every living attacker takes one action against a random living defender
fn side_acts(
    attackers: &[Character],
    defenders: &mut [Character],
    ctx: &mut CombatContext,
    log: &mut Vec<ActionReport>,
) -> Result<(), CombatError> {
    let odds = ctx.rules.battle.team_ability_odds;
    let acting: Vec<usize> = living(attackers);

    for attacker in acting {
        let targets = living(defenders);
        let Some(pick) = ctx.dice.choose_index(targets.len()) else {
            break;
        };
        let report = take_action(&attackers[attacker], &mut defenders[targets[pick]], odds, ctx)?;
        log.push(report);
    }
    Ok(())
}

fn living(side: &[Character]) -> Vec<usize> {
    side.iter()
        .enumerate()
        .filter(|(_, c)| c.is_alive())
        .map(|(i, _)| i)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ability::Ability;
    use crate::character::Archetype;
    use crate::config::{ArchetypeDefaults, CombatRules};
    use crate::dice::Dice;
    use crate::item::Weapon;

    fn heroes() -> Vec<Character> {
        let mut warrior = Character::warrior("Arthos");
        warrior.equip_weapon(Weapon::new("Long Sword", 10));
        warrior.add_ability(Ability::StrongAttack);
        let mut mage = Character::mage("Lunara");
        mage.equip_weapon(Weapon::new("Magic Staff", 6));
        mage.add_ability(Ability::Fireball);
        vec![warrior, mage, Character::archer("Faelan")]
    }

    fn enemies() -> Vec<Character> {
        let uruk = ArchetypeDefaults::default().named_orc("Uruk").unwrap();
        vec![Character::goblin(), uruk]
    }

    fn assert_consistent(outcome: &TeamOutcome, a: &[Character], b: &[Character]) {
        let (winners, losers) = match outcome.winner {
            Side::A => (a, b),
            Side::B => (b, a),
        };
        assert!(winners.iter().any(Character::is_alive));
        assert!(losers.iter().all(|c| !c.is_alive()));
        assert_eq!(
            outcome.survivors.len(),
            winners.iter().filter(|c| c.is_alive()).count()
        );
    }

    #[test]
    fn test_winner_side_is_consistent() {
        for seed in 0..20 {
            let mut a = heroes();
            let mut b = enemies();
            let outcome = team_battle(&mut a, &mut b, &mut CombatContext::seeded(seed)).unwrap();
            assert_consistent(&outcome, &a, &b);
            assert!(outcome.rounds >= 1);
        }
    }

    #[test]
    fn test_side_a_acts_first_each_round() {
        let mut a = heroes();
        let mut b = enemies();
        let outcome = team_battle(&mut a, &mut b, &mut CombatContext::seeded(3)).unwrap();

        let first_three: Vec<&str> = outcome.log.iter().take(3).map(|r| r.actor.as_str()).collect();
        assert_eq!(first_three, vec!["Arthos", "Lunara", "Faelan"]);
    }

    #[test]
    fn test_only_living_targets_are_hit() {
        let mut a = heroes();
        let mut b = enemies();
        b[0].set_health(0);
        let outcome = team_battle(&mut a, &mut b, &mut CombatContext::seeded(8)).unwrap();

        assert!(outcome
            .log
            .iter()
            .all(|r| r.target != "Goblin" && r.actor != "Goblin"));
    }

    #[test]
    fn test_all_dead_side_loses_without_actions() {
        let mut a = heroes();
        let mut b = enemies();
        for enemy in b.iter_mut() {
            enemy.set_health(0);
        }
        let outcome = team_battle(&mut a, &mut b, &mut CombatContext::seeded(1)).unwrap();

        assert_eq!(outcome.winner, Side::A);
        assert_eq!(outcome.rounds, 0);
        assert!(outcome.log.is_empty());
        assert_eq!(outcome.survivors.len(), 3);
    }

    #[test]
    fn test_side_stops_once_opponents_fall() {
        // One hit from each giant kills a goblin; the third giant has nobody left
        let giant = || Character::new("Giant", 500, 1000, Archetype::Warrior).unwrap();
        let mut a = vec![giant(), giant(), giant()];
        let mut b = vec![Character::goblin(), Character::goblin()];
        let outcome = team_battle(&mut a, &mut b, &mut CombatContext::seeded(4)).unwrap();

        assert_eq!(outcome.winner, Side::A);
        assert_eq!(outcome.rounds, 1);
        assert_eq!(outcome.log.len(), 2);
    }

    #[test]
    fn test_round_limit() {
        let blind = Archetype::Archer { precision: 0 };
        let mut a = vec![Character::new("A", 10, 1, blind).unwrap()];
        let mut b = vec![Character::new("B", 10, 1, blind).unwrap()];
        let mut rules = CombatRules::default();
        rules.battle.max_rounds = 5;
        let mut ctx = CombatContext::new(Dice::seeded(1), rules);

        let err = team_battle(&mut a, &mut b, &mut ctx).unwrap_err();
        assert_eq!(err, CombatError::TurnLimitExceeded { limit: 5 });
    }

    #[test]
    fn test_deterministic_replay() {
        let run = |seed| {
            let mut a = heroes();
            let mut b = enemies();
            team_battle(&mut a, &mut b, &mut CombatContext::seeded(seed)).unwrap()
        };
        assert_eq!(run(77), run(77));
    }
}
