//! Duel - Two characters trading strictly alternating turns

use super::{take_action, CombatContext, DuelOutcome, Side};
use crate::character::Character;
use crate::error::CombatError;

/// Fight `p1` against `p2` until one of them falls
///
/// `p1` acts on even turns and `p2` on odd turns, starting at turn 0. Each
/// actor with abilities uses a random one when the duel ability roll
/// succeeds, otherwise it attacks. Fails with `TurnLimitExceeded` when
/// `rules.battle.max_turns` turns pass without a winner.
pub fn duel(
    p1: &mut Character,
    p2: &mut Character,
    ctx: &mut CombatContext,
) -> Result<DuelOutcome, CombatError> {
    tracing::info!("Duel: {} vs {}", p1.name(), p2.name());

    let odds = ctx.rules.battle.duel_ability_odds;
    let limit = ctx.rules.battle.max_turns;
    let mut log = Vec::new();
    let mut turn: u32 = 0;

    while p1.is_alive() && p2.is_alive() {
        if turn >= limit {
            tracing::warn!(
                "Duel between {} and {} hit the {} turn limit",
                p1.name(),
                p2.name(),
                limit
            );
            return Err(CombatError::TurnLimitExceeded { limit });
        }

        let report = if turn % 2 == 0 {
            take_action(p1, p2, odds, ctx)?
        } else {
            take_action(p2, p1, odds, ctx)?
        };
        log.push(report);
        turn += 1;
    }

    let (winner, winner_name) = if p1.is_alive() {
        (Side::A, p1.name().to_string())
    } else {
        (Side::B, p2.name().to_string())
    };
    tracing::info!("Duel won by {} after {} turns", winner_name, turn);

    Ok(DuelOutcome {
        winner,
        winner_name,
        turns: turn,
        log,
    })
}
