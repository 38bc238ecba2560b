//! Arena demo - Runs the sample duel and team battle
//!
//! Usage: `arena_demo [RULES.toml] [--json]`
//!
//! - RULES.toml: optional combat rules file (defaults to the bundled rules)
//! - --json: print each battle outcome as JSON instead of report lines
//!
//! Set `RUST_LOG=debug` to trace every resolved action.

mod scenario;

use anyhow::{Context, Result};
use arena_core::config::load_rules;
use arena_core::{default_rules, Battle, BattleOutcome, CombatContext, CombatRules, Dice};
use std::path::Path;

/// Every run replays the same battles
const DEMO_SEED: u64 = 42;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let json = args.iter().any(|a| a == "--json");
    let rules = match args.iter().find(|a| !a.starts_with("--")) {
        Some(path) => {
            tracing::info!("Loading rules from {}", path);
            load_rules(Path::new(path))
                .with_context(|| format!("Failed to load rules from '{}'", path))?
        }
        None => default_rules(),
    };

    run_demo(rules, json)
}

fn run_demo(rules: CombatRules, json: bool) -> Result<()> {
    let mut cast = scenario::build_cast(&rules.archetypes)?;

    println!("=== DEMO: Duel Warrior vs Goblin ===");
    println!("{}", cast.warrior);
    println!("{}", cast.goblin);
    let ctx = CombatContext::new(Dice::seeded(DEMO_SEED), rules.clone());
    let outcome = Battle::new(&mut cast.warrior, &mut cast.goblin, ctx)
        .start()
        .context("Duel aborted")?;
    print_outcome(&outcome, json)?;
    if let BattleOutcome::Duel(duel) = &outcome {
        println!("Winner: {}", duel.winner_name);
    }

    if cast.warrior.is_alive() {
        if let Some(report) = cast.warrior.drink_first_potion() {
            println!("{}", report);
        }
    }

    println!();
    println!("=== DEMO: Team battle (Heroes vs Enemies) ===");
    let mut heroes = vec![cast.warrior, cast.mage, cast.archer];
    let mut enemies = scenario::build_enemies(&rules.archetypes)?;
    let ctx = CombatContext::new(Dice::seeded(DEMO_SEED + 1), rules);
    let outcome = Battle::new(&mut heroes, &mut enemies, ctx)
        .start()
        .context("Team battle aborted")?;
    print_outcome(&outcome, json)?;
    println!("Winning team: {}", outcome.winner());

    for hero in &heroes {
        println!("  {}", hero);
    }
    for enemy in &enemies {
        println!("  {}", enemy);
    }

    Ok(())
}

fn print_outcome(outcome: &BattleOutcome, json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(outcome)?);
    } else {
        for report in outcome.log() {
            println!("{}", report);
        }
    }
    Ok(())
}
