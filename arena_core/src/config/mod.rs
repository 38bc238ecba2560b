//! Configuration loading from TOML files

mod archetypes;
mod rules;

pub use archetypes::ArchetypeDefaults;
pub use rules::{AbilityRules, AttackRules, BattleRules, CombatRules};

use std::fs;
use std::path::Path;
use thiserror::Error;

/// Configuration loading error
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    IoError(#[from] std::io::Error),
    #[error("Failed to parse TOML: {0}")]
    ParseError(#[from] toml::de::Error),
    #[error("Configuration validation error: {0}")]
    ValidationError(String),
}

/// Load a TOML file and deserialize it
pub fn load_toml<T: serde::de::DeserializeOwned>(path: &Path) -> Result<T, ConfigError> {
    let content = fs::read_to_string(path)?;
    let config: T = toml::from_str(&content)?;
    Ok(config)
}

/// Load a TOML string and deserialize it
pub fn parse_toml<T: serde::de::DeserializeOwned>(content: &str) -> Result<T, ConfigError> {
    let config: T = toml::from_str(content)?;
    Ok(config)
}

/// Load and validate combat rules from a TOML file
pub fn load_rules(path: &Path) -> Result<CombatRules, ConfigError> {
    let rules: CombatRules = load_toml(path)?;
    rules.validate()?;
    Ok(rules)
}

/// Parse and validate combat rules from a TOML string
pub fn parse_rules(content: &str) -> Result<CombatRules, ConfigError> {
    let rules: CombatRules = parse_toml(content)?;
    rules.validate()?;
    Ok(rules)
}

/// Get the bundled combat rules
pub fn default_rules() -> CombatRules {
    let toml = include_str!("../../config/rules.toml");
    parse_rules(toml).unwrap_or_else(|err| {
        tracing::warn!("bundled rules.toml rejected, using built-in defaults: {}", err);
        CombatRules::default()
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_bundled_rules_match_defaults() {
        assert_eq!(default_rules(), CombatRules::default());
    }

    #[test]
    fn test_load_rules_from_file() {
        let path = std::env::temp_dir().join(format!("arena_rules_{}.toml", std::process::id()));
        {
            let mut file = fs::File::create(&path).unwrap();
            writeln!(file, "[battle]\nmax_turns = 25").unwrap();
        }

        let rules = load_rules(&path).unwrap();
        assert_eq!(rules.battle.max_turns, 25);
        fs::remove_file(&path).unwrap();
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let err = load_rules(Path::new("/definitely/not/here/rules.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::IoError(_)));
    }

    #[test]
    fn test_bad_toml_is_parse_error() {
        let err = parse_rules("[battle\nmax_turns = ").unwrap_err();
        assert!(matches!(err, ConfigError::ParseError(_)));
    }
}
