use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::ai::{Strategy, VerticalScan};
use crate::game::Side;

/// Deepest difficulty level offered to players.
pub const MAX_DEPTH: usize = 5;

/// Errors that can occur when loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The file exists but couldn't be read.
    #[error("failed to read config file {path}: {source}")]
    FileRead {
        /// Offending file.
        path: PathBuf,
        /// Underlying I/O error.
        source: std::io::Error,
    },

    /// The file isn't valid TOML for [`GameConfig`].
    #[error("failed to parse TOML: {0}")]
    TomlParse(#[from] toml::de::Error),

    /// A value is outside its allowed range.
    #[error("config validation error: {0}")]
    Validation(String),
}

/// Who moves first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum FirstTurn {
    /// Coin flip at the start of each game.
    #[default]
    Random,
    /// The human opens.
    Player,
    /// The computer opens.
    Ai,
}

impl FirstTurn {
    /// Resolve to a side, flipping a coin for `Random`.
    pub fn resolve<R: rand::Rng>(self, rng: &mut R) -> Side {
        match self {
            FirstTurn::Player => Side::Player,
            FirstTurn::Ai => Side::Ai,
            FirstTurn::Random => {
                if rng.gen_bool(0.5) {
                    Side::Player
                } else {
                    Side::Ai
                }
            }
        }
    }
}

/// Game configuration, loadable from TOML.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Search depth in plies, the difficulty level.
    pub depth: usize,
    /// How the computer picks its moves.
    pub strategy: Strategy,
    /// Who opens the game.
    pub first_turn: FirstTurn,
    /// Vertical window mode of the static evaluation.
    pub vertical_scan: VerticalScan,
    /// Pause before the computer's move, in milliseconds.
    pub ai_delay_ms: u64,
}

impl Default for GameConfig {
    fn default() -> Self {
        GameConfig {
            depth: MAX_DEPTH,
            strategy: Strategy::default(),
            first_turn: FirstTurn::default(),
            vertical_scan: VerticalScan::default(),
            ai_delay_ms: 500,
        }
    }
}

impl GameConfig {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;
        let config: GameConfig = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file, falling back to defaults if the file
    /// does not exist.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::load(path)
        } else {
            log::warn!("config file '{}' not found, using defaults", path.display());
            Ok(Self::default())
        }
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(1..=MAX_DEPTH).contains(&self.depth) {
            return Err(ConfigError::Validation(format!(
                "depth must be in [1, {MAX_DEPTH}]"
            )));
        }
        if self.ai_delay_ms > 10_000 {
            return Err(ConfigError::Validation(
                "ai_delay_ms must be <= 10000".into(),
            ));
        }
        Ok(())
    }

    /// Generate a TOML string with all default values.
    pub fn default_toml() -> String {
        toml::to_string_pretty(&GameConfig::default()).expect("default config serializes")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::io::Write;

    #[test]
    fn test_default_config_is_valid() {
        let config = GameConfig::default();
        config.validate().expect("default config should be valid");
        assert_eq!(config.depth, 5);
        assert_eq!(config.ai_delay_ms, 500);
    }

    #[test]
    fn test_partial_toml_uses_defaults() {
        let config: GameConfig = toml::from_str("depth = 2\nstrategy = \"greedy\"").unwrap();
        assert_eq!(config.depth, 2);
        assert_eq!(config.strategy, Strategy::Greedy);
        assert_eq!(config.first_turn, FirstTurn::Random);
        assert_eq!(config.vertical_scan, VerticalScan::Sliding);
    }

    #[test]
    fn test_empty_toml_uses_all_defaults() {
        let config: GameConfig = toml::from_str("").unwrap();
        assert_eq!(config, GameConfig::default());
    }

    #[test]
    fn test_validation_rejects_depth_out_of_range() {
        let mut config = GameConfig::default();
        config.depth = 0;
        assert!(config.validate().is_err());
        config.depth = MAX_DEPTH + 1;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validation_rejects_long_delay() {
        let mut config = GameConfig::default();
        config.ai_delay_ms = 60_000;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_load_or_default_missing_file() {
        let config = GameConfig::load_or_default(Path::new("nonexistent_config.toml")).unwrap();
        assert_eq!(config, GameConfig::default());
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("connect4.toml");
        let mut f = std::fs::File::create(&path).unwrap();
        writeln!(
            f,
            r#"
depth = 3
first_turn = "ai"
vertical_scan = "fixed"
"#
        )
        .unwrap();

        let config = GameConfig::load(&path).unwrap();
        assert_eq!(config.depth, 3);
        assert_eq!(config.first_turn, FirstTurn::Ai);
        assert_eq!(config.vertical_scan, VerticalScan::Fixed);
        assert_eq!(config.strategy, Strategy::Minimax);
    }

    #[test]
    fn test_load_rejects_invalid_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.toml");
        std::fs::write(&path, "depth = 9").unwrap();
        assert!(matches!(
            GameConfig::load(&path),
            Err(ConfigError::Validation(_))
        ));

        std::fs::write(&path, "depth = \"deep\"").unwrap();
        assert!(matches!(GameConfig::load(&path), Err(ConfigError::TomlParse(_))));
    }

    #[test]
    fn test_default_toml_roundtrips() {
        let toml_str = GameConfig::default_toml();
        let config: GameConfig = toml::from_str(&toml_str).unwrap();
        assert_eq!(config, GameConfig::default());
    }

    #[test]
    fn test_first_turn_resolve() {
        let mut rng = StdRng::seed_from_u64(7);
        assert_eq!(FirstTurn::Player.resolve(&mut rng), Side::Player);
        assert_eq!(FirstTurn::Ai.resolve(&mut rng), Side::Ai);
        let sides: Vec<Side> = (0..64).map(|_| FirstTurn::Random.resolve(&mut rng)).collect();
        assert!(sides.contains(&Side::Player));
        assert!(sides.contains(&Side::Ai));
    }
}
