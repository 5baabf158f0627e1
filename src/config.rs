//! Arcade configuration loaded from TOML.

use arcade_tictactoe::{Difficulty, GameConfig, MarkerChoice, Mode};
use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;
use tracing::{debug, info, instrument};

/// Settings for the arcade shell and its games.
///
/// Every field has a default, so a partial (or missing) file is fine.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
#[serde(default)]
pub struct ArcadeConfig {
    /// Pause before each computer move, in milliseconds.
    ai_move_delay_ms: u64,

    /// Pause before the game-over menu, in milliseconds.
    game_over_delay_ms: u64,

    /// Log filter used when `RUST_LOG` is not set.
    log_level: String,

    /// Seed for every random source; random when absent.
    #[serde(skip_serializing_if = "Option::is_none")]
    seed: Option<u64>,

    /// Default tic-tac-toe settings.
    tictactoe: GameConfig,

    /// Rock-paper-scissors settings.
    rps: RpsConfig,
}

/// Rock-paper-scissors settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Getters, Serialize, Deserialize)]
#[serde(default)]
pub struct RpsConfig {
    /// Points needed to win a match.
    target_score: u32,
}

impl Default for RpsConfig {
    fn default() -> Self {
        Self { target_score: 3 }
    }
}

impl Default for ArcadeConfig {
    fn default() -> Self {
        Self {
            ai_move_delay_ms: 1000,
            game_over_delay_ms: 2000,
            log_level: "warn".to_string(),
            seed: None,
            tictactoe: GameConfig::default(),
            rps: RpsConfig::default(),
        }
    }
}

impl ArcadeConfig {
    /// Loads configuration from a TOML file, or defaults if it does not exist.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        if !path.as_ref().exists() {
            debug!("No config file, using defaults");
            return Ok(Self::default());
        }
        Self::from_file(path)
    }

    /// Loads configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;
        let config = Self::from_toml(&content)?;
        info!(seed = ?config.seed, "Config loaded successfully");
        Ok(config)
    }

    /// Parses and validates configuration from TOML text.
    #[instrument(skip(content))]
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.rps.target_score == 0 {
            return Err(ConfigError::new("rps.target_score must be at least 1"));
        }
        self.tictactoe
            .validate()
            .map_err(|e| ConfigError::new(format!("Invalid [tictactoe] table: {}", e.message)))
    }

    /// Replaces the seed when `seed` is given.
    pub fn with_seed(mut self, seed: Option<u64>) -> Self {
        if seed.is_some() {
            self.seed = seed;
        }
        self
    }

    /// Sets both pacing delays; used for scripted and test runs.
    pub fn with_delays(mut self, ai_move_delay_ms: u64, game_over_delay_ms: u64) -> Self {
        self.ai_move_delay_ms = ai_move_delay_ms;
        self.game_over_delay_ms = game_over_delay_ms;
        self
    }

    /// Pause before each computer move.
    pub fn ai_move_delay(&self) -> Duration {
        Duration::from_millis(self.ai_move_delay_ms)
    }

    /// Pause before the game-over menu.
    pub fn game_over_delay(&self) -> Duration {
        Duration::from_millis(self.game_over_delay_ms)
    }
}

/// Builds a game configuration from optional overrides.
///
/// Missing values fall back to `defaults` where the mode uses them.
/// Values the mode cannot use are kept only when given explicitly, so
/// session validation reports the contradiction instead of hiding it.
#[instrument]
pub fn resolve_game_config(
    defaults: &GameConfig,
    mode: Option<Mode>,
    marker: Option<MarkerChoice>,
    difficulty: Option<Difficulty>,
) -> GameConfig {
    let mode = mode.unwrap_or(defaults.mode);
    let fallback_difficulty = || difficulty.or(defaults.difficulty).unwrap_or(Difficulty::Medium);
    match mode {
        Mode::Pvp => GameConfig {
            mode,
            human_marker: marker,
            difficulty,
        },
        Mode::Pvc => GameConfig::pvc(
            marker
                .or(defaults.human_marker)
                .unwrap_or(MarkerChoice::Random),
            fallback_difficulty(),
        ),
        Mode::Cvc => GameConfig {
            mode,
            human_marker: marker,
            difficulty: Some(fallback_difficulty()),
        },
    }
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error.
    #[track_caller]
    #[instrument(skip(message))]
    pub fn new(message: impl Into<String>) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: loc.line(),
            file: loc.file(),
        }
    }
}
