//! Session configuration: mode, human marker choice and difficulty.

use crate::error::ConfigurationError;
use crate::search::Difficulty;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Who plays whom.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum Mode {
    /// Two humans.
    Pvp,
    /// Human against computer.
    Pvc,
    /// Computer against computer.
    Cvc,
}

/// Marker requested by the human in [`Mode::Pvc`].
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum MarkerChoice {
    /// Play X (moves first).
    X,
    /// Play O.
    O,
    /// Coin flip at session start.
    Random,
}

/// Game configuration, fixed once a session starts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GameConfig {
    /// Game mode.
    pub mode: Mode,
    /// Human marker (PvC only).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub human_marker: Option<MarkerChoice>,
    /// Computer difficulty (PvC and CvC only).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub difficulty: Option<Difficulty>,
}

impl GameConfig {
    /// Two human players.
    pub fn pvp() -> Self {
        Self {
            mode: Mode::Pvp,
            human_marker: None,
            difficulty: None,
        }
    }

    /// Human against a computer of the given difficulty.
    pub fn pvc(human_marker: MarkerChoice, difficulty: Difficulty) -> Self {
        Self {
            mode: Mode::Pvc,
            human_marker: Some(human_marker),
            difficulty: Some(difficulty),
        }
    }

    /// Two computers sharing one difficulty.
    pub fn cvc(difficulty: Difficulty) -> Self {
        Self {
            mode: Mode::Cvc,
            human_marker: None,
            difficulty: Some(difficulty),
        }
    }

    /// Checks that the mode, marker and difficulty agree.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigurationError`] for a missing or contradictory field.
    #[instrument]
    pub fn validate(&self) -> Result<(), ConfigurationError> {
        match self.mode {
            Mode::Pvp => {
                if self.human_marker.is_some() {
                    return Err(ConfigurationError::new(
                        "pvp mode does not take a marker choice",
                    ));
                }
                if self.difficulty.is_some() {
                    return Err(ConfigurationError::new(
                        "pvp mode has no computer player to set a difficulty for",
                    ));
                }
            }
            Mode::Pvc => {
                if self.human_marker.is_none() {
                    return Err(ConfigurationError::new("pvc mode requires a marker choice"));
                }
                if self.difficulty.is_none() {
                    return Err(ConfigurationError::new("pvc mode requires a difficulty"));
                }
            }
            Mode::Cvc => {
                if self.human_marker.is_some() {
                    return Err(ConfigurationError::new(
                        "cvc mode has no human player to assign a marker to",
                    ));
                }
                if self.difficulty.is_none() {
                    return Err(ConfigurationError::new("cvc mode requires a difficulty"));
                }
            }
        }
        Ok(())
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::pvc(MarkerChoice::Random, Difficulty::Medium)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_constructors_are_valid() {
        assert!(GameConfig::pvp().validate().is_ok());
        assert!(GameConfig::pvc(MarkerChoice::O, Difficulty::Easy).validate().is_ok());
        assert!(GameConfig::cvc(Difficulty::Hard).validate().is_ok());
        assert!(GameConfig::default().validate().is_ok());
    }

    #[test]
    fn test_contradictory_combinations_rejected() {
        let mut config = GameConfig::pvp();
        config.difficulty = Some(Difficulty::Hard);
        assert!(config.validate().is_err());

        let mut config = GameConfig::cvc(Difficulty::Easy);
        config.human_marker = Some(MarkerChoice::X);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_missing_fields_rejected() {
        let mut config = GameConfig::pvc(MarkerChoice::X, Difficulty::Hard);
        config.difficulty = None;
        let err = config.validate().unwrap_err();
        assert!(err.message.contains("difficulty"));

        let mut config = GameConfig::cvc(Difficulty::Hard);
        config.difficulty = None;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_names_parse() {
        assert_eq!("PvC".parse::<Mode>().unwrap(), Mode::Pvc);
        assert_eq!("random".parse::<MarkerChoice>().unwrap(), MarkerChoice::Random);
        assert_eq!(Mode::Cvc.to_string(), "cvc");
    }
}
