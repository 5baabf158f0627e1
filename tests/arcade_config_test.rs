//! Tests for loading arcade settings from TOML files.

use std::fs;
use tempfile::TempDir;

use arcade_tictactoe::{Difficulty, GameConfig, MarkerChoice};
use terminal_arcade::ArcadeConfig;

#[test]
fn test_missing_file_gives_defaults() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let config = ArcadeConfig::load(dir.path().join("arcade.toml")).expect("Load failed");
    assert_eq!(config, ArcadeConfig::default());
    assert_eq!(*config.ai_move_delay_ms(), 1000);
    assert_eq!(config.log_level(), "warn");
    assert_eq!(
        config.tictactoe(),
        &GameConfig::pvc(MarkerChoice::Random, Difficulty::Medium)
    );
}

#[test]
fn test_file_overrides_defaults() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let path = dir.path().join("arcade.toml");
    fs::write(
        &path,
        r#"
log_level = "debug"
game_over_delay_ms = 250

[tictactoe]
mode = "pvc"
human_marker = "o"
difficulty = "hard"

[rps]
target_score = 5
"#,
    )
    .expect("Failed to write TOML");

    let config = ArcadeConfig::load(&path).expect("Load failed");
    assert_eq!(config.log_level(), "debug");
    assert_eq!(*config.game_over_delay_ms(), 250);
    assert_eq!(*config.ai_move_delay_ms(), 1000);
    assert_eq!(
        config.tictactoe(),
        &GameConfig::pvc(MarkerChoice::O, Difficulty::Hard)
    );
    assert_eq!(*config.rps().target_score(), 5);
}

#[test]
fn test_invalid_file_is_an_error() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let path = dir.path().join("arcade.toml");
    fs::write(&path, "[tictactoe]\nmode = \"cvc\"\nhuman_marker = \"x\"\n")
        .expect("Failed to write TOML");

    let err = ArcadeConfig::load(&path).unwrap_err();
    assert!(err.to_string().starts_with("Config error:"));
}

#[test]
fn test_settings_round_trip_through_toml() {
    let config = ArcadeConfig::default().with_seed(Some(99)).with_delays(0, 0);
    let text = toml::to_string(&config).expect("Serialize failed");
    let parsed = ArcadeConfig::from_toml(&text).expect("Parse failed");
    assert_eq!(parsed, config);
}

#[test]
fn test_with_seed_none_keeps_file_seed() {
    let config = ArcadeConfig::from_toml("seed = 7").expect("Parse failed");
    assert_eq!(*config.clone().with_seed(None).seed(), Some(7));
    assert_eq!(*config.with_seed(Some(8)).seed(), Some(8));
}
