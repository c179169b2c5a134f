//! Shared test utilities and fixtures
//!
//! Common infrastructure for integration tests.

#![allow(dead_code)]

use std::{fs, path::PathBuf};

use tempfile::TempDir;

use guess_config::GuessConfig;
use guess_core::ScriptedTargets;
use guess_engine::App;
use guess_types::{GuessError, Outcome};

/// App with default config and a fixed sequence of targets.
pub fn scripted_app(targets: &[u8]) -> App {
    App::with_targets(None, ScriptedTargets::new(targets.iter().copied()))
}

/// App configured from TOML text.
pub fn configured_app(config: &str, targets: &[u8]) -> App {
    let config: GuessConfig = toml::from_str(config).expect("valid config");
    App::with_targets(Some(&config), ScriptedTargets::new(targets.iter().copied()))
}

/// Type `text` into the field and press Guess.
pub fn guess(app: &mut App, text: &str) -> Result<Outcome, GuessError> {
    app.set_input(text);
    app.submit_guess()
}

/// Write a config file into a fresh temp dir.
pub fn write_config(text: &str) -> (TempDir, PathBuf) {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = dir.path().join("config.toml");
    fs::write(&path, text).expect("write config");
    (dir, path)
}
