//! Configuration for the guessing game.
//!
//! Read from `~/.guess/config.toml` (or the file named by `GUESS_CONFIG`).
//! Every section and key is optional; a missing file means defaults.

use std::{
    env, fs,
    path::{Path, PathBuf},
    time::Duration,
};

use serde::Deserialize;
use thiserror::Error;

use guess_types::{
    DEFAULT_MAX_ATTEMPTS, Rules,
    ui::{Theme, ToastPosition, UiOptions},
};

/// Environment variable that overrides the config file location.
pub const CONFIG_PATH_ENV: &str = "GUESS_CONFIG";

const DEFAULT_TOAST_DURATION_MS: u64 = 5000;
const DEFAULT_MAX_VISIBLE: usize = 5;
const DEFAULT_DRAG_PERCENT: u8 = 80;

#[derive(Debug, Default, Deserialize)]
pub struct GuessConfig {
    pub game: Option<GameConfig>,
    pub notifications: Option<NotificationsConfig>,
    pub app: Option<AppConfig>,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config at {}: {source}", path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failed to parse config at {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },
}

impl ConfigError {
    pub fn path(&self) -> &PathBuf {
        match self {
            ConfigError::Read { path, .. } | ConfigError::Parse { path, .. } => path,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum GameMode {
    /// Limited attempts with a guess history panel.
    #[default]
    Capped,
    /// Unlimited attempts, no history.
    Uncapped,
}

#[derive(Debug, Default, Deserialize)]
pub struct GameConfig {
    #[serde(default)]
    pub mode: GameMode,
    /// Only used in capped mode. Default: 8. Zero is treated as one.
    pub max_attempts: Option<u8>,
}

#[derive(Debug, Default, Deserialize)]
pub struct NotificationsConfig {
    /// Auto-dismiss delay. Default: 5000.
    pub duration_ms: Option<u64>,
    #[serde(default)]
    pub position: ToastPosition,
    /// Toasts rendered at once. Default: 5.
    pub max_visible: Option<usize>,
    /// Horizontal drag, in percent of toast width, that dismisses it. Default: 80.
    pub drag_percent: Option<u8>,
}

#[derive(Debug, Default, Deserialize)]
pub struct AppConfig {
    /// Use ASCII-only glyphs for icons and borders.
    #[serde(default)]
    pub ascii_only: bool,
    /// Enable a high-contrast color palette.
    #[serde(default)]
    pub high_contrast: bool,
    /// Disable the toast entrance animation.
    #[serde(default)]
    pub reduced_motion: bool,
    #[serde(default)]
    pub theme: Theme,
}

impl GuessConfig {
    /// Load the config file if one exists.
    pub fn load() -> Result<Option<Self>, ConfigError> {
        let Some(path) = config_path() else {
            return Ok(None);
        };
        if !path.exists() {
            return Ok(None);
        }
        Self::load_from(&path).map(Some)
    }

    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let content = match fs::read_to_string(path) {
            Ok(content) => content,
            Err(err) => {
                tracing::warn!("Failed to read config at {:?}: {}", path, err);
                return Err(ConfigError::Read {
                    path: path.to_path_buf(),
                    source: err,
                });
            }
        };

        match toml::from_str(&content) {
            Ok(config) => Ok(config),
            Err(err) => {
                tracing::warn!("Failed to parse config at {:?}: {}", path, err);
                Err(ConfigError::Parse {
                    path: path.to_path_buf(),
                    source: err,
                })
            }
        }
    }

    #[must_use]
    pub fn path() -> Option<PathBuf> {
        config_path()
    }

    #[must_use]
    pub fn rules(&self) -> Rules {
        let game = self.game.as_ref();
        match game.map(|g| g.mode).unwrap_or_default() {
            GameMode::Uncapped => Rules::Uncapped,
            GameMode::Capped => Rules::capped(
                game.and_then(|g| g.max_attempts)
                    .unwrap_or(DEFAULT_MAX_ATTEMPTS),
            ),
        }
    }

    #[must_use]
    pub fn ui_options(&self) -> UiOptions {
        self.app.as_ref().map_or_else(UiOptions::default, |app| UiOptions {
            ascii_only: app.ascii_only,
            high_contrast: app.high_contrast,
            reduced_motion: app.reduced_motion,
            theme: app.theme,
        })
    }

    #[must_use]
    pub fn toast_duration(&self) -> Duration {
        let ms = self
            .notifications
            .as_ref()
            .and_then(|n| n.duration_ms)
            .unwrap_or(DEFAULT_TOAST_DURATION_MS);
        Duration::from_millis(ms)
    }

    #[must_use]
    pub fn toast_position(&self) -> ToastPosition {
        self.notifications
            .as_ref()
            .map(|n| n.position)
            .unwrap_or_default()
    }

    #[must_use]
    pub fn toast_max_visible(&self) -> usize {
        self.notifications
            .as_ref()
            .and_then(|n| n.max_visible)
            .unwrap_or(DEFAULT_MAX_VISIBLE)
            .max(1)
    }

    #[must_use]
    pub fn toast_drag_percent(&self) -> u8 {
        self.notifications
            .as_ref()
            .and_then(|n| n.drag_percent)
            .unwrap_or(DEFAULT_DRAG_PERCENT)
            .clamp(1, 100)
    }
}

#[must_use]
pub fn config_path() -> Option<PathBuf> {
    if let Ok(custom) = env::var(CONFIG_PATH_ENV)
        && !custom.trim().is_empty()
    {
        return Some(PathBuf::from(custom));
    }
    dirs::home_dir().map(|home| home.join(".guess").join("config.toml"))
}
