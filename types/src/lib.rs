//! Core domain types for the guessing game.
//!
//! This crate contains pure domain types with no IO, no async, and minimal dependencies.
//! Everything here can be used from any layer of the application.

#![allow(clippy::missing_errors_doc)] // Result-returning functions are self-explanatory

pub mod ui;

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Smallest value a player may guess (inclusive).
pub const GUESS_MIN: u8 = 1;
/// Largest value a player may guess (inclusive).
pub const GUESS_MAX: u8 = 100;
/// Attempt cap used by the capped variant unless configured otherwise.
pub const DEFAULT_MAX_ATTEMPTS: u8 = 8;

// ============================================================================
// Outcomes and history
// ============================================================================

/// Classification of a validated guess relative to the hidden target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    TooHigh,
    TooLow,
    Correct,
}

impl Outcome {
    /// Human label shown in the history panel.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::TooHigh => "Too High",
            Self::TooLow => "Too Low",
            Self::Correct => "Correct!",
        }
    }

    #[must_use]
    pub const fn is_correct(self) -> bool {
        matches!(self, Self::Correct)
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One validated guess as the player typed it. Immutable once recorded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GuessRecord {
    value: String,
    outcome: Outcome,
}

impl GuessRecord {
    #[must_use]
    pub fn new(value: impl Into<String>, outcome: Outcome) -> Self {
        Self {
            value: value.into(),
            outcome,
        }
    }

    #[must_use]
    pub fn value(&self) -> &str {
        &self.value
    }

    #[must_use]
    pub fn outcome(&self) -> Outcome {
        self.outcome
    }
}

// ============================================================================
// Errors
// ============================================================================

/// Rejection of a submitted guess.
///
/// None of these are fatal: the submit handler recovers from each one and
/// the game stays in progress. The `Display` text is what the player sees
/// in the error notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum GuessError {
    #[error("Please enter a valid number!")]
    NotANumber,
    #[error("Please enter a number between {GUESS_MIN} and {GUESS_MAX}!")]
    OutOfRange,
    #[error("You're out of attempts!")]
    AttemptsExhausted { max: u8 },
}

// ============================================================================
// Rules and status
// ============================================================================

/// Which flavor of the game is being played.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rules {
    /// Unlimited guesses, no per-guess history.
    Uncapped,
    /// At most `max_attempts` submissions; each validated guess is recorded.
    Capped { max_attempts: u8 },
}

impl Default for Rules {
    fn default() -> Self {
        Self::Capped {
            max_attempts: DEFAULT_MAX_ATTEMPTS,
        }
    }
}

impl Rules {
    /// Build capped rules, clamping a zero cap to one attempt.
    #[must_use]
    pub fn capped(max_attempts: u8) -> Self {
        Self::Capped {
            max_attempts: max_attempts.max(1),
        }
    }

    #[must_use]
    pub const fn max_attempts(self) -> Option<u8> {
        match self {
            Self::Uncapped => None,
            Self::Capped { max_attempts } => Some(max_attempts),
        }
    }

    #[must_use]
    pub const fn keeps_history(self) -> bool {
        matches!(self, Self::Capped { .. })
    }
}

/// Terminal conditions layered over an in-progress game.
///
/// The game never leaves play on its own; only a reset starts over.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    InProgress,
    Won,
    AttemptsExhausted,
}

// ============================================================================
// Notifications
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NoticeKind {
    Error,
    Info,
    Success,
}

/// A fire-and-forget message for the notification layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    kind: NoticeKind,
    text: String,
}

impl Notice {
    #[must_use]
    pub fn new(kind: NoticeKind, text: impl Into<String>) -> Self {
        Self {
            kind,
            text: text.into(),
        }
    }

    #[must_use]
    pub fn error(text: impl Into<String>) -> Self {
        Self::new(NoticeKind::Error, text)
    }

    #[must_use]
    pub fn info(text: impl Into<String>) -> Self {
        Self::new(NoticeKind::Info, text)
    }

    #[must_use]
    pub fn success(text: impl Into<String>) -> Self {
        Self::new(NoticeKind::Success, text)
    }

    #[must_use]
    pub fn kind(&self) -> NoticeKind {
        self.kind
    }

    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }
}

impl From<GuessError> for Notice {
    fn from(err: GuessError) -> Self {
        Self::error(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn outcome_labels() {
        assert_eq!(Outcome::TooHigh.label(), "Too High");
        assert_eq!(Outcome::TooLow.label(), "Too Low");
        assert_eq!(Outcome::Correct.label(), "Correct!");
        assert_eq!(Outcome::Correct.to_string(), "Correct!");
    }

    #[test]
    fn guess_error_messages() {
        assert_eq!(
            GuessError::NotANumber.to_string(),
            "Please enter a valid number!"
        );
        assert_eq!(
            GuessError::OutOfRange.to_string(),
            "Please enter a number between 1 and 100!"
        );
        assert_eq!(
            GuessError::AttemptsExhausted { max: 8 }.to_string(),
            "You're out of attempts!"
        );
    }

    #[test]
    fn errors_become_error_notices() {
        let notice = Notice::from(GuessError::OutOfRange);
        assert_eq!(notice.kind(), NoticeKind::Error);
        assert_eq!(notice.text(), "Please enter a number between 1 and 100!");
    }

    #[test]
    fn default_rules_cap_at_eight() {
        assert_eq!(Rules::default().max_attempts(), Some(8));
        assert!(Rules::default().keeps_history());
        assert_eq!(Rules::Uncapped.max_attempts(), None);
        assert!(!Rules::Uncapped.keeps_history());
    }

    #[test]
    fn zero_cap_is_clamped() {
        assert_eq!(Rules::capped(0).max_attempts(), Some(1));
        assert_eq!(Rules::capped(3).max_attempts(), Some(3));
    }
}
