//! The single game aggregate and its transitions.

use std::cmp::Ordering;

use tracing::debug;

use guess_types::{GameStatus, GuessError, GuessRecord, Notice, Outcome, Rules};

use crate::input::parse_guess;

pub const TOO_HIGH_MESSAGE: &str = "Your guess is too high!";
pub const TOO_LOW_MESSAGE: &str = "Your guess is too low!";
pub const CORRECT_MESSAGE: &str = "You won! Your number matches!";
pub const OUT_OF_ATTEMPTS_MESSAGE: &str = "Out of attempts! Start a new game to play again.";

const TRY_AGAIN: &str = "Try again!";
const CONGRATULATIONS: &str = "Congratulations!";

/// All state for one game, from the draw of a target until the next reset.
///
/// `attempts` and `history` are tracked separately: under capped rules an
/// attempt is spent before the guess is parsed, so rejected text still
/// counts against the cap while only validated guesses are recorded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    target: u8,
    raw_input: String,
    attempts: u32,
    message: String,
    history: Vec<GuessRecord>,
    solved: bool,
}

/// Result of submitting the current field text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Submission {
    pub state: GameState,
    pub result: Result<Outcome, GuessError>,
    /// Side effect for the notification layer. Never fed back into state.
    pub notice: Notice,
}

impl GameState {
    #[must_use]
    pub fn new(target: u8) -> Self {
        Self {
            target,
            raw_input: String::new(),
            attempts: 0,
            message: String::new(),
            history: Vec::new(),
            solved: false,
        }
    }

    /// Start over with a freshly drawn target. Every field is replaced at once.
    #[must_use]
    pub fn reset(target: u8) -> Self {
        Self::new(target)
    }

    /// Replace the raw field text verbatim. No validation happens here.
    #[must_use]
    pub fn with_input(mut self, text: impl Into<String>) -> Self {
        self.raw_input = text.into();
        self
    }

    /// Evaluate the current field text against the target.
    #[must_use]
    pub fn submit(mut self, rules: Rules) -> Submission {
        if let Some(max) = rules.max_attempts() {
            if self.attempts >= u32::from(max) {
                // The field is left as typed on this path.
                self.message = OUT_OF_ATTEMPTS_MESSAGE.to_string();
                return Self::rejected(self, GuessError::AttemptsExhausted { max });
            }
            self.attempts += 1;
        }

        let value = match parse_guess(&self.raw_input) {
            Ok(value) => value,
            Err(err) => {
                self.message.clear();
                self.raw_input.clear();
                return Self::rejected(self, err);
            }
        };

        if rules.max_attempts().is_none() {
            self.attempts = self.attempts.saturating_add(1);
        }

        let (outcome, message, notice) = match value.cmp(&self.target) {
            Ordering::Greater => (Outcome::TooHigh, TOO_HIGH_MESSAGE, Notice::info(TRY_AGAIN)),
            Ordering::Less => (Outcome::TooLow, TOO_LOW_MESSAGE, Notice::info(TRY_AGAIN)),
            Ordering::Equal => (
                Outcome::Correct,
                CORRECT_MESSAGE,
                Notice::success(CONGRATULATIONS),
            ),
        };

        if rules.keeps_history() {
            let typed = std::mem::take(&mut self.raw_input);
            self.history.push(GuessRecord::new(typed, outcome));
        }
        self.raw_input.clear();
        self.message = message.to_string();
        self.solved |= outcome.is_correct();
        debug!(attempts = self.attempts, ?outcome, "guess evaluated");

        Submission {
            state: self,
            result: Ok(outcome),
            notice,
        }
    }

    fn rejected(state: Self, err: GuessError) -> Submission {
        debug!(attempts = state.attempts, error = ?err, "guess rejected");
        Submission {
            state,
            result: Err(err),
            notice: Notice::from(err),
        }
    }

    /// Terminal condition derived from the counters. A win takes precedence.
    #[must_use]
    pub fn status(&self, rules: Rules) -> GameStatus {
        if self.solved {
            return GameStatus::Won;
        }
        match rules.max_attempts() {
            Some(max) if self.attempts >= u32::from(max) => GameStatus::AttemptsExhausted,
            _ => GameStatus::InProgress,
        }
    }

    /// Attempts left under capped rules, `None` when uncapped.
    #[must_use]
    pub fn attempts_remaining(&self, rules: Rules) -> Option<u32> {
        rules
            .max_attempts()
            .map(|max| u32::from(max).saturating_sub(self.attempts))
    }

    /// The hidden number. Never rendered; exposed for logging and tests.
    #[must_use]
    pub fn target(&self) -> u8 {
        self.target
    }

    #[must_use]
    pub fn raw_input(&self) -> &str {
        &self.raw_input
    }

    #[must_use]
    pub fn attempts(&self) -> u32 {
        self.attempts
    }

    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    #[must_use]
    pub fn history(&self) -> &[GuessRecord] {
        &self.history
    }
}
