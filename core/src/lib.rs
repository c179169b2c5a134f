//! Game rules for the guessing game.
//!
//! Everything here is synchronous logic over in-memory state: drawing the
//! hidden target, parsing the player's raw text, and evaluating a guess.
//! Transitions take a [`GameState`] by value and hand back the next one, so
//! any UI binding can drive them without shared mutation.

mod game;
mod input;
mod target;

pub use game::{
    CORRECT_MESSAGE, GameState, OUT_OF_ATTEMPTS_MESSAGE, Submission, TOO_HIGH_MESSAGE,
    TOO_LOW_MESSAGE,
};
pub use input::parse_guess;
pub use target::{RandomTarget, ScriptedTargets, TargetSource};
