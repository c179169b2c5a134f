//! Hidden target selection.

use std::collections::VecDeque;

use guess_types::{GUESS_MAX, GUESS_MIN};

/// Produces the hidden number at game start and on every reset.
pub trait TargetSource {
    /// Return a value in `GUESS_MIN..=GUESS_MAX`.
    fn draw(&mut self) -> u8;
}

/// Uniform draw from the thread-local generator. Not seedable.
#[derive(Debug, Default, Clone, Copy)]
pub struct RandomTarget;

impl TargetSource for RandomTarget {
    fn draw(&mut self) -> u8 {
        rand::random_range(GUESS_MIN..=GUESS_MAX)
    }
}

/// Replays a fixed list of targets, repeating the last one when exhausted.
///
/// Meant for tests and demos where the hidden number must be known.
#[derive(Debug, Clone)]
pub struct ScriptedTargets {
    queue: VecDeque<u8>,
    last: u8,
}

impl ScriptedTargets {
    #[must_use]
    pub fn new(targets: impl IntoIterator<Item = u8>) -> Self {
        let queue: VecDeque<u8> = targets
            .into_iter()
            .map(|t| t.clamp(GUESS_MIN, GUESS_MAX))
            .collect();
        let last = queue.front().copied().unwrap_or(GUESS_MIN);
        Self { queue, last }
    }
}

impl TargetSource for ScriptedTargets {
    fn draw(&mut self) -> u8 {
        if let Some(next) = self.queue.pop_front() {
            self.last = next;
        }
        self.last
    }
}
