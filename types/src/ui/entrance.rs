//! Entrance animation for notifications.

use std::time::Duration;

use super::animation::{AnimPhase, EffectTimer};

/// A toast sliding in from its anchor edge and settling with a bounce.
#[derive(Debug, Clone)]
pub struct EntranceEffect {
    timer: EffectTimer,
}

impl EntranceEffect {
    #[must_use]
    pub fn bounce(duration: Duration) -> Self {
        Self {
            timer: EffectTimer::new(duration),
        }
    }

    pub fn advance(&mut self, delta: Duration) {
        self.timer.advance(delta);
    }

    #[must_use]
    pub fn phase(&self) -> AnimPhase {
        self.timer.phase()
    }
}
