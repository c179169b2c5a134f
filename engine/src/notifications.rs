//! Transient pop-up notifications.
//!
//! Toasts are pure presentation: pushing one never feeds back into game
//! state. Each toast counts down on its own clock and disappears when the
//! clock runs out. A toast's clock stops while the pointer rests on it,
//! while it is being dragged, and while the terminal has lost focus.
//!
//! At most `max_visible` toasts are shown. Extra toasts wait in order and
//! their clocks only start once they become visible.

use std::time::Duration;

use guess_config::GuessConfig;
use guess_types::{
    Notice,
    ui::{AnimPhase, EntranceEffect, ToastPosition},
};

const ENTRANCE_DURATION: Duration = Duration::from_millis(450);

/// Stable handle for one toast.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ToastId(u64);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ToastSettings {
    pub duration: Duration,
    pub position: ToastPosition,
    pub max_visible: usize,
    /// Horizontal drag, as a percent of the toast width, that dismisses it.
    pub drag_percent: u8,
    /// `None` disables the entrance animation.
    pub entrance: Option<Duration>,
}

impl Default for ToastSettings {
    fn default() -> Self {
        Self {
            duration: Duration::from_millis(5000),
            position: ToastPosition::TopRight,
            max_visible: 5,
            drag_percent: 80,
            entrance: Some(ENTRANCE_DURATION),
        }
    }
}

impl ToastSettings {
    #[must_use]
    pub fn from_config(config: Option<&GuessConfig>, reduced_motion: bool) -> Self {
        let mut settings = match config {
            Some(config) => Self {
                duration: config.toast_duration(),
                position: config.toast_position(),
                max_visible: config.toast_max_visible(),
                drag_percent: config.toast_drag_percent(),
                entrance: Some(ENTRANCE_DURATION),
            },
            None => Self::default(),
        };
        if reduced_motion {
            settings.entrance = None;
        }
        settings
    }
}

#[derive(Debug, Clone)]
pub struct Toast {
    id: ToastId,
    notice: Notice,
    remaining: Duration,
    lifetime: Duration,
    hovered: bool,
    dragging: bool,
    offset: (i32, i32),
    entrance: Option<EntranceEffect>,
}

impl Toast {
    #[must_use]
    pub fn id(&self) -> ToastId {
        self.id
    }

    #[must_use]
    pub fn notice(&self) -> &Notice {
        &self.notice
    }

    /// Share of lifetime left, from 1.0 (fresh) down to 0.0.
    #[must_use]
    pub fn remaining_fraction(&self) -> f32 {
        if self.lifetime.is_zero() {
            return 0.0;
        }
        (self.remaining.as_secs_f32() / self.lifetime.as_secs_f32()).clamp(0.0, 1.0)
    }

    #[must_use]
    pub fn remaining(&self) -> Duration {
        self.remaining
    }

    #[must_use]
    pub fn is_hovered(&self) -> bool {
        self.hovered
    }

    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.dragging
    }

    /// Displacement from the stacked position, in terminal cells.
    #[must_use]
    pub fn offset(&self) -> (i32, i32) {
        self.offset
    }

    /// Entrance progress, `None` once settled or when motion is reduced.
    #[must_use]
    pub fn entrance_progress(&self) -> Option<f32> {
        match self.entrance.as_ref()?.phase() {
            AnimPhase::Running { progress } => Some(progress),
            AnimPhase::Completed => None,
        }
    }
}

#[derive(Debug, Default)]
pub struct ToastStack {
    toasts: Vec<Toast>,
    next_id: u64,
    settings: ToastSettings,
    focus_lost: bool,
}

impl ToastStack {
    #[must_use]
    pub fn new(settings: ToastSettings) -> Self {
        Self {
            settings,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn settings(&self) -> ToastSettings {
        self.settings
    }

    /// Queue a notification. Identical notices stack; nothing is de-duplicated.
    pub fn push(&mut self, notice: Notice) -> ToastId {
        let id = ToastId(self.next_id);
        self.next_id += 1;
        tracing::debug!(?id, kind = ?notice.kind(), text = notice.text(), "toast pushed");
        self.toasts.push(Toast {
            id,
            notice,
            remaining: self.settings.duration,
            lifetime: self.settings.duration,
            hovered: false,
            dragging: false,
            offset: (0, 0),
            entrance: self.settings.entrance.map(EntranceEffect::bounce),
        });
        id
    }

    /// Advance every visible toast's clock and drop the expired ones.
    pub fn advance(&mut self, delta: Duration) {
        let focus_lost = self.focus_lost;
        for toast in self.toasts.iter_mut().take(self.settings.max_visible) {
            if let Some(effect) = toast.entrance.as_mut() {
                effect.advance(delta);
                if matches!(effect.phase(), AnimPhase::Completed) {
                    toast.entrance = None;
                }
            }
            if !(toast.hovered || toast.dragging || focus_lost) {
                toast.remaining = toast.remaining.saturating_sub(delta);
            }
        }
        self.toasts.retain(|toast| !toast.remaining.is_zero());
    }

    /// Toasts currently on screen, oldest first.
    pub fn visible(&self) -> impl Iterator<Item = &Toast> {
        self.toasts.iter().take(self.settings.max_visible)
    }

    #[must_use]
    pub fn get(&self, id: ToastId) -> Option<&Toast> {
        self.toasts.iter().find(|toast| toast.id == id)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.toasts.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.toasts.is_empty()
    }

    /// Mark the toast under the pointer. Passing `None` un-hovers everything.
    pub fn hover(&mut self, id: Option<ToastId>) {
        for toast in &mut self.toasts {
            toast.hovered = Some(toast.id) == id;
        }
    }

    /// Terminal focus changes pause or resume every toast.
    pub fn set_terminal_focus(&mut self, focused: bool) {
        self.focus_lost = !focused;
    }

    /// Close a toast early. Returns `false` if it was already gone.
    pub fn dismiss(&mut self, id: ToastId) -> bool {
        let before = self.toasts.len();
        self.toasts.retain(|toast| toast.id != id);
        before != self.toasts.len()
    }

    pub fn begin_drag(&mut self, id: ToastId) {
        if let Some(toast) = self.get_mut(id) {
            toast.dragging = true;
        }
    }

    pub fn drag_by(&mut self, id: ToastId, dx: i32, dy: i32) {
        if let Some(toast) = self.get_mut(id)
            && toast.dragging
        {
            toast.offset.0 = toast.offset.0.saturating_add(dx);
            toast.offset.1 = toast.offset.1.saturating_add(dy);
        }
    }

    /// Release a drag. A long enough horizontal throw dismisses the toast,
    /// anything shorter snaps it back. Returns `true` when dismissed.
    pub fn end_drag(&mut self, id: ToastId, width: u16) -> bool {
        let percent = u32::from(self.settings.drag_percent);
        let Some(toast) = self.get_mut(id) else {
            return false;
        };
        if !toast.dragging {
            return false;
        }
        toast.dragging = false;
        let travelled = toast.offset.0.unsigned_abs();
        if width > 0 && travelled * 100 >= u32::from(width) * percent {
            return self.dismiss(id);
        }
        toast.offset = (0, 0);
        false
    }

    fn get_mut(&mut self, id: ToastId) -> Option<&mut Toast> {
        self.toasts.iter_mut().find(|toast| toast.id == id)
    }
}
