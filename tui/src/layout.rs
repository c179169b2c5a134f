//! Hit map of the last rendered frame.
//!
//! Rendering records where every clickable element landed so the input
//! handler can route mouse events without redoing layout.

use ratatui::layout::{Position, Rect};

use guess_engine::ToastId;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ToastHit {
    pub id: ToastId,
    pub area: Rect,
    pub close: Rect,
}

/// What sits under a pointer position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HitTarget {
    Field,
    GuessButton,
    NewGameButton,
    History,
    Toast { id: ToastId, close: bool },
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScreenLayout {
    pub field: Rect,
    pub guess_button: Rect,
    pub new_game_button: Rect,
    pub history: Option<Rect>,
    /// In draw order; later entries are on top.
    pub toasts: Vec<ToastHit>,
}

impl ScreenLayout {
    #[must_use]
    pub fn toast(&self, id: ToastId) -> Option<&ToastHit> {
        self.toasts.iter().find(|hit| hit.id == id)
    }

    #[must_use]
    pub fn toast_at(&self, column: u16, row: u16) -> Option<ToastId> {
        let pos = Position::new(column, row);
        self.toasts
            .iter()
            .rev()
            .find(|hit| hit.area.contains(pos))
            .map(|hit| hit.id)
    }

    /// Toasts float above the page, so they win over anything beneath.
    #[must_use]
    pub fn target_at(&self, column: u16, row: u16) -> Option<HitTarget> {
        let pos = Position::new(column, row);
        if let Some(hit) = self.toasts.iter().rev().find(|hit| hit.area.contains(pos)) {
            return Some(HitTarget::Toast {
                id: hit.id,
                close: hit.close.contains(pos),
            });
        }
        if self.field.contains(pos) {
            Some(HitTarget::Field)
        } else if self.guess_button.contains(pos) {
            Some(HitTarget::GuessButton)
        } else if self.new_game_button.contains(pos) {
            Some(HitTarget::NewGameButton)
        } else if self.history.is_some_and(|area| area.contains(pos)) {
            Some(HitTarget::History)
        } else {
            None
        }
    }

    /// Rows moved by one PageUp/PageDown.
    #[must_use]
    pub fn history_page(&self) -> usize {
        self.history
            .map_or(1, |area| usize::from(area.height.saturating_sub(2)).max(1))
    }
}
