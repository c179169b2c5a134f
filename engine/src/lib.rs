//! Application state for the guessing game.
//!
//! [`App`] owns the one live [`GameState`], the editable guess field, the
//! notification stack and keyboard focus. The TUI calls into it for every
//! user action and reads it back to render. All mutation happens on the
//! caller's thread, one action at a time.

mod draft;
mod notifications;

use std::{
    env, mem,
    time::{Duration, Instant},
};

use tracing::{debug, info, trace};

use guess_config::GuessConfig;
use guess_core::{GameState, RandomTarget, TargetSource};
use guess_types::{
    GUESS_MIN, GameStatus, GuessError, Outcome, Rules,
    ui::{Focus, UiOptions},
};

pub use draft::DraftInput;
pub use notifications::{Toast, ToastId, ToastSettings, ToastStack};

/// Forces ASCII glyphs regardless of the config file.
pub const ASCII_ENV: &str = "GUESS_TUI_ASCII";

/// Scroll position for the guess history panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HistoryScroll {
    /// Always keep the newest guess visible.
    #[default]
    Follow,
    /// Manual scroll, counted in rows up from the newest guess.
    Manual { from_bottom: usize },
}

impl HistoryScroll {
    #[must_use]
    pub fn from_bottom(self) -> usize {
        match self {
            Self::Follow => 0,
            Self::Manual { from_bottom } => from_bottom,
        }
    }
}

pub struct App {
    game: GameState,
    rules: Rules,
    targets: Box<dyn TargetSource + Send>,
    draft: DraftInput,
    focus: Focus,
    toasts: ToastStack,
    history_scroll: HistoryScroll,
    ui_options: UiOptions,
    should_quit: bool,
    last_frame: Instant,
    tick: usize,
}

impl App {
    /// Build the app from the loaded config, drawing targets at random.
    #[must_use]
    pub fn new(config: Option<&GuessConfig>) -> Self {
        let mut app = Self::with_targets(config, RandomTarget);
        if env::var(ASCII_ENV).is_ok_and(|value| !value.is_empty() && value != "0") {
            app.ui_options.ascii_only = true;
        }
        app
    }

    /// Build the app with an explicit target source. Does not consult the environment.
    #[must_use]
    pub fn with_targets(
        config: Option<&GuessConfig>,
        targets: impl TargetSource + Send + 'static,
    ) -> Self {
        let rules = config.map(GuessConfig::rules).unwrap_or_default();
        let ui_options = config.map(GuessConfig::ui_options).unwrap_or_default();
        let toasts = ToastStack::new(ToastSettings::from_config(
            config,
            ui_options.reduced_motion,
        ));

        let mut targets: Box<dyn TargetSource + Send> = Box::new(targets);
        let game = GameState::new(targets.draw());
        info!(?rules, "game started");
        trace!(target_number = game.target(), "target drawn");

        Self {
            game,
            rules,
            targets,
            draft: DraftInput::default(),
            focus: Focus::default(),
            toasts,
            history_scroll: HistoryScroll::default(),
            ui_options,
            should_quit: false,
            last_frame: Instant::now(),
            tick: 0,
        }
    }

    // ------------------------------------------------------------------
    // Read access for rendering
    // ------------------------------------------------------------------

    #[must_use]
    pub fn game(&self) -> &GameState {
        &self.game
    }

    #[must_use]
    pub fn rules(&self) -> Rules {
        self.rules
    }

    #[must_use]
    pub fn status(&self) -> GameStatus {
        self.game.status(self.rules)
    }

    #[must_use]
    pub fn attempts_remaining(&self) -> Option<u32> {
        self.game.attempts_remaining(self.rules)
    }

    #[must_use]
    pub fn draft(&self) -> &DraftInput {
        &self.draft
    }

    #[must_use]
    pub fn focus(&self) -> Focus {
        self.focus
    }

    #[must_use]
    pub fn toasts(&self) -> &ToastStack {
        &self.toasts
    }

    #[must_use]
    pub fn history_scroll(&self) -> HistoryScroll {
        self.history_scroll
    }

    #[must_use]
    pub fn ui_options(&self) -> UiOptions {
        self.ui_options
    }

    #[must_use]
    pub fn tick_count(&self) -> usize {
        self.tick
    }

    #[must_use]
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn request_quit(&mut self) {
        self.should_quit = true;
    }

    /// Whether the Guess control is enabled. Presentation-level only;
    /// [`App::submit_guess`] validates on its own.
    #[must_use]
    pub fn can_submit(&self) -> bool {
        !self.game.raw_input().is_empty()
    }

    // ------------------------------------------------------------------
    // Game actions
    // ------------------------------------------------------------------

    /// Submit the field contents. Rejections are reported through a toast
    /// and the returned error; none of them end the game.
    pub fn submit_guess(&mut self) -> Result<Outcome, GuessError> {
        let submission = self.take_game().submit(self.rules);
        self.game = submission.state;
        self.toasts.push(submission.notice);
        // Keep the editor in sync with whatever the transition left in the field.
        self.draft.set_text(self.game.raw_input());
        if submission.result.is_ok() {
            self.history_scroll = HistoryScroll::Follow;
        }
        debug!(result = ?submission.result, status = ?self.status(), "submit handled");
        submission.result
    }

    /// Discard the current game and start a new one with a fresh target.
    pub fn reset_game(&mut self) {
        self.game = GameState::reset(self.targets.draw());
        self.draft.clear();
        self.history_scroll = HistoryScroll::Follow;
        self.focus = Focus::Field;
        info!("new game started");
        trace!(target_number = self.game.target(), "target drawn");
    }

    /// Activate whatever has keyboard focus.
    pub fn activate_focused(&mut self) {
        match self.focus {
            Focus::Field | Focus::GuessButton => {
                if self.can_submit() {
                    let _ = self.submit_guess();
                }
            }
            Focus::NewGameButton => self.reset_game(),
        }
    }

    // ------------------------------------------------------------------
    // Field editing
    // ------------------------------------------------------------------

    pub fn enter_char(&mut self, c: char) {
        self.draft.enter_char(c);
        self.sync_field();
    }

    pub fn enter_text(&mut self, text: &str) {
        self.draft.enter_text(text);
        self.sync_field();
    }

    pub fn delete_char(&mut self) {
        self.draft.delete_char();
        self.sync_field();
    }

    pub fn delete_char_forward(&mut self) {
        self.draft.delete_char_forward();
        self.sync_field();
    }

    pub fn move_cursor_left(&mut self) {
        self.draft.move_cursor_left();
    }

    pub fn move_cursor_right(&mut self) {
        self.draft.move_cursor_right();
    }

    pub fn move_cursor_home(&mut self) {
        self.draft.move_cursor_home();
    }

    pub fn move_cursor_end(&mut self) {
        self.draft.move_cursor_end();
    }

    /// Replace the whole field, as a paste or programmatic change would.
    pub fn set_input(&mut self, text: impl Into<String>) {
        self.draft.set_text(text);
        self.sync_field();
    }

    fn sync_field(&mut self) {
        let text = self.draft.text().to_owned();
        self.game = self.take_game().with_input(text);
    }

    fn take_game(&mut self) -> GameState {
        mem::replace(&mut self.game, GameState::new(GUESS_MIN))
    }

    // ------------------------------------------------------------------
    // Focus and scrolling
    // ------------------------------------------------------------------

    pub fn focus_next(&mut self) {
        self.focus = self.focus.next();
    }

    pub fn focus_prev(&mut self) {
        self.focus = self.focus.prev();
    }

    pub fn set_focus(&mut self, focus: Focus) {
        self.focus = focus;
    }

    pub fn scroll_history_up(&mut self, rows: usize) {
        let len = self.game.history().len();
        let from_bottom = self
            .history_scroll
            .from_bottom()
            .saturating_add(rows)
            .min(len.saturating_sub(1));
        self.history_scroll = if from_bottom == 0 {
            HistoryScroll::Follow
        } else {
            HistoryScroll::Manual { from_bottom }
        };
    }

    pub fn scroll_history_down(&mut self, rows: usize) {
        let from_bottom = self.history_scroll.from_bottom().saturating_sub(rows);
        self.history_scroll = if from_bottom == 0 {
            HistoryScroll::Follow
        } else {
            HistoryScroll::Manual { from_bottom }
        };
    }

    // ------------------------------------------------------------------
    // Notifications
    // ------------------------------------------------------------------

    pub fn hover_toast(&mut self, id: Option<ToastId>) {
        self.toasts.hover(id);
    }

    pub fn dismiss_toast(&mut self, id: ToastId) -> bool {
        self.toasts.dismiss(id)
    }

    pub fn begin_toast_drag(&mut self, id: ToastId) {
        self.toasts.begin_drag(id);
    }

    pub fn drag_toast(&mut self, id: ToastId, dx: i32, dy: i32) {
        self.toasts.drag_by(id, dx, dy);
    }

    pub fn end_toast_drag(&mut self, id: ToastId, width: u16) -> bool {
        self.toasts.end_drag(id, width)
    }

    pub fn set_terminal_focus(&mut self, focused: bool) {
        self.toasts.set_terminal_focus(focused);
    }

    // ------------------------------------------------------------------
    // Frame timing
    // ------------------------------------------------------------------

    /// Advance per-frame state. Only cosmetic timers live here; game
    /// logic never depends on time.
    pub fn tick(&mut self) {
        self.tick = self.tick.wrapping_add(1);
        let elapsed = self.frame_elapsed();
        self.toasts.advance(elapsed);
    }

    /// Advance notification timers by an explicit amount.
    pub fn advance_time(&mut self, delta: Duration) {
        self.toasts.advance(delta);
    }

    fn frame_elapsed(&mut self) -> Duration {
        let now = Instant::now();
        let elapsed = now.duration_since(self.last_frame);
        self.last_frame = now;
        elapsed
    }
}
