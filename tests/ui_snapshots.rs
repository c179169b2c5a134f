//! Screen tests: the real draw path rendered through a vt100 virtual terminal.


use std::time::Duration;

use insta::assert_snapshot;
use ratatui::Terminal;

use guess_config::GuessConfig;
use guess_core::{OUT_OF_ATTEMPTS_MESSAGE, ScriptedTargets};
use guess_engine::App;
use guess_tui::{GUESS_LABEL, NEW_GAME_LABEL, PLACEHOLDER, ScreenLayout, TITLE, draw};

use vt100_backend::VT100Backend;

struct Screen {
    app: App,
    terminal: Terminal<VT100Backend>,
    layout: ScreenLayout,
}

impl Screen {
    fn new(app: App) -> Self {
        let backend = VT100Backend::new(80, 24);
        let mut screen = Self {
            app,
            terminal: Terminal::new(backend).expect("failed to create terminal"),
            layout: ScreenLayout::default(),
        };
        screen.draw();
        screen
    }

    fn draw(&mut self) -> &VT100Backend {
        let Self {
            app,
            terminal,
            layout,
        } = self;
        terminal
            .draw(|frame| draw(frame, app, layout))
            .expect("failed to draw");
        terminal.backend()
    }

    fn guess(&mut self, text: &str) {
        self.app.set_input(text);
        let _ = self.app.submit_guess();
    }
}

fn game(targets: &[u8]) -> App {
    App::with_targets(None, ScriptedTargets::new(targets.iter().copied()))
}

fn game_with(config: &str, target: u8) -> App {
    let config: GuessConfig = toml::from_str(config).expect("valid config");
    App::with_targets(Some(&config), ScriptedTargets::new([target]))
}

#[test]
fn snapshot_title_and_prompt() {
    let mut screen = Screen::new(game(&[50]));
    let backend = screen.draw();

    let title = backend.find_row(TITLE).expect("title row");
    assert_snapshot!(backend.row(title).trim(), @"Guessing Game!");
    let prompt = backend.find_row("Guess a number").expect("prompt row");
    assert_snapshot!(backend.row(prompt).trim(), @"Guess a number between 1 and 100");
    let status = backend.find_row("Attempts").expect("status row");
    assert_snapshot!(backend.row(status).trim(), @"Attempts remaining: 8");

    assert!(title < prompt && prompt < status);
    let new_game = backend.find_row(NEW_GAME_LABEL).expect("new game row");
    assert!(title < new_game && new_game < prompt);
}

#[test]
fn field_shows_placeholder_then_typed_text() {
    let mut screen = Screen::new(game(&[50]));
    let backend = screen.draw();
    let row = backend.find_row(PLACEHOLDER).expect("placeholder visible");
    let placeholder_col = backend.find_col(row, PLACEHOLDER).expect("placeholder col");
    assert_eq!(backend.cursor(), Some((placeholder_col, row)));

    screen.app.set_input("42");
    let backend = screen.draw();
    assert!(!backend.contents().contains(PLACEHOLDER));
    assert_eq!(backend.find_col(row, "42"), Some(placeholder_col));
    assert_eq!(backend.cursor(), Some((placeholder_col + 2, row)));
}

#[test]
fn cursor_hidden_when_a_button_has_focus() {
    let mut screen = Screen::new(game(&[50]));
    screen.app.focus_next();
    assert_eq!(screen.draw().cursor(), None);
}

#[test]
fn guess_button_greys_out_while_field_is_empty() {
    let mut screen = Screen::new(game(&[50]));
    let backend = screen.draw();
    let row = backend.find_row(GUESS_LABEL).expect("guess button");
    let col = backend.find_col(row, GUESS_LABEL).expect("guess col");
    let disabled = backend.bg_at(col, row);

    screen.app.set_input("7");
    let enabled = screen.draw().bg_at(col, row);
    assert_eq!(disabled, Some(vt100::Color::Rgb(200, 200, 200)));
    assert_eq!(enabled, Some(vt100::Color::Rgb(232, 121, 249)));
}

#[test]
fn history_lists_every_guess_in_order() {
    let mut screen = Screen::new(game(&[42]));
    screen.guess("10");
    screen.guess("90");
    screen.guess("42");
    screen.app.advance_time(Duration::from_secs(10));
    let backend = screen.draw();

    let first = backend.find_row("#1 ").expect("first entry");
    assert_snapshot!(backend.row(first).trim(), @"│ #1   10     Too Low                                        │");
    assert_eq!(backend.find_row("Too High"), Some(first + 1));
    assert_eq!(backend.find_row("Correct!"), Some(first + 2));
    assert!(backend.contents().contains("Attempts remaining: 5"));
}

#[test]
fn exhausted_game_explains_how_to_continue() {
    let mut screen = Screen::new(game(&[100]));
    for _ in 0..8 {
        screen.guess("1");
    }
    screen.guess("100");
    screen.app.advance_time(Duration::from_secs(10));
    let contents = screen.draw().contents();

    assert!(contents.contains(OUT_OF_ATTEMPTS_MESSAGE));
    assert!(contents.contains("Attempts remaining: 0"));
    assert!(contents.contains("No attempts left"));
    // The rejected guess stays in the field.
    assert!(contents.contains("100"));
}

#[test]
fn uncapped_game_has_no_history_panel() {
    let mut screen = Screen::new(game_with("[game]\nmode = \"uncapped\"\n", 3));
    screen.guess("50");
    screen.guess("2");
    screen.app.advance_time(Duration::from_secs(10));
    let contents = screen.draw().contents();
    assert!(contents.contains("Guesses: 2"));
    assert!(!contents.contains("History"));
}

#[test]
fn toast_sits_in_the_top_right_corner() {
    let mut screen = Screen::new(game(&[50]));
    screen.guess("abc");
    screen.app.advance_time(Duration::from_millis(500));
    let backend = screen.draw();

    let row = backend
        .find_row("Please enter a valid number!")
        .expect("toast text");
    assert_eq!(row, 2);
    let close = backend.find_col(row, "×").expect("close glyph");
    assert_eq!(close, 76);
}

#[test]
fn toasts_stack_and_expire() {
    let mut screen = Screen::new(game(&[50]));
    screen.guess("10");
    screen.guess("20");
    screen.app.advance_time(Duration::from_millis(500));
    let backend = screen.draw();
    assert_eq!(backend.find_row("Try again!"), Some(2));
    assert_eq!(screen.layout.toasts.len(), 2);

    screen.app.advance_time(Duration::from_secs(5));
    let backend = screen.draw();
    assert_eq!(backend.find_row("Try again!"), None);
    assert!(screen.layout.toasts.is_empty());
}

#[test]
fn high_contrast_paints_a_black_page() {
    let mut screen = Screen::new(game_with("[app]\nhigh_contrast = true\n", 50));
    assert_eq!(screen.draw().bg_at(0, 0), Some(vt100::Color::Idx(0)));
}
