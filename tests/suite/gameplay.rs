//! End-to-end game flows driven through the application layer.

use guess_core::{CORRECT_MESSAGE, OUT_OF_ATTEMPTS_MESSAGE, TOO_HIGH_MESSAGE, TOO_LOW_MESSAGE};
use guess_types::{GUESS_MAX, GUESS_MIN, GameStatus, GuessError, NoticeKind, Outcome};

use crate::common::{configured_app, guess, scripted_app};

const UNCAPPED: &str = "[game]\nmode = \"uncapped\"\n";

#[test]
fn walkthrough_invalid_low_then_correct() {
    let mut app = scripted_app(&[50]);

    assert_eq!(guess(&mut app, "abc"), Err(GuessError::NotANumber));
    assert_eq!(app.game().message(), "");
    assert_eq!(guess(&mut app, "150"), Err(GuessError::OutOfRange));
    assert_eq!(app.game().message(), "");

    assert_eq!(guess(&mut app, "25"), Ok(Outcome::TooLow));
    assert_eq!(app.game().message(), TOO_LOW_MESSAGE);
    let history: Vec<_> = app
        .game()
        .history()
        .iter()
        .map(|r| (r.value().to_string(), r.outcome()))
        .collect();
    assert_eq!(history, vec![("25".to_string(), Outcome::TooLow)]);

    assert_eq!(guess(&mut app, "50"), Ok(Outcome::Correct));
    assert_eq!(app.game().message(), CORRECT_MESSAGE);
    assert_eq!(app.game().raw_input(), "");
    assert_eq!(app.status(), GameStatus::Won);
}

#[test]
fn boundaries_are_valid_guesses() {
    let mut app = scripted_app(&[GUESS_MIN, GUESS_MAX]);
    assert_eq!(guess(&mut app, "100"), Ok(Outcome::TooHigh));
    assert_eq!(app.game().message(), TOO_HIGH_MESSAGE);
    assert_eq!(guess(&mut app, "1"), Ok(Outcome::Correct));

    app.reset_game();
    assert_eq!(guess(&mut app, "1"), Ok(Outcome::TooLow));
    assert_eq!(guess(&mut app, "100"), Ok(Outcome::Correct));
    assert_eq!(guess(&mut app, "0"), Err(GuessError::OutOfRange));
    assert_eq!(guess(&mut app, "101"), Err(GuessError::OutOfRange));
}

#[test]
fn capped_game_counts_invalid_guesses_against_the_cap() {
    let mut app = scripted_app(&[77]);
    assert_eq!(guess(&mut app, "seven"), Err(GuessError::NotANumber));
    assert_eq!(guess(&mut app, "-3"), Err(GuessError::OutOfRange));
    assert_eq!(app.game().attempts(), 2);
    assert!(app.game().history().is_empty());
    assert_eq!(app.attempts_remaining(), Some(6));
}

#[test]
fn ninth_guess_is_rejected_even_when_correct() {
    let mut app = configured_app("[notifications]\nmax_visible = 10\n", &[77]);
    for value in ["1", "2", "3", "4", "5", "6", "7", "8"] {
        assert_eq!(guess(&mut app, value), Ok(Outcome::TooLow));
    }
    assert_eq!(app.status(), GameStatus::AttemptsExhausted);

    assert_eq!(
        guess(&mut app, "77"),
        Err(GuessError::AttemptsExhausted { max: 8 })
    );
    assert_eq!(app.game().history().len(), 8);
    assert_eq!(app.game().message(), OUT_OF_ATTEMPTS_MESSAGE);
    assert_eq!(app.game().raw_input(), "77");

    let last = app.toasts().visible().last().expect("toast");
    assert_eq!(last.notice().kind(), NoticeKind::Error);
    assert_eq!(last.notice().text(), "You're out of attempts!");
}

#[test]
fn winning_on_the_last_attempt_reports_won() {
    let mut app = scripted_app(&[8]);
    for value in ["1", "2", "3", "4", "5", "6", "7", "8"] {
        let _ = guess(&mut app, value);
    }
    assert_eq!(app.attempts_remaining(), Some(0));
    assert_eq!(app.status(), GameStatus::Won);
}

#[test]
fn reset_replaces_the_whole_game() {
    let mut app = scripted_app(&[30, 30]);
    let _ = guess(&mut app, "10");
    let _ = guess(&mut app, "x");
    app.set_input("4");

    app.reset_game();

    assert_eq!(app.game().attempts(), 0);
    assert_eq!(app.game().raw_input(), "");
    assert_eq!(app.game().message(), "");
    assert!(app.game().history().is_empty());
    assert_eq!(app.status(), GameStatus::InProgress);
    // A repeated target is allowed.
    assert_eq!(app.game().target(), 30);
}

#[test]
fn uncapped_game_never_runs_out() {
    let mut app = configured_app(UNCAPPED, &[99]);
    for _ in 0..50 {
        assert_eq!(guess(&mut app, "98"), Ok(Outcome::TooLow));
    }
    assert_eq!(guess(&mut app, "nope"), Err(GuessError::NotANumber));
    assert_eq!(app.game().attempts(), 50);
    assert!(app.game().history().is_empty());
    assert_eq!(app.attempts_remaining(), None);

    assert_eq!(guess(&mut app, "99"), Ok(Outcome::Correct));
    assert_eq!(app.status(), GameStatus::Won);
}

#[test]
fn field_is_validated_even_if_the_button_would_be_disabled() {
    let mut app = scripted_app(&[50]);
    assert!(!app.can_submit());
    assert_eq!(app.submit_guess(), Err(GuessError::NotANumber));
}

#[test]
fn whitespace_and_sign_are_accepted() {
    let mut app = scripted_app(&[50]);
    assert_eq!(guess(&mut app, "  +50 "), Ok(Outcome::Correct));
    assert_eq!(app.game().history()[0].value(), "  +50 ");
}
