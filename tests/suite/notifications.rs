//! Notification lifecycle as seen from the application.

use std::time::Duration;

use guess_types::NoticeKind;

use crate::common::{configured_app, guess, scripted_app};

fn texts(app: &guess_engine::App) -> Vec<String> {
    app.toasts()
        .visible()
        .map(|t| t.notice().text().to_string())
        .collect()
}

#[test]
fn each_submission_notifies_once() {
    let mut app = scripted_app(&[40]);
    let _ = guess(&mut app, "");
    let _ = guess(&mut app, "500");
    let _ = guess(&mut app, "60");
    let _ = guess(&mut app, "60");
    let _ = guess(&mut app, "40");
    assert_eq!(
        texts(&app),
        vec![
            "Please enter a valid number!",
            "Please enter a number between 1 and 100!",
            "Try again!",
            "Try again!",
            "Congratulations!",
        ]
    );
    let kinds: Vec<_> = app.toasts().visible().map(|t| t.notice().kind()).collect();
    assert_eq!(
        kinds,
        vec![
            NoticeKind::Error,
            NoticeKind::Error,
            NoticeKind::Info,
            NoticeKind::Info,
            NoticeKind::Success,
        ]
    );
}

#[test]
fn toasts_never_touch_game_state() {
    let mut app = scripted_app(&[40]);
    let _ = guess(&mut app, "20");
    let before = (app.game().attempts(), app.game().message().to_string());
    let id = app.toasts().visible().next().expect("toast").id();
    app.hover_toast(Some(id));
    app.dismiss_toast(id);
    app.advance_time(Duration::from_secs(30));
    assert_eq!(
        (app.game().attempts(), app.game().message().to_string()),
        before
    );
}

#[test]
fn overflow_waits_for_a_free_slot() {
    let mut app = configured_app("[notifications]\nmax_visible = 2\n", &[40]);
    for value in ["1", "2", "3"] {
        let _ = guess(&mut app, value);
    }
    assert_eq!(app.toasts().len(), 3);
    assert_eq!(app.toasts().visible().count(), 2);

    app.advance_time(Duration::from_millis(5000));
    assert_eq!(app.toasts().len(), 1);
    assert_eq!(app.toasts().visible().count(), 1);

    app.advance_time(Duration::from_millis(5000));
    assert!(app.toasts().is_empty());
}

#[test]
fn drag_past_threshold_dismisses() {
    let mut app = scripted_app(&[40]);
    let _ = guess(&mut app, "20");
    let id = app.toasts().visible().next().expect("toast").id();

    app.begin_toast_drag(id);
    app.drag_toast(id, 10, 0);
    assert!(!app.end_toast_drag(id, 48));
    assert_eq!(app.toasts().get(id).expect("still there").offset(), (0, 0));

    app.begin_toast_drag(id);
    app.drag_toast(id, 39, 0);
    assert!(app.end_toast_drag(id, 48));
    assert!(app.toasts().get(id).is_none());
}
