//! Config file loading and how it shapes the game.

use std::time::Duration;

use guess_config::{ConfigError, GuessConfig};
use guess_core::ScriptedTargets;
use guess_engine::App;
use guess_types::{
    Rules,
    ui::{Theme, ToastPosition},
};

use crate::common::{guess, write_config};

fn app_from_file(text: &str) -> App {
    let (_dir, path) = write_config(text);
    let config = GuessConfig::load_from(&path).expect("config loads");
    App::with_targets(Some(&config), ScriptedTargets::new([50]))
}

#[test]
fn full_config_file() {
    let (_dir, path) = write_config(
        r#"
[game]
mode = "capped"
max_attempts = 3

[notifications]
duration_ms = 2000
position = "bottom-left"
max_visible = 2
drag_percent = 50

[app]
ascii_only = true
high_contrast = true
reduced_motion = true
theme = "dark"
"#,
    );
    let config = GuessConfig::load_from(&path).expect("config loads");
    assert_eq!(config.rules(), Rules::Capped { max_attempts: 3 });
    assert_eq!(config.toast_duration(), Duration::from_millis(2000));
    assert_eq!(config.toast_position(), ToastPosition::BottomLeft);
    assert_eq!(config.toast_max_visible(), 2);
    assert_eq!(config.toast_drag_percent(), 50);

    let options = config.ui_options();
    assert!(options.ascii_only && options.high_contrast && options.reduced_motion);
    assert_eq!(options.theme, Theme::Dark);
}

#[test]
fn smaller_cap_from_config() {
    let mut app = app_from_file("[game]\nmax_attempts = 2\n");
    let _ = guess(&mut app, "1");
    let _ = guess(&mut app, "2");
    assert!(guess(&mut app, "50").is_err());
}

#[test]
fn toast_settings_flow_into_the_stack() {
    let mut app = app_from_file("[notifications]\nduration_ms = 1000\n[app]\nreduced_motion = true\n");
    let _ = guess(&mut app, "x");
    let toast = app.toasts().visible().next().expect("toast");
    assert_eq!(toast.entrance_progress(), None);

    app.advance_time(Duration::from_millis(1000));
    assert!(app.toasts().is_empty());
}

#[test]
fn empty_file_means_defaults() {
    let app = app_from_file("");
    assert_eq!(app.rules(), Rules::Capped { max_attempts: 8 });
    assert_eq!(app.toasts().settings().position, ToastPosition::TopRight);
}

#[test]
fn malformed_file_reports_its_path() {
    let (_dir, path) = write_config("[game\nmode = ");
    let err = GuessConfig::load_from(&path).expect_err("parse error");
    assert!(matches!(err, ConfigError::Parse { .. }));
    assert_eq!(err.path(), &path);
    assert!(err.to_string().contains("failed to parse config"));
}

#[test]
fn missing_file_is_a_read_error() {
    let (dir, _) = write_config("");
    let missing = dir.path().join("nope.toml");
    let err = GuessConfig::load_from(&missing).expect_err("read error");
    assert!(matches!(err, ConfigError::Read { .. }));
}
