//! Keyboard and mouse handling for the game screen.

use anyhow::{Result, anyhow};
use crossterm::event::{
    self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent,
    MouseEventKind,
};
use std::{
    sync::{
        Arc,
        atomic::{AtomicBool, Ordering},
    },
    time::Duration,
};
use tokio::sync::mpsc;
use tracing::debug;

use guess_engine::{App, ToastId};
use guess_types::ui::Focus;

use crate::layout::{HitTarget, ScreenLayout};

const INPUT_POLL_TIMEOUT: Duration = Duration::from_millis(25); // shutdown responsiveness
const INPUT_CHANNEL_CAPACITY: usize = 1024; // bounded: no OOM
const MAX_EVENTS_PER_FRAME: usize = 64; // never starve rendering
const WHEEL_ROWS: usize = 1;

enum InputMsg {
    Event(Event),
    Error(String),
}

/// A toast held by the pointer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Drag {
    id: ToastId,
    last: (u16, u16),
    width: u16,
}

/// Pointer state that spans several mouse events.
#[derive(Debug, Default)]
pub struct PointerState {
    drag: Option<Drag>,
}

impl PointerState {
    #[must_use]
    pub fn dragging(&self) -> Option<ToastId> {
        self.drag.map(|drag| drag.id)
    }
}

/// Reads terminal events on a blocking thread and hands them to the frame loop.
pub struct InputPump {
    rx: mpsc::Receiver<InputMsg>,
    stop: Arc<AtomicBool>,
    join: Option<tokio::task::JoinHandle<()>>,
    pointer: PointerState,
}

impl InputPump {
    #[must_use]
    pub fn new() -> Self {
        let (tx, rx) = mpsc::channel(INPUT_CHANNEL_CAPACITY);
        let stop = Arc::new(AtomicBool::new(false));
        let stop2 = stop.clone();

        let join = tokio::task::spawn_blocking(move || input_loop(stop2, tx));
        Self {
            rx,
            stop,
            join: Some(join),
            pointer: PointerState::default(),
        }
    }

    pub async fn shutdown(&mut self) {
        // Close the receiver first so a send blocked on capacity returns.
        self.rx.close();

        self.stop.store(true, Ordering::Release);
        if let Some(join) = self.join.take() {
            let _ = tokio::time::timeout(Duration::from_secs(2), join).await;
        }
    }
}

impl Default for InputPump {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for InputPump {
    fn drop(&mut self) {
        // Best-effort stop if caller exits early; do not block in Drop.
        self.rx.close();
        self.stop.store(true, Ordering::Release);
    }
}

fn input_loop(stop: Arc<AtomicBool>, tx: mpsc::Sender<InputMsg>) {
    while !stop.load(Ordering::Acquire) {
        match event::poll(INPUT_POLL_TIMEOUT) {
            Ok(true) => match event::read() {
                Ok(ev) => {
                    if tx.blocking_send(InputMsg::Event(ev)).is_err() {
                        break;
                    }
                }
                Err(e) => {
                    let _ = tx.blocking_send(InputMsg::Error(e.to_string()));
                    break;
                }
            },
            Ok(false) => {}
            Err(e) => {
                let _ = tx.blocking_send(InputMsg::Error(e.to_string()));
                break;
            }
        }
    }
}

/// Drain pending events into the app. Returns `true` once the user asked to quit.
pub fn handle_events(app: &mut App, input: &mut InputPump, layout: &ScreenLayout) -> Result<bool> {
    let mut processed = 0;
    while processed < MAX_EVENTS_PER_FRAME {
        let ev = match input.rx.try_recv() {
            Ok(InputMsg::Event(ev)) => ev,
            Ok(InputMsg::Error(msg)) => return Err(anyhow!("input error: {msg}")),
            Err(mpsc::error::TryRecvError::Empty) => break,
            Err(mpsc::error::TryRecvError::Disconnected) => {
                return Err(anyhow!("input pump disconnected"));
            }
        };
        if apply_event(app, &mut input.pointer, layout, ev) {
            return Ok(true);
        }
        processed += 1;
    }
    Ok(app.should_quit())
}

pub(crate) fn apply_event(
    app: &mut App,
    pointer: &mut PointerState,
    layout: &ScreenLayout,
    event: Event,
) -> bool {
    match event {
        Event::Key(key) => {
            if !matches!(key.kind, KeyEventKind::Release) {
                handle_key(app, layout, key);
            }
        }
        Event::Mouse(mouse) => handle_mouse(app, pointer, layout, mouse),
        Event::Paste(text) => {
            // The field is single-line.
            let text: String = text.chars().filter(|c| !c.is_control()).collect();
            app.set_focus(Focus::Field);
            app.enter_text(&text);
        }
        Event::FocusGained => app.set_terminal_focus(true),
        Event::FocusLost => app.set_terminal_focus(false),
        _ => {}
    }
    app.should_quit()
}

fn handle_key(app: &mut App, layout: &ScreenLayout, key: KeyEvent) {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    match key.code {
        KeyCode::Char('c') if ctrl => app.request_quit(),
        KeyCode::Char('n') if ctrl => app.reset_game(),
        KeyCode::Esc => app.request_quit(),
        KeyCode::F(5) => app.reset_game(),
        KeyCode::Tab => app.focus_next(),
        KeyCode::BackTab => app.focus_prev(),
        KeyCode::PageUp => app.scroll_history_up(layout.history_page()),
        KeyCode::PageDown => app.scroll_history_down(layout.history_page()),
        KeyCode::Enter => app.activate_focused(),
        KeyCode::Char(' ') if app.focus() != Focus::Field => app.activate_focused(),
        KeyCode::Char(c) if !ctrl && !key.modifiers.contains(KeyModifiers::ALT) => {
            app.set_focus(Focus::Field);
            app.enter_char(c);
        }
        KeyCode::Backspace => app.delete_char(),
        KeyCode::Delete => app.delete_char_forward(),
        KeyCode::Left => app.move_cursor_left(),
        KeyCode::Right => app.move_cursor_right(),
        KeyCode::Home => app.move_cursor_home(),
        KeyCode::End => app.move_cursor_end(),
        _ => {}
    }
}

fn handle_mouse(
    app: &mut App,
    pointer: &mut PointerState,
    layout: &ScreenLayout,
    mouse: MouseEvent,
) {
    let (column, row) = (mouse.column, mouse.row);
    match mouse.kind {
        MouseEventKind::Moved => app.hover_toast(layout.toast_at(column, row)),
        MouseEventKind::Down(MouseButton::Left) => match layout.target_at(column, row) {
            Some(HitTarget::Toast { id, close: true }) => {
                app.dismiss_toast(id);
            }
            Some(HitTarget::Toast { id, close: false }) => {
                let width = layout.toast(id).map_or(0, |hit| hit.area.width);
                app.begin_toast_drag(id);
                pointer.drag = Some(Drag {
                    id,
                    last: (column, row),
                    width,
                });
            }
            Some(HitTarget::Field) => app.set_focus(Focus::Field),
            Some(HitTarget::GuessButton) => {
                app.set_focus(Focus::GuessButton);
                app.activate_focused();
            }
            Some(HitTarget::NewGameButton) => {
                app.set_focus(Focus::NewGameButton);
                app.activate_focused();
            }
            Some(HitTarget::History) | None => {}
        },
        MouseEventKind::Drag(MouseButton::Left) => {
            if let Some(drag) = pointer.drag.as_mut() {
                let dx = i32::from(column) - i32::from(drag.last.0);
                let dy = i32::from(row) - i32::from(drag.last.1);
                drag.last = (column, row);
                app.drag_toast(drag.id, dx, dy);
            }
        }
        MouseEventKind::Up(MouseButton::Left) => {
            if let Some(drag) = pointer.drag.take() {
                let dismissed = app.end_toast_drag(drag.id, drag.width);
                debug!(id = ?drag.id, dismissed, "toast drag released");
                app.hover_toast(layout.toast_at(column, row));
            }
        }
        MouseEventKind::ScrollUp => app.scroll_history_up(WHEEL_ROWS),
        MouseEventKind::ScrollDown => app.scroll_history_down(WHEEL_ROWS),
        _ => {}
    }
}
