//! TUI rendering for the guessing game using ratatui.

mod effects;
mod input;
mod layout;
mod theme;
mod toasts;

pub use input::{InputPump, PointerState, handle_events};
pub use layout::{HitTarget, ScreenLayout, ToastHit};
pub use theme::{Glyphs, Palette, glyphs, palette, styles};
pub use toasts::{TOAST_HEIGHT, TOAST_WIDTH};

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{
        Block, BorderType, Borders, Paragraph, Scrollbar, ScrollbarOrientation, ScrollbarState,
    },
};
use unicode_segmentation::UnicodeSegmentation;
use unicode_width::UnicodeWidthStr;

use guess_engine::App;
use guess_types::{GUESS_MAX, GUESS_MIN, GameStatus, Outcome, ui::Focus};

pub const TITLE: &str = "Guessing Game!";
pub const NEW_GAME_LABEL: &str = "[ Start a New Game ]";
pub const GUESS_LABEL: &str = "[ Guess ]";
pub const PLACEHOLDER: &str = "Enter your guess";

const CONTENT_WIDTH: u16 = 64;

/// Draw one frame and record the clickable areas into `layout`.
pub fn draw(frame: &mut Frame, app: &App, layout: &mut ScreenLayout) {
    let options = app.ui_options();
    let palette = palette(options);
    let glyphs = glyphs(options);
    *layout = ScreenLayout::default();

    let bg_block = Block::default().style(Style::default().bg(palette.bg));
    frame.render_widget(bg_block, frame.area());

    let column = centered_column(frame.area(), CONTENT_WIDTH);
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([
            Constraint::Length(1), // Title
            Constraint::Length(1),
            Constraint::Length(1), // New game
            Constraint::Length(1),
            Constraint::Length(1), // Prompt
            Constraint::Length(3), // Field + guess button
            Constraint::Length(1), // Message
            Constraint::Length(1), // Status
            Constraint::Length(1),
            Constraint::Min(0), // History
            Constraint::Length(1), // Key hints
        ])
        .split(column);

    frame.render_widget(
        Paragraph::new(Span::styled(TITLE, styles::title(&palette))).alignment(Alignment::Center),
        chunks[0],
    );
    layout.new_game_button = draw_new_game(frame, app, chunks[2], &palette);
    frame.render_widget(
        Paragraph::new(Span::styled(
            format!("Guess a number between {GUESS_MIN} and {GUESS_MAX}"),
            Style::default().fg(palette.text_primary),
        ))
        .alignment(Alignment::Center),
        chunks[4],
    );
    (layout.field, layout.guess_button) = draw_form(frame, app, chunks[5], &palette);
    frame.render_widget(
        Paragraph::new(Span::styled(
            app.game().message(),
            Style::default()
                .fg(palette.text_primary)
                .add_modifier(Modifier::BOLD),
        ))
        .alignment(Alignment::Center),
        chunks[6],
    );
    draw_status(frame, app, chunks[7], &palette, &glyphs);
    if app.rules().keeps_history() && chunks[9].height >= 3 {
        draw_history(frame, app, chunks[9], &palette, &glyphs);
        layout.history = Some(chunks[9]);
    }
    draw_key_hints(frame, chunks[10], &palette);

    toasts::draw_toasts(frame, app, layout, &palette, &glyphs);
}

fn centered_column(area: Rect, width: u16) -> Rect {
    let width = width.min(area.width);
    Rect {
        x: area.x + (area.width - width) / 2,
        width,
        ..area
    }
}

fn centered_label(area: Rect, label: &str) -> Rect {
    let width = (label.width() as u16).min(area.width);
    Rect {
        x: area.x + (area.width - width) / 2,
        width,
        height: 1,
        ..area
    }
}

fn draw_new_game(frame: &mut Frame, app: &App, area: Rect, palette: &Palette) -> Rect {
    let button = centered_label(area, NEW_GAME_LABEL);
    let style = styles::button(palette, app.focus() == Focus::NewGameButton);
    frame.render_widget(Paragraph::new(Span::styled(NEW_GAME_LABEL, style)), button);
    button
}

/// Returns the field and guess button rects.
fn draw_form(frame: &mut Frame, app: &App, area: Rect, palette: &Palette) -> (Rect, Rect) {
    let button_width = GUESS_LABEL.width() as u16;
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Min(10),
            Constraint::Length(1),
            Constraint::Length(button_width),
        ])
        .split(area);
    let field = chunks[0];
    let button = Rect {
        y: chunks[2].y + 1,
        height: 1,
        ..chunks[2]
    };

    let focused = app.focus() == Focus::Field;
    let border_style = if focused {
        Style::default()
            .fg(palette.primary_strong)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(palette.border)
    };
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(border_style);
    let inner = block.inner(field);

    let draft = app.draft();
    let content_width = usize::from(inner.width.saturating_sub(1)).max(1);
    let cursor_display_pos = draft.before_cursor().width();
    let (text, horizontal_scroll) = if draft.is_empty() {
        (
            Span::styled(PLACEHOLDER, styles::placeholder(palette)),
            0u16,
        )
    } else if cursor_display_pos >= content_width {
        let scroll_target = cursor_display_pos - content_width + 1;
        let mut byte_offset = draft.text().len();
        let mut skipped_width = 0;
        for (idx, grapheme) in draft.text().grapheme_indices(true) {
            if skipped_width >= scroll_target {
                byte_offset = idx;
                break;
            }
            skipped_width += grapheme.width();
        }
        (
            Span::styled(
                draft.text()[byte_offset..].to_string(),
                Style::default().fg(palette.text_primary),
            ),
            skipped_width as u16,
        )
    } else {
        (
            Span::styled(
                draft.text().to_string(),
                Style::default().fg(palette.text_primary),
            ),
            0u16,
        )
    };
    frame.render_widget(Paragraph::new(Line::from(text)).block(block), field);

    if focused && inner.width > 0 && inner.height > 0 {
        let cursor_x = inner
            .x
            .saturating_add(cursor_display_pos as u16)
            .saturating_sub(horizontal_scroll)
            .min(inner.right().saturating_sub(1));
        frame.set_cursor_position((cursor_x, inner.y));
    }

    let button_style = if app.can_submit() {
        styles::button(palette, app.focus() == Focus::GuessButton)
    } else {
        styles::button_disabled(palette)
    };
    frame.render_widget(Paragraph::new(Span::styled(GUESS_LABEL, button_style)), button);

    (field, button)
}

fn draw_status(frame: &mut Frame, app: &App, area: Rect, palette: &Palette, glyphs: &Glyphs) {
    let readout = match app.attempts_remaining() {
        Some(remaining) => format!("Attempts remaining: {remaining}"),
        None => format!("Guesses: {}", app.game().attempts()),
    };
    let mut spans = vec![Span::styled(
        readout,
        Style::default().fg(palette.text_muted),
    )];
    let badge = match app.status() {
        GameStatus::InProgress => None,
        GameStatus::Won => Some(("Solved", palette.success)),
        GameStatus::AttemptsExhausted => Some(("No attempts left", palette.error)),
    };
    if let Some((label, color)) = badge {
        spans.push(Span::styled(
            format!(" {} ", glyphs.separator),
            Style::default().fg(palette.text_muted),
        ));
        spans.push(Span::styled(
            label,
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        ));
    }
    frame.render_widget(
        Paragraph::new(Line::from(spans)).alignment(Alignment::Center),
        area,
    );
}

fn draw_history(frame: &mut Frame, app: &App, area: Rect, palette: &Palette, glyphs: &Glyphs) {
    let block = Block::default()
        .title(" History ")
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(palette.border))
        .style(Style::default().bg(palette.bg_panel));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let history = app.game().history();
    if history.is_empty() {
        frame.render_widget(
            Paragraph::new(Span::styled(
                " No guesses yet",
                Style::default().fg(palette.text_muted),
            )),
            inner,
        );
        return;
    }

    let height = usize::from(inner.height);
    let max_top = history.len().saturating_sub(height);
    let top = max_top.saturating_sub(app.history_scroll().from_bottom());

    let lines: Vec<Line> = history
        .iter()
        .enumerate()
        .skip(top)
        .take(height)
        .map(|(index, record)| {
            let color = match record.outcome() {
                Outcome::Correct => palette.success,
                Outcome::TooHigh => palette.warning,
                Outcome::TooLow => palette.info,
            };
            Line::from(vec![
                Span::styled(
                    format!(" #{:<3} ", index + 1),
                    Style::default().fg(palette.text_muted),
                ),
                Span::styled(
                    format!("{:<6} ", record.value()),
                    Style::default().fg(palette.text_primary),
                ),
                Span::styled(record.outcome().label(), Style::default().fg(color)),
            ])
        })
        .collect();
    frame.render_widget(Paragraph::new(lines), inner);

    if max_top > 0 {
        let scrollbar = Scrollbar::new(ScrollbarOrientation::VerticalRight)
            .begin_symbol(None)
            .end_symbol(None)
            .track_symbol(Some(glyphs.track))
            .thumb_symbol(glyphs.thumb)
            .style(Style::default().fg(palette.text_muted));
        let mut scrollbar_state = ScrollbarState::new(max_top).position(top);
        frame.render_stateful_widget(scrollbar, inner, &mut scrollbar_state);
    }
}

fn draw_key_hints(frame: &mut Frame, area: Rect, palette: &Palette) {
    let hints = vec![
        Span::styled("Enter", styles::key_highlight(palette)),
        Span::styled(" guess  ", styles::key_hint(palette)),
        Span::styled("Tab", styles::key_highlight(palette)),
        Span::styled(" focus  ", styles::key_hint(palette)),
        Span::styled("Ctrl+N", styles::key_highlight(palette)),
        Span::styled(" new  ", styles::key_hint(palette)),
        Span::styled("PgUp/PgDn", styles::key_highlight(palette)),
        Span::styled(" scroll  ", styles::key_hint(palette)),
        Span::styled("Esc", styles::key_highlight(palette)),
        Span::styled(" quit", styles::key_hint(palette)),
    ];
    frame.render_widget(
        Paragraph::new(Line::from(hints)).alignment(Alignment::Center),
        area,
    );
}
