//! Toast layer, drawn over everything else.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph},
};
use unicode_segmentation::UnicodeSegmentation;
use unicode_width::UnicodeWidthStr;

use guess_engine::{App, Toast};

use crate::{
    effects::{bounce_in, offset_rect},
    layout::{ScreenLayout, ToastHit},
    theme::{Glyphs, Palette},
};

pub const TOAST_WIDTH: u16 = 48;
pub const TOAST_HEIGHT: u16 = 4;

pub(crate) fn draw_toasts(
    frame: &mut Frame,
    app: &App,
    layout: &mut ScreenLayout,
    palette: &Palette,
    glyphs: &Glyphs,
) {
    let viewport = frame.area();
    let settings = app.toasts().settings();
    let width = TOAST_WIDTH.min(viewport.width.saturating_sub(2));
    if width < 8 || viewport.height < TOAST_HEIGHT + 2 {
        return;
    }
    let x = if settings.position.is_right() {
        viewport.right() - width - 1
    } else {
        viewport.x + 1
    };

    for (slot, toast) in app.toasts().visible().enumerate() {
        let step = TOAST_HEIGHT.saturating_mul(u16::try_from(slot).unwrap_or(u16::MAX));
        if step.saturating_add(TOAST_HEIGHT + 1) > viewport.height {
            break;
        }
        let y = if settings.position.is_top() {
            viewport.y + 1 + step
        } else {
            viewport.bottom() - 1 - TOAST_HEIGHT - step
        };
        let stacked = Rect::new(x, y, width, TOAST_HEIGHT);

        let mut area = offset_rect(stacked, toast.offset(), viewport);
        if let Some(progress) = toast.entrance_progress() {
            area = bounce_in(area, progress, settings.position);
        }
        let close = draw_toast(frame, toast, area, palette, glyphs);
        layout.toasts.push(ToastHit {
            id: toast.id(),
            area,
            close,
        });
    }
}

/// Draw one toast and return the rect of its close control.
fn draw_toast(
    frame: &mut Frame,
    toast: &Toast,
    area: Rect,
    palette: &Palette,
    glyphs: &Glyphs,
) -> Rect {
    let notice = toast.notice();
    let accent = palette.notice(notice.kind());
    let mut border = Style::default().fg(accent);
    if toast.is_hovered() || toast.is_dragging() {
        border = border.add_modifier(Modifier::BOLD);
    }

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(border)
        .style(Style::default().bg(palette.bg_panel));
    let inner = block.inner(area);
    frame.render_widget(Clear, area);
    frame.render_widget(block, area);
    if inner.width < 4 || inner.height < 2 {
        return Rect::default();
    }

    // " i text ... × "
    let text_width = usize::from(inner.width).saturating_sub(6);
    let body = Line::from(vec![
        Span::raw(" "),
        Span::styled(
            glyphs.notice(notice.kind()),
            Style::default().fg(accent).add_modifier(Modifier::BOLD),
        ),
        Span::raw(" "),
        Span::styled(
            truncate_to_width(notice.text(), text_width),
            Style::default().fg(palette.text_primary),
        ),
    ]);
    frame.render_widget(
        Paragraph::new(body),
        Rect {
            height: 1,
            ..inner
        },
    );

    let close = Rect::new(inner.right() - 2, inner.y, 2, 1);
    frame.render_widget(
        Paragraph::new(Span::styled(
            glyphs.close,
            Style::default().fg(palette.text_muted),
        )),
        Rect { width: 1, ..close },
    );

    let filled = (f32::from(inner.width) * toast.remaining_fraction()).round() as usize;
    frame.render_widget(
        Paragraph::new(Span::styled(
            glyphs.progress.repeat(filled),
            Style::default().fg(accent),
        )),
        Rect {
            y: inner.y + 1,
            height: 1,
            ..inner
        },
    );
    close
}

fn truncate_to_width(text: &str, max: usize) -> String {
    if text.width() <= max {
        return text.to_string();
    }
    let mut out = String::new();
    let mut used = 0;
    for grapheme in text.graphemes(true) {
        let w = grapheme.width();
        if used + w + 3 > max {
            break;
        }
        out.push_str(grapheme);
        used += w;
    }
    out.push_str("...");
    out
}
