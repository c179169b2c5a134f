//! Toast placement and entrance animation.

use ratatui::layout::Rect;

use guess_types::ui::ToastPosition;

/// Apply a drag offset, keeping the toast fully inside the viewport.
#[must_use]
pub fn offset_rect(base: Rect, offset: (i32, i32), viewport: Rect) -> Rect {
    let max_x = (i32::from(viewport.right()) - i32::from(base.width)).max(i32::from(viewport.x));
    let max_y =
        (i32::from(viewport.bottom()) - i32::from(base.height)).max(i32::from(viewport.y));
    let x = (i32::from(base.x) + offset.0).clamp(i32::from(viewport.x), max_x) as u16;
    let y = (i32::from(base.y) + offset.1).clamp(i32::from(viewport.y), max_y) as u16;
    Rect { x, y, ..base }
}

/// Grow the toast out of its anchor edge while it enters.
#[must_use]
pub fn bounce_in(base: Rect, progress: f32, position: ToastPosition) -> Rect {
    let scale = 0.3 + 0.7 * ease_out_bounce(progress);
    let width = ((f32::from(base.width) * scale).round() as u16)
        .max(4)
        .min(base.width);
    let x = if position.is_right() {
        base.x + (base.width - width)
    } else {
        base.x
    };
    Rect { x, width, ..base }
}

fn ease_out_bounce(t: f32) -> f32 {
    const N1: f32 = 7.5625;
    const D1: f32 = 2.75;

    let t = t.clamp(0.0, 1.0);
    if t < 1.0 / D1 {
        N1 * t * t
    } else if t < 2.0 / D1 {
        let t = t - 1.5 / D1;
        N1 * t * t + 0.75
    } else if t < 2.5 / D1 {
        let t = t - 2.25 / D1;
        N1 * t * t + 0.9375
    } else {
        let t = t - 2.625 / D1;
        N1 * t * t + 0.984_375
    }
}
