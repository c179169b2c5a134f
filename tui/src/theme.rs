//! Color theme and glyphs for the game screen.
//!
//! The light theme follows a white page with fuchsia controls. The dark
//! theme uses the Kanagawa Wave palette. High contrast overrides both.

use ratatui::style::{Color, Modifier, Style};

use guess_types::{
    NoticeKind,
    ui::{Theme, UiOptions},
};

mod colors {
    use super::Color;

    // === Fuchsia (buttons, field border) ===
    pub const FUCHSIA_400: Color = Color::Rgb(232, 121, 249);
    pub const FUCHSIA_600: Color = Color::Rgb(192, 38, 211);

    // === Light page ===
    pub const PAPER: Color = Color::Rgb(255, 255, 255);
    pub const PAPER_PANEL: Color = Color::Rgb(250, 245, 255);
    pub const INK: Color = Color::Rgb(23, 23, 23);
    pub const INK_MUTED: Color = Color::Rgb(115, 115, 115);
    pub const INK_DISABLED: Color = Color::Rgb(200, 200, 200);

    // === Dark page (Kanagawa Wave) ===
    pub const SUMI_INK0: Color = Color::Rgb(22, 22, 29);
    pub const SUMI_INK3: Color = Color::Rgb(31, 31, 40);
    pub const FUJI_WHITE: Color = Color::Rgb(220, 215, 186);
    pub const FUJI_GRAY: Color = Color::Rgb(114, 113, 105);
    pub const KATANA_GRAY: Color = Color::Rgb(84, 84, 109);
    pub const ONI_VIOLET: Color = Color::Rgb(149, 127, 184);

    // === Notification accents ===
    pub const BLUE: Color = Color::Rgb(52, 152, 219);
    pub const GREEN: Color = Color::Rgb(7, 188, 12);
    pub const RED: Color = Color::Rgb(231, 76, 60);
    pub const ORANGE: Color = Color::Rgb(241, 196, 15);
}

/// Resolved theme palette used by the UI.
#[derive(Debug, Clone, Copy)]
pub struct Palette {
    pub bg: Color,
    pub bg_panel: Color,
    pub text_primary: Color,
    pub text_muted: Color,
    pub text_disabled: Color,
    pub primary: Color,
    pub primary_strong: Color,
    pub on_primary: Color,
    pub border: Color,
    pub info: Color,
    pub success: Color,
    pub warning: Color,
    pub error: Color,
}

impl Palette {
    #[must_use]
    pub fn light() -> Self {
        Self {
            bg: colors::PAPER,
            bg_panel: colors::PAPER_PANEL,
            text_primary: colors::INK,
            text_muted: colors::INK_MUTED,
            text_disabled: colors::INK_DISABLED,
            primary: colors::FUCHSIA_400,
            primary_strong: colors::FUCHSIA_600,
            on_primary: colors::PAPER,
            border: colors::FUCHSIA_400,
            info: colors::BLUE,
            success: colors::GREEN,
            warning: colors::ORANGE,
            error: colors::RED,
        }
    }

    #[must_use]
    pub fn dark() -> Self {
        Self {
            bg: colors::SUMI_INK0,
            bg_panel: colors::SUMI_INK3,
            text_primary: colors::FUJI_WHITE,
            text_muted: colors::FUJI_GRAY,
            text_disabled: colors::KATANA_GRAY,
            primary: colors::ONI_VIOLET,
            primary_strong: colors::FUCHSIA_600,
            on_primary: colors::FUJI_WHITE,
            border: colors::ONI_VIOLET,
            info: colors::BLUE,
            success: colors::GREEN,
            warning: colors::ORANGE,
            error: colors::RED,
        }
    }

    #[must_use]
    pub fn high_contrast() -> Self {
        Self {
            bg: Color::Black,
            bg_panel: Color::Black,
            text_primary: Color::White,
            text_muted: Color::Gray,
            text_disabled: Color::DarkGray,
            primary: Color::Magenta,
            primary_strong: Color::LightMagenta,
            on_primary: Color::Black,
            border: Color::White,
            info: Color::Cyan,
            success: Color::Green,
            warning: Color::Yellow,
            error: Color::Red,
        }
    }

    #[must_use]
    pub fn notice(&self, kind: NoticeKind) -> Color {
        match kind {
            NoticeKind::Error => self.error,
            NoticeKind::Info => self.info,
            NoticeKind::Success => self.success,
        }
    }
}

#[must_use]
pub fn palette(options: UiOptions) -> Palette {
    if options.high_contrast {
        return Palette::high_contrast();
    }
    match options.theme {
        Theme::Light => Palette::light(),
        Theme::Dark => Palette::dark(),
    }
}

/// ASCII/Unicode glyphs for icons and bars.
#[derive(Debug, Clone, Copy)]
pub struct Glyphs {
    pub close: &'static str,
    pub error: &'static str,
    pub info: &'static str,
    pub success: &'static str,
    pub progress: &'static str,
    pub separator: &'static str,
    pub track: &'static str,
    pub thumb: &'static str,
}

impl Glyphs {
    #[must_use]
    pub fn notice(&self, kind: NoticeKind) -> &'static str {
        match kind {
            NoticeKind::Error => self.error,
            NoticeKind::Info => self.info,
            NoticeKind::Success => self.success,
        }
    }
}

#[must_use]
pub fn glyphs(options: UiOptions) -> Glyphs {
    if options.ascii_only {
        Glyphs {
            close: "x",
            error: "!",
            info: "i",
            success: "*",
            progress: "=",
            separator: "|",
            track: "|",
            thumb: "#",
        }
    } else {
        Glyphs {
            close: "×",
            error: "✗",
            info: "ℹ",
            success: "✓",
            progress: "━",
            separator: "·",
            track: "│",
            thumb: "█",
        }
    }
}

/// Pre-defined styles for common UI elements.
pub mod styles {
    use super::{Modifier, Palette, Style};

    #[must_use]
    pub fn title(palette: &Palette) -> Style {
        Style::default()
            .fg(palette.text_primary)
            .add_modifier(Modifier::BOLD)
    }

    #[must_use]
    pub fn button(palette: &Palette, focused: bool) -> Style {
        let style = Style::default()
            .fg(palette.on_primary)
            .bg(palette.primary)
            .add_modifier(Modifier::BOLD);
        if focused {
            style.bg(palette.primary_strong).add_modifier(Modifier::UNDERLINED)
        } else {
            style
        }
    }

    #[must_use]
    pub fn button_disabled(palette: &Palette) -> Style {
        Style::default()
            .fg(palette.text_muted)
            .bg(palette.text_disabled)
    }

    #[must_use]
    pub fn placeholder(palette: &Palette) -> Style {
        Style::default()
            .fg(palette.text_muted)
            .add_modifier(Modifier::ITALIC)
    }

    #[must_use]
    pub fn key_hint(palette: &Palette) -> Style {
        Style::default().fg(palette.text_muted)
    }

    #[must_use]
    pub fn key_highlight(palette: &Palette) -> Style {
        Style::default()
            .fg(palette.primary_strong)
            .add_modifier(Modifier::BOLD)
    }
}
