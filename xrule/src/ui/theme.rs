//! Centralized palettes, layout constants and style functions.
//!
//! Every color comes from a [`Palette`] picked by the current [`Theme`], so
//! toggling the theme restyles the whole screen on the next draw.

use ratatui::style::{Color, Modifier, Style};
use xrule_prefs::Theme;

// =============================================================================
// Palettes
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Palette {
    pub background: Color,
    pub foreground: Color,
    /// Help text and secondary information
    pub muted: Color,
    /// Title and focused borders
    pub accent: Color,
    pub border: Color,
    pub error: Color,
    /// Border and text of the field that was just solved
    pub computed: Color,
}

impl Palette {
    pub const LIGHT: Palette = Palette {
        background: Color::Rgb(250, 250, 250),
        foreground: Color::Rgb(24, 24, 27),
        muted: Color::Rgb(113, 113, 122),
        accent: Color::Rgb(37, 99, 235),
        border: Color::Rgb(212, 212, 216),
        error: Color::Rgb(220, 38, 38),
        computed: Color::Rgb(22, 163, 74),
    };

    pub const DARK: Palette = Palette {
        background: Color::Rgb(24, 24, 27),
        foreground: Color::Rgb(244, 244, 245),
        muted: Color::Rgb(161, 161, 170),
        accent: Color::Rgb(96, 165, 250),
        border: Color::Rgb(63, 63, 70),
        error: Color::Rgb(248, 113, 113),
        computed: Color::Rgb(74, 222, 128),
    };

    pub fn for_theme(theme: Theme) -> Self {
        match theme {
            Theme::Light => Self::LIGHT,
            Theme::Dark => Self::DARK,
        }
    }
}

// =============================================================================
// Layout Constants
// =============================================================================

/// Standard margin around screen content
pub const SCREEN_MARGIN: u16 = 2;

/// Height of the title/header area
pub const TITLE_HEIGHT: u16 = 1;

/// Height of the help bar at the bottom
pub const HELP_BAR_HEIGHT: u16 = 3;

/// Width of one field box
pub const FIELD_WIDTH: u16 = 28;

/// Height of one field box (border + text + border)
pub const FIELD_HEIGHT: u16 = 3;

/// Width of the column holding the `=` sign
pub const EQUALS_WIDTH: u16 = 5;

/// Width reserved for the cat icon in the title bar
pub const ICON_WIDTH: u16 = 10;

// =============================================================================
// Style Functions
// =============================================================================

/// Screen background and default text
pub fn base_style(palette: &Palette) -> Style {
    Style::default()
        .bg(palette.background)
        .fg(palette.foreground)
}

pub fn title_style(palette: &Palette) -> Style {
    Style::default()
        .fg(palette.accent)
        .add_modifier(Modifier::BOLD)
}

pub fn help_text_style(palette: &Palette) -> Style {
    Style::default().fg(palette.muted)
}

/// Style for popup headers and key names
pub fn header_style(palette: &Palette) -> Style {
    Style::default()
        .fg(palette.accent)
        .add_modifier(Modifier::BOLD)
}

pub fn accent_border_style(palette: &Palette) -> Style {
    Style::default().fg(palette.accent)
}

/// Border style of a field box.
///
/// An error outranks the just-computed flag, which outranks focus.
pub fn field_border_style(palette: &Palette, focused: bool, error: bool, computed: bool) -> Style {
    let color = if error {
        palette.error
    } else if computed {
        palette.computed
    } else if focused {
        palette.accent
    } else {
        palette.border
    };

    let style = Style::default().fg(color);
    if focused {
        style.add_modifier(Modifier::BOLD)
    } else {
        style
    }
}

/// Text style inside a field box
pub fn field_text_style(palette: &Palette, computed: bool) -> Style {
    if computed {
        Style::default()
            .fg(palette.computed)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(palette.foreground)
    }
}

pub fn error_message_style(palette: &Palette) -> Style {
    Style::default().fg(palette.error)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_border_wins_over_computed_and_focus() {
        let p = Palette::DARK;
        assert_eq!(field_border_style(&p, true, true, true).fg, Some(p.error));
        assert_eq!(field_border_style(&p, true, false, true).fg, Some(p.computed));
        assert_eq!(field_border_style(&p, true, false, false).fg, Some(p.accent));
        assert_eq!(field_border_style(&p, false, false, false).fg, Some(p.border));
    }

    #[test]
    fn palette_follows_theme() {
        assert_eq!(Palette::for_theme(Theme::Light), Palette::LIGHT);
        assert_eq!(Palette::for_theme(Theme::Dark), Palette::DARK);
    }
}
