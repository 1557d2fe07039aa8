//! Colors and box geometry shared by the styled renderers

use colored::{Color, ColoredString, Colorize};

/// Card color scheme and layout constants
pub struct CardTheme;

impl CardTheme {
    /// Accent used for the name, section headers and the border (#a02c56)
    pub const ACCENT: (u8, u8, u8) = (0xa0, 0x2c, 0x56);

    /// Blank rows between the border and the content
    pub const PADDING_Y: usize = 1;
    /// Blank columns between the border and the content
    pub const PADDING_X: usize = 2;

    // Rounded border glyphs
    pub const TOP_LEFT: &'static str = "╭";
    pub const TOP_RIGHT: &'static str = "╮";
    pub const BOTTOM_LEFT: &'static str = "╰";
    pub const BOTTOM_RIGHT: &'static str = "╯";
    pub const HORIZONTAL: &'static str = "─";
    pub const VERTICAL: &'static str = "│";

    /// Accent for the current terminal, read from `COLORTERM`
    pub fn accent_color() -> Color {
        Self::accent_color_for(std::env::var("COLORTERM").ok().as_deref())
    }

    /// Exact accent on 24-bit terminals, magenta everywhere else.
    ///
    /// `colored` maps truecolor to the nearest 16-color code on other
    /// terminals, which for the accent is bright black.
    pub fn accent_color_for(colorterm: Option<&str>) -> Color {
        match colorterm {
            Some("truecolor") | Some("24bit") => {
                let (r, g, b) = Self::ACCENT;
                Color::TrueColor { r, g, b }
            }
            _ => Color::Magenta,
        }
    }

    /// Paint text in the accent color
    pub fn accent(text: &str) -> ColoredString {
        text.color(Self::accent_color())
    }

    /// Bold accent, for headings
    pub fn heading(text: &str) -> ColoredString {
        Self::accent(text).bold()
    }

    /// Paint border glyphs
    pub fn border(text: &str) -> ColoredString {
        Self::accent(text)
    }
}

/// Run `render` with colors forced on or off.
///
/// The `colored` override is process-wide, so tests that depend on it take
/// this lock.
#[cfg(test)]
pub(crate) fn with_colors<T>(enabled: bool, render: impl FnOnce() -> T) -> T {
    use std::sync::Mutex;

    static COLOR_OVERRIDE: Mutex<()> = Mutex::new(());
    let _guard = COLOR_OVERRIDE
        .lock()
        .unwrap_or_else(|poisoned| poisoned.into_inner());

    colored::control::set_override(enabled);
    let output = render();
    colored::control::set_override(false);
    output
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accent_depends_on_color_depth() {
        assert_eq!(CardTheme::accent_color_for(None), Color::Magenta);
        assert_eq!(CardTheme::accent_color_for(Some("256color")), Color::Magenta);
        assert_eq!(
            CardTheme::accent_color_for(Some("truecolor")),
            Color::TrueColor { r: 0xa0, g: 0x2c, b: 0x56 }
        );
        assert_eq!(
            CardTheme::accent_color_for(Some("24bit")),
            Color::TrueColor { r: 0xa0, g: 0x2c, b: 0x56 }
        );
    }

    #[test]
    fn test_border_is_never_grey() {
        let (border, heading) = with_colors(true, || {
            (
                CardTheme::border(CardTheme::VERTICAL).to_string(),
                CardTheme::heading("swimburger").to_string(),
            )
        });

        assert!(!border.contains("\x1b[90m"), "{border:?}");
        assert!(!heading.contains("90m"), "{heading:?}");
        assert!(border.starts_with("\x1b["));
    }
}
