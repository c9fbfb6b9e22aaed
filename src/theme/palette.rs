//! Color palettes for the light and dark themes
//!
//! Two static, fully-specified palette records; every renderer picks one per
//! frame via `palette_for` instead of branching on individual colors.

use ratatui::style::Color;

/// A complete set of color roles used by the screens and the chrome
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    /// Screen background
    pub bg: Color,
    /// Primary text
    pub fg: Color,
    /// Secondary text (subtitles, dates, hints)
    pub muted: Color,
    /// Borders and separators
    pub border: Color,
    /// Card / overlay surface background
    pub card_bg: Color,
    /// Brand accent (buttons, active tint)
    pub accent: Color,
    /// Income amounts
    pub income: Color,
    /// Expense amounts
    pub expense: Color,
    /// Navigation chrome background (tab bar, drawer)
    pub chrome_bg: Color,
    /// Active tab / drawer item tint
    pub chrome_active: Color,
    /// Inactive tab / drawer item tint
    pub chrome_inactive: Color,
}

/// Light theme
pub const LIGHT: Palette = Palette {
    bg: Color::Rgb(0xf7, 0xf7, 0xf7),
    fg: Color::Rgb(0x11, 0x11, 0x11),
    muted: Color::Rgb(0x66, 0x66, 0x66),
    border: Color::Rgb(0xcc, 0xcc, 0xcc),
    card_bg: Color::Rgb(0xff, 0xff, 0xff),
    accent: Color::Rgb(0x4a, 0x90, 0xe2),
    income: Color::Rgb(0x28, 0xc7, 0x6f),
    expense: Color::Rgb(0xff, 0x5c, 0x5c),
    chrome_bg: Color::Rgb(0xff, 0xff, 0xff),
    chrome_active: Color::Rgb(0x4a, 0x90, 0xe2),
    chrome_inactive: Color::Rgb(0x55, 0x55, 0x55),
};

/// Dark theme
pub const DARK: Palette = Palette {
    bg: Color::Rgb(0x12, 0x12, 0x12),
    fg: Color::Rgb(0xee, 0xee, 0xee),
    muted: Color::Rgb(0xaa, 0xaa, 0xaa),
    border: Color::Rgb(0x33, 0x33, 0x33),
    card_bg: Color::Rgb(0x1f, 0x1f, 0x1f),
    accent: Color::Rgb(0x4a, 0x90, 0xe2),
    income: Color::Rgb(0x28, 0xc7, 0x6f),
    expense: Color::Rgb(0xff, 0x5c, 0x5c),
    chrome_bg: Color::Rgb(0x22, 0x22, 0x22),
    chrome_active: Color::Rgb(0x4a, 0x90, 0xe2),
    chrome_inactive: Color::Rgb(0xaa, 0xaa, 0xaa),
};

/// Select the palette for the given theme flag
pub const fn palette_for(is_dark: bool) -> &'static Palette {
    if is_dark {
        &DARK
    } else {
        &LIGHT
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_palette_for_selects_correctly() {
        assert_eq!(palette_for(false), &LIGHT);
        assert_eq!(palette_for(true), &DARK);
    }

    #[test]
    fn test_accent_is_theme_independent() {
        assert_eq!(LIGHT.accent, DARK.accent);
        assert_eq!(LIGHT.income, DARK.income);
        assert_eq!(LIGHT.expense, DARK.expense);
    }

    #[test]
    fn test_backgrounds_differ() {
        assert_ne!(LIGHT.bg, DARK.bg);
        assert_ne!(LIGHT.chrome_bg, DARK.chrome_bg);
    }
}
