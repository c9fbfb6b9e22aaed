//! Global theme state
//!
//! One `ThemeController` owns the light/dark flag for the whole app. It is
//! created at startup, handed to the app state, and every renderer reads it
//! each frame, so a toggle is visible on the very next draw. There is
//! exactly one writer path per event (the active key handler); the event
//! loop is single-threaded, so no locking is involved.

pub mod palette;

use serde::{Deserialize, Serialize};
use tracing::debug;

pub use palette::{palette_for, Palette, DARK, LIGHT};

/// The host's reported appearance preference
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Ambient {
    Light,
    Dark,
    /// The host did not report a preference
    Unspecified,
}

impl Ambient {
    /// Detect the terminal's appearance from the `COLORFGBG` convention
    ///
    /// The variable looks like "15;0" (foreground;background). Background
    /// colors 0-6 and 8 are the dark half of the classic 16-color set.
    pub fn detect() -> Self {
        match std::env::var("COLORFGBG") {
            Ok(value) => Self::from_colorfgbg(&value),
            Err(_) => Self::Unspecified,
        }
    }

    fn from_colorfgbg(value: &str) -> Self {
        let Some(bg) = value.rsplit(';').next() else {
            return Self::Unspecified;
        };
        match bg.parse::<u8>() {
            Ok(n) if n <= 6 || n == 8 => Self::Dark,
            Ok(_) => Self::Light,
            Err(_) => Self::Unspecified,
        }
    }
}

/// Startup theme preference from the config file
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    /// Follow the ambient appearance
    #[default]
    Auto,
    Light,
    Dark,
}

/// Owner of the single light/dark flag
///
/// The flag starts light and is session-only: toggling never writes back to
/// the config file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ThemeController {
    is_dark: bool,
}

impl ThemeController {
    /// Create a controller from the configured mode and the detected ambient
    pub fn new(mode: ThemeMode, ambient: Ambient) -> Self {
        let mut controller = Self::default();
        match mode {
            ThemeMode::Light => {}
            ThemeMode::Dark => controller.is_dark = true,
            ThemeMode::Auto => controller.set_from_ambient(ambient),
        }
        controller
    }

    /// Current flag value
    pub fn is_dark(&self) -> bool {
        self.is_dark
    }

    /// Flip the flag (the settings switch and the global quick-toggle key)
    pub fn toggle(&mut self) {
        self.is_dark = !self.is_dark;
        debug!(is_dark = self.is_dark, "theme toggled");
    }

    /// Apply an ambient appearance report
    ///
    /// `Unspecified` leaves the current value unchanged: only transitions
    /// the host explicitly reports are mirrored.
    pub fn set_from_ambient(&mut self, ambient: Ambient) {
        match ambient {
            Ambient::Light => self.is_dark = false,
            Ambient::Dark => self.is_dark = true,
            Ambient::Unspecified => {}
        }
        debug!(?ambient, is_dark = self.is_dark, "ambient appearance applied");
    }

    /// Palette for the current flag value
    pub fn palette(&self) -> &'static Palette {
        palette_for(self.is_dark)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_light_by_default() {
        let controller = ThemeController::default();
        assert!(!controller.is_dark());
        assert_eq!(controller.palette(), &LIGHT);
    }

    #[test]
    fn test_toggle_parity() {
        let mut controller = ThemeController::default();
        let initial = controller.is_dark();

        controller.toggle();
        assert_ne!(controller.is_dark(), initial);

        controller.toggle();
        assert_eq!(controller.is_dark(), initial);

        // Odd count flips, even count restores
        for _ in 0..3 {
            controller.toggle();
        }
        assert_ne!(controller.is_dark(), initial);
    }

    #[test]
    fn test_unspecified_ambient_never_changes_flag() {
        let mut controller = ThemeController::default();
        controller.set_from_ambient(Ambient::Unspecified);
        assert!(!controller.is_dark());

        controller.toggle();
        controller.set_from_ambient(Ambient::Unspecified);
        assert!(controller.is_dark());
    }

    #[test]
    fn test_ambient_then_toggle_scenario() {
        // Start with ambient=light, toggle once, then ambient reports again
        let mut controller = ThemeController::new(ThemeMode::Auto, Ambient::Light);
        assert!(!controller.is_dark());

        controller.toggle();
        assert!(controller.is_dark());

        controller.set_from_ambient(Ambient::Dark);
        assert!(controller.is_dark());

        controller.set_from_ambient(Ambient::Unspecified);
        assert!(controller.is_dark());
    }

    #[test]
    fn test_mode_overrides_ambient() {
        let dark = ThemeController::new(ThemeMode::Dark, Ambient::Light);
        assert!(dark.is_dark());

        let light = ThemeController::new(ThemeMode::Light, Ambient::Dark);
        assert!(!light.is_dark());

        let auto = ThemeController::new(ThemeMode::Auto, Ambient::Dark);
        assert!(auto.is_dark());
    }

    #[test]
    fn test_colorfgbg_parsing() {
        assert_eq!(Ambient::from_colorfgbg("15;0"), Ambient::Dark);
        assert_eq!(Ambient::from_colorfgbg("0;15"), Ambient::Light);
        assert_eq!(Ambient::from_colorfgbg("12;8"), Ambient::Dark);
        assert_eq!(Ambient::from_colorfgbg("garbage"), Ambient::Unspecified);
        assert_eq!(Ambient::from_colorfgbg(""), Ambient::Unspecified);
    }

    #[test]
    fn test_palette_follows_flag() {
        let mut controller = ThemeController::default();
        assert_eq!(controller.palette(), &LIGHT);
        controller.toggle();
        assert_eq!(controller.palette(), &DARK);
    }
}
