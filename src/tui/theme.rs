//! Theme system for consistent UI colors across dark and light modes.
//!
//! Detects the OS theme (dark/light mode) unless the configuration pins one,
//! and provides the semantic colors the widgets draw with.

use ratatui::style::Color;

use crate::config::ThemeMode;

/// Semantic color theme for the TUI.
///
/// Provides consistent colors across all UI components with support
/// for both dark and light terminal backgrounds.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Theme {
    /// Primary color for borders, titles, and emphasis
    pub primary: Color,
    /// Accent color for highlights, selections, and focus states
    pub accent: Color,
    /// Success state color for confirmations
    pub success: Color,
    /// Error state color for failure messages
    pub error: Color,
    /// Warning state color, used for the waiting indicator
    pub warning: Color,

    /// Primary text content color
    pub text: Color,
    /// Muted text color for help text and dim content
    pub text_muted: Color,

    /// Main background color
    pub background: Color,
    /// Surface color for buried cells and panels
    pub surface: Color,
}

impl Theme {
    /// Resolves the theme for a configured mode.
    ///
    /// `Auto` uses the `dark-light` crate to detect whether the OS is in
    /// dark or light mode.
    #[must_use]
    pub fn from_mode(mode: ThemeMode) -> Self {
        match mode {
            ThemeMode::Dark => Self::dark(),
            ThemeMode::Light => Self::light(),
            ThemeMode::Auto => Self::detect(),
        }
    }

    /// Detects the OS theme and returns the appropriate theme.
    #[must_use]
    pub fn detect() -> Self {
        match dark_light::detect() {
            Ok(dark_light::Mode::Light) => Self::light(),
            // Fall back to dark theme for dark mode, unspecified, or errors
            Ok(dark_light::Mode::Dark | dark_light::Mode::Unspecified) | Err(_) => Self::dark(),
        }
    }

    /// Creates a dark theme optimized for dark terminal backgrounds.
    #[must_use]
    pub const fn dark() -> Self {
        Self {
            primary: Color::Cyan,
            accent: Color::Yellow,
            success: Color::Green,
            error: Color::Red,
            warning: Color::Yellow,

            text: Color::White,
            text_muted: Color::DarkGray,

            background: Color::Black,
            surface: Color::Rgb(30, 30, 30),
        }
    }

    /// Creates a light theme optimized for light terminal backgrounds.
    #[must_use]
    pub const fn light() -> Self {
        Self {
            primary: Color::Blue,
            accent: Color::Rgb(180, 100, 0), // Dark orange for visibility
            success: Color::Rgb(0, 128, 0),  // Dark green
            error: Color::Red,
            warning: Color::Rgb(200, 100, 0),

            text: Color::Black,
            text_muted: Color::Gray,

            background: Color::White,
            surface: Color::Rgb(245, 245, 245),
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::detect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_theme_dark() {
        let theme = Theme::dark();
        assert_eq!(theme.primary, Color::Cyan);
        assert_eq!(theme.background, Color::Black);
        assert_eq!(theme.text, Color::White);
    }

    #[test]
    fn test_theme_light() {
        let theme = Theme::light();
        assert_eq!(theme.text, Color::Black);
        assert_eq!(theme.background, Color::White);
        // Yellow accents are unreadable on white
        assert_ne!(theme.accent, Color::Yellow);
    }

    #[test]
    fn test_from_mode_pins_variant() {
        assert_eq!(Theme::from_mode(ThemeMode::Dark), Theme::dark());
        assert_eq!(Theme::from_mode(ThemeMode::Light), Theme::light());
    }
}
