//! RGB color handling and contrast selection.
//!
//! The estimation service attaches a display color to every cell value. The
//! wire form is a plain three-element array `[r, g, b]`, which the tuple
//! struct layout of [`Rgb`] matches directly.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Threshold on perceptual brightness above which black text is readable.
const CONTRAST_THRESHOLD: u32 = 125;

/// An RGB color with 8-bit channels, serialized as `[r, g, b]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    /// Creates a new `Rgb` from individual channel values.
    #[must_use]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self(r, g, b)
    }

    /// Returns the red channel.
    #[must_use]
    pub const fn r(&self) -> u8 {
        self.0
    }

    /// Returns the green channel.
    #[must_use]
    pub const fn g(&self) -> u8 {
        self.1
    }

    /// Returns the blue channel.
    #[must_use]
    pub const fn b(&self) -> u8 {
        self.2
    }

    /// Perceptual brightness of the color, on a 0-255 scale.
    ///
    /// Uses the luma weights 299/587/114 with rounded integer division, the
    /// standard weighting for choosing readable foreground text.
    #[must_use]
    pub const fn brightness(&self) -> u32 {
        let weighted =
            299 * self.0 as u32 + 587 * self.1 as u32 + 114 * self.2 as u32;
        // +500 rounds the division to the nearest integer
        (weighted + 500) / 1000
    }

    /// Chooses the readable text color for this background.
    ///
    /// Brightness strictly above 125 selects black text; everything else,
    /// including exactly 125, selects white.
    ///
    /// # Examples
    ///
    /// ```
    /// use unearth::models::{Rgb, TextColor};
    ///
    /// assert_eq!(Rgb::new(255, 255, 255).contrast_text(), TextColor::Black);
    /// assert_eq!(Rgb::new(0, 0, 0).contrast_text(), TextColor::White);
    /// ```
    #[must_use]
    pub const fn contrast_text(&self) -> TextColor {
        if self.brightness() > CONTRAST_THRESHOLD {
            TextColor::Black
        } else {
            TextColor::White
        }
    }

    /// Formats the color as a CSS color string, e.g. `"rgb(32, 64, 128)"`.
    #[must_use]
    pub fn css(&self) -> String {
        format!("rgb({}, {}, {})", self.0, self.1, self.2)
    }

    /// Converts the color to a hex string in the format `#RRGGBB`.
    #[must_use]
    pub fn to_hex(&self) -> String {
        format!("#{:02X}{:02X}{:02X}", self.0, self.1, self.2)
    }

    /// Converts the color to a Ratatui color for terminal rendering.
    #[must_use]
    pub const fn to_ratatui_color(&self) -> ratatui::style::Color {
        ratatui::style::Color::Rgb(self.0, self.1, self.2)
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_hex())
    }
}

/// Foreground text color chosen for readability against a cell background.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TextColor {
    /// Black text, for bright backgrounds.
    #[default]
    Black,
    /// White text, for dark backgrounds.
    White,
}

impl TextColor {
    /// Formats the text color as a CSS color keyword.
    #[must_use]
    pub const fn css(&self) -> &'static str {
        match self {
            Self::Black => "black",
            Self::White => "white",
        }
    }

    /// Converts the text color to a Ratatui color.
    #[must_use]
    pub const fn to_ratatui_color(&self) -> ratatui::style::Color {
        match self {
            Self::Black => ratatui::style::Color::Black,
            Self::White => ratatui::style::Color::White,
        }
    }
}
