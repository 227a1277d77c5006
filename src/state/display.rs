//! Display mode store: which estimation field the board shows.

use serde::{Deserialize, Serialize};

/// Which field of an estimation result is rendered on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum DisplayMode {
    /// Show the entropy field.
    #[default]
    Entropy,
    /// Show the probability field.
    Probability,
}

impl DisplayMode {
    /// Human-readable name for the status bar.
    #[must_use]
    pub const fn display_name(&self) -> &'static str {
        match self {
            Self::Entropy => "Entropy",
            Self::Probability => "Probability",
        }
    }

    /// Returns the other mode.
    #[must_use]
    pub const fn other(&self) -> Self {
        match self {
            Self::Entropy => Self::Probability,
            Self::Probability => Self::Entropy,
        }
    }
}

/// Owns the global display mode selection.
///
/// Independent of any specific result; switching modes never touches the
/// stored estimation data.
#[derive(Debug, Clone, Copy, Default)]
pub struct DisplayState {
    mode: DisplayMode,
}

impl DisplayState {
    /// Returns the current mode.
    #[must_use]
    pub const fn mode(&self) -> DisplayMode {
        self.mode
    }

    /// Unconditionally replaces the mode.
    pub fn set_mode(&mut self, mode: DisplayMode) {
        self.mode = mode;
    }

    /// Switches to the other mode.
    pub fn toggle(&mut self) {
        self.mode = self.mode.other();
    }
}
