//! Two-state visual theme.
//!
//! The stored form is the literal string `"true"` for dark and `"false"` for
//! light. Anything else, including a missing key, reads as light.

use crate::consts::{GLYPH_MOON, GLYPH_SUN, TOOLTIP_TO_DARK, TOOLTIP_TO_LIGHT};

#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    /// Parse a stored preference value. Only `"true"` selects dark.
    #[must_use]
    pub fn from_stored(raw: Option<&str>) -> Self {
        match raw {
            Some("true") => Self::Dark,
            _ => Self::Light,
        }
    }

    #[must_use]
    pub fn from_dark(is_dark: bool) -> Self {
        if is_dark { Self::Dark } else { Self::Light }
    }

    #[must_use]
    pub fn is_dark(self) -> bool {
        self == Self::Dark
    }

    /// Value written back to storage.
    #[must_use]
    pub fn as_stored(self) -> &'static str {
        match self {
            Self::Dark => "true",
            Self::Light => "false",
        }
    }

    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::Dark => Self::Light,
            Self::Light => Self::Dark,
        }
    }

    /// Glyph on the toggle control. It shows the mode a click switches to.
    #[must_use]
    pub fn toggle_glyph(self) -> &'static str {
        match self {
            Self::Dark => GLYPH_SUN,
            Self::Light => GLYPH_MOON,
        }
    }

    #[must_use]
    pub fn toggle_tooltip(self) -> &'static str {
        match self {
            Self::Dark => TOOLTIP_TO_LIGHT,
            Self::Light => TOOLTIP_TO_DARK,
        }
    }
}
