//! Structured navigation fragment.
//!
//! One container with two zones: the left holds the home link and the page
//! title, the right holds the theme toggle. Class names and the toggle id are
//! fixed by [`crate::consts`] so page stylesheets can target them.

use crate::config::ChromeConfig;
use crate::theme::Theme;

#[cfg(test)]
#[path = "nav_test.rs"]
mod nav_test;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NavBar {
    pub left: NavLeft,
    pub right: NavRight,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NavLeft {
    pub home_href: String,
    pub home_label: String,
    pub title: String,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NavRight {
    pub toggle: ToggleFace,
}

/// Displayed text and tooltip of the theme toggle.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ToggleFace {
    pub glyph: String,
    /// Unset until the first refresh.
    pub tooltip: Option<String>,
}

impl ToggleFace {
    #[must_use]
    pub fn for_theme(theme: Theme) -> Self {
        Self { glyph: theme.toggle_glyph().to_string(), tooltip: Some(theme.toggle_tooltip().to_string()) }
    }
}

/// Build the fragment. `page_title` falls back to the default when absent or empty.
#[must_use]
pub fn build_nav_bar(config: &ChromeConfig, page_title: Option<&str>) -> NavBar {
    let title = match page_title {
        Some(t) if !t.is_empty() => t.to_string(),
        _ => config.default_title.clone(),
    };
    NavBar {
        left: NavLeft { home_href: config.home_url.clone(), home_label: config.home_label.clone(), title },
        right: NavRight {
            toggle: ToggleFace { glyph: Theme::Light.toggle_glyph().to_string(), tooltip: None },
        },
    }
}
