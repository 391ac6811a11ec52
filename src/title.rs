//! Home-page detection and nav title cleanup.

use crate::config::ChromeConfig;

#[cfg(test)]
#[path = "title_test.rs"]
mod title_test;

/// True for the dashboard itself or a directory default document.
#[must_use]
pub fn is_home_path(path: &str, home_url: &str) -> bool {
    path.ends_with(home_url) || path.ends_with('/')
}

/// Derive the nav label from the document title.
///
/// An empty title falls back to the default. The configured suffix is then
/// removed and the configured substring replaced, each at its first
/// occurrence only; titles matching neither pass through unchanged.
#[must_use]
pub fn derive_nav_title(raw: &str, config: &ChromeConfig) -> String {
    let base = if raw.is_empty() { config.default_title.as_str() } else { raw };
    let mut title = base.to_string();
    if !config.title_suffix.is_empty() {
        title = title.replacen(&config.title_suffix, "", 1);
    }
    if !config.title_find.is_empty() {
        title = title.replacen(&config.title_find, &config.title_replace, 1);
    }
    title
}
