//! Page chrome configuration.
//!
//! Defaults reproduce the fixed identifiers in [`crate::consts`]. A page may
//! override any of them by passing a plain object to `initPageChrome`; keys
//! are camelCase and all optional.

use serde::Deserialize;

use crate::consts::{
    DARK_CLASS, DEFAULT_TITLE, HOME_LABEL, HOME_URL, NAV_OFFSET, STORAGE_KEY, TITLE_FIND, TITLE_REPLACE,
    TITLE_SUFFIX,
};

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

/// How dark mode is marked on `<body>`.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum ThemeMarker {
    /// A class present while dark (the shared nav pages).
    Class { name: String },
    /// An attribute set to `value` while dark, removed while light
    /// (the HS code lookup page uses `data-theme="dark"`).
    ///
    /// Only the marker is shared with that page. It stores its own choice
    /// under `theme` as `"dark"`/`"light"`, while this crate always writes
    /// `"true"`/`"false"`, so pointing `storageKey` at `theme` does not read
    /// that page's saved values.
    Attribute { name: String, value: String },
}

impl Default for ThemeMarker {
    fn default() -> Self {
        Self::Class { name: DARK_CLASS.to_string() }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ChromeConfig {
    pub storage_key: String,
    pub home_url: String,
    pub home_label: String,
    pub default_title: String,
    /// Removed from the document title (first occurrence).
    pub title_suffix: String,
    /// Replaced by `title_replace` in the document title (first occurrence).
    pub title_find: String,
    pub title_replace: String,
    pub nav_offset: String,
    pub marker: ThemeMarker,
}

impl Default for ChromeConfig {
    fn default() -> Self {
        Self {
            storage_key: STORAGE_KEY.to_string(),
            home_url: HOME_URL.to_string(),
            home_label: HOME_LABEL.to_string(),
            default_title: DEFAULT_TITLE.to_string(),
            title_suffix: TITLE_SUFFIX.to_string(),
            title_find: TITLE_FIND.to_string(),
            title_replace: TITLE_REPLACE.to_string(),
            nav_offset: NAV_OFFSET.to_string(),
            marker: ThemeMarker::default(),
        }
    }
}
