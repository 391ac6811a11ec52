//! Key/value preference storage.
//!
//! The controller only needs get/set of strings by key. In the browser this
//! is `window.localStorage` (see `web::LocalStore`); tests use [`MemoryStore`].

use std::collections::HashMap;

use crate::theme::Theme;

#[cfg(test)]
#[path = "store_test.rs"]
mod store_test;

pub trait PreferenceStore {
    fn get(&self, key: &str) -> Option<String>;

    /// Best-effort write. Implementations swallow host failures.
    fn set(&mut self, key: &str, value: &str);
}

/// In-memory store for tests and non-browser hosts.
#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with(mut self, key: &str, value: &str) -> Self {
        self.entries.insert(key.to_string(), value.to_string());
        self
    }
}

impl PreferenceStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) {
        self.entries.insert(key.to_string(), value.to_string());
    }
}

/// Read the persisted theme. Missing or malformed values read as light.
#[must_use]
pub fn read_theme(store: &impl PreferenceStore, key: &str) -> Theme {
    Theme::from_stored(store.get(key).as_deref())
}

pub fn write_theme(store: &mut impl PreferenceStore, key: &str, theme: Theme) {
    store.set(key, theme.as_stored());
}
