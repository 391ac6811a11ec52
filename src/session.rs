//! Settings shared by every entry point on the current page.
//!
//! The injected button, `toggleDarkMode`, and `applyStoredTheme` each attach
//! a fresh controller. They read the config from here so a page that called
//! `initPageChrome` gets its own marker and storage key on every path.

use std::cell::RefCell;

use crate::config::ChromeConfig;

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

thread_local! {
    static ACTIVE: RefCell<ChromeConfig> = RefCell::new(ChromeConfig::default());
}

/// Config the page is currently running under.
#[must_use]
pub fn active_config() -> ChromeConfig {
    ACTIVE.with(|active| active.borrow().clone())
}

/// Replace the active config, returning the one it replaces.
pub fn set_active_config(config: ChromeConfig) -> ChromeConfig {
    ACTIVE.with(|active| active.replace(config))
}
