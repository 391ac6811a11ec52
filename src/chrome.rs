//! Page chrome controller.
//!
//! DESIGN
//! ======
//! The current theme is explicit state on [`PageChrome`] rather than a
//! global. A controller seeds it from the host's theme marker when it
//! attaches, and every later marker change goes through the controller, so
//! a fresh controller attached to an already-themed page behaves the same
//! as the one that themed it.

use log::debug;

use crate::config::ChromeConfig;
use crate::host::PageHost;
use crate::nav::{self, NavBar, ToggleFace};
use crate::store::{self, PreferenceStore};
use crate::theme::Theme;
use crate::title;

#[cfg(test)]
#[path = "chrome_test.rs"]
mod chrome_test;

pub struct PageChrome<H, S> {
    host: H,
    store: S,
    config: ChromeConfig,
    theme: Theme,
}

impl<H: PageHost, S: PreferenceStore> PageChrome<H, S> {
    /// Attach to a page. The initial theme is whatever the page currently shows.
    #[must_use]
    pub fn new(host: H, store: S, config: ChromeConfig) -> Self {
        let theme = Theme::from_dark(host.has_marker(&config.marker));
        Self { host, store, config, theme }
    }

    #[must_use]
    pub fn theme(&self) -> Theme {
        self.theme
    }

    #[must_use]
    pub fn host(&self) -> &H {
        &self.host
    }

    #[must_use]
    pub fn store(&self) -> &S {
        &self.store
    }

    #[must_use]
    pub fn config(&self) -> &ChromeConfig {
        &self.config
    }

    // --- Theme ---

    /// Apply dark mode if storage says so. A light or missing preference
    /// leaves the page as it is.
    pub fn restore_theme(&mut self) -> Theme {
        if store::read_theme(&self.store, &self.config.storage_key).is_dark() {
            self.host.set_marker(&self.config.marker, true);
            self.theme = Theme::Dark;
        }
        debug!("page-chrome: restored theme {:?}", self.theme);
        self.theme
    }

    /// Flip the applied theme, persist it, and refresh the toggle control.
    pub fn toggle_theme(&mut self) -> Theme {
        let next = self.theme.toggled();
        self.host.set_marker(&self.config.marker, next.is_dark());
        self.theme = next;
        store::write_theme(&mut self.store, &self.config.storage_key, next);
        self.refresh_toggle_icon();
        debug!("page-chrome: toggled to {next:?}");
        next
    }

    /// Sync the toggle glyph and tooltip with the applied theme. No-op when
    /// the page has no toggle control.
    pub fn refresh_toggle_icon(&mut self) {
        let face = ToggleFace::for_theme(self.theme);
        if !self.host.set_toggle_face(&face) {
            debug!("page-chrome: no toggle control to refresh");
        }
    }

    // --- Navigation ---

    #[must_use]
    pub fn build_nav_bar(&self, page_title: Option<&str>) -> NavBar {
        nav::build_nav_bar(&self.config, page_title)
    }

    /// Inject the nav bar unless one already exists. Returns whether it injected.
    pub fn ensure_nav_bar_injected(&mut self, page_title: Option<&str>) -> bool {
        if self.host.has_nav_bar() {
            return false;
        }
        let nav = self.build_nav_bar(page_title);
        self.host.prepend_nav_bar(&nav);
        self.host.reserve_top_offset(&self.config.nav_offset);
        self.refresh_toggle_icon();
        debug!("page-chrome: injected nav bar titled {:?}", nav.left.title);
        true
    }

    /// Once-per-load entry point: restore the theme, then add navigation
    /// chrome to every page but the dashboard. Returns whether it injected.
    pub fn init(&mut self) -> bool {
        self.restore_theme();
        if title::is_home_path(&self.host.location_path(), &self.config.home_url) {
            return false;
        }
        let page_title = title::derive_nav_title(&self.host.document_title(), &self.config);
        self.ensure_nav_bar_injected(Some(&page_title))
    }

    /// Switch to `config` after an earlier `init`. Drops the injected nav bar
    /// and the previous theme marker, then runs `init` under the new settings.
    /// Returns whether it injected.
    pub fn reconfigure(&mut self, config: ChromeConfig) -> bool {
        if self.host.has_nav_bar() {
            self.host.remove_nav_bar();
        }
        self.host.set_marker(&self.config.marker, false);
        self.config = config;
        self.theme = Theme::from_dark(self.host.has_marker(&self.config.marker));
        debug!("page-chrome: reconfigured, storage key {:?}", self.config.storage_key);
        self.init()
    }

    /// Release the host and store.
    #[must_use]
    pub fn into_parts(self) -> (H, S) {
        (self.host, self.store)
    }
}
