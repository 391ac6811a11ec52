//! Fixed identifiers shared by the page chrome and the page stylesheets.

// ── Storage ─────────────────────────────────────────────────────

/// `localStorage` key holding `"true"` / `"false"`.
pub const STORAGE_KEY: &str = "tradeVizDarkMode";

// ── Navigation ──────────────────────────────────────────────────

/// Dashboard page; both the home-link target and the home-page discriminator.
pub const HOME_URL: &str = "index.html";
pub const HOME_LABEL: &str = "🏠 Dashboard";
pub const DEFAULT_TITLE: &str = "Visualization";

/// Reserved space above page content so the fixed nav does not overlap it.
pub const NAV_OFFSET: &str = "70px";

pub const NAV_CLASS: &str = "nav-bar";
pub const NAV_LEFT_CLASS: &str = "nav-left";
pub const NAV_RIGHT_CLASS: &str = "nav-right";
pub const HOME_LINK_CLASS: &str = "home-btn";
pub const PAGE_TITLE_CLASS: &str = "page-title";
pub const TOGGLE_ID: &str = "theme-toggle-btn";
pub const TOGGLE_CLASS: &str = "theme-toggle";

// ── Title cleanup ───────────────────────────────────────────────

pub const TITLE_SUFFIX: &str = " - US Trade Data";
pub const TITLE_FIND: &str = "plotly";
pub const TITLE_REPLACE: &str = "Chart";

// ── Theme ───────────────────────────────────────────────────────

/// Body class recognized by the stylesheets as dark mode.
pub const DARK_CLASS: &str = "dark-mode";

/// Shown while dark mode is active.
pub const GLYPH_SUN: &str = "☀️";
/// Shown while light mode is active.
pub const GLYPH_MOON: &str = "🌙";
pub const TOOLTIP_TO_LIGHT: &str = "Switch to Light Mode";
pub const TOOLTIP_TO_DARK: &str = "Switch to Dark Mode";

// ── Page globals ────────────────────────────────────────────────

/// `window` property page markup calls to flip the theme.
pub const GLOBAL_TOGGLE: &str = "toggleDarkMode";
/// `window` property page markup calls to re-apply the stored theme.
pub const GLOBAL_RESTORE: &str = "applyStoredTheme";
