//! Shared page chrome for the US trade data visualization pages.
//!
//! This crate is compiled to WebAssembly and loaded by every static chart
//! page. On load it restores the persisted dark/light preference and, on
//! every page except the dashboard, injects a navigation bar with a home
//! link, the page title, and a theme toggle.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`chrome`] | The [`chrome::PageChrome`] controller (restore, toggle, inject, init) |
//! | [`theme`] | Two-state [`theme::Theme`] and its toggle glyph/tooltip |
//! | [`config`] | Overridable identifiers and the dark-mode [`config::ThemeMarker`] |
//! | [`store`] | Narrow key/value [`store::PreferenceStore`] adapter |
//! | [`host`] | Narrow DOM contract [`host::PageHost`] plus an in-memory document |
//! | [`nav`] | Structured navigation fragment |
//! | [`session`] | Config shared by the page-facing entry points |
//! | [`title`] | Home-page detection and title cleanup |
//! | [`consts`] | Fixed identifiers shared with the page stylesheets |
//! | `web` | Browser bindings and `wasm-bindgen` exports (`hydrate` feature) |

pub mod chrome;
pub mod config;
pub mod consts;
pub mod error;
pub mod host;
pub mod nav;
pub mod session;
pub mod store;
pub mod theme;
pub mod title;

#[cfg(feature = "hydrate")]
pub mod web;

pub use chrome::PageChrome;
pub use config::{ChromeConfig, ThemeMarker};
pub use error::ChromeError;
pub use theme::Theme;
