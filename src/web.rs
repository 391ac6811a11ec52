//! Browser bindings and page-facing exports.
//!
//! Compiled only with the `hydrate` feature. [`DomHost`] and [`LocalStore`]
//! adapt the live document and `window.localStorage` to the controller's
//! traits; the `#[wasm_bindgen]` functions are the globals page markup calls.
//!
//! TRADE-OFFS
//! ==========
//! Host failures are logged and skipped, never thrown into page scripts.
//! The click handler and the `window` globals are leaked with `forget` since
//! they live as long as the page. Every entry point reads its settings from
//! [`crate::session`], so they all agree with the last `initPageChrome`.

use log::{info, warn};
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{Document, Element, HtmlElement, Storage, Window};

use crate::chrome::PageChrome;
use crate::config::{ChromeConfig, ThemeMarker};
use crate::consts::{
    GLOBAL_RESTORE, GLOBAL_TOGGLE, HOME_LINK_CLASS, NAV_CLASS, NAV_LEFT_CLASS, NAV_RIGHT_CLASS, PAGE_TITLE_CLASS,
    TOGGLE_CLASS, TOGGLE_ID,
};
use crate::error::ChromeError;
use crate::host::PageHost;
use crate::nav::{NavBar, ToggleFace};
use crate::session;
use crate::store::PreferenceStore;

// =============================================================
// Storage
// =============================================================

/// `window.localStorage`, or nothing when the browser denies it.
pub struct LocalStore {
    storage: Option<Storage>,
}

impl LocalStore {
    #[must_use]
    pub fn new(storage: Option<Storage>) -> Self {
        Self { storage }
    }
}

impl PreferenceStore for LocalStore {
    fn get(&self, key: &str) -> Option<String> {
        let storage = self.storage.as_ref()?;
        match storage.get_item(key) {
            Ok(value) => value,
            Err(err) => {
                warn!("page-chrome: {}", ChromeError::Storage(format!("{err:?}")));
                None
            }
        }
    }

    fn set(&mut self, key: &str, value: &str) {
        let Some(storage) = self.storage.as_ref() else {
            return;
        };
        if let Err(err) = storage.set_item(key, value) {
            warn!("page-chrome: {}", ChromeError::Storage(format!("{err:?}")));
        }
    }
}

// =============================================================
// Document
// =============================================================

/// The live document.
pub struct DomHost {
    document: Document,
}

impl DomHost {
    #[must_use]
    pub fn new(document: Document) -> Self {
        Self { document }
    }

    fn body(&self) -> Result<HtmlElement, ChromeError> {
        self.document.body().ok_or(ChromeError::NoBody)
    }

    fn try_set_marker(&self, marker: &ThemeMarker, dark: bool) -> Result<(), ChromeError> {
        let body = self.body()?;
        match (marker, dark) {
            (ThemeMarker::Class { name }, true) => body.class_list().add_1(name)?,
            (ThemeMarker::Class { name }, false) => body.class_list().remove_1(name)?,
            (ThemeMarker::Attribute { name, value }, true) => body.set_attribute(name, value)?,
            (ThemeMarker::Attribute { name, .. }, false) => body.remove_attribute(name)?,
        }
        Ok(())
    }

    fn try_prepend(&self, nav: &NavBar) -> Result<(), ChromeError> {
        let body = self.body()?;
        let element = render_nav_bar(&self.document, nav)?;
        body.insert_before(&element, body.first_child().as_ref())?;
        Ok(())
    }

    fn try_reserve(&self, offset: &str) -> Result<(), ChromeError> {
        self.body()?.style().set_property("padding-top", offset)?;
        Ok(())
    }
}

fn write_toggle_face(button: &Element, face: &ToggleFace) -> Result<(), ChromeError> {
    button.set_text_content(Some(&face.glyph));
    if let Some(tooltip) = &face.tooltip {
        button.set_attribute("title", tooltip)?;
    }
    Ok(())
}

impl PageHost for DomHost {
    fn location_path(&self) -> String {
        let Some(location) = self.document.location() else {
            return String::new();
        };
        match location.pathname() {
            Ok(path) => path,
            Err(err) => {
                warn!("page-chrome: {}", ChromeError::from(err));
                String::new()
            }
        }
    }

    fn document_title(&self) -> String {
        self.document.title()
    }

    fn has_marker(&self, marker: &ThemeMarker) -> bool {
        let Some(body) = self.document.body() else {
            return false;
        };
        match marker {
            ThemeMarker::Class { name } => body.class_list().contains(name),
            ThemeMarker::Attribute { name, value } => body.get_attribute(name).as_ref() == Some(value),
        }
    }

    fn set_marker(&mut self, marker: &ThemeMarker, dark: bool) {
        if let Err(err) = self.try_set_marker(marker, dark) {
            warn!("page-chrome: theme marker not applied: {err}");
        }
    }

    fn has_nav_bar(&self) -> bool {
        match self.document.query_selector(&format!(".{NAV_CLASS}")) {
            Ok(found) => found.is_some(),
            Err(err) => {
                warn!("page-chrome: {}", ChromeError::from(err));
                false
            }
        }
    }

    fn remove_nav_bar(&mut self) {
        match self.document.query_selector(&format!(".{NAV_CLASS}")) {
            Ok(Some(nav)) => nav.remove(),
            Ok(None) => {}
            Err(err) => warn!("page-chrome: nav bar not removed: {}", ChromeError::from(err)),
        }
    }

    fn prepend_nav_bar(&mut self, nav: &NavBar) {
        if let Err(err) = self.try_prepend(nav) {
            warn!("page-chrome: nav bar not injected: {err}");
        }
    }

    fn reserve_top_offset(&mut self, offset: &str) {
        if let Err(err) = self.try_reserve(offset) {
            warn!("page-chrome: top offset not reserved: {err}");
        }
    }

    fn set_toggle_face(&mut self, face: &ToggleFace) -> bool {
        let Some(button) = self.document.get_element_by_id(TOGGLE_ID) else {
            return false;
        };
        if let Err(err) = write_toggle_face(&button, face) {
            warn!("page-chrome: toggle not refreshed: {err}");
        }
        true
    }
}

/// Materialize `nav` as
/// `nav.nav-bar > (div.nav-left > (a.home-btn, span.page-title), div.nav-right > button#theme-toggle-btn)`.
fn render_nav_bar(document: &Document, nav: &NavBar) -> Result<Element, ChromeError> {
    let root = document.create_element("nav")?;
    root.set_class_name(NAV_CLASS);

    let left = document.create_element("div")?;
    left.set_class_name(NAV_LEFT_CLASS);
    let home = document.create_element("a")?;
    home.set_class_name(HOME_LINK_CLASS);
    home.set_attribute("href", &nav.left.home_href)?;
    home.set_text_content(Some(&nav.left.home_label));
    let title = document.create_element("span")?;
    title.set_class_name(PAGE_TITLE_CLASS);
    title.set_text_content(Some(&nav.left.title));
    left.append_child(&home)?;
    left.append_child(&title)?;

    let right = document.create_element("div")?;
    right.set_class_name(NAV_RIGHT_CLASS);
    let button = document.create_element("button")?;
    button.set_id(TOGGLE_ID);
    button.set_class_name(TOGGLE_CLASS);
    write_toggle_face(&button, &nav.right.toggle)?;
    wire_toggle(&button)?;
    right.append_child(&button)?;

    root.append_child(&left)?;
    root.append_child(&right)?;
    Ok(root)
}

fn wire_toggle(button: &Element) -> Result<(), ChromeError> {
    let on_click = Closure::<dyn FnMut()>::new(toggle_dark_mode);
    button.add_event_listener_with_callback("click", on_click.as_ref().unchecked_ref())?;
    on_click.forget();
    Ok(())
}

// =============================================================
// Entry points
// =============================================================

fn live_page(config: ChromeConfig) -> Result<PageChrome<DomHost, LocalStore>, ChromeError> {
    let window = web_sys::window().ok_or(ChromeError::NoWindow)?;
    let document = window.document().ok_or(ChromeError::NoDocument)?;
    let storage = match window.local_storage() {
        Ok(storage) => storage,
        Err(err) => {
            warn!("page-chrome: {}", ChromeError::Storage(format!("{err:?}")));
            None
        }
    };
    Ok(PageChrome::new(DomHost::new(document), LocalStore::new(storage), config))
}

fn with_live_page(config: ChromeConfig, f: impl FnOnce(&mut PageChrome<DomHost, LocalStore>)) {
    match live_page(config) {
        Ok(mut chrome) => f(&mut chrome),
        Err(err) => warn!("page-chrome: {err}"),
    }
}

/// Run `action` now, or once `DOMContentLoaded` fires if the document is still parsing.
fn run_when_ready(action: impl FnOnce() + 'static) -> Result<(), ChromeError> {
    let document = web_sys::window().ok_or(ChromeError::NoWindow)?.document().ok_or(ChromeError::NoDocument)?;
    if document.ready_state() != "loading" {
        action();
        return Ok(());
    }
    let on_ready = Closure::<dyn FnMut()>::once(action);
    document.add_event_listener_with_callback("DOMContentLoaded", on_ready.as_ref().unchecked_ref())?;
    on_ready.forget();
    Ok(())
}

fn install_global(window: &Window, name: &str, entry: fn()) -> Result<(), ChromeError> {
    let callback = Closure::<dyn FnMut()>::new(entry);
    js_sys::Reflect::set(window, &JsValue::from_str(name), callback.as_ref())?;
    callback.forget();
    Ok(())
}

/// Put the toggle and restore entry points on `window` for inline markup
/// such as `onclick="toggleDarkMode()"`.
fn install_globals() -> Result<(), ChromeError> {
    let window = web_sys::window().ok_or(ChromeError::NoWindow)?;
    install_global(&window, GLOBAL_TOGGLE, toggle_dark_mode)?;
    install_global(&window, GLOBAL_RESTORE, apply_stored_theme)?;
    Ok(())
}

fn decode_options(options: JsValue) -> Result<ChromeConfig, ChromeError> {
    if options.is_undefined() || options.is_null() {
        return Ok(ChromeConfig::default());
    }
    serde_wasm_bindgen::from_value(options).map_err(|err| ChromeError::Config(err.to_string()))
}

/// Flip the theme on the live page. Also installed as `window.toggleDarkMode`.
#[wasm_bindgen(js_name = toggleDarkMode)]
pub fn toggle_dark_mode() {
    with_live_page(session::active_config(), |chrome| {
        chrome.toggle_theme();
    });
}

/// Re-apply the stored theme. Also installed as `window.applyStoredTheme`.
#[wasm_bindgen(js_name = applyStoredTheme)]
pub fn apply_stored_theme() {
    with_live_page(session::active_config(), |chrome| {
        chrome.restore_theme();
    });
}

/// Switch the page to page-specific options. Chrome injected by the
/// automatic start-up init is rebuilt under the new settings. Bad options
/// fall back to defaults.
#[wasm_bindgen(js_name = initPageChrome)]
pub fn init_page_chrome(options: JsValue) {
    let config = match decode_options(options) {
        Ok(config) => config,
        Err(err) => {
            warn!("page-chrome: {err}; using defaults");
            ChromeConfig::default()
        }
    };
    let previous = session::set_active_config(config.clone());
    let ready = run_when_ready(move || {
        with_live_page(previous, |chrome| {
            if chrome.reconfigure(config) {
                info!("page-chrome: navigation injected with page options");
            }
        });
    });
    if let Err(err) = ready {
        warn!("page-chrome: {err}");
    }
}

#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    if let Err(err) = console_log::init_with_level(log::Level::Info) {
        web_sys::console::warn_1(&JsValue::from_str(&err.to_string()));
    }
    if let Err(err) = install_globals() {
        warn!("page-chrome: globals not installed: {err}");
    }
    let config = session::active_config();
    let ready = run_when_ready(move || {
        with_live_page(config, |chrome| {
            if chrome.init() {
                info!("page-chrome: navigation injected");
            }
        });
    });
    if let Err(err) = ready {
        warn!("page-chrome: {err}");
    }
}
