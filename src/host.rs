//! The DOM contract the controller consumes.
//!
//! SYSTEM CONTEXT
//! ==============
//! [`PageHost`] keeps the controller free of web-sys so it can be tested
//! natively. `web::DomHost` implements it over the live document;
//! [`MemoryHost`] is a minimal in-memory page used by tests.

use std::collections::{BTreeMap, BTreeSet};

use crate::config::ThemeMarker;
use crate::nav::{NavBar, ToggleFace};

pub trait PageHost {
    /// `location.pathname` of the current page.
    fn location_path(&self) -> String;

    /// `document.title`, empty when unset.
    fn document_title(&self) -> String;

    fn has_marker(&self, marker: &ThemeMarker) -> bool;

    fn set_marker(&mut self, marker: &ThemeMarker, dark: bool);

    /// Whether a navigation fragment already exists anywhere in the document.
    fn has_nav_bar(&self) -> bool;

    /// Insert `nav` as the first child of the body.
    fn prepend_nav_bar(&mut self, nav: &NavBar);

    /// Remove the injected navigation fragment, if any.
    fn remove_nav_bar(&mut self);

    /// Reserve vertical space at the top of the body.
    fn reserve_top_offset(&mut self, offset: &str);

    /// Write glyph and tooltip to the toggle control. Returns `false` when
    /// the page has no toggle control.
    fn set_toggle_face(&mut self, face: &ToggleFace) -> bool;
}

/// In-memory page: a body with classes, attributes, and injected nav bars.
#[derive(Clone, Debug, Default)]
pub struct MemoryHost {
    pub path: String,
    pub title: String,
    pub classes: BTreeSet<String>,
    pub attributes: BTreeMap<String, String>,
    /// Injected fragments, first child first.
    pub nav_bars: Vec<NavBar>,
    pub padding_top: Option<String>,
}

impl MemoryHost {
    #[must_use]
    pub fn new(path: &str, title: &str) -> Self {
        Self { path: path.to_string(), title: title.to_string(), ..Self::default() }
    }

    /// Face of the toggle control, if one is present.
    #[must_use]
    pub fn toggle_face(&self) -> Option<&ToggleFace> {
        self.nav_bars.first().map(|nav| &nav.right.toggle)
    }
}

impl PageHost for MemoryHost {
    fn location_path(&self) -> String {
        self.path.clone()
    }

    fn document_title(&self) -> String {
        self.title.clone()
    }

    fn has_marker(&self, marker: &ThemeMarker) -> bool {
        match marker {
            ThemeMarker::Class { name } => self.classes.contains(name),
            ThemeMarker::Attribute { name, value } => self.attributes.get(name) == Some(value),
        }
    }

    fn set_marker(&mut self, marker: &ThemeMarker, dark: bool) {
        match (marker, dark) {
            (ThemeMarker::Class { name }, true) => {
                self.classes.insert(name.clone());
            }
            (ThemeMarker::Class { name }, false) => {
                self.classes.remove(name);
            }
            (ThemeMarker::Attribute { name, value }, true) => {
                self.attributes.insert(name.clone(), value.clone());
            }
            (ThemeMarker::Attribute { name, .. }, false) => {
                self.attributes.remove(name);
            }
        }
    }

    fn has_nav_bar(&self) -> bool {
        !self.nav_bars.is_empty()
    }

    fn prepend_nav_bar(&mut self, nav: &NavBar) {
        self.nav_bars.insert(0, nav.clone());
    }

    fn remove_nav_bar(&mut self) {
        if !self.nav_bars.is_empty() {
            self.nav_bars.remove(0);
        }
    }

    fn reserve_top_offset(&mut self, offset: &str) {
        self.padding_top = Some(offset.to_string());
    }

    fn set_toggle_face(&mut self, face: &ToggleFace) -> bool {
        match self.nav_bars.first_mut() {
            Some(nav) => {
                nav.right.toggle = face.clone();
                true
            }
            None => false,
        }
    }
}
