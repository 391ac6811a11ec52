//! Errors raised by the browser bindings.
//!
//! None of these reach page scripts: the exports log them at `warn` and
//! skip the dependent effect.

/// Error returned by the web host helpers.
#[derive(Debug, thiserror::Error)]
pub enum ChromeError {
    #[error("no global window")]
    NoWindow,
    #[error("window has no document")]
    NoDocument,
    #[error("document has no body")]
    NoBody,
    /// `localStorage` is missing or rejected the access.
    #[error("storage unavailable: {0}")]
    Storage(String),
    /// A DOM call threw.
    #[error("dom operation failed: {0}")]
    Dom(String),
    /// Options passed to `initPageChrome` did not decode.
    #[error("invalid chrome options: {0}")]
    Config(String),
}

#[cfg(feature = "hydrate")]
impl From<wasm_bindgen::JsValue> for ChromeError {
    fn from(value: wasm_bindgen::JsValue) -> Self {
        Self::Dom(format!("{value:?}"))
    }
}
