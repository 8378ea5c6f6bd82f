//! Structured error types for tablescroller.
//!
//! Only the precondition checks on [`crate::scroller::attach`] are part of the
//! widget contract. The remaining variants come from the host document and
//! from the markup loader used by the headless host.

/// All errors that can occur while building a table scroller.
#[derive(Debug, thiserror::Error)]
pub enum ScrollerError {
    /// The source element is missing or is not a `<table>`.
    #[error("Invalid table element specified")]
    InvalidElement,

    /// No options record was supplied.
    #[error("Options must be specified")]
    MissingOptions,

    /// The options record could not be read (e.g. a negative pinned count from JS).
    #[error("Invalid options: {0}")]
    Options(String),

    /// XML parsing error from quick-xml.
    #[error("Markup parsing: {0}")]
    Xml(#[from] quick_xml::Error),

    /// Structurally broken markup (unbalanced or unclosed tags).
    #[error("Malformed markup: {0}")]
    Markup(String),

    /// Reading or writing a file (CLI only).
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A host document operation failed.
    #[error("DOM operation failed: {0}")]
    Dom(String),
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, ScrollerError>;

#[cfg(target_arch = "wasm32")]
impl From<ScrollerError> for wasm_bindgen::JsValue {
    fn from(e: ScrollerError) -> Self {
        wasm_bindgen::JsValue::from_str(&e.to_string())
    }
}

#[cfg(target_arch = "wasm32")]
impl From<wasm_bindgen::JsValue> for ScrollerError {
    fn from(value: wasm_bindgen::JsValue) -> Self {
        Self::Dom(value.as_string().unwrap_or_else(|| format!("{value:?}")))
    }
}
