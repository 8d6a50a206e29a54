//! Error Types
//!
//! Failures at the edges of the widget: DOM access and configuration.
//! State updates themselves cannot fail.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum WidgetError {
    /// No global `window` (not running in a browser)
    #[error("window is not available")]
    NoWindow,

    #[error("document is not available")]
    NoDocument,

    /// A DOM call was rejected by the browser
    #[error("DOM error: {0}")]
    Dom(String),

    #[error("Config error: {0}")]
    Config(#[from] serde_json::Error),
}

impl From<wasm_bindgen::JsValue> for WidgetError {
    fn from(value: wasm_bindgen::JsValue) -> Self {
        WidgetError::Dom(format!("{:?}", value))
    }
}

pub type Result<T> = std::result::Result<T, WidgetError>;

/// Current `document`
pub fn document() -> Result<web_sys::Document> {
    web_sys::window()
        .ok_or(WidgetError::NoWindow)?
        .document()
        .ok_or(WidgetError::NoDocument)
}
