/// Errors from browser API calls

use thiserror::Error;
use wasm_bindgen::JsValue;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum PlatformError {
    /// The browser API rejected the call, e.g. the tab closed mid-call
    #[error("browser API call failed: {0}")]
    Js(String),

    #[error("failed to convert browser data: {0}")]
    Decode(String),

    #[error("no active tab in the current window")]
    NoActiveTab,
}

impl From<JsValue> for PlatformError {
    fn from(value: JsValue) -> Self {
        PlatformError::Js(format!("{:?}", value))
    }
}

impl From<serde_wasm_bindgen::Error> for PlatformError {
    fn from(err: serde_wasm_bindgen::Error) -> Self {
        PlatformError::Decode(err.to_string())
    }
}
