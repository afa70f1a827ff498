use std::fmt;

use wasm_bindgen::JsValue;

/// Failures talking to the DOM.
#[derive(Clone, Debug, PartialEq)]
pub enum WebPlatformError {
    /// No global `window`, e.g. inside a worker.
    NoWindow,
    NoDocument,
    /// A created element did not have the expected interface.
    UnexpectedElement(&'static str),
    /// A DOM call threw.
    Js(String),
}

impl fmt::Display for WebPlatformError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WebPlatformError::NoWindow => f.write_str("no global window exists"),
            WebPlatformError::NoDocument => f.write_str("window has no document"),
            WebPlatformError::UnexpectedElement(tag) => {
                write!(f, "<{}> did not create the expected element type", tag)
            }
            WebPlatformError::Js(message) => write!(f, "DOM call failed: {}", message),
        }
    }
}

impl std::error::Error for WebPlatformError {}

impl From<JsValue> for WebPlatformError {
    fn from(value: JsValue) -> Self {
        let message = value
            .as_string()
            .unwrap_or_else(|| format!("{:?}", value));
        WebPlatformError::Js(message)
    }
}

impl From<WebPlatformError> for JsValue {
    fn from(error: WebPlatformError) -> Self {
        JsValue::from_str(&error.to_string())
    }
}
