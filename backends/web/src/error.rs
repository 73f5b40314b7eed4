use core::fmt;

/// Error type produced by the web backend.
///
/// These never reach application code through the source contract; probing
/// failures are logged and absorbed. The type exists so the probe's
/// construction path can use `?` internally and so embedders driving the
/// probe directly get a real error.
#[derive(Debug, Clone)]
#[non_exhaustive]
pub enum WebError {
    /// The DOM APIs are not accessible (e.g. outside a browser).
    DomUnavailable,
    /// Wrapper around JavaScript exceptions.
    Js(String),
}

impl fmt::Display for WebError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DomUnavailable => write!(f, "DOM is not available"),
            Self::Js(msg) => write!(f, "JavaScript error: {msg}"),
        }
    }
}

impl std::error::Error for WebError {}

impl From<wasm_bindgen::JsValue> for WebError {
    fn from(value: wasm_bindgen::JsValue) -> Self {
        value
            .as_string()
            .map_or_else(|| Self::Js(format!("{value:?}")), Self::Js)
    }
}
