use wasm_bindgen::JsValue;

/// Error returned when a widget cannot be attached or a notification cannot be delivered.
///
/// Geometry never fails: out-of-range numbers are clamped. Only the DOM
/// boundary and option decoding can go wrong.
#[derive(Debug, thiserror::Error)]
pub enum WidgetError {
    /// A DOM object the widget needs (document, body, a created element) is unavailable.
    #[error("{0} is not available")]
    MissingElement(&'static str),
    /// A DOM call threw.
    #[error("DOM operation failed: {0}")]
    Dom(String),
    /// The options object could not be decoded.
    #[error("invalid configuration: {0}")]
    InvalidConfig(#[source] serde_json::Error),
    /// An event payload could not be encoded.
    #[error("failed to encode event detail: {0}")]
    Encode(#[source] serde_json::Error),
}

impl From<JsValue> for WidgetError {
    fn from(value: JsValue) -> Self {
        Self::Dom(value.as_string().unwrap_or_else(|| format!("{value:?}")))
    }
}

impl From<WidgetError> for JsValue {
    fn from(err: WidgetError) -> Self {
        js_sys::Error::new(&err.to_string()).into()
    }
}
