use thiserror::Error;
use wasm_bindgen::JsValue;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum UiError {
    #[error("carousel needs at least one item")]
    EmptyCarousel,
    #[error("no browser window available")]
    NoWindow,
    #[error("element not found or detached: {0}")]
    MissingElement(&'static str),
    #[error("refusing to open url {0}")]
    InvalidUrl(String),
    #[error("browser call failed: {0}")]
    Js(String),
}

impl From<JsValue> for UiError {
    fn from(value: JsValue) -> Self {
        let message = value
            .as_string()
            .unwrap_or_else(|| format!("{:?}", value));
        UiError::Js(message)
    }
}

impl From<url::ParseError> for UiError {
    fn from(err: url::ParseError) -> Self {
        UiError::InvalidUrl(err.to_string())
    }
}
