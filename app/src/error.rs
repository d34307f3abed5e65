// src/error.rs
use thiserror::Error;
use wasm_bindgen::JsValue;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("no window/document available")]
    NoDocument,

    #[error("scanner config is not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Failures on either clipboard path. Neither is shown to the user.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ClipboardError {
    #[error("clipboard API unavailable")]
    Unavailable,

    #[error("clipboard write rejected: {0}")]
    Rejected(String),

    #[error("legacy copy failed: {0}")]
    Legacy(String),
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TooltipError {
    #[error("tooltip construction failed: {0}")]
    Construct(String),
}

pub fn js_message(value: &JsValue) -> String {
    value
        .as_string()
        .or_else(|| {
            js_sys::Reflect::get(value, &JsValue::from_str("message"))
                .ok()
                .and_then(|m| m.as_string())
        })
        .unwrap_or_else(|| format!("{value:?}"))
}
