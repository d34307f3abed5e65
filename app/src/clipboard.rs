// src/clipboard.rs

use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{window, HtmlDocument, HtmlTextAreaElement};

use crate::diag;
use crate::error::{js_message, ClipboardError};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CopyMethod {
    Clipboard,
    Legacy,
}

// no trimming: what is in data-copy is what gets copied
pub fn copy_payload(data_copy: &str) -> Option<&str> {
    (!data_copy.is_empty()).then_some(data_copy)
}

async fn write_via_api(text: &str) -> Result<(), ClipboardError> {
    let w = window().ok_or(ClipboardError::Unavailable)?;
    let nav = w.navigator();

    // insecure origins and older browsers have no navigator.clipboard at all
    let present = js_sys::Reflect::get(&nav, &JsValue::from_str("clipboard"))
        .map(|v| !v.is_undefined() && !v.is_null())
        .unwrap_or(false);
    if !present {
        return Err(ClipboardError::Unavailable);
    }

    JsFuture::from(nav.clipboard().write_text(text))
        .await
        .map_err(|e| ClipboardError::Rejected(js_message(&e)))?;
    Ok(())
}

fn write_via_selection(text: &str) -> Result<(), ClipboardError> {
    let legacy = |msg: &str| ClipboardError::Legacy(msg.to_string());

    let doc = window()
        .and_then(|w| w.document())
        .ok_or_else(|| legacy("no document"))?;
    let body = doc.body().ok_or_else(|| legacy("no body"))?;
    let html_doc = doc
        .dyn_ref::<HtmlDocument>()
        .ok_or_else(|| legacy("document is not an HTML document"))?;

    let area: HtmlTextAreaElement = doc
        .create_element("textarea")
        .map_err(|e| ClipboardError::Legacy(js_message(&e)))?
        .dyn_into()
        .map_err(|_| legacy("created element is not a textarea"))?;
    area.set_value(text);
    body.append_child(&area)
        .map_err(|e| ClipboardError::Legacy(js_message(&e)))?;
    area.select();

    let copied = html_doc.exec_command("copy");
    let _ = body.remove_child(&area);

    match copied {
        Ok(true) => Ok(()),
        Ok(false) => Err(legacy("execCommand(\"copy\") returned false")),
        Err(e) => Err(ClipboardError::Legacy(js_message(&e))),
    }
}

pub async fn copy_text(text: &str) -> Result<CopyMethod, ClipboardError> {
    match write_via_api(text).await {
        Ok(()) => return Ok(CopyMethod::Clipboard),
        Err(ClipboardError::Unavailable) => diag::warn("clipboard API unavailable, using fallback"),
        Err(e) => diag::error(&format!("Failed to copy text: {e}")),
    }

    write_via_selection(text)
        .map(|()| CopyMethod::Legacy)
        .inspect_err(|e| diag::error(&format!("Fallback copy failed: {e}")))
}
