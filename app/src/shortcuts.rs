// src/shortcuts.rs

use gloo::events::EventListener;
use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlFormElement, KeyboardEvent, VisibilityState};
use yew::NodeRef;

use crate::diag;
use crate::error::js_message;

pub fn is_submit_chord(ctrl: bool, meta: bool, key: &str) -> bool {
    (ctrl || meta) && key == "Enter"
}

pub fn visibility_message(hidden: bool) -> &'static str {
    if hidden {
        "Page hidden"
    } else {
        "Page visible"
    }
}

/// Submits the scan form on Ctrl/Cmd+Enter. `requestSubmit` goes through the
/// form's submit handler, so the empty-input gate still applies.
pub fn submit_on_chord(doc: &Document, form: NodeRef) -> EventListener {
    EventListener::new(doc, "keydown", move |event| {
        let Some(key_event) = event.dyn_ref::<KeyboardEvent>() else {
            return;
        };
        if !is_submit_chord(key_event.ctrl_key(), key_event.meta_key(), &key_event.key()) {
            return;
        }
        let Some(form) = form.cast::<HtmlFormElement>() else {
            return;
        };
        if let Err(e) = form.request_submit() {
            diag::error(&format!("keyboard submit failed: {}", js_message(&e)));
        }
    })
}

pub fn log_visibility(doc: &Document) -> EventListener {
    let target = doc.clone();
    EventListener::new(doc, "visibilitychange", move |_| {
        let hidden = target.visibility_state() == VisibilityState::Hidden;
        diag::info(visibility_message(hidden));
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ctrl_or_cmd_enter_submits() {
        assert!(is_submit_chord(true, false, "Enter"));
        assert!(is_submit_chord(false, true, "Enter"));
        assert!(is_submit_chord(true, true, "Enter"));
    }

    #[test]
    fn test_plain_enter_and_other_keys_ignored() {
        assert!(!is_submit_chord(false, false, "Enter"));
        assert!(!is_submit_chord(true, false, "a"));
        assert!(!is_submit_chord(false, true, "Tab"));
    }

    #[test]
    fn test_visibility_messages() {
        assert_eq!(visibility_message(true), "Page hidden");
        assert_eq!(visibility_message(false), "Page visible");
    }
}
