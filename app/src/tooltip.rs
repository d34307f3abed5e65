// src/tooltip.rs
// provider comes from page config, never from sniffing window.bootstrap

use std::rc::Rc;

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{window, Element};

use crate::config::TooltipMode;
use crate::diag;
use crate::error::{js_message, TooltipError};

pub const TOOLTIP_SELECTOR: &str = r#"[data-bs-toggle="tooltip"]"#;

pub trait TooltipProvider {
    fn name(&self) -> &'static str;
    fn attach(&self, el: &Element) -> Result<(), TooltipError>;
}

pub struct NoTooltips;

impl TooltipProvider for NoTooltips {
    fn name(&self) -> &'static str {
        "none"
    }

    fn attach(&self, _el: &Element) -> Result<(), TooltipError> {
        Ok(())
    }
}

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = bootstrap, js_name = Tooltip)]
    type BootstrapTooltip;

    #[wasm_bindgen(catch, constructor, js_namespace = bootstrap, js_class = "Tooltip")]
    fn new(el: &Element) -> Result<BootstrapTooltip, JsValue>;
}

pub struct BootstrapTooltips;

impl TooltipProvider for BootstrapTooltips {
    fn name(&self) -> &'static str {
        "bootstrap"
    }

    fn attach(&self, el: &Element) -> Result<(), TooltipError> {
        // Bootstrap keeps the instance on the element itself
        BootstrapTooltip::new(el)
            .map(drop)
            .map_err(|e| TooltipError::Construct(js_message(&e)))
    }
}

#[derive(Clone)]
pub struct Tooltips(Rc<dyn TooltipProvider>);

impl Tooltips {
    pub fn new(provider: impl TooltipProvider + 'static) -> Self {
        Self(Rc::new(provider))
    }

    pub fn for_mode(mode: TooltipMode) -> Self {
        match mode {
            TooltipMode::None => Self::new(NoTooltips),
            TooltipMode::Bootstrap => Self::new(BootstrapTooltips),
        }
    }

    pub fn name(&self) -> &'static str {
        self.0.name()
    }

    // failures are logged and skipped
    pub fn activate_all(&self) -> usize {
        let Some(doc) = window().and_then(|w| w.document()) else {
            return 0;
        };
        let Ok(nodes) = doc.query_selector_all(TOOLTIP_SELECTOR) else {
            return 0;
        };

        let mut attached = 0;
        for i in 0..nodes.length() {
            let Some(el) = nodes.get(i).and_then(|n| n.dyn_into::<Element>().ok()) else {
                continue;
            };
            match self.0.attach(&el) {
                Ok(()) => attached += 1,
                Err(e) => diag::warn(&format!("{} tooltips: {e}", self.name())),
            }
        }
        attached
    }
}

impl Default for Tooltips {
    fn default() -> Self {
        Self::new(NoTooltips)
    }
}

impl PartialEq for Tooltips {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}
