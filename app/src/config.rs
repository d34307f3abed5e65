// src/config.rs
// <script id="scanner-config" type="application/json"> in index.html

use serde::Deserialize;
use web_sys::window;

use crate::diag;
use crate::error::ConfigError;

pub const CONFIG_ELEMENT_ID: &str = "scanner-config";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TooltipMode {
    #[default]
    None,
    Bootstrap,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Sample {
    pub label: String,
    pub value: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ScannerConfig {
    pub action: String,
    pub method: String,
    /// How long the "Copied!" affordance stays up.
    pub copy_revert_ms: u32,
    pub tooltips: TooltipMode,
    pub samples: Vec<Sample>,
}

impl Default for ScannerConfig {
    fn default() -> Self {
        Self {
            action: "/scan".to_string(),
            method: "post".to_string(),
            copy_revert_ms: 2000,
            tooltips: TooltipMode::None,
            samples: default_samples(),
        }
    }
}

fn default_samples() -> Vec<Sample> {
    [
        ("EICAR test file (MD5)", "44d88612fea8a8f36de82e1278abb02f"),
        (
            "EICAR test file (SHA-256)",
            "275a021bbfb6489e54d471899f7db9d1663fc695ec2fe2a2c4538aabf651fd0f",
        ),
        ("Public DNS resolver", "8.8.8.8"),
    ]
    .into_iter()
    .map(|(label, value)| Sample {
        label: label.to_string(),
        value: value.to_string(),
    })
    .collect()
}

impl ScannerConfig {
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        if json.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_json::from_str(json)?)
    }

    fn read_from_dom() -> Result<Option<Self>, ConfigError> {
        let doc = window()
            .and_then(|w| w.document())
            .ok_or(ConfigError::NoDocument)?;
        let Some(el) = doc.get_element_by_id(CONFIG_ELEMENT_ID) else {
            return Ok(None);
        };
        Self::from_json(&el.text_content().unwrap_or_default()).map(Some)
    }

    pub fn load() -> Self {
        match Self::read_from_dom() {
            Ok(Some(cfg)) => cfg,
            Ok(None) => {
                diag::info(&format!(
                    "no #{CONFIG_ELEMENT_ID} block found, using defaults"
                ));
                Self::default()
            }
            Err(e) => {
                diag::error(&format!("{e}; using defaults"));
                Self::default()
            }
        }
    }
}
