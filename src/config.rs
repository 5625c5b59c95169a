//! Board configuration supplied by the host page.
//!
//! The page may embed a JSON block such as
//! `<script id="lights-out-config" type="application/json">{"rows": 6}</script>`.
//! Missing fields take the defaults below; a missing or broken block means
//! all defaults.

use serde::Deserialize;
use std::fmt;

pub const CONFIG_ELEMENT_ID: &str = "lights-out-config";

#[derive(Clone, Copy, Debug, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct BoardConfig {
    pub rows: usize,
    pub cols: usize,
    pub chance_light_starts_on: f64,
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            rows: 5,
            cols: 5,
            chance_light_starts_on: 0.25,
        }
    }
}

#[derive(Debug)]
pub enum ConfigError {
    Json(serde_json::Error),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Json(e) => write!(f, "invalid board config: {}", e),
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::Json(e) => Some(e),
        }
    }
}

impl From<serde_json::Error> for ConfigError {
    fn from(e: serde_json::Error) -> Self {
        ConfigError::Json(e)
    }
}

impl BoardConfig {
    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(raw)?)
    }

    /// Reads the config block from the current document, falling back to defaults.
    pub fn from_document() -> Self {
        let raw = web_sys::window()
            .and_then(|win| win.document())
            .and_then(|doc| doc.get_element_by_id(CONFIG_ELEMENT_ID))
            .and_then(|el| el.text_content());
        match raw {
            Some(raw) if !raw.trim().is_empty() => Self::from_json(&raw).unwrap_or_else(|e| {
                crate::util::clog(&format!("{}; using defaults", e));
                Self::default()
            }),
            _ => Self::default(),
        }
    }
}
