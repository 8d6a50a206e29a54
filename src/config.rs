//! Widget Configuration
//!
//! Optional JSON embedded in the host page:
//!
//! ```html
//! <script type="application/json" id="todo-config">
//!   { "initial_theme": "dark", "credit": "Jane Doe", "log_level": "debug" }
//! </script>
//! ```
//!
//! Every field has a default, so a missing element or an empty object is fine.

use serde::Deserialize;

use crate::error::{self, Result};
use crate::models::{Section, Theme};

/// Id of the script element holding the JSON
pub const CONFIG_ELEMENT_ID: &str = "todo-config";

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct WidgetConfig {
    pub initial_theme: Theme,
    pub initial_section: Section,
    /// Attribute set on `<html>` for the stylesheet
    pub theme_attribute: String,
    /// Footer credit name; no footer when absent
    pub credit: Option<String>,
    pub log_level: String,
}

impl Default for WidgetConfig {
    fn default() -> Self {
        Self {
            initial_theme: Theme::Light,
            initial_section: Section::Todo,
            theme_attribute: "data-theme".to_string(),
            credit: None,
            log_level: "info".to_string(),
        }
    }
}

impl WidgetConfig {
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Reads the config element from the page, `None` if it is absent
    pub fn from_document() -> Result<Option<Self>> {
        let Some(element) = error::document()?.get_element_by_id(CONFIG_ELEMENT_ID) else {
            return Ok(None);
        };
        let text = element.text_content().unwrap_or_default();
        if text.trim().is_empty() {
            return Ok(Some(Self::default()));
        }
        Self::from_json(&text).map(Some)
    }

    /// Config from the page, falling back to defaults on any problem
    pub fn load() -> Self {
        match Self::from_document() {
            Ok(Some(config)) => config,
            Ok(None) => Self::default(),
            Err(e) => {
                log::warn!("[CONFIG] using defaults: {}", e);
                Self::default()
            }
        }
    }

    /// Parsed log level, `Info` if unrecognised
    pub fn level_filter(&self) -> log::LevelFilter {
        self.log_level.parse().unwrap_or(log::LevelFilter::Info)
    }
}
