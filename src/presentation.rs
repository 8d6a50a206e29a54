//! Presentation Sink
//!
//! The single place the widget reaches outside its own state: mirroring the
//! theme onto a document-level attribute read by the stylesheet.

use crate::error::{self, Result, WidgetError};
use crate::models::Theme;

/// Capability that makes the current theme visible to the page
pub trait PresentationSink: Send + Sync {
    fn apply_theme(&self, theme: Theme) -> Result<()>;
}

/// Writes the theme onto `<html>` as an attribute (`data-theme` by default)
#[derive(Debug, Clone)]
pub struct DocumentThemeSink {
    attribute: String,
}

impl DocumentThemeSink {
    pub fn new(attribute: impl Into<String>) -> Self {
        Self { attribute: attribute.into() }
    }
}

impl PresentationSink for DocumentThemeSink {
    fn apply_theme(&self, theme: Theme) -> Result<()> {
        let root = error::document()?
            .document_element()
            .ok_or(WidgetError::NoDocument)?;
        root.set_attribute(&self.attribute, theme.as_str())?;
        log::debug!("[THEME] {}={}", self.attribute, theme.as_str());
        Ok(())
    }
}
