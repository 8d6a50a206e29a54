//! Application Context
//!
//! Shared handles provided via Leptos Context API.

use std::sync::Arc;

use leptos::prelude::*;

use crate::presentation::PresentationSink;
use crate::reducer::Action;
use crate::store::{TodoStateStoreFields, TodoStore};

/// App-wide handles provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    /// State store - components read fields from it
    pub store: TodoStore,
    /// Where theme changes are mirrored
    sink: StoredValue<Arc<dyn PresentationSink>>,
    /// Footer credit, if configured
    pub credit: StoredValue<Option<String>>,
}

impl AppContext {
    pub fn new(
        store: TodoStore,
        sink: Arc<dyn PresentationSink>,
        credit: Option<String>,
    ) -> Self {
        Self {
            store,
            sink: StoredValue::new(sink),
            credit: StoredValue::new(credit),
        }
    }

    /// Run an action through the reducer
    ///
    /// Single-field actions write only that field; the rest go through the
    /// whole state.
    pub fn dispatch(&self, action: Action) {
        let store = self.store;
        match action {
            Action::SetDraft(text) => *store.draft().write() = text,
            Action::SwitchSection(section) => {
                log::debug!("[TODO] SwitchSection({:?})", section);
                *store.section().write() = section;
            }
            action => self.sink.with_value(|sink| {
                store.update(|state| state.apply(action, sink.as_ref()));
            }),
        }
    }

    /// Mirror the current theme without changing it (used at mount)
    pub fn sync_theme(&self) {
        let theme = self.store.with_untracked(|state| state.theme);
        self.sink.with_value(|sink| {
            if let Err(e) = sink.apply_theme(theme) {
                log::warn!("[THEME] initial apply failed: {}", e);
            }
        });
    }
}

/// Get the app context
pub fn use_app_context() -> AppContext {
    use_context::<AppContext>().expect("AppContext should be provided")
}
