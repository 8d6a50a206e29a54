//! Todo List App
//!
//! Root component: sidebar on the left, active section on the right.

use std::sync::Arc;

use leptos::prelude::*;
use reactive_stores::Store;

use crate::components::{SavedList, Sidebar, TodoForm, TodoList};
use crate::config::WidgetConfig;
use crate::context::AppContext;
use crate::models::Section;
use crate::presentation::DocumentThemeSink;
use crate::store::{TodoState, TodoStateStoreFields};

#[component]
pub fn App(config: WidgetConfig) -> impl IntoView {
    // State
    let store = Store::new(TodoState::new(config.initial_theme, config.initial_section));
    let sink = Arc::new(DocumentThemeSink::new(config.theme_attribute));
    let ctx = AppContext::new(store, sink, config.credit);

    // Provide context to all children
    provide_context(store);
    provide_context(ctx);

    // The attribute only changes on toggle, so mirror the initial theme once
    ctx.sync_theme();

    let section = Memo::new(move |_| store.section().get());

    view! {
        <div class="app-layout">
            <Sidebar />

            <main class="main-content">
                <div class="panel">
                    <h1 class="panel-title">{move || section.get().title()}</h1>

                    {move || match section.get() {
                        Section::Todo => view! {
                            <TodoForm />
                            <TodoList />
                        }.into_any(),
                        Section::Saved => view! { <SavedList /> }.into_any(),
                    }}
                </div>
            </main>
        </div>
    }
}
