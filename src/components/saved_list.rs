//! Saved List Component

use leptos::prelude::*;

use crate::context::use_app_context;
use crate::reducer::Action;
use crate::store::{use_todo_store, TodoStateStoreFields};

/// Archived items, each with a Delete button
#[component]
pub fn SavedList() -> impl IntoView {
    let ctx = use_app_context();
    let store = use_todo_store();

    view! {
        <ul class="todo-list saved">
            <For
                each=move || store.saved_todos().get()
                key=|item| item.id
                children=move |item| {
                    let id = item.id;
                    view! {
                        <li class="todo-row">
                            <span class="todo-text">{item.text}</span>
                            <button class="btn btn-error btn-sm" on:click=move |_| ctx.dispatch(Action::DeleteSaved(id))>
                                "Delete"
                            </button>
                        </li>
                    }
                }
            />
        </ul>
        <Show when=move || store.saved_todos().with(|t| t.is_empty())>
            <p class="empty-hint">"No saved items."</p>
        </Show>
    }
}
