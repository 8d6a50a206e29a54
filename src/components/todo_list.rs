//! Todo List Component
//!
//! Active items with Edit / Save / Delete per row.

use leptos::prelude::*;

use crate::context::use_app_context;
use crate::models::TodoId;
use crate::reducer::Action;
use crate::store::{todo_text, use_todo_store, TodoStateStoreFields};

#[component]
pub fn TodoList() -> impl IntoView {
    let store = use_todo_store();

    view! {
        <ul class="todo-list">
            <For
                each=move || store.todos().with(|todos| todos.iter().map(|t| t.id).collect::<Vec<_>>())
                key=|id| *id
                children=move |id| view! { <TodoRow id=id /> }
            />
        </ul>
        <Show when=move || store.todos().with(|t| t.is_empty())>
            <p class="empty-hint">"Nothing to do yet."</p>
        </Show>
    }
}

/// A single active item
#[component]
fn TodoRow(id: TodoId) -> impl IntoView {
    let ctx = use_app_context();
    let store = ctx.store;
    let is_editing = Memo::new(move |_| store.editing().get() == Some(id));
    // Edits rewrite the text in place, the row stays mounted
    let text = Memo::new(move |_| store.todos().with(|todos| todo_text(todos, id)));

    view! {
        <li class=move || if is_editing.get() { "todo-row editing" } else { "todo-row" }>
            <span class="todo-text">{move || text.get()}</span>
            <div class="row-actions">
                <button class="btn btn-info btn-sm" on:click=move |_| ctx.dispatch(Action::BeginEdit(id))>
                    "Edit"
                </button>
                <button class="btn btn-warning btn-sm" on:click=move |_| ctx.dispatch(Action::Save(id))>
                    "Save"
                </button>
                <button class="btn btn-error btn-sm" on:click=move |_| ctx.dispatch(Action::Delete(id))>
                    "Delete"
                </button>
            </div>
        </li>
    }
}
