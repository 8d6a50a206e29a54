//! Todo Form Component
//!
//! The single text input shared by adding and editing.

use leptos::prelude::*;

use crate::context::use_app_context;
use crate::reducer::Action;
use crate::store::TodoStateStoreFields;

#[component]
pub fn TodoForm() -> impl IntoView {
    let ctx = use_app_context();
    let draft = Memo::new(move |_| ctx.store.draft().get());
    let editing = Memo::new(move |_| ctx.store.editing().get().is_some());

    // Enter in the input submits too
    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        ctx.dispatch(Action::Submit);
    };

    view! {
        <form class="todo-form" on:submit=on_submit>
            <input
                type="text"
                class="input input-bordered w-full shadow-inner"
                placeholder="Add or edit a task"
                prop:value=move || draft.get()
                on:input=move |ev| ctx.dispatch(Action::SetDraft(event_target_value(&ev)))
            />
            <button type="submit" class="btn btn-primary shadow-lg px-6">
                {move || if editing.get() { "Update" } else { "Add" }}
            </button>
        </form>
    }
}
