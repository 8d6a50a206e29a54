//! Theme Toggle Component
//!
//! Light/dark switch at the top of the sidebar.

use leptos::prelude::*;

use crate::context::use_app_context;
use crate::reducer::Action;
use crate::store::TodoStateStoreFields;

#[component]
pub fn ThemeToggle() -> impl IntoView {
    let ctx = use_app_context();
    let theme = Memo::new(move |_| ctx.store.theme().get());

    view! {
        <div class="theme-toggle">
            <span class="theme-label">{move || theme.get().label()}</span>
            <input
                type="checkbox"
                class="toggle toggle-lg toggle-info"
                prop:checked=move || theme.get().is_dark()
                on:change=move |_| ctx.dispatch(Action::ToggleTheme)
            />
        </div>
    }
}
