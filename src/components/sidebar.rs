//! Sidebar Component
//!
//! Theme toggle, section menu and the optional credit footer.

use leptos::prelude::*;

use crate::components::ThemeToggle;
use crate::context::use_app_context;
use crate::models::Section;
use crate::reducer::Action;
use crate::store::{use_todo_store, TodoStateStoreFields};

#[component]
pub fn Sidebar() -> impl IntoView {
    let ctx = use_app_context();
    let store = use_todo_store();
    let active = Memo::new(move |_| store.section().get());

    view! {
        <aside class="sidebar">
            <div>
                <ThemeToggle />

                <h2 class="menu-title">"Menu"</h2>
                <ul class="menu">
                    {Section::ALL.iter().map(move |&section| {
                        let count = move || match section {
                            Section::Todo => store.todos().with(|t| t.len()),
                            Section::Saved => store.saved_todos().with(|t| t.len()),
                        };
                        view! {
                            <li>
                                <button
                                    class=move || if active.get() == section { "btn w-full btn-primary" } else { "btn w-full btn-outline" }
                                    on:click=move |_| ctx.dispatch(Action::SwitchSection(section))
                                >
                                    {section.title()}
                                    <span class="menu-count">{count}</span>
                                </button>
                            </li>
                        }
                    }).collect_view()}
                </ul>
            </div>

            {ctx.credit.get_value().map(|name| view! {
                <footer class="credit">
                    "Made by " <span class="credit-name">{name}</span>
                </footer>
            })}
        </aside>
    }
}
