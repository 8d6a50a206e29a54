//! UI Components
//!
//! Leptos components for the sidebar and the two list panels.

mod theme_toggle;
mod sidebar;
mod todo_form;
mod todo_list;
mod saved_list;

pub use theme_toggle::ThemeToggle;
pub use sidebar::Sidebar;
pub use todo_form::TodoForm;
pub use todo_list::TodoList;
pub use saved_list::SavedList;
