//! Application State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity. The state itself
//! is a plain struct; all mutation goes through `TodoState::apply`.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::models::{Section, Theme, TodoId, TodoItem};

/// Everything the widget knows, created at mount and dropped at unmount
#[derive(Clone, Debug, PartialEq, Store)]
pub struct TodoState {
    /// Active items, insertion order
    pub todos: Vec<TodoItem>,
    /// Archived items, in the order they were saved
    pub saved_todos: Vec<TodoItem>,
    /// Shared input buffer for adding and editing
    pub draft: String,
    /// Item in `todos` currently being edited
    pub editing: Option<TodoId>,
    pub theme: Theme,
    pub section: Section,
    /// Next identifier to hand out
    pub next_id: u32,
}

impl Default for TodoState {
    fn default() -> Self {
        Self::new(Theme::default(), Section::default())
    }
}

impl TodoState {
    pub fn new(theme: Theme, section: Section) -> Self {
        Self {
            todos: Vec::new(),
            saved_todos: Vec::new(),
            draft: String::new(),
            editing: None,
            theme,
            section,
            next_id: 1,
        }
    }
}

/// Text of the active item `id`, empty once it is gone
pub fn todo_text(todos: &[TodoItem], id: TodoId) -> String {
    todos.iter().find(|t| t.id == id).map(|t| t.text.clone()).unwrap_or_default()
}

/// Type alias for the store
pub type TodoStore = Store<TodoState>;

/// Get the todo store from context
pub fn use_todo_store() -> TodoStore {
    expect_context::<TodoStore>()
}

/// Positional lookups, the way a caller that only knows rendered rows
/// addresses items
#[cfg(test)]
impl TodoState {
    pub fn id_at(&self, index: usize) -> Option<TodoId> {
        self.todos.get(index).map(|t| t.id)
    }

    pub fn saved_id_at(&self, index: usize) -> Option<TodoId> {
        self.saved_todos.get(index).map(|t| t.id)
    }

    pub fn todo_texts(&self) -> Vec<&str> {
        self.todos.iter().map(|t| t.text.as_str()).collect()
    }

    pub fn saved_texts(&self) -> Vec<&str> {
        self.saved_todos.iter().map(|t| t.text.as_str()).collect()
    }
}
