//! Todo Reducer
//!
//! `(state, action) -> state`. Every action is total: unknown ids are ignored
//! and the only validation is rejecting a blank draft.

use crate::models::{Section, TodoId, TodoItem};
use crate::presentation::PresentationSink;
use crate::store::TodoState;

/// User intents the view can dispatch
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Text input changed
    SetDraft(String),
    /// Add the draft, or write it back to the item under edit
    Submit,
    BeginEdit(TodoId),
    Delete(TodoId),
    /// Move an active item to the saved list
    Save(TodoId),
    DeleteSaved(TodoId),
    ToggleTheme,
    SwitchSection(Section),
}

impl TodoState {
    pub fn apply(&mut self, action: Action, sink: &dyn PresentationSink) {
        log::debug!("[TODO] {:?}", action);
        match action {
            Action::SetDraft(text) => self.draft = text,
            Action::Submit => self.submit(),
            Action::BeginEdit(id) => self.begin_edit(id),
            Action::Delete(id) => {
                self.remove_todo(id);
            }
            Action::Save(id) => {
                if let Some(item) = self.remove_todo(id) {
                    self.saved_todos.push(item);
                }
            }
            Action::DeleteSaved(id) => {
                let before = self.saved_todos.len();
                self.saved_todos.retain(|t| t.id != id);
                if self.saved_todos.len() == before {
                    log::trace!("[TODO] no saved item {}", id);
                }
            }
            Action::ToggleTheme => {
                self.theme = self.theme.toggled();
                if let Err(e) = sink.apply_theme(self.theme) {
                    log::warn!("[THEME] failed to apply {}: {}", self.theme.as_str(), e);
                }
            }
            Action::SwitchSection(section) => self.section = section,
        }
    }

    fn submit(&mut self) {
        if self.draft.trim().is_empty() {
            log::trace!("[TODO] blank draft ignored");
            return;
        }
        let text = std::mem::take(&mut self.draft);
        let target = self.editing.take();
        if let Some(item) = target.and_then(|id| self.todos.iter_mut().find(|t| t.id == id)) {
            item.text = text;
            return;
        }
        let id = TodoId(self.next_id);
        self.next_id += 1;
        self.todos.push(TodoItem::new(id, text));
    }

    fn begin_edit(&mut self, id: TodoId) {
        match self.todos.iter().find(|t| t.id == id) {
            Some(item) => {
                self.draft = item.text.clone();
                self.editing = Some(id);
            }
            None => log::trace!("[TODO] no item {} to edit", id),
        }
    }

    /// Removes an active item; clears the edit cursor only if it pointed here
    fn remove_todo(&mut self, id: TodoId) -> Option<TodoItem> {
        let Some(pos) = self.todos.iter().position(|t| t.id == id) else {
            log::trace!("[TODO] no item {}", id);
            return None;
        };
        if self.editing == Some(id) {
            self.editing = None;
        }
        Some(self.todos.remove(pos))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Theme;
    use crate::store::todo_text;
    use crate::presentation::testing::{FailingSink, RecordingSink};

    fn submit(state: &mut TodoState, sink: &RecordingSink, text: &str) {
        state.apply(Action::SetDraft(text.to_string()), sink);
        state.apply(Action::Submit, sink);
    }

    /// Applies an index-addressed action; out-of-range indices dispatch nothing
    fn apply_at(
        state: &mut TodoState,
        sink: &RecordingSink,
        index: usize,
        saved: bool,
        make: fn(TodoId) -> Action,
    ) {
        let id = if saved { state.saved_id_at(index) } else { state.id_at(index) };
        if let Some(id) = id {
            state.apply(make(id), sink);
        }
    }

    fn with_items(texts: &[&str]) -> (TodoState, RecordingSink) {
        let sink = RecordingSink::default();
        let mut state = TodoState::default();
        for text in texts {
            submit(&mut state, &sink, text);
        }
        (state, sink)
    }

    #[test]
    fn test_submit_appends_and_clears_draft() {
        let (mut state, sink) = with_items(&["a"]);
        submit(&mut state, &sink, "  Buy milk ");

        assert_eq!(state.todo_texts(), vec!["a", "  Buy milk "]);
        assert_eq!(state.draft, "");
        assert_eq!(state.editing, None);
    }

    #[test]
    fn test_blank_submit_is_noop() {
        for blank in ["", "   ", "\t\n"] {
            let (mut state, sink) = with_items(&["a"]);
            let id = state.id_at(0).unwrap();
            state.apply(Action::BeginEdit(id), &sink);
            state.apply(Action::SetDraft(blank.to_string()), &sink);
            let before = state.clone();

            state.apply(Action::Submit, &sink);
            assert_eq!(state, before);
        }
    }

    #[test]
    fn test_edit_replaces_in_place() {
        let (mut state, sink) = with_items(&["a", "b", "c"]);
        let id = state.id_at(1).unwrap();

        state.apply(Action::BeginEdit(id), &sink);
        assert_eq!(state.draft, "b");
        assert_eq!(state.editing, Some(id));
        assert_eq!(state.todos.len(), 3);

        submit(&mut state, &sink, "B");
        assert_eq!(state.todo_texts(), vec!["a", "B", "c"]);
        assert_eq!(state.id_at(1), Some(id));
        assert_eq!(state.editing, None);
        assert_eq!(state.draft, "");
    }

    #[test]
    fn test_edited_row_keeps_id_and_reads_new_text() {
        let (mut state, sink) = with_items(&["a", "b"]);
        let id = state.id_at(0).unwrap();
        state.apply(Action::BeginEdit(id), &sink);
        submit(&mut state, &sink, "A");

        assert_eq!(state.id_at(0), Some(id));
        assert_eq!(todo_text(&state.todos, id), "A");

        state.apply(Action::Delete(id), &sink);
        assert_eq!(todo_text(&state.todos, id), "");
    }

    #[test]
    fn test_delete_shifts_later_items() {
        let (mut state, sink) = with_items(&["a", "b", "c", "d"]);
        let id = state.id_at(1).unwrap();

        state.apply(Action::Delete(id), &sink);
        assert_eq!(state.todo_texts(), vec!["a", "c", "d"]);
    }

    #[test]
    fn test_delete_earlier_item_keeps_edit_target() {
        let (mut state, sink) = with_items(&["a", "b", "c"]);
        let editing = state.id_at(2).unwrap();
        state.apply(Action::BeginEdit(editing), &sink);

        state.apply(Action::Delete(state.id_at(0).unwrap()), &sink);
        assert_eq!(state.editing, Some(editing));

        submit(&mut state, &sink, "C");
        assert_eq!(state.todo_texts(), vec!["b", "C"]);
    }

    #[test]
    fn test_deleting_edit_target_clears_cursor_not_draft() {
        let (mut state, sink) = with_items(&["a", "b"]);
        let id = state.id_at(0).unwrap();
        state.apply(Action::BeginEdit(id), &sink);

        state.apply(Action::Delete(id), &sink);
        assert_eq!(state.editing, None);
        assert_eq!(state.draft, "a");

        state.apply(Action::Submit, &sink);
        assert_eq!(state.todo_texts(), vec!["b", "a"]);
    }

    #[test]
    fn test_save_moves_item() {
        let (mut state, sink) = with_items(&["a", "b", "c"]);
        let id = state.id_at(1).unwrap();

        state.apply(Action::Save(id), &sink);
        assert_eq!(state.todo_texts(), vec!["a", "c"]);
        assert_eq!(state.saved_texts(), vec!["b"]);
        assert_eq!(state.saved_id_at(0), Some(id));
    }

    #[test]
    fn test_saving_edit_target_clears_cursor() {
        let (mut state, sink) = with_items(&["a", "b"]);
        let id = state.id_at(1).unwrap();
        state.apply(Action::BeginEdit(id), &sink);

        state.apply(Action::Save(id), &sink);
        assert_eq!(state.editing, None);
        assert_eq!(state.draft, "b");
        assert_eq!(state.saved_texts(), vec!["b"]);

        submit(&mut state, &sink, "X");
        assert_eq!(state.todo_texts(), vec!["a", "X"]);
        assert_eq!(state.saved_texts(), vec!["b"]);
    }

    #[test]
    fn test_out_of_range_indices_are_noops() {
        let (mut state, sink) = with_items(&["a", "b"]);
        assert_eq!(state.id_at(2), None);
        assert_eq!(state.saved_id_at(0), None);
        let before = state.clone();

        apply_at(&mut state, &sink, 2, false, Action::BeginEdit);
        apply_at(&mut state, &sink, 2, false, Action::Delete);
        apply_at(&mut state, &sink, 5, false, Action::Save);
        apply_at(&mut state, &sink, 0, true, Action::DeleteSaved);
        assert_eq!(state, before);

        apply_at(&mut state, &sink, 0, false, Action::Save);
        apply_at(&mut state, &sink, 1, true, Action::DeleteSaved);
        assert_eq!(state.todo_texts(), vec!["b"]);
        assert_eq!(state.saved_texts(), vec!["a"]);
    }

    #[test]
    fn test_unknown_ids_are_noops() {
        let (mut state, sink) = with_items(&["a"]);
        let before = state.clone();
        let missing = TodoId(999);

        for action in [
            Action::BeginEdit(missing),
            Action::Delete(missing),
            Action::Save(missing),
            Action::DeleteSaved(missing),
        ] {
            state.apply(action, &sink);
        }
        assert_eq!(state, before);
    }

    #[test]
    fn test_ids_are_not_reused() {
        let (mut state, sink) = with_items(&["a"]);
        let first = state.id_at(0).unwrap();
        state.apply(Action::Delete(first), &sink);
        submit(&mut state, &sink, "b");

        assert_ne!(state.id_at(0), Some(first));
    }

    #[test]
    fn test_toggle_theme_is_involution() {
        let (mut state, sink) = with_items(&[]);
        assert_eq!(state.theme, Theme::Light);

        state.apply(Action::ToggleTheme, &sink);
        assert_eq!(state.theme, Theme::Dark);
        assert_eq!(sink.current(), Some(Theme::Dark));

        state.apply(Action::ToggleTheme, &sink);
        assert_eq!(state.theme, Theme::Light);
        assert_eq!(sink.current(), Some(Theme::Light));
        assert_eq!(sink.count(), 2);
    }

    #[test]
    fn test_sink_failure_still_toggles() {
        let mut state = TodoState::default();
        state.apply(Action::ToggleTheme, &FailingSink);
        assert_eq!(state.theme, Theme::Dark);
    }

    #[test]
    fn test_switch_section_is_idempotent() {
        let (mut state, sink) = with_items(&["a"]);
        state.apply(Action::BeginEdit(state.id_at(0).unwrap()), &sink);

        state.apply(Action::SwitchSection(Section::Saved), &sink);
        let once = state.clone();
        state.apply(Action::SwitchSection(Section::Saved), &sink);

        assert_eq!(state, once);
        assert_eq!(state.section, Section::Saved);
        assert_eq!(state.todo_texts(), vec!["a"]);
        assert!(state.editing.is_some());
        assert_eq!(sink.count(), 0);
    }

    #[test]
    fn test_walkthrough() {
        let sink = RecordingSink::default();
        let mut state = TodoState::default();

        submit(&mut state, &sink, "Buy milk");
        assert_eq!(state.todo_texts(), vec!["Buy milk"]);

        state.apply(Action::BeginEdit(state.id_at(0).unwrap()), &sink);
        submit(&mut state, &sink, "Buy oat milk");
        assert_eq!(state.todo_texts(), vec!["Buy oat milk"]);

        state.apply(Action::Save(TodoId(1)), &sink);
        assert!(state.todos.is_empty());
        assert_eq!(state.saved_texts(), vec!["Buy oat milk"]);

        let saved = state.saved_id_at(0).unwrap();
        state.apply(Action::DeleteSaved(saved), &sink);
        assert!(state.saved_todos.is_empty());
    }
}
