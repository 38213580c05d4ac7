pub mod queries;
mod store;

pub use store::{NoteStore, LOAD_ERROR, SAVE_ERROR};

use crate::config::EnvConfig;
use crate::models::{Note, ViewType};
use crate::storage::LocalStorage;
use leptos::prelude::*;
use std::collections::HashSet;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NotesState {
    /// Most recent first, unless the user reordered by hand.
    pub notes: Vec<Note>,
    pub search_query: String,
    pub view_type: ViewType,
    pub is_loading: bool,
    pub error: Option<String>,
    pub show_archived: bool,
}

impl Default for NotesState {
    fn default() -> Self {
        Self {
            notes: vec![],
            search_query: String::new(),
            view_type: ViewType::Grid,
            is_loading: true,
            error: None,
            show_archived: false,
        }
    }
}

/// Intents accepted by the store.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum NotesAction {
    /// Replace the whole collection (initial load, drag reorder).
    SetNotes(Vec<Note>),
    /// Prepend a new note.
    AddNote(Note),
    /// Replace the note with the same id by this complete record.
    ///
    /// This is not a patch: fields left at their defaults here overwrite the
    /// stored ones. Start from a clone of the current note.
    UpdateNote(Note),
    DeleteNote(String),
    SetSearchQuery(String),
    ToggleViewType,
    ToggleArchivedView,
    SetError(String),
    ClearError,
}

impl NotesState {
    /// Applies one intent. Returns `true` when the note collection changed and
    /// has to be written back.
    pub fn apply(&mut self, action: NotesAction) -> bool {
        match action {
            NotesAction::SetNotes(notes) => {
                self.notes = dedup_by_id(notes);
                self.is_loading = false;
                true
            }
            NotesAction::AddNote(note) => {
                if self.notes.iter().any(|n| n.id == note.id) {
                    tracing::warn!(id = %note.id, "ignoring note with duplicate id");
                    return false;
                }
                self.notes.insert(0, note);
                true
            }
            NotesAction::UpdateNote(note) => {
                match self.notes.iter_mut().find(|n| n.id == note.id) {
                    Some(slot) => {
                        *slot = note;
                        true
                    }
                    None => false,
                }
            }
            NotesAction::DeleteNote(id) => {
                let before = self.notes.len();
                self.notes.retain(|n| n.id != id);
                self.notes.len() != before
            }
            NotesAction::SetSearchQuery(q) => {
                self.search_query = q;
                false
            }
            NotesAction::ToggleViewType => {
                self.view_type = self.view_type.toggled();
                false
            }
            NotesAction::ToggleArchivedView => {
                self.show_archived = !self.show_archived;
                false
            }
            NotesAction::SetError(msg) => {
                self.error = Some(msg);
                self.is_loading = false;
                false
            }
            NotesAction::ClearError => {
                self.error = None;
                false
            }
        }
    }
}

fn dedup_by_id(notes: Vec<Note>) -> Vec<Note> {
    let mut seen = HashSet::with_capacity(notes.len());
    let before = notes.len();
    let out: Vec<Note> = notes
        .into_iter()
        .filter(|n| seen.insert(n.id.clone()))
        .collect();
    if out.len() != before {
        tracing::warn!(dropped = before - out.len(), "dropped notes with duplicate ids");
    }
    out
}

/// App-wide handle to the note store, provided through Leptos context.
#[derive(Clone, Copy)]
pub struct NotesContext(pub RwSignal<NoteStore<LocalStorage>>);

impl NotesContext {
    /// Builds the store and reads the saved collection. A broken blob leaves
    /// the store empty with `error` set; it never aborts startup.
    pub fn new(config: &EnvConfig) -> Self {
        let mut store = NoteStore::new(LocalStorage, config.storage_key.clone());
        // Load failures are recorded in `state.error` for the banner.
        let _ = store.load();
        Self(RwSignal::new(store))
    }

    pub fn dispatch(&self, action: NotesAction) {
        self.0.update(|store| {
            // Write failures land in `state.error`.
            let _ = store.dispatch(action);
        });
    }

    /// Tracked read of the current state.
    pub fn with<R>(&self, f: impl FnOnce(&NotesState) -> R) -> R {
        self.0.with(|store| f(store.state()))
    }

    pub fn with_untracked<R>(&self, f: impl FnOnce(&NotesState) -> R) -> R {
        self.0.with_untracked(|store| f(store.state()))
    }

    /// Retries a failed write; called when the page is hidden.
    pub fn flush(&self) {
        self.0.update(|store| {
            let _ = store.flush();
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{NoteColor, NoteKind};

    pub(crate) fn note(id: &str, title: &str, content: &str) -> Note {
        Note {
            id: id.to_string(),
            title: title.to_string(),
            content: content.to_string(),
            kind: NoteKind::Text,
            color: NoteColor::Default,
            is_pinned: false,
            is_archived: false,
            created_at: "2024-01-01T00:00:00.000Z".to_string(),
            updated_at: "2024-01-01T00:00:00.000Z".to_string(),
            labels: vec![],
            image_url: None,
            list_items: None,
        }
    }

    fn loaded() -> NotesState {
        let mut s = NotesState::default();
        s.apply(NotesAction::SetNotes(vec![]));
        s
    }

    fn ids(s: &NotesState) -> Vec<&str> {
        s.notes.iter().map(|n| n.id.as_str()).collect()
    }

    #[test]
    fn test_initial_state() {
        let s = NotesState::default();
        assert!(s.is_loading);
        assert!(s.notes.is_empty());
        assert_eq!(s.view_type, ViewType::Grid);
        assert!(!s.show_archived);
        assert!(s.error.is_none());
    }

    #[test]
    fn test_set_notes_clears_loading() {
        let mut s = NotesState::default();
        assert!(s.apply(NotesAction::SetNotes(vec![note("1", "", "a")])));
        assert!(!s.is_loading);
        assert_eq!(ids(&s), vec!["1"]);
    }

    #[test]
    fn test_add_prepends() {
        let mut s = loaded();
        s.apply(NotesAction::AddNote(note("a", "", "A")));
        s.apply(NotesAction::AddNote(note("b", "", "B")));
        assert_eq!(ids(&s), vec!["b", "a"]);
    }

    #[test]
    fn test_add_with_existing_id_is_rejected() {
        let mut s = loaded();
        s.apply(NotesAction::AddNote(note("a", "", "first")));
        assert!(!s.apply(NotesAction::AddNote(note("a", "", "second"))));
        assert_eq!(s.notes.len(), 1);
        assert_eq!(s.notes[0].content, "first");
    }

    #[test]
    fn test_set_notes_drops_duplicate_ids() {
        let mut s = NotesState::default();
        s.apply(NotesAction::SetNotes(vec![
            note("a", "", "1"),
            note("b", "", "2"),
            note("a", "", "3"),
        ]));
        assert_eq!(ids(&s), vec!["a", "b"]);
        assert_eq!(s.notes[0].content, "1");
    }

    #[test]
    fn test_update_replaces_whole_record_in_place() {
        let mut s = loaded();
        s.apply(NotesAction::AddNote(note("a", "", "A")));
        s.apply(NotesAction::AddNote(note("b", "", "B")));

        let mut edited = s.notes[1].clone();
        edited.title = "Title".to_string();
        edited.is_pinned = true;
        assert!(s.apply(NotesAction::UpdateNote(edited.clone())));

        assert_eq!(ids(&s), vec!["b", "a"]);
        assert_eq!(s.notes[1], edited);
    }

    #[test]
    fn test_update_missing_id_is_noop() {
        let mut s = loaded();
        s.apply(NotesAction::AddNote(note("a", "", "A")));
        let before = s.clone();
        assert!(!s.apply(NotesAction::UpdateNote(note("zzz", "x", "y"))));
        assert_eq!(s, before);
    }

    #[test]
    fn test_delete_is_idempotent() {
        let mut s = loaded();
        s.apply(NotesAction::AddNote(note("a", "", "A")));
        s.apply(NotesAction::AddNote(note("b", "", "B")));

        assert!(s.apply(NotesAction::DeleteNote("a".to_string())));
        let after_first = s.clone();
        assert!(!s.apply(NotesAction::DeleteNote("a".to_string())));
        assert_eq!(s, after_first);
        assert_eq!(ids(&s), vec!["b"]);
    }

    #[test]
    fn test_ids_stay_unique_across_mixed_operations() {
        let mut s = loaded();
        let ops = vec![
            NotesAction::AddNote(note("1", "", "a")),
            NotesAction::AddNote(note("2", "", "b")),
            NotesAction::AddNote(note("1", "", "dup")),
            NotesAction::UpdateNote(note("2", "t", "b2")),
            NotesAction::DeleteNote("1".to_string()),
            NotesAction::AddNote(note("1", "", "again")),
            NotesAction::UpdateNote(note("3", "", "missing")),
            NotesAction::AddNote(note("3", "", "c")),
        ];
        for op in ops {
            s.apply(op);
            let mut seen = HashSet::new();
            assert!(s.notes.iter().all(|n| seen.insert(n.id.clone())));
        }
        assert_eq!(ids(&s), vec!["3", "1", "2"]);
    }

    #[test]
    fn test_presentation_toggles_do_not_touch_notes() {
        let mut s = loaded();
        s.apply(NotesAction::AddNote(note("a", "", "A")));
        let notes = s.notes.clone();

        assert!(!s.apply(NotesAction::SetSearchQuery("milk".to_string())));
        assert!(!s.apply(NotesAction::ToggleViewType));
        assert!(!s.apply(NotesAction::ToggleArchivedView));

        assert_eq!(s.notes, notes);
        assert_eq!(s.search_query, "milk");
        assert_eq!(s.view_type, ViewType::List);
        assert!(s.show_archived);
    }

    #[test]
    fn test_error_set_and_clear() {
        let mut s = NotesState::default();
        s.apply(NotesAction::SetError("boom".to_string()));
        assert_eq!(s.error.as_deref(), Some("boom"));
        assert!(!s.is_loading);

        s.apply(NotesAction::ClearError);
        assert!(s.error.is_none());
    }
}
