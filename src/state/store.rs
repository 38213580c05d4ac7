use super::{NotesAction, NotesState};
use crate::error::StoreResult;
use crate::models::Note;
use crate::storage::{load_json_from_storage, save_json_to_storage, KeyValueStore};

pub const LOAD_ERROR: &str = "Failed to load notes from storage";
pub const SAVE_ERROR: &str = "Failed to save notes to storage";

/// The note collection plus the storage it is mirrored to.
///
/// Every intent that changes the collection rewrites the whole list under
/// `key`. Writes are skipped until the first load has finished, so a store
/// that never read its data cannot clobber it.
pub struct NoteStore<S> {
    storage: S,
    key: String,
    state: NotesState,
    /// Set when the last write failed with a retryable error and storage is
    /// behind memory.
    dirty: bool,
}

impl<S: KeyValueStore> NoteStore<S> {
    pub fn new(storage: S, key: impl Into<String>) -> Self {
        Self {
            storage,
            key: key.into(),
            state: NotesState::default(),
            dirty: false,
        }
    }

    pub fn state(&self) -> &NotesState {
        &self.state
    }

    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Reads the saved collection.
    ///
    /// A missing key or a blank value loads an empty collection. Unreadable or malformed data
    /// leaves the collection empty, sets `state.error` and returns the cause.
    pub fn load(&mut self) -> StoreResult<()> {
        match load_json_from_storage::<Vec<Note>>(&self.storage, &self.key) {
            Ok(saved) => {
                let notes = saved.unwrap_or_default();
                tracing::info!(key = %self.key, count = notes.len(), "loaded notes");
                self.state.apply(NotesAction::SetNotes(notes));
                Ok(())
            }
            Err(e) => {
                tracing::error!(key = %self.key, error = %e, "failed to load notes");
                self.state.notes.clear();
                self.state.apply(NotesAction::SetError(LOAD_ERROR.to_string()));
                Err(e)
            }
        }
    }

    /// Applies one intent and, if the collection changed, writes it back.
    ///
    /// On a failed write the in-memory state stays as applied and
    /// `state.error` is set; dispatching again (or `flush`) retries.
    pub fn dispatch(&mut self, action: NotesAction) -> StoreResult<()> {
        tracing::debug!(?action, "dispatch");
        let changed = self.state.apply(action);
        if changed && !self.state.is_loading {
            self.persist()?;
        }
        Ok(())
    }

    /// Writes pending changes if the last write failed.
    pub fn flush(&mut self) -> StoreResult<()> {
        if !self.dirty || self.state.is_loading {
            return Ok(());
        }
        self.persist()
    }

    fn persist(&mut self) -> StoreResult<()> {
        match save_json_to_storage(&self.storage, &self.key, &self.state.notes) {
            Ok(()) => {
                if self.dirty && self.state.error.as_deref() == Some(SAVE_ERROR) {
                    self.state.error = None;
                }
                self.dirty = false;
                Ok(())
            }
            Err(e) => {
                let retryable = e.is_retryable();
                tracing::warn!(key = %self.key, error = %e, retryable, "failed to save notes");
                self.dirty = retryable;
                self.state.error = Some(SAVE_ERROR.to_string());
                Err(e)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::StoreError;
    use crate::models::{ListItem, NoteColor, NoteKind};
    use crate::state::queries::{sections, visible_notes};
    use crate::state::tests::note;
    use crate::storage::{MemoryStorage, NOTES_KEY};

    fn loaded_store() -> (NoteStore<MemoryStorage>, MemoryStorage) {
        let storage = MemoryStorage::new();
        let mut store = NoteStore::new(storage.clone(), NOTES_KEY);
        store.load().expect("empty storage should load");
        (store, storage)
    }

    fn saved(storage: &MemoryStorage) -> Vec<Note> {
        let raw = storage.raw(NOTES_KEY).expect("notes should be written");
        serde_json::from_str(&raw).expect("written notes should parse")
    }

    #[test]
    fn test_load_missing_key_gives_empty_collection() {
        let (store, storage) = loaded_store();
        assert!(store.state().notes.is_empty());
        assert!(!store.state().is_loading);
        assert!(store.state().error.is_none());
        // Loading alone does not write.
        assert!(storage.raw(NOTES_KEY).is_none());
    }

    #[test]
    fn test_load_empty_string_gives_empty_collection() {
        let storage = MemoryStorage::with_item(NOTES_KEY, "");
        let mut store = NoteStore::new(storage.clone(), NOTES_KEY);

        store.load().expect("blank value should load");
        assert!(store.state().notes.is_empty());
        assert!(!store.state().is_loading);
        assert!(store.state().error.is_none());
        assert_eq!(storage.raw(NOTES_KEY).as_deref(), Some(""));
    }

    #[test]
    fn test_load_not_json_sets_error_and_stays_empty() {
        let storage = MemoryStorage::with_item(NOTES_KEY, "not json");
        let mut store = NoteStore::new(storage.clone(), NOTES_KEY);

        let res = store.load();
        assert!(matches!(res, Err(StoreError::Parse(_))));
        assert!(store.state().notes.is_empty());
        assert!(!store.state().is_loading);
        assert_eq!(store.state().error.as_deref(), Some(LOAD_ERROR));
        // The broken blob is left alone until the user changes something.
        assert_eq!(storage.raw(NOTES_KEY).as_deref(), Some("not json"));
    }

    #[test]
    fn test_load_reads_saved_collection_in_order() {
        let notes = vec![note("b", "", "B"), note("a", "", "A")];
        let storage = MemoryStorage::with_item(
            NOTES_KEY,
            &serde_json::to_string(&notes).expect("serialize"),
        );
        let mut store = NoteStore::new(storage, NOTES_KEY);
        store.load().expect("load");
        assert_eq!(store.state().notes, notes);
    }

    #[test]
    fn test_every_collection_change_is_written() {
        let (mut store, storage) = loaded_store();

        store
            .dispatch(NotesAction::AddNote(note("a", "", "A")))
            .expect("add");
        assert_eq!(saved(&storage).len(), 1);

        store
            .dispatch(NotesAction::AddNote(note("b", "", "B")))
            .expect("add");
        let ids: Vec<String> = saved(&storage).into_iter().map(|n| n.id).collect();
        assert_eq!(ids, vec!["b".to_string(), "a".to_string()]);

        store
            .dispatch(NotesAction::DeleteNote("a".to_string()))
            .expect("delete");
        assert_eq!(saved(&storage), store.state().notes);
    }

    #[test]
    fn test_presentation_intents_do_not_write() {
        let (mut store, storage) = loaded_store();
        store
            .dispatch(NotesAction::SetSearchQuery("x".to_string()))
            .expect("search");
        store.dispatch(NotesAction::ToggleViewType).expect("view");
        store
            .dispatch(NotesAction::ToggleArchivedView)
            .expect("archive view");
        assert!(storage.raw(NOTES_KEY).is_none());
    }

    #[test]
    fn test_dispatch_before_load_is_not_written() {
        let storage = MemoryStorage::with_item(NOTES_KEY, "[]");
        let mut store = NoteStore::new(storage.clone(), NOTES_KEY);
        store
            .dispatch(NotesAction::AddNote(note("a", "", "A")))
            .expect("add");
        assert_eq!(storage.raw(NOTES_KEY).as_deref(), Some("[]"));
    }

    #[test]
    fn test_persisted_collection_roundtrips() {
        let (mut store, storage) = loaded_store();

        let mut trip = note("a", "Trip", "pack bags");
        trip.labels = vec!["travel".to_string()];
        store.dispatch(NotesAction::AddNote(trip)).expect("add");

        let mut groceries = note("b", "Groceries", "milk\neggs");
        groceries.kind = NoteKind::List;
        groceries.color = NoteColor::Green;
        groceries.list_items = Some(vec![
            ListItem {
                id: "b-0".to_string(),
                text: "milk".to_string(),
                completed: true,
            },
            ListItem {
                id: "b-1".to_string(),
                text: "eggs".to_string(),
                completed: false,
            },
        ]);
        store.dispatch(NotesAction::AddNote(groceries)).expect("add");

        let mut photo = note("c", "", "sunset");
        photo.kind = NoteKind::Image;
        photo.color = NoteColor::Purple;
        photo.is_pinned = true;
        photo.is_archived = true;
        photo.image_url = Some("https://example.com/x.png".to_string());
        photo.updated_at = "2024-02-01T08:30:00.250Z".to_string();
        store.dispatch(NotesAction::AddNote(photo)).expect("add");

        let raw = storage.raw(NOTES_KEY).expect("notes should be written");
        assert!(raw.contains(r#""listItems":[{"id":"b-0","text":"milk","completed":true}"#));
        assert!(raw.contains(r#""isPinned":true"#));
        assert!(raw.contains(r#""isArchived":true"#));
        assert!(raw.contains(r#""type":"image""#));

        let mut reopened = NoteStore::new(storage, NOTES_KEY);
        reopened.load().expect("reload");
        assert_eq!(reopened.state().notes, store.state().notes);
        assert_eq!(reopened.state().notes.len(), 3);
    }

    #[test]
    fn test_write_failure_keeps_memory_and_sets_error() {
        let storage = MemoryStorage::new().read_only();
        let mut store = NoteStore::new(storage, NOTES_KEY);
        store.load().expect("load");

        let res = store.dispatch(NotesAction::AddNote(note("a", "", "A")));
        assert!(matches!(res, Err(StoreError::Write { .. })));
        assert_eq!(store.state().notes.len(), 1);
        assert_eq!(store.state().error.as_deref(), Some(SAVE_ERROR));
        assert!(store.is_dirty());
    }

    #[test]
    fn test_flush_is_noop_when_in_sync() {
        let storage = MemoryStorage::with_item(NOTES_KEY, "not json");
        let mut store = NoteStore::new(storage.clone(), NOTES_KEY);
        let _ = store.load();
        store.flush().expect("flush");
        assert_eq!(storage.raw(NOTES_KEY).as_deref(), Some("not json"));
    }

    #[test]
    fn test_scenario_single_text_note() {
        let (mut store, _) = loaded_store();
        store
            .dispatch(NotesAction::AddNote(note("1", "", "milk")))
            .expect("add");

        let s = store.state();
        assert_eq!(s.notes.len(), 1);
        assert!(!s.notes[0].is_pinned);
        assert!(!s.notes[0].is_archived);
        assert_eq!(visible_notes(s).len(), 1);

        store
            .dispatch(NotesAction::SetSearchQuery("milk".to_string()))
            .expect("search");
        assert_eq!(visible_notes(store.state()).len(), 1);

        store
            .dispatch(NotesAction::SetSearchQuery("eggs".to_string()))
            .expect("search");
        assert!(visible_notes(store.state()).is_empty());
    }

    #[test]
    fn test_scenario_archive_moves_note_between_views() {
        let (mut store, _) = loaded_store();
        store
            .dispatch(NotesAction::AddNote(note("1", "", "milk")))
            .expect("add");
        store
            .dispatch(NotesAction::AddNote(note("2", "", "bread")))
            .expect("add");

        let before = store.state().notes[1].clone();
        store
            .dispatch(NotesAction::UpdateNote(before.with_archived_toggled()))
            .expect("archive");

        let active: Vec<&str> = sections(store.state())
            .display_order()
            .into_iter()
            .map(|n| n.id.as_str())
            .collect();
        assert_eq!(active, vec!["2"]);

        store
            .dispatch(NotesAction::ToggleArchivedView)
            .expect("toggle view");
        let archived = visible_notes(store.state());
        assert_eq!(archived.len(), 1);
        assert_eq!(
            Note {
                is_archived: false,
                ..archived[0].clone()
            },
            before
        );
    }
}
