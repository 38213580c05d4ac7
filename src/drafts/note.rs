use crate::models::{ListItem, Note, NoteColor, NoteKind};

/// What the editor form holds before a note exists.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub(crate) struct NoteDraft {
    pub title: String,
    pub content: String,
    pub kind: NoteKind,
    pub color: NoteColor,
    pub image_url: String,
}

impl NoteDraft {
    /// Blank drafts (no text and no image) are refused. The image URL only
    /// counts for image notes.
    pub fn is_blank(&self) -> bool {
        let has_image = self.kind == NoteKind::Image && !self.image_url.trim().is_empty();
        self.content.trim().is_empty() && !has_image
    }

    /// Builds the note to dispatch with `AddNote`, or `None` for a blank draft.
    ///
    /// List drafts turn each non-empty line into an unchecked row. Row ids are
    /// derived from the note id so they stay stable across reloads.
    pub fn into_note(self, id: String, now: &str) -> Option<Note> {
        if self.is_blank() {
            return None;
        }

        let content = self.content.trim().to_string();
        let image_url = match self.kind {
            NoteKind::Image => Some(self.image_url.trim().to_string()).filter(|u| !u.is_empty()),
            _ => None,
        };
        let list_items = match self.kind {
            NoteKind::List => Some(list_items_from(&id, &content, &[])),
            _ => None,
        };

        Some(Note {
            id,
            title: self.title.trim().to_string(),
            content,
            kind: self.kind,
            color: self.color,
            is_pinned: false,
            is_archived: false,
            created_at: now.to_string(),
            updated_at: now.to_string(),
            labels: vec![],
            image_url,
            list_items,
        })
    }
}

/// One row per non-empty line. A row keeps its checkmark when `previous` has a
/// row with the same text.
fn list_items_from(note_id: &str, content: &str, previous: &[ListItem]) -> Vec<ListItem> {
    content
        .lines()
        .map(str::trim)
        .filter(|l| !l.is_empty())
        .enumerate()
        .map(|(i, text)| ListItem {
            id: format!("{note_id}-{i}"),
            text: text.to_string(),
            completed: previous.iter().any(|p| p.completed && p.text == text),
        })
        .collect()
}

/// Result of the inline card editor: the same record with new title/content.
///
/// Checklist rows of list notes are rebuilt from the edited text.
pub(crate) fn apply_edit(note: &Note, title: &str, content: &str, now: &str) -> Note {
    let content = content.trim().to_string();
    let list_items = match note.kind {
        NoteKind::List => Some(list_items_from(
            &note.id,
            &content,
            note.list_items.as_deref().unwrap_or_default(),
        )),
        _ => note.list_items.clone(),
    };
    Note {
        title: title.trim().to_string(),
        content,
        updated_at: now.to_string(),
        list_items,
        ..note.clone()
    }
}
