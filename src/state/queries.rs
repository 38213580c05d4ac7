//! Read-only projections of [`NotesState`] used by the views.

use super::NotesState;
use crate::models::Note;

/// Case-insensitive substring match on title or content. An empty query
/// matches everything.
pub fn matches_search(note: &Note, query: &str) -> bool {
    if query.is_empty() {
        return true;
    }
    let q = query.to_lowercase();
    note.title.to_lowercase().contains(&q) || note.content.to_lowercase().contains(&q)
}

/// Notes on the current side of the archive partition that match the search,
/// in collection order.
pub fn visible_notes(state: &NotesState) -> Vec<&Note> {
    state
        .notes
        .iter()
        .filter(|n| n.is_archived == state.show_archived)
        .filter(|n| matches_search(n, &state.search_query))
        .collect()
}

#[derive(Debug, Default, PartialEq, Eq)]
pub struct NoteSections<'a> {
    pub pinned: Vec<&'a Note>,
    pub others: Vec<&'a Note>,
}

impl<'a> NoteSections<'a> {
    pub fn is_empty(&self) -> bool {
        self.pinned.is_empty() && self.others.is_empty()
    }

    /// Render order: pinned group first.
    pub fn display_order(&self) -> Vec<&'a Note> {
        self.pinned.iter().chain(self.others.iter()).copied().collect()
    }
}

/// Splits the visible notes into the pinned and unpinned groups.
///
/// The archived view has no pinned section; everything lands in `others`.
pub fn sections(state: &NotesState) -> NoteSections<'_> {
    let visible = visible_notes(state);
    if state.show_archived {
        return NoteSections {
            pinned: vec![],
            others: visible,
        };
    }
    let (pinned, others) = visible.into_iter().partition(|n| n.is_pinned);
    NoteSections { pinned, others }
}

/// Moves `dragged_id` to the position `target_id` holds now.
///
/// Returns `None` when the ids are equal or either one is missing.
pub fn reorder(notes: &[Note], dragged_id: &str, target_id: &str) -> Option<Vec<Note>> {
    if dragged_id == target_id {
        return None;
    }
    let from = notes.iter().position(|n| n.id == dragged_id)?;
    let to = notes.iter().position(|n| n.id == target_id)?;

    let mut next = notes.to_vec();
    let dragged = next.remove(from);
    next.insert(to, dragged);
    Some(next)
}
