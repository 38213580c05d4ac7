use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter};

#[derive(
    Serialize,
    Deserialize,
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    Hash,
    Display,
    EnumIter,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum NoteKind {
    #[default]
    Text,
    List,
    Image,
}

/// Background tag for a note card. Has no behavioral effect.
#[derive(
    Serialize,
    Deserialize,
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    Hash,
    Display,
    EnumIter,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum NoteColor {
    #[default]
    Default,
    Red,
    Orange,
    Yellow,
    Green,
    Blue,
    Purple,
    Pink,
}

impl NoteColor {
    pub fn bg_class(self) -> &'static str {
        match self {
            NoteColor::Default => "bg-white",
            NoteColor::Red => "bg-red-100",
            NoteColor::Orange => "bg-orange-100",
            NoteColor::Yellow => "bg-yellow-100",
            NoteColor::Green => "bg-green-100",
            NoteColor::Blue => "bg-blue-100",
            NoteColor::Purple => "bg-purple-100",
            NoteColor::Pink => "bg-pink-100",
        }
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq, Hash)]
pub struct ListItem {
    pub id: String,
    pub text: String,
    pub completed: bool,
}

/// A single note record.
///
/// Field names match the persisted JSON exactly (camelCase, `type`), so a saved
/// collection reads back field-for-field. Absent optional payloads are omitted
/// on write.
///
/// Updates are whole-record: callers clone the current note, change what they
/// need, and dispatch the complete value.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq, Hash)]
#[serde(rename_all = "camelCase")]
pub struct Note {
    pub id: String,
    pub title: String,
    pub content: String,
    #[serde(rename = "type")]
    pub kind: NoteKind,
    pub color: NoteColor,
    pub is_pinned: bool,
    pub is_archived: bool,
    pub created_at: String,
    pub updated_at: String,

    /// Free-text tags. Nothing reads these yet.
    #[serde(default)]
    pub labels: Vec<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub list_items: Option<Vec<ListItem>>,
}

/// The payload that is authoritative for a note's `kind`.
///
/// The record itself may carry stray fields for other kinds; rendering goes
/// through this view so only one of them is ever shown.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NotePayload<'a> {
    Text(&'a str),
    List(&'a [ListItem]),
    Image {
        url: Option<&'a str>,
        caption: &'a str,
    },
}

impl Note {
    pub fn payload(&self) -> NotePayload<'_> {
        match self.kind {
            NoteKind::Text => NotePayload::Text(&self.content),
            // A list note without rows still shows its body text.
            NoteKind::List => match self.list_items.as_deref() {
                Some(items) => NotePayload::List(items),
                None => NotePayload::Text(&self.content),
            },
            NoteKind::Image => NotePayload::Image {
                url: self.image_url.as_deref(),
                caption: &self.content,
            },
        }
    }

    pub fn with_pinned_toggled(&self) -> Note {
        Note {
            is_pinned: !self.is_pinned,
            ..self.clone()
        }
    }

    pub fn with_archived_toggled(&self) -> Note {
        Note {
            is_archived: !self.is_archived,
            ..self.clone()
        }
    }

    pub fn with_list_item_toggled(&self, item_id: &str, now: &str) -> Note {
        let mut next = self.clone();
        let Some(items) = next.list_items.as_mut() else {
            return next;
        };
        let Some(item) = items.iter_mut().find(|i| i.id == item_id) else {
            return next;
        };
        item.completed = !item.completed;
        next.updated_at = now.to_string();
        next
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Display)]
#[strum(serialize_all = "lowercase")]
pub enum ViewType {
    #[default]
    Grid,
    List,
}

impl ViewType {
    pub fn toggled(self) -> Self {
        match self {
            ViewType::Grid => ViewType::List,
            ViewType::List => ViewType::Grid,
        }
    }
}
