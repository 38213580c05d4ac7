mod note;

pub(crate) use note::{apply_edit, NoteDraft};
