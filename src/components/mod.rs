pub mod ui;

mod error_banner;
mod header;
mod note_card;
mod note_editor;
mod note_grid;

pub use error_banner::ErrorBanner;
pub use header::Header;
pub use note_editor::NoteEditor;
pub use note_grid::NoteGrid;
