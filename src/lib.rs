//! Keep-style notes for the browser.
//!
//! The note store (`state`, `storage`, `models`) is plain Rust and runs on any
//! target. The Leptos views in `components` only read derived state and
//! dispatch intents back into the store.

mod app;
mod components;
pub mod config;
mod drafts;
pub mod error;
mod logging;
pub mod models;
pub mod state;
pub mod storage;
pub mod util;

pub use app::App;
pub use error::{StoreError, StoreResult};
pub use models::{ListItem, Note, NoteColor, NoteKind, NotePayload, ViewType};
pub use state::{NoteStore, NotesAction, NotesContext, NotesState};
pub use storage::{KeyValueStore, LocalStorage, MemoryStorage};

use leptos::prelude::*;

// Needed for `#[wasm_bindgen(start)]` on the wasm entrypoint.
#[cfg(all(target_arch = "wasm32", not(test)))]
use wasm_bindgen::prelude::wasm_bindgen;

// Only register the WASM start function for normal builds (not for tests),
// otherwise wasm-bindgen-test will end up with multiple entry symbols.
#[cfg_attr(all(target_arch = "wasm32", not(test)), wasm_bindgen(start))]
pub fn main() {
    console_error_panic_hook::set_once();
    logging::init(config::EnvConfig::from_window().log_level);
    mount_to_body(App);
}
