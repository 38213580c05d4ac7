use crate::error::{StoreError, StoreResult};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

pub const NOTES_KEY: &str = "notes";

/// Synchronous string key-value storage.
///
/// `get_item` distinguishes an absent key (`Ok(None)`) from a present but empty
/// value (`Ok(Some(""))`).
pub trait KeyValueStore {
    fn get_item(&self, key: &str) -> StoreResult<Option<String>>;
    fn set_item(&self, key: &str, value: &str) -> StoreResult<()>;
}

/// Browser `window.localStorage`.
///
/// The handle is looked up on every call, so the value itself carries no JS
/// object and can live inside a thread-safe signal.
#[derive(Clone, Copy, Debug, Default)]
pub struct LocalStorage;

impl LocalStorage {
    fn storage() -> StoreResult<web_sys::Storage> {
        web_sys::window()
            .and_then(|w| w.local_storage().ok().flatten())
            .ok_or(StoreError::Unavailable)
    }
}

impl KeyValueStore for LocalStorage {
    fn get_item(&self, key: &str) -> StoreResult<Option<String>> {
        Self::storage()?
            .get_item(key)
            .map_err(|e| StoreError::Read {
                key: key.to_string(),
                message: format!("{e:?}"),
            })
    }

    fn set_item(&self, key: &str, value: &str) -> StoreResult<()> {
        Self::storage()?
            .set_item(key, value)
            .map_err(|e| StoreError::Write {
                key: key.to_string(),
                message: format!("{e:?}"),
            })
    }
}

/// In-process storage, used on native targets and in tests.
///
/// Clones share the same map so a test can keep a handle and inspect what the
/// store wrote.
#[derive(Clone, Debug, Default)]
pub struct MemoryStorage {
    items: Arc<Mutex<HashMap<String, String>>>,
    read_only: bool,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_item(key: &str, value: &str) -> Self {
        let s = Self::default();
        s.lock().insert(key.to_string(), value.to_string());
        s
    }

    /// Rejects every write, the way a full quota does.
    pub fn read_only(mut self) -> Self {
        self.read_only = true;
        self
    }

    pub fn raw(&self, key: &str) -> Option<String> {
        self.lock().get(key).cloned()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, HashMap<String, String>> {
        // A poisoned map only means another test thread panicked mid-insert.
        self.items.lock().unwrap_or_else(|e| e.into_inner())
    }
}

impl KeyValueStore for MemoryStorage {
    fn get_item(&self, key: &str) -> StoreResult<Option<String>> {
        Ok(self.lock().get(key).cloned())
    }

    fn set_item(&self, key: &str, value: &str) -> StoreResult<()> {
        if self.read_only {
            return Err(StoreError::Write {
                key: key.to_string(),
                message: "quota exceeded".to_string(),
            });
        }
        self.lock().insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// Reads and parses `key`. A missing or blank value reads as `None`.
pub fn load_json_from_storage<T: for<'de> Deserialize<'de>>(
    storage: &impl KeyValueStore,
    key: &str,
) -> StoreResult<Option<T>> {
    let Some(json) = storage.get_item(key)? else {
        return Ok(None);
    };
    if json.trim().is_empty() {
        return Ok(None);
    }
    serde_json::from_str(&json).map(Some).map_err(StoreError::Parse)
}

pub fn save_json_to_storage<T: Serialize + ?Sized>(
    storage: &impl KeyValueStore,
    key: &str,
    value: &T,
) -> StoreResult<()> {
    let json = serde_json::to_string(value).map_err(StoreError::Serialize)?;
    storage.set_item(key, &json)
}


// WASM-only tests (run with `cargo test --target wasm32-unknown-unknown` + wasm-bindgen-test-runner)
#[cfg(all(test, target_arch = "wasm32"))]
mod wasm_tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn test_local_storage_roundtrip() {
        let s = LocalStorage;
        s.set_item("keep_notes_test_key", "[]")
            .expect("localStorage should accept writes");
        assert_eq!(
            s.get_item("keep_notes_test_key").expect("read").as_deref(),
            Some("[]")
        );
        assert_eq!(s.get_item("keep_notes_absent_key").expect("read"), None);
    }
}
