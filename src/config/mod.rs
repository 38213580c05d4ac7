use crate::storage::NOTES_KEY;
use tracing::Level;

/// Runtime settings injected by the host page through `window.ENV`.
///
/// ```js
/// window.ENV = { NOTES_STORAGE_KEY: "notes", LOG_LEVEL: "debug" };
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EnvConfig {
    pub storage_key: String,
    pub log_level: Level,
}

impl Default for EnvConfig {
    fn default() -> Self {
        Self {
            storage_key: NOTES_KEY.to_string(),
            log_level: Level::INFO,
        }
    }
}

impl EnvConfig {
    pub fn from_window() -> Self {
        let mut cfg = Self::default();

        let Some(env) = web_sys::window().and_then(|w| w.get("ENV")) else {
            return cfg;
        };
        if env.is_undefined() || !env.is_object() {
            return cfg;
        }

        let read = |name: &str| {
            js_sys::Reflect::get(&env, &name.into())
                .ok()
                .and_then(|v| v.as_string())
        };

        if let Some(key) = read("NOTES_STORAGE_KEY") {
            cfg = cfg.with_storage_key(&key);
        }
        if let Some(level) = read("LOG_LEVEL") {
            cfg = cfg.with_log_level(&level);
        }
        cfg
    }

    /// Blank keys are ignored.
    pub fn with_storage_key(mut self, key: &str) -> Self {
        let key = key.trim();
        if !key.is_empty() {
            self.storage_key = key.to_string();
        }
        self
    }

    /// Unknown level names are ignored.
    pub fn with_log_level(mut self, level: &str) -> Self {
        if let Ok(level) = level.trim().parse::<Level>() {
            self.log_level = level;
        }
        self
    }
}
