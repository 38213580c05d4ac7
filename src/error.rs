use thiserror::Error;

/// Failures raised by the storage backend and the note store.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("local storage is not available")]
    Unavailable,

    #[error("failed to read `{key}` from storage: {message}")]
    Read { key: String, message: String },

    #[error("failed to write `{key}` to storage: {message}")]
    Write { key: String, message: String },

    #[error("stored notes are not valid JSON")]
    Parse(#[source] serde_json::Error),

    #[error("failed to serialize notes")]
    Serialize(#[source] serde_json::Error),
}

impl StoreError {
    /// Write failures can be retried by dispatching again or on `flush`.
    pub fn is_retryable(&self) -> bool {
        matches!(self, StoreError::Write { .. } | StoreError::Unavailable)
    }
}

pub type StoreResult<T> = Result<T, StoreError>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;

    #[test]
    fn test_parse_error_reports_cause_once() {
        let cause = serde_json::from_str::<Vec<u8>>("not json").unwrap_err();
        let cause_text = cause.to_string();
        let err = StoreError::Parse(cause);

        assert_eq!(err.to_string(), "stored notes are not valid JSON");
        let source = err.source().expect("parse error keeps its cause");
        assert_eq!(source.to_string(), cause_text);
    }

    #[test]
    fn test_only_write_side_failures_are_retryable() {
        let write = StoreError::Write {
            key: "notes".to_string(),
            message: "quota".to_string(),
        };
        assert!(write.is_retryable());
        assert!(StoreError::Unavailable.is_retryable());

        let parse = StoreError::Parse(serde_json::from_str::<Vec<u8>>("").unwrap_err());
        assert!(!parse.is_retryable());
    }
}
