use crate::model::MemoId;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum MemoError {
    #[error("Memo not found: {0}")]
    MemoNotFound(MemoId),

    #[error("Corrupt data under key '{key}': {reason}")]
    CorruptData { key: String, reason: String },

    #[error("Backend unavailable: {message}")]
    BackendUnavailable {
        message: String,
        #[source]
        source: Option<std::io::Error>,
    },

    #[error("Invalid storage name: {0:?}")]
    InvalidName(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("{0}")]
    Api(String),
}

impl MemoError {
    pub fn corrupt(key: impl Into<String>, reason: impl ToString) -> Self {
        Self::CorruptData {
            key: key.into(),
            reason: reason.to_string(),
        }
    }

    pub fn backend(msg: impl Into<String>) -> Self {
        Self::BackendUnavailable {
            message: msg.into(),
            source: None,
        }
    }

    /// Wraps a filesystem failure inside a backend, keeping the cause.
    pub fn backend_io(context: impl Into<String>, source: std::io::Error) -> Self {
        Self::BackendUnavailable {
            message: format!("{}: {}", context.into(), source),
            source: Some(source),
        }
    }
}

pub type Result<T> = std::result::Result<T, MemoError>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;

    #[test]
    fn corrupt_names_the_key() {
        let err = MemoError::corrupt("memos", "expected array");
        assert!(matches!(err, MemoError::CorruptData { .. }));
        assert_eq!(
            err.to_string(),
            "Corrupt data under key 'memos': expected array"
        );
    }

    #[test]
    fn converts_from_json_errors() {
        let json_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err: MemoError = json_err.into();
        assert!(matches!(err, MemoError::Serialization(_)));
    }

    #[test]
    fn backend_io_keeps_source() {
        let io_err = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let err = MemoError::backend_io("writing memos", io_err);
        assert!(matches!(err, MemoError::BackendUnavailable { .. }));
        assert!(err.to_string().contains("writing memos"));
        assert!(err.source().is_some());
    }

    #[test]
    fn api_errors_display_bare_message() {
        let err = MemoError::Api("Title cannot be empty".into());
        assert_eq!(err.to_string(), "Title cannot be empty");
    }
}
