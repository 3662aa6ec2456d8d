//! Error types for loading, resolving and listing trees

use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("file '{}' not found", .0.display())]
    DocumentMissing(PathBuf),

    #[error("'{}' does not contain a valid tree: {reason}", .path.display())]
    DocumentMalformed { path: PathBuf, reason: String },

    #[error("cannot access '{0}': No such file or directory")]
    PathNotFound(String),

    #[error("'{0}' is not a valid filter criteria. Available filters are 'dir' and 'file'")]
    InvalidFilter(String),

    #[error("error writing output: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Whether the invocation produced no listing because the input itself is unusable.
    pub fn is_document_error(&self) -> bool {
        matches!(
            self,
            Error::DocumentMissing(_) | Error::DocumentMalformed { .. }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_path_not_found_message_keeps_expression() {
        let err = Error::PathNotFound("./src/missing/".to_string());
        assert_eq!(
            err.to_string(),
            "cannot access './src/missing/': No such file or directory"
        );
    }

    #[test]
    fn test_invalid_filter_message_names_valid_set() {
        let err = Error::InvalidFilter("socket".to_string());
        let msg = err.to_string();
        assert!(msg.starts_with("'socket' is not a valid filter criteria"));
        assert!(msg.contains("'dir' and 'file'"));
    }

    #[test]
    fn test_document_errors_classified() {
        assert!(Error::DocumentMissing(PathBuf::from("structure.json")).is_document_error());
        assert!(
            Error::DocumentMalformed {
                path: PathBuf::from("structure.json"),
                reason: "EOF".to_string(),
            }
            .is_document_error()
        );
        assert!(!Error::PathNotFound("x".to_string()).is_document_error());
    }
}
