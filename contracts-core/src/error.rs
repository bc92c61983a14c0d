use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Errors raised by a [`Repository`](crate::Repository) while touching its backing file.
///
/// Only saving can fail. Loading treats an unreadable file as an empty store, missing records
/// are an empty `Option`, and malformed lines are skipped during load.
#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("Failed to write {}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl RepositoryError {
    pub(crate) fn write(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Write {
            path: path.into(),
            source,
        }
    }
}

/// Why a persisted line could not be turned back into a record.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseError {
    #[error("line is empty")]
    Empty,
    #[error("missing field `{0}`")]
    MissingField(&'static str),
    #[error("field `{field}` is not an integer: '{value}'")]
    InvalidInteger { field: &'static str, value: String },
    #[error("field `{field}` is not a number: '{value}'")]
    InvalidNumber { field: &'static str, value: String },
    #[error("field `{field}` is not a 0/1 flag: '{value}'")]
    InvalidFlag { field: &'static str, value: String },
    #[error("field `{field}` has unknown value '{value}'")]
    UnknownVariant { field: &'static str, value: String },
    #[error("unexpected trailing data: '{0}'")]
    TrailingData(String),
}
