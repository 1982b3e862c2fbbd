//! Error types for Delve navigation.

use alloc::string::String;
use core::fmt;

/// Result type alias for Delve operations.
pub type Result<T> = core::result::Result<T, Error>;

/// The kind of an [`Error`], without its payload.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    Parse,
    Key,
    Index,
    Generic,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            ErrorKind::Parse => "Parse",
            ErrorKind::Key => "Key",
            ErrorKind::Index => "Index",
            ErrorKind::Generic => "Generic",
        })
    }
}

/// A failed navigation step or projection.
///
/// Errors are plain values: they carry a message and, for key and index
/// failures, the key or index that could not be resolved.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Error {
    /// Malformed path syntax.
    Parse { message: String },
    /// Object lookup on null, on a non-object, or of an absent key.
    Key { message: String, key: String },
    /// Array lookup on null, on a non-array, or out of range.
    Index { message: String, index: usize },
    /// Typed projection of a null or wrongly-shaped value.
    Generic { message: String },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} error: {}", self.kind(), self.message())
    }
}

impl core::error::Error for Error {}

impl Error {
    /// Creates a parse error.
    pub fn parse(message: impl Into<String>) -> Self {
        Error::Parse {
            message: message.into(),
        }
    }

    /// Creates a key error.
    pub fn key(message: impl Into<String>, key: impl Into<String>) -> Self {
        Error::Key {
            message: message.into(),
            key: key.into(),
        }
    }

    /// Creates an index error.
    pub fn index(message: impl Into<String>, index: usize) -> Self {
        Error::Index {
            message: message.into(),
            index,
        }
    }

    /// Creates a generic error.
    pub fn generic(message: impl Into<String>) -> Self {
        Error::Generic {
            message: message.into(),
        }
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::Parse { .. } => ErrorKind::Parse,
            Error::Key { .. } => ErrorKind::Key,
            Error::Index { .. } => ErrorKind::Index,
            Error::Generic { .. } => ErrorKind::Generic,
        }
    }

    pub fn message(&self) -> &str {
        match self {
            Error::Parse { message }
            | Error::Key { message, .. }
            | Error::Index { message, .. }
            | Error::Generic { message } => message,
        }
    }

    /// Returns the key implicated in a key error.
    pub fn key_name(&self) -> Option<&str> {
        match self {
            Error::Key { key, .. } => Some(key),
            _ => None,
        }
    }

    /// Returns the index implicated in an index error.
    pub fn index_value(&self) -> Option<usize> {
        match self {
            Error::Index { index, .. } => Some(*index),
            _ => None,
        }
    }
}
