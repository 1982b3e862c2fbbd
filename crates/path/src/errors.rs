//! Append-only error log carried by cursors.

use alloc::sync::Arc;
use alloc::vec::Vec;
use core::fmt;
use delve_core::Error;

/// An ordered, shared, copy-on-extend record of navigation failures.
///
/// Cloning a log is a reference-count bump. Extending it never touches the
/// original: [`ErrorLog::with`] builds a new log, so sibling cursors derived
/// from one ancestor cannot observe each other's failures. The empty log does
/// not allocate.
#[derive(Clone, Debug, Default)]
pub struct ErrorLog {
    entries: Option<Arc<[Error]>>,
}

impl ErrorLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a new log holding this log's entries followed by `error`.
    pub fn with(&self, error: Error) -> Self {
        let mut entries = Vec::with_capacity(self.len() + 1);
        entries.extend_from_slice(self.as_slice());
        entries.push(error);
        Self {
            entries: Some(entries.into()),
        }
    }

    pub fn as_slice(&self) -> &[Error] {
        self.entries.as_deref().unwrap_or(&[])
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.as_slice().len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.as_slice().is_empty()
    }

    /// Returns the most recently appended error.
    pub fn last(&self) -> Option<&Error> {
        self.as_slice().last()
    }

    pub fn iter(&self) -> core::slice::Iter<'_, Error> {
        self.as_slice().iter()
    }
}

impl PartialEq for ErrorLog {
    fn eq(&self, other: &Self) -> bool {
        self.as_slice() == other.as_slice()
    }
}

impl<'a> IntoIterator for &'a ErrorLog {
    type Item = &'a Error;
    type IntoIter = core::slice::Iter<'a, Error>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Joins the entries with `"; "`.
impl fmt::Display for ErrorLog {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, error) in self.iter().enumerate() {
            if i > 0 {
                f.write_str("; ")?;
            }
            write!(f, "{}", error)?;
        }
        Ok(())
    }
}
