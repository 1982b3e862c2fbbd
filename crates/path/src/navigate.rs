//! The navigation contract shared by cursors.

use crate::path::{Path, PathSegment};
use delve_core::Error;

/// Step-by-step navigation that never fails outright.
///
/// Every step returns a new navigator. A failed step yields a navigator that
/// records the failure, and stepping further from it is a no-op. Implementors
/// supply the single-step primitives and get path navigation on top of them.
pub trait Navigate: Clone {
    /// Looks up `name` in an object.
    fn key(&self, name: &str) -> Self;

    /// Looks up position `index` in an array.
    fn index(&self, index: usize) -> Self;

    fn has_errors(&self) -> bool;

    /// Derives a failed navigator whose log ends with `error`.
    fn with_error(&self, error: Error) -> Self;

    /// Applies the segments of `path` in order.
    ///
    /// The first failing segment stops the walk; later segments are never
    /// attempted. An empty path returns a copy of `self`.
    fn follow(&self, path: &Path) -> Self {
        tracing::trace!(segments = path.len(), "following path");
        let mut current = self.clone();
        for segment in path {
            if current.has_errors() {
                break;
            }
            current = match segment {
                PathSegment::Key(name) => current.key(name),
                PathSegment::Index(index) => current.index(*index),
            };
        }
        current
    }

    /// Parses `path` and follows it.
    ///
    /// A malformed path yields a failed navigator carrying one parse error.
    /// A navigator that already has errors is returned as is, unparsed.
    fn path(&self, path: &str) -> Self {
        if self.has_errors() {
            return self.clone();
        }
        match Path::parse(path) {
            Ok(parsed) => self.follow(&parsed),
            Err(err) => self.with_error(err.into()),
        }
    }
}
