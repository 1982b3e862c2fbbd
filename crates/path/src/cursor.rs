//! Cursor navigation over a borrowed value tree.
//!
//! A [`Cursor`] pairs a node of a [`Value`] tree with the log of failures
//! accumulated on the way to it. Navigation never panics: lookups that cannot
//! be resolved produce a cursor over `null` whose log records why.

use crate::errors::ErrorLog;
use crate::navigate::Navigate;
use alloc::format;
use delve_core::{Error, Object, Result, Value};

/// Target of every failed step.
static NULL: Value = Value::Null;

/// A read-only view over one node of a value tree plus its error log.
#[derive(Clone, Debug)]
pub struct Cursor<'a> {
    value: &'a Value,
    errors: ErrorLog,
}

impl<'a> Cursor<'a> {
    /// Creates a root cursor with an empty error log.
    pub fn new(value: &'a Value) -> Self {
        Self {
            value,
            errors: ErrorLog::new(),
        }
    }

    /// Returns the wrapped value.
    ///
    /// This is `null` both when the tree holds a null here and when an
    /// earlier step failed; check [`Cursor::has_errors`] to tell them apart.
    #[inline]
    pub fn get(&self) -> &'a Value {
        self.value
    }

    #[inline]
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    /// Returns every error recorded on the way to this cursor, oldest first.
    pub fn errors(&self) -> &[Error] {
        self.errors.as_slice()
    }

    pub fn error_log(&self) -> &ErrorLog {
        &self.errors
    }

    /// Returns the most recently recorded error.
    pub fn last_error(&self) -> Option<&Error> {
        self.errors.last()
    }

    /// Returns the value if navigation succeeded, or the most recent error.
    pub fn to_result(&self) -> Result<&'a Value> {
        match self.errors.last() {
            Some(error) => Err(error.clone()),
            None => Ok(self.value),
        }
    }

    /// Projects the value as an array.
    pub fn as_array(&self) -> Result<&'a [Value]> {
        self.project("an array", Value::as_array)
    }

    /// Projects the value as an object.
    pub fn as_object(&self) -> Result<&'a Object> {
        self.project("an object", Value::as_object)
    }

    pub fn as_bool(&self) -> Result<bool> {
        self.project("a bool", Value::as_bool)
    }

    pub fn as_f64(&self) -> Result<f64> {
        self.project("a number", Value::as_f64)
    }

    pub fn as_str(&self) -> Result<&'a str> {
        self.project("a string", Value::as_str)
    }

    fn project<T>(&self, expected: &str, f: impl FnOnce(&'a Value) -> Option<T>) -> Result<T> {
        let value = self.value;
        if value.is_null() {
            return Err(Error::generic("underlying value is null"));
        }
        f(value).ok_or_else(|| {
            Error::generic(format!(
                "underlying value is not {} (found {})",
                expected,
                value.kind()
            ))
        })
    }

    fn step(&self, value: &'a Value) -> Self {
        Self {
            value,
            errors: self.errors.clone(),
        }
    }

    fn fail(&self, error: Error) -> Self {
        tracing::debug!(error = %error, "navigation step failed");
        Self {
            value: &NULL,
            errors: self.errors.with(error),
        }
    }
}

impl<'a> From<&'a Value> for Cursor<'a> {
    fn from(value: &'a Value) -> Self {
        Cursor::new(value)
    }
}

impl Navigate for Cursor<'_> {
    fn key(&self, name: &str) -> Self {
        if self.has_errors() {
            return self.clone();
        }
        match self.value {
            Value::Object(obj) => match obj.get(name) {
                Some(value) => self.step(value),
                None => self.fail(Error::key(format!("no key matching ({:?})", name), name)),
            },
            Value::Null => self.fail(Error::key(
                format!("key lookup ({:?}) on null", name),
                name,
            )),
            other => self.fail(Error::key(
                format!("key lookup ({:?}) on non-object {}", name, other.kind()),
                name,
            )),
        }
    }

    fn index(&self, index: usize) -> Self {
        if self.has_errors() {
            return self.clone();
        }
        match self.value {
            Value::Array(arr) => match arr.get(index) {
                Some(value) => self.step(value),
                None => self.fail(Error::index(
                    format!(
                        "index ({}) out of range for array of length {}",
                        index,
                        arr.len()
                    ),
                    index,
                )),
            },
            Value::Null => self.fail(Error::index(
                format!("index lookup ({}) on null", index),
                index,
            )),
            other => self.fail(Error::index(
                format!("index lookup ({}) on non-array {}", index, other.kind()),
                index,
            )),
        }
    }

    fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    fn with_error(&self, error: Error) -> Self {
        self.fail(error)
    }
}
