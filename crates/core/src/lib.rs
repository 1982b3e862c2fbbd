//! Delve Core - dynamic value tree and error types for Delve.
//!
//! This crate provides the data model that Delve cursors navigate:
//!
//! - `Value`: The decoded JSON tree (null, bool, number, string, array, object)
//! - `Object`: An unordered string-keyed map of values
//! - `ValueKind`: The shape of a value, used in error messages
//! - `Error`: Parse, key, index and generic navigation failures
//!
//! # Example
//!
//! ```rust
//! use delve_core::{Object, Value, ValueKind};
//!
//! let mut obj = Object::new();
//! obj.insert("tags".into(), Value::Array(vec!["a".into(), "b".into()]));
//!
//! let json = Value::Object(obj);
//! assert_eq!(json.kind(), ValueKind::Object);
//! assert_eq!(json.get("tags").and_then(|t| t.get_index(1)), Some(&Value::from("b")));
//! ```

#![no_std]

extern crate alloc;

mod error;
mod value;

pub use error::{Error, ErrorKind, Result};
pub use value::{Object, Value, ValueKind};
