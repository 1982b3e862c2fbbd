//! Delve Path - safe navigation of dynamic value trees.
//!
//! This crate provides:
//!
//! - `Cursor`: A read-only view over one node of a `Value` tree plus the log
//!   of failures accumulated on the way to it
//! - `Navigate`: Key, index and path navigation that never panics
//! - `Path`: The compact path query language (`.foo.bar[0]."dotted.key"`)
//! - `ErrorLog`: The shared, copy-on-extend error record
//!
//! # Example
//!
//! ```rust
//! use delve_core::{Object, Value};
//! use delve_path::{Cursor, Navigate};
//!
//! let mut inner = Object::new();
//! inner.insert("bling".into(), Value::Bool(true));
//!
//! let mut root = Object::new();
//! root.insert("baz".into(), Value::Array(vec![Value::Number(1.0), Value::Object(inner)]));
//! root.insert("key.with.dots".into(), Value::Bool(true));
//! let json = Value::Object(root);
//!
//! let cursor = Cursor::new(&json);
//! assert_eq!(cursor.path(".baz[1].bling").get(), &Value::Bool(true));
//! assert_eq!(cursor.key("baz").index(1).key("bling").get(), &Value::Bool(true));
//! assert_eq!(cursor.path(r#"."key.with.dots""#).get(), &Value::Bool(true));
//!
//! // Failed steps never panic; the error log explains what went wrong.
//! let missing = cursor.key("baz").index(3000).key("bling");
//! assert!(missing.has_errors());
//! assert!(missing.get().is_null());
//! assert_eq!(missing.errors().len(), 1);
//! ```

#![no_std]

extern crate alloc;

mod cursor;
mod errors;
mod navigate;
pub mod path;

pub use cursor::Cursor;
pub use errors::ErrorLog;
pub use navigate::Navigate;
pub use path::{ParseError, Path, PathSegment};
