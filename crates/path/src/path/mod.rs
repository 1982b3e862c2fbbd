//! Path query module.

pub mod parser;

pub use parser::{ParseError, Path, PathSegment};
