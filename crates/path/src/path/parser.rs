//! Path query parser.
//!
//! Supports the following syntax:
//! - `.` - segment separator, optional before any segment
//! - `key` - object key made of letters, digits, `_` and `-`
//! - `"key"` - quoted object key, may hold anything except `"`
//! - `[0]` - array index
//!
//! Since separators are optional, `nodot` and `.nodot` parse to the same path,
//! and bracket forms concatenate directly: `a[0][1].b`.

use alloc::format;
use alloc::string::{String, ToString};
use alloc::vec::Vec;
use core::fmt;
use core::str::FromStr;

/// One navigation step of a path.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum PathSegment {
    /// Object key lookup
    Key(String),
    /// Array index lookup
    Index(usize),
}

impl PathSegment {
    pub fn as_key(&self) -> Option<&str> {
        match self {
            PathSegment::Key(k) => Some(k.as_str()),
            PathSegment::Index(_) => None,
        }
    }

    pub fn as_index(&self) -> Option<usize> {
        match self {
            PathSegment::Index(i) => Some(*i),
            PathSegment::Key(_) => None,
        }
    }
}

impl From<&str> for PathSegment {
    fn from(key: &str) -> Self {
        PathSegment::Key(key.to_string())
    }
}

impl From<String> for PathSegment {
    fn from(key: String) -> Self {
        PathSegment::Key(key)
    }
}

impl From<usize> for PathSegment {
    fn from(index: usize) -> Self {
        PathSegment::Index(index)
    }
}

/// A parsed path query: an ordered list of segments.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Path {
    segments: Vec<PathSegment>,
}

/// Error type for path parsing.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ParseError {
    pub message: String,
    /// Byte offset of the offending token.
    pub position: usize,
}

impl ParseError {
    fn new(message: impl Into<String>, position: usize) -> Self {
        Self {
            message: message.into(),
            position,
        }
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} at position {}", self.message, self.position)
    }
}

impl core::error::Error for ParseError {}

impl From<ParseError> for delve_core::Error {
    fn from(err: ParseError) -> Self {
        delve_core::Error::parse(err.to_string())
    }
}

#[inline]
fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_' || c == '-'
}

#[inline]
fn is_delimiter(c: char) -> bool {
    matches!(c, '.' | '[' | '"')
}

/// Parser state.
struct Parser<'a> {
    input: &'a str,
    pos: usize,
}

impl<'a> Parser<'a> {
    fn new(input: &'a str) -> Self {
        Self { input, pos: 0 }
    }

    fn peek(&self) -> Option<char> {
        self.input[self.pos..].chars().next()
    }

    fn advance(&mut self) {
        if let Some(c) = self.peek() {
            self.pos += c.len_utf8();
        }
    }

    fn rest(&self) -> &'a str {
        &self.input[self.pos..]
    }

    fn parse_segment(&mut self) -> Result<PathSegment, ParseError> {
        match self.peek() {
            Some('"') => self.parse_quoted_key().map(PathSegment::Key),
            Some('[') => self.parse_index().map(PathSegment::Index),
            Some(c) if is_word_char(c) => Ok(PathSegment::Key(self.parse_word())),
            _ => Err(self.unrecognized_token()),
        }
    }

    fn parse_word(&mut self) -> String {
        let start = self.pos;
        while let Some(c) = self.peek() {
            if is_word_char(c) {
                self.advance();
            } else {
                break;
            }
        }
        self.input[start..self.pos].to_string()
    }

    fn parse_quoted_key(&mut self) -> Result<String, ParseError> {
        let start = self.pos;
        self.advance();
        let rest = self.rest();
        match rest.find('"') {
            Some(len) => {
                let key = rest[..len].to_string();
                self.pos += len + 1;
                Ok(key)
            }
            None => Err(ParseError::new("unterminated quoted key", start)),
        }
    }

    fn parse_index(&mut self) -> Result<usize, ParseError> {
        let start = self.pos;
        self.advance();
        let rest = self.rest();
        let Some(len) = rest.find(']') else {
            return Err(ParseError::new(
                format!("unrecognized token {:?}", &self.input[start..]),
                start,
            ));
        };
        let contents = &rest[..len];
        self.pos += len + 1;

        if contents.is_empty() || !contents.bytes().all(|b| b.is_ascii_digit()) {
            return Err(ParseError::new(
                format!("non-numeric index [{}]", contents),
                start,
            ));
        }
        contents
            .parse()
            .map_err(|_| ParseError::new(format!("index [{}] too large", contents), start))
    }

    /// Builds an error naming the chunk from the current position up to the
    /// next delimiter.
    fn unrecognized_token(&self) -> ParseError {
        let rest = self.rest();
        let first = rest.chars().next().map_or(0, char::len_utf8);
        let end = rest[first..]
            .find(is_delimiter)
            .map_or(rest.len(), |i| i + first);
        ParseError::new(format!("unrecognized token {:?}", &rest[..end]), self.pos)
    }
}

impl Path {
    /// Creates an empty path, which navigates nowhere.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses a path query from a string.
    pub fn parse(input: &str) -> Result<Self, ParseError> {
        parse_segments(input)
            .map(|segments| Path { segments })
            .inspect_err(|err| {
                tracing::debug!(
                    path = input,
                    position = err.position,
                    reason = %err.message,
                    "path parse failed"
                );
            })
    }

    /// Appends a segment.
    pub fn push(&mut self, segment: impl Into<PathSegment>) {
        self.segments.push(segment.into());
    }

    pub fn segments(&self) -> &[PathSegment] {
        &self.segments
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.segments.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    pub fn iter(&self) -> core::slice::Iter<'_, PathSegment> {
        self.segments.iter()
    }
}

fn parse_segments(input: &str) -> Result<Vec<PathSegment>, ParseError> {
    let mut parser = Parser::new(input);
    let mut segments = Vec::new();

    while let Some(c) = parser.peek() {
        if c == '.' {
            let at = parser.pos;
            parser.advance();
            if matches!(parser.peek(), None | Some('.')) {
                return Err(ParseError::new("dangling separator", at));
            }
        }
        segments.push(parser.parse_segment()?);
    }

    Ok(segments)
}

impl FromStr for Path {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Path::parse(s)
    }
}

/// Renders the canonical form: `.key` for plain keys, `."key"` otherwise, `[N]` for indices.
impl fmt::Display for Path {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for segment in &self.segments {
            match segment {
                PathSegment::Key(k) if !k.is_empty() && k.chars().all(is_word_char) => {
                    write!(f, ".{}", k)?
                }
                PathSegment::Key(k) => write!(f, ".\"{}\"", k)?,
                PathSegment::Index(i) => write!(f, "[{}]", i)?,
            }
        }
        Ok(())
    }
}

impl From<Vec<PathSegment>> for Path {
    fn from(segments: Vec<PathSegment>) -> Self {
        Self { segments }
    }
}

impl FromIterator<PathSegment> for Path {
    fn from_iter<I: IntoIterator<Item = PathSegment>>(iter: I) -> Self {
        Self {
            segments: iter.into_iter().collect(),
        }
    }
}

impl IntoIterator for Path {
    type Item = PathSegment;
    type IntoIter = alloc::vec::IntoIter<PathSegment>;

    fn into_iter(self) -> Self::IntoIter {
        self.segments.into_iter()
    }
}

impl<'a> IntoIterator for &'a Path {
    type Item = &'a PathSegment;
    type IntoIter = core::slice::Iter<'a, PathSegment>;

    fn into_iter(self) -> Self::IntoIter {
        self.segments.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;

    fn key(k: &str) -> PathSegment {
        PathSegment::Key(k.into())
    }

    fn idx(i: usize) -> PathSegment {
        PathSegment::Index(i)
    }

    #[test]
    fn test_parse_single_key() {
        let path = Path::parse(".key").unwrap();
        assert_eq!(path.segments(), &[key("key")]);
    }

    #[test]
    fn test_parse_many_keys() {
        let path = Path::parse(".many.keys").unwrap();
        assert_eq!(path.segments(), &[key("many"), key("keys")]);
    }

    #[test]
    fn test_parse_indices() {
        assert_eq!(Path::parse("[0]").unwrap().segments(), &[idx(0)]);
        assert_eq!(Path::parse("[1][2]").unwrap().segments(), &[idx(1), idx(2)]);
    }

    #[test]
    fn test_parse_complex() {
        let path = Path::parse(".complex[1].entry.with[1][2].lots").unwrap();
        assert_eq!(
            path.segments(),
            &[
                key("complex"),
                idx(1),
                key("entry"),
                key("with"),
                idx(1),
                idx(2),
                key("lots"),
            ]
        );
    }

    #[test]
    fn test_parse_leading_separator_optional() {
        assert_eq!(Path::parse("nodot").unwrap(), Path::parse(".nodot").unwrap());
        assert_eq!(
            Path::parse("a[0][1].b").unwrap().segments(),
            &[key("a"), idx(0), idx(1), key("b")]
        );
    }

    #[test]
    fn test_parse_word_characters() {
        let path = Path::parse(".not-an-object.snake_case.x9").unwrap();
        assert_eq!(
            path.segments(),
            &[key("not-an-object"), key("snake_case"), key("x9")]
        );
    }

    #[test]
    fn test_parse_quoted_key() {
        let path = Path::parse(".\"key.with.special_characters\"").unwrap();
        assert_eq!(path.segments(), &[key("key.with.special_characters")]);

        let path = Path::parse(".foo.\"special.key\"[2]").unwrap();
        assert_eq!(path.segments(), &[key("foo"), key("special.key"), idx(2)]);

        let path = Path::parse("\"with [brackets] and spaces\"").unwrap();
        assert_eq!(path.segments(), &[key("with [brackets] and spaces")]);
    }

    #[test]
    fn test_parse_empty_quoted_key() {
        let path = Path::parse(".\"\"").unwrap();
        assert_eq!(path.segments(), &[key("")]);
    }

    #[test]
    fn test_parse_empty() {
        let path = Path::parse("").unwrap();
        assert!(path.is_empty());
    }

    #[test]
    fn test_parse_large_index() {
        let path = Path::parse("[999999]").unwrap();
        assert_eq!(path.segments(), &[idx(999999)]);
    }

    // Error handling tests
    #[test]
    fn test_parse_error_non_numeric_index() {
        let err = Path::parse("[NaN]").unwrap_err();
        assert_eq!(err.message, "non-numeric index [NaN]");
        assert_eq!(err.position, 0);

        let err = Path::parse(".foo.baz[invalid]").unwrap_err();
        assert_eq!(err.message, "non-numeric index [invalid]");
        assert_eq!(err.position, 8);

        assert!(Path::parse("[-1]").is_err());
        assert!(Path::parse("[]").is_err());
        assert!(Path::parse("[1.5]").is_err());
    }

    #[test]
    fn test_parse_error_index_overflow() {
        let err = Path::parse("[99999999999999999999999999]").unwrap_err();
        assert!(err.message.contains("too large"));
    }

    #[test]
    fn test_parse_error_unclosed_bracket() {
        let err = Path::parse(".a[0").unwrap_err();
        assert_eq!(err.message, "unrecognized token \"[0\"");
        assert_eq!(err.position, 2);
    }

    #[test]
    fn test_parse_error_unterminated_quote() {
        let err = Path::parse(".\"open").unwrap_err();
        assert_eq!(err.message, "unterminated quoted key");
        assert_eq!(err.position, 1);
    }

    #[test]
    fn test_parse_error_unrecognized_token() {
        let err = Path::parse(".foo bar").unwrap_err();
        assert_eq!(err.message, "unrecognized token \" bar\"");
        assert_eq!(err.position, 4);

        let err = Path::parse("a]b.c").unwrap_err();
        assert_eq!(err.message, "unrecognized token \"]b\"");

        assert!(Path::parse("$.foo").is_err());
    }

    #[test]
    fn test_parse_error_dangling_separator() {
        assert_eq!(Path::parse(".").unwrap_err().message, "dangling separator");
        assert_eq!(Path::parse("a.").unwrap_err().position, 1);
        assert_eq!(Path::parse("a..b").unwrap_err().position, 1);
    }

    #[test]
    fn test_parse_error_into_core_error() {
        let err: delve_core::Error = Path::parse("[x]").unwrap_err().into();
        assert_eq!(err.kind(), delve_core::ErrorKind::Parse);
        assert_eq!(err.message(), "non-numeric index [x] at position 0");
    }

    #[test]
    fn test_display_canonical_form() {
        let path = Path::parse("foo[0].\"a.b\".c-d[12]").unwrap();
        assert_eq!(path.to_string(), ".foo[0].\"a.b\".c-d[12]");
        assert_eq!(Path::parse(&path.to_string()).unwrap(), path);
        assert_eq!(Path::new().to_string(), "");
    }

    #[test]
    fn test_build_path() {
        let mut path = Path::new();
        path.push("foo");
        path.push(3usize);
        assert_eq!(path, ".foo[3]".parse::<Path>().unwrap());
        assert_eq!(path.len(), 2);

        let collected: Path = vec![key("a"), idx(1)].into_iter().collect();
        assert_eq!(collected.segments()[1].as_index(), Some(1));
        assert_eq!(collected.segments()[0].as_key(), Some("a"));
    }
}
