//! Matched text, shared with the input buffer it came from.

use std::fmt;
use std::hash::{Hash, Hasher};
use std::ops::{Deref, Range};
use std::sync::Arc;

use crate::stream::Position;

/// A slice of the input that some parser matched.
///
/// Holds a handle to the whole buffer plus a byte range, so it stays valid
/// after the stream it came from is gone. Compares, hashes and prints as the
/// text it covers.
#[derive(Clone)]
pub struct Span {
    source: Arc<str>,
    start: usize,
    end: usize,
    position: Position,
}

impl Span {
    pub(crate) fn new(source: Arc<str>, start: usize, end: usize, position: Position) -> Self {
        debug_assert!(start <= end && end <= source.len());
        Self {
            source,
            start,
            end,
            position,
        }
    }

    pub fn as_str(&self) -> &str {
        &self.source[self.start..self.end]
    }

    /// Where the match starts.
    pub fn position(&self) -> Position {
        self.position
    }

    /// Byte range within the original input.
    pub fn range(&self) -> Range<usize> {
        self.start..self.end
    }

    pub fn len(&self) -> usize {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }
}

impl Deref for Span {
    type Target = str;

    fn deref(&self) -> &str {
        self.as_str()
    }
}

impl AsRef<str> for Span {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl PartialEq for Span {
    fn eq(&self, other: &Self) -> bool {
        self.as_str() == other.as_str()
    }
}

impl Eq for Span {}

impl PartialEq<str> for Span {
    fn eq(&self, other: &str) -> bool {
        self.as_str() == other
    }
}

impl PartialEq<&str> for Span {
    fn eq(&self, other: &&str) -> bool {
        self.as_str() == *other
    }
}

impl PartialEq<String> for Span {
    fn eq(&self, other: &String) -> bool {
        self.as_str() == other.as_str()
    }
}

impl Hash for Span {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.as_str().hash(state)
    }
}

impl fmt::Debug for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self.as_str(), f)
    }
}

impl fmt::Display for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<Span> for String {
    fn from(span: Span) -> Self {
        span.as_str().to_string()
    }
}
