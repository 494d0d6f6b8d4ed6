//! # Input Stream
//!
//! An immutable cursor over a shared text buffer. Every parser receives a
//! stream and hands back a *new* stream positioned after whatever it consumed;
//! the buffer itself is never touched.
//!
//! Besides the byte offset the stream tracks line and column numbers, and the
//! furthest failure any parse attempt ran into along the way. Both are
//! observational: no matcher ever looks at them to decide whether it matches.

use std::fmt;
use std::sync::Arc;

use crate::parser::ParseError;
use crate::span::Span;

/// A location in the input. `line` and `column` start at 1.
///
/// Positions order by `offset` first, which agrees with the line/column order
/// for any two positions taken from the same buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Position {
    pub offset: usize,
    pub line: usize,
    pub column: usize,
}

impl Position {
    pub const START: Position = Position {
        offset: 0,
        line: 1,
        column: 1,
    };
}

impl Default for Position {
    fn default() -> Self {
        Self::START
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "line {}, column {}", self.line, self.column)
    }
}

/// Cursor over a shared, immutable text buffer.
///
/// Cloning is cheap (one reference count bump) and clones are fully
/// independent values.
#[derive(Clone)]
pub struct InputStream {
    source: Arc<str>,
    position: Position,
    /// Furthest failure seen on the way to this stream.
    deepest: Option<Arc<ParseError>>,
}

impl InputStream {
    /// Creates a stream positioned at the start of `source`.
    pub fn new(source: impl Into<Arc<str>>) -> Self {
        Self {
            source: source.into(),
            position: Position::START,
            deepest: None,
        }
    }

    pub fn is_at_end(&self) -> bool {
        self.position.offset == self.source.len()
    }

    /// The next character, if any.
    pub fn peek(&self) -> Option<char> {
        self.remaining().chars().next()
    }

    /// The unconsumed part of the buffer.
    pub fn remaining(&self) -> &str {
        &self.source[self.position.offset..]
    }

    /// Remaining length in bytes.
    pub fn len(&self) -> usize {
        self.source.len() - self.position.offset
    }

    pub fn is_empty(&self) -> bool {
        self.is_at_end()
    }

    pub fn position(&self) -> Position {
        self.position
    }

    pub fn offset(&self) -> usize {
        self.position.offset
    }

    pub fn line(&self) -> usize {
        self.position.line
    }

    pub fn column(&self) -> usize {
        self.position.column
    }

    /// The whole buffer, including the text before the current position.
    pub fn source(&self) -> &str {
        &self.source
    }

    /// Furthest failure position recorded along this stream's derivation.
    pub fn furthest(&self) -> Position {
        self.deepest
            .as_ref()
            .map_or(Position::START, |error| error.position())
    }

    /// The recorded failure, if it lies strictly beyond the current position.
    pub fn deeper_failure(&self) -> Option<&ParseError> {
        self.deepest
            .as_deref()
            .filter(|error| error.position() > self.position)
    }

    /// The current position, or a further one if an earlier attempt got deeper.
    pub fn failure_position(&self) -> Position {
        self.position.max(self.furthest())
    }

    /// Returns a stream `n` bytes further along.
    ///
    /// # Panics
    ///
    /// Panics if `n` exceeds the remaining length or does not fall on a
    /// character boundary. Parsers only ever advance over text they have
    /// already matched, so either case is a bug in the caller.
    pub fn advance(&self, n: usize) -> InputStream {
        let rest = self.remaining();
        assert!(
            n <= rest.len(),
            "cannot advance {} bytes at {}: only {} bytes remain",
            n,
            self.position,
            rest.len()
        );
        assert!(
            rest.is_char_boundary(n),
            "cannot advance {} bytes at {}: not a character boundary",
            n,
            self.position
        );

        let mut position = self.position;
        for c in rest[..n].chars() {
            if c == '\n' {
                position.line += 1;
                position.column = 1;
            } else {
                position.column += 1;
            }
        }
        position.offset += n;

        InputStream {
            source: Arc::clone(&self.source),
            position,
            deepest: self.deepest.clone(),
        }
    }

    /// The next `len` bytes as a [`Span`], without consuming them.
    ///
    /// # Panics
    ///
    /// Same preconditions as [`InputStream::advance`].
    pub fn span(&self, len: usize) -> Span {
        let start = self.position.offset;
        assert!(
            len <= self.len() && self.remaining().is_char_boundary(len),
            "span of {} bytes at {} is out of bounds",
            len,
            self.position
        );
        Span::new(Arc::clone(&self.source), start, start + len, self.position)
    }

    /// The same stream, remembering `error` if it got further than every
    /// failure recorded so far. On a tie the earlier one is kept.
    pub fn record_failure(&self, error: &ParseError) -> InputStream {
        let deepest = match &self.deepest {
            Some(known) if known.position() >= error.position() => Some(Arc::clone(known)),
            _ => Some(Arc::new(error.clone())),
        };
        InputStream {
            source: Arc::clone(&self.source),
            position: self.position,
            deepest,
        }
    }

    /// Whether both streams read from the same buffer.
    pub fn same_buffer(&self, other: &InputStream) -> bool {
        Arc::ptr_eq(&self.source, &other.source)
    }
}

impl From<&str> for InputStream {
    fn from(source: &str) -> Self {
        InputStream::new(source)
    }
}

impl From<String> for InputStream {
    fn from(source: String) -> Self {
        InputStream::new(source)
    }
}

/// Streams are equal when they point at the same place in the same buffer.
impl PartialEq for InputStream {
    fn eq(&self, other: &Self) -> bool {
        self.same_buffer(other) && self.position.offset == other.position.offset
    }
}

impl Eq for InputStream {}

impl fmt::Debug for InputStream {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        const PREVIEW: usize = 24;
        let rest = self.remaining();
        let preview: String = rest.chars().take(PREVIEW).collect();
        f.debug_struct("InputStream")
            .field("position", &self.position)
            .field("remaining", &preview)
            .field("truncated", &(preview.len() < rest.len()))
            .finish()
    }
}
