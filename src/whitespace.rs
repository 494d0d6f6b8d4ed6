//! # Whitespace Handling
//!
//! [`Tokenizer`] skips whitespace before its parser runs, [`Lexeme`] skips it
//! after. Wrapping a parser in both makes it insensitive to surrounding
//! whitespace on either side.

use lazy_static::lazy_static;

use crate::parser::{ParseResult, Parser};
use crate::stream::InputStream;

/// Characters skipped by default: space, tab, newline, vertical tab, form feed
/// and carriage return.
pub const DEFAULT_WHITESPACE: &str = " \t\n\x0B\x0C\r";

lazy_static! {
    static ref DEFAULT_SET: WhitespaceSet = WhitespaceSet::new(DEFAULT_WHITESPACE);
    static ref INLINE_SET: WhitespaceSet = WhitespaceSet::new(
        &DEFAULT_WHITESPACE
            .chars()
            .filter(|c| !matches!(c, '\n' | '\r'))
            .collect::<String>()
    );
}

/// A set of characters treated as insignificant whitespace.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WhitespaceSet {
    chars: Vec<char>,
}

impl WhitespaceSet {
    pub fn new(chars: &str) -> Self {
        let mut chars: Vec<char> = chars.chars().collect();
        chars.sort_unstable();
        chars.dedup();
        Self { chars }
    }

    /// The default set without line terminators.
    pub fn inline() -> Self {
        INLINE_SET.clone()
    }

    pub fn contains(&self, c: char) -> bool {
        self.chars.binary_search(&c).is_ok()
    }

    /// Advances past the longest run of whitespace at the start of `input`.
    pub fn skip(&self, input: &InputStream) -> InputStream {
        let skipped: usize = input
            .remaining()
            .chars()
            .take_while(|c| self.contains(*c))
            .map(char::len_utf8)
            .sum();
        if skipped == 0 {
            input.clone()
        } else {
            input.advance(skipped)
        }
    }
}

impl Default for WhitespaceSet {
    fn default() -> Self {
        DEFAULT_SET.clone()
    }
}

/// Tokenizer: skips leading whitespace, then applies the wrapped parser.
#[derive(Clone, Debug)]
pub struct Tokenizer<P> {
    parser: P,
    whitespace: WhitespaceSet,
}

impl<P> Tokenizer<P> {
    pub fn new(parser: P) -> Self {
        Self::with_whitespace(parser, WhitespaceSet::default())
    }

    pub fn with_whitespace(parser: P, whitespace: WhitespaceSet) -> Self {
        Self { parser, whitespace }
    }
}

impl<P: Parser> Parser for Tokenizer<P> {
    type Output = P::Output;

    fn parse(&self, input: &InputStream) -> ParseResult<P::Output> {
        self.parser.parse(&self.whitespace.skip(input))
    }
}

/// Lexeme: applies the wrapped parser, then skips trailing whitespace.
///
/// Failures pass through unchanged.
#[derive(Clone, Debug)]
pub struct Lexeme<P> {
    parser: P,
    whitespace: WhitespaceSet,
}

impl<P> Lexeme<P> {
    pub fn new(parser: P) -> Self {
        Self::with_whitespace(parser, WhitespaceSet::default())
    }

    pub fn with_whitespace(parser: P, whitespace: WhitespaceSet) -> Self {
        Self { parser, whitespace }
    }
}

impl<P: Parser> Parser for Lexeme<P> {
    type Output = P::Output;

    fn parse(&self, input: &InputStream) -> ParseResult<P::Output> {
        let (rest, value) = self.parser.parse(input)?;
        Ok((self.whitespace.skip(&rest), value))
    }
}
