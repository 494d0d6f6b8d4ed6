//! # Anchors
//!
//! Parsers never decide on their own whether leftover input is an error. The
//! wrappers here do: they tie a grammar to a whole line or the whole input.

use crate::parser::{ParseError, ParseResult, Parser};
use crate::stream::InputStream;
use crate::whitespace::{Lexeme, Tokenizer, WhitespaceSet};

const PREVIEW_CHARS: usize = 32;

fn trailing_input(rest: &InputStream) -> ParseError {
    if let Some(deeper) = rest.deeper_failure() {
        tracing::trace!(
            target: "pcomb::anchor",
            position = %deeper.position(),
            "reporting failure beyond the residual"
        );
        return deeper.clone();
    }
    tracing::trace!(
        target: "pcomb::anchor",
        position = %rest.position(),
        remaining = rest.len(),
        "rejecting trailing input"
    );
    ParseError::TrailingInput {
        rest: rest.remaining().chars().take(PREVIEW_CHARS).collect(),
        position: rest.position(),
    }
}

/// Complete: succeeds only if the wrapped parser consumes everything.
///
/// Leftover input fails with [`ParseError::TrailingInput`] at the residual.
/// If some attempt failed further ahead than that, its error is returned
/// instead, since it is usually the real mistake.
#[derive(Clone, Debug)]
pub struct Complete<P> {
    parser: P,
}

impl<P> Complete<P> {
    pub fn new(parser: P) -> Self {
        Self { parser }
    }
}

impl<P: Parser> Parser for Complete<P> {
    type Output = P::Output;

    fn parse(&self, input: &InputStream) -> ParseResult<P::Output> {
        let (rest, value) = self.parser.parse(input)?;
        if rest.is_at_end() {
            Ok((rest, value))
        } else {
            Err(trailing_input(&rest))
        }
    }
}

/// Whole input, whitespace allowed on both sides.
pub type EndOfInput<P> = Complete<Lexeme<Tokenizer<P>>>;

pub fn end_of_input<P>(parser: P) -> EndOfInput<P> {
    Complete::new(Lexeme::new(Tokenizer::new(parser)))
}

/// EndOfLine: the wrapped parser must fill the rest of the current line.
///
/// Spaces and tabs around it are skipped. After them comes `\n`, `\r\n`, or
/// the end of input; the residual starts on the next line.
#[derive(Clone, Debug)]
pub struct EndOfLine<P> {
    parser: P,
    whitespace: WhitespaceSet,
}

impl<P> EndOfLine<P> {
    pub fn new(parser: P) -> Self {
        Self {
            parser,
            whitespace: WhitespaceSet::inline(),
        }
    }
}

impl<P: Parser> Parser for EndOfLine<P> {
    type Output = P::Output;

    fn parse(&self, input: &InputStream) -> ParseResult<P::Output> {
        let (rest, value) = self.parser.parse(&self.whitespace.skip(input))?;
        let rest = self.whitespace.skip(&rest);

        let remaining = rest.remaining();
        if remaining.is_empty() {
            Ok((rest, value))
        } else if remaining.starts_with('\n') {
            Ok((rest.advance(1), value))
        } else if remaining.starts_with("\r\n") {
            Ok((rest.advance(2), value))
        } else {
            Err(trailing_input(&rest))
        }
    }
}

pub fn end_of_line<P>(parser: P) -> EndOfLine<P> {
    EndOfLine::new(parser)
}
