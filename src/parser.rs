//! # Core Parser Definitions
//!
//! This module defines the parsing contract every parser in the crate
//! implements, and the error type failed attempts are reported with.

use std::fmt;
use std::marker::PhantomData;
use std::sync::Arc;

use thiserror::Error;

use crate::stream::{InputStream, Position};

/// Parser trait defines the core parsing interface.
///
/// A parser attempts to consume a prefix of an [`InputStream`]. On success it
/// returns the residual stream together with its attribute; on failure it
/// returns a [`ParseError`] and consumes nothing. Parsers are immutable once
/// built and can be reused for any number of parse calls.
pub trait Parser {
    /// The attribute a successful parse produces.
    type Output;

    /// Attempts to parse the input at its current position.
    ///
    /// # Returns
    ///
    /// * `Ok((rest, output))` - the residual stream and the parsed value
    /// * `Err(error)` - the parser did not match here
    fn parse(&self, input: &InputStream) -> ParseResult<Self::Output>;
}

/// Result type for parsing operations.
///
/// On success, returns a tuple of the residual stream and the parsed value.
/// On failure, returns a ParseError.
pub type ParseResult<O> = Result<(InputStream, O), ParseError>;

/// Type-erased parser, for recursive rules and grammars built at runtime.
pub type BoxedParser<O> = Box<dyn Parser<Output = O> + Send + Sync>;

impl<P: Parser + ?Sized> Parser for &P {
    type Output = P::Output;

    fn parse(&self, input: &InputStream) -> ParseResult<Self::Output> {
        (**self).parse(input)
    }
}

impl<P: Parser + ?Sized> Parser for Box<P> {
    type Output = P::Output;

    fn parse(&self, input: &InputStream) -> ParseResult<Self::Output> {
        (**self).parse(input)
    }
}

impl<P: Parser + ?Sized> Parser for Arc<P> {
    type Output = P::Output;

    fn parse(&self, input: &InputStream) -> ParseResult<Self::Output> {
        (**self).parse(input)
    }
}

/// Error type for parsing operations.
///
/// Every variant carries the position it describes. `found` in
/// [`ParseError::Unexpected`] is always the text at that position. When an
/// earlier attempt got further than the parser that fails last, the error from
/// that attempt is reported instead, so the position may lie beyond where the
/// failing parser was started.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ParseError {
    /// Input ended where more was expected
    #[error("Unexpected end of input: expected {expected} at {position}")]
    UnexpectedEof { expected: String, position: Position },
    /// Input did not match
    #[error("Unexpected {found:?}: expected {expected} at {position}")]
    Unexpected {
        expected: String,
        found: String,
        position: Position,
    },
    /// No branch of an alternative matched
    #[error("No alternative matched at {position}")]
    NoAlternative { position: Position },
    /// A parser matched but its result was rejected
    #[error("Failure: {message} at {position}")]
    Failure { message: String, position: Position },
    /// A parser that must consume everything left input behind
    #[error("Excessive input {rest:?} at {position}")]
    TrailingInput { rest: String, position: Position },
    #[error("{message}: {inner}")]
    WithContext {
        message: String,
        inner: Box<ParseError>,
    },
}

impl ParseError {
    /// Builds the error for a parser that expected `expected` at `input`.
    ///
    /// If a failure recorded on `input` lies further ahead, that failure is
    /// returned unchanged.
    pub fn expected(input: &InputStream, expected: impl Into<String>) -> Self {
        if let Some(deeper) = input.deeper_failure() {
            return deeper.clone();
        }
        let position = input.position();
        match input.peek() {
            Some(found) => ParseError::Unexpected {
                expected: expected.into(),
                found: found.to_string(),
                position,
            },
            None => ParseError::UnexpectedEof {
                expected: expected.into(),
                position,
            },
        }
    }

    pub fn failure(input: &InputStream, message: impl fmt::Display) -> Self {
        ParseError::Failure {
            message: message.to_string(),
            position: input.position(),
        }
    }

    pub fn with_context(self, ctx: &str) -> Self {
        ParseError::WithContext {
            message: ctx.to_string(),
            inner: Box::new(self),
        }
    }

    pub fn position(&self) -> Position {
        match self {
            ParseError::UnexpectedEof { position, .. } => *position,
            ParseError::Unexpected { position, .. } => *position,
            ParseError::NoAlternative { position } => *position,
            ParseError::Failure { position, .. } => *position,
            ParseError::TrailingInput { position, .. } => *position,
            ParseError::WithContext { inner, .. } => inner.position(),
        }
    }

    /// The message without its position, for callers that print the
    /// position themselves.
    pub fn reason(&self) -> String {
        match self {
            ParseError::UnexpectedEof { expected, .. } => {
                format!("unexpected end of input, expected {}", expected)
            }
            ParseError::Unexpected {
                expected, found, ..
            } => format!("unexpected {:?}, expected {}", found, expected),
            ParseError::NoAlternative { .. } => "no alternative matched".to_string(),
            ParseError::Failure { message, .. } => message.clone(),
            ParseError::TrailingInput { rest, .. } => format!("excessive input {:?}", rest),
            ParseError::WithContext { message, inner } => {
                format!("{}: {}", message, inner.reason())
            }
        }
    }

    /// The innermost error, with all context layers removed.
    pub fn root_cause(&self) -> &ParseError {
        match self {
            ParseError::WithContext { inner, .. } => inner.root_cause(),
            other => other,
        }
    }
}

/// Adapts a plain function into a parser, for hand-written primitives.
pub struct FnParser<F, O> {
    f: F,
    _phantom: PhantomData<fn() -> O>,
}

impl<F: Clone, O> Clone for FnParser<F, O> {
    fn clone(&self) -> Self {
        Self {
            f: self.f.clone(),
            _phantom: PhantomData,
        }
    }
}

impl<F, O> FnParser<F, O>
where
    F: Fn(&InputStream) -> ParseResult<O>,
{
    pub fn new(f: F) -> Self {
        Self {
            f,
            _phantom: PhantomData,
        }
    }
}

impl<F, O> Parser for FnParser<F, O>
where
    F: Fn(&InputStream) -> ParseResult<O>,
{
    type Output = O;

    fn parse(&self, input: &InputStream) -> ParseResult<O> {
        (self.f)(input)
    }
}
