//! Method-call syntax for the combinators, available on every [`Parser`].

use std::fmt;

use crate::combinators::{Alternative, Many, Optional, Rule, Sequence, TryRule, WithContext};
use crate::parser::{BoxedParser, ParseResult, Parser};
use crate::general::MoreGeneral;
use crate::stream::InputStream;
use crate::whitespace::{Lexeme, Tokenizer};

pub trait ParserExt: Parser + Sized {
    /// `self`, or `other` if `self` does not match.
    fn or<Q>(self, other: Q) -> Alternative<Self, Q>
    where
        Q: Parser,
        Self::Output: MoreGeneral<Q::Output>,
    {
        Alternative::new(self, other)
    }

    /// `self` followed by `other`; the attribute is the pair of both.
    fn then<Q: Parser>(self, other: Q) -> Sequence<(Self, Q)> {
        Sequence::new((self, other))
    }

    fn map<F, B>(self, f: F) -> Rule<Self, F, B>
    where
        F: Fn(Self::Output) -> B,
    {
        Rule::new(self, f)
    }

    fn try_map<F, B, E>(self, f: F) -> TryRule<Self, F, B, E>
    where
        F: Fn(Self::Output) -> Result<B, E>,
        E: fmt::Display,
    {
        TryRule::new(self, f)
    }

    fn many(self) -> Many<Self> {
        Many::new(self, false)
    }

    fn many1(self) -> Many<Self> {
        Many::new(self, true)
    }

    fn optional(self) -> Optional<Self> {
        Optional::new(self)
    }

    fn token(self) -> Tokenizer<Self> {
        Tokenizer::new(self)
    }

    fn lexeme(self) -> Lexeme<Self> {
        Lexeme::new(self)
    }

    fn boxed(self) -> BoxedParser<Self::Output>
    where
        Self: Send + Sync + 'static,
    {
        Box::new(self)
    }

    fn context(self, context: impl Into<String>) -> WithContext<Self> {
        WithContext::new(self, context)
    }

    /// Parses from the start of `text`.
    fn parse_str(&self, text: &str) -> ParseResult<Self::Output> {
        self.parse(&InputStream::new(text))
    }
}

impl<P: Parser> ParserExt for P {}
