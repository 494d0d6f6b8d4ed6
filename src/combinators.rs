//! # Parser Combinators
//!
//! Parsers built from other parsers. Every combinator here is fully
//! backtracking: when it fails it reports a [`ParseError`] and the caller can
//! retry something else from the very same input stream.
//!
//! ## Combinator Types
//!
//! * **Sequential**: `Sequence` (tuples of parsers), `Delimited`
//! * **Alternative**: `Alternative` (statically typed, first match wins), `Choice` (boxed, runtime list)
//! * **Repetition**: `Many`, `SeparatedList`, `Optional`
//! * **Transformation**: `Rule`, `TryRule`
//! * **Diagnostics**: `WithContext`

use std::fmt;
use std::marker::PhantomData;

use crate::parser::{BoxedParser, ParseError, ParseResult, Parser};
use crate::general::MoreGeneral;
use crate::stream::InputStream;

/// Sequence: applies a tuple of parsers one after another.
///
/// The attribute is the tuple of every sub-parser's attribute. If any
/// sub-parser fails the whole sequence fails with that error; nothing that the
/// earlier parsers consumed leaks out.
#[derive(Clone, Debug)]
pub struct Sequence<T> {
    parsers: T,
}

impl<T> Sequence<T> {
    pub fn new(parsers: T) -> Self {
        Self { parsers }
    }
}

macro_rules! impl_sequence {
    ($($P:ident $p:ident $v:ident),+) => {
        impl<$($P),+> Parser for Sequence<($($P,)+)>
        where
            $($P: Parser,)+
        {
            type Output = ($($P::Output,)+);

            fn parse(&self, input: &InputStream) -> ParseResult<Self::Output> {
                let ($($p,)+) = &self.parsers;
                let rest = input.clone();
                $(let (rest, $v) = $p.parse(&rest)?;)+
                Ok((rest, ($($v,)+)))
            }
        }
    };
}

impl_sequence!(P1 p1 v1);
impl_sequence!(P1 p1 v1, P2 p2 v2);
impl_sequence!(P1 p1 v1, P2 p2 v2, P3 p3 v3);
impl_sequence!(P1 p1 v1, P2 p2 v2, P3 p3 v3, P4 p4 v4);
impl_sequence!(P1 p1 v1, P2 p2 v2, P3 p3 v3, P4 p4 v4, P5 p5 v5);
impl_sequence!(P1 p1 v1, P2 p2 v2, P3 p3 v3, P4 p4 v4, P5 p5 v5, P6 p6 v6);
impl_sequence!(P1 p1 v1, P2 p2 v2, P3 p3 v3, P4 p4 v4, P5 p5 v5, P6 p6 v6, P7 p7 v7);
impl_sequence!(P1 p1 v1, P2 p2 v2, P3 p3 v3, P4 p4 v4, P5 p5 v5, P6 p6 v6, P7 p7 v7, P8 p8 v8);

/// Alternative: tries `first`, and only if it fails tries `second` on the same
/// input.
///
/// The first branch that matches wins, even if a later one would match more.
/// The attribute type is the [`MoreGeneral`] type of both branches.
#[derive(Clone, Debug)]
pub struct Alternative<A, B> {
    first: A,
    second: B,
}

impl<A, B> Alternative<A, B> {
    pub fn new(first: A, second: B) -> Self {
        Self { first, second }
    }
}

impl<A, B> Parser for Alternative<A, B>
where
    A: Parser,
    B: Parser,
    A::Output: MoreGeneral<B::Output>,
{
    type Output = <A::Output as MoreGeneral<B::Output>>::Output;

    fn parse(&self, input: &InputStream) -> ParseResult<Self::Output> {
        let first_error = match self.first.parse(input) {
            Ok((rest, value)) => {
                return Ok((
                    rest,
                    <A::Output as MoreGeneral<B::Output>>::widen_left(value),
                ));
            }
            Err(e) => e,
        };

        match self.second.parse(&input.record_failure(&first_error)) {
            Ok((rest, value)) => Ok((
                rest,
                <A::Output as MoreGeneral<B::Output>>::widen_right(value),
            )),
            Err(second_error) => Err(ParseError::NoAlternative {
                position: first_error.position().max(second_error.position()),
            }),
        }
    }
}

/// Tuples of parsers that can be turned into a left-nested [`Alternative`].
///
/// `(a, b, c)` becomes `Alternative<Alternative<A, B>, C>`, so the attribute
/// type is folded pairwise from the left.
pub trait IntoAlternative {
    type Alternative;

    fn into_alternative(self) -> Self::Alternative;
}

impl<A, B> IntoAlternative for (A, B) {
    type Alternative = Alternative<A, B>;

    fn into_alternative(self) -> Self::Alternative {
        Alternative::new(self.0, self.1)
    }
}

impl<A, B, C> IntoAlternative for (A, B, C) {
    type Alternative = Alternative<Alternative<A, B>, C>;

    fn into_alternative(self) -> Self::Alternative {
        let (a, b, c) = self;
        Alternative::new((a, b).into_alternative(), c)
    }
}

impl<A, B, C, D> IntoAlternative for (A, B, C, D) {
    type Alternative = Alternative<Alternative<Alternative<A, B>, C>, D>;

    fn into_alternative(self) -> Self::Alternative {
        let (a, b, c, d) = self;
        Alternative::new((a, b, c).into_alternative(), d)
    }
}

impl<A, B, C, D, E> IntoAlternative for (A, B, C, D, E) {
    type Alternative = Alternative<<(A, B, C, D) as IntoAlternative>::Alternative, E>;

    fn into_alternative(self) -> Self::Alternative {
        let (a, b, c, d, e) = self;
        Alternative::new((a, b, c, d).into_alternative(), e)
    }
}

impl<A, B, C, D, E, F> IntoAlternative for (A, B, C, D, E, F) {
    type Alternative = Alternative<<(A, B, C, D, E) as IntoAlternative>::Alternative, F>;

    fn into_alternative(self) -> Self::Alternative {
        let (a, b, c, d, e, f) = self;
        Alternative::new((a, b, c, d, e).into_alternative(), f)
    }
}

/// Choice: Tries multiple parsers and succeeds with the first successful one
///
/// The runtime counterpart of [`Alternative`]: every branch is boxed and has
/// the same attribute type. If all parsers fail, it returns a NoAlternative
/// error.
pub struct Choice<O> {
    /// The list of parsers to try
    parsers: Vec<BoxedParser<O>>,
}

impl<O> Choice<O> {
    pub fn new(parsers: Vec<BoxedParser<O>>) -> Self {
        Self { parsers }
    }
}

impl<O> Parser for Choice<O> {
    type Output = O;

    fn parse(&self, input: &InputStream) -> ParseResult<O> {
        let mut attempt = input.clone();
        for parser in &self.parsers {
            match parser.parse(&attempt) {
                Ok(result) => return Ok(result),
                Err(e) => attempt = attempt.record_failure(&e),
            }
        }
        Err(ParseError::NoAlternative {
            position: attempt.failure_position(),
        })
    }
}

/// Many: Applies a parser repeatedly, collecting the results
///
/// Stops at the first failure of the inner parser; that last attempt is
/// discarded and the residual is the stream after the last success. With
/// `require_one`, zero matches is a failure instead of an empty vector.
///
/// The inner parser must not be able to succeed without consuming input,
/// otherwise this never terminates.
#[derive(Clone, Debug)]
pub struct Many<P> {
    /// The parser to apply repeatedly
    parser: P,
    require_one: bool,
}

impl<P> Many<P> {
    pub fn new(parser: P, require_one: bool) -> Self {
        Self {
            parser,
            require_one,
        }
    }
}

impl<P: Parser> Parser for Many<P> {
    type Output = Vec<P::Output>;

    fn parse(&self, input: &InputStream) -> ParseResult<Self::Output> {
        let mut results = Vec::new();
        let mut current = input.clone();

        loop {
            match self.parser.parse(&current) {
                Ok((rest, value)) => {
                    results.push(value);
                    current = rest;
                }
                Err(e) => {
                    tracing::trace!(
                        target: "pcomb::many",
                        error = %e,
                        position = %current.position(),
                        items_collected = results.len(),
                        "repetition stopped"
                    );
                    if self.require_one && results.is_empty() {
                        return Err(e);
                    }
                    current = current.record_failure(&e);
                    break;
                }
            }
        }

        Ok((current, results))
    }
}

/// Rule: Transforms the attribute of a parser using a function
///
/// This is how grammars build their own values (numbers, syntax trees) out of
/// matched text. Failures pass through untouched.
pub struct Rule<P, F, B> {
    /// The parser whose output will be transformed
    parser: P,
    /// The transformation function
    f: F,
    _phantom: PhantomData<fn() -> B>,
}

impl<P: Clone, F: Clone, B> Clone for Rule<P, F, B> {
    fn clone(&self) -> Self {
        Self {
            parser: self.parser.clone(),
            f: self.f.clone(),
            _phantom: PhantomData,
        }
    }
}

impl<P, F, B> Rule<P, F, B>
where
    P: Parser,
    F: Fn(P::Output) -> B,
{
    pub fn new(parser: P, f: F) -> Self {
        Self {
            parser,
            f,
            _phantom: PhantomData,
        }
    }
}

impl<P, F, B> Parser for Rule<P, F, B>
where
    P: Parser,
    F: Fn(P::Output) -> B,
{
    type Output = B;

    fn parse(&self, input: &InputStream) -> ParseResult<B> {
        self.parser
            .parse(input)
            .map(|(rest, value)| (rest, (self.f)(value)))
    }
}

/// TryRule: like [`Rule`], but the conversion may reject the value.
///
/// A rejected conversion (say, a numeral that overflows) turns into a
/// [`ParseError::Failure`] at the position the wrapped parser started from.
pub struct TryRule<P, F, B, E> {
    parser: P,
    f: F,
    _phantom: PhantomData<fn() -> Result<B, E>>,
}

impl<P: Clone, F: Clone, B, E> Clone for TryRule<P, F, B, E> {
    fn clone(&self) -> Self {
        Self {
            parser: self.parser.clone(),
            f: self.f.clone(),
            _phantom: PhantomData,
        }
    }
}

impl<P, F, B, E> TryRule<P, F, B, E>
where
    P: Parser,
    F: Fn(P::Output) -> Result<B, E>,
    E: fmt::Display,
{
    pub fn new(parser: P, f: F) -> Self {
        Self {
            parser,
            f,
            _phantom: PhantomData,
        }
    }
}

impl<P, F, B, E> Parser for TryRule<P, F, B, E>
where
    P: Parser,
    F: Fn(P::Output) -> Result<B, E>,
    E: fmt::Display,
{
    type Output = B;

    fn parse(&self, input: &InputStream) -> ParseResult<B> {
        let (rest, value) = self.parser.parse(input)?;
        match (self.f)(value) {
            Ok(converted) => Ok((rest, converted)),
            Err(e) => Err(ParseError::failure(input, e)),
        }
    }
}

/// Optional: never fails; yields `None` where the inner parser does not match.
#[derive(Clone, Debug)]
pub struct Optional<P> {
    parser: P,
}

impl<P> Optional<P> {
    pub fn new(parser: P) -> Self {
        Self { parser }
    }
}

impl<P: Parser> Parser for Optional<P> {
    type Output = Option<P::Output>;

    fn parse(&self, input: &InputStream) -> ParseResult<Self::Output> {
        match self.parser.parse(input) {
            Ok((rest, value)) => Ok((rest, Some(value))),
            Err(e) => Ok((input.record_failure(&e), None)),
        }
    }
}

/// Delimited: Parses content between left and right delimiters
///
/// Returns only the content parser's result.
#[derive(Clone, Debug)]
pub struct Delimited<L, P, R> {
    /// Parser for the left delimiter
    left: L,
    /// Parser for the content between delimiters
    parser: P,
    /// Parser for the right delimiter
    right: R,
}

impl<L, P, R> Delimited<L, P, R> {
    pub fn new(left: L, parser: P, right: R) -> Self {
        Self {
            left,
            parser,
            right,
        }
    }
}

impl<L, P, R> Parser for Delimited<L, P, R>
where
    L: Parser,
    P: Parser,
    R: Parser,
{
    type Output = P::Output;

    fn parse(&self, input: &InputStream) -> ParseResult<P::Output> {
        let (rest, _) = self.left.parse(input)?;
        let (rest, value) = self.parser.parse(&rest)?;
        let (rest, _) = self.right.parse(&rest)?;
        Ok((rest, value))
    }
}

/// SeparatedList: Parses a list of items separated by a delimiter
///
/// Zero items is an empty list. A separator that is not followed by an item
/// is left unconsumed.
#[derive(Clone, Debug)]
pub struct SeparatedList<P, S> {
    /// Parser for list items
    item_parser: P,
    /// Parser for the separator between items
    separator_parser: S,
}

impl<P, S> SeparatedList<P, S> {
    pub fn new(item_parser: P, separator_parser: S) -> Self {
        Self {
            item_parser,
            separator_parser,
        }
    }
}

impl<P, S> Parser for SeparatedList<P, S>
where
    P: Parser,
    S: Parser,
{
    type Output = Vec<P::Output>;

    fn parse(&self, input: &InputStream) -> ParseResult<Self::Output> {
        let mut results = Vec::new();
        let (mut current, first) = match self.item_parser.parse(input) {
            Ok(result) => result,
            Err(e) => return Ok((input.record_failure(&e), results)),
        };
        results.push(first);

        loop {
            let after_separator = match self.separator_parser.parse(&current) {
                Ok((rest, _)) => rest,
                Err(e) => {
                    current = current.record_failure(&e);
                    break;
                }
            };
            match self.item_parser.parse(&after_separator) {
                Ok((rest, value)) => {
                    results.push(value);
                    current = rest;
                }
                Err(e) => {
                    current = current.record_failure(&e);
                    break;
                }
            }
        }

        Ok((current, results))
    }
}

/// WithContext: labels failures of the inner parser for diagnostics.
#[derive(Clone, Debug)]
pub struct WithContext<P> {
    parser: P,
    context: String,
}

impl<P> WithContext<P> {
    pub fn new(parser: P, context: impl Into<String>) -> Self {
        Self {
            parser,
            context: context.into(),
        }
    }
}

impl<P: Parser> Parser for WithContext<P> {
    type Output = P::Output;

    fn parse(&self, input: &InputStream) -> ParseResult<P::Output> {
        self.parser
            .parse(input)
            .map_err(|e| e.with_context(&self.context))
    }
}
