//! Constructor functions for building grammars, plus the types and traits a
//! grammar module usually needs.
//!
//! ```
//! use pcomb::prelude::*;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let setting = seq((lexeme(regex("[a-z]+")?), token(ch('=')), token(range('0', '9'))));
//! let (_, (key, _, digit)) = setting.parse_str("x = 7")?;
//! assert_eq!(key, "x");
//! assert_eq!(digit, '7');
//! # Ok(())
//! # }
//! ```

use crate::combinators::*;
use crate::error::GrammarResult;
use crate::primitives::{CharEq, CharParser, CharRange, FnPredicate, Literal, RegexMatch};
use crate::whitespace::{Lexeme, Tokenizer};

pub use crate::anchor::{end_of_input, end_of_line, Complete, EndOfInput, EndOfLine};
pub use crate::combinators::IntoAlternative;
pub use crate::config::LexConfig;
pub use crate::parser::{BoxedParser, FnParser, ParseError, ParseResult, Parser};
pub use crate::ext::ParserExt;
pub use crate::forward::{Forward, ForwardRef};
pub use crate::general::MoreGeneral;
pub use crate::span::Span;
pub use crate::stream::{InputStream, Position};
pub use crate::whitespace::WhitespaceSet;

pub fn literal(pattern: impl Into<String>) -> Literal {
    Literal::new(pattern)
}

pub fn ch(c: char) -> CharParser<CharEq> {
    CharParser::new(CharEq(c))
}

pub fn range(lo: char, hi: char) -> CharParser<CharRange> {
    CharParser::new(CharRange { lo, hi })
}

pub fn satisfy<F>(f: F, description: impl Into<String>) -> CharParser<FnPredicate<F>>
where
    F: Fn(char) -> bool,
{
    CharParser::new(FnPredicate::new(f, description))
}

pub fn regex(pattern: &str) -> GrammarResult<RegexMatch> {
    RegexMatch::new(pattern)
}

pub fn seq<T>(parsers: T) -> Sequence<T> {
    Sequence::new(parsers)
}

pub fn alt<T: IntoAlternative>(parsers: T) -> T::Alternative {
    parsers.into_alternative()
}

pub fn choice<O>(parsers: Vec<BoxedParser<O>>) -> Choice<O> {
    Choice::new(parsers)
}

pub fn many<P: Parser>(parser: P) -> Many<P> {
    Many::new(parser, false)
}

pub fn many1<P: Parser>(parser: P) -> Many<P> {
    Many::new(parser, true)
}

pub fn optional<P: Parser>(parser: P) -> Optional<P> {
    Optional::new(parser)
}

pub fn delimited<L, P, R>(left: L, parser: P, right: R) -> Delimited<L, P, R>
where
    L: Parser,
    P: Parser,
    R: Parser,
{
    Delimited::new(left, parser, right)
}

pub fn separated_list<P, S>(item_parser: P, separator_parser: S) -> SeparatedList<P, S>
where
    P: Parser,
    S: Parser,
{
    SeparatedList::new(item_parser, separator_parser)
}

pub fn token<P: Parser>(parser: P) -> Tokenizer<P> {
    Tokenizer::new(parser)
}

pub fn token_with<P: Parser>(parser: P, whitespace: WhitespaceSet) -> Tokenizer<P> {
    Tokenizer::with_whitespace(parser, whitespace)
}

pub fn lexeme<P: Parser>(parser: P) -> Lexeme<P> {
    Lexeme::new(parser)
}

pub fn lexeme_with<P: Parser>(parser: P, whitespace: WhitespaceSet) -> Lexeme<P> {
    Lexeme::with_whitespace(parser, whitespace)
}

pub fn rule<P, F, B>(parser: P, f: F) -> Rule<P, F, B>
where
    P: Parser,
    F: Fn(P::Output) -> B,
{
    Rule::new(parser, f)
}

pub fn try_rule<P, F, B, E>(parser: P, f: F) -> TryRule<P, F, B, E>
where
    P: Parser,
    F: Fn(P::Output) -> Result<B, E>,
    E: std::fmt::Display,
{
    TryRule::new(parser, f)
}

pub fn with_context<P: Parser>(parser: P, context: impl Into<String>) -> WithContext<P> {
    WithContext::new(parser, context)
}

pub fn complete<P: Parser>(parser: P) -> Complete<P> {
    Complete::new(parser)
}
