//! # Primitive Matchers
//!
//! Leaf parsers with no sub-parsers:
//!
//! * [`Literal`] matches a fixed string
//! * [`CharParser`] matches one character satisfying a [`CharPredicate`]
//! * [`RegexMatch`] matches a regular expression anchored at the current position
//!
//! None of them consume anything when they fail.

use regex_automata::meta::Regex;
use regex_automata::{Anchored, Input};

use crate::parser::{ParseError, ParseResult, Parser};
use crate::error::{GrammarError, GrammarResult};
use crate::span::Span;
use crate::stream::InputStream;

/// Literal: succeeds iff the input starts with `pattern`.
#[derive(Clone, Debug)]
pub struct Literal {
    pattern: String,
}

impl Literal {
    pub fn new(pattern: impl Into<String>) -> Self {
        Self {
            pattern: pattern.into(),
        }
    }

    pub fn pattern(&self) -> &str {
        &self.pattern
    }
}

impl Parser for Literal {
    type Output = Span;

    fn parse(&self, input: &InputStream) -> ParseResult<Span> {
        let remaining = input.remaining();
        if remaining.starts_with(self.pattern.as_str()) {
            let len = self.pattern.len();
            Ok((input.advance(len), input.span(len)))
        } else if self.pattern.starts_with(remaining) && input.deeper_failure().is_none() {
            // input ran out partway through the pattern
            Err(ParseError::UnexpectedEof {
                expected: format!("{:?}", self.pattern),
                position: input.position(),
            })
        } else {
            Err(ParseError::expected(input, format!("{:?}", self.pattern)))
        }
    }
}

/// Decides whether a single character matches.
pub trait CharPredicate {
    fn matches(&self, c: char) -> bool;

    /// Human readable description used in error messages.
    fn describe(&self) -> String;
}

/// Matches one specific character.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CharEq(pub char);

impl CharPredicate for CharEq {
    fn matches(&self, c: char) -> bool {
        c == self.0
    }

    fn describe(&self) -> String {
        format!("{:?}", self.0)
    }
}

/// Matches any character in `lo..=hi`. An empty range never matches.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CharRange {
    pub lo: char,
    pub hi: char,
}

impl CharPredicate for CharRange {
    fn matches(&self, c: char) -> bool {
        (self.lo..=self.hi).contains(&c)
    }

    fn describe(&self) -> String {
        format!("{:?}..={:?}", self.lo, self.hi)
    }
}

/// Wraps an arbitrary `Fn(char) -> bool`.
#[derive(Clone)]
pub struct FnPredicate<F> {
    f: F,
    description: String,
}

impl<F: Fn(char) -> bool> FnPredicate<F> {
    pub fn new(f: F, description: impl Into<String>) -> Self {
        Self {
            f,
            description: description.into(),
        }
    }
}

impl<F: Fn(char) -> bool> CharPredicate for FnPredicate<F> {
    fn matches(&self, c: char) -> bool {
        (self.f)(c)
    }

    fn describe(&self) -> String {
        self.description.clone()
    }
}

/// CharParser: consumes exactly one character if it satisfies the predicate.
#[derive(Clone)]
pub struct CharParser<C> {
    predicate: C,
}

impl<C: CharPredicate> CharParser<C> {
    pub fn new(predicate: C) -> Self {
        Self { predicate }
    }
}

impl<C: CharPredicate> Parser for CharParser<C> {
    type Output = char;

    fn parse(&self, input: &InputStream) -> ParseResult<char> {
        match input.peek() {
            Some(c) if self.predicate.matches(c) => Ok((input.advance(c.len_utf8()), c)),
            _ => Err(ParseError::expected(input, self.predicate.describe())),
        }
    }
}

/// RegexMatch: matches a regular expression starting exactly at the current
/// position, never further ahead.
///
/// The search runs over the whole buffer, so look-around assertions such as
/// `\b` and `^` see the text before the current position.
#[derive(Clone, Debug)]
pub struct RegexMatch {
    pattern: String,
    regex: Regex,
}

impl RegexMatch {
    pub fn new(pattern: &str) -> GrammarResult<Self> {
        let regex = Regex::new(pattern).map_err(|source| {
            GrammarError::InvalidRegex {
                pattern: pattern.to_string(),
                source,
            }
        })?;
        tracing::debug!(target: "pcomb::primitives", pattern, "compiled regex matcher");
        Ok(Self {
            pattern: pattern.to_string(),
            regex,
        })
    }

    pub fn pattern(&self) -> &str {
        &self.pattern
    }
}

impl Parser for RegexMatch {
    type Output = Span;

    fn parse(&self, input: &InputStream) -> ParseResult<Span> {
        let search = Input::new(input.source())
            .range(input.offset()..)
            .anchored(Anchored::Yes);
        match self.regex.search(&search) {
            Some(m) => {
                let len = m.end() - input.offset();
                Ok((input.advance(len), input.span(len)))
            }
            None => Err(ParseError::expected(
                input,
                format!("match for /{}/", self.pattern),
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stream::Position;

    #[test]
    fn test_literal() {
        let parser = Literal::new("let");
        let input = InputStream::new("let x");

        let (rest, matched) = parser.parse(&input).unwrap();
        assert_eq!(matched, "let");
        assert_eq!(rest.remaining(), " x");
        assert_eq!(rest.column(), 4);

        // 一致しない
        assert_eq!(
            parser.parse(&InputStream::new("lex")),
            Err(ParseError::Unexpected {
                expected: "\"let\"".to_string(),
                found: "l".to_string(),
                position: Position::START,
            })
        );

        // 入力が短い
        assert!(matches!(
            parser.parse(&InputStream::new("")),
            Err(ParseError::UnexpectedEof { .. })
        ));
    }

    #[test]
    fn test_literal_cut_short_by_end_of_input() {
        let parser = Literal::new("ab");
        assert_eq!(
            parser.parse(&InputStream::new("a")),
            Err(ParseError::UnexpectedEof {
                expected: "\"ab\"".to_string(),
                position: Position::START,
            })
        );

        let input = InputStream::new("x le").advance(2);
        assert_eq!(
            Literal::new("let").parse(&input),
            Err(ParseError::UnexpectedEof {
                expected: "\"let\"".to_string(),
                position: input.position(),
            })
        );

        // 途中で食い違うなら Unexpected
        assert!(matches!(
            Literal::new("let").parse(&InputStream::new("lo")),
            Err(ParseError::Unexpected { ref found, .. }) if found == "l"
        ));
    }

    #[test]
    fn test_literal_spanning_lines() {
        let parser = Literal::new("a\nb");
        let (rest, _) = parser.parse(&InputStream::new("a\nbc")).unwrap();
        assert_eq!((rest.line(), rest.column()), (2, 2));
    }

    #[test]
    fn test_char_eq() {
        let parser = CharParser::new(CharEq('('));
        let (rest, c) = parser.parse(&InputStream::new("(1)")).unwrap();
        assert_eq!(c, '(');
        assert_eq!(rest.remaining(), "1)");

        assert!(parser.parse(&InputStream::new(")")).is_err());
        assert!(parser.parse(&InputStream::new("")).is_err());
    }

    #[test]
    fn test_char_range() {
        let digit = CharParser::new(CharRange { lo: '0', hi: '9' });
        for (text, expected) in [("0", Some('0')), ("9", Some('9')), ("5a", Some('5'))] {
            assert_eq!(digit.parse(&InputStream::new(text)).ok().map(|r| r.1), expected);
        }
        assert!(digit.parse(&InputStream::new("a")).is_err());

        let empty = CharParser::new(CharRange { lo: 'z', hi: 'a' });
        assert!(empty.parse(&InputStream::new("m")).is_err());
    }

    #[test]
    fn test_predicate_consumes_whole_character() {
        let parser = CharParser::new(FnPredicate::new(|c: char| !c.is_ascii(), "non-ascii"));
        let (rest, c) = parser.parse(&InputStream::new("ñx")).unwrap();
        assert_eq!(c, 'ñ');
        assert_eq!(rest.remaining(), "x");

        let error = parser.parse(&InputStream::new("x")).unwrap_err();
        assert!(error.to_string().contains("non-ascii"));
    }

    #[test]
    fn test_regex_is_anchored() {
        let number = RegexMatch::new(r"[0-9]+").unwrap();

        let (rest, digits) = number.parse(&InputStream::new("123abc")).unwrap();
        assert_eq!(digits, "123");
        assert_eq!(rest.remaining(), "abc");

        // 途中に一致があっても先頭でなければ失敗
        assert!(number.parse(&InputStream::new("abc123")).is_err());
    }

    #[test]
    fn test_regex_alternation_stays_anchored() {
        let keyword = RegexMatch::new("if|else").unwrap();
        assert!(keyword.parse(&InputStream::new("xelse")).is_err());
        assert_eq!(keyword.parse(&InputStream::new("else")).unwrap().1, "else");
    }

    #[test]
    fn test_regex_after_advance() {
        let word = RegexMatch::new(r"\w+").unwrap();
        let input = InputStream::new("one two").advance(4);
        let (rest, matched) = word.parse(&input).unwrap();
        assert_eq!(matched, "two");
        assert_eq!(matched.position().column, 5);
        assert!(rest.is_at_end());
    }

    #[test]
    fn test_regex_sees_text_before_position() {
        let word = RegexMatch::new(r"\bfoo").unwrap();

        // "x" と "f" の間に単語境界はない
        assert!(word.parse(&InputStream::new("xfoo").advance(1)).is_err());
        let (rest, matched) = word.parse(&InputStream::new("x foo").advance(2)).unwrap();
        assert_eq!(matched, "foo");
        assert!(rest.is_at_end());

        let inner = RegexMatch::new(r"\Bar").unwrap();
        assert_eq!(inner.parse(&InputStream::new("bar").advance(1)).unwrap().1, "ar");

        let line_start = RegexMatch::new("(?m)^b").unwrap();
        assert!(line_start.parse(&InputStream::new("ab").advance(1)).is_err());
        assert_eq!(line_start.parse(&InputStream::new("a\nb").advance(2)).unwrap().1, "b");
    }

    #[test]
    fn test_invalid_regex_is_construction_error() {
        let error = RegexMatch::new("(unclosed").unwrap_err();
        assert!(matches!(error, GrammarError::InvalidRegex { ref pattern, .. } if pattern == "(unclosed"));
    }
}
