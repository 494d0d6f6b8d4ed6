//! # pcomb
//!
//! A parser-combinator engine. Grammars are ordinary values: leaf matchers
//! (literals, character predicates, anchored regexes) composed with sequence,
//! alternative, repetition, whitespace handling, transformation and forward
//! references into recursive-descent parsers.
//!
//! ```
//! use pcomb::prelude::*;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let number = try_rule(token(regex("[0-9]+")?), |digits: Span| digits.parse::<i64>());
//! let (rest, value) = number.parse_str("  42")?;
//! assert_eq!(value, 42);
//! assert!(rest.is_at_end());
//! # Ok(())
//! # }
//! ```
//!
//! Every attribute type is known statically. An alternative whose branches
//! produce different types yields their [`MoreGeneral`] type, and a pair with
//! no such type does not compile.

pub mod anchor;
pub mod combinators;
pub mod config;
pub mod error;
pub mod ext;
pub mod forward;
pub mod general;
pub mod parser;
pub mod prelude;
pub mod primitives;
pub mod span;
pub mod stream;
pub mod whitespace;

// Re-exports
pub use parser::{BoxedParser, FnParser, ParseError, ParseResult, Parser};
pub use config::LexConfig;
pub use error::{GrammarError, GrammarResult};
pub use ext::ParserExt;
pub use forward::{Forward, ForwardRef};
pub use general::MoreGeneral;
pub use span::Span;
pub use stream::{InputStream, Position};
pub use whitespace::WhitespaceSet;
