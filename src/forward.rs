//! # Forward References
//!
//! Recursive grammars need to mention a rule before it exists. A [`Forward`]
//! is declared first, handed out through [`Forward::reference`] wherever the
//! rule recurses, and bound to its real definition exactly once afterwards.
//!
//! ```
//! use pcomb::prelude::*;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let number = try_rule(regex("[0-9]+")?, |digits: Span| digits.parse::<i64>());
//! let expr: Forward<i64> = Forward::new();
//! let atom = alt((number, delimited(literal("("), expr.reference(), literal(")"))));
//! expr.bind(atom);
//!
//! assert_eq!(expr.parse_str("((42))")?.1, 42);
//! # Ok(())
//! # }
//! ```
//!
//! References hold the definition weakly, so a rule that refers to itself does
//! not keep itself alive. The [`Forward`] is the owner and must outlive every
//! parse that goes through one of its references.

use std::fmt;
use std::sync::{Arc, Weak};

use once_cell::sync::OnceCell;

use crate::combinators::Rule;
use crate::parser::{BoxedParser, ParseResult, Parser};
use crate::stream::InputStream;

type Slot<O> = OnceCell<BoxedParser<O>>;

/// Placeholder for a parser that is defined later.
///
/// # Panics
///
/// Parsing before [`Forward::bind`] was called, or binding twice, panics.
/// Both are mistakes in how the grammar is assembled, not in the input.
pub struct Forward<O> {
    slot: Arc<Slot<O>>,
}

impl<O: 'static> Forward<O> {
    pub fn new() -> Self {
        Self {
            slot: Arc::new(OnceCell::new()),
        }
    }

    /// Binds the definition. Its attribute is converted into `O` with `Into`.
    pub fn bind<P>(&self, parser: P)
    where
        P: Parser + Send + Sync + 'static,
        P::Output: Into<O> + 'static,
    {
        let definition: BoxedParser<O> =
            Box::new(Rule::new(parser, |value: P::Output| -> O { value.into() }));
        if self.slot.set(definition).is_err() {
            panic!(
                "forward reference of type {} is already bound",
                std::any::type_name::<O>()
            );
        }
        tracing::debug!(
            target: "pcomb::forward",
            output = std::any::type_name::<O>(),
            "forward reference bound"
        );
    }

    pub fn is_bound(&self) -> bool {
        self.slot.get().is_some()
    }

    /// A non-owning handle for use inside the definition itself.
    pub fn reference(&self) -> ForwardRef<O> {
        ForwardRef {
            slot: Arc::downgrade(&self.slot),
        }
    }
}

impl<O: 'static> Default for Forward<O> {
    fn default() -> Self {
        Self::new()
    }
}

/// Clones share the same definition.
impl<O> Clone for Forward<O> {
    fn clone(&self) -> Self {
        Self {
            slot: Arc::clone(&self.slot),
        }
    }
}

impl<O> fmt::Debug for Forward<O> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Forward")
            .field("bound", &self.slot.get().is_some())
            .finish()
    }
}

fn parse_slot<O>(slot: &Slot<O>, input: &InputStream) -> ParseResult<O> {
    match slot.get() {
        Some(definition) => definition.parse(input),
        None => panic!(
            "forward reference of type {} parsed before it was bound",
            std::any::type_name::<O>()
        ),
    }
}

impl<O> Parser for Forward<O> {
    type Output = O;

    fn parse(&self, input: &InputStream) -> ParseResult<O> {
        parse_slot(&self.slot, input)
    }
}

/// Weak handle to a [`Forward`]'s definition.
///
/// # Panics
///
/// Parsing after the owning [`Forward`] and all its clones were dropped panics.
pub struct ForwardRef<O> {
    slot: Weak<Slot<O>>,
}

impl<O> Clone for ForwardRef<O> {
    fn clone(&self) -> Self {
        Self {
            slot: Weak::clone(&self.slot),
        }
    }
}

impl<O> fmt::Debug for ForwardRef<O> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ForwardRef")
            .field("alive", &(self.slot.strong_count() > 0))
            .finish()
    }
}

impl<O> Parser for ForwardRef<O> {
    type Output = O;

    fn parse(&self, input: &InputStream) -> ParseResult<O> {
        match self.slot.upgrade() {
            Some(slot) => parse_slot(&slot, input),
            None => panic!(
                "forward reference of type {} outlived its definition",
                std::any::type_name::<O>()
            ),
        }
    }
}
