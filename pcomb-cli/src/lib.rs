//! Integer calculator: a small client of the `pcomb` engine.
//!
//! [`grammar::Calculator`] turns a line of text into an [`ast::Expr`],
//! [`eval::evaluate`] computes it, and [`repl::run`] drives both over a stream
//! of lines.

pub mod ast;
pub mod config;
pub mod error;
pub mod eval;
pub mod grammar;
pub mod repl;

pub use error::{CalcError, CalcResult};
