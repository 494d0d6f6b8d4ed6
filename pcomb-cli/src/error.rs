use std::io;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum CalcError {
    #[error("Parse error at line {line}, column {column}: {message}")]
    Parse {
        line: usize,
        column: usize,
        message: String,
    },

    #[error("Excessive input at line {line}, column {column}: {rest}")]
    ExcessiveInput {
        line: usize,
        column: usize,
        rest: String,
    },

    #[error("Division by zero")]
    DivisionByZero,

    #[error("Arithmetic overflow")]
    Overflow,

    #[error("Invalid grammar: {0}")]
    Grammar(#[from] pcomb::GrammarError),

    #[error("JSON parsing error: {0}")]
    Config(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] io::Error),
}

pub type CalcResult<T> = Result<T, CalcError>;

impl From<pcomb::ParseError> for CalcError {
    fn from(error: pcomb::ParseError) -> Self {
        let position = error.position();
        CalcError::Parse {
            line: position.line,
            column: position.column,
            message: error.reason(),
        }
    }
}
