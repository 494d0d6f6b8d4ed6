use thiserror::Error;

/// Errors raised while building a grammar, before any input is parsed.
#[derive(Error, Debug)]
pub enum GrammarError {
    #[error("Invalid regex {pattern:?}: {source}")]
    InvalidRegex {
        pattern: String,
        #[source]
        source: regex_automata::meta::BuildError,
    },
}

pub type GrammarResult<T> = Result<T, GrammarError>;
