use serde::{Deserialize, Serialize};

use crate::whitespace::{WhitespaceSet, DEFAULT_WHITESPACE};

/// Lexical settings shared by the token-level parsers of a grammar.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LexConfig {
    /// Characters skipped around tokens.
    #[serde(default = "default_whitespace")]
    pub whitespace: String,
}

impl Default for LexConfig {
    fn default() -> Self {
        Self {
            whitespace: default_whitespace(),
        }
    }
}

impl LexConfig {
    pub fn whitespace_set(&self) -> WhitespaceSet {
        WhitespaceSet::new(&self.whitespace)
    }
}

fn default_whitespace() -> String {
    DEFAULT_WHITESPACE.to_string()
}
