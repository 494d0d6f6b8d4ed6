use std::{fs::File, io::BufReader, path::Path};

use pcomb::LexConfig;
use serde::{Deserialize, Serialize};

use crate::error::CalcResult;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalcConfig {
    #[serde(default = "default_prompt")]
    pub prompt: String,

    #[serde(default)]
    pub lex: LexConfig,

    /// Print the parsed expression before its value.
    #[serde(default)]
    pub show_ast: bool,
}

impl Default for CalcConfig {
    fn default() -> Self {
        Self {
            prompt: default_prompt(),
            lex: LexConfig::default(),
            show_ast: false,
        }
    }
}

impl CalcConfig {
    /// Loads `path`, or the defaults if there is no such file.
    pub fn load<P: AsRef<Path>>(path: P) -> CalcResult<Self> {
        let path = path.as_ref();
        if !path.exists() {
            tracing::debug!("No config at {:?}, using defaults", path);
            return Ok(Self::default());
        }
        let reader = BufReader::new(File::open(path)?);
        let config: Self = serde_json::from_reader(reader)?;
        tracing::debug!("config: {:?}", config);
        Ok(config)
    }
}

fn default_prompt() -> String {
    "> ".to_string()
}
