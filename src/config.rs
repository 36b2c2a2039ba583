use std::env;

use crate::error::{Error, Result};

/// Default number of cleaned-text characters shown per document.
pub const DEFAULT_PREVIEW_CHARS: usize = 80;
/// Default number of example tokens shown per distinguisher list.
pub const DEFAULT_EXAMPLE_COUNT: usize = 5;

/// Report settings loaded from environment variables.
///
/// The .env file is loaded at startup via dotenvy, so either source works.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// How much of each cleaned document to print (WORDBAG_PREVIEW_CHARS)
    pub preview_chars: usize,
    /// How many tokens to list per distinguisher (WORDBAG_EXAMPLE_COUNT)
    pub example_count: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            preview_chars: DEFAULT_PREVIEW_CHARS,
            example_count: DEFAULT_EXAMPLE_COUNT,
        }
    }
}

impl Config {
    /// Load configuration from environment variables, falling back to defaults.
    pub fn load() -> Result<Self> {
        Ok(Self {
            preview_chars: usize_var("WORDBAG_PREVIEW_CHARS", DEFAULT_PREVIEW_CHARS)?,
            example_count: usize_var("WORDBAG_EXAMPLE_COUNT", DEFAULT_EXAMPLE_COUNT)?,
        })
    }
}

fn usize_var(var: &'static str, default: usize) -> Result<usize> {
    match env::var(var) {
        Ok(value) => parse_usize(var, &value),
        Err(_) => Ok(default),
    }
}

fn parse_usize(var: &'static str, value: &str) -> Result<usize> {
    value.trim().parse().map_err(|_| Error::InvalidConfig {
        var,
        value: value.to_string(),
    })
}
