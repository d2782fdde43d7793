//! Driver configuration from flags and environment variables.
//!
//! - `--max-depth=<n>` / `TRUD_MAX_DEPTH`: recursion limit, `0` for unlimited.
//!   Without a limit the evaluator's stack keeps growing on the heap, so
//!   runaway recursion ends in memory exhaustion instead of an error.
//! - `--color=<auto|always|never>`: diagnostic colors
//!
//! Flags override the environment.

use std::fmt;

use trud_diagnostic::emitter::ColorMode;
use trud_eval::{Interpreter, DEFAULT_MAX_CALL_DEPTH};

/// Environment variable holding the default recursion limit.
pub const MAX_DEPTH_ENV: &str = "TRUD_MAX_DEPTH";

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ConfigError {
    InvalidMaxDepth { value: String },
    InvalidColor { value: String },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidMaxDepth { value } => write!(
                f,
                "invalid max depth '{value}': expected a non-negative integer"
            ),
            ConfigError::InvalidColor { value } => write!(
                f,
                "invalid color mode '{value}': expected auto, always, or never"
            ),
        }
    }
}

impl std::error::Error for ConfigError {}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Config {
    /// Recursion limit; `None` is unlimited.
    pub max_depth: Option<usize>,
    pub color: ColorMode,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            max_depth: Some(DEFAULT_MAX_CALL_DEPTH),
            color: ColorMode::Auto,
        }
    }
}

impl Config {
    /// Defaults, overridden by `TRUD_MAX_DEPTH` when set.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Like [`Config::from_env`] with an injectable variable lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let mut config = Config::default();
        if let Some(value) = lookup(MAX_DEPTH_ENV) {
            config.max_depth = parse_max_depth(&value)?;
        }
        Ok(config)
    }

    /// Apply a `--name=value` flag. Returns `Ok(false)` if `arg` is not a
    /// configuration flag.
    pub fn apply_flag(&mut self, arg: &str) -> Result<bool, ConfigError> {
        if let Some(value) = arg.strip_prefix("--max-depth=") {
            self.max_depth = parse_max_depth(value)?;
            Ok(true)
        } else if let Some(value) = arg.strip_prefix("--color=") {
            self.color = ColorMode::from_flag(value).ok_or_else(|| ConfigError::InvalidColor {
                value: value.to_string(),
            })?;
            Ok(true)
        } else {
            Ok(false)
        }
    }

    pub fn interpreter(&self) -> Interpreter {
        if self.max_depth.is_none() {
            tracing::warn!("recursion limit disabled; runaway recursion will exhaust memory");
        }
        Interpreter::builder().max_call_depth(self.max_depth).build()
    }
}

fn parse_max_depth(value: &str) -> Result<Option<usize>, ConfigError> {
    match value.trim().parse::<usize>() {
        Ok(0) => Ok(None),
        Ok(n) => Ok(Some(n)),
        Err(_) => Err(ConfigError::InvalidMaxDepth {
            value: value.to_string(),
        }),
    }
}
