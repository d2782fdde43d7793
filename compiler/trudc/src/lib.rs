//! TrudWave driver.
//!
//! Wires the three stages together: [`trud_lexer`] tokens feed
//! [`trud_parse`], whose `Program` runs on a [`trud_eval::Interpreter`].
//! The `trud` binary is a thin argument parser over [`commands`].

pub mod commands;
mod config;
mod error;
pub mod repl;
mod tracing_setup;

pub use config::{Config, ConfigError, MAX_DEPTH_ENV};
pub use error::Error;
pub use tracing_setup::init_tracing;

use trud_eval::Value;
use trud_ir::{Program, Token};

/// Tokenize all of `source`, stopping at the first lex error.
pub fn lex_source(source: &str) -> Result<Vec<Token<'_>>, Error> {
    trud_lexer::tokenize(source)
        .collect::<Result<Vec<_>, _>>()
        .map_err(Error::Lex)
}

pub fn parse_source(source: &str) -> Result<Program, Error> {
    Ok(trud_parse::parse(source)?)
}

/// Lex, parse, and evaluate `source` with a fresh interpreter.
pub fn run_source(source: &str, config: &Config) -> Result<Value, Error> {
    let program = parse_source(source)?;
    Ok(config.interpreter().evaluate(&program)?)
}
