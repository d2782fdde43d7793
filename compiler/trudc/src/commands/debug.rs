//! Debug commands: `lex` and `parse` for inspecting the front-end.

use std::process::ExitCode;

use super::{read_file, report};
use crate::{lex_source, parse_source, Config};

/// Print every token as `KIND "text" @ start..end`.
pub fn lex_file(path: &str, config: &Config) -> ExitCode {
    let Some(source) = read_file(path) else {
        return ExitCode::FAILURE;
    };

    match lex_source(&source) {
        Ok(tokens) => {
            for token in &tokens {
                println!("{token:?}");
            }
            ExitCode::SUCCESS
        }
        Err(err) => {
            report(&err, path, &source, config.color);
            ExitCode::FAILURE
        }
    }
}

/// Print the AST in pretty debug form.
pub fn parse_file(path: &str, config: &Config) -> ExitCode {
    let Some(source) = read_file(path) else {
        return ExitCode::FAILURE;
    };

    match parse_source(&source) {
        Ok(program) => {
            println!("{program:#?}");
            ExitCode::SUCCESS
        }
        Err(err) => {
            report(&err, path, &source, config.color);
            ExitCode::FAILURE
        }
    }
}
