//! The `run` command: evaluate a TrudWave file.

use std::process::ExitCode;

use super::{read_file, report};
use crate::{run_source, Config};

/// Evaluate `path` and print the final value unless it is `null`.
pub fn run_file(path: &str, config: &Config) -> ExitCode {
    let Some(source) = read_file(path) else {
        return ExitCode::FAILURE;
    };

    match run_source(&source, config) {
        Ok(value) => {
            if !value.is_null() {
                println!("{value}");
            }
            ExitCode::SUCCESS
        }
        Err(err) => {
            tracing::debug!(fatal = err.is_fatal(), "run failed");
            report(&err, path, &source, config.color);
            ExitCode::FAILURE
        }
    }
}
