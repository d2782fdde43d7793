//! TrudWave CLI.

use std::path::Path;
use std::process::ExitCode;

use trudc::commands::{lex_file, parse_file, run_file, USAGE};
use trudc::repl::Repl;
use trudc::Config;

fn main() -> ExitCode {
    trudc::init_tracing();

    let mut config = match Config::from_env() {
        Ok(config) => config,
        Err(err) => {
            eprintln!("error: {err}");
            return ExitCode::FAILURE;
        }
    };

    // Configuration flags may appear anywhere; everything else is positional.
    let args: Vec<String> = std::env::args().skip(1).collect();
    let mut positional = Vec::new();
    for arg in &args {
        match config.apply_flag(arg) {
            Ok(true) => {}
            Ok(false) => positional.push(arg.as_str()),
            Err(err) => {
                eprintln!("error: {err}");
                return ExitCode::FAILURE;
            }
        }
    }

    let Some((&command, rest)) = positional.split_first() else {
        print_usage();
        return ExitCode::SUCCESS;
    };

    match command {
        "run" | "lex" | "parse" => {
            let Some(&path) = rest.first() else {
                eprintln!("Usage: trud {command} <file.tw>");
                return ExitCode::FAILURE;
            };
            match command {
                "run" => run_file(path, &config),
                "lex" => lex_file(path, &config),
                _ => parse_file(path, &config),
            }
        }
        "repl" => match Repl::new(config).and_then(|mut repl| repl.run()) {
            Ok(()) => ExitCode::SUCCESS,
            Err(err) => {
                eprintln!("error: {err}");
                ExitCode::FAILURE
            }
        },
        "help" | "--help" | "-h" => {
            print_usage();
            ExitCode::SUCCESS
        }
        "version" | "--version" | "-V" => {
            println!("TrudWave {}", env!("CARGO_PKG_VERSION"));
            ExitCode::SUCCESS
        }
        _ => {
            // A bare source file is shorthand for `run`.
            if Path::new(command)
                .extension()
                .is_some_and(|ext| ext.eq_ignore_ascii_case("tw"))
            {
                run_file(command, &config)
            } else {
                eprintln!("Unknown command: {command}");
                eprintln!();
                print_usage();
                ExitCode::FAILURE
            }
        }
    }
}

fn print_usage() {
    print!("{USAGE}");
}
