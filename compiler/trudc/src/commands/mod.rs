//! Command handlers for the `trud` CLI.
//!
//! Each handler reads its file, runs part of the pipeline, prints to
//! stdout, and renders failures as diagnostics on stderr.

mod debug;
mod run;

pub use debug::{lex_file, parse_file};
pub use run::run_file;

use std::io::{IsTerminal, Write};

use trud_diagnostic::emitter::{ColorMode, DiagnosticEmitter, TerminalEmitter};

use crate::Error;

/// Help text for `trud help`.
pub const USAGE: &str = "\
TrudWave

Usage: trud <command> [options]

Commands:
  run <file.tw>     Evaluate a program and print its final value
  lex <file.tw>     Tokenize and display tokens
  parse <file.tw>   Parse and display the AST
  repl              Start an interactive session
  help              Show this help message
  version           Show version information

Options:
  --max-depth=<n>   Recursion limit (default 10000). 0 removes the limit:
                    the stack then grows on the heap, so runaway recursion
                    runs until the process is out of memory
  --color=<mode>    Diagnostic colors: auto, always, never

Environment:
  TRUD_MAX_DEPTH    Default for --max-depth
  TRUD_LOG          Log filter, e.g. trud_eval=debug (falls back to RUST_LOG)
  TRUD_LOG_TREE=1   Render logs as an indented call tree

Examples:
  trud run fib.tw
  trud fib.tw --max-depth=50000
  trud repl
";

/// Read a source file, reporting failures on stderr.
pub(crate) fn read_file(path: &str) -> Option<String> {
    match std::fs::read_to_string(path) {
        Ok(content) => Some(content),
        Err(err) => {
            eprintln!("error: cannot read '{path}': {err}");
            None
        }
    }
}

/// Render `err` against `source` on stderr.
pub(crate) fn report(err: &Error, path: &str, source: &str, color: ColorMode) {
    let stderr = std::io::stderr();
    let is_tty = stderr.is_terminal();
    write_report(stderr, is_tty, err, path, source, color);
}

/// Render `err` as a diagnostic with the offending line from `source`.
pub(crate) fn write_report<W: Write>(
    out: W,
    is_tty: bool,
    err: &Error,
    path: &str,
    source: &str,
    color: ColorMode,
) {
    let mut emitter = TerminalEmitter::with_color_mode(out, color, is_tty)
        .with_source(source)
        .with_file_path(path);
    emitter.emit(&err.to_diagnostic());
    emitter.flush();
}
