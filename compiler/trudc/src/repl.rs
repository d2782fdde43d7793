//! Interactive REPL.
//!
//! Input accumulates across lines until it forms complete statements:
//! braces and parentheses balance and the last token is `;` or a comment.
//! Statements run against one persistent [`Session`]; errors are reported
//! and the session continues, except fatal errors which reset it.
//!
//! Commands: `:help`, `:vars`, `:reset`, `:quit`.

use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;
use trud_eval::{Interpreter, Value};
use trud_ir::TokenKind;

use crate::commands::report;
use crate::{parse_source, Config, Error};

const PROMPT: &str = "trud> ";
const CONTINUATION_PROMPT: &str = "....> ";

/// Path shown in diagnostics for REPL input.
pub(crate) const SOURCE_NAME: &str = "<repl>";

/// Whether `input` holds complete statements and can be evaluated.
///
/// Lex errors count as complete so the parser gets to report them.
pub fn is_input_complete(input: &str) -> bool {
    let mut depth: i32 = 0;
    let mut last = None;
    for token in trud_lexer::tokenize(input) {
        let Ok(token) = token else {
            return true;
        };
        match token.kind {
            TokenKind::LBrace | TokenKind::LParen | TokenKind::LBracket => depth += 1,
            TokenKind::RBrace | TokenKind::RParen | TokenKind::RBracket => depth -= 1,
            _ => {}
        }
        last = Some(token.kind);
    }
    match last {
        None => true,
        Some(kind) => depth <= 0 && matches!(kind, TokenKind::Semicolon | TokenKind::Comment),
    }
}

/// Interpreter state that outlives a single input.
pub struct Session {
    config: Config,
    interpreter: Interpreter,
}

impl Session {
    pub fn new(config: Config) -> Self {
        let interpreter = config.interpreter();
        Session {
            config,
            interpreter,
        }
    }

    /// Parse and run `input`, returning the value of its last statement.
    ///
    /// Statements before a failing one keep their effect. A fatal error
    /// discards every binding.
    pub fn eval(&mut self, input: &str) -> Result<Value, Error> {
        let program = parse_source(input)?;
        let mut last = Value::Null;
        for stmt in &program.body {
            match self.interpreter.eval_statement(stmt) {
                Ok(value) => last = value,
                Err(err) => {
                    let err = Error::Eval(err);
                    if err.is_fatal() {
                        tracing::warn!("fatal error, resetting session");
                        self.reset();
                    }
                    return Err(err);
                }
            }
        }
        Ok(last)
    }

    /// Global bindings as `(name, rendered value)`, sorted by name.
    pub fn vars(&self) -> Vec<(String, String)> {
        let mut vars: Vec<_> = self
            .interpreter
            .globals()
            .iter()
            .map(|(name, value)| (name.to_string(), value.to_string()))
            .collect();
        vars.sort();
        vars
    }

    pub fn reset(&mut self) {
        self.interpreter = self.config.interpreter();
    }
}

/// Line-editing front end over a [`Session`].
pub struct Repl {
    session: Session,
    editor: DefaultEditor,
}

impl Repl {
    pub fn new(config: Config) -> Result<Self, ReadlineError> {
        Ok(Repl {
            session: Session::new(config),
            editor: DefaultEditor::new()?,
        })
    }

    pub fn run(&mut self) -> Result<(), ReadlineError> {
        println!(
            "TrudWave {} (type :help for commands)",
            env!("CARGO_PKG_VERSION")
        );

        let mut buffer = String::new();
        loop {
            let prompt = if buffer.is_empty() {
                PROMPT
            } else {
                CONTINUATION_PROMPT
            };

            match self.editor.readline(prompt) {
                Ok(line) => {
                    let _ = self.editor.add_history_entry(line.as_str());

                    if buffer.is_empty() && line.trim_start().starts_with(':') {
                        if self.handle_command(line.trim()) {
                            continue;
                        }
                        break;
                    }

                    buffer.push_str(&line);
                    buffer.push('\n');
                    if is_input_complete(&buffer) {
                        self.eval_input(&buffer);
                        buffer.clear();
                    }
                }
                Err(ReadlineError::Interrupted) => {
                    println!("^C (:quit to exit)");
                    buffer.clear();
                }
                Err(ReadlineError::Eof) => break,
                Err(err) => return Err(err),
            }
        }
        Ok(())
    }

    /// Returns `false` when the REPL should exit.
    fn handle_command(&mut self, cmd: &str) -> bool {
        match cmd {
            ":help" | ":h" => print_help(),
            ":quit" | ":q" | ":exit" => return false,
            ":vars" | ":v" => {
                let vars = self.session.vars();
                if vars.is_empty() {
                    println!("(no bindings)");
                }
                for (name, value) in vars {
                    println!("{name} = {value}");
                }
            }
            ":reset" | ":r" => {
                self.session.reset();
                println!("environment reset");
            }
            _ => println!("unknown command {cmd}; type :help for commands"),
        }
        true
    }

    fn eval_input(&mut self, input: &str) {
        if input.trim().is_empty() {
            return;
        }
        match self.session.eval(input) {
            Ok(value) => {
                if !value.is_null() {
                    println!("{value}");
                }
            }
            Err(err) => {
                report(&err, SOURCE_NAME, input, self.session.config.color);
                if err.is_fatal() {
                    eprintln!("session reset after fatal error");
                }
            }
        }
    }
}

fn print_help() {
    println!("Commands:");
    println!("  :help, :h    Show this help");
    println!("  :vars, :v    List global bindings");
    println!("  :reset, :r   Drop all bindings");
    println!("  :quit, :q    Exit");
    println!();
    println!("Statements end with ';'. Input continues on the next line until");
    println!("braces balance and the statement is terminated.");
}
