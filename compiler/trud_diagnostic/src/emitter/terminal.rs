//! Terminal Emitter
//!
//! Human-readable diagnostic output with optional ANSI color support.
//!
//! With source text attached, labels render as a snippet:
//!
//! ```text
//! error[E6001]: Variable or function "y" not found
//!  --> demo.tw:2:9
//!   |
//! 2 | x + 1 + y;
//!   |         ^ not found in this scope
//! ```

use std::io::Write;

use crate::span_utils::LineOffsetTable;
use crate::{Diagnostic, Label};

use super::DiagnosticEmitter;

/// ANSI color codes for terminal output.
mod colors {
    pub const ERROR: &str = "\x1b[1;31m"; // Bold red
    pub const HELP: &str = "\x1b[1;32m"; // Bold green
    pub const BOLD: &str = "\x1b[1m";
    pub const RESET: &str = "\x1b[0m";
}

/// Color output mode for terminal emitter.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ColorMode {
    /// Use colors when the output is a terminal.
    #[default]
    Auto,
    /// Always use colors.
    Always,
    /// Never use colors.
    Never,
}

impl ColorMode {
    /// Resolve to a boolean. `is_tty` only matters for `Auto`.
    pub fn should_use_colors(self, is_tty: bool) -> bool {
        match self {
            ColorMode::Auto => is_tty,
            ColorMode::Always => true,
            ColorMode::Never => false,
        }
    }

    /// Parse a `--color` value.
    pub fn from_flag(value: &str) -> Option<Self> {
        match value {
            "auto" => Some(ColorMode::Auto),
            "always" => Some(ColorMode::Always),
            "never" => Some(ColorMode::Never),
            _ => None,
        }
    }
}

/// Source text a diagnostic's spans point into.
struct SourceFile {
    path: Option<String>,
    text: String,
    lines: LineOffsetTable,
}

/// Terminal emitter with optional color support.
pub struct TerminalEmitter<W: Write> {
    writer: W,
    colors: bool,
    source: Option<SourceFile>,
}

impl<W: Write> TerminalEmitter<W> {
    /// Create a new terminal emitter with explicit color mode.
    ///
    /// `is_tty` is only consulted for `ColorMode::Auto`.
    pub fn with_color_mode(writer: W, mode: ColorMode, is_tty: bool) -> Self {
        TerminalEmitter {
            writer,
            colors: mode.should_use_colors(is_tty),
            source: None,
        }
    }

    /// Attach the source text so labels render as line:column plus a snippet.
    #[must_use]
    pub fn with_source(mut self, text: impl Into<String>) -> Self {
        let text = text.into();
        let lines = LineOffsetTable::build(&text);
        let path = self.source.take().and_then(|s| s.path);
        self.source = Some(SourceFile { path, text, lines });
        self
    }

    /// Set the file path shown in `-->` locations. Needs `with_source`.
    #[must_use]
    pub fn with_file_path(mut self, path: impl Into<String>) -> Self {
        if let Some(source) = &mut self.source {
            source.path = Some(path.into());
        }
        self
    }

    /// Write text with optional ANSI color codes.
    fn write_colored(&mut self, text: &str, color: &str) {
        if self.colors {
            let _ = write!(self.writer, "{color}{text}{}", colors::RESET);
        } else {
            let _ = write!(self.writer, "{text}");
        }
    }

    /// `--> 4..5: message`, used when no source text is attached.
    fn write_label_bare(&mut self, label: &Label) {
        let _ = write!(self.writer, "  --> {:?}: ", label.span);
        self.write_colored(&label.message, colors::ERROR);
        let _ = writeln!(self.writer);
    }

    /// Location line, source line, and caret underline.
    fn write_label_snippet(&mut self, label: &Label, source: &SourceFile) {
        let (line, col) = source.lines.offset_to_line_col(&source.text, label.span.start);
        let line_text = source.lines.line_text(&source.text, line).unwrap_or("");
        let location = match &source.path {
            Some(path) => format!("{path}:{line}:{col}"),
            None => format!("{line}:{col}"),
        };

        // Underline the part of the span that sits on its first line.
        let (_, end_col) = source.lines.offset_to_line_col(&source.text, label.span.end);
        let end_line = source.lines.line_from_offset(label.span.end);
        let width = if end_line == line && end_col > col {
            (end_col - col) as usize
        } else if end_line == line {
            1
        } else {
            (line_text.chars().count() + 1).saturating_sub(col as usize).max(1)
        };

        let pad = " ".repeat(line.to_string().len());
        let _ = writeln!(self.writer, "{pad}--> {location}");
        let _ = writeln!(self.writer, "{pad} |");
        let _ = writeln!(self.writer, "{line} | {line_text}");
        let _ = write!(self.writer, "{pad} | {}", " ".repeat(col as usize - 1));
        self.write_colored(&"^".repeat(width), colors::ERROR);
        if !label.message.is_empty() {
            let _ = write!(self.writer, " ");
            self.write_colored(&label.message, colors::ERROR);
        }
        let _ = writeln!(self.writer);
    }
}

impl<W: Write> DiagnosticEmitter for TerminalEmitter<W> {
    fn emit(&mut self, diagnostic: &Diagnostic) {
        // error[CODE]: message
        self.write_colored("error", colors::ERROR);
        self.write_colored(&format!("[{}]", diagnostic.code), colors::BOLD);
        let _ = writeln!(self.writer, ": {}", diagnostic.message);

        if let Some(label) = &diagnostic.label {
            match self.source.take() {
                Some(source) => {
                    self.write_label_snippet(label, &source);
                    self.source = Some(source);
                }
                None => self.write_label_bare(label),
            }
        }

        for note in &diagnostic.notes {
            let _ = write!(self.writer, "  = ");
            self.write_colored("note", colors::BOLD);
            let _ = writeln!(self.writer, ": {note}");
        }

        for suggestion in &diagnostic.suggestions {
            let _ = write!(self.writer, "  = ");
            self.write_colored("help", colors::HELP);
            let _ = writeln!(self.writer, ": {suggestion}");
        }

        let _ = writeln!(self.writer);
    }

    fn flush(&mut self) {
        let _ = self.writer.flush();
    }
}
