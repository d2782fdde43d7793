//! The error report every stage converts into.
//!
//! TrudWave stops at its first error, so a [`Diagnostic`] is always an
//! error and points at no more than one place in the source.

use trud_ir::Span;

use crate::ErrorCode;

/// A source span and the text printed under its caret.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct Label {
    pub span: Span,
    pub message: String,
}

/// One error, ready to render.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
#[must_use = "diagnostics should be reported or returned, not silently dropped"]
pub struct Diagnostic {
    pub code: ErrorCode,
    pub message: String,
    /// Missing for runtime errors raised outside any expression.
    pub label: Option<Label>,
    /// Rendered as `= note:` lines after the snippet.
    pub notes: Vec<String>,
    /// Rendered as `= help:` lines.
    pub suggestions: Vec<String>,
}

impl Diagnostic {
    #[cold]
    pub fn error(code: ErrorCode) -> Self {
        Diagnostic {
            code,
            message: String::new(),
            label: None,
            notes: Vec::new(),
            suggestions: Vec::new(),
        }
    }

    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    /// Point at `span`. A later call replaces the earlier label.
    pub fn with_label(mut self, span: Span, message: impl Into<String>) -> Self {
        self.label = Some(Label {
            span,
            message: message.into(),
        });
        self
    }

    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        self.notes.push(note.into());
        self
    }

    pub fn with_suggestion(mut self, suggestion: impl Into<String>) -> Self {
        self.suggestions.push(suggestion.into());
        self
    }
}
