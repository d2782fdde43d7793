//! Call frame tracking.
//!
//! `CallStack` enforces the recursion limit and captures backtraces at
//! error sites. The captured snapshot is stored on `EvalError` as an
//! `EvalBacktrace`.

use trud_ir::Span;

use crate::errors::{recursion_limit_exceeded, BacktraceFrame, EvalBacktrace, EvalError};

/// Frames kept when capturing a backtrace; deeper ones are counted only.
const MAX_BACKTRACE_FRAMES: usize = 16;

/// A single frame in the live call stack.
#[derive(Clone, Debug)]
pub struct CallFrame {
    /// Function name.
    pub name: String,
    /// Where the call was made, not where the function was defined.
    pub call_span: Option<Span>,
}

/// Live call stack for the interpreter.
///
/// ```ignore
/// let mut stack = CallStack::new(Some(10_000));
/// stack.push(CallFrame { name, call_span: Some(span) })?;
/// // ... evaluate function body ...
/// stack.pop();
/// ```
#[derive(Clone, Debug)]
pub struct CallStack {
    frames: Vec<CallFrame>,
    max_depth: Option<usize>,
}

impl CallStack {
    /// `None` means unlimited.
    pub fn new(max_depth: Option<usize>) -> Self {
        CallStack {
            frames: Vec::new(),
            max_depth,
        }
    }

    /// Push a call frame, checking the depth limit.
    ///
    /// The frame is not pushed on overflow.
    pub fn push(&mut self, frame: CallFrame) -> Result<(), EvalError> {
        if let Some(max) = self.max_depth {
            if self.frames.len() >= max {
                return Err(recursion_limit_exceeded(max));
            }
        }
        self.frames.push(frame);
        Ok(())
    }

    pub fn pop(&mut self) {
        debug_assert!(
            !self.frames.is_empty(),
            "CallStack::pop() called on empty stack"
        );
        self.frames.pop();
    }

    #[inline]
    pub fn depth(&self) -> usize {
        self.frames.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    pub fn max_depth(&self) -> Option<usize> {
        self.max_depth
    }

    /// Snapshot of the stack, most recent call first.
    pub fn capture(&self) -> EvalBacktrace {
        let frames = self
            .frames
            .iter()
            .rev()
            .take(MAX_BACKTRACE_FRAMES)
            .map(|f| BacktraceFrame {
                name: f.name.clone(),
                span: f.call_span,
            })
            .collect();
        let omitted = self.frames.len().saturating_sub(MAX_BACKTRACE_FRAMES);
        EvalBacktrace::new(frames, omitted)
    }

    /// Attach a backtrace of this stack to `err` unless it already has one.
    pub fn attach_backtrace(&self, err: EvalError) -> EvalError {
        if self.frames.is_empty() {
            return err;
        }
        err.or_backtrace(self.capture())
    }

    /// Drop every frame, e.g. after a fatal error abandoned a session.
    pub fn clear(&mut self) {
        self.frames.clear();
    }
}

#[cfg(test)]
mod tests;
