use pretty_assertions::assert_eq;

use super::*;
use crate::errors::{no_matching_case, EvalErrorKind};

fn frame(name: &str) -> CallFrame {
    CallFrame {
        name: name.to_string(),
        call_span: Some(Span::new(0, 1)),
    }
}

#[test]
fn test_push_pop_depth() {
    let mut stack = CallStack::new(Some(4));
    assert!(stack.is_empty());
    assert!(stack.push(frame("a")).is_ok());
    assert!(stack.push(frame("b")).is_ok());
    assert_eq!(stack.depth(), 2);
    assert_eq!(stack.capture().frames()[0].name, "b");
    stack.pop();
    assert_eq!(stack.depth(), 1);
}

#[test]
fn test_limit_exceeded() {
    let mut stack = CallStack::new(Some(3));
    for name in ["a", "b", "c"] {
        assert!(stack.push(frame(name)).is_ok());
    }
    let err = stack.push(frame("d")).err();
    assert_eq!(
        err.map(|e| e.kind),
        Some(EvalErrorKind::StackOverflow { depth: 3 })
    );
    assert_eq!(stack.depth(), 3);
}

#[test]
fn test_unlimited() {
    let mut stack = CallStack::new(None);
    for _ in 0..50_000 {
        assert!(stack.push(frame("f")).is_ok());
    }
    assert_eq!(stack.depth(), 50_000);
    stack.clear();
    assert!(stack.is_empty());
}

#[test]
fn test_capture_most_recent_first() {
    let mut stack = CallStack::new(None);
    assert!(stack.push(frame("outer")).is_ok());
    assert!(stack.push(frame("inner")).is_ok());
    let bt = stack.capture();
    let names: Vec<_> = bt.frames().iter().map(|f| f.name.as_str()).collect();
    assert_eq!(names, vec!["inner", "outer"]);
    assert_eq!(bt.omitted(), 0);
}

#[test]
fn test_capture_truncates_deep_stacks() {
    let mut stack = CallStack::new(None);
    for _ in 0..100 {
        assert!(stack.push(frame("f")).is_ok());
    }
    let bt = stack.capture();
    assert_eq!(bt.len(), MAX_BACKTRACE_FRAMES);
    assert_eq!(bt.omitted(), 100 - MAX_BACKTRACE_FRAMES);
}

#[test]
fn test_attach_backtrace_skips_empty_stack() {
    let stack = CallStack::new(None);
    assert!(stack.attach_backtrace(no_matching_case()).backtrace.is_none());
}
