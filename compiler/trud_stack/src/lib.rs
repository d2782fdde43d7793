//! On-demand stack growth.
//!
//! The parser recurses once per nesting level and the evaluator once per
//! TrudWave call, so a deep `fib` or a long chain of parentheses can outrun
//! the native stack long before the interpreter's own call-depth limit
//! trips. Both wrap their recursive entry points in
//! [`ensure_sufficient_stack`], which switches to a freshly allocated
//! segment whenever the remaining stack drops below a red zone.
//!
//! On `wasm32` the wrapper calls straight through.

/// Grow when fewer than this many bytes remain.
const RED_ZONE: usize = 100 * 1024;

/// Size of each newly allocated stack segment.
const SEGMENT_SIZE: usize = 1024 * 1024;

/// Run `f`, first moving to a new stack segment if the current one is
/// nearly exhausted.
#[inline]
#[cfg(not(target_arch = "wasm32"))]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    stacker::maybe_grow(RED_ZONE, SEGMENT_SIZE, f)
}

#[inline]
#[cfg(target_arch = "wasm32")]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    f()
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Depth of a right-nested chain like `(((...)))`, one frame per level.
    fn nesting_depth(chars: &[u8]) -> usize {
        ensure_sufficient_stack(|| match chars.split_first() {
            Some((b'(', rest)) => 1 + nesting_depth(rest),
            _ => 0,
        })
    }

    #[test]
    fn test_shallow_nesting() {
        assert_eq!(nesting_depth(b"((()))"), 3);
    }

    #[test]
    fn test_deep_nesting_does_not_overflow() {
        let source = vec![b'('; 200_000];
        assert_eq!(nesting_depth(&source), 200_000);
    }

    #[test]
    fn test_passes_result_through() {
        let result: Result<u8, String> = ensure_sufficient_stack(|| Err("boom".to_string()));
        assert_eq!(result, Err("boom".to_string()));
    }
}
