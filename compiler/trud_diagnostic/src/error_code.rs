//! Error codes for all diagnostics.
//!
//! Each error code is a unique identifier (e.g., `E1001`) with the first digit
//! indicating the stage that raised it.

use std::fmt;

/// Error codes for all diagnostics.
///
/// Format: E#### where first digit indicates stage:
/// - E0xxx: Lexer errors
/// - E1xxx: Parser errors
/// - E6xxx: Runtime / eval errors
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum ErrorCode {
    // Lexer Errors (E0xxx)
    /// Unexpected character in source
    E0001,
    /// Unterminated string literal
    E0002,
    /// Malformed number literal (`12abc`)
    E0003,

    // Parser Errors (E1xxx)
    /// Unexpected token
    E1001,
    /// Expected expression
    E1002,
    /// Unexpected end of input
    E1003,
    /// Function declaration without a return type
    E1004,
    /// Expected `when` or `otherwise` in a match block
    E1005,
    /// Number literal out of range
    E1006,

    // Runtime Errors (E6xxx)
    /// Undefined variable or function
    E6001,
    /// Call of a non-function value
    E6002,
    /// Wrong number of arguments
    E6003,
    /// Binary operator not defined for operand types
    E6004,
    /// Unary operator not defined for operand type
    E6005,
    /// Match condition is not a bool
    E6006,
    /// No match case matched
    E6007,
    /// Recursion limit exceeded
    E6031,
}

impl ErrorCode {
    /// Get the string representation of this error code.
    pub fn as_str(&self) -> &'static str {
        match self {
            // Lexer
            ErrorCode::E0001 => "E0001",
            ErrorCode::E0002 => "E0002",
            ErrorCode::E0003 => "E0003",
            // Parser
            ErrorCode::E1001 => "E1001",
            ErrorCode::E1002 => "E1002",
            ErrorCode::E1003 => "E1003",
            ErrorCode::E1004 => "E1004",
            ErrorCode::E1005 => "E1005",
            ErrorCode::E1006 => "E1006",
            // Runtime
            ErrorCode::E6001 => "E6001",
            ErrorCode::E6002 => "E6002",
            ErrorCode::E6003 => "E6003",
            ErrorCode::E6004 => "E6004",
            ErrorCode::E6005 => "E6005",
            ErrorCode::E6006 => "E6006",
            ErrorCode::E6007 => "E6007",
            ErrorCode::E6031 => "E6031",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests;
