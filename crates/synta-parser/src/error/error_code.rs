//! Error codes for the Synta diagnostic surface.
//!
//! Error codes are organized by phase:
//! - `E0xx` - Lexer errors
//! - `E1xx` - Grammar errors
//! - `E2xx` - Pattern compilation errors
//! - `E3xx` - Validation errors
//! - `E4xx` - Input errors

use std::fmt;

/// Error codes for categorizing parse failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    // =========================================================================
    // Lexer Errors (E0xx)
    // =========================================================================
    /// Malformed definition line.
    ///
    /// A non-comment, non-filename line did not split into an identifier
    /// and a pattern around a single ` = ` separator.
    E001,

    /// Invalid identifier.
    ///
    /// The left-hand side of a definition line is not one or more
    /// lowercase ASCII letters.
    E002,

    /// Unexpected character.
    ///
    /// A filename template line contains a character that is not a
    /// lowercase letter or one of `-` `.` `(` `)` `?`.
    E003,

    // =========================================================================
    // Grammar Errors (E1xx)
    // =========================================================================
    /// Unexpected token at the start of a statement.
    E100,

    /// A required token was absent where the grammar demands it.
    E101,

    /// A segment was not followed by `.`, `-`, `)`, or `(`.
    E102,

    /// The input ended in the middle of a segment sequence.
    E103,

    // =========================================================================
    // Pattern Compilation Errors (E2xx)
    // =========================================================================
    /// A definition's pattern failed to compile.
    E200,

    // =========================================================================
    // Validation Errors (E3xx)
    // =========================================================================
    /// The same identifier is defined more than once.
    E300,

    /// More than one filename template was declared.
    E301,

    /// No filename template was declared.
    E302,

    /// The source contained no statements at all.
    E303,

    /// The filename template references an undefined identifier.
    E304,

    // =========================================================================
    // Input Errors (E4xx)
    // =========================================================================
    /// The underlying reader failed.
    E400,
}

impl ErrorCode {
    /// Returns the numeric code as a string (e.g., "E001").
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::E001 => "E001",
            ErrorCode::E002 => "E002",
            ErrorCode::E003 => "E003",
            ErrorCode::E100 => "E100",
            ErrorCode::E101 => "E101",
            ErrorCode::E102 => "E102",
            ErrorCode::E103 => "E103",
            ErrorCode::E200 => "E200",
            ErrorCode::E300 => "E300",
            ErrorCode::E301 => "E301",
            ErrorCode::E302 => "E302",
            ErrorCode::E303 => "E303",
            ErrorCode::E304 => "E304",
            ErrorCode::E400 => "E400",
        }
    }

    /// Returns a short description of what this error code means.
    pub fn description(&self) -> &'static str {
        match self {
            ErrorCode::E001 => "malformed definition line",
            ErrorCode::E002 => "invalid identifier",
            ErrorCode::E003 => "unexpected character",
            ErrorCode::E100 => "unexpected token",
            ErrorCode::E101 => "missing required token",
            ErrorCode::E102 => "missing segment separator",
            ErrorCode::E103 => "incomplete segment sequence",
            ErrorCode::E200 => "invalid pattern",
            ErrorCode::E300 => "duplicate definition",
            ErrorCode::E301 => "multiple filename declarations",
            ErrorCode::E302 => "missing filename declaration",
            ErrorCode::E303 => "empty input",
            ErrorCode::E304 => "missing definition",
            ErrorCode::E400 => "read failure",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
