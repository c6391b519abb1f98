//! The ParseError type for the parsing lifecycle.

use std::io;

use thiserror::Error;

use synta_core::document::DocumentError;
use synta_core::identifier::Identifier;

use crate::error::ErrorCode;
use crate::tokens::TokenKind;

/// Error type for the parsing lifecycle.
///
/// Every variant is terminal: the parse that produced it was aborted at
/// the point of failure. Line numbers are 1-based and refer to physical
/// source lines; validation errors that are document-global carry the
/// offending identifier instead.
#[derive(Debug, Error)]
pub enum ParseError {
    /// A non-comment, non-filename line did not have the shape
    /// `<identifier> = <pattern>` with exactly one ` = ` separator.
    #[error("invalid definition format at line {line}: {text}")]
    MalformedDefinition { line: usize, text: String },

    /// The left-hand side of a definition line is not a full `[a-z]+`
    /// match.
    #[error("invalid identifier at line {line}: {name}")]
    InvalidIdentifier { line: usize, name: String },

    /// A filename template line contains a character outside the segment
    /// alphabet.
    #[error(
        "unexpected character '{character}' at position {position} in filename on line {line}"
    )]
    UnexpectedCharacter {
        character: char,
        position: usize,
        line: usize,
    },

    /// A statement began with a token that opens no statement form.
    #[error("unexpected token at line {line}: {found}")]
    UnexpectedToken { found: TokenKind, line: usize },

    /// A required token was absent where the grammar demands it.
    #[error("expected {expected}, got {found} at line {line}")]
    ExpectedToken {
        expected: TokenKind,
        found: TokenKind,
        line: usize,
    },

    /// A segment was followed by something other than a terminator, a
    /// separator, or an opening group.
    #[error("expected '.', '-', ')', or '(' at line {line}, got {found}")]
    ExpectedSegmentSeparator { found: TokenKind, line: usize },

    /// The token stream ended in the middle of a segment sequence.
    #[error("unexpected end of file while parsing segments")]
    UnexpectedEofInSegments,

    /// A definition's pattern text failed to compile.
    #[error("invalid regexp at line {line}: {source}")]
    InvalidRegexp {
        line: usize,
        #[source]
        source: regex::Error,
    },

    /// The same identifier was defined a second time.
    #[error("definition for `{0}` is provided twice")]
    DuplicateDefinition(Identifier),

    /// A second filename template was declared.
    #[error("multiple filename declarations found")]
    MultipleFilenames,

    /// The statement loop finished without seeing a filename template.
    #[error("missing filename declaration")]
    MissingFilename,

    /// The source contained no tokens at all.
    #[error("empty file provided")]
    EmptyFile,

    /// Document assembly failed (an unresolved filename reference).
    #[error(transparent)]
    Document(#[from] DocumentError),

    /// The underlying reader failed.
    #[error("failed to read source: {0}")]
    Io(#[from] io::Error),
}

impl ParseError {
    /// The phase classification of this error.
    pub fn code(&self) -> ErrorCode {
        match self {
            ParseError::MalformedDefinition { .. } => ErrorCode::E001,
            ParseError::InvalidIdentifier { .. } => ErrorCode::E002,
            ParseError::UnexpectedCharacter { .. } => ErrorCode::E003,
            ParseError::UnexpectedToken { .. } => ErrorCode::E100,
            ParseError::ExpectedToken { .. } => ErrorCode::E101,
            ParseError::ExpectedSegmentSeparator { .. } => ErrorCode::E102,
            ParseError::UnexpectedEofInSegments => ErrorCode::E103,
            ParseError::InvalidRegexp { .. } => ErrorCode::E200,
            ParseError::DuplicateDefinition(_) => ErrorCode::E300,
            ParseError::MultipleFilenames => ErrorCode::E301,
            ParseError::MissingFilename => ErrorCode::E302,
            ParseError::EmptyFile => ErrorCode::E303,
            ParseError::Document(DocumentError::MissingDefinition(_)) => ErrorCode::E304,
            ParseError::Io(_) => ErrorCode::E400,
        }
    }
}
