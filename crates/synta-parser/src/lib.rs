//! # Synta Parser
//!
//! Parser for the Synta filename specification language. A Synta file
//! declares a set of named, documented regular expressions and a single
//! filename template built from those names:
//!
//! ```text
//! ; the course code, e.g. b006802
//! course = [a-z][0-9]+
//! section = [a-z]+
//! ext = pdf|txt
//! > course(-section)?.ext
//! ```
//!
//! Parsing runs in three stages, all driven by a single call:
//!
//! 1. **Tokenize** - a pull-based, line-oriented lexer ([`Lexer`])
//! 2. **Parse** - recursive descent over the token stream into the
//!    document model
//! 3. **Validate** - every identifier the filename template references
//!    must resolve to a definition
//!
//! The first error aborts the parse; there is no recovery or error
//! collection.
//!
//! ## Usage
//!
//! ```
//! use synta_parser::parse_str;
//!
//! let source = "course = [a-z][0-9]+\next = pdf\n> course.ext";
//! let document = parse_str(source)?;
//! assert_eq!(document.definitions().len(), 2);
//! # Ok::<(), synta_parser::ParseError>(())
//! ```

pub mod error;
mod lexer;
mod parser;
#[cfg(test)]
mod parser_tests;
mod tokens;

pub use error::{ErrorCode, ParseError};
pub use lexer::Lexer;
pub use tokens::{Token, TokenKind};

use std::io::BufRead;

use log::debug;

use synta_core::document::Document;

use crate::parser::Parser;

/// Parse a complete Synta source string into a validated [`Document`].
///
/// # Errors
///
/// Returns the first [`ParseError`] encountered; the parse is aborted at
/// that point.
pub fn parse_str(source: &str) -> Result<Document, ParseError> {
    parse_reader(source.as_bytes())
}

/// Parse Synta source from a reader, consuming lines on demand.
///
/// # Errors
///
/// Returns the first [`ParseError`] encountered, including failures of
/// the underlying reader.
pub fn parse_reader<R: BufRead>(reader: R) -> Result<Document, ParseError> {
    let parser = Parser::new(Lexer::new(reader))?;
    let document = parser.parse_document()?;
    debug!(
        definitions = document.definitions().len(),
        nodes = document.nodes().len();
        "parsed document"
    );
    Ok(document)
}
