//! Recursive-descent parser for the Synta token stream.
//!
//! The parser consumes the lexer's tokens exactly once with a single
//! token of look-ahead (the current token), building a
//! [`Document`] bottom-up and failing fast on the first malformed
//! construct. Validation of cross references (every filename identifier
//! resolves to a definition) runs once the statement loop finishes.

use std::io::BufRead;

use indexmap::IndexMap;
use log::debug;
use regex::Regex;

use synta_core::definition::Definition;
use synta_core::document::{Document, Node};
use synta_core::identifier::Identifier;
use synta_core::template::{Filename, Segment};

use crate::error::ParseError;
use crate::lexer::Lexer;
use crate::tokens::{Token, TokenKind};

pub(crate) struct Parser<R> {
    lexer: Lexer<R>,
    current: Token,
}

impl<R: BufRead> Parser<R> {
    /// Create a parser over `lexer`, priming the current token.
    pub(crate) fn new(mut lexer: Lexer<R>) -> Result<Self, ParseError> {
        let current = lexer.next_token()?;
        Ok(Self { lexer, current })
    }

    fn advance(&mut self) -> Result<(), ParseError> {
        self.current = self.lexer.next_token()?;
        Ok(())
    }

    /// Require the current token to be of `expected` kind and move past it.
    fn expect(&mut self, expected: TokenKind) -> Result<(), ParseError> {
        if self.current.kind != expected {
            return Err(ParseError::ExpectedToken {
                expected,
                found: self.current.kind,
                line: self.current.line,
            });
        }
        self.advance()
    }

    /// Parse the whole token stream into a validated document.
    pub(crate) fn parse_document(mut self) -> Result<Document, ParseError> {
        if self.current.kind == TokenKind::Eof {
            return Err(ParseError::EmptyFile);
        }

        let mut nodes: Vec<Node> = Vec::new();
        let mut definitions: IndexMap<Identifier, Definition> = IndexMap::new();
        let mut filename: Option<Filename> = None;

        while self.current.kind != TokenKind::Eof {
            match self.current.kind {
                TokenKind::Comment | TokenKind::Identifier => {
                    let comments = self.collect_comments()?;
                    if self.current.kind == TokenKind::Eof {
                        // Trailing comments document no statement; they
                        // are dropped and the loop ends.
                        break;
                    }
                    let (id, definition) = self.parse_definition(comments)?;
                    if definitions.contains_key(&id) {
                        return Err(ParseError::DuplicateDefinition(id));
                    }
                    nodes.push(Node::Definition {
                        id: id.clone(),
                        definition: definition.clone(),
                    });
                    definitions.insert(id, definition);
                }
                TokenKind::FilenamePrefix => {
                    let parsed = self.parse_filename()?;
                    if filename.is_some() {
                        return Err(ParseError::MultipleFilenames);
                    }
                    nodes.push(Node::Filename(parsed.clone()));
                    filename = Some(parsed);
                }
                found => {
                    return Err(ParseError::UnexpectedToken {
                        found,
                        line: self.current.line,
                    });
                }
            }
        }

        let Some(filename) = filename else {
            return Err(ParseError::MissingFilename);
        };

        debug!(
            definitions = definitions.len(),
            segments = filename.segments().len();
            "statement loop finished, validating references"
        );

        // Document assembly checks that every identifier reachable from
        // the filename template (through optional groups, plus the
        // extension) has a definition.
        Ok(Document::new(nodes, definitions, filename)?)
    }

    /// Consume zero or more leading comment tokens, in order.
    fn collect_comments(&mut self) -> Result<Vec<String>, ParseError> {
        let mut comments = Vec::new();
        while self.current.kind == TokenKind::Comment {
            comments.push(self.current.text.clone());
            self.advance()?;
        }
        Ok(comments)
    }

    /// Parse `<identifier> = <pattern>`, compiling the pattern
    /// immediately. The collected comments become the definition's
    /// documentation.
    fn parse_definition(
        &mut self,
        comments: Vec<String>,
    ) -> Result<(Identifier, Definition), ParseError> {
        let id = self.parse_identifier()?;
        self.expect(TokenKind::Equals)?;

        if self.current.kind != TokenKind::RegexpPattern {
            return Err(ParseError::ExpectedToken {
                expected: TokenKind::RegexpPattern,
                found: self.current.kind,
                line: self.current.line,
            });
        }
        let pattern = Regex::new(&self.current.text).map_err(|source| ParseError::InvalidRegexp {
            line: self.current.line,
            source,
        })?;
        self.advance()?;

        Ok((id, Definition::new(comments, pattern)))
    }

    /// Parse `> <segments>.<extension>`.
    fn parse_filename(&mut self) -> Result<Filename, ParseError> {
        self.expect(TokenKind::FilenamePrefix)?;
        let segments = self.parse_segments()?;
        self.expect(TokenKind::Dot)?;
        let extension = self.parse_identifier()?;
        Ok(Filename::new(segments, extension))
    }

    fn parse_identifier(&mut self) -> Result<Identifier, ParseError> {
        if self.current.kind != TokenKind::Identifier {
            return Err(ParseError::ExpectedToken {
                expected: TokenKind::Identifier,
                found: self.current.kind,
                line: self.current.line,
            });
        }
        let id = Identifier::new(self.current.text.as_str()).map_err(|_| {
            ParseError::InvalidIdentifier {
                line: self.current.line,
                name: self.current.text.clone(),
            }
        })?;
        self.advance()?;
        Ok(id)
    }

    /// Parse one segment: an optional group if the current token opens
    /// one, a bare identifier otherwise.
    fn parse_segment(&mut self) -> Result<Segment, ParseError> {
        if self.current.kind == TokenKind::LParen {
            return self.parse_optional();
        }
        let id = self.parse_identifier()?;
        Ok(Segment::Identifier(id))
    }

    /// Parse an optional group: `(` `-` segments `)` `?`.
    ///
    /// The dash is the separator that precedes the group's content when
    /// the group is materialized in a filename; it belongs to the group
    /// syntax and produces no segment.
    fn parse_optional(&mut self) -> Result<Segment, ParseError> {
        self.expect(TokenKind::LParen)?;
        self.expect(TokenKind::Dash)?;
        let subsegments = self.parse_segments()?;
        self.expect(TokenKind::RParen)?;
        self.expect(TokenKind::Question)?;
        Ok(Segment::Optional(subsegments))
    }

    /// Parse a segment sequence, used both at the top level of a
    /// filename and inside an optional group.
    ///
    /// Siblings are separated by a dash, with two exceptions: an optional
    /// group may follow the previous segment directly, its `(` being
    /// self-delimiting, and a segment may follow a closed group's `?`
    /// directly for the same reason. The terminators `.` and `)` are left
    /// for the caller to consume.
    fn parse_segments(&mut self) -> Result<Vec<Segment>, ParseError> {
        let mut segments = Vec::new();

        loop {
            let segment = self.parse_segment()?;
            let after_group = matches!(segment, Segment::Optional(_));
            segments.push(segment);

            match self.current.kind {
                TokenKind::Dot | TokenKind::RParen => break,
                TokenKind::Eof => return Err(ParseError::UnexpectedEofInSegments),
                TokenKind::Dash => self.advance()?,
                TokenKind::LParen => {}
                TokenKind::Identifier if after_group => {}
                found => {
                    return Err(ParseError::ExpectedSegmentSeparator {
                        found,
                        line: self.current.line,
                    });
                }
            }
        }

        Ok(segments)
    }
}
