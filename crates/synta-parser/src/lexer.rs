//! Lexical analyzer for Synta source text.
//!
//! The lexer is line-driven and pull-based: each [`Lexer::next_token`]
//! call returns exactly one [`Token`]. A physical line that expands into
//! several tokens (a definition line, or the filename template line) is
//! scanned once and its tokens queued; the queue is drained completely
//! before the next line is read, so tokens are always emitted in source
//! order. Blank lines carry no token at all.

use std::collections::VecDeque;
use std::io::BufRead;

use log::trace;

use synta_core::identifier::Identifier;

use crate::error::ParseError;
use crate::tokens::{Token, TokenKind};

/// A pull-based tokenizer over a line-oriented reader.
pub struct Lexer<R> {
    lines: std::io::Lines<R>,
    line_num: usize,
    pending: VecDeque<Token>,
}

impl<R: BufRead> Lexer<R> {
    /// Create a lexer reading from `reader`.
    pub fn new(reader: R) -> Self {
        Self {
            lines: reader.lines(),
            line_num: 0,
            pending: VecDeque::new(),
        }
    }

    /// Return the next token.
    ///
    /// Once the input is exhausted this returns a [`TokenKind::Eof`]
    /// token on every call.
    ///
    /// # Errors
    ///
    /// Fails when a line violates the tokenizable grammar (see
    /// [`ParseError`]) or when the underlying reader fails.
    pub fn next_token(&mut self) -> Result<Token, ParseError> {
        if let Some(token) = self.pending.pop_front() {
            return Ok(token);
        }

        let Some(line) = self.read_line()? else {
            return Ok(Token::new(TokenKind::Eof, "", self.line_num));
        };

        if let Some(rest) = line.strip_prefix(';') {
            trace!(line = self.line_num; "lexed comment line");
            return Ok(Token::new(TokenKind::Comment, rest.trim(), self.line_num));
        }

        if let Some(rest) = line.strip_prefix("> ") {
            return self.tokenize_filename(rest);
        }

        self.tokenize_definition(&line)
    }

    /// Read the next non-blank line, trimmed. Blank lines are skipped as
    /// if they never existed.
    fn read_line(&mut self) -> Result<Option<String>, ParseError> {
        for result in self.lines.by_ref() {
            let line = result?;
            self.line_num += 1;
            let trimmed = line.trim();
            if !trimmed.is_empty() {
                return Ok(Some(trimmed.to_string()));
            }
        }
        Ok(None)
    }

    /// Tokenize a definition line: `<identifier> = <pattern>`.
    ///
    /// The line must split into exactly two parts around the literal
    /// ` = ` separator; the right part is taken verbatim as the pattern
    /// text, which means a pattern containing ` = ` itself is not
    /// representable.
    fn tokenize_definition(&mut self, line: &str) -> Result<Token, ParseError> {
        let parts: Vec<&str> = line.split(" = ").collect();
        let &[name, pattern] = parts.as_slice() else {
            return Err(ParseError::MalformedDefinition {
                line: self.line_num,
                text: line.to_string(),
            });
        };

        if Identifier::new(name).is_err() {
            return Err(ParseError::InvalidIdentifier {
                line: self.line_num,
                name: name.to_string(),
            });
        }

        trace!(line = self.line_num, name = name; "lexed definition line");
        self.pending
            .push_back(Token::new(TokenKind::Equals, "=", self.line_num));
        self.pending
            .push_back(Token::new(TokenKind::RegexpPattern, pattern, self.line_num));
        Ok(Token::new(TokenKind::Identifier, name, self.line_num))
    }

    /// Tokenize the filename template line: queue one token per segment
    /// character group and return the prefix token first.
    fn tokenize_filename(&mut self, segments: &str) -> Result<Token, ParseError> {
        let tokens = self.scan_segments(segments)?;
        trace!(line = self.line_num, tokens = tokens.len(); "lexed filename line");
        self.pending.extend(tokens);
        Ok(Token::new(TokenKind::FilenamePrefix, ">", self.line_num))
    }

    /// Scan the segment text character by character: single-character
    /// tokens for `-` `.` `(` `)` `?` and maximal lowercase runs as
    /// identifiers. Anything else is a lex error naming the character
    /// and its position.
    fn scan_segments(&self, input: &str) -> Result<Vec<Token>, ParseError> {
        let mut tokens = Vec::new();
        let mut chars = input.char_indices().peekable();

        while let Some((position, c)) = chars.next() {
            let kind = match c {
                '-' => TokenKind::Dash,
                '.' => TokenKind::Dot,
                '(' => TokenKind::LParen,
                ')' => TokenKind::RParen,
                '?' => TokenKind::Question,
                'a'..='z' => {
                    let mut end = position + c.len_utf8();
                    while let Some(&(next, next_c)) = chars.peek() {
                        if !next_c.is_ascii_lowercase() {
                            break;
                        }
                        end = next + next_c.len_utf8();
                        chars.next();
                    }
                    tokens.push(Token::at_position(
                        TokenKind::Identifier,
                        &input[position..end],
                        self.line_num,
                        position,
                    ));
                    continue;
                }
                _ => {
                    return Err(ParseError::UnexpectedCharacter {
                        character: c,
                        position,
                        line: self.line_num,
                    });
                }
            };
            tokens.push(Token::at_position(kind, c, self.line_num, position));
        }

        Ok(tokens)
    }
}
