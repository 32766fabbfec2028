//! The tokenizer (§4.3).
//!
//! `Lexer::next_token` is the only entry point the parser calls; it skips
//! whitespace and `#` comments, then dispatches on the first byte of what
//! remains to the appropriate literal/operator/identifier reader.

use interp_util::{Span, MAX_TOKEN_LEN};

use crate::cursor::Cursor;
use crate::error::LexError;
use crate::token::{Token, TokenKind};

pub struct Lexer<'a> {
    cursor: Cursor<'a>,
}

impl<'a> Lexer<'a> {
    pub fn new(source: &'a [u8]) -> Self {
        Self {
            cursor: Cursor::new(source),
        }
    }

    /// Reads and returns the next token, or a [`LexError`] if the input up
    /// to the next token boundary is lexically invalid.
    pub fn next_token(&mut self) -> Result<Token, LexError> {
        self.skip_whitespace_and_comments();

        let start_line = self.cursor.line();
        let span = Span::new(start_line);

        let Some(b) = self.cursor.peek() else {
            return Ok(Token::new(TokenKind::Eof, span));
        };

        let kind = match b {
            b'(' => self.bump_one(TokenKind::LParen),
            b')' => self.bump_one(TokenKind::RParen),
            b'{' => self.bump_one(TokenKind::LBrace),
            b'}' => self.bump_one(TokenKind::RBrace),
            b'[' => self.bump_one(TokenKind::LBracket),
            b']' => self.bump_one(TokenKind::RBracket),
            b',' => self.bump_one(TokenKind::Comma),
            b';' => self.bump_one(TokenKind::Semicolon),
            b'+' => self.bump_one(TokenKind::Plus),
            b'-' => self.lex_minus_or_number(span)?,
            b'*' => self.bump_one(TokenKind::Star),
            b'/' => self.bump_one(TokenKind::Slash),
            b'=' => self.lex_two_char(b'=', TokenKind::EqEq, TokenKind::Assign),
            b'<' => self.bump_one(TokenKind::Less),
            b'&' => self.lex_doubled(b'&', TokenKind::AndAnd, span)?,
            b'|' => self.lex_doubled(b'|', TokenKind::OrOr, span)?,
            b'"' | b'\'' => self.lex_quoted(b, span)?,
            b'0'..=b'9' => self.lex_number(span)?,
            c if is_ident_start(c) => self.lex_identifier(span)?,
            _ => return Err(LexError::SyntaxError { span }),
        };

        Ok(Token::new(kind, span))
    }

    fn skip_whitespace_and_comments(&mut self) {
        loop {
            match self.cursor.peek() {
                Some(b) if b.is_ascii_whitespace() => {
                    self.cursor.bump();
                }
                Some(b'#') => {
                    while let Some(b) = self.cursor.peek() {
                        if b == b'\n' {
                            break;
                        }
                        self.cursor.bump();
                    }
                }
                _ => break,
            }
        }
    }

    fn bump_one(&mut self, kind: TokenKind) -> TokenKind {
        self.cursor.bump();
        kind
    }

    /// Reads a two-char operator `{c}{second}` greedily, falling back to
    /// `single` if the second byte doesn't match.
    fn lex_two_char(&mut self, second: u8, doubled: TokenKind, single: TokenKind) -> TokenKind {
        self.cursor.bump();
        if self.cursor.peek() == Some(second) {
            self.cursor.bump();
            doubled
        } else {
            single
        }
    }

    /// Reads `&&` / `||`: the operator repeated twice, or a syntax error if
    /// the second byte doesn't match (this language has no single `&`/`|`).
    fn lex_doubled(&mut self, c: u8, doubled: TokenKind, span: Span) -> Result<TokenKind, LexError> {
        self.cursor.bump();
        if self.cursor.bump() == Some(c) {
            Ok(doubled)
        } else {
            Err(LexError::SyntaxError { span })
        }
    }

    /// `-` starts an integer literal when immediately followed by a digit
    /// (no intervening whitespace); otherwise it's the subtraction/negation
    /// operator token on its own (§4.3, §9: "An isolated '-' followed by a
    /// non-digit is still the token '-'").
    fn lex_minus_or_number(&mut self, span: Span) -> Result<TokenKind, LexError> {
        if matches!(self.cursor.peek2(), Some(b'0'..=b'9')) {
            self.lex_number(span)
        } else {
            Ok(self.bump_one(TokenKind::Minus))
        }
    }

    fn lex_number(&mut self, span: Span) -> Result<TokenKind, LexError> {
        let mut buf = Vec::new();
        if self.cursor.peek() == Some(b'-') {
            buf.push(self.cursor.bump().unwrap());
        }
        while matches!(self.cursor.peek(), Some(b'0'..=b'9')) {
            buf.push(self.cursor.bump().unwrap());
            self.check_len(&buf, span)?;
        }
        // SAFETY: buf contains only ASCII '-' and digits.
        let text = std::str::from_utf8(&buf).unwrap();
        // A run of digits within the length cap can still overflow i64 (e.g.
        // 19+ digits); saturate the way a strtol-style accumulator would
        // rather than reusing TokenTooLong for an unrelated failure.
        let value: i64 = text.parse().unwrap_or(if buf[0] == b'-' {
            i64::MIN
        } else {
            i64::MAX
        });
        Ok(TokenKind::Int(value))
    }

    fn lex_identifier(&mut self, span: Span) -> Result<TokenKind, LexError> {
        let mut buf = Vec::new();
        while matches!(self.cursor.peek(), Some(c) if is_ident_continue(c)) {
            buf.push(self.cursor.bump().unwrap());
            self.check_len(&buf, span)?;
        }
        // SAFETY: buf contains only ASCII identifier bytes.
        let text = String::from_utf8(buf).unwrap();
        Ok(TokenKind::keyword(&text).unwrap_or(TokenKind::Ident(text)))
    }

    /// Reads a `"..."` or `'...'` literal, honouring `\n \t \" \\`.
    fn lex_quoted(&mut self, quote: u8, span: Span) -> Result<TokenKind, LexError> {
        self.cursor.bump(); // opening quote
        let mut bytes = Vec::new();
        loop {
            match self.cursor.bump() {
                None => return Err(LexError::InvalidStringLiteral { span }),
                Some(b'\n') => return Err(LexError::InvalidStringLiteral { span }),
                Some(b) if b == quote => break,
                Some(b'\\') => {
                    let escaped = match self.cursor.bump() {
                        Some(b'n') => b'\n',
                        Some(b't') => b'\t',
                        Some(b'"') => b'"',
                        Some(b'\\') => b'\\',
                        Some(c) => {
                            return Err(LexError::InvalidEscapeSequence {
                                span,
                                ch: c as char,
                            })
                        }
                        None => return Err(LexError::InvalidStringLiteral { span }),
                    };
                    bytes.push(escaped);
                }
                Some(b) => bytes.push(b),
            }
            self.check_len(&bytes, span)?;
        }

        if quote == b'\'' {
            if bytes.len() != 1 {
                return Err(LexError::InvalidSingleQuotedString { span });
            }
            Ok(TokenKind::CharLit(bytes[0]))
        } else {
            Ok(TokenKind::StringLit(bytes))
        }
    }

    fn check_len(&self, buf: &[u8], span: Span) -> Result<(), LexError> {
        if buf.len() > MAX_TOKEN_LEN {
            Err(LexError::TokenTooLong { span })
        } else {
            Ok(())
        }
    }
}

fn is_ident_start(b: u8) -> bool {
    b.is_ascii_alphabetic() || b == b'_'
}

fn is_ident_continue(b: u8) -> bool {
    b.is_ascii_alphanumeric() || b == b'_'
}
