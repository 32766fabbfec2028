//! Tokenizer diagnostics.
//!
//! Every variant's `Display` impl is the literal text §4.3/§7 mandates —
//! this is the one place those strings are written.

use interp_util::Span;
use thiserror::Error;

#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum LexError {
    #[error("{span}: token too long")]
    TokenTooLong { span: Span },

    #[error("{span}: invalid string literal.")]
    InvalidStringLiteral { span: Span },

    #[error("{span}: Invalid escape sequence \"\\{ch}\"")]
    InvalidEscapeSequence { span: Span, ch: char },

    #[error("{span}: Invalid single-quoted string")]
    InvalidSingleQuotedString { span: Span },

    #[error("{span}: syntax error")]
    SyntaxError { span: Span },
}

impl LexError {
    pub fn span(&self) -> Span {
        match *self {
            LexError::TokenTooLong { span }
            | LexError::InvalidStringLiteral { span }
            | LexError::InvalidEscapeSequence { span, .. }
            | LexError::InvalidSingleQuotedString { span }
            | LexError::SyntaxError { span } => span,
        }
    }
}
