//! Parser diagnostics.

use interp_lex::LexError;
use interp_util::Span;
use thiserror::Error;

#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum ParseError {
    /// A lexical error surfaced while the parser was pulling its next
    /// token; the message is the lexer's own, unmodified (§7: lexical and
    /// parse diagnostics are distinct categories with distinct text).
    #[error(transparent)]
    Lex(#[from] LexError),

    #[error("{span}: syntax error")]
    Syntax { span: Span },
}
