//! interp-lex - tokenizer
//!
//! Turns a byte stream into the [`Token`] stream the parser consumes,
//! per §4.3 of the spec: identifiers, integer/char/string literals with a
//! fixed escape set, two-char operators read greedily with one-byte
//! pushback, `#` line comments, and a 1-based line counter.
//!
//! This is a single-pass, lookahead-1-byte lexer with no token buffering:
//! `Lexer::next_token` is called on demand by the parser, one token at a
//! time, rather than tokenizing the whole file up front — the driver
//! interleaves parsing and execution at statement granularity (§4.6), so
//! there is no reason to materialize a full token vector first.

mod cursor;
mod error;
mod lexer;
mod token;

pub use error::LexError;
pub use lexer::Lexer;
pub use token::{Token, TokenKind};
