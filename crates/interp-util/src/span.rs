//! Source-line tracking shared across the tokenizer, parser and evaluator.
//!
//! The language's diagnostics are all of the form `line N: ...`, so the only
//! position information worth carrying past the lexer is a 1-based line
//! number. Every token, every AST node, and every runtime error that can
//! name a line carries a [`Span`].

use std::fmt;

/// A source position, currently just a 1-based line number.
///
/// Kept as its own type (rather than a bare `u32`) so call sites read as
/// "this is a source location" and so the representation can grow (e.g. a
/// column) without changing every signature that threads one through.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Span {
    line: u32,
}

impl Span {
    /// The span of the first line of a file.
    pub const START: Span = Span { line: 1 };

    /// Creates a span for the given 1-based line number.
    pub fn new(line: u32) -> Self {
        Self { line }
    }

    /// Returns the 1-based line number.
    pub fn line(&self) -> u32 {
        self.line
    }
}

impl fmt::Display for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "line {}", self.line)
    }
}
