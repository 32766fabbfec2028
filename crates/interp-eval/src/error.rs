//! Evaluator diagnostics (§7).
//!
//! Unlike the lexer/parser, these carry no line number in their `Display`
//! text — the spec's concrete scenarios show the bare message on stderr.

use thiserror::Error;

#[derive(Clone, Copy, Debug, Error, PartialEq, Eq)]
pub enum EvalError {
    #[error("Type mismatch")]
    TypeMismatch,

    #[error("Divide by zero")]
    DivideByZero,

    #[error("Index out of bounds")]
    IndexOutOfBounds,
}

/// Statement execution can also fail writing `print` output; this keeps
/// that distinct from the pure, infallible-I/O expression evaluator.
#[derive(Debug, Error)]
pub enum ExecError {
    #[error(transparent)]
    Eval(#[from] EvalError),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}
