//! interp-par - recursive-descent parser
//!
//! Consumes the token stream from `interp-lex` and builds the AST that
//! `interp-eval` walks (§4.4). The grammar is intentionally flat: a
//! single expression precedence level, and statements that each start
//! with a distinguishing keyword or an identifier.

mod ast;
mod error;
mod parser;

pub use ast::{BinOp, Expr, ExprKind, Stmt, StmtKind, UnOp};
pub use error::ParseError;
pub use parser::Parser;
