//! Abstract syntax tree (§3).
//!
//! Expressions and statements are closed sum types, not a class hierarchy —
//! `interp-eval`'s evaluator walks them with `match`, not virtual dispatch
//! (§9: "Subclass-by-function-pointer... becomes a closed sum type").
//! Every node carries the source line it started on so runtime errors can
//! report a line number without re-lexing.

use interp_util::Span;

/// An expression, with the line it started on.
#[derive(Clone, Debug, PartialEq)]
pub struct Expr {
    pub kind: ExprKind,
    pub span: Span,
}

#[derive(Clone, Debug, PartialEq)]
pub enum ExprKind {
    LitInt(i64),
    Var(String),
    Binary(BinOp, Box<Expr>, Box<Expr>),
    Unary(UnOp, Box<Expr>),
    SeqInit(Vec<Expr>),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BinOp {
    Add,
    Sub,
    Mul,
    Div,
    Less,
    Equals,
    And,
    Or,
    Index,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum UnOp {
    Len,
}

/// A statement, with the line it started on.
#[derive(Clone, Debug, PartialEq)]
pub struct Stmt {
    pub kind: StmtKind,
    pub span: Span,
}

#[derive(Clone, Debug, PartialEq)]
pub enum StmtKind {
    Print(Expr),
    Compound(Vec<Stmt>),
    If(Expr, Box<Stmt>),
    While(Expr, Box<Stmt>),
    Push(Expr, Expr),
    Assign {
        name: String,
        index: Option<Expr>,
        rhs: Expr,
    },
}
