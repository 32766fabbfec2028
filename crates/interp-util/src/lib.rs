//! interp-util - shared foundation types
//!
//! Small, dependency-light crate sitting underneath every phase of the
//! interpreter: the one piece of position tracking ([`Span`]) that the
//! tokenizer produces and the parser and evaluator both need to pass
//! through, plus the handful of fixed capacities the language's spec
//! pins down exactly (see [`limits`]).

mod limits;
mod span;

pub use limits::{MAX_IDENT_LEN, MAX_TOKEN_LEN, SEQ_INITIAL_CAPACITY};
pub use span::Span;
