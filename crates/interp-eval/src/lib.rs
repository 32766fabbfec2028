//! interp-eval - tree-walking evaluator
//!
//! Walks the AST produced by `interp-par` against a single mutable
//! [`Environment`], per §4.1/§4.2/§4.5. Sequences are `Rc<RefCell<Vec<i64>>>`
//! handles — Rust's own reference counting stands in for the distilled
//! spec's manual grab/release discipline.

mod env;
mod error;
mod eval;
mod value;

pub use env::Environment;
pub use error::{EvalError, ExecError};
pub use eval::Interpreter;
pub use value::{Sequence, Value};
