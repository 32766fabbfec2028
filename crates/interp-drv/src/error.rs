//! Driver diagnostics (§7).
//!
//! The only error enum that aggregates across phases: it wraps each
//! phase's own error via `#[from]` so `main` has a single `Result` to
//! match on, without any phase crate depending on another's error type.

use std::path::PathBuf;

use interp_eval::ExecError;
use interp_par::ParseError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum DriverError {
    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error(transparent)]
    Eval(#[from] ExecError),

    #[error("{path}: {source}", path = path.display())]
    OpenFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("usage: interpret <program-file>")]
    Usage,

    #[error(transparent)]
    Io(#[from] std::io::Error),
}
