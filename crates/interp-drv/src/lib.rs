//! interp-drv - the `interpret` binary's driver
//!
//! Owns the CLI surface, source file I/O, the `tracing` setup, and the
//! parse/execute loop (§4.6): one statement is parsed, executed, and
//! dropped before the next is parsed, so the interpreter never holds
//! more than one statement's AST in memory at a time.

mod error;

use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

use interp_eval::Interpreter;
use interp_par::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

pub use error::DriverError;

/// Installs the `tracing` subscriber. Development-only: with the default
/// filter (`RUST_LOG` unset, i.e. `off`), a conforming run emits nothing
/// on this layer, so it can never perturb the fixed diagnostic text or
/// the raw `print` output a program relies on.
pub fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("off"));
    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(io::stderr).with_target(false))
        .try_init();
}

/// Parses `args` (excluding the program name) into the single program
/// path this CLI accepts.
pub fn parse_args<I: IntoIterator<Item = String>>(args: I) -> Result<PathBuf, DriverError> {
    let mut args = args.into_iter();
    let path = args.next().ok_or(DriverError::Usage)?;
    if args.next().is_some() {
        return Err(DriverError::Usage);
    }
    Ok(PathBuf::from(path))
}

/// Runs the interpreter over the program at `path`, writing `print`
/// output to `out`. Returns once the program reaches end of input.
pub fn run(path: &Path, out: impl Write) -> Result<(), DriverError> {
    let source = std::fs::read(path).map_err(|source| DriverError::OpenFile {
        path: path.to_path_buf(),
        source,
    })?;
    tracing::debug!(bytes = source.len(), path = %path.display(), "read source");

    let mut parser = Parser::new(&source)?;
    let mut interp = Interpreter::new(out);

    let mut count = 0u64;
    while let Some(stmt) = parser.next_statement()? {
        tracing::trace!(span = %stmt.span, "executing statement");
        interp.exec(&stmt)?;
        count += 1;
    }
    tracing::debug!(statements = count, "program terminated normally");

    interp.into_writer().flush()?;
    Ok(())
}

/// The binary's whole job: parse arguments, run, flush stdout.
///
/// Returns `anyhow::Result` rather than `Result<(), DriverError>` purely
/// so `main` has one error type to match on regardless of which phase
/// failed — the thinnest possible use of `anyhow`, and the only place
/// it appears in this workspace (§7).
pub fn main_impl() -> anyhow::Result<()> {
    init_logging();
    let path = parse_args(std::env::args().skip(1))?;
    run(&path, BufWriter::new(io::stdout()))?;
    Ok(())
}
