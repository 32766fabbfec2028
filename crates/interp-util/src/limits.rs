//! Fixed capacities mandated by the language's implementation contract.
//!
//! These are not tuning knobs; they are part of the spec's testable surface
//! (a token one byte over the limit is a different, documented, error).

use static_assertions::const_assert;

/// Maximum length, in bytes, of a single token's lexeme.
pub const MAX_TOKEN_LEN: usize = 1023;

/// Maximum length, in bytes, of an identifier (variable name).
pub const MAX_IDENT_LEN: usize = 20;

/// Initial backing capacity of a freshly constructed sequence.
pub const SEQ_INITIAL_CAPACITY: usize = 5;

const_assert!(MAX_IDENT_LEN <= MAX_TOKEN_LEN);
const_assert!(SEQ_INITIAL_CAPACITY > 0);
