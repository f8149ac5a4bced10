//! Precondition checks, run eagerly at combinator entry.
//!
//! Most of the original precondition surface (iterable-ness, callable-ness,
//! non-negative sizes, recognized-container-ness) is enforced by the type
//! system here; positivity of size arguments is the one check left for
//! runtime.

use crate::error::{Error, Result};

pub(crate) fn require_positive(n: usize, what: &'static str) -> Result<()> {
    if n == 0 {
        return Err(Error::InvalidArgument(what));
    }
    Ok(())
}
