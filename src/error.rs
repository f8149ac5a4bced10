use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

/// Everything a sequence operation can fail with.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// A precondition on an argument failed. Raised at the offending call,
    /// before any lazy work is scheduled.
    #[error("invalid argument: {0}")]
    InvalidArgument(&'static str),
    /// A must-exist query ran out of elements without producing a result.
    #[error("item not found: {0}")]
    ItemNotFound(&'static str),
}
