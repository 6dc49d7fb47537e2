use thiserror::Error;

/// The top-level error type for this crate.
///
/// Every variant is a violated precondition of the operation that returned
/// it. Nothing is clamped or retried on the caller's behalf.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum Error {
    /// A signed index was negative
    #[error("index {0} is negative")]
    NegativeIndex(isize),

    /// The operation needs at least one element
    #[error("cannot {operation} an empty array")]
    Empty { operation: &'static str },

    /// The end of a range was before its start
    #[error("range end {end} is before range start {start}")]
    InvalidRange { start: usize, end: usize },

    /// A range that would never end, because its step is not positive or
    /// does not change the accumulated value
    #[error("range step does not make progress towards the end of the range")]
    InvalidStep,
}

impl Error {
    pub(crate) const fn empty(operation: &'static str) -> Self {
        Self::Empty { operation }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
