/// Error type shared by every [`DisjointSet`](crate::DisjointSet) operation.
///
/// Validation always happens before any pointer traversal, so an `Err`
/// return guarantees the structure was left untouched.
use std::fmt;

/// Errors produced by construction or by an out-of-range index argument.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DisjointSetError {
    /// The requested element count is negative or does not fit in `usize`.
    InvalidSize {
        /// The size that was requested.
        requested: i64,
    },

    /// An index argument lies outside `[0, len)`.
    IndexOutOfRange {
        /// The rejected index.
        index: usize,
        /// The number of elements in the structure.
        len: usize,
    },
}

impl fmt::Display for DisjointSetError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidSize { requested } => {
                write!(f, "invalid disjoint-set size {requested}: must be non-negative")
            }
            Self::IndexOutOfRange { index, len } => {
                write!(f, "index {index} out of range for disjoint set of {len} elements")
            }
        }
    }
}

impl std::error::Error for DisjointSetError {}
