use thiserror::Error;

/// A specialized Result type for list operations.
pub type Result<T> = core::result::Result<T, Error>;

/// The error type for index taking operations on a [`StringList`](crate::StringList).
///
/// An operation that returns an error has not changed the list or its undo log.
#[derive(Clone, Debug, Error, Eq, PartialEq)]
pub enum Error {
    /// The index was outside the valid range of the operation.
    #[error("StringList::{op} index {index} out of bounds for length {len}")]
    OutOfRange {
        /// Name of the operation that failed.
        op: &'static str,
        /// The index that was passed in.
        index: usize,
        /// Length of the list at the time of the call.
        len: usize,
    },
}

impl Error {
    pub(crate) fn out_of_range(op: &'static str, index: usize, len: usize) -> Error {
        Error::OutOfRange { op, index, len }
    }
}
