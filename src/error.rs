//! Error types for the `chen_sort` crate

use std::collections::TryReserveError;

/// Errors that can stop a sort before the result is written back.
///
/// When any of these is returned the input still holds a permutation of its original contents.
#[derive(Clone, Debug, thiserror::Error)]
#[non_exhaustive]
pub enum Error {
    /// The bucket table for one distribution pass could not be allocated.
    #[error("failed to allocate a table of {requested} buckets: {source}")]
    BucketTable {
        requested: usize,
        #[source]
        source: TryReserveError,
    },

    /// A bucket ran out of memory while elements were appended to it.
    #[error("failed to grow bucket {slot}: {source}")]
    Bucket {
        slot: usize,
        #[source]
        source: TryReserveError,
    },

    /// A [`crate::Config`] value is outside of its valid range.
    #[error("invalid sort configuration: {0}")]
    InvalidConfig(&'static str),
}
