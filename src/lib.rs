mod config;
mod error;
mod key;
mod sort;

pub use config::*;
pub use error::*;
pub use key::*;
pub use sort::*;

// The bucket count only depends on the input length, never on the value range.
// 50k buckets keep the table of one level around 1.2MB of `Option<Vec<_>>`.
pub(crate) const MAX_BUCKETS: usize = 50_000;
// Buckets below this size are handed to the comparison sort.
pub(crate) const SMALL_SORT_THRESHOLD: usize = 1000;
// Every level shrinks the problem, so real inputs stay far below this.
pub(crate) const MAX_DEPTH: usize = 64;
