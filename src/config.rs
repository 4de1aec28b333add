use crate::{Error, MAX_BUCKETS, MAX_DEPTH, SMALL_SORT_THRESHOLD};

/// Tuning knobs for [`crate::sort_with_config`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Config {
    /// Upper bound for the number of buckets of one distribution pass, at most 50,000.
    pub max_buckets: usize,
    /// Buckets smaller than this are sorted by comparison instead of being distributed again.
    pub small_sort_threshold: usize,
    /// Recursion levels after which large buckets fall back to the comparison sort.
    pub max_depth: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            max_buckets: MAX_BUCKETS,
            small_sort_threshold: SMALL_SORT_THRESHOLD,
            max_depth: MAX_DEPTH,
        }
    }
}

impl Config {
    /// Lower the bucket cap, e.g. to trade recursion depth for smaller bucket tables.
    pub fn with_max_buckets(mut self, max_buckets: usize) -> Self {
        self.max_buckets = max_buckets;
        self
    }

    /// Buckets below this size skip further distribution.
    pub fn with_small_sort_threshold(mut self, small_sort_threshold: usize) -> Self {
        self.small_sort_threshold = small_sort_threshold;
        self
    }

    /// Set the recursion level after which large buckets are sorted by comparison.
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    /// Checks that `max_buckets` is within `[2, 50_000]` and `small_sort_threshold` is at least 2.
    pub fn validate(&self) -> Result<(), Error> {
        // a single bucket would hand the whole input to the next level unchanged
        if self.max_buckets < 2 {
            return Err(Error::InvalidConfig("max_buckets must be at least 2"));
        }
        if self.max_buckets > MAX_BUCKETS {
            return Err(Error::InvalidConfig("max_buckets must not exceed 50000"));
        }
        if self.small_sort_threshold < 2 {
            return Err(Error::InvalidConfig("small_sort_threshold must be at least 2"));
        }
        Ok(())
    }
}
