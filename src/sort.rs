// Adaptive distribution sort for signed integers. Each pass distributes into at most
// `min(len, max_buckets)` buckets, so the bucket count follows the input size and not the value
// range. Buckets that are still large are distributed again, small ones are sorted by comparison.

use crate::key::range_fits;
use crate::{Config, Error, SignedKey};
use log::{debug, trace, warn};

/// Counters collected over one call of [`sort_with_config`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SortStats {
    /// Number of distribution passes, including the top level one.
    pub passes: usize,
    /// Number of buckets that received at least one element.
    pub buckets: usize,
    /// Number of buckets sorted by comparison.
    pub small_sorts: usize,
    /// Deepest recursion level that ran a distribution pass, the top level is 0.
    pub deepest_level: usize,
    /// Number of large buckets sorted by comparison because the depth limit was reached.
    pub depth_fallbacks: usize,
}

/// Find the minimum and maximum of `values` in a single pass.
///
/// Returns `None` when there is nothing to sort, either because there are fewer than two values
/// or because all values are equal.
#[inline(never)]
fn scan_range<T: SignedKey>(values: &[T]) -> Option<(T, T)> {
    if values.len() < 2 {
        return None;
    }

    let mut min = T::MAX;
    let mut max = T::MIN;
    values.iter().for_each(|&v| {
        if v < min {
            min = v;
        }
        if v > max {
            max = v;
        }
    });

    (min != max).then_some((min, max))
}

/// How values are mapped to slots, chosen once per pass.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Regime {
    /// `max - min` fits into the element type, one linear mapping over the whole range.
    Uniform { min: i128, range: u128 },
    /// `max - min` overflows the element type. Negative values are scaled into
    /// `[0, positive_start - 1]` relative to `min`, non-negative ones into
    /// `[positive_start, max_index]` relative to `max`.
    Split {
        min: i128,
        negative_span: u128,
        positive_span: u128,
        negative_len: usize,
        positive_start: usize,
        positive_len: usize,
    },
}

#[derive(Clone, Copy, Debug)]
struct Plan {
    bucket_count: usize,
    regime: Regime,
}

impl Plan {
    fn new<T: SignedKey>(len: usize, min: T, max: T, max_buckets: usize) -> Self {
        debug_assert!(min < max);
        debug_assert!(len >= 2 && max_buckets >= 2);

        let bucket_count = len.min(max_buckets);
        let max_index = bucket_count - 1;

        let regime = if range_fits(min, max) {
            Regime::Uniform {
                min: min.widen(),
                range: (max.widen() - min.widen()) as u128,
            }
        } else {
            // an overflowing range implies min < 0 <= max
            let positive_start = max_index / 2 + 1;
            Regime::Split {
                min: min.widen(),
                negative_span: (-1 - min.widen()) as u128,
                positive_span: max.widen() as u128,
                negative_len: positive_start - 1,
                positive_start,
                positive_len: max_index - positive_start,
            }
        };

        Self { bucket_count, regime }
    }

    #[inline(always)]
    fn max_index(&self) -> usize {
        self.bucket_count - 1
    }

    /// Bucket index of `value`, monotonic in `value` and always in `[0, max_index]`.
    #[inline(always)]
    fn slot<T: SignedKey>(&self, value: T) -> usize {
        let value = value.widen();
        let slot = match self.regime {
            Regime::Uniform { min, range } => scale((value - min) as u128, self.max_index(), range),
            Regime::Split {
                min,
                negative_span,
                positive_span,
                negative_len,
                positive_start,
                positive_len,
            } => {
                if value < 0 {
                    scale((value - min) as u128, negative_len, negative_span)
                } else {
                    positive_start + scale(value as u128, positive_len, positive_span)
                }
            }
        };

        debug_assert!(slot <= self.max_index());
        slot.min(self.max_index())
    }
}

/// `floor(offset * len / span)` for `offset <= span`. A zero span maps everything to 0.
#[inline(always)]
fn scale(offset: u128, len: usize, span: u128) -> usize {
    if span == 0 {
        return 0;
    }
    // sealed keys widen into 64 bits, so offset < 2^64 and len < 2^64 and the product fits
    (offset * len as u128 / span) as usize
}

/// Move every value into the bucket of its slot. Buckets are only allocated once they receive
/// their first value.
#[inline(never)]
fn distribute<T: SignedKey>(values: &[T], plan: &Plan, stats: &mut SortStats) -> Result<Vec<Option<Vec<T>>>, Error> {
    let mut buckets: Vec<Option<Vec<T>>> = Vec::new();
    buckets
        .try_reserve_exact(plan.bucket_count)
        .map_err(|source| Error::BucketTable {
            requested: plan.bucket_count,
            source,
        })?;
    buckets.resize_with(plan.bucket_count, || None);

    for &value in values {
        let slot = plan.slot(value);
        if buckets[slot].is_none() {
            stats.buckets += 1;
        }
        let bucket = buckets[slot].get_or_insert_with(Vec::new);
        bucket.try_reserve(1).map_err(|source| Error::Bucket { slot, source })?;
        bucket.push(value);
    }

    Ok(buckets)
}

/// Sort the contents of a single bucket, either by comparison or by another distribution pass.
fn refine<T: SignedKey>(
    bucket: &mut [T],
    slot: usize,
    config: &Config,
    depth: usize,
    stats: &mut SortStats,
) -> Result<(), Error> {
    match bucket.len() {
        0 | 1 => {}
        len if len < config.small_sort_threshold => {
            stats.small_sorts += 1;
            bucket.sort_unstable();
        }
        len if depth >= config.max_depth => {
            warn!("bucket {slot} with {len} values reached depth limit {}, sorting by comparison", config.max_depth);
            stats.depth_fallbacks += 1;
            bucket.sort_unstable();
        }
        len => {
            trace!("redistributing bucket {slot} with {len} values at depth {}", depth + 1);
            sort_level(bucket, config, depth + 1, stats)?;
        }
    }
    Ok(())
}

/// Concatenate the buckets in slot order back into `values`.
#[inline(never)]
fn write_back<T: SignedKey>(values: &mut [T], buckets: Vec<Option<Vec<T>>>) {
    let mut cursor = 0;
    for bucket in buckets.into_iter().flatten() {
        let end = cursor + bucket.len();
        values[cursor..end].copy_from_slice(&bucket);
        cursor = end;
    }
    debug_assert_eq!(cursor, values.len());
}

fn sort_level<T: SignedKey>(values: &mut [T], config: &Config, depth: usize, stats: &mut SortStats) -> Result<(), Error> {
    let Some((min, max)) = scan_range(values) else {
        return Ok(());
    };

    let plan = Plan::new(values.len(), min, max, config.max_buckets);
    stats.passes += 1;
    stats.deepest_level = stats.deepest_level.max(depth);
    debug!(
        "distributing {} values in [{}, {}] into {} buckets ({:?}) at depth {depth}",
        values.len(),
        min.widen(),
        max.widen(),
        plan.bucket_count,
        plan.regime,
    );

    let mut buckets = distribute(values, &plan, stats)?;
    for (slot, bucket) in buckets.iter_mut().enumerate() {
        if let Some(bucket) = bucket {
            refine(bucket, slot, config, depth, stats)?;
        }
    }

    write_back(values, buckets);
    Ok(())
}

/// Sort `values` ascending in place.
///
/// Works for anything that derefs to a mutable slice: arrays, boxed slices and `Vec`s.
/// The only possible error is a failed bucket allocation, in which case `values` is left as a
/// permutation of its input.
pub fn sort<T: SignedKey>(values: &mut [T]) -> Result<(), Error> {
    sort_with_config(values, &Config::default()).map(|_| ())
}

/// Sort `values` ascending in place using the given tuning and return what the sort did.
pub fn sort_with_config<T: SignedKey>(values: &mut [T], config: &Config) -> Result<SortStats, Error> {
    config.validate()?;

    let mut stats = SortStats::default();
    sort_level(values, config, 0, &mut stats)?;
    Ok(stats)
}

/// Method syntax for [`sort`].
pub trait ChenSort {
    fn chen_sort(&mut self) -> Result<(), Error>;
}

impl<T: SignedKey> ChenSort for [T] {
    #[inline]
    fn chen_sort(&mut self) -> Result<(), Error> {
        sort(self)
    }
}
