use core::ops::RangeBounds;

use tracing::debug;

use crate::range;
use crate::Result;

partition_impl!("two_way_first_pivot");

/// Partitions `v[range]` around its first element and returns the pivot's final index in `v`.
///
/// After the call, with `p` the returned index, every element in `v[range.start..p]` is `<=`
/// the pivot, every element in `v[p + 1..range.end]` is `>` the pivot and `v[p]` is the pivot.
/// An empty range returns `None` without touching `v`.
///
/// The pivot is always the first element of the range, it is neither randomized nor sampled.
/// Already sorted or reverse sorted input therefore produces maximally unbalanced partitions and
/// drives quicksort style callers to *O*(*n*^2).
pub fn partition_two_way<R>(v: &mut [i32], range: R) -> Result<Option<usize>>
where
    R: RangeBounds<usize>,
{
    let range = range::resolve(range, v.len())?;
    let start = range.start;

    let pivot_pos = partition_slice(&mut v[range]).map(|p| start + p);
    debug!(start, ?pivot_pos, "partitioned around first element");

    Ok(pivot_pos)
}

pub(crate) fn partition_slice(v: &mut [i32]) -> Option<usize> {
    if v.is_empty() {
        return None;
    }

    Some(partition_non_empty(v))
}

/// Hoare style partition around `v[0]`. Panics if `v` is empty.
#[cfg_attr(feature = "no_inline_sub_functions", inline(never))]
pub(crate) fn partition_non_empty(v: &mut [i32]) -> usize {
    let pivot = v[0];
    let high = v.len() - 1;

    let mut i = 0;
    let mut j = high;
    while i < j {
        // The index bounds are checked independently of the comparison, otherwise input where
        // every element equals the pivot would run `i` off the end.
        while i < high && v[i] <= pivot {
            i += 1;
        }

        while j > 0 && v[j] > pivot {
            j -= 1;
        }

        if i < j {
            v.swap(i, j);
        }
    }

    // `v[j] <= pivot` holds here, either `j` stopped on such an element or it reached the pivot.
    v.swap(0, j);

    j
}
