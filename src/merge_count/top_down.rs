use core::ops::RangeBounds;

use tracing::debug;

use crate::merge_count::{count_across, merge};
use crate::range::{self, midpoint};
use crate::{Count, Result};

count_sort_impl!("top_down");

/// Sorts `v[range]` ascending and returns the number of pairs `(i, j)`, `i < j`, inside the range
/// for which `policy(v[i], v[j])` held before the call.
///
/// `policy` must be pure and monotone, see [`crate::policy`]. Runs in *O*(*n* \* log(*n*)) time
/// with a single scratch buffer of the range length.
///
/// The range is validated before anything is touched. An empty or single element range returns
/// `0` and leaves `v` unchanged.
///
/// ```
/// let mut v = [9, 5, 4, 2];
/// let count = count_partition::count_and_sort(&mut v, .., count_partition::policy::inversion);
/// assert_eq!(count, Ok(6));
/// assert_eq!(v, [2, 4, 5, 9]);
/// ```
pub fn count_and_sort<R, F>(v: &mut [i32], range: R, policy: F) -> Result<Count>
where
    R: RangeBounds<usize>,
    F: FnMut(&i32, &i32) -> bool,
{
    let range = range::resolve(range, v.len())?;
    let (start, end) = (range.start, range.end);

    let count = count_and_sort_slice(&mut v[range], policy);
    debug!(start, end, count, "counted pairs with top-down merge sort");

    Ok(count)
}

pub(crate) fn count_and_sort_slice<F>(v: &mut [i32], mut policy: F) -> Count
where
    F: FnMut(&i32, &i32) -> bool,
{
    if v.len() < 2 {
        return 0;
    }

    let mut scratch = Vec::with_capacity(v.len());
    count_recursive(v, &mut policy, &mut scratch, 0)
}

fn count_recursive<F>(v: &mut [i32], policy: &mut F, scratch: &mut Vec<i32>, depth: u32) -> Count
where
    F: FnMut(&i32, &i32) -> bool,
{
    let len = v.len();
    if len < 2 {
        return 0;
    }

    // Halving bounds the depth by log2(len).
    debug_assert!(depth < usize::BITS);

    // `v[..mid]` is the closed interval `[0, midpoint(0, len - 1)]`.
    let mid = midpoint(0, len - 1) + 1;

    let (left, right) = v.split_at_mut(mid);
    let mut count = count_recursive(left, policy, scratch, depth + 1);
    count += count_recursive(right, policy, scratch, depth + 1);

    // Counting has to see both halves fully sorted, and must finish before merging.
    count += count_across(v, mid, policy);
    merge(v, mid, scratch);

    count
}
