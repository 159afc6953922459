//! Quicksort and quickselect driven by the two-way first-element partition.
//!
//! Both inherit its pivot choice. Sorted and reverse sorted input take *O*(*n*^2) comparisons.
//! Quicksort bounds its stack depth regardless, by recursing only into the shorter side.

use core::cmp::Ordering;
use core::ops::RangeBounds;

use tracing::debug;

use crate::partition::two_way::partition_non_empty;
use crate::range;
use crate::{Error, Result};

/// Sorts `v[range]` ascending. Not stable.
pub fn quicksort<R>(v: &mut [i32], range: R) -> Result<()>
where
    R: RangeBounds<usize>,
{
    let range = range::resolve(range, v.len())?;
    let (start, end) = (range.start, range.end);

    quicksort_slice(&mut v[range]);
    debug!(start, end, "sorted with first-pivot quicksort");

    Ok(())
}

fn quicksort_slice(mut v: &mut [i32]) {
    while v.len() > 1 {
        let mid = partition_non_empty(v);

        // Split the slice into `left`, `pivot`, and `right`.
        let (left, right) = v.split_at_mut(mid);
        let right = &mut right[1..];

        // Recursing into the shorter side keeps the depth at log2(len).
        if left.len() < right.len() {
            quicksort_slice(left);
            v = right;
        } else {
            quicksort_slice(right);
            v = left;
        }
    }
}

/// Returns the element of rank `k` in `v[range]`, the one that would be at `range.start + k`
/// if the range were sorted.
///
/// On return that element is at `range.start + k`, everything in the range before it is `<=` and
/// everything after it is `>=`. Runs iteratively in expected linear time on unordered input.
pub fn select_nth<R>(v: &mut [i32], range: R, k: usize) -> Result<i32>
where
    R: RangeBounds<usize>,
{
    let range = range::resolve(range, v.len())?;
    if k >= range.len() {
        return Err(Error::RankOutOfRange {
            rank: k,
            len: range.len(),
        });
    }

    let start = range.start;
    let value = select_slice(&mut v[range], k);
    debug!(start, k, value, "selected order statistic");

    Ok(value)
}

fn select_slice(mut v: &mut [i32], mut k: usize) -> i32 {
    // `k < v.len()` holds on every iteration, so `v` is never empty.
    loop {
        let p = partition_non_empty(v);

        match k.cmp(&p) {
            Ordering::Equal => return v[p],
            Ordering::Less => v = &mut v[..p],
            Ordering::Greater => {
                k -= p + 1;
                v = &mut v[(p + 1)..];
            }
        }
    }
}
