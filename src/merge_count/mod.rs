//! Merge sort that counts policy-selected pairs while it sorts.
//!
//! Each merge level first runs a counting sweep over the two sorted halves, then a separate merge
//! sweep. The two sweeps never share cursors: the counting sweep follows the policy, the merge
//! sweep follows the natural order of `i32`, and for policies like [`crate::policy::reverse_pair`]
//! these disagree.

use crate::{policy, Count};

pub mod bottom_up;
pub mod top_down;

/// Number of inversions in `v`. Leaves `v` sorted.
pub fn count_inversions(v: &mut [i32]) -> Count {
    top_down::count_and_sort_slice(v, policy::inversion)
}

/// Number of reverse pairs, `v[i] > 2 * v[j]` with `i < j`, in `v`. Leaves `v` sorted.
pub fn count_reverse_pairs(v: &mut [i32]) -> Count {
    top_down::count_and_sort_slice(v, policy::reverse_pair)
}

/// Counts the pairs `(l, r)` with `l` in `v[..mid]` and `r` in `v[mid..]` for which
/// `policy(l, r)` holds. Both halves must already be sorted ascending.
///
/// Linear in `v.len()`: `r` only ever moves forward, because a monotone policy that accepts
/// `(l, r)` also accepts every larger `l` with the same `r`.
#[cfg_attr(feature = "no_inline_sub_functions", inline(never))]
pub(crate) fn count_across<F>(v: &[i32], mid: usize, policy: &mut F) -> Count
where
    F: FnMut(&i32, &i32) -> bool,
{
    let (left, right) = v.split_at(mid);

    let mut count: Count = 0;
    let mut r = 0;
    for l in left {
        while r < right.len() && policy(l, &right[r]) {
            r += 1;
        }

        // Every right element skipped so far pairs with `l`.
        count += r as Count;
    }

    count
}

/// Stable merge of the sorted runs `v[..mid]` and `v[mid..]`, using `scratch` as temporary
/// storage. `scratch` keeps its capacity between calls.
#[cfg_attr(feature = "no_inline_sub_functions", inline(never))]
pub(crate) fn merge(v: &mut [i32], mid: usize, scratch: &mut Vec<i32>) {
    let (left, right) = v.split_at(mid);

    match (left.last(), right.first()) {
        // Already in order, nothing to do.
        (Some(l), Some(r)) if l <= r => return,
        (None, _) | (_, None) => return,
        _ => {}
    }

    scratch.clear();

    let mut l = 0;
    let mut r = 0;
    while l < left.len() && r < right.len() {
        // `<=` takes from the left on ties, which keeps the merge stable.
        if left[l] <= right[r] {
            scratch.push(left[l]);
            l += 1;
        } else {
            scratch.push(right[r]);
            r += 1;
        }
    }

    scratch.extend_from_slice(&left[l..]);
    scratch.extend_from_slice(&right[r..]);

    v.copy_from_slice(scratch);
}

#[cfg(test)]
pub(crate) fn count_brute<F>(v: &[i32], mut policy: F) -> Count
where
    F: FnMut(&i32, &i32) -> bool,
{
    let mut count = 0;
    for i in 0..v.len() {
        for j in (i + 1)..v.len() {
            if policy(&v[i], &v[j]) {
                count += 1;
            }
        }
    }

    count
}
