use core::cmp;
use core::ops::RangeBounds;

use tracing::debug;

use crate::merge_count::{count_across, merge};
use crate::range;
use crate::{Count, Result};

count_sort_impl!("bottom_up");

/// Same contract as [`crate::count_and_sort`], but without recursion.
///
/// Merges adjacent runs of width 1, 2, 4, ... until the range is one run. Each pair of runs gets
/// the same counting sweep followed by merge as in the top-down driver. The split points differ
/// from the top-down driver, the count and the resulting order do not.
pub fn count_and_sort<R, F>(v: &mut [i32], range: R, policy: F) -> Result<Count>
where
    R: RangeBounds<usize>,
    F: FnMut(&i32, &i32) -> bool,
{
    let range = range::resolve(range, v.len())?;
    let (start, end) = (range.start, range.end);

    let count = count_and_sort_slice(&mut v[range], policy);
    debug!(start, end, count, "counted pairs with bottom-up merge sort");

    Ok(count)
}

pub(crate) fn count_and_sort_slice<F>(v: &mut [i32], mut policy: F) -> Count
where
    F: FnMut(&i32, &i32) -> bool,
{
    let len = v.len();
    if len < 2 {
        return 0;
    }

    let mut scratch = Vec::with_capacity(len);
    let mut count = 0;

    let mut width = 1;
    while width < len {
        let mut start = 0;

        // Only runs that have a right neighbour need work, a trailing lone run is already sorted.
        while len - start > width {
            let end = start + cmp::min(2 * width, len - start);
            let run = &mut v[start..end];

            count += count_across(run, width, &mut policy);
            merge(run, width, &mut scratch);

            start = end;
        }

        width = match width.checked_mul(2) {
            Some(width) => width,
            None => break,
        };
    }

    count
}
