//! Range resolution shared by both engines.

use core::ops::{Bound, Range, RangeBounds};

use tracing::trace;

use crate::{Error, Result};

/// Resolves `range` against a sequence of length `len` into a half-open `start..end`.
///
/// `start == end` is the empty range and is accepted. `start > end`, `end > len` and bounds that
/// overflow `usize` are rejected.
pub fn resolve<R>(range: R, len: usize) -> Result<Range<usize>>
where
    R: RangeBounds<usize>,
{
    let start = match range.start_bound() {
        Bound::Included(&start) => start,
        Bound::Excluded(&start) => start.checked_add(1).ok_or(Error::MalformedRange {
            start: usize::MAX,
            end: len,
        })?,
        Bound::Unbounded => 0,
    };

    // `..=usize::MAX` can never be in bounds, report it as such.
    let end = match range.end_bound() {
        Bound::Included(&end) => end.checked_add(1).ok_or(Error::RangeOutOfBounds {
            end: usize::MAX,
            len,
        })?,
        Bound::Excluded(&end) => end,
        Bound::Unbounded => len,
    };

    if start > end {
        trace!(start, end, "rejecting malformed range");
        return Err(Error::MalformedRange { start, end });
    }

    if end > len {
        trace!(end, len, "rejecting out of bounds range");
        return Err(Error::RangeOutOfBounds { end, len });
    }

    Ok(start..end)
}

/// Midpoint of the closed interval `[low, high]`, computed without overflow.
#[inline]
pub(crate) const fn midpoint(low: usize, high: usize) -> usize {
    low + (high - low) / 2
}
