use core::ops::{Range, RangeBounds};

use tracing::debug;

use crate::range;
use crate::{Error, Result};

/// Classification of an element for [`partition_three_way`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Band {
    Low,
    Mid,
    High,
}

impl Band {
    /// Maps `0`, `1` and `2` to `Low`, `Mid` and `High`. Anything else is `None`.
    #[inline]
    pub const fn from_012(value: i32) -> Option<Band> {
        match value {
            0 => Some(Band::Low),
            1 => Some(Band::Mid),
            2 => Some(Band::High),
            _ => None,
        }
    }
}

/// Reorders `v[range]` so every `Low` element precedes every `Mid` element, which precedes every
/// `High` element, as decided by `classify`. Equal elements may be reordered.
///
/// Single pass, *O*(1) extra space, `classify` is called once per element except for elements
/// swapped in from the high end, which are classified when the cursor reaches them.
pub fn partition_three_way<R, F>(v: &mut [i32], range: R, mut classify: F) -> Result<()>
where
    R: RangeBounds<usize>,
    F: FnMut(&i32) -> Band,
{
    let range = range::resolve(range, v.len())?;
    let start = range.start;

    let mid_band = partition_slice_by(&mut v[range], &mut classify);
    debug!(
        start,
        mid_start = start + mid_band.start,
        mid_end = start + mid_band.end,
        "banded range into low, mid and high"
    );

    Ok(())
}

/// Sorts a range that only contains `0`, `1` and `2`.
///
/// The whole range is checked first, the first value outside the alphabet is reported as
/// [`Error::Unclassified`] with its index in `v` and nothing is moved.
pub fn sort_zero_one_two<R>(v: &mut [i32], range: R) -> Result<()>
where
    R: RangeBounds<usize>,
{
    let range = range::resolve(range, v.len())?;

    if let Some((offset, &value)) = v[range.clone()]
        .iter()
        .enumerate()
        .find(|(_, x)| Band::from_012(**x).is_none())
    {
        return Err(Error::Unclassified {
            index: range.start + offset,
            value,
        });
    }

    partition_three_way(v, range, |x| match *x {
        0 => Band::Low,
        1 => Band::Mid,
        _ => Band::High,
    })
}

/// Dutch National Flag partition. Returns the range of the `Mid` band relative to `v`.
///
/// Invariant for `low <= mid <= high`:
/// `v[..low]` is Low, `v[low..mid]` is Mid, `v[mid..high]` is unclassified, `v[high..]` is High.
#[cfg_attr(feature = "no_inline_sub_functions", inline(never))]
pub(crate) fn partition_slice_by<F>(v: &mut [i32], classify: &mut F) -> Range<usize>
where
    F: FnMut(&i32) -> Band,
{
    let mut low = 0;
    let mut mid = 0;
    let mut high = v.len();

    while mid < high {
        match classify(&v[mid]) {
            Band::Low => {
                // `v[low]` is Mid or `low == mid`, either way it is classified.
                v.swap(low, mid);
                low += 1;
                mid += 1;
            }
            Band::Mid => {
                mid += 1;
            }
            Band::High => {
                high -= 1;
                v.swap(mid, high);
                // The element now at `mid` came from the unclassified region, `mid` stays.
            }
        }
    }

    low..mid
}
