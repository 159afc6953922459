//! Counting merge sort and in-place partitioning over `i32` sequences.
//!
//! Two engines live here:
//!
//! * [`merge_count`] sorts a range while counting the index pairs `(i, j)`, `i < j`, that satisfy
//!   a caller supplied policy, e.g. inversions or reverse pairs.
//! * [`partition`] reorders a range in place around a first-element pivot (two-way) or into three
//!   bands produced by a classification function (three-way, Dutch National Flag).
//!
//! [`order_stat`] builds quicksort and quickselect on top of the two-way partition.

macro_rules! count_sort_impl {
    ($name:expr) => {
        pub struct CountSortImpl;

        impl crate::CountSort for CountSortImpl {
            fn name() -> String {
                $name.into()
            }

            #[inline]
            fn count_and_sort_by<F>(v: &mut [i32], policy: F) -> crate::Count
            where
                F: FnMut(&i32, &i32) -> bool,
            {
                count_and_sort_slice(v, policy)
            }
        }
    };
}

macro_rules! partition_impl {
    ($name:expr) => {
        pub struct PartitionImpl;

        impl crate::Partition for PartitionImpl {
            fn name() -> String {
                $name.into()
            }

            #[inline]
            fn partition(v: &mut [i32]) -> Option<usize> {
                partition_slice(v)
            }
        }
    };
}

pub mod error;
pub mod merge_count;
pub mod order_stat;
pub mod partition;
pub mod policy;
pub mod range;

pub use error::{Error, Result};
pub use merge_count::bottom_up;
pub use merge_count::top_down::count_and_sort;
pub use merge_count::{count_inversions, count_reverse_pairs};
pub use order_stat::{quicksort, select_nth};
pub use partition::three_way::{partition_three_way, sort_zero_one_two, Band};
pub use partition::two_way::partition_two_way;

/// Accumulator for pair counts. Holds every pair of a slice with a few billion elements.
pub type Count = i64;

/// A counting merge sort implementation, used to run the same test and benchmark suites against
/// every driver.
pub trait CountSort {
    fn name() -> String;

    /// Sorts all of `v` ascending and returns the number of pairs `(i, j)`, `i < j`, for which
    /// `policy(v[i], v[j])` held in the original order.
    fn count_and_sort_by<F>(v: &mut [i32], policy: F) -> Count
    where
        F: FnMut(&i32, &i32) -> bool;

    fn count_inversions(v: &mut [i32]) -> Count {
        Self::count_and_sort_by(v, policy::inversion)
    }
}

/// A partition implementation working on a whole slice with the first element as pivot.
pub trait Partition {
    fn name() -> String;

    /// Returns the final pivot position, or `None` for an empty slice.
    fn partition(v: &mut [i32]) -> Option<usize>;
}
