//! Comparison policies for [`crate::count_and_sort`].
//!
//! A policy decides whether the pair `(a, b)`, with `a` taken from the left of `b`, counts. The
//! counting sweep requires the policy to be monotone: if `policy(a, b)` holds, it must also hold
//! for any larger `a` and any smaller `b`. Every policy of the form `a > f(b)` with a
//! non-decreasing `f` satisfies this.

/// `a > b`, counts inversions.
#[inline]
pub fn inversion(a: &i32, b: &i32) -> bool {
    a > b
}

/// `a > 2 * b`, counts reverse pairs. Evaluated in `i64` so `2 * b` can't overflow.
#[inline]
pub fn reverse_pair(a: &i32, b: &i32) -> bool {
    i64::from(*a) > 2 * i64::from(*b)
}

/// `a > k * b` for a fixed non-negative `k`, generalizing [`reverse_pair`].
///
/// # Panics
///
/// Panics if `k` is negative. The resulting predicate would not be monotone.
pub fn greater_than_scaled(k: i32) -> impl Fn(&i32, &i32) -> bool + Copy {
    assert!(k >= 0, "scale factor must be non-negative, got {k}");
    let k = i64::from(k);

    move |a: &i32, b: &i32| i64::from(*a) > k * i64::from(*b)
}
