//! In-place, single pass partitioning.
//!
//! * [`two_way`] splits a range around its first element into `<= pivot` and `> pivot`.
//! * [`three_way`] bands a range into Low, Mid and High according to a classification function.
//!
//! Both only ever exchange elements with `<[i32]>::swap` and use *O*(1) extra space.

pub mod three_way;
pub mod two_way;
