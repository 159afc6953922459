//! Shared patterns and test suites for `count_partition` implementations.

pub mod patterns;
