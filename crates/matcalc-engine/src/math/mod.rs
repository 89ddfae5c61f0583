//! The dense matrix value type used throughout the crate.
//!
//! `Matrix` is a small row-major container over finite `f64` values with
//! validating constructors. It is deliberately dependency-free apart from
//! `serde`, so callers can move matrices in and out as nested arrays.
pub mod matrix;

pub use matrix::Matrix;
