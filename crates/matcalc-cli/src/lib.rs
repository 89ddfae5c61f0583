//! matcalc-cli: the caller layer around `matcalc-engine`.
//!
//! Maps operation names onto engine functions, loads matrices and run
//! configuration from disk, renders results and hosts the built-in
//! self-test suite used by the `matcalc` binary.
pub mod input;
pub mod operation;
pub mod output;
pub mod selftest;
