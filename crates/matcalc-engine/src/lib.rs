//! matcalc-engine: dense-matrix arithmetic for small matrices.
//!
//! The crate provides a validated `Matrix` value type and pure functions
//! over it: addition, subtraction, scalar and matrix multiplication,
//! transpose, identity, determinant (partial-pivoted Gaussian
//! elimination), inverse (Gauss-Jordan with partial pivoting) and a
//! verification report for `A × A⁻¹ ≈ I`.
//!
//! Nothing here keeps state between calls, and nothing knows about
//! operation names; callers pick the function they need.
pub mod config;
pub mod error;
pub mod math;
pub mod ops;
pub mod random;

pub use config::Tolerances;
pub use error::{ErrorKind, MatrixError, SingularCause};
pub use math::Matrix;
pub use ops::{
    add, determinant, determinant_with, identity, inverse, inverse_with, multiply,
    scalar_multiply, subtract, transpose, verify_inverse, verify_inverse_with,
    VerificationReport,
};
pub use random::{random_matrix, RandomSpec};
