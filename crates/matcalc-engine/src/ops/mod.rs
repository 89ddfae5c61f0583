//! Matrix arithmetic: elementary operations, determinant, inverse and
//! inverse verification. All functions are pure; inputs are borrowed and
//! results are freshly allocated.
pub mod determinant;
pub mod elementary;
pub mod inverse;
pub mod verify;

pub use determinant::{determinant, determinant_with};
pub use elementary::{add, identity, multiply, scalar_multiply, subtract, transpose};
pub use inverse::{inverse, inverse_with};
pub use verify::{verify_inverse, verify_inverse_with, VerificationReport};

use crate::error::MatrixError;
use crate::math::Matrix;

pub(crate) fn ensure_square(op: &'static str, m: &Matrix) -> Result<usize, MatrixError> {
    if m.is_square() {
        Ok(m.nrows())
    } else {
        Err(MatrixError::NotSquare {
            op,
            shape: m.shape(),
        })
    }
}
