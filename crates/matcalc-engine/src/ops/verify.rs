use serde::Serialize;

use super::{ensure_square, identity, multiply};
use crate::config::Tolerances;
use crate::error::MatrixError;
use crate::math::Matrix;

/// Outcome of checking `A × A⁻¹` against the identity.
///
/// Purely informational: producing a report never changes the inverse.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VerificationReport {
    pub product: Matrix,
    pub max_error: f64,
    pub is_correct: bool,
}

pub fn verify_inverse(a: &Matrix, a_inv: &Matrix) -> Result<VerificationReport, MatrixError> {
    verify_inverse_with(a, a_inv, &Tolerances::default())
}

/// Multiply `a` by its claimed inverse and measure the largest deviation
/// from the identity. `is_correct` holds when that deviation is at most
/// `tol.verification_tolerance`.
pub fn verify_inverse_with(
    a: &Matrix,
    a_inv: &Matrix,
    tol: &Tolerances,
) -> Result<VerificationReport, MatrixError> {
    let n = ensure_square("verify_inverse", a)?;
    let product = multiply(a, a_inv)?;
    if product.shape() != (n, n) {
        return Err(MatrixError::DimensionMismatch {
            op: "verify_inverse",
            lhs: a.shape(),
            rhs: a_inv.shape(),
        });
    }

    let eye = identity(n)?;
    let max_error = product.max_abs_diff(&eye).unwrap_or(f64::INFINITY);
    Ok(VerificationReport {
        product,
        max_error,
        is_correct: max_error <= tol.verification_tolerance,
    })
}
