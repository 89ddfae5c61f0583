use log::trace;

use super::ensure_square;
use crate::config::Tolerances;
use crate::error::MatrixError;
use crate::math::Matrix;

/// Determinant of a square matrix using the default tolerances.
pub fn determinant(m: &Matrix) -> Result<f64, MatrixError> {
    determinant_with(m, &Tolerances::default())
}

/// Determinant of a square matrix.
///
/// 1×1 and 2×2 inputs use the direct formulas. Larger matrices are reduced
/// by Gaussian elimination with partial pivoting on a private copy; a pivot
/// below `tol.determinant_epsilon` makes the result exactly 0.
pub fn determinant_with(m: &Matrix, tol: &Tolerances) -> Result<f64, MatrixError> {
    let n = ensure_square("determinant", m)?;
    match n {
        1 => Ok(m[(0, 0)]),
        2 => Ok(m[(0, 0)] * m[(1, 1)] - m[(0, 1)] * m[(1, 0)]),
        _ => Ok(eliminate(m.to_rows(), tol.determinant_epsilon)),
    }
}

fn eliminate(mut a: Vec<Vec<f64>>, epsilon: f64) -> f64 {
    let n = a.len();
    let mut det = 1.0;

    for i in 0..n {
        let mut max_row = i;
        for k in (i + 1)..n {
            if a[k][i].abs() > a[max_row][i].abs() {
                max_row = k;
            }
        }

        if max_row != i {
            trace!("determinant: swapping rows {} and {}", i, max_row);
            a.swap(i, max_row);
            det = -det;
        }

        let pivot = a[i][i];
        if pivot.abs() < epsilon {
            trace!("determinant: pivot {:e} in column {} is below {:e}", pivot, i, epsilon);
            return 0.0;
        }

        let (upper, lower) = a.split_at_mut(i + 1);
        let pivot_row = &upper[i];
        for row in lower.iter_mut() {
            let factor = row[i] / pivot;
            for (x, p) in row[i..].iter_mut().zip(&pivot_row[i..]) {
                *x -= factor * p;
            }
        }

        det *= pivot;
    }

    det
}
