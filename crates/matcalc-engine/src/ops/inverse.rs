use log::{debug, trace};

use super::{determinant_with, ensure_square};
use crate::config::Tolerances;
use crate::error::{MatrixError, SingularCause};
use crate::math::Matrix;

/// Inverse of a square matrix using the default tolerances.
pub fn inverse(m: &Matrix) -> Result<Matrix, MatrixError> {
    inverse_with(m, &Tolerances::default())
}

/// Inverse of a square matrix.
///
/// The determinant is checked first and `|det| < tol.determinant_epsilon`
/// is rejected as singular. 2×2 inputs use the closed form; everything else
/// goes through Gauss-Jordan elimination on `[M | I]`, which rejects any
/// pivot smaller than `tol.pivot_epsilon`.
pub fn inverse_with(m: &Matrix, tol: &Tolerances) -> Result<Matrix, MatrixError> {
    let n = ensure_square("inverse", m)?;

    let det = determinant_with(m, tol)?;
    if det.abs() < tol.determinant_epsilon {
        debug!("inverse: determinant {:e} below {:e}", det, tol.determinant_epsilon);
        return Err(MatrixError::Singular(SingularCause::Determinant { value: det }));
    }

    if n == 2 {
        debug!("inverse: 2x2 closed form");
        let (a, b, c, d) = (m[(0, 0)], m[(0, 1)], m[(1, 0)], m[(1, 1)]);
        return Ok(Matrix::from_parts(
            2,
            2,
            vec![d / det, -b / det, -c / det, a / det],
        ));
    }

    debug!("inverse: Gauss-Jordan on {}x{}", n, n);
    gauss_jordan(m, tol.pivot_epsilon)
}

fn gauss_jordan(m: &Matrix, epsilon: f64) -> Result<Matrix, MatrixError> {
    let n = m.nrows();
    let width = 2 * n;

    // [M | I]
    let mut augmented: Vec<Vec<f64>> = m
        .rows()
        .enumerate()
        .map(|(i, row)| {
            let mut aug = Vec::with_capacity(width);
            aug.extend_from_slice(row);
            aug.extend((0..n).map(|j| if i == j { 1.0 } else { 0.0 }));
            aug
        })
        .collect();

    for i in 0..n {
        let mut max_row = i;
        for k in (i + 1)..n {
            if augmented[k][i].abs() > augmented[max_row][i].abs() {
                max_row = k;
            }
        }
        if max_row != i {
            trace!("inverse: swapping rows {} and {}", i, max_row);
            augmented.swap(i, max_row);
        }

        let pivot = augmented[i][i];
        if pivot.abs() < epsilon {
            return Err(MatrixError::Singular(SingularCause::Pivot {
                column: i,
                value: pivot,
            }));
        }

        for x in augmented[i].iter_mut() {
            *x /= pivot;
        }

        let pivot_row = augmented[i].clone();
        for (k, row) in augmented.iter_mut().enumerate() {
            if k == i {
                continue;
            }
            let factor = row[i];
            for (x, p) in row.iter_mut().zip(&pivot_row) {
                *x -= factor * p;
            }
        }
    }

    let data = augmented
        .into_iter()
        .flat_map(|row| row.into_iter().skip(n))
        .collect();
    Ok(Matrix::from_parts(n, n, data))
}
