use crate::error::MatrixError;
use crate::math::Matrix;

fn zip_same_shape<F>(op: &'static str, a: &Matrix, b: &Matrix, f: F) -> Result<Matrix, MatrixError>
where
    F: Fn(f64, f64) -> f64,
{
    if a.shape() != b.shape() {
        return Err(MatrixError::DimensionMismatch {
            op,
            lhs: a.shape(),
            rhs: b.shape(),
        });
    }
    let data = a
        .as_slice()
        .iter()
        .zip(b.as_slice())
        .map(|(&x, &y)| f(x, y))
        .collect();
    Ok(Matrix::from_parts(a.nrows(), a.ncols(), data))
}

/// Elementwise `a + b`. Shapes must match exactly.
pub fn add(a: &Matrix, b: &Matrix) -> Result<Matrix, MatrixError> {
    zip_same_shape("add", a, b, |x, y| x + y)
}

/// Elementwise `a - b`. Shapes must match exactly.
pub fn subtract(a: &Matrix, b: &Matrix) -> Result<Matrix, MatrixError> {
    zip_same_shape("subtract", a, b, |x, y| x - y)
}

pub fn scalar_multiply(m: &Matrix, k: f64) -> Matrix {
    m.mapv(|v| k * v)
}

/// Returns the `cols × rows` matrix with `result[j][i] = m[i][j]`.
pub fn transpose(m: &Matrix) -> Matrix {
    let (rows, cols) = m.shape();
    let mut data = Vec::with_capacity(rows * cols);
    for j in 0..cols {
        for i in 0..rows {
            data.push(m[(i, j)]);
        }
    }
    Matrix::from_parts(cols, rows, data)
}

/// The `n × n` identity matrix. `n` must be at least 1.
pub fn identity(n: usize) -> Result<Matrix, MatrixError> {
    if n == 0 {
        return Err(MatrixError::InvalidSize { n });
    }
    let mut data = vec![0.0; n * n];
    for i in 0..n {
        data[i * n + i] = 1.0;
    }
    Ok(Matrix::from_parts(n, n, data))
}

/// Matrix product `a × b` by plain triple-loop summation.
///
/// Requires `a.ncols() == b.nrows()`; the result is `a.nrows() × b.ncols()`.
pub fn multiply(a: &Matrix, b: &Matrix) -> Result<Matrix, MatrixError> {
    if a.ncols() != b.nrows() {
        return Err(MatrixError::DimensionMismatch {
            op: "multiply",
            lhs: a.shape(),
            rhs: b.shape(),
        });
    }

    let (rows, inner, cols) = (a.nrows(), a.ncols(), b.ncols());
    let mut data = Vec::with_capacity(rows * cols);
    for i in 0..rows {
        for j in 0..cols {
            let mut sum = 0.0;
            for k in 0..inner {
                sum += a[(i, k)] * b[(k, j)];
            }
            data.push(sum);
        }
    }
    Ok(Matrix::from_parts(rows, cols, data))
}
