//! Built-in sanity checks runnable from the command line.

use matcalc_engine::{
    add, determinant, identity, inverse, multiply, transpose, Matrix, MatrixError,
};

#[derive(Debug, Clone)]
pub struct SelfTestResult {
    pub name: &'static str,
    pub passed: bool,
    pub message: String,
}

type Check = fn() -> Result<(bool, String), MatrixError>;

const CHECKS: [(&str, Check); 6] = [
    ("2x2 matrix sum", check_sum as Check),
    ("matrix product", check_product as Check),
    ("2x2 determinant", check_determinant as Check),
    ("transpose", check_transpose as Check),
    ("identity matrix", check_identity as Check),
    ("matrix inverse", check_inverse as Check),
];

/// Run every check; an engine error counts as a failure.
pub fn run_self_tests() -> Vec<SelfTestResult> {
    CHECKS
        .iter()
        .map(|&(name, check)| {
            let (passed, message) = match check() {
                Ok(outcome) => outcome,
                Err(e) => (false, e.to_string()),
            };
            log::debug!("self-test {:?}: passed = {}", name, passed);
            SelfTestResult {
                name,
                passed,
                message,
            }
        })
        .collect()
}

fn m(rows: &[&[f64]]) -> Result<Matrix, MatrixError> {
    Matrix::from_rows(rows.iter().map(|r| r.to_vec()).collect())
}

fn compare(actual: &Matrix, expected: &Matrix) -> (bool, String) {
    if actual == expected {
        (true, "ok".to_string())
    } else {
        (
            false,
            format!("expected {:?}, got {:?}", expected.to_rows(), actual.to_rows()),
        )
    }
}

fn check_sum() -> Result<(bool, String), MatrixError> {
    let a = m(&[&[1.0, 2.0], &[3.0, 4.0]])?;
    let b = m(&[&[5.0, 6.0], &[7.0, 8.0]])?;
    Ok(compare(&add(&a, &b)?, &m(&[&[6.0, 8.0], &[10.0, 12.0]])?))
}

fn check_product() -> Result<(bool, String), MatrixError> {
    let a = m(&[&[1.0, 2.0], &[3.0, 4.0]])?;
    let b = m(&[&[2.0, 0.0], &[1.0, 2.0]])?;
    Ok(compare(&multiply(&a, &b)?, &m(&[&[4.0, 4.0], &[10.0, 8.0]])?))
}

fn check_determinant() -> Result<(bool, String), MatrixError> {
    let det = determinant(&m(&[&[4.0, 3.0], &[6.0, 3.0]])?)?;
    if (det - -6.0).abs() < 1e-4 {
        Ok((true, "ok".to_string()))
    } else {
        Ok((false, format!("expected -6, got {}", det)))
    }
}

fn check_transpose() -> Result<(bool, String), MatrixError> {
    let a = m(&[&[1.0, 2.0, 3.0], &[4.0, 5.0, 6.0]])?;
    Ok(compare(
        &transpose(&a),
        &m(&[&[1.0, 4.0], &[2.0, 5.0], &[3.0, 6.0]])?,
    ))
}

fn check_identity() -> Result<(bool, String), MatrixError> {
    let expected = m(&[&[1.0, 0.0, 0.0], &[0.0, 1.0, 0.0], &[0.0, 0.0, 1.0]])?;
    Ok(compare(&identity(3)?, &expected))
}

fn check_inverse() -> Result<(bool, String), MatrixError> {
    let a = m(&[&[4.0, 7.0], &[2.0, 6.0]])?;
    let product = multiply(&a, &inverse(&a)?)?;
    let err = product.max_abs_diff(&identity(2)?).unwrap_or(f64::INFINITY);
    if err <= 1e-4 {
        Ok((true, "A × A⁻¹ = I".to_string()))
    } else {
        Ok((false, format!("A × A⁻¹ ≠ I (max error {:e})", err)))
    }
}
