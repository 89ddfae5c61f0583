//! Integration tests for add/subtract/scalar/transpose/identity/multiply.

use matcalc_engine::{
    add, identity, multiply, scalar_multiply, subtract, transpose, ErrorKind, Matrix, MatrixError,
};

fn m(rows: &[&[f64]]) -> Matrix {
    Matrix::from_rows(rows.iter().map(|r| r.to_vec()).collect()).unwrap()
}

// ---------------------------------------------------------------------------
// Addition / subtraction
// ---------------------------------------------------------------------------

#[test]
fn add_two_by_two() {
    let a = m(&[&[1.0, 2.0], &[3.0, 4.0]]);
    let b = m(&[&[5.0, 6.0], &[7.0, 8.0]]);
    let sum = add(&a, &b).unwrap();
    assert_eq!(sum, m(&[&[6.0, 8.0], &[10.0, 12.0]]));
}

#[test]
fn subtract_is_ordered() {
    let a = m(&[&[1.0, 2.0], &[3.0, 4.0]]);
    let b = m(&[&[5.0, 6.0], &[7.0, 8.0]]);
    assert_eq!(subtract(&a, &b).unwrap(), m(&[&[-4.0, -4.0], &[-4.0, -4.0]]));
    assert_eq!(subtract(&b, &a).unwrap(), m(&[&[4.0, 4.0], &[4.0, 4.0]]));
}

#[test]
fn add_shape_mismatch() {
    let a = m(&[&[1.0, 2.0], &[3.0, 4.0]]);
    let b = m(&[&[1.0, 2.0, 3.0], &[4.0, 5.0, 6.0]]);
    let err = add(&a, &b).unwrap_err();
    assert_eq!(
        err,
        MatrixError::DimensionMismatch {
            op: "add",
            lhs: (2, 2),
            rhs: (2, 3)
        }
    );
    assert_eq!(subtract(&a, &b).unwrap_err().kind(), ErrorKind::DimensionMismatch);
}

#[test]
fn inputs_are_left_untouched() {
    let a = m(&[&[1.0, 2.0], &[3.0, 4.0]]);
    let b = m(&[&[5.0, 6.0], &[7.0, 8.0]]);
    let (a0, b0) = (a.clone(), b.clone());
    let _ = add(&a, &b).unwrap();
    let _ = multiply(&a, &b).unwrap();
    let _ = transpose(&a);
    assert_eq!(a, a0);
    assert_eq!(b, b0);
}

// ---------------------------------------------------------------------------
// Scalar / transpose / identity
// ---------------------------------------------------------------------------

#[test]
fn scalar_multiply_scales_every_entry() {
    let a = m(&[&[1.0, -2.0], &[0.5, 0.0]]);
    assert_eq!(scalar_multiply(&a, 2.0), m(&[&[2.0, -4.0], &[1.0, 0.0]]));
    assert_eq!(scalar_multiply(&a, 0.0).as_slice().iter().sum::<f64>(), 0.0);
}

#[test]
fn transpose_rectangular() {
    let a = m(&[&[1.0, 2.0, 3.0], &[4.0, 5.0, 6.0]]);
    let t = transpose(&a);
    assert_eq!(t.shape(), (3, 2));
    assert_eq!(t, m(&[&[1.0, 4.0], &[2.0, 5.0], &[3.0, 6.0]]));
}

#[test]
fn identity_three() {
    let eye = identity(3).unwrap();
    assert_eq!(
        eye,
        m(&[&[1.0, 0.0, 0.0], &[0.0, 1.0, 0.0], &[0.0, 0.0, 1.0]])
    );
}

#[test]
fn identity_zero_is_rejected() {
    assert_eq!(identity(0).unwrap_err(), MatrixError::InvalidSize { n: 0 });
}

// ---------------------------------------------------------------------------
// Multiplication
// ---------------------------------------------------------------------------

#[test]
fn multiply_two_by_two() {
    let a = m(&[&[1.0, 2.0], &[3.0, 4.0]]);
    let b = m(&[&[2.0, 0.0], &[1.0, 2.0]]);
    assert_eq!(multiply(&a, &b).unwrap(), m(&[&[4.0, 4.0], &[10.0, 8.0]]));
}

#[test]
fn multiply_rectangular_shapes() {
    let a = m(&[&[1.0, 2.0, 3.0]]);
    let b = m(&[&[4.0], &[5.0], &[6.0]]);
    assert_eq!(multiply(&a, &b).unwrap(), m(&[&[32.0]]));
    let outer = multiply(&b, &a).unwrap();
    assert_eq!(outer.shape(), (3, 3));
    assert_eq!(outer[(2, 2)], 18.0);
}

#[test]
fn multiply_inner_dimension_mismatch() {
    let a = m(&[&[1.0, 2.0], &[3.0, 4.0]]);
    let b = m(&[&[1.0, 2.0, 3.0]]);
    let err = multiply(&a, &b).unwrap_err();
    assert_eq!(
        err,
        MatrixError::DimensionMismatch {
            op: "multiply",
            lhs: (2, 2),
            rhs: (1, 3)
        }
    );
}
