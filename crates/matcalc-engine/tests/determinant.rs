//! Integration tests for the determinant.

use approx::assert_relative_eq;
use matcalc_engine::{determinant, determinant_with, identity, Matrix, MatrixError, Tolerances};

fn m(rows: &[&[f64]]) -> Matrix {
    Matrix::from_rows(rows.iter().map(|r| r.to_vec()).collect()).unwrap()
}

#[test]
fn one_by_one_is_the_entry() {
    assert_eq!(determinant(&m(&[&[-3.5]])).unwrap(), -3.5);
}

#[test]
fn two_by_two_direct_formula() {
    assert_eq!(determinant(&m(&[&[4.0, 3.0], &[6.0, 3.0]])).unwrap(), -6.0);
}

#[test]
fn three_by_three_by_elimination() {
    let a = m(&[&[6.0, 1.0, 1.0], &[4.0, -2.0, 5.0], &[2.0, 8.0, 7.0]]);
    assert_relative_eq!(determinant(&a).unwrap(), -306.0, epsilon = 1e-9);
}

#[test]
fn zero_leading_entry_needs_a_swap() {
    // Without pivoting the first step would divide by zero.
    let a = m(&[&[0.0, 2.0, 1.0], &[1.0, 0.0, 0.0], &[0.0, 0.0, 3.0]]);
    assert_relative_eq!(determinant(&a).unwrap(), -6.0, epsilon = 1e-12);
}

#[test]
fn identity_has_unit_determinant() {
    for n in 1..=10 {
        assert_eq!(determinant(&identity(n).unwrap()).unwrap(), 1.0, "n = {}", n);
    }
}

#[test]
fn singular_short_circuits_to_zero() {
    let a = m(&[&[1.0, 2.0, 3.0], &[2.0, 4.0, 6.0], &[1.0, 1.0, 1.0]]);
    assert_eq!(determinant(&a).unwrap(), 0.0);
}

#[test]
fn epsilon_is_configurable() {
    let a = m(&[&[1.0, 0.0, 0.0], &[0.0, 1.0, 0.0], &[0.0, 0.0, 1e-11]]);
    assert_eq!(determinant(&a).unwrap(), 0.0);

    let loose = Tolerances {
        determinant_epsilon: 1e-14,
        ..Tolerances::default()
    };
    assert_relative_eq!(determinant_with(&a, &loose).unwrap(), 1e-11);
}

#[test]
fn non_square_is_rejected() {
    let err = determinant(&m(&[&[1.0, 2.0, 3.0], &[4.0, 5.0, 6.0]])).unwrap_err();
    assert_eq!(
        err,
        MatrixError::NotSquare {
            op: "determinant",
            shape: (2, 3)
        }
    );
}

#[test]
fn input_is_not_mutated() {
    let a = m(&[&[0.0, 2.0, 1.0], &[1.0, 5.0, 0.0], &[4.0, 0.0, 3.0]]);
    let before = a.clone();
    let _ = determinant(&a).unwrap();
    assert_eq!(a, before);
}
