//! Integration tests for the `Matrix` value type.

use matcalc_engine::{ErrorKind, Matrix, MatrixError};

fn m(rows: &[&[f64]]) -> Matrix {
    Matrix::from_rows(rows.iter().map(|r| r.to_vec()).collect()).unwrap()
}

// ---------------------------------------------------------------------------
// Construction
// ---------------------------------------------------------------------------

#[test]
fn from_rows_shape() {
    let a = m(&[&[1.0, 2.0, 3.0], &[4.0, 5.0, 6.0]]);
    assert_eq!(a.nrows(), 2);
    assert_eq!(a.ncols(), 3);
    assert_eq!(a.shape(), (2, 3));
    assert!(!a.is_square());
}

#[test]
fn from_rows_rejects_ragged_rows() {
    let err = Matrix::from_rows(vec![vec![1.0, 2.0], vec![3.0]]).unwrap_err();
    assert_eq!(
        err,
        MatrixError::RaggedRows {
            row: 1,
            expected: 2,
            found: 1
        }
    );
    assert_eq!(err.kind(), ErrorKind::InvalidInput);
}

#[test]
fn from_rows_rejects_empty() {
    assert_eq!(Matrix::from_rows(vec![]).unwrap_err(), MatrixError::Empty);
    assert_eq!(Matrix::from_rows(vec![vec![]]).unwrap_err(), MatrixError::Empty);
}

#[test]
fn from_rows_rejects_non_finite() {
    let err = Matrix::from_rows(vec![vec![1.0, 2.0], vec![f64::NAN, 4.0]]).unwrap_err();
    assert_eq!(err, MatrixError::NonFinite { row: 1, col: 0 });

    let err = Matrix::from_rows(vec![vec![1.0, f64::INFINITY]]).unwrap_err();
    assert_eq!(err, MatrixError::NonFinite { row: 0, col: 1 });
}

#[test]
fn from_shape_vec_mismatch_errors() {
    let err = Matrix::from_shape_vec((2, 3), vec![1.0, 2.0, 3.0]).unwrap_err();
    assert_eq!(
        err,
        MatrixError::InvalidShape {
            rows: 2,
            cols: 3,
            len: 3
        }
    );
    assert!(Matrix::from_shape_vec((0, 3), vec![]).is_err());
}

// ---------------------------------------------------------------------------
// Access
// ---------------------------------------------------------------------------

#[test]
fn indexing_is_row_major() {
    let a = Matrix::from_shape_vec((2, 2), vec![1.0, 2.0, 3.0, 4.0]).unwrap();
    assert_eq!(a[(0, 0)], 1.0);
    assert_eq!(a[(0, 1)], 2.0);
    assert_eq!(a[(1, 0)], 3.0);
    assert_eq!(a[(1, 1)], 4.0);
    assert_eq!(a.row_slice(1), &[3.0, 4.0]);
}

#[test]
fn to_rows_round_trips_nested_form() {
    let rows = vec![vec![1.5, -2.0], vec![0.0, 7.0], vec![3.0, 3.0]];
    let a = Matrix::from_rows(rows.clone()).unwrap();
    assert_eq!(a.to_rows(), rows);
}

#[test]
fn mapv_returns_new_matrix() {
    let a = m(&[&[1.0, -2.0]]);
    let neg = a.mapv(|x| -x);
    assert_eq!(neg.to_rows(), vec![vec![-1.0, 2.0]]);
    assert_eq!(a.to_rows(), vec![vec![1.0, -2.0]]);
}

// ---------------------------------------------------------------------------
// Serde
// ---------------------------------------------------------------------------

#[test]
fn serializes_as_nested_rows() {
    let a = m(&[&[1.0, 2.0], &[3.0, 4.5]]);
    let json = serde_json::to_string(&a).unwrap();
    assert_eq!(json, "[[1.0,2.0],[3.0,4.5]]");
}

#[test]
fn deserializes_and_validates() {
    let a: Matrix = serde_json::from_str("[[1, 2], [3, 4]]").unwrap();
    assert_eq!(a.shape(), (2, 2));

    let ragged: Result<Matrix, _> = serde_json::from_str("[[1, 2], [3]]");
    assert!(ragged.is_err());

    let empty: Result<Matrix, _> = serde_json::from_str("[]");
    assert!(empty.is_err());
}
