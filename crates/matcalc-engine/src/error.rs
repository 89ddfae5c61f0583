use thiserror::Error;

/// Why an inversion was refused.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SingularCause {
    /// The determinant gate fired before elimination started.
    Determinant { value: f64 },
    /// A Gauss-Jordan pivot fell below the pivot epsilon.
    Pivot { column: usize, value: f64 },
}

/// Coarse failure taxonomy, independent of the error payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    DimensionMismatch,
    NotSquare,
    Singular,
    InvalidInput,
}

/// Errors produced by matrix construction and arithmetic.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum MatrixError {
    /// Operand shapes are incompatible for the requested operation.
    #[error("{op}: incompatible dimensions {}x{} and {}x{}", .lhs.0, .lhs.1, .rhs.0, .rhs.1)]
    DimensionMismatch {
        op: &'static str,
        lhs: (usize, usize),
        rhs: (usize, usize),
    },

    /// Determinant or inverse requested on a non-square matrix.
    #[error("{op} requires a square matrix, got {}x{}", .shape.0, .shape.1)]
    NotSquare {
        op: &'static str,
        shape: (usize, usize),
    },

    /// The matrix is numerically singular.
    #[error("matrix is not invertible ({0})")]
    Singular(SingularCause),

    #[error("matrix must have at least one row and one column")]
    Empty,

    #[error("row {row} has {found} values, expected {expected}")]
    RaggedRows {
        row: usize,
        expected: usize,
        found: usize,
    },

    #[error("invalid shape ({rows}, {cols}) for buffer of length {len}")]
    InvalidShape { rows: usize, cols: usize, len: usize },

    #[error("value at ({row}, {col}) is not a finite number")]
    NonFinite { row: usize, col: usize },

    #[error("matrix size must be at least 1, got {n}")]
    InvalidSize { n: usize },

    #[error("invalid value range [{min}, {max}]")]
    InvalidRange { min: f64, max: f64 },
}

impl MatrixError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            MatrixError::DimensionMismatch { .. } => ErrorKind::DimensionMismatch,
            MatrixError::NotSquare { .. } => ErrorKind::NotSquare,
            MatrixError::Singular(_) => ErrorKind::Singular,
            MatrixError::Empty
            | MatrixError::RaggedRows { .. }
            | MatrixError::InvalidShape { .. }
            | MatrixError::NonFinite { .. }
            | MatrixError::InvalidSize { .. }
            | MatrixError::InvalidRange { .. } => ErrorKind::InvalidInput,
        }
    }
}

impl std::fmt::Display for SingularCause {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            SingularCause::Determinant { value } => write!(f, "determinant {:e} is effectively zero", value),
            SingularCause::Pivot { column, value } => {
                write!(f, "pivot {:e} in column {} is effectively zero", value, column)
            }
        }
    }
}
