//! Closed dispatch over the operations a user can request.
//!
//! The engine only exposes typed functions; this module maps operation
//! identifiers onto them and carries the operands the caller owns.

use std::fmt;
use std::str::FromStr;

use serde::{Serialize, Serializer};
use thiserror::Error;

use matcalc_engine::{
    add, determinant_with, identity, inverse_with, multiply, scalar_multiply, subtract, transpose,
    verify_inverse_with, Matrix, MatrixError, Tolerances, VerificationReport,
};

/// Which of the two input matrices an operation acts on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operand {
    A,
    B,
}

impl Operand {
    fn name(self) -> &'static str {
        match self {
            Operand::A => "A",
            Operand::B => "B",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Add,
    /// `A - B` when `lhs` is `A`, `B - A` otherwise.
    Subtract { lhs: Operand },
    Multiply,
    Scalar(Operand),
    Transpose(Operand),
    Determinant(Operand),
    Inverse(Operand),
    Identity,
}

impl Operation {
    pub const NAMES: [&'static str; 13] = [
        "add",
        "subtract-ab",
        "subtract-ba",
        "multiply",
        "scalar-a",
        "scalar-b",
        "transpose-a",
        "transpose-b",
        "determinant-a",
        "determinant-b",
        "inverse-a",
        "inverse-b",
        "identity",
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Operation::Add => "add",
            Operation::Subtract { lhs: Operand::A } => "subtract-ab",
            Operation::Subtract { lhs: Operand::B } => "subtract-ba",
            Operation::Multiply => "multiply",
            Operation::Scalar(Operand::A) => "scalar-a",
            Operation::Scalar(Operand::B) => "scalar-b",
            Operation::Transpose(Operand::A) => "transpose-a",
            Operation::Transpose(Operand::B) => "transpose-b",
            Operation::Determinant(Operand::A) => "determinant-a",
            Operation::Determinant(Operand::B) => "determinant-b",
            Operation::Inverse(Operand::A) => "inverse-a",
            Operation::Inverse(Operand::B) => "inverse-b",
            Operation::Identity => "identity",
        }
    }

    /// Human readable title for result headers.
    pub fn label(&self) -> String {
        match self {
            Operation::Add => "Matrix sum (A + B)".to_string(),
            Operation::Subtract { lhs: Operand::A } => "Matrix difference (A - B)".to_string(),
            Operation::Subtract { lhs: Operand::B } => "Matrix difference (B - A)".to_string(),
            Operation::Multiply => "Matrix product (A × B)".to_string(),
            Operation::Scalar(m) => format!("Scalar multiple (k × {})", m.name()),
            Operation::Transpose(m) => format!("Transpose of {}", m.name()),
            Operation::Determinant(m) => format!("Determinant of {}", m.name()),
            Operation::Inverse(m) => format!("Inverse of {}", m.name()),
            Operation::Identity => "Identity matrix".to_string(),
        }
    }

    /// Run the operation against the operands in `ws`.
    pub fn apply(&self, ws: &Workspace, tol: &Tolerances) -> Result<Outcome, OperationError> {
        let outcome = match *self {
            Operation::Add => Outcome::Matrix(add(ws.a()?, ws.b()?)?),
            Operation::Subtract { lhs: Operand::A } => Outcome::Matrix(subtract(ws.a()?, ws.b()?)?),
            Operation::Subtract { lhs: Operand::B } => Outcome::Matrix(subtract(ws.b()?, ws.a()?)?),
            Operation::Multiply => Outcome::Matrix(multiply(ws.a()?, ws.b()?)?),
            Operation::Scalar(m) => {
                let k = ws.scalar.ok_or(OperationError::MissingOperand("scalar"))?;
                if !k.is_finite() {
                    return Err(OperationError::InvalidScalar(k));
                }
                Outcome::Matrix(scalar_multiply(ws.get(m)?, k))
            }
            Operation::Transpose(m) => Outcome::Matrix(transpose(ws.get(m)?)),
            Operation::Determinant(m) => Outcome::Scalar(determinant_with(ws.get(m)?, tol)?),
            Operation::Inverse(m) => {
                let source = ws.get(m)?;
                let inverse = inverse_with(source, tol)?;
                let verification = verify_inverse_with(source, &inverse, tol)?;
                if !verification.is_correct {
                    log::warn!(
                        "inverse verification above tolerance: max error {:e}",
                        verification.max_error
                    );
                }
                Outcome::Inverse {
                    inverse,
                    verification,
                }
            }
            Operation::Identity => {
                let n = match ws.identity_size {
                    Some(n) => n,
                    None => ws.a()?.nrows(),
                };
                Outcome::Matrix(identity(n)?)
            }
        };
        Ok(outcome)
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Operation {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let op = match s.to_lowercase().replace('_', "-").as_str() {
            "add" => Operation::Add,
            "subtract-ab" | "subtract" => Operation::Subtract { lhs: Operand::A },
            "subtract-ba" => Operation::Subtract { lhs: Operand::B },
            "multiply" => Operation::Multiply,
            "scalar-a" | "scalar" => Operation::Scalar(Operand::A),
            "scalar-b" => Operation::Scalar(Operand::B),
            "transpose-a" | "transpose" => Operation::Transpose(Operand::A),
            "transpose-b" => Operation::Transpose(Operand::B),
            "determinant-a" | "determinant" => Operation::Determinant(Operand::A),
            "determinant-b" => Operation::Determinant(Operand::B),
            "inverse-a" | "inverse" => Operation::Inverse(Operand::A),
            "inverse-b" => Operation::Inverse(Operand::B),
            "identity" => Operation::Identity,
            _ => {
                return Err(format!(
                    "Unknown operation: {}. Expected one of: {}",
                    s,
                    Operation::NAMES.join(", ")
                ))
            }
        };
        Ok(op)
    }
}

impl Serialize for Operation {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.name())
    }
}

/// Operands supplied by the caller for a single operation.
#[derive(Debug, Clone, Default)]
pub struct Workspace {
    pub a: Option<Matrix>,
    pub b: Option<Matrix>,
    pub scalar: Option<f64>,
    pub identity_size: Option<usize>,
}

impl Workspace {
    fn get(&self, which: Operand) -> Result<&Matrix, OperationError> {
        match which {
            Operand::A => self.a(),
            Operand::B => self.b(),
        }
    }

    fn a(&self) -> Result<&Matrix, OperationError> {
        self.a.as_ref().ok_or(OperationError::MissingOperand("matrix A"))
    }

    fn b(&self) -> Result<&Matrix, OperationError> {
        self.b.as_ref().ok_or(OperationError::MissingOperand("matrix B"))
    }
}

/// Result of a successful operation.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Outcome {
    Matrix(Matrix),
    Scalar(f64),
    /// Inverses always carry their `A × A⁻¹` check.
    Inverse {
        inverse: Matrix,
        verification: VerificationReport,
    },
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum OperationError {
    #[error("{0} is required for this operation")]
    MissingOperand(&'static str),

    #[error("scalar must be a finite number, got {0}")]
    InvalidScalar(f64),

    #[error(transparent)]
    Matrix(#[from] MatrixError),
}
