//! Text and JSON rendering of operation results.
use std::fmt::Write;

use serde::ser::Error as _;
use serde::Serialize;

use crate::operation::{Operation, Outcome};

/// Render an outcome for terminal display with `precision` decimals.
pub fn render_outcome(op: &Operation, outcome: &Outcome, precision: usize) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", op.label());
    match outcome {
        Outcome::Matrix(m) => {
            let _ = writeln!(out, "{:.*}", precision, m);
        }
        Outcome::Scalar(det) => {
            let _ = writeln!(out, "det = {:.*}", precision, det);
        }
        Outcome::Inverse {
            inverse,
            verification,
        } => {
            let _ = writeln!(out, "{:.*}", precision, inverse);
            let _ = writeln!(out, "Verification (A × A⁻¹):");
            let _ = writeln!(out, "{:.*}", precision, verification.product);
            if verification.is_correct {
                let _ = writeln!(
                    out,
                    "verification passed: A × A⁻¹ ≈ I (max error {:.2e})",
                    verification.max_error
                );
            } else {
                let _ = writeln!(
                    out,
                    "verification warning: A × A⁻¹ ≠ I (max error {:.2e})",
                    verification.max_error
                );
            }
        }
    }
    out
}

#[derive(Serialize)]
struct JsonOutcome<'a> {
    operation: &'a Operation,
    result: &'a Outcome,
}

/// Render an outcome as pretty-printed JSON.
///
/// Fails when the result holds an overflowed cell, since JSON has no
/// encoding for `inf` and serde_json would silently write `null`.
pub fn render_outcome_json(op: &Operation, outcome: &Outcome) -> serde_json::Result<String> {
    let finite = match outcome {
        Outcome::Matrix(m) => m.as_slice().iter().all(|v| v.is_finite()),
        Outcome::Scalar(v) => v.is_finite(),
        Outcome::Inverse {
            inverse,
            verification,
        } => {
            verification.max_error.is_finite()
                && inverse
                    .as_slice()
                    .iter()
                    .chain(verification.product.as_slice())
                    .all(|v| v.is_finite())
        }
    };
    if !finite {
        return Err(serde_json::Error::custom(format!(
            "{} produced a non-finite value that JSON cannot represent",
            op.label()
        )));
    }
    serde_json::to_string_pretty(&JsonOutcome {
        operation: op,
        result: outcome,
    })
}
