use serde::{Deserialize, Serialize};

/// Pivot magnitude below which the determinant short-circuits to 0, and
/// below which `|det|` refuses inversion.
pub const DETERMINANT_EPSILON: f64 = 1e-10;

/// Gauss-Jordan pivot magnitude below which inversion fails.
pub const PIVOT_EPSILON: f64 = 1e-12;

/// Maximum elementwise error for `A × A⁻¹ ≈ I` to count as correct.
pub const VERIFICATION_TOLERANCE: f64 = 1e-8;

/// Numerical thresholds used by the elimination routines.
///
/// The determinant gate and the Gauss-Jordan pivot gate are separate
/// values; near-singular inputs behave differently depending on which one
/// fires first.
#[derive(Deserialize, Serialize, Debug, Clone, Copy, PartialEq)]
#[serde(default)]
pub struct Tolerances {
    pub determinant_epsilon: f64,
    pub pivot_epsilon: f64,
    pub verification_tolerance: f64,
}

impl Default for Tolerances {
    fn default() -> Self {
        Self {
            determinant_epsilon: DETERMINANT_EPSILON,
            pivot_epsilon: PIVOT_EPSILON,
            verification_tolerance: VERIFICATION_TOLERANCE,
        }
    }
}
