//! Random example matrices.
//!
//! Cells are drawn uniformly from `[min, max]` and rounded to a fixed
//! number of decimals, which keeps generated examples readable when they
//! are printed back to a user.

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::error::MatrixError;
use crate::math::Matrix;

/// Value range and rounding for generated cells.
#[derive(Deserialize, Serialize, Debug, Clone, Copy, PartialEq)]
#[serde(default)]
pub struct RandomSpec {
    pub min: f64,
    pub max: f64,
    pub decimals: u32,
}

impl Default for RandomSpec {
    fn default() -> Self {
        Self {
            min: -9.0,
            max: 9.0,
            decimals: 1,
        }
    }
}

/// Generate a `rows × cols` matrix of rounded uniform values.
pub fn random_matrix<R: Rng + ?Sized>(
    rng: &mut R,
    rows: usize,
    cols: usize,
    spec: &RandomSpec,
) -> Result<Matrix, MatrixError> {
    if rows == 0 || cols == 0 {
        return Err(MatrixError::Empty);
    }
    // The width must be finite too, or the uniform sampler refuses the range.
    if !spec.min.is_finite()
        || !spec.max.is_finite()
        || !(spec.max - spec.min).is_finite()
        || spec.min > spec.max
    {
        return Err(MatrixError::InvalidRange {
            min: spec.min,
            max: spec.max,
        });
    }

    let scale = 10f64.powi(spec.decimals.min(15) as i32);
    let data = (0..rows * cols)
        .map(|_| {
            let v = rng.gen_range(spec.min..=spec.max);
            ((v * scale).round() / scale).clamp(spec.min, spec.max)
        })
        .collect();

    Matrix::from_shape_vec((rows, cols), data)
}
