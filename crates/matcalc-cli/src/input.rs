//! Loading operands and run configuration from disk.
use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use matcalc_engine::{Matrix, RandomSpec, Tolerances};

/// Settings for a `matcalc` invocation.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RunConfig {
    pub tolerances: Tolerances,
    /// Decimal places used when printing results.
    pub precision: usize,
    /// Largest accepted row or column count for input matrices.
    pub max_dimension: usize,
    pub random: RandomSpec,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            tolerances: Tolerances::default(),
            precision: 4,
            max_dimension: 10,
            random: RandomSpec::default(),
        }
    }
}

/// Load a run configuration from a JSON file.
pub fn load_run_config<P: AsRef<Path>>(path: P) -> Result<RunConfig> {
    let content = std::fs::read_to_string(&path)
        .with_context(|| format!("Failed to read config: {}", path.as_ref().display()))?;
    let config: RunConfig = serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse config: {}", path.as_ref().display()))?;
    Ok(config)
}

/// Load a matrix from a `.json` (nested rows) or `.csv`/`.tsv` (one row
/// per record, no header) file.
pub fn load_matrix<P: AsRef<Path>>(path: P) -> Result<Matrix> {
    let path = path.as_ref();
    let ext = path
        .extension()
        .and_then(|s| s.to_str())
        .map(|s| s.to_lowercase());

    match ext.as_deref() {
        Some("json") => {
            let content = std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read matrix: {}", path.display()))?;
            let matrix: Matrix = serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse matrix: {}", path.display()))?;
            Ok(matrix)
        }
        Some("csv") => read_delimited(path, b','),
        Some("tsv") => read_delimited(path, b'\t'),
        _ => anyhow::bail!(
            "Matrix file must have a .json, .csv or .tsv extension: {}",
            path.display()
        ),
    }
}

fn read_delimited(path: &Path, delimiter: u8) -> Result<Matrix> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .trim(csv::Trim::All)
        .delimiter(delimiter)
        .from_path(path)
        .with_context(|| format!("Failed to open matrix: {}", path.display()))?;

    let mut rows = Vec::new();
    for (i, record) in reader.records().enumerate() {
        let record =
            record.with_context(|| format!("Failed to read row {} of {}", i, path.display()))?;
        let row = record
            .iter()
            .enumerate()
            .map(|(j, field)| {
                field.parse::<f64>().with_context(|| {
                    format!(
                        "Invalid number {:?} at row {}, column {} of {}",
                        field,
                        i,
                        j,
                        path.display()
                    )
                })
            })
            .collect::<Result<Vec<f64>>>()?;
        rows.push(row);
    }

    Matrix::from_rows(rows).with_context(|| format!("Invalid matrix in {}", path.display()))
}

/// Enforce the `1..=max_dimension` bound on both dimensions.
pub fn check_dimensions(name: &str, matrix: &Matrix, max_dimension: usize) -> Result<()> {
    let (rows, cols) = matrix.shape();
    if rows > max_dimension || cols > max_dimension {
        anyhow::bail!(
            "Matrix {} is {}x{}; dimensions must be between 1x1 and {}x{}",
            name,
            rows,
            cols,
            max_dimension,
            max_dimension
        );
    }
    Ok(())
}
