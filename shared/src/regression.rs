//! Ordinary least squares with intercept
//!
//! The fit centres features and target, then solves the normal equations of
//! the centred problem. A feature column with no spread contributes nothing
//! to the centred system and is given a weight of zero, which is the
//! minimum-norm least-squares answer for that column.

use serde::Serialize;

use crate::error::{AdvisoryError, AdvisoryResult};

/// Relative spread below which a column is treated as constant
const VARIANCE_TOLERANCE: f64 = 1e-12;

/// A fitted linear model `y = w · x + b` over `N` features
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct LinearModel<const N: usize> {
    #[serde(with = "array_as_slice")]
    pub weights: [f64; N],
    pub intercept: f64,
}

impl<const N: usize> LinearModel<N> {
    /// Fit the model to training rows in closed form
    pub fn fit(features: &[[f64; N]], targets: &[f64]) -> AdvisoryResult<Self> {
        if features.is_empty() {
            return Err(AdvisoryError::ComputationFailure(
                "cannot fit a regression without training rows".to_string(),
            ));
        }
        if features.len() != targets.len() {
            return Err(AdvisoryError::ComputationFailure(format!(
                "regression has {} feature rows but {} targets",
                features.len(),
                targets.len()
            )));
        }

        let n = features.len() as f64;
        let mut x_mean = [0.0; N];
        for row in features {
            for (mean, value) in x_mean.iter_mut().zip(row) {
                *mean += value;
            }
        }
        for mean in x_mean.iter_mut() {
            *mean /= n;
        }
        let y_mean = targets.iter().sum::<f64>() / n;

        let centred = |row: &[f64; N], j: usize| row[j] - x_mean[j];

        let active: Vec<usize> = (0..N)
            .filter(|&j| {
                let spread: f64 = features.iter().map(|row| centred(row, j).powi(2)).sum();
                let scale = 1.0 + x_mean[j].abs();
                spread > VARIANCE_TOLERANCE * scale * scale * n
            })
            .collect();

        // Augmented normal equations over the non-constant columns
        let k = active.len();
        let mut system = vec![vec![0.0; k + 1]; k];
        for (p, &jp) in active.iter().enumerate() {
            for (q, &jq) in active.iter().enumerate() {
                system[p][q] = features
                    .iter()
                    .map(|row| centred(row, jp) * centred(row, jq))
                    .sum();
            }
            system[p][k] = features
                .iter()
                .zip(targets)
                .map(|(row, y)| centred(row, jp) * (y - y_mean))
                .sum();
        }

        let solution = solve_augmented(system)?;

        let mut weights = [0.0; N];
        for (&j, w) in active.iter().zip(solution) {
            weights[j] = w;
        }
        let intercept = y_mean
            - weights
                .iter()
                .zip(&x_mean)
                .map(|(w, mean)| w * mean)
                .sum::<f64>();

        if !intercept.is_finite() || weights.iter().any(|w| !w.is_finite()) {
            return Err(AdvisoryError::ComputationFailure(
                "regression produced non-finite coefficients".to_string(),
            ));
        }

        Ok(Self { weights, intercept })
    }

    pub fn predict(&self, features: &[f64; N]) -> f64 {
        self.intercept
            + self
                .weights
                .iter()
                .zip(features)
                .map(|(w, x)| w * x)
                .sum::<f64>()
    }

    /// Root-mean-squared residual over a data set
    pub fn rmse(&self, features: &[[f64; N]], targets: &[f64]) -> f64 {
        if features.is_empty() {
            return 0.0;
        }
        let squared: f64 = features
            .iter()
            .zip(targets)
            .map(|(row, y)| (y - self.predict(row)).powi(2))
            .sum();
        (squared / features.len() as f64).sqrt()
    }
}

/// Gaussian elimination with partial pivoting on an augmented `k × (k+1)` matrix
fn solve_augmented(mut system: Vec<Vec<f64>>) -> AdvisoryResult<Vec<f64>> {
    let k = system.len();
    let magnitude = system
        .iter()
        .flat_map(|row| row.iter().take(k))
        .fold(0.0_f64, |acc, v| acc.max(v.abs()));
    let tolerance = f64::EPSILON * magnitude * k.max(1) as f64;

    for col in 0..k {
        let pivot = (col..k)
            .max_by(|&a, &b| system[a][col].abs().total_cmp(&system[b][col].abs()))
            .unwrap_or(col);
        if system[pivot][col].abs() <= tolerance {
            return Err(AdvisoryError::ComputationFailure(
                "regression features are collinear".to_string(),
            ));
        }
        system.swap(col, pivot);

        let pivot_row = system[col].clone();
        for row in system.iter_mut().skip(col + 1) {
            let factor = row[col] / pivot_row[col];
            for (value, pivot_value) in row.iter_mut().zip(&pivot_row).skip(col) {
                *value -= factor * pivot_value;
            }
        }
    }

    let mut solution = vec![0.0; k];
    for row in (0..k).rev() {
        let tail: f64 = (row + 1..k).map(|c| system[row][c] * solution[c]).sum();
        solution[row] = (system[row][k] - tail) / system[row][row];
    }
    Ok(solution)
}

mod array_as_slice {
    use serde::Serializer;

    pub fn serialize<S: Serializer, const N: usize>(
        values: &[f64; N],
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(values.iter())
    }
}
