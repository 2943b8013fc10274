use bod_core::IndicatorMatrix;
use ndarray::Array1;

use crate::Error;

/// Benchmarks one unit's weighted score against the best score any unit
/// achieves under the same weights.
///
/// Returns `dot(row[idx], weights) / best`, where `best` is the maximum of
/// `dot(r, weights)` over all rows `r`. The unit's own row participates in
/// the maximum, so the result lies in `(0, 1]` whenever `best` is positive.
///
/// # Errors
///
/// - [`Error::IndexOutOfRange`] if `idx` is not a valid unit index.
/// - [`Error::ZeroBenchmark`] if every unit scores zero under `weights`,
///   which leaves the ratio undefined.
pub fn composite_indicator(
    matrix: &IndicatorMatrix,
    idx: usize,
    weights: &Array1<f64>,
) -> Result<f64, Error> {
    let units = matrix.units();
    if idx >= units {
        return Err(Error::IndexOutOfRange { idx, units });
    }

    let best = matrix
        .rows()
        .map(|row| row.dot(weights))
        .fold(0.0_f64, f64::max);

    if best <= 0.0 {
        return Err(Error::ZeroBenchmark { idx });
    }

    Ok(matrix.row(idx).dot(weights) / best)
}
