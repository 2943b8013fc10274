use bod_core::{IndicatorMatrix, WeightBounds};
use serde::{Deserialize, Serialize};

use crate::{
    ConstraintSet, Error, benchmark::composite_indicator, optimize::solve_unit,
};

/// Solved weights and benchmarked composite indicator for one unit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UnitResult {
    /// The most favorable weights found for the unit, one per indicator.
    pub weights: Vec<f64>,
    /// The unit's composite indicator in `(0, 1]`.
    pub ci: f64,
}

/// A full Benefit-of-the-Doubt run over a normalized indicator matrix.
#[derive(Debug, Clone)]
pub struct BodProblem {
    matrix: IndicatorMatrix,
    bounds: WeightBounds,
}

impl BodProblem {
    /// Creates a problem with the default `(0, 1)` bound per indicator.
    pub fn new(matrix: IndicatorMatrix) -> Self {
        let bounds = WeightBounds::unit(matrix.indicators());
        Self { matrix, bounds }
    }

    /// Creates a problem with explicit per-indicator weight bounds.
    ///
    /// # Errors
    ///
    /// Returns [`Error::BoundsCount`] if the number of bounds does not match
    /// the number of indicator columns, and [`Error::InfeasibleBounds`] if no
    /// weight vector inside the bounds can sum to one.
    pub fn with_bounds(matrix: IndicatorMatrix, bounds: WeightBounds) -> Result<Self, Error> {
        if bounds.len() != matrix.indicators() {
            return Err(Error::BoundsCount {
                expected: matrix.indicators(),
                found: bounds.len(),
            });
        }

        let lower_sum = bounds.lower_sum();
        let upper_sum = bounds.upper_sum();
        if lower_sum > ConstraintSet::WEIGHT_TOTAL || upper_sum < ConstraintSet::WEIGHT_TOTAL {
            return Err(Error::InfeasibleBounds {
                lower_sum,
                upper_sum,
            });
        }

        Ok(Self { matrix, bounds })
    }

    pub fn matrix(&self) -> &IndicatorMatrix {
        &self.matrix
    }

    pub fn bounds(&self) -> &WeightBounds {
        &self.bounds
    }

    /// Solves every unit in row order and benchmarks each result.
    ///
    /// The constraint set is built once and shared read-only across all
    /// solves. The run is fail-fast: the first unit whose solve or benchmark
    /// fails aborts the whole run, and no partial results are returned.
    ///
    /// # Errors
    ///
    /// Returns the first [`Error`] raised by a per-unit solve or benchmark.
    pub fn run(&self) -> Result<Vec<UnitResult>, Error> {
        let constraints = ConstraintSet::from_matrix(&self.matrix);

        let mut results = Vec::with_capacity(self.matrix.units());
        for idx in 0..self.matrix.units() {
            let solved = solve_unit(&self.matrix, &constraints, &self.bounds, idx)?;
            let ci = composite_indicator(&self.matrix, idx, &solved.weights)?;
            results.push(UnitResult {
                weights: solved.weights.to_vec(),
                ci,
            });
        }

        Ok(results)
    }
}
