use bod_core::IndicatorMatrix;
use ndarray::{Array2, ArrayView1};

/// The constraint set shared by every per-unit solve in a run.
///
/// One ceiling per unit caps `dot(row, w)` at [`ConstraintSet::SCORE_CEILING`],
/// and every candidate weight vector must sum to
/// [`ConstraintSet::WEIGHT_TOTAL`]. The ceilings are stored as plain
/// coefficient rows indexed by unit, so each descriptor refers to its own
/// row. The set is built once per run and shared read-only by every solve;
/// nothing mutates it afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct ConstraintSet {
    ceilings: Array2<f64>,
}

impl ConstraintSet {
    /// Upper limit on any unit's weighted score. Keeping every unit at or
    /// below this ceiling is what bounds the benchmarked ratio by one.
    pub const SCORE_CEILING: f64 = 1.0;

    /// Required sum of the weight components.
    pub const WEIGHT_TOTAL: f64 = 1.0;

    /// Builds the shared constraint set from the normalized matrix.
    pub fn from_matrix(matrix: &IndicatorMatrix) -> Self {
        let mut ceilings = Array2::zeros((matrix.units(), matrix.indicators()));
        for (mut target, row) in ceilings.rows_mut().into_iter().zip(matrix.rows()) {
            target.assign(&row);
        }
        Self { ceilings }
    }

    /// Number of ceiling constraints, one per unit.
    pub fn len(&self) -> usize {
        self.ceilings.nrows()
    }

    pub fn is_empty(&self) -> bool {
        self.ceilings.nrows() == 0
    }

    /// Coefficient rows of the ceiling constraints, in unit order.
    pub fn ceilings(&self) -> impl Iterator<Item = ArrayView1<'_, f64>> + '_ {
        self.ceilings.rows().into_iter()
    }
}
