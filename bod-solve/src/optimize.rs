use bod_core::{IndicatorMatrix, WeightBounds};
use good_lp::{Expression, ProblemVariables, Solution, SolverModel, Variable, constraint, microlp, variable};
use ndarray::{Array1, ArrayView1};

use crate::{ConstraintSet, Error};

/// The outcome of one per-unit solve.
#[derive(Debug, Clone)]
pub struct UnitSolve {
    /// The most favorable weights found for the unit, one per indicator.
    pub weights: Array1<f64>,
    /// The unit's own weighted score under those weights.
    pub best_score: f64,
}

/// Finds the most favorable feasible weights for unit `idx`.
///
/// Maximizes `dot(row[idx], w)` subject to every score ceiling in
/// `constraints`, the sum-to-one equality, and the per-indicator `bounds`.
/// The objective and all constraints are linear in `w`, so the solve is a
/// linear program; where the optimum is degenerate, the vertex the solver
/// reports is solver-dependent. The call is a pure function of its inputs:
/// nothing is shared or mutated across units.
///
/// # Errors
///
/// - [`Error::IndexOutOfRange`] if `idx` is not a valid unit index.
/// - [`Error::Optimization`] when the solver does not report success
///   (infeasible or unbounded problem, or an internal solver failure); the
///   solver's message is preserved verbatim.
pub fn solve_unit(
    matrix: &IndicatorMatrix,
    constraints: &ConstraintSet,
    bounds: &WeightBounds,
    idx: usize,
) -> Result<UnitSolve, Error> {
    let units = matrix.units();
    if idx >= units {
        return Err(Error::IndexOutOfRange { idx, units });
    }

    let mut problem = ProblemVariables::new();
    let vars: Vec<Variable> = bounds
        .iter()
        .map(|bound| problem.add(variable().min(bound.lower).max(bound.upper)))
        .collect();

    let objective = weighted_sum(matrix.row(idx), &vars);
    let mut model = problem.maximise(objective).using(microlp);

    for ceiling in constraints.ceilings() {
        model = model.with(constraint::leq(
            weighted_sum(ceiling, &vars),
            ConstraintSet::SCORE_CEILING,
        ));
    }
    let total: Expression = vars.iter().copied().map(Expression::from).sum();
    model = model.with(constraint::eq(total, ConstraintSet::WEIGHT_TOTAL));

    let solution = model.solve().map_err(|err| Error::Optimization {
        idx,
        reason: err.to_string(),
    })?;

    let weights = Array1::from_iter(vars.iter().map(|&v| solution.value(v)));
    let best_score = matrix.row(idx).dot(&weights);

    Ok(UnitSolve { weights, best_score })
}

/// The linear expression `dot(coefficients, vars)`.
fn weighted_sum(coefficients: ArrayView1<'_, f64>, vars: &[Variable]) -> Expression {
    coefficients.iter().zip(vars).map(|(&c, &v)| v * c).sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    fn fixture() -> (IndicatorMatrix, ConstraintSet) {
        let matrix = IndicatorMatrix::from_rows(&[vec![1.0, 0.2], vec![0.3, 1.0], vec![0.5, 0.5]])
            .expect("valid matrix");
        let constraints = ConstraintSet::from_matrix(&matrix);
        (matrix, constraints)
    }

    #[test]
    fn dominant_unit_reaches_the_ceiling() {
        let (matrix, constraints) = fixture();
        let bounds = WeightBounds::unit(2);

        let solved = solve_unit(&matrix, &constraints, &bounds, 0).expect("should solve");

        // Unit 0 holds the column-0 maximum, so full weight on that column
        // is feasible and optimal.
        assert_relative_eq!(solved.best_score, 1.0, epsilon = 1e-6);
        assert_relative_eq!(solved.weights[0], 1.0, epsilon = 1e-6);
        assert_relative_eq!(solved.weights[1], 0.0, epsilon = 1e-6);
    }

    #[test]
    fn weights_respect_bounds_and_sum_to_one() {
        let (matrix, constraints) = fixture();
        let bounds = WeightBounds::new([(0.2, 0.8), (0.2, 0.8)]).expect("valid bounds");

        for idx in 0..matrix.units() {
            let solved = solve_unit(&matrix, &constraints, &bounds, idx).expect("should solve");

            assert_relative_eq!(solved.weights.sum(), 1.0, epsilon = 1e-6);
            for (weight, bound) in solved.weights.iter().zip(bounds.iter()) {
                assert!(*weight >= bound.lower - 1e-6);
                assert!(*weight <= bound.upper + 1e-6);
            }
        }
    }

    #[test]
    fn every_ceiling_holds_at_the_optimum() {
        let (matrix, constraints) = fixture();
        let bounds = WeightBounds::unit(2);

        for idx in 0..matrix.units() {
            let solved = solve_unit(&matrix, &constraints, &bounds, idx).expect("should solve");
            for row in matrix.rows() {
                assert!(row.dot(&solved.weights) <= ConstraintSet::SCORE_CEILING + 1e-6);
            }
        }
    }

    #[test]
    fn out_of_range_index_is_rejected() {
        let (matrix, constraints) = fixture();
        let bounds = WeightBounds::unit(2);

        let result = solve_unit(&matrix, &constraints, &bounds, 3);

        assert_eq!(result.unwrap_err(), Error::IndexOutOfRange { idx: 3, units: 3 });
    }

    #[test]
    fn infeasible_bounds_surface_the_solver_message() {
        let (matrix, constraints) = fixture();
        // Upper limits sum to 0.6, so no weight vector can reach one.
        let bounds = WeightBounds::new([(0.0, 0.3), (0.0, 0.3)]).expect("valid bounds");

        let result = solve_unit(&matrix, &constraints, &bounds, 0);

        assert!(matches!(
            result,
            Err(Error::Optimization { idx: 0, .. })
        ));
    }
}
