use thiserror::Error;

/// Errors that can occur during a Benefit-of-the-Doubt run.
///
/// The engine performs no local recovery: every failure propagates to the
/// caller unmodified, and a run either fully succeeds or fully fails.
#[derive(Debug, Error, PartialEq)]
pub enum Error {
    #[error("unit index {idx} is outside the data range 0..{units}")]
    IndexOutOfRange { idx: usize, units: usize },

    #[error("optimization failed for unit {idx}: {reason}")]
    Optimization { idx: usize, reason: String },

    #[error("every unit scores zero under the weights solved for unit {idx}")]
    ZeroBenchmark { idx: usize },

    #[error("{found} weight bounds given for {expected} indicators")]
    BoundsCount { expected: usize, found: usize },

    #[error(
        "no weight vector inside the bounds can sum to one \
         (lower limits sum to {lower_sum}, upper limits to {upper_sum})"
    )]
    InfeasibleBounds { lower_sum: f64, upper_sum: f64 },
}
