//! Benefit-of-the-Doubt optimization engine.
//!
//! Each decision-making unit is scored with the most favorable weight vector
//! available to it: the per-unit solve maximizes the unit's weighted score
//! subject to shared fairness constraints (per-indicator weight bounds,
//! weights summing to one, no unit scoring above a common ceiling). The
//! benchmarker then divides the unit's score by the best score any unit
//! achieves under the same weights, yielding a composite indicator in
//! `(0, 1]`.

pub mod benchmark;
pub mod constraint;
mod error;
pub mod optimize;
pub mod run;

pub use benchmark::composite_indicator;
pub use constraint::ConstraintSet;
pub use error::Error;
pub use optimize::{UnitSolve, solve_unit};
pub use run::{BodProblem, UnitResult};
