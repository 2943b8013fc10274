//! Data model and normalization for Benefit-of-the-Doubt composite
//! indicators.
//!
//! The crate holds everything the optimization engine consumes: the
//! normalized [`IndicatorMatrix`], per-indicator [`WeightBounds`], and the
//! min-max normalization that maps raw indicator columns into `[0, 1]`.

pub mod bounds;
pub mod matrix;
pub mod normalize;

pub use bounds::{Bound, WeightBounds};
pub use matrix::IndicatorMatrix;
pub use normalize::{Orientation, normalize, standardize};
