use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors that can occur while building weight bounds.
#[derive(Debug, Error, PartialEq)]
pub enum Error {
    #[error("bound {index} has non-finite limits ({lower}, {upper})")]
    NonFinite {
        index: usize,
        lower: f64,
        upper: f64,
    },

    #[error("bound {index} has a negative lower limit {lower}")]
    NegativeLower { index: usize, lower: f64 },

    #[error("bound {index} is inverted: lower {lower} exceeds upper {upper}")]
    Inverted {
        index: usize,
        lower: f64,
        upper: f64,
    },
}

/// The admissible range for one indicator weight.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bound {
    pub lower: f64,
    pub upper: f64,
}

/// Per-indicator weight bounds, index-aligned with matrix columns.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeightBounds {
    bounds: Vec<Bound>,
}

impl WeightBounds {
    /// The default `(0, 1)` bound for each of `n` indicators.
    pub fn unit(n: usize) -> Self {
        Self {
            bounds: vec![
                Bound {
                    lower: 0.0,
                    upper: 1.0,
                };
                n
            ],
        }
    }

    /// Builds bounds from `(lower, upper)` pairs.
    ///
    /// # Errors
    ///
    /// Returns an error if any pair has a non-finite limit, a negative lower
    /// limit, or a lower limit above its upper limit.
    pub fn new(pairs: impl IntoIterator<Item = (f64, f64)>) -> Result<Self, Error> {
        let mut bounds = Vec::new();
        for (index, (lower, upper)) in pairs.into_iter().enumerate() {
            if !lower.is_finite() || !upper.is_finite() {
                return Err(Error::NonFinite {
                    index,
                    lower,
                    upper,
                });
            }
            if lower < 0.0 {
                return Err(Error::NegativeLower { index, lower });
            }
            if lower > upper {
                return Err(Error::Inverted {
                    index,
                    lower,
                    upper,
                });
            }
            bounds.push(Bound { lower, upper });
        }

        Ok(Self { bounds })
    }

    /// Number of bounded indicators.
    pub fn len(&self) -> usize {
        self.bounds.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bounds.is_empty()
    }

    /// The bound for one indicator, if it exists.
    pub fn get(&self, index: usize) -> Option<Bound> {
        self.bounds.get(index).copied()
    }

    /// Iterates over the bounds in indicator order.
    pub fn iter(&self) -> impl Iterator<Item = Bound> + '_ {
        self.bounds.iter().copied()
    }

    /// Sum of all lower limits. A sum above one leaves no room for weights
    /// that sum to one.
    pub fn lower_sum(&self) -> f64 {
        self.bounds.iter().map(|b| b.lower).sum()
    }

    /// Sum of all upper limits.
    pub fn upper_sum(&self) -> f64 {
        self.bounds.iter().map(|b| b.upper).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    #[test]
    fn unit_bounds_cover_the_interval() {
        let bounds = WeightBounds::unit(3);

        assert_eq!(bounds.len(), 3);
        for bound in bounds.iter() {
            assert_relative_eq!(bound.lower, 0.0);
            assert_relative_eq!(bound.upper, 1.0);
        }
    }

    #[test]
    fn accepts_valid_pairs() {
        let bounds = WeightBounds::new([(0.1, 0.5), (0.0, 1.0)]).expect("should build");

        assert_eq!(bounds.len(), 2);
        assert_relative_eq!(bounds.lower_sum(), 0.1);
        assert_relative_eq!(bounds.upper_sum(), 1.5);
        assert_relative_eq!(bounds.get(0).expect("bound exists").upper, 0.5);
    }

    #[test]
    fn rejects_negative_lower_limit() {
        let result = WeightBounds::new([(-0.1, 0.5)]);
        assert_eq!(
            result,
            Err(Error::NegativeLower {
                index: 0,
                lower: -0.1
            })
        );
    }

    #[test]
    fn rejects_inverted_pair() {
        let result = WeightBounds::new([(0.0, 1.0), (0.8, 0.2)]);
        assert!(matches!(result, Err(Error::Inverted { index: 1, .. })));
    }

    #[test]
    fn rejects_non_finite_limits() {
        let result = WeightBounds::new([(0.0, f64::NAN)]);
        assert!(matches!(result, Err(Error::NonFinite { index: 0, .. })));
    }
}
