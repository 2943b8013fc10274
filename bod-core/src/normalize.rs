use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors that can occur while normalizing indicator data.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum Error {
    #[error("input sequence is empty")]
    EmptyInput,

    #[error("sequences differ in length: {left} vs {right}")]
    LengthMismatch { left: usize, right: usize },
}

/// Direction of a min-max rescale.
///
/// `Min` maps larger raw values to larger normalized values. `Max` inverts
/// the scale, for indicators that are bad when high.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Orientation {
    #[default]
    Min,
    Max,
}

impl Orientation {
    /// Picks an indicator's orientation from its correlation with a control
    /// variable: a positive Pearson correlation selects [`Orientation::Min`],
    /// anything else (including an undefined correlation when either column
    /// is constant) selects [`Orientation::Max`].
    ///
    /// # Errors
    ///
    /// Returns an error if `indicator` is empty or the slices differ in
    /// length.
    pub fn from_control(indicator: &[f64], control: &[f64]) -> Result<Self, Error> {
        if indicator.is_empty() {
            return Err(Error::EmptyInput);
        }
        if indicator.len() != control.len() {
            return Err(Error::LengthMismatch {
                left: indicator.len(),
                right: control.len(),
            });
        }

        if pearson(indicator, control) > 0.0 {
            Ok(Self::Min)
        } else {
            Ok(Self::Max)
        }
    }
}

/// Rescales the values into `[0, 1]` using the min-max method.
///
/// A constant column has no discriminatory power, so every value maps to the
/// neutral midpoint `0.5` rather than an arbitrary 0/1 assignment.
///
/// # Errors
///
/// Returns [`Error::EmptyInput`] if `values` is empty.
pub fn normalize(values: &[f64], orientation: Orientation) -> Result<Vec<f64>, Error> {
    if values.is_empty() {
        return Err(Error::EmptyInput);
    }

    let minimum = values.iter().copied().fold(f64::INFINITY, f64::min);
    let maximum = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    let range = maximum - minimum;

    #[allow(clippy::float_cmp)]
    if range == 0.0 {
        return Ok(vec![0.5; values.len()]);
    }

    let scaled = match orientation {
        Orientation::Min => values.iter().map(|v| (v - minimum) / range).collect(),
        Orientation::Max => values.iter().map(|v| (maximum - v) / range).collect(),
    };

    Ok(scaled)
}

/// Standardizes the values to z-scores using the population standard
/// deviation. A constant column maps to all zeros.
///
/// # Errors
///
/// Returns [`Error::EmptyInput`] if `values` is empty.
pub fn standardize(values: &[f64]) -> Result<Vec<f64>, Error> {
    if values.is_empty() {
        return Err(Error::EmptyInput);
    }

    let count = values.len() as f64;
    let mean = values.iter().sum::<f64>() / count;
    let variance = values.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / count;
    let deviation = variance.sqrt();

    #[allow(clippy::float_cmp)]
    if deviation == 0.0 {
        return Ok(vec![0.0; values.len()]);
    }

    Ok(values.iter().map(|v| (v - mean) / deviation).collect())
}

/// Pearson correlation coefficient. NaN when either input is constant.
fn pearson(x: &[f64], y: &[f64]) -> f64 {
    let count = x.len() as f64;
    let mean_x = x.iter().sum::<f64>() / count;
    let mean_y = y.iter().sum::<f64>() / count;

    let mut covariance = 0.0;
    let mut var_x = 0.0;
    let mut var_y = 0.0;
    for (a, b) in x.iter().zip(y) {
        covariance += (a - mean_x) * (b - mean_y);
        var_x += (a - mean_x).powi(2);
        var_y += (b - mean_y).powi(2);
    }

    covariance / (var_x.sqrt() * var_y.sqrt())
}
