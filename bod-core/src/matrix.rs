use ndarray::{Array1, Array2, ArrayView1};
use thiserror::Error;

use crate::normalize::{self, Orientation, normalize};

/// Errors that can occur while building an indicator matrix.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum Error {
    #[error("indicator matrix has no data")]
    Empty,

    #[error("row {row} has {len} values, expected {expected}")]
    RaggedRow {
        row: usize,
        len: usize,
        expected: usize,
    },

    #[error("column {column} has {len} values, expected {expected}")]
    RaggedColumn {
        column: usize,
        len: usize,
        expected: usize,
    },

    #[error("{orientations} orientations given for {columns} columns")]
    OrientationCount { orientations: usize, columns: usize },

    #[error(transparent)]
    Normalize(#[from] normalize::Error),
}

/// A read-only `units x indicators` matrix of normalized values in `[0, 1]`,
/// one row per decision-making unit.
///
/// The matrix is never mutated after construction; every per-unit solve
/// reads it through shared views.
#[derive(Debug, Clone, PartialEq)]
pub struct IndicatorMatrix {
    data: Array2<f64>,
}

impl IndicatorMatrix {
    /// Builds a matrix from unit rows.
    ///
    /// # Errors
    ///
    /// Returns an error if `rows` is empty, the first row is empty, or any
    /// row differs in length from the first.
    pub fn from_rows(rows: &[Vec<f64>]) -> Result<Self, Error> {
        let expected = rows.first().map(Vec::len).ok_or(Error::Empty)?;
        if expected == 0 {
            return Err(Error::Empty);
        }

        let mut data = Array2::zeros((rows.len(), expected));
        for (i, row) in rows.iter().enumerate() {
            if row.len() != expected {
                return Err(Error::RaggedRow {
                    row: i,
                    len: row.len(),
                    expected,
                });
            }
            for (j, &value) in row.iter().enumerate() {
                data[(i, j)] = value;
            }
        }

        Ok(Self { data })
    }

    /// Wraps an existing array of normalized values.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Empty`] if the array has zero rows or zero columns.
    pub fn from_array(data: Array2<f64>) -> Result<Self, Error> {
        if data.nrows() == 0 || data.ncols() == 0 {
            return Err(Error::Empty);
        }
        Ok(Self { data })
    }

    /// Normalizes each raw indicator column with its orientation and
    /// assembles the matrix.
    ///
    /// # Errors
    ///
    /// Returns an error if there are no columns, the orientation count does
    /// not match the column count, any column differs in length from the
    /// first, or a column fails to normalize.
    pub fn from_raw_columns(
        columns: &[Vec<f64>],
        orientations: &[Orientation],
    ) -> Result<Self, Error> {
        let units = columns.first().map(Vec::len).ok_or(Error::Empty)?;
        if units == 0 {
            return Err(Error::Empty);
        }
        if orientations.len() != columns.len() {
            return Err(Error::OrientationCount {
                orientations: orientations.len(),
                columns: columns.len(),
            });
        }

        let mut data = Array2::zeros((units, columns.len()));
        for (j, (column, &orientation)) in columns.iter().zip(orientations).enumerate() {
            if column.len() != units {
                return Err(Error::RaggedColumn {
                    column: j,
                    len: column.len(),
                    expected: units,
                });
            }
            let scaled = normalize(column, orientation)?;
            for (i, value) in scaled.into_iter().enumerate() {
                data[(i, j)] = value;
            }
        }

        Ok(Self { data })
    }

    /// Number of decision-making units (rows).
    pub fn units(&self) -> usize {
        self.data.nrows()
    }

    /// Number of indicators (columns).
    pub fn indicators(&self) -> usize {
        self.data.ncols()
    }

    /// One unit's indicator values.
    ///
    /// # Panics
    ///
    /// Panics if `idx` is out of range; the engine checks indices before
    /// calling in.
    pub fn row(&self, idx: usize) -> ArrayView1<'_, f64> {
        self.data.row(idx)
    }

    /// Iterates over unit rows in order.
    pub fn rows(&self) -> impl Iterator<Item = ArrayView1<'_, f64>> + '_ {
        self.data.rows().into_iter()
    }

    /// Weighted-sum score of one unit under the given weights.
    ///
    /// # Panics
    ///
    /// Panics if `idx` is out of range or `weights` has the wrong length.
    pub fn score(&self, idx: usize, weights: &Array1<f64>) -> f64 {
        self.data.row(idx).dot(weights)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use ndarray::array;

    #[test]
    fn builds_from_rows() {
        let matrix = IndicatorMatrix::from_rows(&[vec![1.0, 0.2], vec![0.3, 1.0]])
            .expect("should build");

        assert_eq!(matrix.units(), 2);
        assert_eq!(matrix.indicators(), 2);
        assert_relative_eq!(matrix.row(1)[0], 0.3);
    }

    #[test]
    fn rejects_empty_input() {
        assert_eq!(IndicatorMatrix::from_rows(&[]), Err(Error::Empty));
        assert_eq!(IndicatorMatrix::from_rows(&[vec![]]), Err(Error::Empty));
    }

    #[test]
    fn rejects_ragged_rows() {
        let result = IndicatorMatrix::from_rows(&[vec![1.0, 0.2], vec![0.3]]);

        assert_eq!(
            result,
            Err(Error::RaggedRow {
                row: 1,
                len: 1,
                expected: 2
            })
        );
    }

    #[test]
    fn normalizes_raw_columns() {
        let columns = [vec![2.0, 4.0, 10.0], vec![1.0, 3.0, 2.0]];
        let matrix =
            IndicatorMatrix::from_raw_columns(&columns, &[Orientation::Min, Orientation::Max])
                .expect("should build");

        // First column min-oriented, second max-oriented.
        assert_relative_eq!(matrix.row(0)[0], 0.0);
        assert_relative_eq!(matrix.row(2)[0], 1.0);
        assert_relative_eq!(matrix.row(0)[1], 1.0);
        assert_relative_eq!(matrix.row(1)[1], 0.0);
    }

    #[test]
    fn rejects_orientation_count_mismatch() {
        let result = IndicatorMatrix::from_raw_columns(&[vec![1.0, 2.0]], &[]);

        assert_eq!(
            result,
            Err(Error::OrientationCount {
                orientations: 0,
                columns: 1
            })
        );
    }

    #[test]
    fn rejects_ragged_columns() {
        let columns = [vec![1.0, 2.0], vec![1.0]];
        let result =
            IndicatorMatrix::from_raw_columns(&columns, &[Orientation::Min, Orientation::Min]);

        assert_eq!(
            result,
            Err(Error::RaggedColumn {
                column: 1,
                len: 1,
                expected: 2
            })
        );
    }

    #[test]
    fn scores_with_a_dot_product() {
        let matrix = IndicatorMatrix::from_array(array![[0.5, 0.5], [1.0, 0.0]])
            .expect("should build");
        let weights = array![0.4, 0.6];

        assert_relative_eq!(matrix.score(0, &weights), 0.5);
        assert_relative_eq!(matrix.score(1, &weights), 0.4);
    }
}
