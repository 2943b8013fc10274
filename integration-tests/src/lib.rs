//! Shared fixtures for the end-to-end Benefit-of-the-Doubt tests.

use bod_core::IndicatorMatrix;

/// Three units over two indicators, where the first two units each dominate
/// one column and the third trails in both.
pub fn spotlight_matrix() -> IndicatorMatrix {
    IndicatorMatrix::from_rows(&[vec![1.0, 0.2], vec![0.3, 1.0], vec![0.5, 0.5]])
        .expect("fixture matrix is rectangular and non-empty")
}

/// Four units over three indicators, with a distinct column leader for each
/// of the three columns and one fully dominated unit.
pub fn column_leaders_matrix() -> IndicatorMatrix {
    IndicatorMatrix::from_rows(&[
        vec![1.0, 0.1, 0.3],
        vec![0.2, 1.0, 0.4],
        vec![0.6, 0.5, 1.0],
        vec![0.4, 0.3, 0.2],
    ])
    .expect("fixture matrix is rectangular and non-empty")
}
