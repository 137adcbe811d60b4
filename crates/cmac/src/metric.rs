//! Aggregate accuracy over a dataset.
//!
//! The error is the square root of the summed squared residuals divided by
//! the sample count:
//!
//! ```text
//! error    = sqrt(Σ (actual.y - predicted.y)²) / n
//! accuracy = 1 - |error|
//! ```
//!
//! Note the root is taken before dividing by `n`, so this is not an RMS error.

use cmac_core::Sample;

/// Returns `sqrt(Σ (actual.y - predicted.y)²) / n` over paired samples.
///
/// `n` is the length of `actual`; both slices are expected to line up.
#[must_use]
pub fn error(actual: &[Sample], predicted: &[Sample]) -> f64 {
    debug_assert_eq!(actual.len(), predicted.len());

    let sum_sq: f64 = actual
        .iter()
        .zip(predicted)
        .map(|(a, p)| (a.y - p.y).powi(2))
        .sum();

    #[allow(clippy::cast_precision_loss)]
    let n = actual.len() as f64;

    sum_sq.sqrt() / n
}

/// Returns `1 - |error(actual, predicted)|`.
#[must_use]
pub fn accuracy(actual: &[Sample], predicted: &[Sample]) -> f64 {
    1.0 - error(actual, predicted).abs()
}
