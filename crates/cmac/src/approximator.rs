use cmac_core::Sample;

use crate::{Error, Indexer, Params, Weights};

/// Behavior shared by the CMAC variants.
///
/// An approximator predicts from, and writes corrections into, windows of
/// its weight array. Both operations take a precomputed association index
/// (`start`) so callers can build the association table once and reuse it.
///
/// The training loop and prediction are free functions generic over this
/// trait: see [`train`](crate::train()) and [`predict`](crate::predict).
pub trait Approximator {
    /// Returns the fixed array geometry.
    fn params(&self) -> Params;

    /// Returns the current weights.
    fn weights(&self) -> &Weights;

    /// Predicts the output for input `x` whose association index is `start`.
    ///
    /// # Errors
    ///
    /// Returns an error if a window or grid lookup falls outside its array,
    /// or if the prediction is otherwise undefined for `x`.
    fn estimate(&self, x: f64, start: usize) -> Result<f64, Error>;

    /// Nudges the active weights toward `sample.y`.
    ///
    /// # Errors
    ///
    /// Returns the same errors as [`estimate`](Self::estimate).
    fn correct(&mut self, sample: &Sample, start: usize, learning_rate: f64) -> Result<(), Error>;

    /// Returns the indexer matching this model's geometry.
    fn indexer(&self) -> Indexer {
        Indexer::new(self.params().associated_len())
    }
}
