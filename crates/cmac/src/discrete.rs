use cmac_core::Sample;

use crate::{Approximator, Error, Params, Weights};

/// A CMAC with hard quantization.
///
/// Each input activates exactly one window of `g` weights. The prediction is
/// the plain sum of that window, and an update spreads one correction evenly
/// across it, so inputs whose windows overlap are nudged together.
#[derive(Debug, Clone, PartialEq)]
pub struct Discrete {
    params: Params,
    weights: Weights,
}

impl Discrete {
    /// Creates a model with `num_weights` weights all set to `1.0`.
    ///
    /// # Errors
    ///
    /// Returns an error unless `0 < generalization <= num_weights`.
    pub fn new(generalization: usize, num_weights: usize) -> Result<Self, Error> {
        let params = Params::new(generalization, num_weights)?;

        Ok(Self {
            params,
            weights: Weights::new(num_weights),
        })
    }
}

impl Approximator for Discrete {
    fn params(&self) -> Params {
        self.params
    }

    fn weights(&self) -> &Weights {
        &self.weights
    }

    fn estimate(&self, _x: f64, start: usize) -> Result<f64, Error> {
        self.weights.window_sum(start, self.params.generalization())
    }

    fn correct(&mut self, sample: &Sample, start: usize, learning_rate: f64) -> Result<(), Error> {
        let g = self.params.generalization();
        let error = sample.y - self.estimate(sample.x, start)?;

        #[allow(clippy::cast_precision_loss)]
        let correction = learning_rate * error / g as f64;

        self.weights.apply_correction(start, g, correction)
    }
}
