use thiserror::Error;

/// Configuration for the training loop.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Config {
    epochs: usize,
    learning_rate: f64,
    convergence_threshold: f64,
}

/// Errors that can occur when validating a training config.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    #[error("learning_rate must be finite")]
    LearningRate,

    #[error("convergence_threshold must be finite and non-negative")]
    ConvergenceThreshold,
}

impl Default for Config {
    fn default() -> Self {
        // Known-good values, unwrap is safe
        Self::new(2000, 0.01, 1e-11).unwrap()
    }
}

impl Config {
    /// Creates a new config with a validated learning rate and threshold.
    ///
    /// Training makes up to `epochs + 1` passes over the data.
    ///
    /// # Errors
    ///
    /// Returns an error if the learning rate is non-finite, or if the threshold
    /// is negative or non-finite.
    pub fn new(
        epochs: usize,
        learning_rate: f64,
        convergence_threshold: f64,
    ) -> Result<Self, ConfigError> {
        if !learning_rate.is_finite() {
            return Err(ConfigError::LearningRate);
        }
        if !convergence_threshold.is_finite() || convergence_threshold < 0.0 {
            return Err(ConfigError::ConvergenceThreshold);
        }

        Ok(Self {
            epochs,
            learning_rate,
            convergence_threshold,
        })
    }

    /// Returns the epoch budget.
    #[must_use]
    pub fn epochs(&self) -> usize {
        self.epochs
    }

    #[must_use]
    pub fn learning_rate(&self) -> f64 {
        self.learning_rate
    }

    /// Returns the smallest epoch-to-epoch loss change that keeps training going.
    #[must_use]
    pub fn convergence_threshold(&self) -> f64 {
        self.convergence_threshold
    }
}
