use crate::ParamError;

/// Fixed geometry of a CMAC weight array.
///
/// A model owns `num_weights` weights and activates a window of
/// `generalization` consecutive weights per input. The number of distinct
/// window positions, plus padding, is `num_weights + 1 - generalization`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Params {
    generalization: usize,
    num_weights: usize,
}

impl Params {
    /// Creates validated parameters.
    ///
    /// # Errors
    ///
    /// Returns an error unless `0 < generalization <= num_weights`.
    pub fn new(generalization: usize, num_weights: usize) -> Result<Self, ParamError> {
        if generalization == 0 {
            return Err(ParamError::ZeroGeneralization);
        }
        if generalization > num_weights {
            return Err(ParamError::GeneralizationTooLarge {
                generalization,
                num_weights,
            });
        }

        Ok(Self {
            generalization,
            num_weights,
        })
    }

    /// Returns the window width `g`.
    #[must_use]
    pub fn generalization(&self) -> usize {
        self.generalization
    }

    /// Returns the weight array length `w`.
    #[must_use]
    pub fn num_weights(&self) -> usize {
        self.num_weights
    }

    /// Returns the associated vector size, `w + 1 - g`.
    #[must_use]
    pub fn associated_len(&self) -> usize {
        self.num_weights + 1 - self.generalization
    }
}
