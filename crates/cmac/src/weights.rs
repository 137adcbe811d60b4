use std::ops::Range;

use ndarray::{Array1, ArrayView1, s};

use crate::Error;

/// The weight array of a CMAC, accessed through bounds-checked windows.
///
/// Every weight starts at `1.0`. The length never changes after
/// construction; training only adds corrections to contiguous windows.
#[derive(Debug, Clone, PartialEq)]
pub struct Weights(Array1<f64>);

impl Weights {
    /// Creates `len` weights, each initialized to `1.0`.
    #[must_use]
    pub fn new(len: usize) -> Self {
        Self(Array1::ones(len))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns a read-only view of all weights.
    #[must_use]
    pub fn view(&self) -> ArrayView1<'_, f64> {
        self.0.view()
    }

    /// Returns the unweighted sum of `width` weights starting at `start`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::IndexOutOfRange`] if the window runs past the array.
    pub fn window_sum(&self, start: usize, width: usize) -> Result<f64, Error> {
        let range = self.window(start, width)?;
        Ok(self.0.slice(s![range]).sum())
    }

    /// Adds `delta` to each of the `width` weights starting at `start`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::IndexOutOfRange`] if the window runs past the array.
    /// No weight is touched in that case.
    pub fn apply_correction(
        &mut self,
        start: usize,
        width: usize,
        delta: f64,
    ) -> Result<(), Error> {
        let range = self.window(start, width)?;
        let mut window = self.0.slice_mut(s![range]);
        window += delta;
        Ok(())
    }

    fn window(&self, start: usize, width: usize) -> Result<Range<usize>, Error> {
        let len = self.len();
        match start.checked_add(width) {
            Some(end) if end <= len => Ok(start..end),
            _ => Err(Error::IndexOutOfRange { start, width, len }),
        }
    }
}
