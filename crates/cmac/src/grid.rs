use ndarray::{Array1, ArrayView1};

use crate::{Error, ParamError};

/// Evenly spaced quantization centers used by the continuous variant.
///
/// The grid has one center per association position and always spans
/// `[0, period]`, whatever domain the samples come from. Center `i` is
/// `i * period / (len - 1)`.
#[derive(Debug, Clone, PartialEq)]
pub struct ContinuousGrid {
    centers: Array1<f64>,
    period: f64,
}

impl ContinuousGrid {
    /// One full turn, the period the grid spans unless configured otherwise.
    pub const FULL_TURN: f64 = std::f64::consts::TAU;

    /// Builds a grid of `len` centers over `[0, period]`.
    ///
    /// # Errors
    ///
    /// Returns an error if `period` is not finite and positive.
    pub fn new(len: usize, period: f64) -> Result<Self, ParamError> {
        if !period.is_finite() || period <= 0.0 {
            return Err(ParamError::Period(period));
        }

        Ok(Self {
            centers: Array1::linspace(0.0, period, len),
            period,
        })
    }

    #[must_use]
    pub fn period(&self) -> f64 {
        self.period
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.centers.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.centers.is_empty()
    }

    #[must_use]
    pub fn centers(&self) -> ArrayView1<'_, f64> {
        self.centers.view()
    }

    /// Returns the center at `index`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::IndexOutOfRange`] if there is no such center.
    pub fn center(&self, index: usize) -> Result<f64, Error> {
        self.centers
            .get(index)
            .copied()
            .ok_or(Error::IndexOutOfRange {
                start: index,
                width: 1,
                len: self.len(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    #[test]
    fn spans_one_full_turn() {
        let grid = ContinuousGrid::new(5, ContinuousGrid::FULL_TURN).unwrap();

        assert_eq!(grid.len(), 5);
        assert_relative_eq!(grid.center(0).unwrap(), 0.0);
        assert_relative_eq!(grid.center(2).unwrap(), std::f64::consts::PI);
        assert_relative_eq!(grid.center(4).unwrap(), std::f64::consts::TAU);
    }

    #[test]
    fn spacing_is_uniform() {
        let grid = ContinuousGrid::new(34, 3.0).unwrap();
        let step = 3.0 / 33.0;

        for (i, window) in grid.centers().windows(2).into_iter().enumerate() {
            assert_relative_eq!(window[1] - window[0], step, epsilon = 1e-12);
            assert_relative_eq!(grid.center(i).unwrap(), step * i as f64, epsilon = 1e-12);
        }
    }

    #[test]
    fn missing_center_is_out_of_range() {
        let grid = ContinuousGrid::new(4, 1.0).unwrap();

        assert_eq!(
            grid.center(4),
            Err(Error::IndexOutOfRange {
                start: 4,
                width: 1,
                len: 4,
            })
        );
    }

    #[test]
    fn rejects_bad_periods() {
        assert_eq!(ContinuousGrid::new(4, 0.0), Err(ParamError::Period(0.0)));
        assert!(ContinuousGrid::new(4, f64::INFINITY).is_err());
        assert!(ContinuousGrid::new(4, -1.0).is_err());
    }
}
