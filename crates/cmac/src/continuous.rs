use cmac_core::Sample;

use crate::{Approximator, ContinuousGrid, Error, Params, Weights};

/// A CMAC that interpolates between two neighbouring windows.
///
/// An input activates the window at its association index and the window one
/// position to the right. The prediction blends the two window sums by the
/// input's distance to the matching grid centers. Near the right edge the
/// second window is clamped onto the first, which reduces to the discrete
/// behavior there.
///
/// Updates add the same unscaled correction to both windows; only the
/// prediction is distance weighted.
#[derive(Debug, Clone, PartialEq)]
pub struct Continuous {
    params: Params,
    weights: Weights,
    grid: ContinuousGrid,
}

/// Window pair and blend factors for one input.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Interpolation {
    /// Start of the left window (the association index).
    pub start: usize,

    /// Start of the right window; equal to `start` at the right edge.
    pub next: usize,

    /// Share of the prediction taken from the left window.
    pub left_weight: f64,

    /// Share of the prediction taken from the right window, `1 - left_weight`.
    pub right_weight: f64,
}

impl Continuous {
    /// Creates a model whose grid spans one full turn.
    ///
    /// # Errors
    ///
    /// Returns an error unless `0 < generalization <= num_weights`.
    pub fn new(generalization: usize, num_weights: usize) -> Result<Self, Error> {
        Self::with_period(generalization, num_weights, ContinuousGrid::FULL_TURN)
    }

    /// Creates a model whose grid spans `[0, period]`.
    ///
    /// # Errors
    ///
    /// Returns an error unless `0 < generalization <= num_weights` and
    /// `period` is finite and positive.
    pub fn with_period(
        generalization: usize,
        num_weights: usize,
        period: f64,
    ) -> Result<Self, Error> {
        let params = Params::new(generalization, num_weights)?;
        let grid = ContinuousGrid::new(params.associated_len(), period)?;

        Ok(Self {
            params,
            weights: Weights::new(num_weights),
            grid,
        })
    }

    #[must_use]
    pub fn grid(&self) -> &ContinuousGrid {
        &self.grid
    }

    /// Works out which windows `x` blends and by how much.
    ///
    /// # Errors
    ///
    /// Returns [`Error::IndexOutOfRange`] if `start` has no grid center, or
    /// [`Error::DegenerateInterpolation`] if `x` sits exactly on the center
    /// shared by a clamped window pair.
    pub fn interpolation(&self, x: f64, start: usize) -> Result<Interpolation, Error> {
        let g = self.params.generalization();
        let clamped = start
            .checked_add(g + 1)
            .is_none_or(|end| end >= self.params.associated_len());
        let next = if clamped { start } else { start + 1 };

        let left_center = self.grid.center(start)?;
        let left_dist = (left_center - x).abs();
        let right_dist = (self.grid.center(next)? - x).abs();

        let total = left_dist + right_dist;
        if total == 0.0 {
            return Err(Error::DegenerateInterpolation {
                x,
                center: left_center,
            });
        }

        let left_weight = right_dist / total;
        Ok(Interpolation {
            start,
            next,
            left_weight,
            right_weight: 1.0 - left_weight,
        })
    }

    fn blend(&self, interp: &Interpolation) -> Result<f64, Error> {
        let g = self.params.generalization();
        let left = self.weights.window_sum(interp.start, g)?;
        let right = self.weights.window_sum(interp.next, g)?;
        Ok(interp.left_weight * left + interp.right_weight * right)
    }
}

impl Approximator for Continuous {
    fn params(&self) -> Params {
        self.params
    }

    fn weights(&self) -> &Weights {
        &self.weights
    }

    fn estimate(&self, x: f64, start: usize) -> Result<f64, Error> {
        let interp = self.interpolation(x, start)?;
        self.blend(&interp)
    }

    fn correct(&mut self, sample: &Sample, start: usize, learning_rate: f64) -> Result<(), Error> {
        let g = self.params.generalization();
        let interp = self.interpolation(sample.x, start)?;
        let error = sample.y - self.blend(&interp)?;

        #[allow(clippy::cast_precision_loss)]
        let correction = learning_rate * error / g as f64;

        self.weights.apply_correction(interp.start, g, correction)?;
        self.weights.apply_correction(interp.next, g, correction)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use cmac_core::Domain;
    use std::f64::consts::TAU;

    fn assert_weights(model: &Continuous, expected: &[f64]) {
        assert_eq!(model.weights().len(), expected.len());
        for (actual, expected) in model.weights().view().iter().zip(expected) {
            assert_relative_eq!(*actual, *expected, epsilon = 1e-12);
        }
    }

    #[test]
    fn blend_factors_sum_to_one() {
        let model = Continuous::new(2, 35).unwrap();
        let indexer = model.indexer();
        let domain = Domain::new(0.0, TAU).unwrap();

        for i in 0..100 {
            let x = f64::from(i) * TAU / 100.0;
            let start = indexer.index(x, &domain).unwrap();
            let interp = model.interpolation(x, start).unwrap();

            assert_relative_eq!(interp.left_weight + interp.right_weight, 1.0);
            assert!((0.0..=1.0).contains(&interp.left_weight));
        }
    }

    #[test]
    fn untrained_prediction_is_the_window_width() {
        let model = Continuous::new(2, 10).unwrap();

        let interp = model.interpolation(1.0, 2).unwrap();
        assert_eq!((interp.start, interp.next), (2, 3));
        assert_relative_eq!(model.estimate(1.0, 2).unwrap(), 2.0, epsilon = 1e-12);
    }

    #[test]
    fn blend_leans_toward_the_nearer_center() {
        // Centers are TAU/8 apart: 2 -> PI/2, 3 -> 3PI/4.
        let model = Continuous::new(2, 10).unwrap();
        let left_center = model.grid().center(2).unwrap();
        let right_center = model.grid().center(3).unwrap();
        let x = left_center + 0.25 * (right_center - left_center);

        let interp = model.interpolation(x, 2).unwrap();

        assert_relative_eq!(interp.left_weight, 0.75, epsilon = 1e-12);
        assert_relative_eq!(interp.right_weight, 0.25, epsilon = 1e-12);
    }

    #[test]
    fn both_windows_get_the_same_unscaled_correction() {
        let mut model = Continuous::new(2, 10).unwrap();

        model.correct(&Sample::new(1.0, 0.0), 2, 0.1).unwrap();

        // error = -2, correction = -0.1 on [2, 4) and again on [3, 5).
        assert_weights(
            &model,
            &[1.0, 1.0, 0.9, 0.8, 0.9, 1.0, 1.0, 1.0, 1.0, 1.0],
        );
    }

    #[test]
    fn clamped_pair_corrects_one_window_twice() {
        // g = 2, w = 5: associated_len = 4, so start 1 is already at the edge.
        let mut model = Continuous::new(2, 5).unwrap();

        let interp = model.interpolation(1.0, 1).unwrap();
        assert_eq!((interp.start, interp.next), (1, 1));
        assert_relative_eq!(interp.left_weight, 0.5);

        model.correct(&Sample::new(1.0, 0.0), 1, 0.1).unwrap();

        assert_weights(&model, &[1.0, 0.8, 0.8, 1.0, 1.0]);
    }

    #[test]
    fn input_on_a_clamped_center_is_degenerate() {
        let model = Continuous::new(2, 5).unwrap();
        let center = model.grid().center(1).unwrap();

        assert_eq!(
            model.estimate(center, 1),
            Err(Error::DegenerateInterpolation { x: center, center })
        );
    }

    #[test]
    fn input_on_an_unclamped_center_is_fine() {
        let model = Continuous::new(2, 10).unwrap();
        let center = model.grid().center(2).unwrap();

        let interp = model.interpolation(center, 2).unwrap();

        assert_relative_eq!(interp.left_weight, 1.0);
        assert_relative_eq!(interp.right_weight, 0.0);
    }

    #[test]
    fn grid_ignores_the_sample_domain() {
        let model = Continuous::new(2, 10).unwrap();
        assert_relative_eq!(model.grid().center(8).unwrap(), TAU);

        let custom = Continuous::with_period(2, 10, 4.0).unwrap();
        assert_relative_eq!(custom.grid().center(8).unwrap(), 4.0);
    }

    #[test]
    fn start_without_a_center_is_out_of_range() {
        let model = Continuous::new(2, 10).unwrap();

        assert!(matches!(
            model.estimate(1.0, 9),
            Err(Error::IndexOutOfRange { start: 9, .. })
        ));
    }

    #[test]
    fn rejects_overflowing_starts() {
        let mut model = Continuous::new(2, 10).unwrap();

        assert!(matches!(
            model.estimate(1.0, usize::MAX),
            Err(Error::IndexOutOfRange { start: usize::MAX, .. })
        ));
        assert!(matches!(
            model.correct(&Sample::new(1.0, 0.0), usize::MAX, 0.1),
            Err(Error::IndexOutOfRange { .. })
        ));
        assert_weights(&model, &[1.0; 10]);
    }
}
