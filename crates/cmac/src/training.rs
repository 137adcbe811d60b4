//! Online training with convergence detection.
//!
//! # Algorithm
//!
//! The association table for the dataset is built once. Each epoch then
//!
//! 1. corrects the model once per sample, in dataset order,
//! 2. predicts the whole dataset with the updated weights to get the
//!    training accuracy and `loss = 1 - accuracy`,
//! 3. stops if `|previous_loss - loss| < convergence_threshold`, where the
//!    loss before the first epoch counts as `0.0`.
//!
//! Up to `epochs + 1` passes are made. Updates are strictly sequential: every
//! correction reads weights written by the corrections before it.
//!
//! NaN losses never satisfy the threshold, so a diverging model simply runs
//! out its budget and reports the NaN.
//!
//! # Observer Events
//!
//! The loop emits one [`Event`] per epoch, after the convergence check.
//! Observers can return [`Action::StopEarly`] to end training after that
//! epoch; the no-op observer `()` never does.

mod action;
mod config;
mod event;
mod outcome;


pub use action::Action;
pub use config::{Config, ConfigError};
pub use event::Event;
pub use outcome::{Outcome, Status};

use cmac_core::{Domain, Observer, Sample};
use log::trace;

use crate::{Approximator, Error, ParamError, predict_associated};

/// Trains `model` on `data` until convergence or the epoch budget runs out.
///
/// The observer receives an [`Event`] after every epoch.
/// See the [module docs](self) for the stopping rule.
///
/// # Errors
///
/// Returns an error if `data` is empty, any input lies outside `domain`, or
/// the model fails to predict or correct a sample. Weights corrected before
/// the failure stay corrected.
pub fn train<A, Obs>(
    model: &mut A,
    data: &[Sample],
    domain: Domain,
    config: &Config,
    mut observer: Obs,
) -> Result<Outcome, Error>
where
    A: Approximator,
    Obs: Observer<Event, Action>,
{
    if data.is_empty() {
        return Err(ParamError::EmptyData.into());
    }

    let associations = model.indexer().associate(data, domain)?;
    let learning_rate = config.learning_rate();

    let mut loss = 0.0;
    let mut accuracy = f64::NAN;

    for epoch in 0..=config.epochs() {
        let previous_loss = loss;

        for (sample, &start) in data.iter().zip(associations.indices()) {
            model.correct(sample, start, learning_rate)?;
        }

        accuracy = predict_associated(model, data, &associations)?.accuracy;
        loss = 1.0 - accuracy;

        let converged = (previous_loss - loss).abs() < config.convergence_threshold();
        trace!("epoch={epoch} accuracy={accuracy} loss={loss} converged={converged}");

        let event = Event {
            epoch,
            accuracy,
            loss,
            converged,
        };
        let action = observer.observe(&event);

        let outcome = |status| Outcome {
            status,
            passes: epoch + 1,
            accuracy,
            loss,
        };

        if converged {
            return Ok(outcome(Status::Converged));
        }
        if let Some(Action::StopEarly) = action {
            return Ok(outcome(Status::StoppedByObserver));
        }
    }

    Ok(Outcome {
        status: Status::MaxEpochs,
        passes: config.epochs().saturating_add(1),
        accuracy,
        loss,
    })
}

/// Trains `model` without observer support.
///
/// This is a convenience wrapper around [`train`] that uses a no-op observer.
///
/// # Errors
///
/// Returns the same errors as [`train`].
pub fn train_unobserved<A: Approximator>(
    model: &mut A,
    data: &[Sample],
    domain: Domain,
    config: &Config,
) -> Result<Outcome, Error> {
    train(model, data, domain, config, ())
}
