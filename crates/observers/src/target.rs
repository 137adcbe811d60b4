use cmac::{Action, Event};
use cmac_core::Observer;

/// Stops training once the accuracy reaches a target.
///
/// The check only starts after `min_epochs` passes so an early lucky epoch
/// cannot end training.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TargetAccuracy {
    target: f64,
    min_epochs: usize,
}

impl TargetAccuracy {
    #[must_use]
    pub fn new(target: f64) -> Self {
        Self {
            target,
            min_epochs: 0,
        }
    }

    /// Requires at least `min_epochs` passes before stopping.
    #[must_use]
    pub fn after(mut self, min_epochs: usize) -> Self {
        self.min_epochs = min_epochs;
        self
    }
}

impl Observer<Event, Action> for TargetAccuracy {
    fn observe(&mut self, event: &Event) -> Option<Action> {
        (event.epoch + 1 >= self.min_epochs && event.accuracy >= self.target)
            .then_some(Action::StopEarly)
    }
}
