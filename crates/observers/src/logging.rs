use cmac::{Action, Event};
use cmac_core::Observer;
use log::{info, warn};

/// Reports training progress through the `log` facade.
///
/// Each epoch is logged at `info` level with the observer's label, the
/// accuracy as a percentage, and the loss. The first NaN loss is also logged
/// once at `warn` level; training itself carries on regardless.
#[derive(Debug, Clone)]
pub struct LogObserver {
    label: String,
    warned_nan: bool,
}

impl LogObserver {
    /// Creates an observer that prefixes every line with `label`.
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            warned_nan: false,
        }
    }

    #[must_use]
    pub fn label(&self) -> &str {
        &self.label
    }
}

impl Observer<Event, Action> for LogObserver {
    fn observe(&mut self, event: &Event) -> Option<Action> {
        info!(
            "{} training in progress: epoch={} accuracy={:.4}% loss={}",
            self.label,
            event.epoch,
            event.accuracy * 100.0,
            event.loss
        );

        if event.loss.is_nan() && !self.warned_nan {
            self.warned_nan = true;
            warn!(
                "{}: loss became NaN at epoch {}, weights are no longer finite",
                self.label, event.epoch
            );
        }

        if event.converged {
            info!("{} converged after {} passes", self.label, event.epoch + 1);
        }

        None
    }
}
