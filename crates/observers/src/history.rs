use cmac::{Action, Event};

/// Records every training event.
///
/// Lend the history to [`cmac::train`] through [`History::record`] and read
/// it back once training returns.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct History {
    events: Vec<Event>,
}

impl History {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns an observer that appends each event to this history.
    pub fn record(&mut self) -> impl FnMut(&Event) -> Option<Action> + '_ {
        move |event: &Event| {
            self.events.push(*event);
            None
        }
    }

    #[must_use]
    pub fn events(&self) -> &[Event] {
        &self.events
    }

    #[must_use]
    pub fn last(&self) -> Option<&Event> {
        self.events.last()
    }

    /// Returns the loss after each epoch, in order.
    pub fn losses(&self) -> impl Iterator<Item = f64> + '_ {
        self.events.iter().map(|event| event.loss)
    }

    /// Returns the highest accuracy seen, ignoring NaN.
    #[must_use]
    pub fn best_accuracy(&self) -> Option<f64> {
        self.events
            .iter()
            .map(|event| event.accuracy)
            .filter(|accuracy| !accuracy.is_nan())
            .reduce(f64::max)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use cmac::{Config, Discrete, Domain, Sample, train};

    #[test]
    fn records_every_epoch_of_a_run() {
        let mut model = Discrete::new(2, 5).unwrap();
        let domain = Domain::new(0.0, 4.0).unwrap();
        let config = Config::new(9, 0.5, 0.0).unwrap();
        let mut history = History::new();

        let outcome = train(
            &mut model,
            &[Sample::new(1.0, 3.0)],
            domain,
            &config,
            history.record(),
        )
        .unwrap();

        assert_eq!(history.events().len(), outcome.passes);
        assert_eq!(history.last().map(|e| e.epoch), Some(9));

        // The residual halves every pass.
        let losses: Vec<_> = history.losses().collect();
        for (k, loss) in losses.iter().enumerate() {
            assert_relative_eq!(*loss, 0.5_f64.powi(k as i32 + 1), epsilon = 1e-12);
        }
        assert_relative_eq!(history.best_accuracy().unwrap(), 1.0 - 0.5_f64.powi(10));
    }

    #[test]
    fn empty_history_has_no_best() {
        let history = History::new();

        assert!(history.last().is_none());
        assert_eq!(history.best_accuracy(), None);
    }
}
