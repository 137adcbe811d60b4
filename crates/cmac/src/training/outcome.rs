/// Indicates how training terminated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    /// The loss changed by less than the convergence threshold.
    Converged,

    /// Ran every pass in the epoch budget without converging.
    MaxEpochs,

    /// Stopped early due to an observer decision.
    StoppedByObserver,
}

/// The result of a training call.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Outcome {
    /// How training terminated.
    pub status: Status,

    /// Number of passes made over the data.
    pub passes: usize,

    /// Training accuracy after the last pass.
    pub accuracy: f64,

    /// Training loss after the last pass.
    pub loss: f64,
}
