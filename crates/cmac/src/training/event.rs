/// Progress emitted by the training loop after every epoch.
///
/// Epoch 0 is the first pass over the data.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Event {
    /// Zero-based index of the pass that just finished.
    pub epoch: usize,

    /// Accuracy over the training data after this pass.
    pub accuracy: f64,

    /// `1 - accuracy`.
    pub loss: f64,

    /// Whether the loss moved by less than the convergence threshold.
    pub converged: bool,
}
