/// Actions an observer can take during training.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Stop after the current epoch and report what was reached so far.
    StopEarly,
}
