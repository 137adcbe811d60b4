/// Hook called once per training epoch.
///
/// `E` is the per-epoch report (accuracy, loss, whether the loss settled) and
/// `A` the set of requests the training loop honours, such as stopping before
/// the epoch budget runs out. Returning `None` leaves the epoch budget and the
/// convergence check in charge.
///
/// Any `FnMut(&E) -> Option<A>` closure can be passed where an observer is
/// expected. `()` is the silent observer used by unobserved training.
pub trait Observer<E, A> {
    /// Inspects one epoch report, optionally asking the loop to act on it.
    fn observe(&mut self, event: &E) -> Option<A>;
}

/// Closures observe by being called.
impl<E, A, F> Observer<E, A> for F
where
    F: FnMut(&E) -> Option<A>,
{
    fn observe(&mut self, event: &E) -> Option<A> {
        self(event)
    }
}

/// Never asks for anything.
impl<E, A> Observer<E, A> for () {
    fn observe(&mut self, _event: &E) -> Option<A> {
        None
    }
}
