//! Reusable training observers for the CMAC approximators.
//!
//! Every type here implements (or hands out) an [`Observer`] over
//! [`cmac::Event`] and [`cmac::Action`], so it can be passed straight to
//! [`cmac::train`].
//!
//! - [`LogObserver`] — reports each epoch through the `log` facade
//! - [`History`] — records every event for later inspection
//! - [`TargetAccuracy`] — stops training once the accuracy is good enough
//!
//! [`Observer`]: cmac_core::Observer

mod history;
mod logging;
mod target;

pub use history::History;
pub use logging::LogObserver;
pub use target::TargetAccuracy;
