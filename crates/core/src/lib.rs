//! Core traits and types shared by the CMAC approximators.
//!
//! This crate defines the small vocabulary that the approximators, the
//! training loop, and the observers all speak:
//!
//! - [`Sample`] — one `(x, y)` pair of input coordinate and target value
//! - [`Domain`] — the validated half-open input interval `[lower, upper)`
//! - [`Observer`] — receives training events and optionally returns control actions

mod domain;
mod observer;
mod sample;

pub use domain::{Domain, DomainError};
pub use observer::Observer;
pub use sample::Sample;
