//! Cerebellar Model Articulation Controllers for scalar functions.
//!
//! A CMAC approximates an unknown `f: ℝ → ℝ` from sampled `(x, y)` pairs with
//! a sparse, locally tuned weight array. Each input is mapped to a window of
//! `g` consecutive weights (its receptive field); predictions read from that
//! window and training writes a correction back into it, so nearby inputs
//! generalize through overlapping windows.
//!
//! Two variants implement the shared [`Approximator`] trait:
//!
//! - [`Discrete`] — hard quantization, one window per input
//! - [`Continuous`] — linear blend of two neighbouring windows, positioned on
//!   a fixed [`ContinuousGrid`]
//!
//! [`train`](train()) drives online epochs with convergence detection and
//! reports progress to an [`Observer`]; [`predict`] evaluates a dataset and
//! its aggregate accuracy (see [`metric`]).
//!
//! # Example
//!
//! ```
//! use cmac::{Config, Discrete, Domain, Sample, predict, train_unobserved};
//!
//! let data: Vec<Sample> = (0..40)
//!     .map(|i| {
//!         let x = f64::from(i) * 0.1;
//!         Sample::new(x, x.sin())
//!     })
//!     .collect();
//! let domain = Domain::new(0.0, 4.0)?;
//!
//! let mut model = Discrete::new(3, 30)?;
//! let config = Config::new(200, 0.1, 1e-9)?;
//! let outcome = train_unobserved(&mut model, &data, domain, &config)?;
//! assert!(outcome.passes <= 201);
//!
//! let prediction = predict(&model, &data, domain)?;
//! assert_eq!(prediction.samples.len(), data.len());
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

mod approximator;
mod continuous;
mod discrete;
mod error;
mod grid;
mod indexer;
mod params;
mod predict;
mod training;
mod weights;

pub mod metric;

pub use approximator::Approximator;
pub use continuous::{Continuous, Interpolation};
pub use discrete::Discrete;
pub use error::{Error, ParamError};
pub use grid::ContinuousGrid;
pub use indexer::{Associations, Indexer};
pub use params::Params;
pub use predict::{Prediction, predict, predict_associated};
pub use training::{Action, Config, ConfigError, Event, Outcome, Status, train, train_unobserved};
pub use weights::Weights;

pub use cmac_core::{Domain, DomainError, Observer, Sample};
