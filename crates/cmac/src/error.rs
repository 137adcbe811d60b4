use cmac_core::DomainError;
use thiserror::Error;

/// Errors raised by the approximators and the training loop.
#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum Error {
    #[error("invalid parameters: {0}")]
    InvalidParameters(#[from] ParamError),

    #[error("input {x} lies outside the domain [{lower}, {upper})")]
    OutsideDomain { x: f64, lower: f64, upper: f64 },

    #[error("window [{start}, {start} + {width}) exceeds the {len} available slots")]
    IndexOutOfRange {
        start: usize,
        width: usize,
        len: usize,
    },

    #[error("input {x} sits exactly on interpolation center {center}")]
    DegenerateInterpolation { x: f64, center: f64 },

    #[error("association table holds {indices} indices for {samples} samples")]
    AssociationMismatch { samples: usize, indices: usize },
}

/// Reasons a model or a call into it was rejected before doing any work.
#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum ParamError {
    #[error("generalization factor must be positive")]
    ZeroGeneralization,

    #[error("generalization factor {generalization} exceeds the {num_weights} weights")]
    GeneralizationTooLarge {
        generalization: usize,
        num_weights: usize,
    },

    #[error("grid period must be finite and positive, got {0}")]
    Period(f64),

    #[error("dataset is empty")]
    EmptyData,

    #[error(transparent)]
    Domain(#[from] DomainError),
}

impl From<DomainError> for Error {
    fn from(err: DomainError) -> Self {
        Self::InvalidParameters(err.into())
    }
}
