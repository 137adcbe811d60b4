use thiserror::Error;

/// The half-open input interval `[lower, upper)` that samples are drawn from.
///
/// Association indices are computed by rescaling an input linearly over this
/// interval, so a domain is only constructible when it is finite and
/// non-empty.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Domain {
    lower: f64,
    upper: f64,
}

/// Errors that can occur when validating a domain.
#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum DomainError {
    #[error("domain bounds must be finite: [{lower}, {upper})")]
    NonFinite { lower: f64, upper: f64 },

    #[error("domain is empty: lower ({lower}) must be less than upper ({upper})")]
    Empty { lower: f64, upper: f64 },
}

impl Domain {
    /// Creates a new domain.
    ///
    /// # Errors
    ///
    /// Returns an error if either bound is non-finite or `lower >= upper`.
    pub fn new(lower: f64, upper: f64) -> Result<Self, DomainError> {
        if !lower.is_finite() || !upper.is_finite() {
            return Err(DomainError::NonFinite { lower, upper });
        }
        if lower >= upper {
            return Err(DomainError::Empty { lower, upper });
        }

        Ok(Self { lower, upper })
    }

    #[must_use]
    pub fn lower(&self) -> f64 {
        self.lower
    }

    #[must_use]
    pub fn upper(&self) -> f64 {
        self.upper
    }

    /// Returns `upper - lower`.
    #[must_use]
    pub fn width(&self) -> f64 {
        self.upper - self.lower
    }

    /// Returns true if `lower <= x < upper`.
    ///
    /// NaN is never contained.
    #[must_use]
    pub fn contains(&self, x: f64) -> bool {
        self.lower <= x && x < self.upper
    }

    /// Returns where `x` sits in the domain, `0.0` at `lower` and `1.0` at `upper`.
    #[must_use]
    pub fn fraction(&self, x: f64) -> f64 {
        (x - self.lower) / self.width()
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Domain {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        #[derive(serde::Deserialize)]
        struct Raw {
            lower: f64,
            upper: f64,
        }

        let raw = Raw::deserialize(deserializer)?;
        Domain::new(raw.lower, raw.upper).map_err(serde::de::Error::custom)
    }
}
