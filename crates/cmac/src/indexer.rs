use cmac_core::{Domain, Sample};
use log::debug;

use crate::Error;

/// Maps scalar inputs to window-start indices in the weight array.
///
/// An input `x` in `[lower, upper)` is rescaled linearly onto the association
/// positions:
///
/// ```text
/// index = floor((associated_len - 2) * (x - lower) / (upper - lower)) + 1
/// ```
///
/// which lands in `[1, associated_len - 2]` whenever there is room for it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Indexer {
    associated_len: usize,
}

impl Indexer {
    #[must_use]
    pub fn new(associated_len: usize) -> Self {
        Self { associated_len }
    }

    #[must_use]
    pub fn associated_len(&self) -> usize {
        self.associated_len
    }

    /// Returns the association index for a single input.
    ///
    /// # Errors
    ///
    /// Returns [`Error::OutsideDomain`] unless `x` lies in `[lower, upper)`.
    pub fn index(&self, x: f64, domain: &Domain) -> Result<usize, Error> {
        let outside = || Error::OutsideDomain {
            x,
            lower: domain.lower(),
            upper: domain.upper(),
        };

        if !domain.contains(x) {
            return Err(outside());
        }

        #[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation)]
        let scaled = ((self.associated_len as f64 - 2.0) * domain.fraction(x)).floor() as i64;

        usize::try_from(scaled + 1).map_err(|_| outside())
    }

    /// Builds the association table for a dataset, one index per position.
    ///
    /// Samples that share an input value each keep their own entry.
    ///
    /// # Errors
    ///
    /// Returns the first indexing error encountered.
    pub fn associate(&self, data: &[Sample], domain: Domain) -> Result<Associations, Error> {
        let indices = data
            .iter()
            .map(|sample| self.index(sample.x, &domain))
            .collect::<Result<Vec<_>, _>>()?;

        debug!(
            "built association table: samples={} associated_len={} domain=[{}, {})",
            indices.len(),
            self.associated_len,
            domain.lower(),
            domain.upper()
        );

        Ok(Associations { domain, indices })
    }
}

/// Association indices for one dataset, in sample order.
///
/// A table is transient: it is built for a dataset and domain, reused while
/// training on that dataset, and dropped afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct Associations {
    domain: Domain,
    indices: Vec<usize>,
}

impl Associations {
    /// Returns the domain the table was built for.
    #[must_use]
    pub fn domain(&self) -> Domain {
        self.domain
    }

    #[must_use]
    pub fn indices(&self) -> &[usize] {
        &self.indices
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.indices.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }
}
