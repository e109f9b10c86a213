#[cfg(feature = "serde0")]
use serde::{Deserialize, Serialize};
use crate::ode::Ode;
use derive_builder::Builder;
use std::fmt;

/// Options for solving an [`OdeProblem`](crate::ode::problem::OdeProblem)
/// over its time span.
///
/// ```
/// use odestep::ode::options::OdeOptionsBuilder;
/// use odestep::ode::Ode;
///
/// let opts = OdeOptionsBuilder::default()
///     .method(Ode::Feuler)
///     .substeps(10usize)
///     .build()
///     .unwrap();
/// assert!(opts.nan_check);
/// ```
#[cfg_attr(feature = "serde0", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, PartialEq, Builder)]
#[builder(build_fn(validate = "Self::validate"))]
pub struct OdeOptions {
    /// the stepper used for every step
    #[builder(default)]
    pub method: Ode,
    /// number of equal steps taken between two consecutive output times
    #[builder(default = "1")]
    pub substeps: usize,
    /// abort with an error as soon as a step produces NAN
    #[builder(default = "true")]
    pub nan_check: bool,
}

impl OdeOptions {
    /// convenience method to create a new builder
    /// same as `OdeOptionsBuilder::default()`
    pub fn builder() -> OdeOptionsBuilder {
        OdeOptionsBuilder::default()
    }

    /// default options stepping with `method`
    pub fn with_method(method: Ode) -> Self {
        Self {
            method,
            ..Default::default()
        }
    }
}

impl Default for OdeOptions {
    fn default() -> Self {
        Self {
            method: Ode::default(),
            substeps: 1,
            nan_check: true,
        }
    }
}

impl OdeOptionsBuilder {
    fn validate(&self) -> Result<(), String> {
        match self.substeps {
            Some(0) => Err("Substeps must be at least 1".to_string()),
            _ => Ok(()),
        }
    }
}

impl fmt::Display for OdeOptions {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "Method: {}, Substeps: {}, NAN check: {}",
            self.method, self.substeps, self.nan_check
        )
    }
}
