#[cfg(feature = "serde0")]
use serde::{Deserialize, Serialize};
use std::fmt;

/// pairs the timestamp with the corresponding calculated value
#[cfg_attr(feature = "serde0", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SolutionPoint {
    pub t: f64,
    pub y: f64,
}

impl SolutionPoint {
    #[inline]
    pub fn new(t: f64, y: f64) -> Self {
        Self { t, y }
    }
}

/// Contains some diagnostics of the integration.
#[cfg_attr(feature = "serde0", derive(Serialize, Deserialize))]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Diagnostics {
    /// calls of the derivative function
    pub num_eval: usize,
    /// steps taken, including substeps
    pub steps: usize,
}

impl fmt::Display for Diagnostics {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "Number of function evaluations: {}", self.num_eval)?;
        write!(f, "Number of steps: {}", self.steps)
    }
}

#[cfg_attr(feature = "serde0", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Default, PartialEq)]
pub struct OdeSolution {
    /// Vector of points at which solutions were obtained
    pub tout: Vec<f64>,
    /// solutions at times `tout`, stored as a vector `yout`
    pub yout: Vec<f64>,
    pub diagnostics: Diagnostics,
}

impl OdeSolution {
    #[inline]
    pub fn len(&self) -> usize {
        self.tout.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.tout.is_empty()
    }

    /// pair each timestep with the corresponding output
    #[inline]
    pub fn zipped(self) -> Vec<(f64, f64)> {
        self.tout.into_iter().zip(self.yout).collect()
    }

    pub fn points(&self) -> impl Iterator<Item = SolutionPoint> + '_ {
        self.tout
            .iter()
            .zip(self.yout.iter())
            .map(|(t, y)| SolutionPoint::new(*t, *y))
    }

    /// the solution at the end of the time span
    pub fn last(&self) -> Option<SolutionPoint> {
        match (self.tout.last(), self.yout.last()) {
            (Some(t), Some(y)) => Some(SolutionPoint::new(*t, *y)),
            _ => None,
        }
    }
}

/// prints at most the first and last ten items
fn slice_print<T: fmt::Debug>(f: &mut fmt::Formatter, items: &[T]) -> fmt::Result {
    write!(f, "[")?;
    let mut i = 0;
    while i < items.len() {
        if i == items.len() - 1 {
            write!(f, "{:?}", items[i])?;
        } else {
            write!(f, "{:?}, ", items[i])?;
        }
        if i == 9 && items.len() > 20 {
            write!(f, "... ")?;
            i = items.len() - 10;
            continue;
        }
        i += 1;
    }
    write!(f, "]")
}

impl fmt::Display for OdeSolution {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "(")?;
        slice_print(f, &self.tout)?;
        write!(f, ", Vec{{{}}}", self.yout.len())?;
        slice_print(f, &self.yout)?;
        write!(f, ")")
    }
}
