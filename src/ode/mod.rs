pub mod options;
pub mod problem;
pub mod runge_kutta;
pub mod solution;
pub mod stepper;
pub mod types;

#[cfg(feature = "serde0")]
use serde::{Deserialize, Serialize};
use crate::error::OdeError;
use crate::ode::types::{Derivative, Lambda};
use std::fmt;

/// The available ODE steppers.
#[cfg_attr(feature = "serde0", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Ode {
    /// forward Euler
    Feuler,
    /// classical Runge Kutta 4
    Ode4,
    /// member of the generalized Runge Kutta 4 family
    Ode4General(Lambda),
}

impl Ode {
    /// order of accuracy of the method
    #[inline]
    pub fn order(&self) -> usize {
        match self {
            Ode::Feuler => 1,
            Ode::Ode4 | Ode::Ode4General(_) => 4,
        }
    }

    /// number of evaluations of the derivative per step
    #[inline]
    pub fn nstages(&self) -> usize {
        match self {
            Ode::Feuler => 1,
            Ode::Ode4 | Ode::Ode4General(_) => 4,
        }
    }

    /// advances `y0` at `t0` by one step of size `h`
    pub fn step<F: Derivative>(&self, y0: f64, t0: f64, h: f64, f: F) -> f64 {
        match *self {
            Ode::Feuler => runge_kutta::euler(y0, t0, h, f),
            Ode::Ode4 => runge_kutta::rk4(y0, t0, h, f),
            Ode::Ode4General(lambda) => runge_kutta::rk4general(y0, t0, h, lambda.order(), f),
        }
    }
}

impl Default for Ode {
    fn default() -> Self {
        Ode::Ode4
    }
}

impl std::str::FromStr for Ode {
    type Err = OdeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "feuler" | "euler" => Ok(Ode::Feuler),
            "ode4" | "rk4" => Ok(Ode::Ode4),
            _ => match s.split_once(':') {
                Some(("rk4general", order)) => {
                    let order = order
                        .trim()
                        .parse::<i32>()
                        .map_err(|_| OdeError::UnknownMethod(s.to_string()))?;
                    Ok(Ode::Ode4General(Lambda::try_from(order)?))
                }
                _ => Err(OdeError::UnknownMethod(s.to_string())),
            },
        }
    }
}

impl fmt::Display for Ode {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Ode::Feuler => write!(f, "feuler"),
            Ode::Ode4 => write!(f, "ode4"),
            Ode::Ode4General(lambda) => write!(f, "rk4general:{}", lambda),
        }
    }
}
