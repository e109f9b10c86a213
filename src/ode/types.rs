#[cfg(feature = "serde0")]
use serde::{Deserialize, Serialize};
use crate::error::OdeError;
use std::fmt;

/// The RHS of the ODE dy/dt = f(t, y), evaluated at time `t` and value `y`.
///
/// Implemented for every `Fn(f64, f64) -> f64`, so closures, fn items and
/// references to either can be handed to the steppers directly.
pub trait Derivative: Fn(f64, f64) -> f64 {}

impl<F> Derivative for F where F: Fn(f64, f64) -> f64 {}

/// Member of the generalized fourth order Runge-Kutta family.
///
/// `λ = 2` is the classical scheme and deliberately missing, use
/// [`rk4`](crate::ode::runge_kutta::rk4) for that one.
#[cfg_attr(feature = "serde0", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(i32)]
pub enum Lambda {
    One = 1,
    Three = 3,
    Four = 4,
    Five = 5,
}

impl Lambda {
    pub const ALL: [Lambda; 4] = [Lambda::One, Lambda::Three, Lambda::Four, Lambda::Five];

    /// the integer order as passed to `rk4general`
    #[inline]
    pub fn order(self) -> i32 {
        self as i32
    }

    /// λ as a double, exact for every member
    #[inline]
    pub fn value(self) -> f64 {
        f64::from(self.order())
    }
}

impl TryFrom<i32> for Lambda {
    type Error = OdeError;

    fn try_from(order: i32) -> Result<Self, Self::Error> {
        match order {
            1 => Ok(Lambda::One),
            3 => Ok(Lambda::Three),
            4 => Ok(Lambda::Four),
            5 => Ok(Lambda::Five),
            _ => Err(OdeError::InvalidLambda(order)),
        }
    }
}

impl From<Lambda> for i32 {
    #[inline]
    fn from(lambda: Lambda) -> Self {
        lambda.order()
    }
}

impl fmt::Display for Lambda {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.order())
    }
}
