//! Single-step solvers for scalar ordinary differential equations
//! `dy/dt = f(t, y)`.
//!
//! The steppers in [`ode::runge_kutta`] take the derivative function per
//! call, [`ode::stepper::Integrator`] binds it once, and
//! [`ode::problem::OdeProblem`] steps a value across a whole time span.
//!
//! ```
//! use odestep::ode::runge_kutta::{euler, rk4, rk4general};
//!
//! let f = |_t: f64, y: f64| y;
//! assert_eq!(2., euler(1., 0., 1., f));
//! assert!((rk4(1., 0., 0.1, f) - 0.1f64.exp()).abs() < 1e-6);
//! assert!((rk4general(1., 0., 0.1, 3, f) - 0.1f64.exp()).abs() < 1e-6);
//! ```

pub mod error;
pub mod ode;

pub use crate::error::{Error, OdeError, Result};
pub use crate::ode::stepper::{make_stepper, Integrator};
pub use crate::ode::types::{Derivative, Lambda};
pub use crate::ode::Ode;
