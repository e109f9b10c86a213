use crate::ode::runge_kutta;
use crate::ode::types::Derivative;
use crate::ode::Ode;

/// Binds the RHS of dy/dt = f(t, y) once and exposes the steppers over it.
///
/// ```
/// use odestep::ode::stepper::Integrator;
///
/// let growth = Integrator::new(|_t: f64, y: f64| y);
/// assert_eq!(2., growth.euler(1., 0., 1.));
/// assert!((growth.rk4(1., 0., 1.) - 2.708_333).abs() < 1e-6);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Integrator<F> {
    f: F,
}

impl<F: Derivative> Integrator<F> {
    #[inline]
    pub fn new(f: F) -> Self {
        Self { f }
    }

    /// the bound derivative function
    #[inline]
    pub fn fun(&self) -> &F {
        &self.f
    }

    /// releases the bound derivative function
    #[inline]
    pub fn into_inner(self) -> F {
        self.f
    }

    /// see [`runge_kutta::euler`]
    #[inline]
    pub fn euler(&self, y0: f64, t0: f64, h: f64) -> f64 {
        runge_kutta::euler(y0, t0, h, &self.f)
    }

    /// see [`runge_kutta::rk4`]
    #[inline]
    pub fn rk4(&self, y0: f64, t0: f64, h: f64) -> f64 {
        runge_kutta::rk4(y0, t0, h, &self.f)
    }

    /// see [`runge_kutta::rk4general`], `lambda_order` is not validated
    #[inline]
    pub fn rk4general(&self, y0: f64, t0: f64, h: f64, lambda_order: i32) -> f64 {
        runge_kutta::rk4general(y0, t0, h, lambda_order, &self.f)
    }

    #[inline]
    pub fn step(&self, ode: Ode, y0: f64, t0: f64, h: f64) -> f64 {
        ode.step(y0, t0, h, &self.f)
    }
}

/// same as `Integrator::new`
#[inline]
pub fn make_stepper<F: Derivative>(f: F) -> Integrator<F> {
    Integrator::new(f)
}
