use crate::error::{Error, OdeError, Result};
use crate::ode::options::OdeOptions;
use crate::ode::solution::{Diagnostics, OdeSolution};
use crate::ode::types::{Derivative, Lambda};
use crate::ode::Ode;
use derive_builder::Builder;
use num_traits::signum;
use std::cell::Cell;
use std::fmt;

/// F: the RHS of the ODE dy/dt = F(t,y), which is a function of t and y(t)
/// and returns dy/dt
/// y0: initial value for y at `tspan[0]`
/// tspan: sorted t values at which the solution (y) is requested.
/// If tspan\[0\] > tspan\[end\] the integration is performed backwards.
#[derive(Clone, Builder)]
#[builder(
    pattern = "owned",
    build_fn(validate = "Self::validate", error = "Error")
)]
pub struct OdeProblem<F> {
    /// the RHS of the ODE dy/dt = F(t,y)
    #[builder(setter(name = "fun"))]
    f: F,
    /// initial value
    #[builder(setter(name = "init", into))]
    y0: f64,
    /// sorted t values at which the solution (y) is requested
    tspan: Vec<f64>,
}

impl<F> fmt::Debug for OdeProblem<F> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("OdeProblem")
            .field("y0", &self.y0)
            .field("tspan", &self.tspan)
            .finish_non_exhaustive()
    }
}

impl<F> OdeProblemBuilder<F> {
    /// creates a new tspan with `n` items from `from` to `to`
    pub fn tspan_linspace(mut self, from: f64, to: f64, n: usize) -> Self {
        self.tspan = Some(itertools_num::linspace(from, to, n).collect());
        self
    }

    /// the time span must be monotone, either direction
    fn validate(&self) -> Result<()> {
        if let Some(tspan) = &self.tspan {
            if let (Some(first), Some(last)) = (tspan.first(), tspan.last()) {
                let tdir = signum(*last - *first);
                if !tspan.windows(2).all(|w| (w[1] - w[0]) * tdir >= 0.) {
                    return Err(OdeError::UnsortedTimeSpan.into());
                }
            }
        }
        Ok(())
    }
}

impl<F: Derivative> OdeProblem<F> {
    /// convenience method to create a new builder
    /// same as `OdeProblemBuilder::default()`
    pub fn builder() -> OdeProblemBuilder<F> {
        OdeProblemBuilder::default()
    }

    #[inline]
    pub fn fun(&self) -> &F {
        &self.f
    }

    #[inline]
    pub fn y0(&self) -> f64 {
        self.y0
    }

    #[inline]
    pub fn tspan(&self) -> &[f64] {
        &self.tspan
    }

    /// solve the problem using forward Euler
    pub fn ode1(&self) -> Result<OdeSolution, OdeError> {
        self.solve(&OdeOptions::with_method(Ode::Feuler))
    }

    /// solve the problem using the classical Runge Kutta 4
    pub fn ode4(&self) -> Result<OdeSolution, OdeError> {
        self.solve(&OdeOptions::with_method(Ode::Ode4))
    }

    /// solve the problem using a member of the generalized Runge Kutta 4 family
    pub fn ode4general(&self, lambda: Lambda) -> Result<OdeSolution, OdeError> {
        self.solve(&OdeOptions::with_method(Ode::Ode4General(lambda)))
    }

    /// Steps from each point of the time span to the next with fixed steps,
    /// `opts.substeps` of them per interval.
    ///
    /// Only the values at the `tspan` points are stored.
    pub fn solve(&self, opts: &OdeOptions) -> Result<OdeSolution, OdeError> {
        if self.tspan.is_empty() {
            // nothing to solve
            return Ok(OdeSolution::default());
        }

        let evals = Cell::new(0usize);
        let f = |t: f64, y: f64| {
            evals.set(evals.get() + 1);
            (self.f)(t, y)
        };

        let substeps = opts.substeps.max(1);
        let mut diagnostics = Diagnostics::default();

        // store for the computed values
        let mut ys = Vec::with_capacity(self.tspan.len());
        let mut y = self.y0;
        ys.push(y);

        for interval in self.tspan.windows(2) {
            let (t0, t1) = (interval[0], interval[1]);
            let dt = (t1 - t0) / substeps as f64;

            for j in 0..substeps {
                let t = t0 + j as f64 * dt;
                y = opts.method.step(y, t, dt, &f);
                diagnostics.steps += 1;

                if opts.nan_check && y.is_nan() {
                    let timestamp = if j + 1 == substeps { t1 } else { t + dt };
                    return Err(OdeError::NAN {
                        computation: evals.get(),
                        timestamp,
                    });
                }
            }
            ys.push(y);
        }
        diagnostics.num_eval = evals.get();

        Ok(OdeSolution {
            tout: self.tspan.clone(),
            yout: ys,
            diagnostics,
        })
    }
}
