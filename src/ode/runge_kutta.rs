//! Single-step kernels for scalar ODEs `dy/dt = f(t, y)`.
//!
//! Every stepper is a pure function of its inputs and the values returned by
//! `f`: nothing is validated, and NaN or infinite results propagate as they
//! come out of the floating point arithmetic.
//!
//! <https://en.wikipedia.org/wiki/Runge%E2%80%93Kutta_methods>

use crate::ode::types::Derivative;

/// The (forward) Euler method, follows the tangent at `(t0, y0)` over `h`.
///
/// ```text
///  0.000 | 0.000
/// -------+------
///        | 1.000
/// ```
///
/// First order, calls `f` exactly once.
#[inline]
pub fn euler<F: Derivative>(y0: f64, t0: f64, h: f64, f: F) -> f64 {
    y0 + h * f(t0, y0)
}

/// The classical Runge Kutta 4 method
///
/// ```text
///  0.000 | 0.000 0.000 0.000 0.000
///  0.500 | 0.500 0.000 0.000 0.000
///  0.500 | 0.000 0.500 0.000 0.000
///  1.000 | 0.000 0.000 1.000 0.000
/// -------+------------------------
///        | 0.167 0.333 0.333 0.167
/// ```
///
/// Calls `f` exactly four times, each stage feeding the next.
pub fn rk4<F: Derivative>(y0: f64, t0: f64, h: f64, f: F) -> f64 {
    let k1 = f(t0, y0);
    let k2 = f(t0 + h / 2., y0 + h / 2. * k1);
    let k3 = f(t0 + h / 2., y0 + h / 2. * k2);
    let k4 = f(t0 + h, y0 + h * k3);

    y0 + h / 6. * (k1 + 2. * k2 + 2. * k3 + k4)
}

/// The one parameter family of fourth order Runge Kutta methods, `λ` selects
/// the member.
///
/// ```text
///  0   | 0
///  1/2 | 1/2
///  1/2 | 1/2 - 1/λ   1/λ
///  1   | 0           1 - λ/2   λ/2
/// -----+-------------------------------------
///      | 1/6         (4 - λ)/6 λ/6       1/6
/// ```
///
/// `lambda_order` should be one of 1, 3, 4 or 5 (2 is [`rk4`]) and is not
/// checked. Any other value gives a numerically meaningless result and `0`
/// divides by zero, which surfaces as NaN or infinity in the returned value.
/// Use [`Lambda`](crate::ode::types::Lambda) for a validated order.
pub fn rk4general<F: Derivative>(y0: f64, t0: f64, h: f64, lambda_order: i32, f: F) -> f64 {
    let lambda = f64::from(lambda_order);

    let k1 = f(t0, y0);
    let k2 = f(t0 + h / 2., y0 + h / 2. * k1);
    let k3 = f(t0 + h / 2., y0 + (0.5 - 1. / lambda) * k1 * h + 1. / lambda * k2 * h);
    let k4 = f(t0 + h, y0 + (1. - lambda / 2.) * k2 * h + lambda / 2. * k3 * h);

    y0 + h / 6. * (k1 + (4. - lambda) * k2 + lambda * k3 + k4)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use std::cell::RefCell;

    const CONSTANTS: [(f64, f64, f64); 5] = [
        (1., 0.1, 2.),
        (-3.5, 0.25, 0.5),
        (0., 1., -7.),
        (10., -0.5, 3.),
        (2.5, 1e-3, 123.456),
    ];

    fn growth(_t: f64, y: f64) -> f64 {
        y
    }

    #[test]
    fn euler_constant_derivative_is_exact() {
        for (y0, h, c) in CONSTANTS.iter().copied() {
            assert_eq!(y0 + h * c, euler(y0, 0.3, h, |_, _| c));
        }
    }

    #[test]
    fn rk4_constant_derivative() {
        for (y0, h, c) in CONSTANTS.iter().copied() {
            assert_abs_diff_eq!(y0 + h * c, rk4(y0, 0.3, h, |_, _| c), epsilon = 1e-12);
        }
    }

    #[test]
    fn rk4general_constant_derivative() {
        for order in [1, 3, 4, 5] {
            for (y0, h, c) in CONSTANTS.iter().copied() {
                assert_abs_diff_eq!(
                    y0 + h * c,
                    rk4general(y0, 0.3, h, order, |_, _| c),
                    epsilon = 1e-12
                );
            }
        }
    }

    #[test]
    fn single_step_examples() {
        assert_eq!(2., euler(1., 0., 1., growth));
        assert_abs_diff_eq!(2.708_333_333_333_333, rk4(1., 0., 1., growth), epsilon = 1e-12);
    }

    #[test]
    fn convergence_order() {
        let error = |h: f64, step: &dyn Fn(f64) -> f64| (h.exp() - step(h)).abs();
        let by_euler = |h: f64| euler(1., 0., h, growth);
        let by_rk4 = |h: f64| rk4(1., 0., h, growth);

        let euler_ratio = error(0.1, &by_euler) / error(0.05, &by_euler);
        // local error ~ h^2
        assert!((3.5..4.5).contains(&euler_ratio), "{}", euler_ratio);

        let rk4_ratio = error(0.1, &by_rk4) / error(0.05, &by_rk4);
        // local error ~ h^5
        assert!((28.0..36.0).contains(&rk4_ratio), "{}", rk4_ratio);
    }

    #[test]
    fn rk4general_matches_classical() {
        let classical = rk4(1., 0., 0.1, growth);
        for order in [1, 3, 4, 5] {
            assert_abs_diff_eq!(
                classical,
                rk4general(1., 0., 0.1, order, growth),
                epsilon = 1e-6
            );
        }
        assert_abs_diff_eq!(0.1f64.exp(), classical, epsilon = 1e-6);
    }

    #[test]
    fn lambda_two_is_classical() {
        let f = |t: f64, y: f64| t.sin() - 0.3 * y;
        assert_abs_diff_eq!(
            rk4(0.7, 0.2, 0.05, f),
            rk4general(0.7, 0.2, 0.05, 2, f),
            epsilon = 1e-14
        );
    }

    #[test]
    fn euler_evaluates_once() {
        let calls = RefCell::new(Vec::new());
        let f = |t: f64, y: f64| {
            calls.borrow_mut().push((t, y));
            y
        };
        euler(1., 0.5, 0.25, &f);
        assert_eq!(vec![(0.5, 1.)], calls.into_inner());
    }

    #[test]
    fn rk4_evaluation_order() {
        let calls = RefCell::new(Vec::new());
        let f = |t: f64, y: f64| {
            calls.borrow_mut().push((t, y));
            y
        };
        rk4(1., 0., 1., &f);
        assert_eq!(
            vec![(0., 1.), (0.5, 1.5), (0.5, 1.75), (1., 2.75)],
            calls.into_inner()
        );
    }

    #[test]
    fn rk4general_evaluation_order() {
        let calls = RefCell::new(Vec::new());
        let f = |t: f64, y: f64| {
            calls.borrow_mut().push((t, y));
            y
        };
        let y1 = rk4general(1., 0., 1., 4, &f);
        assert_eq!(
            vec![(0., 1.), (0.5, 1.5), (0.5, 1.625), (1., 2.75)],
            calls.into_inner()
        );
        assert_abs_diff_eq!(2.708_333_333_333_333, y1, epsilon = 1e-12);

        // negative weight on k1 in the third stage
        let calls = RefCell::new(Vec::new());
        let f = |t: f64, y: f64| {
            calls.borrow_mut().push((t, y));
            y
        };
        let y1 = rk4general(1., 0., 1., 1, &f);
        assert_eq!(
            vec![(0., 1.), (0.5, 1.5), (0.5, 2.), (1., 2.75)],
            calls.into_inner()
        );
        assert_abs_diff_eq!(2.708_333_333_333_333, y1, epsilon = 1e-12);

        for order in [3, 5] {
            let count = RefCell::new(0);
            rk4general(1., 0., 0.1, order, |_, y| {
                *count.borrow_mut() += 1;
                y
            });
            assert_eq!(4, count.into_inner());
        }
    }

    #[test]
    fn deterministic() {
        let f = |t: f64, y: f64| (t * y).sin() + y.cbrt();
        for (y0, h) in [(0.3, 0.01), (-1.2, -0.2), (5., 1.5)] {
            assert_eq!(euler(y0, 0.1, h, f).to_bits(), euler(y0, 0.1, h, f).to_bits());
            assert_eq!(rk4(y0, 0.1, h, f).to_bits(), rk4(y0, 0.1, h, f).to_bits());
            for order in [1, 3, 4, 5] {
                assert_eq!(
                    rk4general(y0, 0.1, h, order, f).to_bits(),
                    rk4general(y0, 0.1, h, order, f).to_bits()
                );
            }
        }
    }

    #[test]
    fn backward_step() {
        assert_abs_diff_eq!((-0.1f64).exp(), rk4(1., 0., -0.1, growth), epsilon = 1e-6);
        assert_abs_diff_eq!(1., rk4((-0.1f64).exp(), -0.1, 0.1, growth), epsilon = 1e-6);
    }

    #[test]
    fn non_finite_propagates() {
        assert!(euler(1., 0., 0.1, |_, _| f64::NAN).is_nan());
        assert_eq!(f64::INFINITY, euler(1., 0., 0.1, |_, _| f64::INFINITY));
        assert!(rk4(1., 0., 0.1, |_, _| f64::NAN).is_nan());
        assert!(rk4(f64::NAN, 0., 0.1, growth).is_nan());
    }

    #[test]
    fn zero_lambda_is_nan() {
        assert!(rk4general(1., 0., 0.1, 0, growth).is_nan());
    }
}
