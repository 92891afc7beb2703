//! Scalar root finders used by the code-check utilisation methods

use crate::error::{BeamError, BeamResult};

/// Outcome of a root-finding run.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Root {
    /// The root approximation.
    pub x: f64,
    /// Iterations used.
    pub iterations: usize,
    /// True if the secant method fell back to bisection.
    pub bisection_used: bool,
}

/// Find a root of `func` by bisection.
///
/// Guaranteed to converge if the guesses bracket a root; if several roots lie
/// inside the bracket any one of them may be returned. `max_iterations` of
/// `None` iterates until the bracket collapses within `tol`.
pub fn bisection<F>(
    func: F,
    mut x_low: f64,
    mut x_high: f64,
    tol: f64,
    max_iterations: Option<usize>,
) -> BeamResult<Root>
where
    F: Fn(f64) -> f64,
{
    if x_low == x_high {
        return Err(BeamError::SolverBracket);
    }

    let mut i = 0;
    let mut x_mid = (x_low + x_high) / 2.0;

    while (x_high - x_low).abs() > tol && x_low != x_high {
        i += 1;

        let y_low = func(x_low);
        let y_mid = func(x_mid);

        if y_low.signum() == func(x_high).signum() {
            return Err(BeamError::SolverBracket);
        }

        if y_low.signum() == y_mid.signum() {
            x_low = x_mid;
        } else {
            x_high = x_mid;
        }

        x_mid = (x_low + x_high) / 2.0;

        if let Some(max) = max_iterations {
            if i >= max {
                return Err(BeamError::SolverMaxIterations {
                    iterations: i,
                    root: x_mid,
                });
            }
        }
    }

    Ok(Root {
        x: (x_low + x_high) / 2.0,
        iterations: i,
        bisection_used: true,
    })
}

/// Find a root of `func` by the secant method.
///
/// Typically much faster than bisection and does not require bracketing
/// guesses, but convergence is not guaranteed and the root found may lie
/// outside the guess range. With `fallback` set, hitting the iteration limit
/// retries via [`bisection`] over the original guesses.
pub fn secant<F>(
    func: F,
    x_low: f64,
    x_high: f64,
    tol: f64,
    max_iterations: Option<usize>,
    fallback: bool,
) -> BeamResult<Root>
where
    F: Fn(f64) -> f64,
{
    let mut i = 0;
    let mut x_1 = x_low;
    let mut x_2 = x_high;

    while (x_2 - x_1).abs() > tol && x_1 != x_2 {
        i += 1;

        let y_1 = func(x_1);
        let y_2 = func(x_2);

        if y_2 == y_1 {
            // flat secant, cannot step any further
            if fallback {
                return bisection(func, x_low, x_high, tol, None);
            }
            return Err(BeamError::SolverMaxIterations {
                iterations: i,
                root: x_2,
            });
        }

        let x_3 = (x_1 * y_2 - x_2 * y_1) / (y_2 - y_1);

        x_1 = x_2;
        x_2 = x_3;

        if let Some(max) = max_iterations {
            if i >= max {
                if fallback {
                    return bisection(func, x_low, x_high, tol, None);
                }
                return Err(BeamError::SolverMaxIterations {
                    iterations: i,
                    root: x_2,
                });
            }
        }
    }

    Ok(Root {
        x: x_2,
        iterations: i,
        bisection_used: false,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_bisection_linear() {
        let root = bisection(|x| x - 3.0, 0.0, 10.0, 1e-10, None).unwrap();
        assert_relative_eq!(root.x, 3.0, epsilon = 1e-9);
    }

    #[test]
    fn test_bisection_requires_bracket() {
        let err = bisection(|x| x * x + 1.0, -1.0, 1.0, 1e-10, None).unwrap_err();
        assert!(matches!(err, BeamError::SolverBracket));
    }

    #[test]
    fn test_secant_quadratic() {
        let root = secant(|x| x * x - 2.0, 0.0, 2.0, 1e-12, Some(100), false).unwrap();
        assert_relative_eq!(root.x, 2.0_f64.sqrt(), epsilon = 1e-9);
        assert!(!root.bisection_used);
    }

    #[test]
    fn test_secant_fallback_to_bisection() {
        // cos(x) - x converges slowly from poor guesses with a tiny budget
        let root = secant(|x| x.cos() - x, 0.0, 1.0, 1e-10, Some(1), true).unwrap();
        assert!(root.bisection_used);
        assert_relative_eq!(root.x, 0.739_085_133_2, epsilon = 1e-8);
    }
}
