//! Taylor (Maclaurin) truncation of the transcendental part of
//! phi(t) = t^6 - t^2 * sin(2t).
//!
//! `TaylorIntegrand::new(degree)` replaces sin(2t) by its series truncated
//! after the t^degree term and keeps the resulting polynomial both as exact
//! rationals (used for the reference integral) and as an `Expr` (the
//! symbolic form returned to callers).

use crate::symbolic::polynomial::{Polynomial, rational};
use crate::symbolic::symbolic_engine::Expr;
use nalgebra::DVector;
use num::BigRational;

/// Frequency of the sine in the integrand: sin(SIN_FREQUENCY * t).
pub const SIN_FREQUENCY: i64 = 2;
/// Power of the leading monomial t^6.
pub const LEADING_POWER: usize = 6;
/// Power of the factor multiplying the sine, t^2.
pub const SINE_FACTOR_POWER: usize = 2;
pub const VARIABLE: &str = "t";

/// Maclaurin series of sin(c*t) keeping the terms of order <= `degree`.
///
/// Only odd powers appear; the coefficient of t^k is (-1)^((k-1)/2) c^k / k!.
/// Successive coefficients are built from each other:
/// a_k = -a_(k-2) * c^2 / ((k-1) k).
pub fn sin_maclaurin(c: &BigRational, degree: usize) -> Polynomial {
    let mut coeffs = vec![rational(0); degree + 1];
    let c_squared = c * c;
    let mut term = c.clone();
    let mut k = 1;
    while k <= degree {
        coeffs[k] = term.clone();
        let next = k + 2;
        term = -(term * &c_squared) / rational(((next - 1) * next) as i64);
        k = next;
    }
    Polynomial::from_coeffs(coeffs)
}

/// t^6 - t^2 * sin(2t) with sin(2t) truncated at `degree`.
#[derive(Clone, Debug)]
pub struct TaylorIntegrand {
    pub degree: usize,
    pub polynomial: Polynomial,
    pub expr: Expr,
}

impl TaylorIntegrand {
    pub fn new(degree: usize) -> TaylorIntegrand {
        let series = sin_maclaurin(&rational(SIN_FREQUENCY), degree);
        let leading = Polynomial::monomial(rational(1), LEADING_POWER);
        let factor = Polynomial::monomial(rational(1), SINE_FACTOR_POWER);
        let polynomial = leading.sub(&factor.mul(&series));
        let expr = polynomial.to_expr(VARIABLE);
        TaylorIntegrand {
            degree,
            polynomial,
            expr,
        }
    }

    pub fn eval_vectorized(&self, points: &DVector<f64>) -> DVector<f64> {
        self.polynomial.eval_vectorized(points)
    }

    /// Exact integral of the truncated polynomial over [a, b].
    pub fn exact_integral(&self, a: &BigRational, b: &BigRational) -> BigRational {
        self.polynomial.definite_integral_exact(a, b)
    }

    /// Readable form, e.g. `t^6 + 4/3*t^5 - 2*t^3` for degree 4.
    pub fn pretty(&self) -> String {
        self.polynomial.to_pretty_string(VARIABLE)
    }
}

/// Values of the Taylor-truncated integrand at `points` together with its
/// symbolic form. The symbolic form is the ground truth the quadrature search
/// compares against, not the transcendental integrand.
pub fn taylor_integrand_values(points: &DVector<f64>, degree: usize) -> (DVector<f64>, Expr) {
    let integrand = TaylorIntegrand::new(degree);
    (integrand.eval_vectorized(points), integrand.expr)
}
