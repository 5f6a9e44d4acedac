//! Univariate polynomials with exact rational coefficients.
//!
//! Taylor truncations of sin(c*t) have coefficients of the form c^k/k!, and the
//! truncated integrands built from them are polynomials. Keeping the
//! coefficients as `BigRational` makes the antiderivative and the definite
//! integral over rational bounds exact; the `f64` view of the coefficients is
//! cached for fast evaluation at quadrature nodes.

use crate::symbolic::symbolic_engine::Expr;
use nalgebra::DVector;
use num::{BigInt, BigRational, One, Signed, ToPrimitive, Zero};
use std::fmt;

#[derive(Clone, Debug, PartialEq)]
pub struct Polynomial {
    /// coefficient of t^i at index i, no trailing zeros
    coeffs: Vec<BigRational>,
    coeffs_f64: Vec<f64>,
}

/// Exact rational from an integer.
pub fn rational(n: i64) -> BigRational {
    BigRational::from_integer(BigInt::from(n))
}

/// Exact rational n/d. Panics only if d == 0, which is a programming error.
pub fn ratio(n: i64, d: i64) -> BigRational {
    BigRational::new(BigInt::from(n), BigInt::from(d))
}

fn to_f64(value: &BigRational) -> f64 {
    // a BigRational always has a nearest f64 (possibly infinite)
    value.to_f64().unwrap_or(f64::NAN)
}

impl Polynomial {
    pub fn from_coeffs(mut coeffs: Vec<BigRational>) -> Polynomial {
        while coeffs.last().is_some_and(|c| c.is_zero()) {
            coeffs.pop();
        }
        let coeffs_f64 = coeffs.iter().map(to_f64).collect();
        Polynomial { coeffs, coeffs_f64 }
    }

    pub fn zero() -> Polynomial {
        Polynomial::from_coeffs(Vec::new())
    }

    /// coeff * t^power
    pub fn monomial(coeff: BigRational, power: usize) -> Polynomial {
        let mut coeffs = vec![BigRational::zero(); power + 1];
        coeffs[power] = coeff;
        Polynomial::from_coeffs(coeffs)
    }

    pub fn is_zero(&self) -> bool {
        self.coeffs.is_empty()
    }

    /// Highest power with a nonzero coefficient; `None` for the zero polynomial.
    pub fn degree(&self) -> Option<usize> {
        self.coeffs.len().checked_sub(1)
    }

    /// Coefficient of t^power (zero beyond the degree).
    pub fn coeff(&self, power: usize) -> BigRational {
        self.coeffs.get(power).cloned().unwrap_or_else(BigRational::zero)
    }

    /// Nonzero terms as (power, coefficient), ascending in power.
    pub fn terms(&self) -> impl Iterator<Item = (usize, &BigRational)> {
        self.coeffs.iter().enumerate().filter(|(_, c)| !c.is_zero())
    }

    pub fn add(&self, other: &Polynomial) -> Polynomial {
        let len = self.coeffs.len().max(other.coeffs.len());
        let coeffs = (0..len).map(|i| self.coeff(i) + other.coeff(i)).collect();
        Polynomial::from_coeffs(coeffs)
    }

    pub fn sub(&self, other: &Polynomial) -> Polynomial {
        let len = self.coeffs.len().max(other.coeffs.len());
        let coeffs = (0..len).map(|i| self.coeff(i) - other.coeff(i)).collect();
        Polynomial::from_coeffs(coeffs)
    }

    pub fn mul(&self, other: &Polynomial) -> Polynomial {
        if self.is_zero() || other.is_zero() {
            return Polynomial::zero();
        }
        let mut coeffs = vec![BigRational::zero(); self.coeffs.len() + other.coeffs.len() - 1];
        for (i, a) in self.terms() {
            for (j, b) in other.terms() {
                coeffs[i + j] += a * b;
            }
        }
        Polynomial::from_coeffs(coeffs)
    }

    /// Antiderivative with zero constant term: sum c_i t^(i+1)/(i+1).
    pub fn antiderivative(&self) -> Polynomial {
        let mut coeffs = vec![BigRational::zero(); self.coeffs.len() + 1];
        for (i, c) in self.terms() {
            coeffs[i + 1] = c / rational(i as i64 + 1);
        }
        Polynomial::from_coeffs(coeffs)
    }

    /// Exact value at a rational point (Horner).
    pub fn eval_exact(&self, x: &BigRational) -> BigRational {
        self.coeffs
            .iter()
            .rev()
            .fold(BigRational::zero(), |acc, c| acc * x + c)
    }

    /// Exact definite integral over [a, b].
    pub fn definite_integral_exact(&self, a: &BigRational, b: &BigRational) -> BigRational {
        let primitive = self.antiderivative();
        primitive.eval_exact(b) - primitive.eval_exact(a)
    }

    /// Floating point value at x (Horner on the cached f64 coefficients).
    pub fn eval(&self, x: f64) -> f64 {
        self.coeffs_f64.iter().rev().fold(0.0, |acc, c| acc * x + c)
    }

    pub fn eval_vectorized(&self, x: &DVector<f64>) -> DVector<f64> {
        x.map(|x_i| self.eval(x_i))
    }

    /// Symbolic form: sum of c * var^power terms, highest power first.
    pub fn to_expr(&self, var: &str) -> Expr {
        let mut terms = self.terms().collect::<Vec<_>>();
        terms.reverse();
        let mut iter = terms.into_iter();
        let Some((power, coeff)) = iter.next() else {
            return Expr::Const(0.0);
        };
        let mut expr = term_expr(coeff, power, var);
        for (power, coeff) in iter {
            if coeff.is_negative() {
                expr = expr - term_expr(&-coeff.clone(), power, var);
            } else {
                expr = expr + term_expr(coeff, power, var);
            }
        }
        expr
    }

    /// Human-readable form in `var`, e.g. `t^6 + 4/3*t^5 - 2*t^3`.
    pub fn to_pretty_string(&self, var: &str) -> String {
        if self.is_zero() {
            return "0".to_string();
        }
        let mut out = String::new();
        for (k, (power, coeff)) in self.terms().collect::<Vec<_>>().into_iter().rev().enumerate() {
            let magnitude = coeff.abs();
            if k == 0 {
                if coeff.is_negative() {
                    out.push('-');
                }
            } else if coeff.is_negative() {
                out.push_str(" - ");
            } else {
                out.push_str(" + ");
            }
            let monomial = match power {
                0 => String::new(),
                1 => var.to_string(),
                _ => format!("{}^{}", var, power),
            };
            if monomial.is_empty() {
                out.push_str(&magnitude.to_string());
            } else if magnitude.is_one() {
                out.push_str(&monomial);
            } else {
                out.push_str(&format!("{}*{}", magnitude, monomial));
            }
        }
        out
    }
}

fn term_expr(coeff: &BigRational, power: usize, var: &str) -> Expr {
    let monomial = Expr::monomial(var, power as u32);
    if coeff.is_one() {
        return monomial;
    }
    let numer = Expr::Const(to_f64(&BigRational::from_integer(coeff.numer().clone())));
    let scaled = if power == 0 { numer } else { numer * monomial };
    if coeff.denom().is_one() {
        scaled
    } else {
        scaled / Expr::Const(to_f64(&BigRational::from_integer(coeff.denom().clone())))
    }
}

impl fmt::Display for Polynomial {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.to_pretty_string("t"))
    }
}
