//! # Symbolic Engine Module
//!
//! Expression tree used to hold the integrands of this crate in symbolic form:
//! the exact integrand t^6 - t^2*sin(2t) and its Taylor-truncated polynomial
//! counterparts. The tree carries the operations these integrands need, plus
//! what symbolic integration by parts produces (cosines and quotients by
//! constants).
//!
//! ## Main Structures and Methods
//!
//! ### `Expr` Enum
//! - **Variables**: `Var(String)` - symbolic variables like "t"
//! - **Constants**: `Const(f64)` - numerical constants
//! - **Operations**: `Add`, `Sub`, `Mul`, `Div`, `Pow` - basic arithmetic
//! - **Functions**: `sin`, `cos`
//!
//! ### Key Methods
//! - `eval_expression(var, value)` - evaluate a single-variable expression
//! - `contains_variable(var)` - dependency check used by the integrator
//! - `lambdify1D()` - convert to an executable closure (see `symbolic_lambdify`)
//! - `integrate(var)` / `definite_integrate(var, a, b)` (see `symbolic_integration`)
//!
//! Trigonometric variants use lowercase names (`sin`, `cos`) the same way they
//! are written in formulas.

#![allow(non_camel_case_types)]

use std::fmt;

/// Core symbolic expression enum, an abstract syntax tree of boxed nodes.
///
/// # Examples
/// ```rust, ignore
/// use symbolic_engine::Expr;
/// let t = Expr::Var("t".to_string());
/// let expr = t.clone().pow(Expr::Const(6.0)) - t.clone().pow(Expr::Const(2.0)) * (Expr::Const(2.0) * t).sin_();
/// ```
#[derive(Clone, Debug, PartialEq)]
pub enum Expr {
    /// Symbolic variable with a name (e.g., "t")
    Var(String),
    /// Numerical constant value
    Const(f64),
    /// Addition operation: left + right
    Add(Box<Expr>, Box<Expr>),
    /// Subtraction operation: left - right
    Sub(Box<Expr>, Box<Expr>),
    /// Multiplication operation: left * right
    Mul(Box<Expr>, Box<Expr>),
    /// Division operation: left / right
    Div(Box<Expr>, Box<Expr>),
    /// Power operation: base ^ exponent
    Pow(Box<Expr>, Box<Expr>),
    /// Sine function: sin(x)
    sin(Box<Expr>),
    /// Cosine function: cos(x)
    cos(Box<Expr>),
}

/// Fully parenthesized printing, so that precedence never has to be guessed.
impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Expr::Var(name) => write!(f, "{}", name),
            Expr::Const(val) => write!(f, "{}", val),
            Expr::Add(lhs, rhs) => write!(f, "({} + {})", lhs, rhs),
            Expr::Sub(lhs, rhs) => write!(f, "({} - {})", lhs, rhs),
            Expr::Mul(lhs, rhs) => write!(f, "({} * {})", lhs, rhs),
            Expr::Div(lhs, rhs) => write!(f, "({} / {})", lhs, rhs),
            Expr::Pow(base, exp) => write!(f, "({} ^ {})", base, exp),
            Expr::sin(expr) => write!(f, "sin({})", expr),
            Expr::cos(expr) => write!(f, "cos({})", expr),
        }
    }
}

impl std::ops::Add for Expr {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Expr::Add(self.boxed(), rhs.boxed())
    }
}

impl std::ops::Sub for Expr {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        Expr::Sub(self.boxed(), rhs.boxed())
    }
}

impl std::ops::Mul for Expr {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self::Output {
        Expr::Mul(self.boxed(), rhs.boxed())
    }
}

impl std::ops::Div for Expr {
    type Output = Self;

    fn div(self, rhs: Self) -> Self::Output {
        Expr::Div(self.boxed(), rhs.boxed())
    }
}

impl std::ops::Neg for Expr {
    type Output = Self;

    fn neg(self) -> Self::Output {
        Expr::Mul(Box::new(Expr::Const(-1.0)), Box::new(self))
    }
}

impl Expr {
    /// BASIC FEATURES

    /// Evaluates an expression of (at most) one variable at `value`.
    ///
    /// Variables other than `var` are an error: the integrands of this crate
    /// are univariate and a stray symbol means the expression was built wrong.
    pub fn eval_expression(&self, var: &str, value: f64) -> Result<f64, String> {
        match self {
            Expr::Var(name) if name == var => Ok(value),
            Expr::Var(name) => Err(format!("free variable {} while evaluating in {}", name, var)),
            Expr::Const(val) => Ok(*val),
            Expr::Add(lhs, rhs) => Ok(lhs.eval_expression(var, value)? + rhs.eval_expression(var, value)?),
            Expr::Sub(lhs, rhs) => Ok(lhs.eval_expression(var, value)? - rhs.eval_expression(var, value)?),
            Expr::Mul(lhs, rhs) => Ok(lhs.eval_expression(var, value)? * rhs.eval_expression(var, value)?),
            Expr::Div(lhs, rhs) => Ok(lhs.eval_expression(var, value)? / rhs.eval_expression(var, value)?),
            Expr::Pow(base, exp) => {
                let base_val = base.eval_expression(var, value)?;
                let exp_val = exp.eval_expression(var, value)?;
                Ok(powf_or_powi(base_val, exp_val))
            }
            Expr::sin(expr) => Ok(expr.eval_expression(var, value)?.sin()),
            Expr::cos(expr) => Ok(expr.eval_expression(var, value)?.cos()),
        }
    }

    /// check if the expression contains a variable
    pub fn contains_variable(&self, var_name: &str) -> bool {
        match self {
            Expr::Var(name) => name == var_name,
            Expr::Const(_) => false,
            Expr::Add(left, right)
            | Expr::Sub(left, right)
            | Expr::Mul(left, right)
            | Expr::Div(left, right) => {
                left.contains_variable(var_name) || right.contains_variable(var_name)
            }
            Expr::Pow(base, exp) => {
                base.contains_variable(var_name) || exp.contains_variable(var_name)
            }
            Expr::sin(expr) | Expr::cos(expr) => expr.contains_variable(var_name),
        }
    }

    /// Convenience method to wrap expression in Box for recursive structures.
    pub fn boxed(self) -> Box<Self> {
        Box::new(self)
    }

    /// Creates power expression self^rhs.
    pub fn pow(self, rhs: Expr) -> Expr {
        Expr::Pow(self.boxed(), rhs.boxed())
    }

    /// Creates sin(self).
    pub fn sin_(self) -> Expr {
        Expr::sin(self.boxed())
    }

    /// Creates cos(self).
    pub fn cos_(self) -> Expr {
        Expr::cos(self.boxed())
    }

    /// var^n for an integer power, collapsing n = 0 and n = 1.
    pub fn monomial(var: &str, n: u32) -> Expr {
        match n {
            0 => Expr::Const(1.0),
            1 => Expr::Var(var.to_string()),
            _ => Expr::Var(var.to_string()).pow(Expr::Const(n as f64)),
        }
    }
}

/// Integer exponents go through `powi`: it is exact for small powers of
/// integers, which keeps polynomial values at integer bounds exact.
pub(crate) fn powf_or_powi(base: f64, exp: f64) -> f64 {
    if exp.fract() == 0.0 && exp.abs() <= i32::MAX as f64 {
        base.powi(exp as i32)
    } else {
        base.powf(exp)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn t() -> Expr {
        Expr::Var("t".to_string())
    }

    #[test]
    fn test_display_is_parenthesized() {
        let expr = t().pow(Expr::Const(2.0)) * (Expr::Const(2.0) * t()).sin_();
        assert_eq!(expr.to_string(), "((t ^ 2) * sin((2 * t)))");
    }

    #[test]
    fn test_eval_expression() {
        let expr = t().pow(Expr::Const(6.0)) - t().pow(Expr::Const(2.0)) * (Expr::Const(2.0) * t()).sin_();
        let value = expr.eval_expression("t", 2.0).unwrap();
        assert_relative_eq!(value, 64.0 - 4.0 * (4.0f64).sin(), epsilon = 1e-12);
    }

    #[test]
    fn test_eval_expression_rejects_free_variable() {
        let expr = t() + Expr::Var("y".to_string());
        assert!(expr.eval_expression("t", 1.0).is_err());
    }

    #[test]
    fn test_contains_variable() {
        let expr = t() * (t() + Expr::Const(1.0)).cos_();
        assert!(expr.contains_variable("t"));
        assert!(!expr.contains_variable("s"));
        assert!(!Expr::Const(2.0).sin_().contains_variable("t"));
    }

    #[test]
    fn test_monomial() {
        assert_eq!(Expr::monomial("t", 0), Expr::Const(1.0));
        assert_eq!(Expr::monomial("t", 1), t());
        assert_eq!(Expr::monomial("t", 3), t().pow(Expr::Const(3.0)));
    }
}
