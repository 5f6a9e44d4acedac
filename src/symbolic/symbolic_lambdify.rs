use crate::symbolic::symbolic_engine::{Expr, powf_or_powi};

impl Expr {
    /// LAMBDIFICATION - Converting Symbolic Expressions to Executable Functions

    /// Converts a single-variable symbolic expression into an executable Rust closure.
    ///
    /// The closure mirrors the expression tree: each node becomes a small
    /// closure over the closures of its children, so nothing is parsed or
    /// matched at call time. Every `Var` is treated as the argument, so the
    /// expression must be univariate.
    ///
    /// # Examples
    /// ```rust, ignore
    /// let t = Expr::Var("t".to_string());
    /// let f = t.pow(Expr::Const(2.0)); // t^2
    /// let func = f.lambdify1D();
    /// assert_eq!(func(3.0), 9.0);
    /// ```
    pub fn lambdify1D(&self) -> Box<dyn Fn(f64) -> f64> {
        match self {
            Expr::Var(_) => Box::new(|x| x),
            Expr::Const(val) => {
                let val = *val;
                Box::new(move |_| val)
            }
            Expr::Add(lhs, rhs) => {
                let lhs_fn = lhs.lambdify1D();
                let rhs_fn = rhs.lambdify1D();
                Box::new(move |x| lhs_fn(x) + rhs_fn(x))
            }
            Expr::Sub(lhs, rhs) => {
                let lhs_fn = lhs.lambdify1D();
                let rhs_fn = rhs.lambdify1D();
                Box::new(move |x| lhs_fn(x) - rhs_fn(x))
            }
            Expr::Mul(lhs, rhs) => {
                let lhs_fn = lhs.lambdify1D();
                let rhs_fn = rhs.lambdify1D();
                Box::new(move |x| lhs_fn(x) * rhs_fn(x))
            }
            Expr::Div(lhs, rhs) => {
                let lhs_fn = lhs.lambdify1D();
                let rhs_fn = rhs.lambdify1D();
                Box::new(move |x| lhs_fn(x) / rhs_fn(x))
            }
            Expr::Pow(base, exp) => {
                let base_fn = base.lambdify1D();
                // constant exponents are resolved once, not per call
                if let Expr::Const(n) = exp.as_ref() {
                    let n = *n;
                    Box::new(move |x| powf_or_powi(base_fn(x), n))
                } else {
                    let exp_fn = exp.lambdify1D();
                    Box::new(move |x| powf_or_powi(base_fn(x), exp_fn(x)))
                }
            }
            Expr::sin(expr) => {
                let expr_fn = expr.lambdify1D();
                Box::new(move |x| expr_fn(x).sin())
            }
            Expr::cos(expr) => {
                let expr_fn = expr.lambdify1D();
                Box::new(move |x| expr_fn(x).cos())
            }
        } // end of match
    } // end of lambdify1D
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn t() -> Expr {
        Expr::Var("t".to_string())
    }

    #[test]
    fn test_lambdify1D_polynomial() {
        let f = (t().pow(Expr::Const(3.0)) - Expr::Const(2.0) * t()).lambdify1D();
        assert_eq!(f(2.0), 4.0);
        assert_eq!(f(-1.0), 1.0);
    }

    #[test]
    fn test_lambdify1D_matches_eval_expression() {
        let expr = t().pow(Expr::Const(6.0)) - t().pow(Expr::Const(2.0)) * (Expr::Const(2.0) * t()).sin_();
        let f = expr.lambdify1D();
        for x in [1.0, 1.5, 2.25, 3.0] {
            assert_relative_eq!(f(x), expr.eval_expression("t", x).unwrap(), epsilon = 1e-12);
        }
    }
}
