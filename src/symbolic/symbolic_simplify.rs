use crate::symbolic::symbolic_engine::{Expr, powf_or_powi};

impl Expr {
    /// Algebraic clean-up applied after integration by parts.
    ///
    /// Folds constant subtrees and removes neutral elements
    /// (`x + 0`, `x * 1`, `0 * x`, `x ^ 1`, `x ^ 0`, `x / 1`). It does not
    /// reorder or collect terms.
    pub fn simplify_(&self) -> Expr {
        match self {
            Expr::Var(_) | Expr::Const(_) => self.clone(),
            Expr::Add(lhs, rhs) => {
                let lhs = lhs.simplify_();
                let rhs = rhs.simplify_();
                match (&lhs, &rhs) {
                    (Expr::Const(a), Expr::Const(b)) => Expr::Const(a + b),
                    (Expr::Const(0.0), _) => rhs,
                    (_, Expr::Const(0.0)) => lhs,
                    _ => Expr::Add(Box::new(lhs), Box::new(rhs)),
                }
            }
            Expr::Sub(lhs, rhs) => {
                let lhs = lhs.simplify_();
                let rhs = rhs.simplify_();
                match (&lhs, &rhs) {
                    (Expr::Const(a), Expr::Const(b)) => Expr::Const(a - b),
                    (_, Expr::Const(0.0)) => lhs,
                    (Expr::Const(0.0), _) => (-rhs).simplify_(),
                    _ if lhs == rhs => Expr::Const(0.0),
                    _ => Expr::Sub(Box::new(lhs), Box::new(rhs)),
                }
            }
            Expr::Mul(lhs, rhs) => {
                let lhs = lhs.simplify_();
                let rhs = rhs.simplify_();
                match (&lhs, &rhs) {
                    (Expr::Const(a), Expr::Const(b)) => Expr::Const(a * b),
                    (Expr::Const(0.0), _) | (_, Expr::Const(0.0)) => Expr::Const(0.0),
                    (Expr::Const(1.0), _) => rhs,
                    (_, Expr::Const(1.0)) => lhs,
                    // c1 * (c2 * x) = (c1 * c2) * x
                    (Expr::Const(c1), Expr::Mul(inner_lhs, inner_rhs)) => {
                        if let Expr::Const(c2) = inner_lhs.as_ref() {
                            Expr::Mul(Box::new(Expr::Const(c1 * c2)), inner_rhs.clone()).simplify_()
                        } else {
                            Expr::Mul(Box::new(lhs), Box::new(rhs))
                        }
                    }
                    // keep the constant factor in front
                    (_, Expr::Const(_)) => Expr::Mul(Box::new(rhs), Box::new(lhs)).simplify_(),
                    _ => Expr::Mul(Box::new(lhs), Box::new(rhs)),
                }
            }
            Expr::Div(lhs, rhs) => {
                let lhs = lhs.simplify_();
                let rhs = rhs.simplify_();
                match (&lhs, &rhs) {
                    (Expr::Const(a), Expr::Const(b)) if *b != 0.0 => Expr::Const(a / b),
                    (Expr::Const(0.0), _) => Expr::Const(0.0),
                    (_, Expr::Const(1.0)) => lhs,
                    _ => Expr::Div(Box::new(lhs), Box::new(rhs)),
                }
            }
            Expr::Pow(base, exp) => {
                let base = base.simplify_();
                let exp = exp.simplify_();
                match (&base, &exp) {
                    (Expr::Const(a), Expr::Const(b)) => Expr::Const(powf_or_powi(*a, *b)),
                    (_, Expr::Const(0.0)) => Expr::Const(1.0),
                    (_, Expr::Const(1.0)) => base,
                    _ => Expr::Pow(Box::new(base), Box::new(exp)),
                }
            }
            Expr::sin(expr) => match expr.simplify_() {
                Expr::Const(val) => Expr::Const(val.sin()),
                inner => Expr::sin(Box::new(inner)),
            },
            Expr::cos(expr) => match expr.simplify_() {
                Expr::Const(val) => Expr::Const(val.cos()),
                inner => Expr::cos(Box::new(inner)),
            },
        }
    }
}
