use crate::symbolic::symbolic_engine::Expr;

impl Expr {
    /// SYMBOLIC INTEGRATION

    /// Indefinite integral with respect to `var` (without constant of integration).
    ///
    /// Covers what the integrands of this crate are made of: sums of
    /// constant multiples of `x^n`, `sin(a*x)`, `cos(a*x)` and the products
    /// `x^n * sin(a*x)`, `x^n * cos(a*x)` (integration by parts).
    pub fn integrate(&self, var: &str) -> Result<Expr, String> {
        let integral = match self {
            // ∫ c dx = c*x
            Expr::Const(c) => Expr::Const(*c) * Expr::Var(var.to_string()),

            // ∫ x dx = x²/2, ∫ y dx = y*x (if y ≠ x)
            Expr::Var(name) => {
                if name == var {
                    Expr::monomial(var, 2) / Expr::Const(2.0)
                } else {
                    Expr::Var(name.clone()) * Expr::Var(var.to_string())
                }
            }

            // ∫ (f ± g) dx = ∫ f dx ± ∫ g dx
            Expr::Add(lhs, rhs) => lhs.integrate(var)? + rhs.integrate(var)?,
            Expr::Sub(lhs, rhs) => lhs.integrate(var)? - rhs.integrate(var)?,

            Expr::Mul(lhs, rhs) => self.integrate_multiplication(lhs, rhs, var)?,

            // ∫ f(x)/c dx = (1/c) * ∫ f(x) dx
            Expr::Div(lhs, rhs) => {
                if rhs.contains_variable(var) {
                    return Err(format!("Cannot integrate division: {} / {}", lhs, rhs));
                }
                lhs.integrate(var)? / *rhs.clone()
            }

            Expr::Pow(base, exp) => self.integrate_power(base, exp, var)?,

            Expr::sin(_) | Expr::cos(_) => self.integrate_trig_times_power(0, self, var)?,
        };
        Ok(integral.simplify_())
    }

    fn integrate_multiplication(&self, lhs: &Expr, rhs: &Expr, var: &str) -> Result<Expr, String> {
        if !lhs.contains_variable(var) {
            return Ok(lhs.clone() * rhs.integrate(var)?);
        }
        if !rhs.contains_variable(var) {
            return Ok(rhs.clone() * lhs.integrate(var)?);
        }
        // x^n * sin(ax), x^n * cos(ax) in either order
        if let Some(n) = Self::extract_power(lhs, var) {
            if matches!(rhs, Expr::sin(_) | Expr::cos(_)) {
                return self.integrate_trig_times_power(n, rhs, var);
            }
        }
        if let Some(n) = Self::extract_power(rhs, var) {
            if matches!(lhs, Expr::sin(_) | Expr::cos(_)) {
                return self.integrate_trig_times_power(n, lhs, var);
            }
        }
        Err(format!("Cannot integrate product: {} * {}", lhs, rhs))
    }

    /// ∫ x^n dx = x^(n+1)/(n+1) for n ≠ -1
    fn integrate_power(&self, base: &Expr, exp: &Expr, var: &str) -> Result<Expr, String> {
        if !self.contains_variable(var) {
            return Ok(self.clone() * Expr::Var(var.to_string()));
        }
        if let (Expr::Var(x), Expr::Const(n)) = (base, exp) {
            if x == var && (*n + 1.0).abs() > f64::EPSILON {
                let new_exp = Expr::Const(n + 1.0);
                return Ok(Expr::Var(var.to_string()).pow(new_exp.clone()) / new_exp);
            }
        }
        Err(format!("Cannot integrate power: ({})^({})", base, exp))
    }

    /// n from x^n (x itself is n = 1); only non-negative integer powers.
    fn extract_power(expr: &Expr, var: &str) -> Option<u32> {
        match expr {
            Expr::Var(x) if x == var => Some(1),
            Expr::Pow(base, exp) => match (base.as_ref(), exp.as_ref()) {
                (Expr::Var(x), Expr::Const(power))
                    if x == var && power.fract() == 0.0 && *power >= 0.0 =>
                {
                    Some(*power as u32)
                }
                _ => None,
            },
            _ => None,
        }
    }

    /// a from a*x, x*a or x
    fn extract_linear_coefficient(expr: &Expr, var: &str) -> Option<f64> {
        match expr {
            Expr::Var(x) if x == var => Some(1.0),
            Expr::Mul(lhs, rhs) => match (lhs.as_ref(), rhs.as_ref()) {
                (Expr::Const(a), Expr::Var(x)) | (Expr::Var(x), Expr::Const(a)) if x == var => {
                    Some(*a)
                }
                _ => None,
            },
            _ => None,
        }
    }

    /// ∫ x^n * sin(ax) dx and ∫ x^n * cos(ax) dx by repeated integration by parts:
    /// ∫ x^n sin(ax) dx = -x^n cos(ax)/a + (n/a) ∫ x^(n-1) cos(ax) dx
    /// ∫ x^n cos(ax) dx =  x^n sin(ax)/a - (n/a) ∫ x^(n-1) sin(ax) dx
    fn integrate_trig_times_power(&self, n: u32, trig: &Expr, var: &str) -> Result<Expr, String> {
        let (is_sin, arg) = match trig {
            Expr::sin(arg) => (true, arg.as_ref()),
            Expr::cos(arg) => (false, arg.as_ref()),
            _ => return Err(format!("Expected sin or cos, got {}", trig)),
        };
        let a = Self::extract_linear_coefficient(arg, var)
            .ok_or_else(|| format!("Cannot integrate trigonometric function of {}", arg))?;
        if a == 0.0 {
            let constant = if is_sin { Expr::Const(0.0) } else { Expr::Const(1.0) };
            return Ok(constant * Expr::monomial(var, n + 1) / Expr::Const((n + 1) as f64));
        }
        Ok(Self::trig_power_recursive(n, a, is_sin, var))
    }

    fn trig_power_recursive(n: u32, a: f64, is_sin: bool, var: &str) -> Expr {
        let ax = Expr::Const(a) * Expr::Var(var.to_string());
        let (first, second_sign) = if is_sin {
            (-(Expr::monomial(var, n) * ax.cos_()) / Expr::Const(a), 1.0)
        } else {
            ((Expr::monomial(var, n) * ax.sin_()) / Expr::Const(a), -1.0)
        };
        if n == 0 {
            return first;
        }
        let rest = Self::trig_power_recursive(n - 1, a, !is_sin, var);
        first + Expr::Const(second_sign * n as f64 / a) * rest
    }

    /// Definite integral from the antiderivative: F(upper) - F(lower).
    pub fn definite_integrate(&self, var: &str, lower: f64, upper: f64) -> Result<f64, String> {
        let indefinite = self.integrate(var)?;
        let upper_val = indefinite.eval_expression(var, upper)?;
        let lower_val = indefinite.eval_expression(var, lower)?;
        Ok(upper_val - lower_val)
    }
}
