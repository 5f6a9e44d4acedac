//! The integrand phi(t) = t^6 - t^2 * sin(2t), numerically and symbolically.
use crate::symbolic::symbolic_engine::Expr;
use crate::symbolic::taylor_series::{LEADING_POWER, SIN_FREQUENCY, SINE_FACTOR_POWER, VARIABLE};
use nalgebra::DVector;

/// phi(t) = t^6 - t^2 sin(2t)
pub fn phi(t: f64) -> f64 {
    t.powi(LEADING_POWER as i32) - t.powi(SINE_FACTOR_POWER as i32) * (SIN_FREQUENCY as f64 * t).sin()
}

/// phi applied elementwise.
pub fn phi_vectorized(t: &DVector<f64>) -> DVector<f64> {
    t.map(phi)
}

/// phi as a symbolic expression in `t`.
pub fn phi_expr() -> Expr {
    let t = Expr::Var(VARIABLE.to_string());
    Expr::monomial(VARIABLE, LEADING_POWER as u32)
        - Expr::monomial(VARIABLE, SINE_FACTOR_POWER as u32) * (Expr::Const(SIN_FREQUENCY as f64) * t).sin_()
}

/// ∫_a^b phi(t) dt from the symbolic antiderivative.
pub fn exact_integral(a: f64, b: f64) -> Result<f64, String> {
    phi_expr().definite_integrate(VARIABLE, a, b)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::numerical::gauss_legendre::{gauss_integrate, gauss_integrate_vectorized};
    use approx::assert_relative_eq;

    const EXACT_ON_1_3: f64 = 317.3442466738263;

    #[test]
    fn test_phi_values() {
        assert_relative_eq!(phi(1.0), 1.0 - (2.0f64).sin(), epsilon = 1e-15);
        assert_relative_eq!(phi(2.0), 67.02721, epsilon = 1e-5);
        let values = phi_vectorized(&DVector::from_vec(vec![1.0, 2.0]));
        assert_relative_eq!(values[0], 0.09070257, epsilon = 1e-8);
        assert_relative_eq!(values[1], phi(2.0), epsilon = 1e-15);
    }

    #[test]
    fn test_phi_expr_matches_phi() {
        let f = phi_expr().lambdify1D();
        for t in [0.0, 1.0, 1.7, 2.5, 3.0] {
            assert_relative_eq!(f(t), phi(t), epsilon = 1e-12);
        }
    }

    #[test]
    fn test_exact_integral_on_1_3() {
        assert_relative_eq!(exact_integral(1.0, 3.0).unwrap(), EXACT_ON_1_3, epsilon = 1e-10);
    }

    #[test]
    fn test_quadrature_converges_to_exact_integral() {
        let exact = exact_integral(1.0, 3.0).unwrap();
        let errors: Vec<f64> = (2..=7)
            .map(|n| (gauss_integrate(phi, 1.0, 3.0, n).unwrap() - exact).abs())
            .collect();
        assert!(errors.windows(2).all(|w| w[1] < w[0]));
        assert!(errors[3] < 1e-4); // N = 5
        assert!(errors[5] < 1e-8); // N = 7
    }

    #[test]
    fn test_vectorized_integrand_in_quadrature() {
        let pointwise = gauss_integrate(phi, 1.0, 3.0, 10).unwrap();
        let vectorized = gauss_integrate_vectorized(phi_vectorized, 1.0, 3.0, 10).unwrap();
        assert_relative_eq!(pointwise, vectorized, epsilon = 1e-12);
        assert_relative_eq!(pointwise, EXACT_ON_1_3, epsilon = 1e-9);
    }
}
