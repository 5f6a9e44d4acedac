/// # Gauss-Legendre quadrature
/// nodes and weights on [-1, 1] (from `gauss-quad`) rescaled to [a, b],
/// integration of pointwise and vectorized integrands
///# Example
/// ```
/// use RustedGaussTaylor::numerical::gauss_legendre::gauss_integrate;
/// use RustedGaussTaylor::numerical::integrand::{phi, exact_integral};
/// let approx = gauss_integrate(phi, 1.0, 3.0, 7).unwrap();
/// let exact = exact_integral(1.0, 3.0).unwrap();
/// assert!((approx - exact).abs() < 1e-8);
/// ```
pub mod gauss_legendre;
/// the integrand t^6 - t^2 sin(2t) and its symbolic integral
pub mod integrand;
/// inputs of a study with their defaults
pub mod quadrature_task;
/// search over Taylor degree and node count
pub mod taylor_search;
