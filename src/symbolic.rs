/// # Symbolic engine
/// Expression tree for univariate integrands and the operations the
/// quadrature study needs on it: evaluation, simplification, conversion to a
/// Rust closure and symbolic integration.
///# Example
/// ```
/// use RustedGaussTaylor::symbolic::symbolic_engine::Expr;
/// let t = Expr::Var("t".to_string());
/// let phi = t.clone().pow(Expr::Const(6.0))
///     - t.clone().pow(Expr::Const(2.0)) * (Expr::Const(2.0) * t).sin_();
/// let f = phi.lambdify1D();
/// println!("phi(2) = {}", f(2.0));
/// let exact = phi.definite_integrate("t", 1.0, 3.0).unwrap();
/// assert!((exact - 317.3442466738).abs() < 1e-8);
/// ```
pub mod symbolic_engine;
/// integration of polynomials and x^n * sin(ax), x^n * cos(ax)
pub mod symbolic_integration;
/// turn a symbolic expression into a Rust closure
pub mod symbolic_lambdify;
pub mod symbolic_simplify;
/// ______________________________________________________________________________________________
/// # Exact polynomials
/// Univariate polynomials with `BigRational` coefficients: exact antiderivative
/// and definite integral, f64 evaluation, conversion to `Expr`.
pub mod polynomial;
/// # Taylor truncation
/// Maclaurin series of sin(2t) truncated at a given order and the resulting
/// polynomial integrand t^6 - t^2 * series.
///# Example
/// ```
/// use RustedGaussTaylor::symbolic::taylor_series::taylor_integrand_values;
/// use nalgebra::DVector;
/// let (values, expr) = taylor_integrand_values(&DVector::from_vec(vec![1.0, 2.0]), 4);
/// println!("{} -> {:?}", expr, values);
/// assert!((values[0] - 1.0 / 3.0).abs() < 1e-14);
/// ```
pub mod taylor_series;
