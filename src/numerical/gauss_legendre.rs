//! Gauss-Legendre nodes and weights rescaled to a finite interval [a, b].
//!
//! The standard rule on [-1, 1] comes from the `gauss-quad` crate; it is
//! moved to [a, b] by the affine map
//! x -> (b - a)/2 * x + (a + b)/2,  w -> (b - a)/2 * w.
//! An N-point rule integrates polynomials of degree <= 2N - 1 exactly.
//!
//! # Example
//! ```
//! use RustedGaussTaylor::numerical::gauss_legendre::{rescaled_nodes_weights, gauss_integrate};
//! let rule = rescaled_nodes_weights(1.0, 3.0, 3).unwrap();
//! println!("nodes {:?} weights {:?}", rule.nodes(), rule.weights());
//! let integral = gauss_integrate(|t| t * t, 1.0, 3.0, 2).unwrap();
//! assert!((integral - 26.0 / 3.0).abs() < 1e-12);
//! ```
use gauss_quad::GaussLegendre;
use itertools::Itertools;
use log::debug;
use nalgebra::DVector;
use std::fmt;

/// Error types for building a quadrature rule
#[derive(Debug, Clone, PartialEq)]
pub enum QuadratureError {
    /// the number of nodes must be a positive integer
    NonPositiveNodeCount(i64),
    /// the lower bound must be strictly below the upper bound, both finite
    InvalidInterval { a: f64, b: f64 },
    /// the underlying Gauss-Legendre table could not be built
    RuleConstruction(String),
}

impl fmt::Display for QuadratureError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            QuadratureError::NonPositiveNodeCount(n) => {
                write!(f, "number of nodes must be a positive integer, got {}", n)
            }
            QuadratureError::InvalidInterval { a, b } => {
                write!(f, "lower bound a = {} must be less than upper bound b = {}", a, b)
            }
            QuadratureError::RuleConstruction(msg) => {
                write!(f, "failed to create Gauss-Legendre quadrature: {}", msg)
            }
        }
    }
}

impl std::error::Error for QuadratureError {}

/// N nodes and weights valid for one interval. Nodes are ascending.
#[derive(Debug, Clone, PartialEq)]
pub struct QuadratureRule {
    a: f64,
    b: f64,
    nodes: DVector<f64>,
    weights: DVector<f64>,
}

impl QuadratureRule {
    pub fn nodes(&self) -> &DVector<f64> {
        &self.nodes
    }

    pub fn weights(&self) -> &DVector<f64> {
        &self.weights
    }

    pub fn interval(&self) -> (f64, f64) {
        (self.a, self.b)
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Σ wᵢ f(xᵢ) for a pointwise integrand.
    pub fn integrate<F>(&self, f: F) -> f64
    where
        F: Fn(f64) -> f64,
    {
        self.nodes
            .iter()
            .zip(self.weights.iter())
            .map(|(x, w)| w * f(*x))
            .sum()
    }

    /// Σ wᵢ f(x)ᵢ for an integrand evaluated on the whole node vector at once.
    pub fn integrate_vectorized<F>(&self, f: F) -> f64
    where
        F: Fn(&DVector<f64>) -> DVector<f64>,
    {
        self.weights.dot(&f(&self.nodes))
    }
}

/// Nodes and weights on [-1, 1], ascending in the node.
fn standard_nodes_weights(n: usize) -> Result<(Vec<f64>, Vec<f64>), QuadratureError> {
    if n == 1 {
        // midpoint rule, below the minimal degree gauss-quad accepts
        return Ok((vec![0.0], vec![2.0]));
    }
    let rule = GaussLegendre::new(n)
        .map_err(|e| QuadratureError::RuleConstruction(format!("{:?}", e)))?;
    let (nodes, weights) = rule
        .into_node_weight_pairs()
        .into_iter()
        .sorted_by(|lhs, rhs| lhs.0.total_cmp(&rhs.0))
        .unzip();
    Ok((nodes, weights))
}

/// Gauss-Legendre rule with `n` nodes rescaled to [a, b].
///
/// Fails when n <= 0 or a >= b (or a bound is not finite).
pub fn rescaled_nodes_weights(a: f64, b: f64, n: i64) -> Result<QuadratureRule, QuadratureError> {
    if n <= 0 {
        return Err(QuadratureError::NonPositiveNodeCount(n));
    }
    if !(a.is_finite() && b.is_finite() && a < b) {
        return Err(QuadratureError::InvalidInterval { a, b });
    }
    let (nodes_std, weights_std) = standard_nodes_weights(n as usize)?;
    let half_length = 0.5 * (b - a);
    let midpoint = 0.5 * (b + a);
    let nodes = DVector::from_vec(nodes_std).map(|x| half_length * x + midpoint);
    let weights = DVector::from_vec(weights_std).map(|w| half_length * w);
    debug!("rescaled {}-point rule to [{}, {}]", n, a, b);
    Ok(QuadratureRule {
        a,
        b,
        nodes,
        weights,
    })
}

/// Gauss-Legendre approximation of ∫_a^b f(t) dt with `n` nodes.
pub fn gauss_integrate<F>(f: F, a: f64, b: f64, n: i64) -> Result<f64, QuadratureError>
where
    F: Fn(f64) -> f64,
{
    Ok(rescaled_nodes_weights(a, b, n)?.integrate(f))
}

/// Same as `gauss_integrate` for an integrand that works on node vectors.
pub fn gauss_integrate_vectorized<F>(f: F, a: f64, b: f64, n: i64) -> Result<f64, QuadratureError>
where
    F: Fn(&DVector<f64>) -> DVector<f64>,
{
    Ok(rescaled_nodes_weights(a, b, n)?.integrate_vectorized(f))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::{assert_abs_diff_eq, assert_relative_eq};

    #[test]
    fn test_three_point_rule_on_1_3() {
        let rule = rescaled_nodes_weights(1.0, 3.0, 3).unwrap();
        let offset = (0.6f64).sqrt();
        let expected_nodes = [2.0 - offset, 2.0, 2.0 + offset];
        let expected_weights = [5.0 / 9.0, 8.0 / 9.0, 5.0 / 9.0];
        assert_eq!(rule.len(), 3);
        for i in 0..3 {
            assert_abs_diff_eq!(rule.nodes()[i], expected_nodes[i], epsilon = 1e-12);
            assert_abs_diff_eq!(rule.weights()[i], expected_weights[i], epsilon = 1e-12);
        }
        assert_abs_diff_eq!(rule.nodes()[0], 1.11270167, epsilon = 1e-8);
        assert_abs_diff_eq!(rule.nodes()[2], 2.88729833, epsilon = 1e-8);
    }

    #[test]
    fn test_weights_sum_to_interval_length() {
        for (a, b) in [(1.0, 3.0), (-2.5, 0.5), (0.0, 1e-3), (-100.0, 250.0)] {
            for n in 1..=30 {
                let rule = rescaled_nodes_weights(a, b, n).unwrap();
                assert_relative_eq!(rule.weights().sum(), b - a, epsilon = 1e-12, max_relative = 1e-12);
            }
        }
    }

    #[test]
    fn test_nodes_inside_interval_and_ascending() {
        for (a, b) in [(1.0, 3.0), (-7.0, -6.0), (0.0, 10.0)] {
            for n in 1..=30 {
                let rule = rescaled_nodes_weights(a, b, n).unwrap();
                assert_eq!(rule.interval(), (a, b));
                assert!(rule.nodes().iter().all(|x| *x >= a && *x <= b));
                assert!(rule.nodes().as_slice().windows(2).all(|w| w[0] < w[1]));
                assert!(rule.weights().iter().all(|w| *w > 0.0));
            }
        }
    }

    #[test]
    fn test_single_node_is_midpoint_rule() {
        let rule = rescaled_nodes_weights(1.0, 3.0, 1).unwrap();
        assert_eq!(rule.nodes()[0], 2.0);
        assert_eq!(rule.weights()[0], 2.0);
    }

    #[test]
    fn test_invalid_arguments() {
        assert_eq!(
            rescaled_nodes_weights(1.0, 3.0, 0),
            Err(QuadratureError::NonPositiveNodeCount(0))
        );
        assert_eq!(
            rescaled_nodes_weights(1.0, 3.0, -4),
            Err(QuadratureError::NonPositiveNodeCount(-4))
        );
        assert_eq!(
            rescaled_nodes_weights(3.0, 1.0, 3),
            Err(QuadratureError::InvalidInterval { a: 3.0, b: 1.0 })
        );
        assert!(rescaled_nodes_weights(2.0, 2.0, 3).is_err());
        assert!(rescaled_nodes_weights(f64::NAN, 2.0, 3).is_err());
        assert!(gauss_integrate(|t| t, 1.0, 3.0, 0).is_err());
    }

    #[test]
    fn test_error_messages() {
        let err = QuadratureError::NonPositiveNodeCount(0);
        assert_eq!(err.to_string(), "number of nodes must be a positive integer, got 0");
        let err = QuadratureError::InvalidInterval { a: 3.0, b: 1.0 };
        assert!(err.to_string().contains("must be less than"));
    }

    #[test]
    fn test_polynomial_exactness_up_to_2n_minus_1() {
        // ∫_1^3 t^k dt = (3^(k+1) - 1)/(k+1)
        for n in 1..=8i64 {
            for k in 0..(2 * n) as i32 {
                let exact = (3f64.powi(k + 1) - 1.0) / (k + 1) as f64;
                let approx = gauss_integrate(|t| t.powi(k), 1.0, 3.0, n).unwrap();
                assert_relative_eq!(approx, exact, max_relative = 1e-12);
            }
        }
    }

    #[test]
    fn test_vectorized_and_pointwise_agree() {
        let pointwise = gauss_integrate(|t| t.exp(), 0.0, 1.0, 6).unwrap();
        let vectorized = gauss_integrate_vectorized(|x| x.map(|t| t.exp()), 0.0, 1.0, 6).unwrap();
        assert_relative_eq!(pointwise, vectorized, epsilon = 1e-14);
        assert_relative_eq!(pointwise, std::f64::consts::E - 1.0, epsilon = 1e-12);
    }
}
