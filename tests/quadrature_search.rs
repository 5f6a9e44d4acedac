use RustedGaussTaylor::Utils::report::{error_table, quadrature_rows, search_report};
use RustedGaussTaylor::numerical::gauss_legendre::{QuadratureError, gauss_integrate, rescaled_nodes_weights};
use RustedGaussTaylor::numerical::integrand::{exact_integral, phi};
use RustedGaussTaylor::numerical::quadrature_task::QuadratureTask;
use RustedGaussTaylor::numerical::taylor_search::{SearchOutcome, TaylorSearch};
use RustedGaussTaylor::symbolic::taylor_series::taylor_integrand_values;
use approx::assert_relative_eq;
use nalgebra::DVector;

#[test]
fn three_point_rule_on_default_interval() {
    let task = QuadratureTask::default();
    let rule = rescaled_nodes_weights(task.a, task.b, 3).unwrap();
    assert_relative_eq!(rule.nodes()[0], 1.11270167, epsilon = 1e-8);
    assert_relative_eq!(rule.nodes()[1], 2.0, epsilon = 1e-14);
    assert_relative_eq!(rule.nodes()[2], 2.88729833, epsilon = 1e-8);
    assert_relative_eq!(rule.weights()[1], 8.0 / 9.0, epsilon = 1e-12);
}

#[test]
fn quadrature_of_phi_approaches_symbolic_value() {
    let exact = exact_integral(1.0, 3.0).unwrap();
    assert_relative_eq!(exact, 317.34424667, epsilon = 1e-8);
    let n7 = gauss_integrate(phi, 1.0, 3.0, 7).unwrap();
    assert!((n7 - exact).abs() < 1e-8);
    let rows = quadrature_rows(1.0, 3.0, 2..=6, exact).unwrap();
    assert!(rows.windows(2).all(|w| w[1].error < w[0].error));
    assert!(error_table(&rows, exact).contains("317.34424667"));
}

#[test]
fn taylor_values_of_degree_four() {
    let (values, expr) = taylor_integrand_values(&DVector::from_vec(vec![1.0, 2.0]), 4);
    assert_relative_eq!(values[0], 1.0 / 3.0, epsilon = 1e-14);
    assert_relative_eq!(values[1], 272.0 / 3.0, epsilon = 1e-12);
    let f = expr.lambdify1D();
    assert_relative_eq!(f(2.0), 272.0 / 3.0, epsilon = 1e-12);
}

#[test]
fn invalid_arguments_are_rejected() {
    assert_eq!(
        rescaled_nodes_weights(1.0, 3.0, 0),
        Err(QuadratureError::NonPositiveNodeCount(0))
    );
    assert!(rescaled_nodes_weights(3.0, 3.0, 2).is_err());
    let mut search = TaylorSearch::new();
    search.set_loglevel(Some("off".to_string()));
    search.set_interval(3.0, 1.0);
    assert!(search.solve().is_err());
}

#[test]
fn default_search_finds_degree_two_with_four_nodes() {
    let mut task = QuadratureTask::default();
    task.set_loglevel(Some("off".to_string()));
    let tolerance = task.tolerance;
    let mut search = TaylorSearch::from_task(task);
    let outcome = search.solve().unwrap();
    let SearchOutcome::Found(hit) = &outcome else {
        panic!("expected a hit, got {:?}", outcome);
    };
    assert_eq!((hit.degree, hit.n), (2, 4));
    assert_eq!(hit.error, 0.0);
    assert_eq!(hit.reference, 1906.0 / 7.0);
    assert_relative_eq!(hit.quadrature, 272.2857142857143, epsilon = 1e-12);
    assert_eq!(search.trace().len(), 3);
    assert!(search_report(&outcome, tolerance).contains("t^6 - 2*t^3"));
    assert_eq!(search.get_result(), Some(outcome.clone()));
}
