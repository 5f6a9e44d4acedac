//! Console report of a quadrature study: per-N nodes and weights, the error
//! comparison table and the outcome of the Taylor degree search.
use crate::numerical::gauss_legendre::{QuadratureError, rescaled_nodes_weights};
use crate::numerical::integrand::phi_vectorized;
use crate::numerical::taylor_search::{SearchOutcome, SearchStep};
use nalgebra::DVector;
use std::ops::RangeInclusive;
use tabled::{builder::Builder, settings::Style};

/// One N of the demonstration table.
#[derive(Debug, Clone, PartialEq)]
pub struct NodeRow {
    pub n: i64,
    pub nodes: DVector<f64>,
    pub weights: DVector<f64>,
    pub integral: f64,
    /// |exact - integral|
    pub error: f64,
}

/// Gauss-Legendre integrals of phi on [a, b] for every N in `node_counts`.
pub fn quadrature_rows(
    a: f64,
    b: f64,
    node_counts: RangeInclusive<i64>,
    exact: f64,
) -> Result<Vec<NodeRow>, QuadratureError> {
    node_counts
        .map(|n| {
            let rule = rescaled_nodes_weights(a, b, n)?;
            let integral = rule.integrate_vectorized(phi_vectorized);
            Ok::<NodeRow, QuadratureError>(NodeRow {
                n,
                nodes: rule.nodes().clone(),
                weights: rule.weights().clone(),
                integral,
                error: (exact - integral).abs(),
            })
        })
        .collect()
}

/// Scientific notation with a signed two-digit exponent, e.g. `1.05e+01`.
pub fn format_sci(x: f64, precision: usize) -> String {
    let formatted = format!("{:.*e}", precision, x);
    match formatted.split_once('e') {
        Some((mantissa, exponent)) => match exponent.parse::<i32>() {
            Ok(exp) => format!(
                "{}e{}{:02}",
                mantissa,
                if exp < 0 { '-' } else { '+' },
                exp.abs()
            ),
            Err(_) => formatted,
        },
        // inf and NaN carry no exponent
        None => formatted,
    }
}

fn format_vector(v: &DVector<f64>) -> String {
    let entries: Vec<String> = v.iter().map(|x| format!("{:.8}", x)).collect();
    format!("[{}]", entries.join(", "))
}

/// Plain text block for one N: nodes, weights, integral and error.
pub fn node_block(row: &NodeRow) -> String {
    format!(
        "N = {}\n  nodes:    {}\n  weights:  {}\n  integral: {:.8}\n  error:    {}",
        row.n,
        format_vector(&row.nodes),
        format_vector(&row.weights),
        row.integral,
        format_sci(row.error, 2)
    )
}

/// N against the absolute error with respect to the symbolic solution.
pub fn error_table(rows: &[NodeRow], exact: f64) -> String {
    let mut builder = Builder::default();
    builder.push_record(["N", "integral", "exact", "abs. error"]);
    for row in rows {
        builder.push_record([
            row.n.to_string(),
            format!("{:.8}", row.integral),
            format!("{:.8}", exact),
            format_sci(row.error, 2),
        ]);
    }
    let mut table = builder.build();
    table.with(Style::modern_rounded());
    table.to_string()
}

/// Every (degree, N) the search evaluated.
pub fn trace_table(trace: &[SearchStep]) -> String {
    let mut builder = Builder::default();
    builder.push_record(["degree", "N", "quadrature", "reference", "error"]);
    for step in trace {
        builder.push_record([
            step.degree.to_string(),
            step.n.to_string(),
            format!("{:.12}", step.quadrature),
            format!("{:.12}", step.reference),
            format_sci(step.error, 2),
        ]);
    }
    let mut table = builder.build();
    table.with(Style::modern_rounded());
    table.to_string()
}

pub fn search_report(outcome: &SearchOutcome, tolerance: f64) -> String {
    match outcome {
        SearchOutcome::Found(hit) => {
            let mut builder = Builder::default();
            builder.push_record(["Taylor degree", "N", "error", "quadrature", "reference"]);
            builder.push_record([
                hit.degree.to_string(),
                hit.n.to_string(),
                format_sci(hit.error, 2),
                format!("{:.12}", hit.quadrature),
                format!("{:.12}", hit.reference),
            ]);
            let mut table = builder.build();
            table.with(Style::modern_rounded());
            format!(
                "error below {:e} reached with integrand {}\n{}",
                tolerance, hit.expression, table
            )
        }
        SearchOutcome::Exhausted { max_degree } => format!(
            "no Taylor degree up to {} reached an error below {:e}",
            max_degree, tolerance
        ),
    }
}
