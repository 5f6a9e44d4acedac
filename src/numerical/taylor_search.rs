//! Search for the smallest Taylor degree and node count whose Gauss-Legendre
//! integral of the truncated integrand matches its exact integral.
//!
//! For every degree (starting at 2) the sine in t^6 - t^2 sin(2t) is replaced
//! by its Maclaurin series truncated at that degree. The resulting polynomial
//! is integrated exactly (rational arithmetic) and with N = 2..=degree+2
//! Gauss-Legendre nodes. The first (degree, N) whose absolute difference is
//! below the tolerance ends the search; running past the maximal degree ends
//! it as well, without a hit. The inner bound degree + 2 is a heuristic and is
//! kept as is so that the visited (degree, N) pairs are reproducible.
//!
//! # Example
//! ```
//! use RustedGaussTaylor::numerical::taylor_search::{TaylorSearch, SearchOutcome};
//! let mut search = TaylorSearch::new();
//! search.set_loglevel(Some("off".to_string()));
//! search.set_degree_range(2, 10);
//! let outcome = search.solve().unwrap();
//! match outcome {
//!     SearchOutcome::Found(hit) => println!("degree {} N {} error {:e}", hit.degree, hit.n, hit.error),
//!     SearchOutcome::Exhausted { max_degree } => println!("nothing up to degree {}", max_degree),
//! }
//! ```
use crate::Utils::logger::{init_logger, timestamped_log_name};
use crate::numerical::gauss_legendre::{QuadratureError, rescaled_nodes_weights};
use crate::numerical::quadrature_task::QuadratureTask;
use crate::symbolic::taylor_series::TaylorIntegrand;
use log::{debug, info};
use num::{BigRational, ToPrimitive};
use std::time::Instant;

/// smallest node count tried at every degree
pub const MIN_NODES: usize = 2;
/// at degree d the node count runs up to d + NODE_MARGIN
pub const NODE_MARGIN: usize = 2;

/// States of the degree/node search.
#[derive(Debug, Clone, PartialEq)]
pub enum SearchState {
    Searching { degree: usize },
    SearchingNodes { degree: usize, n: usize },
    Found { degree: usize, n: usize, error: f64 },
    Exhausted { max_degree: usize },
}

/// One quadrature evaluation made during the search.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchStep {
    pub degree: usize,
    pub n: usize,
    pub quadrature: f64,
    pub reference: f64,
    pub error: f64,
}

/// Evaluations in visiting order.
pub type SearchTrace = Vec<SearchStep>;

/// The winning (degree, N) pair.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchHit {
    pub degree: usize,
    pub n: usize,
    pub error: f64,
    pub quadrature: f64,
    pub reference: f64,
    /// truncated integrand, human readable
    pub expression: String,
}

#[derive(Debug, Clone, PartialEq)]
pub enum SearchOutcome {
    Found(SearchHit),
    Exhausted { max_degree: usize },
}

pub struct TaylorSearch {
    pub task: QuadratureTask,
    /// explicit log file name; `task.log_to_file` alone picks a time-stamped one
    pub log_file: Option<String>,

    trace: SearchTrace,
    result: Option<SearchOutcome>,
}

impl Default for TaylorSearch {
    fn default() -> Self {
        Self::new()
    }
}

impl TaylorSearch {
    pub fn new() -> TaylorSearch {
        TaylorSearch::from_task(QuadratureTask::default())
    }

    pub fn from_task(task: QuadratureTask) -> TaylorSearch {
        TaylorSearch {
            task,
            log_file: None,
            trace: Vec::new(),
            result: None,
        }
    }
    ////////////////////////////SETTERS///////////////////////////////////////////////////////////////////
    pub fn set_interval(&mut self, a: f64, b: f64) {
        self.task.set_interval(a, b);
    }

    pub fn set_tolerance(&mut self, tolerance: f64) {
        self.task.set_tolerance(tolerance);
    }

    pub fn set_degree_range(&mut self, initial_degree: usize, max_degree: usize) {
        self.task.set_degree_range(initial_degree, max_degree);
    }

    pub fn set_loglevel(&mut self, loglevel: Option<String>) {
        self.task.set_loglevel(loglevel);
    }

    pub fn set_log_file(&mut self, log_file: Option<String>) {
        self.log_file = log_file;
    }
    //////////////////////////////////////////////////////////////////////////////////////////////

    /// Exact ∫_a^b of the degree-truncated integrand, as the nearest f64.
    pub fn reference_integral(&self, integrand: &TaylorIntegrand) -> Result<f64, QuadratureError> {
        let (a, b) = self.rational_bounds()?;
        let exact = integrand.exact_integral(&a, &b);
        Ok(exact.to_f64().unwrap_or(f64::NAN))
    }

    /// Gauss-Legendre integral of the degree-truncated integrand with n nodes.
    pub fn quadrature(&self, integrand: &TaylorIntegrand, n: usize) -> Result<f64, QuadratureError> {
        let rule = rescaled_nodes_weights(self.task.a, self.task.b, n as i64)?;
        Ok(rule.integrate_vectorized(|nodes| integrand.eval_vectorized(nodes)))
    }

    fn rational_bounds(&self) -> Result<(BigRational, BigRational), QuadratureError> {
        let invalid = || QuadratureError::InvalidInterval { a: self.task.a, b: self.task.b };
        if !(self.task.a < self.task.b) {
            return Err(invalid());
        }
        let a = BigRational::from_float(self.task.a).ok_or_else(invalid)?;
        let b = BigRational::from_float(self.task.b).ok_or_else(invalid)?;
        Ok((a, b))
    }

    /// Runs the state machine and returns the outcome. Pure apart from logging.
    pub fn search(&mut self) -> Result<SearchOutcome, QuadratureError> {
        self.trace.clear();
        // validates the bounds before the first transition
        self.rational_bounds()?;
        // truncated integrand of the current degree and its exact integral
        let mut current: Option<(TaylorIntegrand, f64)> = None;
        let mut state = SearchState::Searching {
            degree: self.task.initial_degree,
        };
        loop {
            state = match state {
                SearchState::Searching { degree } if degree > self.task.max_degree => {
                    SearchState::Exhausted {
                        max_degree: self.task.max_degree,
                    }
                }
                SearchState::Searching { degree } => {
                    let integrand = TaylorIntegrand::new(degree);
                    let reference = self.reference_integral(&integrand)?;
                    info!(
                        "degree {}: {} , exact integral {}",
                        degree,
                        integrand.pretty(),
                        reference
                    );
                    current = Some((integrand, reference));
                    SearchState::SearchingNodes { degree, n: MIN_NODES }
                }
                SearchState::SearchingNodes { degree, n } if n > degree + NODE_MARGIN => {
                    SearchState::Searching { degree: degree + 1 }
                }
                SearchState::SearchingNodes { degree, n } => {
                    // only reachable through Searching, which fills `current`
                    let Some((integrand, reference)) = current.as_ref() else {
                        return Err(QuadratureError::RuleConstruction(format!(
                            "no integrand prepared for degree {}",
                            degree
                        )));
                    };
                    let reference = *reference;
                    let quadrature = self.quadrature(integrand, n)?;
                    let error = (quadrature - reference).abs();
                    debug!("degree {}, N = {}: quadrature {}, error {:e}", degree, n, quadrature, error);
                    self.trace.push(SearchStep {
                        degree,
                        n,
                        quadrature,
                        reference,
                        error,
                    });
                    if error < self.task.tolerance {
                        SearchState::Found { degree, n, error }
                    } else {
                        SearchState::SearchingNodes { degree, n: n + 1 }
                    }
                }
                SearchState::Found { degree, n, error } => {
                    let step = self.trace.last();
                    return Ok(SearchOutcome::Found(SearchHit {
                        degree,
                        n,
                        error,
                        quadrature: step.map_or(f64::NAN, |s| s.quadrature),
                        reference: step.map_or(f64::NAN, |s| s.reference),
                        expression: current
                            .as_ref()
                            .map_or_else(String::new, |(integrand, _)| integrand.pretty()),
                    }));
                }
                SearchState::Exhausted { max_degree } => {
                    return Ok(SearchOutcome::Exhausted { max_degree });
                }
            };
        }
    }

    // wrapper around search function to implement logging
    pub fn solve(&mut self) -> Result<SearchOutcome, QuadratureError> {
        let log_file = self
            .log_file
            .clone()
            .or_else(|| self.task.log_to_file.then(timestamped_log_name));
        init_logger(self.task.loglevel.as_deref(), log_file.as_deref());
        let begin = Instant::now();
        info!(
            "Taylor degree search on [{}, {}], tolerance {:e}, degrees {}..={}",
            self.task.a, self.task.b, self.task.tolerance, self.task.initial_degree, self.task.max_degree
        );
        let outcome = self.search()?;
        match &outcome {
            SearchOutcome::Found(hit) => info!(
                "found degree {} with N = {} (error {:e}) after {} evaluations",
                hit.degree,
                hit.n,
                hit.error,
                self.trace.len()
            ),
            SearchOutcome::Exhausted { max_degree } => info!(
                "no (degree, N) up to degree {} met the tolerance, {} evaluations",
                max_degree,
                self.trace.len()
            ),
        }
        info!("search took {:?}", begin.elapsed());
        self.result = Some(outcome.clone());
        Ok(outcome)
    }

    pub fn get_result(&self) -> Option<SearchOutcome> {
        self.result.clone()
    }

    /// Every evaluation of the last run, in visiting order.
    pub fn trace(&self) -> &[SearchStep] {
        &self.trace
    }
}
