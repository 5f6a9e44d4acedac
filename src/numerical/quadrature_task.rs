//! Inputs of a quadrature study: interval, tolerance, degree range of the
//! Taylor search, node counts shown in the demonstration table and logging.
use std::ops::RangeInclusive;

pub const DEFAULT_LOWER_BOUND: f64 = 1.0;
pub const DEFAULT_UPPER_BOUND: f64 = 3.0;
pub const DEFAULT_TOLERANCE: f64 = 1e-18;
pub const DEFAULT_INITIAL_DEGREE: usize = 2;
pub const DEFAULT_MAX_DEGREE: usize = 50;

#[derive(Debug, Clone, PartialEq)]
pub struct QuadratureTask {
    pub a: f64,
    pub b: f64,
    pub tolerance: f64,
    pub initial_degree: usize,
    pub max_degree: usize,
    /// node counts of the per-N table for the exact integrand
    pub demo_nodes: RangeInclusive<i64>,
    /// "off"/"none" disables logging; otherwise "debug", "info", "warn" or "error"
    pub loglevel: Option<String>,
    /// also write the log to a time-stamped file
    pub log_to_file: bool,
}

impl Default for QuadratureTask {
    fn default() -> Self {
        QuadratureTask {
            a: DEFAULT_LOWER_BOUND,
            b: DEFAULT_UPPER_BOUND,
            tolerance: DEFAULT_TOLERANCE,
            initial_degree: DEFAULT_INITIAL_DEGREE,
            max_degree: DEFAULT_MAX_DEGREE,
            demo_nodes: 2..=6,
            loglevel: Some("info".to_string()),
            log_to_file: false,
        }
    }
}

impl QuadratureTask {
    pub fn new() -> QuadratureTask {
        QuadratureTask::default()
    }
    ////////////////////////////SETTERS///////////////////////////////////////////////////////////////////
    pub fn set_interval(&mut self, a: f64, b: f64) {
        self.a = a;
        self.b = b;
    }

    pub fn set_tolerance(&mut self, tolerance: f64) {
        self.tolerance = tolerance;
    }

    pub fn set_degree_range(&mut self, initial_degree: usize, max_degree: usize) {
        self.initial_degree = initial_degree;
        self.max_degree = max_degree;
    }

    pub fn set_demo_nodes(&mut self, demo_nodes: RangeInclusive<i64>) {
        self.demo_nodes = demo_nodes;
    }

    pub fn set_loglevel(&mut self, loglevel: Option<String>) {
        self.loglevel = loglevel;
    }

    pub fn set_log_to_file(&mut self, log_to_file: bool) {
        self.log_to_file = log_to_file;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let task = QuadratureTask::default();
        assert_eq!((task.a, task.b), (1.0, 3.0));
        assert_eq!(task.tolerance, 1e-18);
        assert_eq!((task.initial_degree, task.max_degree), (2, 50));
        assert_eq!(task.demo_nodes, 2..=6);
        assert_eq!(task.loglevel.as_deref(), Some("info"));
        assert!(!task.log_to_file);
    }

    #[test]
    fn test_setters() {
        let mut task = QuadratureTask::new();
        task.set_interval(0.0, 2.0);
        task.set_tolerance(1e-9);
        task.set_degree_range(3, 7);
        task.set_demo_nodes(1..=3);
        task.set_loglevel(None);
        task.set_log_to_file(true);
        assert_eq!((task.a, task.b, task.tolerance), (0.0, 2.0, 1e-9));
        assert_eq!((task.initial_degree, task.max_degree), (3, 7));
        assert_eq!(task.demo_nodes, 1..=3);
        assert!(task.loglevel.is_none());
        assert!(task.log_to_file);
    }
}
