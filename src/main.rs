#![allow(non_snake_case)]
use RustedGaussTaylor::Utils::logger::{init_logger, timestamped_log_name};
use RustedGaussTaylor::Utils::report::{error_table, node_block, quadrature_rows, search_report, trace_table};
use RustedGaussTaylor::numerical::integrand::{exact_integral, phi_expr};
use RustedGaussTaylor::numerical::quadrature_task::QuadratureTask;
use RustedGaussTaylor::numerical::taylor_search::TaylorSearch;
use log::{debug, info};
use std::error::Error;
use std::time::Instant;

fn main() -> Result<(), Box<dyn Error>> {
    let task = QuadratureTask::default();
    let log_file = task.log_to_file.then(timestamped_log_name);
    init_logger(task.loglevel.as_deref(), log_file.as_deref());

    // exact integrand: quadrature against the symbolic antiderivative
    let exact = exact_integral(task.a, task.b)?;
    println!("integrand: {}", phi_expr());
    println!("symbolic integral on [{}, {}]: {:.12}\n", task.a, task.b, exact);
    let rows = quadrature_rows(task.a, task.b, task.demo_nodes.clone(), exact)?;
    for row in &rows {
        println!("{}\n", node_block(row));
    }
    println!("{}\n", error_table(&rows, exact));

    // Taylor-truncated integrand: smallest degree and N within tolerance
    let tolerance = task.tolerance;
    let mut search = TaylorSearch::from_task(task);
    let begin = Instant::now();
    let outcome = search.search()?;
    info!(
        "{} quadratures evaluated in {:?}",
        search.trace().len(),
        begin.elapsed()
    );
    debug!("\n SEARCH TRACE \n{}", trace_table(search.trace()));
    println!("{}", search_report(&outcome, tolerance));
    Ok(())
}
