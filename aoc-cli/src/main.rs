//! `aoc`: runs the registered puzzle solvers against local input files

mod aggregator;
mod cli;
mod config;
mod error;
mod executor;
mod input;
mod output;

// Linked for its `inventory` plugin submissions only.
use aoc_solutions as _;

use aggregator::{ResultAggregator, ResultKey};
use aoc_solver::{SolverRegistry, SolverRegistryBuilder};
use clap::Parser;
use cli::Args;
use config::Config;
use error::{ArcExecutorError, CliError};
use executor::{Executor, SolverResult};
use output::Report;
use std::sync::mpsc::{self, Receiver};
use std::thread;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

fn main() {
    let args = Args::parse();
    init_tracing(args.verbose);

    if let Err(e) = run(args) {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

/// Log to stderr so answers on stdout stay clean. `RUST_LOG` wins over `-v`.
fn init_tracing(verbosity: u8) {
    let level = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(filter)
        .with_target(false)
        .init();
}

fn run(args: Args) -> Result<(), CliError> {
    let config = Config::from_args(args)?;
    info!(input_dir = %config.input_dir.display(), threads = config.thread_count, "configured");

    let registry = registry_for_tags(&config.tags)?;
    let executor = Executor::new(registry, &config).map_err(ArcExecutorError::from)?;

    let work_items = executor.collect_work_items();
    if work_items.is_empty() {
        println!("No solvers match the given filters.");
        return Ok(());
    }

    let report = Report::new(config.quiet);
    if !config.quiet {
        println!("Running {} puzzle(s)...", work_items.len());
    }

    let mut aggregator = ResultAggregator::new(ResultKey::expected_from(&work_items));
    let (tx, rx) = mpsc::channel();
    let worker = thread::spawn(move || executor.execute(tx));

    let results = print_in_order(rx, &mut aggregator, &report);
    if !aggregator.is_complete() {
        warn!("executor stopped before every part reported");
    }

    worker
        .join()
        .map_err(|_| CliError::ExecutorPanicked)??;

    report.print_summary(&results);
    Ok(())
}

/// Plugins carrying every tag in `tags`; all plugins when `tags` is empty.
fn registry_for_tags(tags: &[String]) -> Result<SolverRegistry, CliError> {
    let builder = SolverRegistryBuilder::new().register_solver_plugins(|plugin| {
        tags.iter().all(|tag| plugin.tags.contains(&tag.as_str()))
    })?;
    Ok(builder.build())
}

/// Print results as soon as their turn comes, then whatever is left once
/// the executor hangs up.
fn print_in_order(
    rx: Receiver<SolverResult>,
    aggregator: &mut ResultAggregator,
    report: &Report,
) -> Vec<SolverResult> {
    let mut printed = Vec::new();
    let mut emit = |result: SolverResult| {
        report.print_result(&result);
        printed.push(result);
    };
    for result in rx {
        aggregator.add(result).into_iter().for_each(&mut emit);
    }
    aggregator.drain().into_iter().for_each(emit);
    printed
}
