//! Parallel executor for running solvers

use crate::cli::ParallelizeBy;
use crate::config::Config;
use crate::error::{ArcExecutorError, ExecutorError};
use crate::input::InputStore;
use aoc_solver::{DynSolver, SolverError, SolverRegistry};
use chrono::TimeDelta;
use itertools::Itertools;
use rayon::prelude::*;
use std::ops::RangeInclusive;
use std::sync::mpsc::Sender;
use tracing::{debug, info, warn};

/// Result from a single solver execution
#[derive(Debug)]
pub struct SolverResult {
    pub year: u16,
    pub day: u8,
    pub part: u8,
    pub answer: Result<String, ArcExecutorError>,
    /// Time spent parsing the input, `None` when parsing never happened
    pub parse_duration: Option<TimeDelta>,
    pub solve_duration: TimeDelta,
}

/// Work item representing a solver to execute
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkItem {
    pub year: u16,
    pub day: u8,
    pub parts: RangeInclusive<u8>,
}

/// Parallel executor for running solvers
pub struct Executor {
    sync_executor_config: SyncExecutorConfig,
    thread_pool: rayon::ThreadPool,
}

/// The read-only state shared by every worker thread
pub struct SyncExecutorConfig {
    registry: SolverRegistry,
    inputs: InputStore,
    parallelize_by: ParallelizeBy,
    year_filter: Option<u16>,
    day_filter: Option<u8>,
    part_filter: Option<u8>,
}

impl Executor {
    /// Create a new executor from config
    pub fn new(registry: SolverRegistry, config: &Config) -> Result<Self, ExecutorError> {
        let thread_pool = rayon::ThreadPoolBuilder::new()
            .num_threads(config.thread_count)
            .build()
            .map_err(|e| ExecutorError::ThreadPool(e.to_string()))?;

        Ok(Self {
            sync_executor_config: SyncExecutorConfig {
                registry,
                inputs: config.input_store(),
                parallelize_by: config.parallelize_by,
                year_filter: config.year_filter,
                day_filter: config.day_filter,
                part_filter: config.part_filter,
            },
            thread_pool,
        })
    }

    /// Collect work items by filtering from registry metadata
    pub fn collect_work_items(&self) -> Vec<WorkItem> {
        let cfg = &self.sync_executor_config;
        cfg.registry
            .storage()
            .iter_info()
            .filter(|info| cfg.year_filter.is_none_or(|y| info.year == y))
            .filter(|info| cfg.day_filter.is_none_or(|d| info.day == d))
            .map(|info| WorkItem {
                year: info.year,
                day: info.day,
                parts: filter_parts(cfg.part_filter, info.parts),
            })
            .filter(|w| !w.parts.is_empty())
            .collect()
    }

    /// Execute all work items and send results to channel
    pub fn execute(&self, tx: Sender<SolverResult>) -> Result<(), ArcExecutorError> {
        let work_items = self.collect_work_items();
        info!(
            puzzles = work_items.len(),
            threads = self.thread_pool.current_num_threads(),
            mode = ?self.sync_executor_config.parallelize_by,
            "executing"
        );

        match self.sync_executor_config.parallelize_by {
            ParallelizeBy::Sequential => {
                let mut collected_error: Option<ArcExecutorError> = None;
                for work in work_items {
                    if let Err(e) = run_work_item(&work, &tx, &self.sync_executor_config) {
                        collected_error = Some(ArcExecutorError::combine_opt(collected_error, e));
                    }
                }
                collected_error.map_or(Ok(()), Err)
            }
            ParallelizeBy::Year => {
                let by_year: Vec<Vec<WorkItem>> = work_items
                    .into_iter()
                    .chunk_by(|w| w.year)
                    .into_iter()
                    .map(|(_, group)| group.collect())
                    .collect();

                self.execute_parallel_grouped(by_year, &tx)
            }
            // Part mode additionally splits each puzzle's parts across threads
            ParallelizeBy::Day | ParallelizeBy::Part => {
                let singletons = work_items.into_iter().map(|w| vec![w]).collect();
                self.execute_parallel_grouped(singletons, &tx)
            }
        }
    }

    /// Run groups in parallel; items inside a group run in order
    fn execute_parallel_grouped(
        &self,
        groups: Vec<Vec<WorkItem>>,
        tx: &Sender<SolverResult>,
    ) -> Result<(), ArcExecutorError> {
        let sync_executor_config = &self.sync_executor_config;

        self.thread_pool.install(|| {
            groups
                .into_par_iter()
                .map(|items| {
                    let mut err = None;
                    for work in items {
                        if let Err(e) = run_work_item(&work, tx, sync_executor_config) {
                            err = Some(ArcExecutorError::combine_opt(err, e));
                        }
                    }
                    err
                })
                .reduce_with(|err1, err2| match (err1, err2) {
                    (Some(e1), Some(e2)) => Some(ArcExecutorError::combine(e1, e2)),
                    (e1, e2) => e1.or(e2),
                })
                .flatten()
                .map_or(Ok(()), Err)
        })
    }
}

/// Parts to run given the `--part` filter and the solver's part count
#[allow(clippy::reversed_empty_ranges)]
fn filter_parts(part_filter: Option<u8>, max_parts: u8) -> RangeInclusive<u8> {
    match part_filter {
        Some(p) if p <= max_parts => p..=p,
        Some(_) => 1..=0,
        None => 1..=max_parts,
    }
}

fn error_result(year: u16, day: u8, part: u8, error: ArcExecutorError) -> SolverResult {
    SolverResult {
        year,
        day,
        part,
        answer: Err(error),
        parse_duration: None,
        solve_duration: TimeDelta::zero(),
    }
}

fn send(tx: &Sender<SolverResult>, result: SolverResult) -> Result<(), ArcExecutorError> {
    tx.send(result)
        .map_err(|_| ArcExecutorError::from(ExecutorError::ChannelSend))
}

/// Read the input and run the parts of one puzzle.
///
/// Input and parse failures become error results for every requested part,
/// so the caller still receives one result per expected key.
fn run_work_item(
    work: &WorkItem,
    tx: &Sender<SolverResult>,
    cfg: &SyncExecutorConfig,
) -> Result<(), ArcExecutorError> {
    let (year, day) = (work.year, work.day);

    let input = match cfg.inputs.read(year, day) {
        Ok(input) => input,
        Err(source) => {
            warn!(year, day, error = %source, "input unavailable, skipping puzzle");
            let error = ArcExecutorError::from(ExecutorError::Input { year, day, source });
            for part in work.parts.clone() {
                send(tx, error_result(year, day, part, error.clone()))?;
            }
            return Ok(());
        }
    };
    debug!(year, day, bytes = input.len(), "read input");

    if matches!(cfg.parallelize_by, ParallelizeBy::Part) {
        run_parts_parallel(work, &input, tx, cfg)
    } else {
        run_parts_sequential(work, &input, tx, cfg)
    }
}

/// Solve each part on its own thread, each with a freshly parsed instance
fn run_parts_parallel(
    work: &WorkItem,
    input: &str,
    tx: &Sender<SolverResult>,
    cfg: &SyncExecutorConfig,
) -> Result<(), ArcExecutorError> {
    let (year, day) = (work.year, work.day);
    let registry = &cfg.registry;

    let mut results: Vec<SolverResult> = work
        .parts
        .clone()
        .into_par_iter()
        .map(|part| match registry.create_solver(year, day, input) {
            Ok(mut solver) => solve_part(part, &mut *solver),
            Err(e) => error_result(year, day, part, ExecutorError::Solver(e).into()),
        })
        .collect();

    results.sort_by_key(|r| r.part);
    for result in results {
        send(tx, result)?;
    }
    Ok(())
}

/// Parse once and solve the parts in order so later parts see earlier state
fn run_parts_sequential(
    work: &WorkItem,
    input: &str,
    tx: &Sender<SolverResult>,
    cfg: &SyncExecutorConfig,
) -> Result<(), ArcExecutorError> {
    let (year, day) = (work.year, work.day);

    let mut solver = match cfg.registry.create_solver(year, day, input) {
        Ok(solver) => solver,
        Err(e) => {
            warn!(year, day, error = %e, "failed to create solver");
            let error = ArcExecutorError::from(ExecutorError::Solver(e));
            for part in work.parts.clone() {
                send(tx, error_result(year, day, part, error.clone()))?;
            }
            return Ok(());
        }
    };

    for part in work.parts.clone() {
        send(tx, solve_part(part, &mut *solver))?;
    }
    Ok(())
}

fn solve_part(part: u8, solver: &mut dyn DynSolver) -> SolverResult {
    let (year, day) = (solver.year(), solver.day());
    let parse_duration = Some(solver.parse_duration());

    match solver.solve(part) {
        Ok(result) => SolverResult {
            year,
            day,
            part,
            solve_duration: result.duration(),
            answer: Ok(result.answer),
            parse_duration,
        },
        Err(e) => {
            warn!(year, day, part, error = %e, "solve failed");
            SolverResult {
                year,
                day,
                part,
                answer: Err(ExecutorError::Solver(SolverError::from(e)).into()),
                parse_duration,
                solve_duration: TimeDelta::zero(),
            }
        }
    }
}
