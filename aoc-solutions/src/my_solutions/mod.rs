pub mod year_2021;
pub mod year_2022;
pub mod year_2023;

use aoc_solver::{ParseError, SolveError};

use crate::utils::grid::GridError;

fn unreachable_goal(what: &str) -> SolveError {
    SolveError::SolveFailed(anyhow::anyhow!("no path to {what}").into())
}

fn invalid_grid(e: GridError) -> ParseError {
    ParseError::InvalidFormat(e.to_string())
}
