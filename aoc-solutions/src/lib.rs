//! Advent of Code puzzle solutions with automatic registration
//!
//! Solutions live under `my_solutions::year_YYYY::day_DD` and register
//! themselves with the solver framework through `AutoRegisterSolver`.
//! `utils` holds what the puzzles share: 2-D geometry, dense grids, integer
//! helpers and a generic best-first path search.

pub mod utils;

#[cfg(feature = "my-solutions")]
pub mod my_solutions;
