//! Advent of Code Solver Library
//!
//! A type-safe framework for writing Advent of Code puzzles: each puzzle
//! parses its input once into shared data and then solves any number of
//! parts against it.
//!
//! # Overview
//!
//! - [`AocParser`] turns input text into `SharedData<'a>`, which may borrow
//!   from the input.
//! - [`PartSolver<N>`] solves part `N`; `#[derive(AocSolver)]` stitches the
//!   parts into a [`Solver`].
//! - [`SolverRegistry`] maps year/day to factories producing
//!   [`DynSolver`] instances with parse and solve timing.
//! - `#[derive(AutoRegisterSolver)]` submits a solver as a [`SolverPlugin`]
//!   so binaries can discover it without listing every puzzle.
//!
//! # Quick Example
//!
//! ```
//! use aoc_solver::{AocParser, AocSolver, ParseError, PartSolver, SolveError, SolverRegistryBuilder};
//!
//! #[derive(AocSolver)]
//! #[aoc_solver(max_parts = 2)]
//! struct Day1;
//!
//! impl AocParser for Day1 {
//!     type SharedData<'a> = Vec<i32>;
//!
//!     fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
//!         input
//!             .lines()
//!             .map(|line| line.parse().map_err(|_| ParseError::InvalidFormat(line.to_string())))
//!             .collect()
//!     }
//! }
//!
//! impl PartSolver<1> for Day1 {
//!     fn solve(numbers: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
//!         Ok(numbers.iter().sum::<i32>().to_string())
//!     }
//! }
//!
//! impl PartSolver<2> for Day1 {
//!     fn solve(numbers: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
//!         Ok(numbers.iter().product::<i32>().to_string())
//!     }
//! }
//!
//! let registry = SolverRegistryBuilder::new()
//!     .register_solver::<Day1>(2023, 1)
//!     .unwrap()
//!     .build();
//!
//! let mut solver = registry.create_solver(2023, 1, "1\n2\n3").unwrap();
//! assert_eq!(solver.solve(1).unwrap().answer, "6");
//! assert_eq!(solver.solve(2).unwrap().answer, "6");
//! ```
//!
//! # Plugins
//!
//! ```ignore
//! #[derive(AocSolver, AutoRegisterSolver)]
//! #[aoc_solver(max_parts = 2)]
//! #[aoc(year = 2022, day = 12, tags = ["search"])]
//! struct Day12;
//! ```
//!
//! A binary then calls [`SolverRegistryBuilder::register_all_plugins`] or
//! filters by tag with [`SolverRegistryBuilder::register_solver_plugins`].

mod error;
mod instance;
mod registry;
mod solver;

pub use error::{ParseError, RegistrationError, SolveError, SolverError};
pub use instance::{DynSolver, SolveResult, SolverInstance};
pub use registry::{
    BASE_YEAR, CAPACITY, DAYS_PER_YEAR, FactoryInfo, MAX_YEARS, RegisterableSolver,
    SolverFactory, SolverFactoryStorage, SolverPlugin, SolverRegistry, SolverRegistryBuilder,
};
pub use solver::{AocParser, PartSolver, Solver, SolverExt};

// Used by code generated from the derive macros
pub use inventory;

pub use aoc_solver_macros::{AocSolver, AutoRegisterSolver};
