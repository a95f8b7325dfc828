//! Error types for the solver library

use thiserror::Error;

/// Error type for turning puzzle input into shared data
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// Input doesn't match the expected structure
    #[error("Invalid format: {0}")]
    InvalidFormat(String),
    /// Something the puzzle needs is absent from the input
    #[error("Missing data: {0}")]
    MissingData(String),
    /// Other parsing errors
    #[error("Parse error: {0}")]
    Other(String),
}

/// Error type for solving a single part
#[derive(Debug, Error)]
pub enum SolveError {
    /// The solver declares the part but has no implementation for it
    #[error("Part {0} is not implemented")]
    PartNotImplemented(u8),
    /// The part number is 0 or exceeds the solver's `PARTS`
    #[error("Part {0} is out of range")]
    PartOutOfRange(u8),
    /// Solving ran but could not produce an answer (e.g. no path exists)
    #[error("Solve failed: {0}")]
    SolveFailed(#[source] Box<dyn std::error::Error + Send + Sync>),
}

/// Error type for looking up and running a solver
#[derive(Debug, Error)]
pub enum SolverError {
    /// No solver is registered for the year and day
    #[error("Solver not found for year {0} day {1}")]
    NotFound(u16, u8),
    /// The year or day is outside the supported range
    #[error("Invalid year {0} or day {1}")]
    InvalidYearDay(u16, u8),
    /// Parsing the input failed
    #[error("Parse error: {0}")]
    ParseError(#[from] ParseError),
    /// Solving a part failed
    #[error("Solve error: {0}")]
    SolveError(#[from] SolveError),
}

/// Error type for registration failures
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistrationError {
    /// A solver is already registered for the year and day
    #[error("Duplicate solver registration for year {0} day {1}")]
    DuplicateSolver(u16, u8),
    /// The year or day is outside the supported range
    #[error("Cannot register solver for year {0} day {1}: out of range")]
    InvalidYearDay(u16, u8),
}
