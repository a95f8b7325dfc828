//! Parsed puzzles ready to solve, with timing instrumentation

use crate::error::{ParseError, SolveError};
use crate::solver::{Solver, SolverExt};
use chrono::{DateTime, TimeDelta, Utc};
use tracing::trace;

/// Answer for one part plus when solving started and finished
#[derive(Debug, Clone)]
pub struct SolveResult {
    pub answer: String,
    pub solve_start: DateTime<Utc>,
    pub solve_end: DateTime<Utc>,
}

impl SolveResult {
    pub fn duration(&self) -> TimeDelta {
        self.solve_end - self.solve_start
    }
}

/// A puzzle whose input has already been parsed.
///
/// Parsing happens once in [`SolverInstance::new`]; every part then works on
/// the same `SharedData`, so later parts can reuse what earlier ones stored.
pub struct SolverInstance<'a, S: Solver> {
    year: u16,
    day: u8,
    shared: S::SharedData<'a>,
    parse_start: DateTime<Utc>,
    parse_end: DateTime<Utc>,
}

impl<'a, S: Solver> SolverInstance<'a, S> {
    /// Parse `input` and record how long it took.
    pub fn new(year: u16, day: u8, input: &'a str) -> Result<Self, ParseError> {
        let parse_start = Utc::now();
        let shared = S::parse(input)?;
        let parse_end = Utc::now();

        trace!(
            year,
            day,
            micros = (parse_end - parse_start).num_microseconds(),
            "parsed input"
        );

        Ok(Self {
            year,
            day,
            shared,
            parse_start,
            parse_end,
        })
    }
}

/// Object-safe view of a [`SolverInstance`], so the registry can hand out
/// solvers of different types behind one `Box<dyn DynSolver>`.
///
/// # Example
///
/// ```no_run
/// use aoc_solver::DynSolver;
///
/// fn run_all(mut solver: Box<dyn DynSolver + '_>) -> Result<(), aoc_solver::SolveError> {
///     println!("{}/{:02} parsed in {}", solver.year(), solver.day(), solver.parse_duration());
///     for part in 1..=solver.parts() {
///         let result = solver.solve(part)?;
///         println!("part {part}: {} ({})", result.answer, result.duration());
///     }
///     Ok(())
/// }
/// ```
pub trait DynSolver {
    /// Solve `part`, recording start and end time
    fn solve(&mut self, part: u8) -> Result<SolveResult, SolveError>;

    fn parse_start(&self) -> DateTime<Utc>;

    fn parse_end(&self) -> DateTime<Utc>;

    fn year(&self) -> u16;

    fn day(&self) -> u8;

    /// Number of parts this solver supports
    fn parts(&self) -> u8;

    fn parse_duration(&self) -> TimeDelta {
        self.parse_end() - self.parse_start()
    }
}

impl<S: Solver> DynSolver for SolverInstance<'_, S> {
    fn solve(&mut self, part: u8) -> Result<SolveResult, SolveError> {
        let solve_start = Utc::now();
        let answer = S::solve_part_checked_range(&mut self.shared, part)?;
        let solve_end = Utc::now();

        trace!(
            year = self.year,
            day = self.day,
            part,
            micros = (solve_end - solve_start).num_microseconds(),
            "solved part"
        );

        Ok(SolveResult {
            answer,
            solve_start,
            solve_end,
        })
    }

    fn parse_start(&self) -> DateTime<Utc> {
        self.parse_start
    }

    fn parse_end(&self) -> DateTime<Utc> {
        self.parse_end
    }

    fn year(&self) -> u16 {
        self.year
    }

    fn day(&self) -> u8 {
        self.day
    }

    fn parts(&self) -> u8 {
        S::PARTS
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::solver::AocParser;

    struct Lengths;

    impl AocParser for Lengths {
        type SharedData<'a> = Vec<&'a str>;

        fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
            if input.is_empty() {
                return Err(ParseError::MissingData("no lines".into()));
            }
            Ok(input.lines().collect())
        }
    }

    impl Solver for Lengths {
        const PARTS: u8 = 1;

        fn solve_part(lines: &mut Self::SharedData<'_>, _part: u8) -> Result<String, SolveError> {
            Ok(lines.iter().map(|l| l.len()).sum::<usize>().to_string())
        }
    }

    #[test]
    fn test_instance_solves_and_times() {
        let mut instance = SolverInstance::<Lengths>::new(2022, 12, "ab\ncde").unwrap();
        assert_eq!(instance.year(), 2022);
        assert_eq!(instance.day(), 12);
        assert_eq!(instance.parts(), 1);
        assert!(instance.parse_duration() >= TimeDelta::zero());

        let result = instance.solve(1).unwrap();
        assert_eq!(result.answer, "5");
        assert!(result.duration() >= TimeDelta::zero());
    }

    #[test]
    fn test_instance_rejects_out_of_range_part() {
        let mut instance = SolverInstance::<Lengths>::new(2022, 12, "x").unwrap();
        assert!(matches!(instance.solve(2), Err(SolveError::PartOutOfRange(2))));
        assert!(matches!(instance.solve(0), Err(SolveError::PartOutOfRange(0))));
    }

    #[test]
    fn test_instance_propagates_parse_error() {
        let result = SolverInstance::<Lengths>::new(2022, 12, "");
        assert!(matches!(result, Err(ParseError::MissingData(_))));
    }
}
