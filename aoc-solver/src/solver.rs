//! Traits every puzzle implements

use crate::error::{ParseError, SolveError};

/// Turns raw puzzle text into the data shared by all parts.
///
/// `SharedData` may borrow from the input (`&'a str` slices) or own its
/// contents. Parts receive it mutably, so a part can stash intermediate
/// results (a computed distance map, a parsed graph) for the next one.
///
/// # Example
///
/// ```
/// use aoc_solver::{AocParser, ParseError};
///
/// struct Depths;
///
/// impl AocParser for Depths {
///     type SharedData<'a> = Vec<u32>;
///
///     fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
///         input
///             .lines()
///             .map(|l| l.parse().map_err(|_| ParseError::InvalidFormat(l.to_string())))
///             .collect()
///     }
/// }
///
/// assert_eq!(Depths::parse("3\n1").unwrap(), vec![3, 1]);
/// ```
pub trait AocParser {
    type SharedData<'a>;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError>;
}

/// Solves part `N` of a puzzle.
///
/// Implementing one `PartSolver<N>` per part and deriving
/// [`AocSolver`](crate::AocSolver) gives a compile-time checked
/// [`Solver`] implementation.
///
/// # Example
///
/// ```
/// use aoc_solver::{AocParser, PartSolver, ParseError, SolveError};
///
/// struct Depths;
///
/// impl AocParser for Depths {
///     type SharedData<'a> = Vec<u32>;
///
///     fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
///         input
///             .lines()
///             .map(|l| l.parse().map_err(|_| ParseError::InvalidFormat(l.to_string())))
///             .collect()
///     }
/// }
///
/// impl PartSolver<1> for Depths {
///     fn solve(depths: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
///         Ok(depths.windows(2).filter(|w| w[1] > w[0]).count().to_string())
///     }
/// }
///
/// let mut depths = Depths::parse("1\n3\n2\n5").unwrap();
/// assert_eq!(<Depths as PartSolver<1>>::solve(&mut depths).unwrap(), "2");
/// ```
pub trait PartSolver<const N: u8>: AocParser {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError>;
}

/// A complete puzzle: parsing plus `PARTS` numbered parts.
///
/// Usually derived with `#[derive(AocSolver)]`; implement it by hand when
/// part dispatch needs custom logic.
///
/// # Example
///
/// ```
/// use aoc_solver::{AocParser, ParseError, SolveError, Solver};
///
/// struct Steps;
///
/// impl AocParser for Steps {
///     type SharedData<'a> = &'a str;
///
///     fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
///         Ok(input.trim())
///     }
/// }
///
/// impl Solver for Steps {
///     const PARTS: u8 = 2;
///
///     fn solve_part(moves: &mut Self::SharedData<'_>, part: u8) -> Result<String, SolveError> {
///         match part {
///             1 => Ok(moves.len().to_string()),
///             2 => Ok(moves.chars().filter(|&c| c == '^').count().to_string()),
///             _ => Err(SolveError::PartNotImplemented(part)),
///         }
///     }
/// }
///
/// let mut moves = Steps::parse("^>v^\n").unwrap();
/// assert_eq!(Steps::solve_part(&mut moves, 2).unwrap(), "2");
/// ```
pub trait Solver: AocParser {
    /// Number of parts this solver implements
    const PARTS: u8;

    /// Solve `part` (1-based). Called with any `u8`; see
    /// [`SolverExt::solve_part_checked_range`] for the bounds-checked entry.
    fn solve_part(shared: &mut Self::SharedData<'_>, part: u8) -> Result<String, SolveError>;
}

/// Bounds checking on top of [`Solver::solve_part`].
pub trait SolverExt: Solver {
    /// Reject part `0` and parts above `PARTS` with
    /// [`SolveError::PartOutOfRange`] before dispatching.
    fn solve_part_checked_range(
        shared: &mut Self::SharedData<'_>,
        part: u8,
    ) -> Result<String, SolveError> {
        if part == 0 || part > Self::PARTS {
            return Err(SolveError::PartOutOfRange(part));
        }
        Self::solve_part(shared, part)
    }
}

impl<T: Solver + ?Sized> SolverExt for T {}
