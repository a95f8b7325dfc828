//! Year/day lookup of solver factories

use crate::error::{ParseError, RegistrationError, SolverError};
use crate::instance::{DynSolver, SolverInstance};
use crate::solver::Solver;
use tracing::debug;

/// Earliest puzzle year the registry accepts
pub const BASE_YEAR: u16 = 2015;
/// Years covered from [`BASE_YEAR`] on (2015 through 2034)
pub const MAX_YEARS: usize = 20;
pub const DAYS_PER_YEAR: usize = 25;
/// Number of year/day slots
pub const CAPACITY: usize = MAX_YEARS * DAYS_PER_YEAR;

/// Slot for `year`/`day`, or `None` when either is out of range.
fn slot_of(year: u16, day: u8) -> Option<usize> {
    let year_offset = usize::from(year.checked_sub(BASE_YEAR)?);
    let day_offset = usize::from(day.checked_sub(1)?);
    (year_offset < MAX_YEARS && day_offset < DAYS_PER_YEAR)
        .then_some(year_offset * DAYS_PER_YEAR + day_offset)
}

fn puzzle_at(slot: usize) -> (u16, u8) {
    // Both quotient and remainder fit: slot < CAPACITY.
    let year = BASE_YEAR + (slot / DAYS_PER_YEAR) as u16;
    let day = (slot % DAYS_PER_YEAR) as u8 + 1;
    (year, day)
}

/// Parses one puzzle input into a boxed, ready-to-solve instance
pub type SolverFactory =
    Box<dyn for<'a> Fn(&'a str) -> Result<Box<dyn DynSolver + 'a>, ParseError> + Send + Sync>;

/// What the registry knows about a puzzle without parsing anything
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FactoryInfo {
    pub year: u16,
    pub day: u8,
    pub parts: u8,
}

struct Registration {
    factory: SolverFactory,
    parts: u8,
}

/// Builder for an immutable [`SolverRegistry`].
///
/// Rejects duplicate and out-of-range registrations.
///
/// # Example
///
/// ```
/// use aoc_solver::{AocParser, ParseError, RegisterableSolver, SolveError, Solver, SolverRegistryBuilder};
///
/// struct Echo;
///
/// impl AocParser for Echo {
///     type SharedData<'a> = &'a str;
///
///     fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
///         Ok(input.trim())
///     }
/// }
///
/// impl Solver for Echo {
///     const PARTS: u8 = 1;
///
///     fn solve_part(input: &mut Self::SharedData<'_>, _part: u8) -> Result<String, SolveError> {
///         Ok(input.to_string())
///     }
/// }
///
/// let registry = Echo.register_with(SolverRegistryBuilder::new(), 2022, 12)
///     .unwrap()
///     .build();
///
/// let mut solver = registry.create_solver(2022, 12, " hello\n").unwrap();
/// assert_eq!(solver.solve(1).unwrap().answer, "hello");
/// ```
pub struct SolverRegistryBuilder {
    storage: SolverFactoryStorage,
}

impl SolverRegistryBuilder {
    pub fn new() -> Self {
        let mut slots = Vec::with_capacity(CAPACITY);
        slots.resize_with(CAPACITY, || None);
        Self {
            storage: SolverFactoryStorage { slots },
        }
    }

    /// Register `factory` for `year`/`day`, advertising `parts` parts.
    pub fn register_factory<F>(
        mut self,
        year: u16,
        day: u8,
        parts: u8,
        factory: F,
    ) -> Result<Self, RegistrationError>
    where
        F: for<'a> Fn(&'a str) -> Result<Box<dyn DynSolver + 'a>, ParseError>
            + Send
            + Sync
            + 'static,
    {
        let slot = slot_of(year, day).ok_or(RegistrationError::InvalidYearDay(year, day))?;
        let target = &mut self.storage.slots[slot];
        if target.is_some() {
            return Err(RegistrationError::DuplicateSolver(year, day));
        }
        *target = Some(Registration {
            factory: Box::new(factory),
            parts,
        });
        Ok(self)
    }

    /// Register solver type `S`, wrapping each parse in a [`SolverInstance`]
    pub fn register_solver<S>(self, year: u16, day: u8) -> Result<Self, RegistrationError>
    where
        S: Solver + 'static,
    {
        self.register_factory(year, day, S::PARTS, move |input: &str| {
            let instance = SolverInstance::<S>::new(year, day, input)?;
            Ok(Box::new(instance))
        })
    }

    /// Register every plugin submitted with `inventory::submit!`
    ///
    /// ```no_run
    /// # use aoc_solver::SolverRegistryBuilder;
    /// let registry = SolverRegistryBuilder::new()
    ///     .register_all_plugins()
    ///     .unwrap()
    ///     .build();
    /// ```
    pub fn register_all_plugins(self) -> Result<Self, RegistrationError> {
        self.register_solver_plugins(|_| true)
    }

    /// Register only the plugins accepted by `filter`
    ///
    /// ```no_run
    /// # use aoc_solver::SolverRegistryBuilder;
    /// let registry = SolverRegistryBuilder::new()
    ///     .register_solver_plugins(|plugin| plugin.tags.contains(&"search"))
    ///     .unwrap()
    ///     .build();
    /// ```
    pub fn register_solver_plugins<F>(self, filter: F) -> Result<Self, RegistrationError>
    where
        F: Fn(&SolverPlugin) -> bool,
    {
        inventory::iter::<SolverPlugin>()
            .into_iter()
            .filter(|plugin| filter(plugin))
            .try_fold(self, |builder, plugin| {
                debug!(year = plugin.year, day = plugin.day, tags = ?plugin.tags, "registering plugin");
                plugin.solver.register_with(builder, plugin.year, plugin.day)
            })
    }

    pub fn build(self) -> SolverRegistry {
        SolverRegistry {
            storage: self.storage,
        }
    }
}

impl Default for SolverRegistryBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Registered factories, one slot per year/day
pub struct SolverFactoryStorage {
    slots: Vec<Option<Registration>>,
}

impl SolverFactoryStorage {
    fn registration(&self, year: u16, day: u8) -> Option<&Registration> {
        self.slots.get(slot_of(year, day)?)?.as_ref()
    }

    /// Every registered puzzle, ordered by year then day
    pub fn iter_info(&self) -> impl Iterator<Item = FactoryInfo> + '_ {
        self.slots.iter().enumerate().filter_map(|(slot, registration)| {
            let parts = registration.as_ref()?.parts;
            let (year, day) = puzzle_at(slot);
            Some(FactoryInfo { year, day, parts })
        })
    }

    pub fn get_info(&self, year: u16, day: u8) -> Option<FactoryInfo> {
        self.registration(year, day).map(|registration| FactoryInfo {
            year,
            day,
            parts: registration.parts,
        })
    }

    pub fn contains(&self, year: u16, day: u8) -> bool {
        self.registration(year, day).is_some()
    }

    pub fn len(&self) -> usize {
        self.slots.iter().flatten().count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Immutable year/day -> factory map, shareable across worker threads.
pub struct SolverRegistry {
    storage: SolverFactoryStorage,
}

impl SolverRegistry {
    pub fn storage(&self) -> &SolverFactoryStorage {
        &self.storage
    }

    /// Parse `input` with the solver registered for `year`/`day`.
    ///
    /// Out-of-range puzzles are `InvalidYearDay`, empty slots `NotFound`.
    pub fn create_solver<'a>(
        &self,
        year: u16,
        day: u8,
        input: &'a str,
    ) -> Result<Box<dyn DynSolver + 'a>, SolverError> {
        if slot_of(year, day).is_none() {
            return Err(SolverError::InvalidYearDay(year, day));
        }
        let registration = self
            .storage
            .registration(year, day)
            .ok_or(SolverError::NotFound(year, day))?;
        Ok((registration.factory)(input)?)
    }
}

/// Type-erased registration hook, so plugins of different solver types can
/// share one `inventory` collection.
///
/// Every `Solver + Sync + 'static` gets it through a blanket impl.
pub trait RegisterableSolver: Sync {
    fn register_with(
        &self,
        builder: SolverRegistryBuilder,
        year: u16,
        day: u8,
    ) -> Result<SolverRegistryBuilder, RegistrationError>;

    /// Number of parts this solver supports
    fn parts(&self) -> u8;
}

impl<S> RegisterableSolver for S
where
    S: Solver + Sync + 'static,
{
    fn register_with(
        &self,
        builder: SolverRegistryBuilder,
        year: u16,
        day: u8,
    ) -> Result<SolverRegistryBuilder, RegistrationError> {
        builder.register_solver::<S>(year, day)
    }

    fn parts(&self) -> u8 {
        S::PARTS
    }
}

/// A solver submitted for automatic registration.
///
/// Usually emitted by `#[derive(AutoRegisterSolver)]`; can also be submitted
/// by hand:
///
/// ```no_run
/// use aoc_solver::{AocParser, ParseError, SolveError, Solver, SolverPlugin};
///
/// struct Day1;
///
/// impl AocParser for Day1 {
///     type SharedData<'a> = ();
///
///     fn parse(_: &str) -> Result<Self::SharedData<'_>, ParseError> {
///         Ok(())
///     }
/// }
///
/// impl Solver for Day1 {
///     const PARTS: u8 = 1;
///
///     fn solve_part(_: &mut Self::SharedData<'_>, part: u8) -> Result<String, SolveError> {
///         Err(SolveError::PartNotImplemented(part))
///     }
/// }
///
/// aoc_solver::inventory::submit! {
///     SolverPlugin {
///         year: 2023,
///         day: 1,
///         solver: &Day1,
///         tags: &["2023", "easy"],
///     }
/// }
/// ```
pub struct SolverPlugin {
    pub year: u16,
    pub day: u8,
    pub solver: &'static dyn RegisterableSolver,
    /// Free-form tags used for filtering (e.g. "2023", "search")
    pub tags: &'static [&'static str],
}

inventory::collect!(SolverPlugin);

/// Register `$solver` for `$year`/`$day`, propagating registration errors
/// with `?`.
///
/// ```
/// use aoc_solver::{register_solver, AocParser, ParseError, RegistrationError, SolveError, Solver, SolverRegistryBuilder};
///
/// struct Day1;
///
/// impl AocParser for Day1 {
///     type SharedData<'a> = usize;
///
///     fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
///         Ok(input.lines().count())
///     }
/// }
///
/// impl Solver for Day1 {
///     const PARTS: u8 = 1;
///
///     fn solve_part(lines: &mut Self::SharedData<'_>, _: u8) -> Result<String, SolveError> {
///         Ok(lines.to_string())
///     }
/// }
///
/// fn build() -> Result<aoc_solver::SolverRegistry, RegistrationError> {
///     let mut builder = SolverRegistryBuilder::new();
///     register_solver!(builder, Day1, 2023, 1);
///     Ok(builder.build())
/// }
///
/// let registry = build().unwrap();
/// assert_eq!(registry.storage().len(), 1);
/// ```
#[macro_export]
macro_rules! register_solver {
    ($builder:expr, $solver:ty, $year:expr, $day:expr) => {
        $builder = $builder.register_solver::<$solver>($year, $day)?;
    };
}
