//! Property-based tests for the AocSolver derive macro

use aoc_solver::{
    AocParser, AocSolver, ParseError, PartSolver, SolveError, Solver, SolverRegistryBuilder,
};
use proptest::prelude::*;

#[derive(AocSolver)]
#[aoc_solver(max_parts = 2)]
struct SumProduct;

impl AocParser for SumProduct {
    type SharedData<'a> = Vec<i64>;

    fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
        input
            .lines()
            .filter(|l| !l.is_empty())
            .map(|l| {
                l.parse()
                    .map_err(|_| ParseError::InvalidFormat(format!("bad int: {l}")))
            })
            .collect()
    }
}

impl PartSolver<1> for SumProduct {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(shared.iter().sum::<i64>().to_string())
    }
}

impl PartSolver<2> for SumProduct {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(shared.iter().product::<i64>().to_string())
    }
}

/// Part 1 records the longest line so part 2 can reuse it
#[derive(AocSolver)]
#[aoc_solver(max_parts = 2)]
struct Longest;

struct Lines<'a> {
    lines: Vec<&'a str>,
    longest: Option<&'a str>,
}

impl AocParser for Longest {
    type SharedData<'a> = Lines<'a>;

    fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
        Ok(Lines {
            lines: input.lines().collect(),
            longest: None,
        })
    }
}

impl PartSolver<1> for Longest {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let longest = shared
            .lines
            .iter()
            .copied()
            .max_by_key(|l| l.len())
            .unwrap_or("");
        shared.longest = Some(longest);
        Ok(longest.len().to_string())
    }
}

impl PartSolver<2> for Longest {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        shared
            .longest
            .map(str::to_string)
            .ok_or(SolveError::PartNotImplemented(2))
    }
}

fn to_input(numbers: &[i64]) -> String {
    numbers
        .iter()
        .map(|n| n.to_string())
        .collect::<Vec<_>>()
        .join("\n")
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    #[test]
    fn prop_dispatches_to_part_solver(
        numbers in prop::collection::vec(1i64..10, 1..5),
        part in 1u8..=2,
    ) {
        let input = to_input(&numbers);
        let mut shared1 = SumProduct::parse(&input).unwrap();
        let mut shared2 = SumProduct::parse(&input).unwrap();

        let dispatched = SumProduct::solve_part(&mut shared1, part).unwrap();
        let direct = match part {
            1 => <SumProduct as PartSolver<1>>::solve(&mut shared2),
            _ => <SumProduct as PartSolver<2>>::solve(&mut shared2),
        }
        .unwrap();

        prop_assert_eq!(dispatched, direct);
    }

    #[test]
    fn prop_rejects_parts_outside_range(part in prop_oneof![Just(0u8), 3u8..=255]) {
        let mut shared = SumProduct::parse("1\n2").unwrap();
        match SumProduct::solve_part(&mut shared, part) {
            Err(SolveError::PartOutOfRange(p)) => prop_assert_eq!(p, part),
            other => prop_assert!(false, "expected PartOutOfRange, got {:?}", other),
        }
    }
}

#[test]
fn test_derived_parts_constant() {
    assert_eq!(<SumProduct as Solver>::PARTS, 2);
}

#[test]
fn test_parts_share_borrowed_state() {
    let mut shared = Longest::parse("ab\nlongest\nxyz").unwrap();
    assert_eq!(Longest::solve_part(&mut shared, 1).unwrap(), "7");
    assert_eq!(Longest::solve_part(&mut shared, 2).unwrap(), "longest");
}

#[test]
fn test_part_two_alone_sees_no_state() {
    let mut shared = Longest::parse("ab").unwrap();
    assert!(matches!(
        Longest::solve_part(&mut shared, 2),
        Err(SolveError::PartNotImplemented(2))
    ));
}

#[test]
fn test_derived_solver_through_registry() {
    let registry = SolverRegistryBuilder::new()
        .register_solver::<SumProduct>(2022, 1)
        .unwrap()
        .build();

    let mut solver = registry.create_solver(2022, 1, "2\n3\n4").unwrap();
    assert_eq!(solver.parts(), 2);
    assert_eq!(solver.solve(1).unwrap().answer, "9");
    assert_eq!(solver.solve(2).unwrap().answer, "24");

    assert!(registry.create_solver(2022, 1, "x").is_err());
}
