//! Solver whose second part reuses what the first part computed
//!
//! Run with: cargo run -p aoc-solver --example shared_state

use aoc_solver::{
    AocParser, AocSolver, AutoRegisterSolver, ParseError, PartSolver, SolveError,
    SolverRegistryBuilder,
};

/// Calories carried by each elf, one blank-line separated group per elf
#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2022, day = 1, tags = ["demo"])]
pub struct Calories;

pub struct Elves {
    totals: Vec<u64>,
    sorted: bool,
}

impl AocParser for Calories {
    type SharedData<'a> = Elves;

    fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
        let totals = input
            .split("\n\n")
            .map(|group| {
                group
                    .lines()
                    .map(|l| {
                        l.trim()
                            .parse::<u64>()
                            .map_err(|_| ParseError::InvalidFormat(format!("not a number: {l}")))
                    })
                    .sum::<Result<u64, _>>()
            })
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Elves {
            totals,
            sorted: false,
        })
    }
}

impl PartSolver<1> for Calories {
    fn solve(elves: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        elves.totals.sort_unstable_by(|a, b| b.cmp(a));
        elves.sorted = true;
        Ok(elves.totals.first().copied().unwrap_or(0).to_string())
    }
}

impl PartSolver<2> for Calories {
    fn solve(elves: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        if !elves.sorted {
            elves.totals.sort_unstable_by(|a, b| b.cmp(a));
        }
        Ok(elves.totals.iter().take(3).sum::<u64>().to_string())
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let registry = SolverRegistryBuilder::new()
        .register_solver_plugins(|plugin| plugin.tags.contains(&"demo"))?
        .build();

    let input = "1000\n2000\n3000\n\n4000\n\n5000\n6000\n\n7000\n8000\n9000\n\n10000";
    let mut solver = registry.create_solver(2022, 1, input)?;

    for part in 1..=solver.parts() {
        let result = solver.solve(part)?;
        println!("Part {part}: {} ({})", result.answer, result.duration());
    }
    Ok(())
}
