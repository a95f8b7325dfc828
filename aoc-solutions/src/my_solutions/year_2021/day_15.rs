use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};
use tracing::debug;

use crate::my_solutions::{invalid_grid, unreachable_goal};
use crate::utils::geometry::Point;
use crate::utils::grid::Grid;
use crate::utils::path_search::{astar, dijkstra};

/// Chiton: lowest total risk from the top-left to the bottom-right corner.
#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2021, day = 15, tags = ["khangp0000", "search", "dijkstra"])]
pub struct Solver;

const TILES: usize = 5;

impl AocParser for Solver {
    type SharedData<'a> = Grid<u8>;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        Grid::parse_with(input, |c| match c.to_digit(10) {
            Some(d @ 1..=9) => Ok(d as u8),
            _ => Err("risk must be a digit 1-9"),
        })
        .map_err(invalid_grid)
    }
}

impl PartSolver<1> for Solver {
    fn solve(cave: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let exit = cave.last_point();
        let found = dijkstra(
            Point::ORIGIN,
            |p| *p == exit,
            |p| cave.neighbors4(*p),
            |_, to| u32::from(cave[*to]),
        )
        .into_found()
        .ok_or_else(|| unreachable_goal("cave exit"))?;

        debug!(risk = found.cost(), steps = found.len(), "lowest-risk path");
        Ok(found.cost().to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(cave: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let full = tile(cave, TILES);
        let exit = full.last_point();
        let found = astar(
            Point::ORIGIN,
            |p| *p == exit,
            |p| full.neighbors4(*p),
            |_, to| u32::from(full[*to]),
            // admissible: every step costs at least 1
            |p| p.manhattan(exit) as u32,
        )
        .into_found()
        .ok_or_else(|| unreachable_goal("tiled cave exit"))?;

        debug!(
            width = full.width(),
            height = full.height(),
            risk = found.cost(),
            steps = found.len(),
            "lowest-risk path through tiled cave"
        );
        Ok(found.cost().to_string())
    }
}

/// Repeat `cave` `times` × `times`, adding one risk per tile step and
/// wrapping 9 back to 1.
fn tile(cave: &Grid<u8>, times: usize) -> Grid<u8> {
    let (width, height) = (cave.width() as i64, cave.height() as i64);
    Grid::from_fn(cave.width() * times, cave.height() * times, |p| {
        let base = cave[Point::new(p.x % width, p.y % height)];
        let bump = (p.x / width + p.y / height) as u8;
        (base + bump - 1) % 9 + 1
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use aoc_solver::Solver as _;

    const EXAMPLE: &str = "\
1163751742
1381373672
2136511328
3694931569
7463417111
1319128137
1359912421
3125421639
1293138521
2311944581
";

    #[test]
    fn test_example() {
        let mut cave = Solver::parse(EXAMPLE).unwrap();
        assert_eq!(Solver::solve_part(&mut cave, 1).unwrap(), "40");
        assert_eq!(Solver::solve_part(&mut cave, 2).unwrap(), "315");
    }

    #[test]
    fn test_tiling_wraps_risk() {
        let cave = Solver::parse("8").unwrap();
        let tiled = tile(&cave, 5);
        let row: Vec<u8> = (0..5).map(|x| tiled[Point::new(x, 0)]).collect();
        assert_eq!(row, vec![8, 9, 1, 2, 3]);
        assert_eq!(tiled[Point::new(4, 4)], 7);
    }

    #[test]
    fn test_single_cell_costs_nothing() {
        let mut cave = Solver::parse("5").unwrap();
        assert_eq!(Solver::solve_part(&mut cave, 1).unwrap(), "0");
    }

    #[test]
    fn test_rejects_zero_risk() {
        assert!(Solver::parse("10\n11").is_err());
    }
}
