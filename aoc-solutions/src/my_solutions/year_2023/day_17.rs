use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};
use tracing::debug;

use crate::my_solutions::{invalid_grid, unreachable_goal};
use crate::utils::geometry::{Direction, Point, Rotation};
use crate::utils::grid::Grid;
use crate::utils::path_search::{SearchSpace, find_path};

/// Clumsy Crucible: least heat loss to the factory when the crucible must
/// turn after a bounded run of straight moves.
#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2023, day = 17, tags = ["khangp0000", "search", "astar"])]
pub struct Solver;

impl AocParser for Solver {
    type SharedData<'a> = Grid<u8>;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        Grid::parse_with(input, |c| match c.to_digit(10) {
            Some(d @ 1..=9) => Ok(d as u8),
            _ => Err("heat loss must be a digit 1-9"),
        })
        .map_err(invalid_grid)
    }
}

impl PartSolver<1> for Solver {
    fn solve(city: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        least_heat_loss(city, 1, 3)
    }
}

impl PartSolver<2> for Solver {
    fn solve(city: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        least_heat_loss(city, 4, 10)
    }
}

/// Where the crucible is, which way it faces and how many blocks it has
/// moved in a straight line. `run == 0` only at the start, where any turn
/// is allowed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
struct Crucible {
    pos: Point,
    heading: Direction,
    run: u8,
}

struct CityBlocks<'g> {
    city: &'g Grid<u8>,
    min_run: u8,
    max_run: u8,
    factory: Point,
}

impl CityBlocks<'_> {
    /// At the factory and allowed to stop there. A crucible that never moved
    /// (a single-block city) has nothing left to satisfy.
    fn is_factory(&self, crucible: &Crucible) -> bool {
        crucible.pos == self.factory && (crucible.run == 0 || crucible.run >= self.min_run)
    }

    fn advance(&self, from: &Crucible, heading: Direction, out: &mut Vec<Crucible>) {
        let pos = from.pos.step(heading);
        if !self.city.contains(pos) {
            return;
        }
        let run = if heading == from.heading { from.run + 1 } else { 1 };
        out.push(Crucible { pos, heading, run });
    }
}

impl SearchSpace<Crucible> for CityBlocks<'_> {
    type Cost = u32;

    fn neighbors(&self, node: &Crucible, out: &mut Vec<Crucible>) {
        if node.run < self.max_run {
            self.advance(node, node.heading, out);
        }
        if node.run == 0 || node.run >= self.min_run {
            self.advance(node, node.heading.turn(Rotation::Clockwise), out);
            self.advance(node, node.heading.turn(Rotation::CounterClockwise), out);
        }
    }

    fn cost(&self, _from: &Crucible, to: &Crucible) -> u32 {
        u32::from(self.city[to.pos])
    }

    fn heuristic(&self, node: &Crucible) -> u32 {
        // Entering a block costs at least 1
        node.pos.manhattan(self.factory) as u32
    }
}

fn least_heat_loss(city: &Grid<u8>, min_run: u8, max_run: u8) -> Result<String, SolveError> {
    let blocks = CityBlocks {
        city,
        min_run,
        max_run,
        factory: city.last_point(),
    };
    let start = Crucible {
        pos: Point::ORIGIN,
        heading: Direction::Right,
        run: 0,
    };

    let found = find_path(&blocks, start, |c| blocks.is_factory(c))
        .into_found()
        .ok_or_else(|| unreachable_goal("factory"))?;

    debug!(
        min_run,
        max_run,
        heat_loss = found.cost(),
        blocks = found.len(),
        "crucible route"
    );
    Ok(found.cost().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use aoc_solver::Solver as _;

    const EXAMPLE: &str = "\
2413432311323
3215453535623
3255245654254
3446585845452
4546657867536
1438598798454
4457876987766
3637877979653
4654967986887
4564679986453
1224686865563
2546548887735
4322674655533
";

    const UNFORTUNATE: &str = "\
111111111111
999999999991
999999999991
999999999991
999999999991
";

    #[test]
    fn test_example() {
        let mut city = Solver::parse(EXAMPLE).unwrap();
        assert_eq!(Solver::solve_part(&mut city, 1).unwrap(), "102");
        assert_eq!(Solver::solve_part(&mut city, 2).unwrap(), "94");
    }

    #[test]
    fn test_ultra_crucible_must_run_four_before_stopping() {
        let mut city = Solver::parse(UNFORTUNATE).unwrap();
        assert_eq!(Solver::solve_part(&mut city, 2).unwrap(), "71");
    }

    #[test]
    fn test_runs_respect_limits() {
        let city = Solver::parse(EXAMPLE).unwrap();
        let blocks = CityBlocks {
            city: &city,
            min_run: 4,
            max_run: 10,
            factory: city.last_point(),
        };
        let start = Crucible {
            pos: Point::ORIGIN,
            heading: Direction::Right,
            run: 0,
        };
        let path = find_path(&blocks, start, |c| blocks.is_factory(c))
            .into_path()
            .unwrap();

        for pair in path.windows(2) {
            let (from, to) = (pair[0], pair[1]);
            assert!(to.run <= 10);
            if to.heading != from.heading && from.run != 0 {
                assert!(from.run >= 4, "turned after {} blocks", from.run);
            }
        }
    }

    #[test]
    fn test_single_block_city_loses_no_heat() {
        let mut city = Solver::parse("5").unwrap();
        assert_eq!(Solver::solve_part(&mut city, 1).unwrap(), "0");
        assert_eq!(Solver::solve_part(&mut city, 2).unwrap(), "0");
    }

    #[test]
    fn test_too_narrow_for_ultra_crucible() {
        let mut city = Solver::parse("12\n34").unwrap();
        assert_eq!(Solver::solve_part(&mut city, 1).unwrap(), "6");
        assert!(matches!(
            Solver::solve_part(&mut city, 2),
            Err(SolveError::SolveFailed(_))
        ));
    }
}
