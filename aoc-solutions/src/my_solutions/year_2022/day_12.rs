use anyhow::{Context, anyhow};
use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};
use tracing::debug;

use crate::my_solutions::unreachable_goal;
use crate::utils::geometry::Point;
use crate::utils::grid::Grid;
use crate::utils::path_search::bfs;

/// Hill Climbing Algorithm: fewest steps up a heightmap where each step may
/// climb at most one level.
#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2022, day = 12, tags = ["khangp0000", "search", "bfs"])]
pub struct Solver;

#[derive(Debug)]
pub struct Heightmap {
    heights: Grid<u8>,
    start: Point,
    summit: Point,
}

impl AocParser for Solver {
    type SharedData<'a> = Heightmap;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        parse_heightmap(input).map_err(|e| ParseError::InvalidFormat(format!("{e:#}")))
    }
}

fn parse_heightmap(input: &str) -> anyhow::Result<Heightmap> {
    let mut heights = Grid::parse_with(input, |c| match c {
        'a'..='z' | 'S' | 'E' => Ok(c as u8),
        _ => Err(anyhow!("expected a-z, S or E")),
    })?;

    let start = heights.position(|&c| c == b'S').context("no start marker 'S'")?;
    let summit = heights.position(|&c| c == b'E').context("no summit marker 'E'")?;

    if let Some(cell) = heights.get_mut(start) {
        *cell = b'a';
    }
    if let Some(cell) = heights.get_mut(summit) {
        *cell = b'z';
    }

    Ok(Heightmap {
        heights,
        start,
        summit,
    })
}

impl Heightmap {
    /// Squares reachable in one step from `p` going uphill.
    fn climb(&self, p: Point) -> impl Iterator<Item = Point> + '_ {
        let limit = self.heights[p] + 1;
        self.heights
            .neighbors4(p)
            .filter(move |n| self.heights[*n] <= limit)
    }

    /// Squares from which `p` can be reached in one step, i.e. climbing in
    /// reverse.
    fn descend(&self, p: Point) -> impl Iterator<Item = Point> + '_ {
        let here = self.heights[p];
        self.heights
            .neighbors4(p)
            .filter(move |n| here <= self.heights[*n] + 1)
    }
}

impl PartSolver<1> for Solver {
    fn solve(map: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let map = &*map;
        let found = bfs(map.start, |p| *p == map.summit, |p| map.climb(*p))
            .into_found()
            .ok_or_else(|| unreachable_goal("summit"))?;

        debug!(steps = found.cost(), "climbed from start");
        Ok(found.cost().to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(map: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        // Walk down from the summit; the first lowest square found is the
        // best trail start.
        let map = &*map;
        let found = bfs(
            map.summit,
            |p| map.heights[*p] == b'a',
            |p| map.descend(*p),
        )
        .into_found()
        .ok_or_else(|| unreachable_goal("any square of elevation a"))?;

        debug!(steps = found.cost(), trailhead = ?found.goal(), "best hiking trail");
        Ok(found.cost().to_string())
    }
}
