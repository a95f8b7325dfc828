//! Benchmark comparing the search front ends on random weighted grids.
//!
//! Run with: cargo run -p aoc-solutions --example search_benchmark --release
//!
//! Each grid is searched corner to corner with:
//! - `dijkstra` (no heuristic) - baseline
//! - `astar` with the manhattan distance as heuristic
//! - `bfs` on the same grid treated as unweighted
//!
//! The weighted front ends must agree on the cost; the timings show how much
//! the heuristic prunes.

use aoc_solutions::utils::geometry::Point;
use aoc_solutions::utils::grid::Grid;
use aoc_solutions::utils::path_search::{astar, bfs, dijkstra};
use rayon::prelude::*;
use std::time::Instant;

const GRID_SIZE: usize = 150;
const NUM_GRIDS: usize = 20;

/// Random 1-9 weights from a linear congruential generator
fn generate_random_grid(seed: u64, size: usize) -> Grid<u32> {
    let mut rng = seed;
    Grid::from_fn(size, size, |_| {
        rng = rng.wrapping_mul(6364136223846793005).wrapping_add(1);
        ((rng >> 33) % 9 + 1) as u32
    })
}

fn run_dijkstra(grid: &Grid<u32>) -> Option<u32> {
    let exit = grid.last_point();
    dijkstra(
        Point::ORIGIN,
        |p| *p == exit,
        |p| grid.neighbors4(*p),
        |_, to| grid[*to],
    )
    .cost()
}

fn run_astar(grid: &Grid<u32>) -> Option<u32> {
    let exit = grid.last_point();
    astar(
        Point::ORIGIN,
        |p| *p == exit,
        |p| grid.neighbors4(*p),
        |_, to| grid[*to],
        |p| p.manhattan(exit) as u32,
    )
    .cost()
}

fn run_bfs(grid: &Grid<u32>) -> Option<usize> {
    let exit = grid.last_point();
    bfs(Point::ORIGIN, |p| *p == exit, |p| grid.neighbors4(*p)).cost()
}

fn time<T>(label: &str, grids: &[Grid<u32>], f: impl Fn(&Grid<u32>) -> T + Sync) -> Vec<T>
where
    T: Send,
{
    let start = Instant::now();
    let results: Vec<T> = grids.iter().map(&f).collect();
    let sequential = start.elapsed();

    let start = Instant::now();
    let _: Vec<T> = grids.par_iter().map(&f).collect();
    let parallel = start.elapsed();

    println!("{label:<10} sequential: {sequential:>10.2?}  parallel: {parallel:>10.2?}");
    results
}

fn main() {
    println!("=== Path search benchmark: {NUM_GRIDS} grids of {GRID_SIZE}x{GRID_SIZE} ===\n");

    let grids: Vec<Grid<u32>> = (0..NUM_GRIDS as u64)
        .map(|seed| generate_random_grid(seed, GRID_SIZE))
        .collect();

    let dijkstra_costs = time("dijkstra", &grids, run_dijkstra);
    let astar_costs = time("astar", &grids, run_astar);
    let bfs_steps = time("bfs", &grids, run_bfs);

    assert_eq!(dijkstra_costs, astar_costs, "A* disagrees with Dijkstra");
    assert!(
        bfs_steps.iter().all(|s| *s == Some(2 * (GRID_SIZE - 1))),
        "BFS step count on an open grid must be the manhattan distance"
    );

    let total: u32 = dijkstra_costs.iter().flatten().sum();
    println!("\nAll front ends agree; total cost over all grids: {total}");
}
