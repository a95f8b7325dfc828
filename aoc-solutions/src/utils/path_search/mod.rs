//! Generic shortest-path search over implicit graphs.
//!
//! One best-first engine serves every flavour of shortest-path query the
//! puzzles need:
//!
//! - [`astar`]: caller supplied step cost and admissible heuristic
//! - [`dijkstra`]: step cost, no heuristic
//! - [`bfs`]: every step costs one
//! - [`find_path`]: the same engine driven by a [`SearchSpace`] implementation
//!
//! Nodes are any `Eq + Hash + Clone` value; the engine never looks inside
//! them. Edges are produced on demand by the neighbor function, so graphs
//! are never materialised.
//!
//! # Guarantees
//!
//! - If the start node satisfies the goal predicate, the result is a
//!   zero-cost single-node path and no neighbor, cost or heuristic function
//!   is called.
//! - Exhausting the reachable graph without meeting the goal yields
//!   [`SearchResult::NotFound`]. It is a normal value, never a panic.
//! - Equal estimates are expanded in discovery order, so repeated searches
//!   over the same input return the same path.
//! - Each call owns all of its state. Calls can run concurrently on
//!   different threads.
//!
//! # Caller contract
//!
//! Step costs must be non-negative and the heuristic must never overestimate
//! the remaining cost. Violations are not detected: the result may be
//! suboptimal, and an infinite reachable graph without a goal never
//! terminates.
//!
//! # Example: weighted line graph
//!
//! ```rust
//! use aoc_solutions::utils::path_search::dijkstra;
//!
//! let edges = |n: &char| -> Vec<(char, u32)> {
//!     match n {
//!         'A' => vec![('B', 5), ('C', 100)],
//!         'B' => vec![('C', 1)],
//!         _ => vec![],
//!     }
//! };
//!
//! let result = dijkstra(
//!     'A',
//!     |n| *n == 'C',
//!     |n| edges(n).into_iter().map(|(to, _)| to),
//!     |from, to| edges(from).into_iter().find(|(n, _)| n == to).map_or(0, |(_, w)| w),
//! );
//!
//! assert_eq!(result.cost(), Some(6));
//! assert_eq!(result.path(), Some(&['A', 'B', 'C'][..]));
//! ```
//!
//! # Example: grid BFS
//!
//! ```rust
//! use aoc_solutions::utils::geometry::Point;
//! use aoc_solutions::utils::path_search::bfs;
//!
//! let walls = [Point::new(1, 0), Point::new(1, 1)];
//! let open = |p: &Point| (0..3).contains(&p.x) && (0..3).contains(&p.y) && !walls.contains(p);
//!
//! let result = bfs(
//!     Point::new(0, 0),
//!     |p| *p == Point::new(2, 0),
//!     |p| p.neighbors4().into_iter().filter(|n| open(n)).collect::<Vec<_>>(),
//! );
//!
//! assert_eq!(result.cost(), Some(6));
//! ```

mod cost;
mod frontier;
mod result;
mod search;

pub use cost::Cost;
pub use result::{FoundPath, SearchResult};
pub use search::{SearchSpace, astar, bfs, dijkstra, find_path};
