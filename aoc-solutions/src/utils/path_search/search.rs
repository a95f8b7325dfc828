//! Best-first search engine and its closure and trait front ends.

use std::collections::HashMap;
use std::collections::hash_map::Entry;
use std::hash::Hash;

use super::cost::Cost;
use super::frontier::Frontier;
use super::result::{FoundPath, SearchResult};

/// An implicitly defined graph to search.
///
/// Implement this trait when the graph carries its own data (a parsed puzzle
/// grid, a lookup table, ...). For one-off searches the closure based
/// [`astar`], [`dijkstra`] and [`bfs`] are usually shorter.
///
/// # Example
///
/// ```rust
/// use aoc_solutions::utils::path_search::{find_path, SearchSpace};
///
/// /// Integers where each step either adds one or doubles.
/// struct Doubling;
///
/// impl SearchSpace<u32> for Doubling {
///     type Cost = u32;
///
///     fn neighbors(&self, n: &u32, out: &mut Vec<u32>) {
///         out.extend([n + 1, n * 2]);
///     }
/// }
///
/// let result = find_path(&Doubling, 1, |n| *n == 10);
/// assert_eq!(result.cost(), Some(4)); // 1 -> 2 -> 4 -> 5 -> 10
/// ```
pub trait SearchSpace<N> {
    type Cost: Cost;

    /// Append the neighbors of `node` to `out`. `out` is empty on entry.
    fn neighbors(&self, node: &N, out: &mut Vec<N>);

    /// Cost of moving from `from` to its neighbor `to`. Must be `>= ZERO`.
    fn cost(&self, _from: &N, _to: &N) -> Self::Cost {
        Self::Cost::ONE
    }

    /// Lower bound of the remaining cost from `node` to the nearest goal.
    ///
    /// Must never overestimate (admissible), otherwise the returned path may
    /// not be optimal.
    fn heuristic(&self, _node: &N) -> Self::Cost {
        Self::Cost::ZERO
    }
}

/// Search a [`SearchSpace`] for the cheapest path from `start` to any node
/// satisfying `is_goal`.
pub fn find_path<N, S, G>(space: &S, start: N, is_goal: G) -> SearchResult<N, S::Cost>
where
    N: Eq + Hash + Clone,
    S: SearchSpace<N> + ?Sized,
    G: FnMut(&N) -> bool,
{
    best_first(
        start,
        is_goal,
        |node, out| space.neighbors(node, out),
        |from, to| space.cost(from, to),
        |node| space.heuristic(node),
    )
}

/// A* search for the cheapest path from `start` to any node satisfying
/// `is_goal`.
///
/// `cost` must never return a negative value and `heuristic` must never
/// overestimate the remaining cost to a goal; neither is checked. With a
/// constant zero heuristic this is Dijkstra's algorithm.
///
/// Among several equally cheap paths the result is deterministic: nodes with
/// equal estimates are expanded in discovery order, so the order in which
/// `neighbors` yields nodes decides which path wins.
pub fn astar<N, C, G, NF, I, CF, HF>(
    start: N,
    is_goal: G,
    mut neighbors: NF,
    cost: CF,
    heuristic: HF,
) -> SearchResult<N, C>
where
    N: Eq + Hash + Clone,
    C: Cost,
    G: FnMut(&N) -> bool,
    NF: FnMut(&N) -> I,
    I: IntoIterator<Item = N>,
    CF: FnMut(&N, &N) -> C,
    HF: FnMut(&N) -> C,
{
    best_first(
        start,
        is_goal,
        |node, out| out.extend(neighbors(node)),
        cost,
        heuristic,
    )
}

/// Dijkstra search: [`astar`] without a heuristic.
pub fn dijkstra<N, C, G, NF, I, CF>(
    start: N,
    is_goal: G,
    neighbors: NF,
    cost: CF,
) -> SearchResult<N, C>
where
    N: Eq + Hash + Clone,
    C: Cost,
    G: FnMut(&N) -> bool,
    NF: FnMut(&N) -> I,
    I: IntoIterator<Item = N>,
    CF: FnMut(&N, &N) -> C,
{
    astar(start, is_goal, neighbors, cost, |_| C::ZERO)
}

/// Breadth-first search: every edge costs one, the result cost is the number
/// of steps.
pub fn bfs<N, G, NF, I>(start: N, is_goal: G, neighbors: NF) -> SearchResult<N, usize>
where
    N: Eq + Hash + Clone,
    G: FnMut(&N) -> bool,
    NF: FnMut(&N) -> I,
    I: IntoIterator<Item = N>,
{
    astar(start, is_goal, neighbors, |_, _| 1, |_| 0)
}

/// Best known way to reach a node. Cost and predecessor live in one record so
/// they always describe the same path.
struct Visit<N, C> {
    cost: C,
    predecessor: Option<N>,
}

fn best_first<N, C, G, E, CF, HF>(
    start: N,
    mut is_goal: G,
    mut expand: E,
    mut cost: CF,
    mut heuristic: HF,
) -> SearchResult<N, C>
where
    N: Eq + Hash + Clone,
    C: Cost,
    G: FnMut(&N) -> bool,
    E: FnMut(&N, &mut Vec<N>),
    CF: FnMut(&N, &N) -> C,
    HF: FnMut(&N) -> C,
{
    if is_goal(&start) {
        return FoundPath::new(start.clone(), C::ZERO, vec![start]).into();
    }

    let mut visits: HashMap<N, Visit<N, C>> = HashMap::new();
    let mut frontier = Frontier::new();

    let start_estimate = heuristic(&start);
    visits.insert(
        start.clone(),
        Visit {
            cost: C::ZERO,
            predecessor: None,
        },
    );
    frontier.push(start, C::ZERO, start_estimate);

    let mut buf = Vec::new();

    while let Some(entry) = frontier.pop() {
        let current = entry.node;

        // Skip stale entries superseded by a cheaper path.
        if visits.get(&current).is_some_and(|v| entry.cost > v.cost) {
            continue;
        }

        if is_goal(&current) {
            let path = reconstruct_path(&visits, current.clone());
            return FoundPath::new(current, entry.cost, path).into();
        }

        buf.clear();
        expand(&current, &mut buf);

        for neighbor in buf.drain(..) {
            let candidate = entry.cost + cost(&current, &neighbor);

            let relaxed = match visits.entry(neighbor) {
                Entry::Occupied(mut occupied) => {
                    if candidate >= occupied.get().cost {
                        continue;
                    }
                    occupied.insert(Visit {
                        cost: candidate,
                        predecessor: Some(current.clone()),
                    });
                    occupied.key().clone()
                }
                Entry::Vacant(vacant) => {
                    let node = vacant.key().clone();
                    vacant.insert(Visit {
                        cost: candidate,
                        predecessor: Some(current.clone()),
                    });
                    node
                }
            };

            let estimate = candidate + heuristic(&relaxed);
            frontier.push(relaxed, candidate, estimate);
        }
    }

    SearchResult::NotFound
}

fn reconstruct_path<N, C>(visits: &HashMap<N, Visit<N, C>>, goal: N) -> Vec<N>
where
    N: Eq + Hash + Clone,
{
    let mut path = vec![goal];
    while let Some(previous) = path
        .last()
        .and_then(|node| visits.get(node))
        .and_then(|visit| visit.predecessor.clone())
    {
        path.push(previous);
    }
    path.reverse();
    path
}
