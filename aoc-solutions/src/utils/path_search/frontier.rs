//! Priority queue of discovered-but-not-expanded nodes.

use std::cmp::Ordering;
use std::collections::BinaryHeap;

use super::cost::Cost;

/// A node waiting on the frontier together with its bookkeeping.
#[derive(Debug)]
pub(super) struct FrontierEntry<N, C> {
    pub node: N,
    /// Accumulated cost from the start when this entry was pushed.
    pub cost: C,
    /// `cost + heuristic(node)`.
    pub estimate: C,
    /// Insertion order, unique within one search.
    seq: u64,
}

impl<N, C: Cost> Ord for FrontierEntry<N, C> {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reversed so `BinaryHeap` pops the lowest estimate, oldest first.
        other
            .estimate
            .cmp(&self.estimate)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

impl<N, C: Cost> PartialOrd for FrontierEntry<N, C> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

// `seq` is unique per search, so it alone decides identity.
impl<N, C: Cost> PartialEq for FrontierEntry<N, C> {
    fn eq(&self, other: &Self) -> bool {
        self.seq == other.seq
    }
}

impl<N, C: Cost> Eq for FrontierEntry<N, C> {}

/// Min-heap on `(estimate, insertion order)`.
///
/// Entries with equal estimates leave in the order they were pushed, which
/// makes the search deterministic among equal-cost alternatives.
pub(super) struct Frontier<N, C> {
    heap: BinaryHeap<FrontierEntry<N, C>>,
    next_seq: u64,
}

impl<N, C: Cost> Frontier<N, C> {
    pub fn new() -> Self {
        Self {
            heap: BinaryHeap::new(),
            next_seq: 0,
        }
    }

    pub fn push(&mut self, node: N, cost: C, estimate: C) {
        let seq = self.next_seq;
        self.next_seq += 1;
        self.heap.push(FrontierEntry {
            node,
            cost,
            estimate,
            seq,
        });
    }

    pub fn pop(&mut self) -> Option<FrontierEntry<N, C>> {
        self.heap.pop()
    }

    #[cfg(test)]
    pub fn len(&self) -> usize {
        self.heap.len()
    }
}
