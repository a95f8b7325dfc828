//! Search outcome types.

/// A minimum-cost path from the start node to a goal node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FoundPath<N, C> {
    goal: N,
    cost: C,
    path: Vec<N>,
}

impl<N, C: Copy> FoundPath<N, C> {
    pub(super) fn new(goal: N, cost: C, path: Vec<N>) -> Self {
        Self { goal, cost, path }
    }

    /// The node that satisfied the goal predicate.
    pub fn goal(&self) -> &N {
        &self.goal
    }

    /// Total cost of the path.
    pub fn cost(&self) -> C {
        self.cost
    }

    /// Nodes from start to goal, both included.
    pub fn path(&self) -> &[N] {
        &self.path
    }

    /// Number of edges on the path.
    pub fn len(&self) -> usize {
        self.path.len() - 1
    }

    /// `true` when the start node itself was the goal.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn into_path(self) -> Vec<N> {
        self.path
    }
}

/// Outcome of a path search.
///
/// `NotFound` is an ordinary outcome: the reachable part of the graph was
/// exhausted without meeting the goal predicate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchResult<N, C> {
    Found(FoundPath<N, C>),
    NotFound,
}

impl<N, C: Copy> SearchResult<N, C> {
    pub fn is_found(&self) -> bool {
        matches!(self, Self::Found(_))
    }

    /// Total cost, if a goal was reached.
    pub fn cost(&self) -> Option<C> {
        match self {
            Self::Found(found) => Some(found.cost()),
            Self::NotFound => None,
        }
    }

    /// The reached goal node, if any.
    pub fn goal(&self) -> Option<&N> {
        match self {
            Self::Found(found) => Some(found.goal()),
            Self::NotFound => None,
        }
    }

    /// Nodes from start to goal, if a goal was reached.
    pub fn path(&self) -> Option<&[N]> {
        match self {
            Self::Found(found) => Some(found.path()),
            Self::NotFound => None,
        }
    }

    pub fn into_found(self) -> Option<FoundPath<N, C>> {
        match self {
            Self::Found(found) => Some(found),
            Self::NotFound => None,
        }
    }

    pub fn into_path(self) -> Option<Vec<N>> {
        self.into_found().map(FoundPath::into_path)
    }
}

impl<N, C> From<FoundPath<N, C>> for SearchResult<N, C> {
    fn from(found: FoundPath<N, C>) -> Self {
        Self::Found(found)
    }
}
