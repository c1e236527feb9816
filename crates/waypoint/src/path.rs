use std::fmt;

use crate::{graph::Vertex, weight::Weight};

/// Sequence of vertices from the start to the goal, both inclusive.
#[derive(Debug, Clone, PartialEq)]
pub struct Path<V: Vertex, W: Weight> {
    vertices: Vec<V>,
    cost: W,
}

impl<V: Vertex, W: Weight> Path<V, W> {
    pub(crate) fn new(vertices: Vec<V>, cost: W) -> Self {
        debug_assert!(!vertices.is_empty());
        Path { vertices, cost }
    }

    pub fn vertices(&self) -> &[V] {
        &self.vertices
    }

    pub fn into_vertices(self) -> Vec<V> {
        self.vertices
    }

    /// Sum of the edge weights along the path.
    pub fn cost(&self) -> W {
        self.cost
    }

    /// Number of vertices, including start and goal.
    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    /// Always false for a path produced by a search, which holds at least the
    /// start vertex. Provided alongside [`Path::len`].
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    pub fn start(&self) -> &V {
        &self.vertices[0]
    }

    pub fn goal(&self) -> &V {
        &self.vertices[self.vertices.len() - 1]
    }

    /// Consecutive vertex pairs, one per traversed edge.
    pub fn edges(&self) -> impl Iterator<Item = (&V, &V)> {
        self.vertices.windows(2).map(|pair| (&pair[0], &pair[1]))
    }
}

impl<V, W> fmt::Display for Path<V, W>
where
    V: Vertex + fmt::Display,
    W: Weight,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (index, vertex) in self.vertices.iter().enumerate() {
            if index > 0 {
                write!(f, " -> ")?;
            }
            write!(f, "{}", vertex)?;
        }
        Ok(())
    }
}

/// Result of a search that ran to completion. `NotFound` means the goal is
/// not reachable from the start, which is a normal state for a disconnected
/// graph.
#[derive(Debug, Clone, PartialEq)]
pub enum SearchOutcome<V: Vertex, W: Weight> {
    Found(Path<V, W>),
    NotFound,
}

impl<V: Vertex, W: Weight> SearchOutcome<V, W> {
    pub fn is_found(&self) -> bool {
        matches!(self, SearchOutcome::Found(_))
    }

    pub fn path(&self) -> Option<&Path<V, W>> {
        match self {
            SearchOutcome::Found(path) => Some(path),
            SearchOutcome::NotFound => None,
        }
    }

    pub fn into_path(self) -> Option<Path<V, W>> {
        match self {
            SearchOutcome::Found(path) => Some(path),
            SearchOutcome::NotFound => None,
        }
    }
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct SearchStats {
    /// Frontier pops, stale entries included.
    pub iterations: usize,
    /// Vertices whose neighbors were relaxed.
    pub expanded: usize,
    /// Frontier entries dropped because a cheaper one was already found.
    pub stale_skipped: usize,
    /// Entries pushed onto the frontier, the start included.
    pub pushed: usize,
}

#[derive(Debug, Default, Clone, Copy)]
pub struct SearchOptions {
    pub include_debug_info: bool,
}

impl SearchOptions {
    pub fn with_debug_info(mut self) -> Self {
        self.include_debug_info = true;
        self
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct SearchDebugInfo<V: Vertex> {
    /// Vertices in the order they were expanded.
    pub visited: Vec<V>,
}

#[derive(Debug, Clone)]
pub struct SearchResult<V: Vertex, W: Weight> {
    pub outcome: SearchOutcome<V, W>,
    pub stats: SearchStats,
    pub debug: Option<SearchDebugInfo<V>>,
}

impl<V: Vertex, W: Weight> SearchResult<V, W> {
    pub fn is_found(&self) -> bool {
        self.outcome.is_found()
    }

    pub fn path(&self) -> Option<&Path<V, W>> {
        self.outcome.path()
    }
}
