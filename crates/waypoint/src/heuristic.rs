use crate::{graph::Vertex, weight::Weight};

/// Estimate of the remaining cost from `vertex` to `goal`.
///
/// The search only returns lowest-cost paths when the estimate never exceeds
/// the true remaining cost (admissible). Nothing checks this: an overestimating
/// heuristic still terminates but may return a longer path.
pub trait AStarHeuristic<V: Vertex, W: Weight> {
    fn estimate(&self, vertex: &V, goal: &V) -> W;
}

/// Always estimates zero, which turns the search into Dijkstra.
#[derive(Debug, Default, Clone, Copy)]
pub struct ZeroHeuristic;

impl<V: Vertex, W: Weight> AStarHeuristic<V, W> for ZeroHeuristic {
    #[inline(always)]
    fn estimate(&self, _vertex: &V, _goal: &V) -> W {
        W::ZERO
    }
}

impl<V, W, F> AStarHeuristic<V, W> for F
where
    V: Vertex,
    W: Weight,
    F: Fn(&V, &V) -> W,
{
    #[inline(always)]
    fn estimate(&self, vertex: &V, goal: &V) -> W {
        self(vertex, goal)
    }
}
