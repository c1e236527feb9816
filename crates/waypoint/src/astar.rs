use std::cmp::Ordering;
use std::collections::BinaryHeap;
use std::time::Instant;

use fxhash::FxHashMap;
use tracing::{debug, trace};

use crate::error::GraphError;
use crate::graph::{Vertex, WeightedGraph};
use crate::heuristic::{AStarHeuristic, ZeroHeuristic};
use crate::path::{Path, SearchDebugInfo, SearchOptions, SearchOutcome, SearchResult, SearchStats};
use crate::weight::Weight;

/// https://en.wikipedia.org/wiki/A*_search_algorithm

#[derive(Debug)]
struct HeapItem<V, W> {
    vertex: V,

    /// g_score is the current cheapest weight from start to `vertex`
    g_score: W,

    /// f_score = g_score + h_score, with h_score being the heuristic value from `vertex` to the goal
    f_score: W,

    /// Insertion order, breaks ties between equal scores
    sequence: usize,
}

impl<V, W: Weight> PartialEq for HeapItem<V, W> {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl<V, W: Weight> Eq for HeapItem<V, W> {}

impl<V, W: Weight> PartialOrd for HeapItem<V, W> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<V, W: Weight> Ord for HeapItem<V, W> {
    fn cmp(&self, other: &Self) -> Ordering {
        // Flip weights to make this a min-heap
        other
            .f_score
            .cmp_weight(&self.f_score)
            .then_with(|| other.g_score.cmp_weight(&self.g_score))
            .then_with(|| other.sequence.cmp(&self.sequence))
    }
}

struct NodeData<V, W> {
    cost: W,
    parent: Option<V>,
}

/// Frontier and bookkeeping of a single search call.
struct SearchState<V: Vertex, W: Weight> {
    heap: BinaryHeap<HeapItem<V, W>>,
    data: FxHashMap<V, NodeData<V, W>>,
    stats: SearchStats,
    visited: Option<Vec<V>>,
}

impl<V: Vertex, W: Weight> SearchState<V, W> {
    fn new(options: SearchOptions) -> Self {
        SearchState {
            heap: BinaryHeap::with_capacity(64),
            data: FxHashMap::default(),
            stats: SearchStats::default(),
            visited: options.include_debug_info.then(Vec::new),
        }
    }

    fn push(&mut self, vertex: V, g_score: W, f_score: W) {
        self.heap.push(HeapItem {
            vertex,
            g_score,
            f_score,
            sequence: self.stats.pushed,
        });
        self.stats.pushed += 1;
    }

    fn update_node_data(&mut self, vertex: V, cost: W, parent: Option<V>) {
        self.data.insert(vertex, NodeData { cost, parent });
    }

    #[inline(always)]
    fn improves(&self, vertex: &V, cost: W) -> bool {
        match self.data.get(vertex) {
            Some(data) => cost.cmp_weight(&data.cost) == Ordering::Less,
            None => true,
        }
    }

    #[inline(always)]
    fn is_stale(&self, vertex: &V, g_score: W) -> bool {
        self.data
            .get(vertex)
            .is_some_and(|data| g_score.cmp_weight(&data.cost) == Ordering::Greater)
    }

    fn build_path(&self, goal: &V, cost: W) -> Path<V, W> {
        let mut vertices: Vec<V> = Vec::with_capacity(32);

        let mut vertex = Some(goal);
        while let Some(current) = vertex {
            vertices.push(current.clone());
            vertex = self
                .data
                .get(current)
                .and_then(|data| data.parent.as_ref());
        }

        vertices.reverse();

        Path::new(vertices, cost)
    }

    fn finish(self, outcome: SearchOutcome<V, W>) -> SearchResult<V, W> {
        SearchResult {
            outcome,
            stats: self.stats,
            debug: self.visited.map(|visited| SearchDebugInfo { visited }),
        }
    }
}

/// A* search over a [`WeightedGraph`].
///
/// Each call to [`AStar::search`] allocates its own frontier and bookkeeping,
/// so one instance can serve any number of searches over any graphs.
///
/// Frontier ties are broken by the lower cost so far, then by insertion
/// order. When several paths share the lowest cost, which one is returned
/// therefore depends on the neighbor enumeration order of the graph.
#[derive(Debug, Default, Clone)]
pub struct AStar<H> {
    heuristic: H,
}

impl AStar<ZeroHeuristic> {
    pub fn new() -> Self {
        Self::with_heuristic(ZeroHeuristic)
    }
}

impl<H> AStar<H> {
    pub fn with_heuristic(heuristic: H) -> Self {
        AStar { heuristic }
    }

    pub fn heuristic(&self) -> &H {
        &self.heuristic
    }

    pub fn search<V, W>(
        &self,
        graph: &WeightedGraph<V, W>,
        start: &V,
        goal: &V,
    ) -> Result<SearchResult<V, W>, GraphError<V>>
    where
        V: Vertex,
        W: Weight,
        H: AStarHeuristic<V, W>,
    {
        self.search_with_options(graph, start, goal, SearchOptions::default())
    }

    /// Fails with [`GraphError::UnknownVertex`] when `start` or `goal` is not
    /// in the graph. An unreachable goal is reported as
    /// [`SearchOutcome::NotFound`].
    pub fn search_with_options<V, W>(
        &self,
        graph: &WeightedGraph<V, W>,
        start: &V,
        goal: &V,
        options: SearchOptions,
    ) -> Result<SearchResult<V, W>, GraphError<V>>
    where
        V: Vertex,
        W: Weight,
        H: AStarHeuristic<V, W>,
    {
        let started = Instant::now();

        if !graph.contains_vertex(start) {
            return Err(GraphError::UnknownVertex(start.clone()));
        }

        if !graph.contains_vertex(goal) {
            return Err(GraphError::UnknownVertex(goal.clone()));
        }

        debug!(?start, ?goal, "A* search started");

        let mut state: SearchState<V, W> = SearchState::new(options);
        let h_score = self.heuristic.estimate(start, goal);
        state.push(start.clone(), W::ZERO, h_score);
        state.update_node_data(start.clone(), W::ZERO, None);

        let mut goal_cost: Option<W> = None;

        while let Some(HeapItem {
            vertex, g_score, ..
        }) = state.heap.pop()
        {
            state.stats.iterations += 1;

            // A cheaper entry for this vertex was pushed after this one
            if state.is_stale(&vertex, g_score) {
                state.stats.stale_skipped += 1;
                continue;
            }

            if let Some(visited) = state.visited.as_mut() {
                visited.push(vertex.clone());
            }

            if vertex == *goal {
                goal_cost = Some(g_score);
                break;
            }

            trace!(?vertex, ?g_score, "expanding vertex");

            for neighbor in graph.neighbors(&vertex)? {
                let Some(edge_weight) = graph.edge_weight(&vertex, neighbor) else {
                    continue;
                };

                let next_cost = g_score + edge_weight;

                if state.improves(neighbor, next_cost) {
                    state.update_node_data(neighbor.clone(), next_cost, Some(vertex.clone()));
                    let h_score = self.heuristic.estimate(neighbor, goal);
                    state.push(neighbor.clone(), next_cost, next_cost + h_score);
                }
            }

            state.stats.expanded += 1;
        }

        debug!(
            iterations = state.stats.iterations,
            expanded = state.stats.expanded,
            stale_skipped = state.stats.stale_skipped,
            found = goal_cost.is_some(),
            elapsed = ?started.elapsed(),
            "A* search finished"
        );

        let outcome = match goal_cost {
            Some(cost) => SearchOutcome::Found(state.build_path(goal, cost)),
            None => SearchOutcome::NotFound,
        };

        Ok(state.finish(outcome))
    }
}

/// Runs a single A* search with `heuristic`.
pub fn search<V, W, H>(
    graph: &WeightedGraph<V, W>,
    start: &V,
    goal: &V,
    heuristic: H,
) -> Result<SearchOutcome<V, W>, GraphError<V>>
where
    V: Vertex,
    W: Weight,
    H: AStarHeuristic<V, W>,
{
    AStar::with_heuristic(heuristic)
        .search(graph, start, goal)
        .map(|result| result.outcome)
}

/// Lowest-cost path with the zero heuristic.
pub fn shortest_path<V, W>(
    graph: &WeightedGraph<V, W>,
    start: &V,
    goal: &V,
) -> Result<SearchOutcome<V, W>, GraphError<V>>
where
    V: Vertex,
    W: Weight,
{
    search(graph, start, goal, ZeroHeuristic)
}
