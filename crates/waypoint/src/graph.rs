use std::{collections::hash_set, fmt::Debug, hash::Hash};

use fxhash::{FxHashMap, FxHashSet};

use crate::{error::GraphError, weight::Weight};

/// Identifier of a graph vertex.
///
/// `Ord` is needed to store each undirected edge under one canonical key,
/// `Debug` so a [`GraphError`] can name the vertex it refers to.
pub trait Vertex: Eq + Hash + Ord + Clone + Debug {}

impl<T> Vertex for T where T: Eq + Hash + Ord + Clone + Debug {}

pub type Neighbors<'a, V> = hash_set::Iter<'a, V>;

/// Orders the two endpoints of an undirected edge so that `{v, u}` and
/// `{u, v}` map to the same entry.
#[inline(always)]
fn canonical<'a, V: Ord>(v: &'a V, u: &'a V) -> (&'a V, &'a V) {
    if v <= u { (v, u) } else { (u, v) }
}

/// Weighted undirected graph.
///
/// The key set of `adjacency_list` is the vertex set. Edge weights are keyed
/// by the smaller endpoint first, then the larger one.
#[derive(Debug, Clone)]
pub struct WeightedGraph<V: Vertex, W: Weight> {
    adjacency_list: FxHashMap<V, FxHashSet<V>>,
    edge_weights: FxHashMap<V, FxHashMap<V, W>>,
}

impl<V: Vertex, W: Weight> Default for WeightedGraph<V, W> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V: Vertex, W: Weight> WeightedGraph<V, W> {
    pub fn new() -> Self {
        WeightedGraph {
            adjacency_list: FxHashMap::default(),
            edge_weights: FxHashMap::default(),
        }
    }

    pub fn with_capacity(vertices: usize) -> Self {
        WeightedGraph {
            adjacency_list: FxHashMap::with_capacity_and_hasher(vertices, Default::default()),
            edge_weights: FxHashMap::with_capacity_and_hasher(vertices, Default::default()),
        }
    }

    /// Builds a graph from `(v, u, weight)` triples, creating the endpoints
    /// as needed. A repeated pair keeps the last weight.
    pub fn from_edges<I>(edges: I) -> Self
    where
        I: IntoIterator<Item = (V, V, W)>,
    {
        let mut graph = WeightedGraph::new();
        for (v, u, weight) in edges {
            graph.adjacency_list.entry(v.clone()).or_default();
            graph.adjacency_list.entry(u.clone()).or_default();
            graph.insert_edge(v, u, weight);
        }
        graph
    }

    pub fn add_vertex(&mut self, v: V) -> Result<(), GraphError<V>> {
        if self.adjacency_list.contains_key(&v) {
            return Err(GraphError::DuplicateVertex(v));
        }

        self.adjacency_list.insert(v, FxHashSet::default());
        Ok(())
    }

    /// Removes `v` together with every edge touching it.
    pub fn remove_vertex(&mut self, v: &V) -> Result<(), GraphError<V>> {
        let neighbors = self
            .adjacency_list
            .remove(v)
            .ok_or_else(|| GraphError::UnknownVertex(v.clone()))?;

        for neighbor in &neighbors {
            if let Some(adjacent) = self.adjacency_list.get_mut(neighbor) {
                adjacent.remove(v);
            }
            self.remove_weight(v, neighbor);
        }

        Ok(())
    }

    /// Connects `v` and `u`. Returns the previous weight when the edge
    /// already existed.
    pub fn add_edge(&mut self, v: V, u: V, weight: W) -> Result<Option<W>, GraphError<V>> {
        self.ensure_vertex(&v)?;
        self.ensure_vertex(&u)?;

        Ok(self.insert_edge(v, u, weight))
    }

    /// Disconnects `v` and `u`. Removing an edge that doesn't exist is a no-op.
    pub fn remove_edge(&mut self, v: &V, u: &V) -> Result<Option<W>, GraphError<V>> {
        self.ensure_vertex(v)?;
        self.ensure_vertex(u)?;

        if let Some(adjacent) = self.adjacency_list.get_mut(v) {
            adjacent.remove(u);
        }
        if let Some(adjacent) = self.adjacency_list.get_mut(u) {
            adjacent.remove(v);
        }

        Ok(self.remove_weight(v, u))
    }

    /// Weight of the edge between `v` and `u`, `None` when they aren't adjacent.
    pub fn edge_weight(&self, v: &V, u: &V) -> Option<W> {
        let (low, high) = canonical(v, u);
        self.edge_weights
            .get(low)
            .and_then(|weights| weights.get(high))
            .copied()
    }

    pub fn is_adjacent(&self, v: &V, u: &V) -> Result<bool, GraphError<V>> {
        self.adjacency_list
            .get(v)
            .map(|adjacent| adjacent.contains(u))
            .ok_or_else(|| GraphError::UnknownVertex(v.clone()))
    }

    pub fn neighbors(&self, v: &V) -> Result<Neighbors<'_, V>, GraphError<V>> {
        self.adjacency_list
            .get(v)
            .map(|adjacent| adjacent.iter())
            .ok_or_else(|| GraphError::UnknownVertex(v.clone()))
    }

    pub fn degree(&self, v: &V) -> Result<usize, GraphError<V>> {
        self.adjacency_list
            .get(v)
            .map(|adjacent| adjacent.len())
            .ok_or_else(|| GraphError::UnknownVertex(v.clone()))
    }

    /// All vertices, in no particular order.
    pub fn vertices(&self) -> impl Iterator<Item = &V> {
        self.adjacency_list.keys()
    }

    /// Every undirected edge exactly once, smaller endpoint first.
    pub fn edges(&self) -> impl Iterator<Item = (&V, &V, W)> {
        self.edge_weights.iter().flat_map(|(low, weights)| {
            weights
                .iter()
                .map(move |(high, weight)| (low, high, *weight))
        })
    }

    pub fn contains_vertex(&self, v: &V) -> bool {
        self.adjacency_list.contains_key(v)
    }

    pub fn vertex_count(&self) -> usize {
        self.adjacency_list.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edge_weights.values().map(|weights| weights.len()).sum()
    }

    /// Sum of the edge weights along `path`, `None` if two consecutive
    /// vertices aren't adjacent.
    pub fn path_weight(&self, path: &[V]) -> Option<W> {
        path.windows(2).try_fold(W::ZERO, |total, pair| {
            self.edge_weight(&pair[0], &pair[1])
                .map(|weight| total + weight)
        })
    }

    fn ensure_vertex(&self, v: &V) -> Result<(), GraphError<V>> {
        if self.adjacency_list.contains_key(v) {
            Ok(())
        } else {
            Err(GraphError::UnknownVertex(v.clone()))
        }
    }

    // Both endpoints must already be vertices.
    fn insert_edge(&mut self, v: V, u: V, weight: W) -> Option<W> {
        if let Some(adjacent) = self.adjacency_list.get_mut(&v) {
            adjacent.insert(u.clone());
        }
        if let Some(adjacent) = self.adjacency_list.get_mut(&u) {
            adjacent.insert(v.clone());
        }

        let (low, high) = if v <= u { (v, u) } else { (u, v) };
        self.edge_weights
            .entry(low)
            .or_default()
            .insert(high, weight)
    }

    fn remove_weight(&mut self, v: &V, u: &V) -> Option<W> {
        let (low, high) = canonical(v, u);
        let weights = self.edge_weights.get_mut(low)?;
        let removed = weights.remove(high);
        if weights.is_empty() {
            self.edge_weights.remove(low);
        }
        removed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_graph() -> WeightedGraph<u32, u32> {
        let mut graph = WeightedGraph::new();
        for v in 1..=5 {
            graph.add_vertex(v).unwrap();
        }
        graph.add_edge(1, 2, 10).unwrap();
        graph.add_edge(2, 3, 5).unwrap();
        graph.add_edge(1, 3, 20).unwrap();
        graph.add_edge(3, 4, 1).unwrap();
        graph
    }

    fn sorted_neighbors(graph: &WeightedGraph<u32, u32>, v: u32) -> Vec<u32> {
        let mut neighbors: Vec<u32> = graph.neighbors(&v).unwrap().copied().collect();
        neighbors.sort();
        neighbors
    }

    #[test]
    fn test_add_edge_is_symmetric() {
        let graph = create_graph();

        for (v, u, weight) in [(1, 2, 10), (2, 3, 5), (1, 3, 20), (3, 4, 1)] {
            assert!(graph.is_adjacent(&v, &u).unwrap());
            assert!(graph.is_adjacent(&u, &v).unwrap());
            assert_eq!(graph.edge_weight(&v, &u), Some(weight));
            assert_eq!(graph.edge_weight(&u, &v), Some(weight));
        }

        assert_eq!(graph.edge_count(), 4);
        assert_eq!(sorted_neighbors(&graph, 3), vec![1, 2, 4]);
    }

    #[test]
    fn test_add_edge_overwrites_weight() {
        let mut graph = create_graph();

        let previous = graph.add_edge(2, 1, 7).unwrap();

        assert_eq!(previous, Some(10));
        assert_eq!(graph.edge_weight(&1, &2), Some(7));
        assert_eq!(graph.edge_count(), 4);
        assert_eq!(graph.degree(&1).unwrap(), 2);
    }

    #[test]
    fn test_add_edge_unknown_vertex() {
        let mut graph = create_graph();

        assert_eq!(
            graph.add_edge(1, 42, 3),
            Err(GraphError::UnknownVertex(42))
        );
        assert_eq!(
            graph.add_edge(42, 1, 3),
            Err(GraphError::UnknownVertex(42))
        );
        assert!(!graph.is_adjacent(&1, &42).unwrap());
        assert_eq!(graph.edge_count(), 4);
    }

    #[test]
    fn test_add_duplicate_vertex_leaves_graph_unchanged() {
        let mut graph = create_graph();

        assert_eq!(graph.add_vertex(3), Err(GraphError::DuplicateVertex(3)));
        assert_eq!(graph.vertex_count(), 5);
        assert_eq!(sorted_neighbors(&graph, 3), vec![1, 2, 4]);
        assert_eq!(graph.edge_weight(&3, &4), Some(1));
    }

    #[test]
    fn test_remove_vertex_prunes_edges() {
        let mut graph = create_graph();

        graph.remove_vertex(&3).unwrap();

        assert!(!graph.contains_vertex(&3));
        assert!(graph.vertices().all(|v| *v != 3));
        for v in graph.vertices() {
            assert!(graph.neighbors(v).unwrap().all(|u| *u != 3));
        }
        assert_eq!(graph.edge_weight(&1, &3), None);
        assert_eq!(graph.edge_weight(&3, &4), None);
        assert_eq!(graph.edge_count(), 1);
        assert_eq!(graph.degree(&4).unwrap(), 0);
    }

    #[test]
    fn test_remove_vertex_then_add_again_has_no_edges() {
        let mut graph = create_graph();

        graph.remove_vertex(&1).unwrap();
        graph.add_vertex(1).unwrap();

        assert_eq!(graph.degree(&1).unwrap(), 0);
        assert_eq!(graph.edge_weight(&1, &2), None);
        assert!(!graph.is_adjacent(&2, &1).unwrap());
    }

    #[test]
    fn test_remove_unknown_vertex() {
        let mut graph = create_graph();

        assert_eq!(graph.remove_vertex(&9), Err(GraphError::UnknownVertex(9)));
        assert_eq!(graph.vertex_count(), 5);
    }

    #[test]
    fn test_remove_edge() {
        let mut graph = create_graph();

        let removed = graph.remove_edge(&3, &1).unwrap();

        assert_eq!(removed, Some(20));
        assert!(!graph.is_adjacent(&1, &3).unwrap());
        assert!(!graph.is_adjacent(&3, &1).unwrap());
        assert_eq!(graph.edge_weight(&1, &3), None);
        assert_eq!(graph.edge_weight(&3, &1), None);
        assert_eq!(graph.edge_count(), 3);
    }

    #[test]
    fn test_remove_missing_edge_is_noop() {
        let mut graph = create_graph();

        assert_eq!(graph.remove_edge(&1, &5), Ok(None));
        assert_eq!(graph.edge_count(), 4);
        assert_eq!(
            graph.remove_edge(&1, &6),
            Err(GraphError::UnknownVertex(6))
        );
    }

    #[test]
    fn test_lookups_on_unknown_vertex() {
        let graph = create_graph();

        assert_eq!(graph.is_adjacent(&8, &1), Err(GraphError::UnknownVertex(8)));
        assert!(graph.neighbors(&8).is_err());
        assert!(graph.degree(&8).is_err());
        assert_eq!(graph.edge_weight(&8, &1), None);
    }

    #[test]
    fn test_edge_weight_is_idempotent() {
        let graph = create_graph();

        let first = graph.edge_weight(&2, &3);
        let second = graph.edge_weight(&2, &3);

        assert_eq!(first, second);
        assert_eq!(first, Some(5));
    }

    #[test]
    fn test_edges_lists_each_edge_once() {
        let graph = create_graph();

        let mut edges: Vec<(u32, u32, u32)> =
            graph.edges().map(|(v, u, weight)| (*v, *u, weight)).collect();
        edges.sort();

        assert_eq!(edges, vec![(1, 2, 10), (1, 3, 20), (2, 3, 5), (3, 4, 1)]);
    }

    #[test]
    fn test_self_loop() {
        let mut graph = create_graph();

        graph.add_edge(5, 5, 2).unwrap();
        assert!(graph.is_adjacent(&5, &5).unwrap());
        assert_eq!(graph.edge_weight(&5, &5), Some(2));

        graph.remove_vertex(&5).unwrap();
        assert_eq!(graph.edge_weight(&5, &5), None);
        assert_eq!(graph.edge_count(), 4);
    }

    #[test]
    fn test_from_edges_with_string_vertices() {
        let graph: WeightedGraph<String, f64> = WeightedGraph::from_edges([
            ("a".to_string(), "b".to_string(), 1.5),
            ("b".to_string(), "c".to_string(), 2.0),
            ("a".to_string(), "b".to_string(), 0.5),
        ]);

        assert_eq!(graph.vertex_count(), 3);
        assert_eq!(graph.edge_count(), 2);
        assert_eq!(
            graph.edge_weight(&"b".to_string(), &"a".to_string()),
            Some(0.5)
        );
    }

    #[test]
    fn test_path_weight() {
        let graph = create_graph();

        assert_eq!(graph.path_weight(&[1, 2, 3, 4]), Some(16));
        assert_eq!(graph.path_weight(&[1, 3, 4]), Some(21));
        assert_eq!(graph.path_weight(&[1, 4]), None);
        assert_eq!(graph.path_weight(&[5]), Some(0));
    }
}
