use petgraph::algo::{dijkstra, has_path_connecting};
use petgraph::graphmap::{NodeTrait, UnGraphMap};
use std::collections::BTreeSet;
use std::fmt;
use thiserror::Error;

/// Vertex identifiers accepted by the engine
///
/// Anything petgraph can use as a `GraphMap` node that can also be printed in
/// error messages.
pub trait Vertex: NodeTrait + fmt::Debug {}

impl<T> Vertex for T where T: NodeTrait + fmt::Debug {}

/// An undirected edge in canonical `(min, max)` form
pub type Edge<N> = (N, N);

/// Errors raised while building a [`Graph`] from raw vertex pairs
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum GraphError<N>
where
    N: fmt::Debug,
{
    /// An edge connects a vertex to itself
    #[error("invalid graph: self-loop on vertex {0:?}")]
    SelfLoop(N),

    /// The same unordered pair appears more than once
    #[error("invalid graph: duplicate edge {0:?} -- {1:?}")]
    DuplicateEdge(N, N),
}

/// Canonical form of the unordered pair `{a, b}`
pub fn canonical<N: Vertex>(a: N, b: N) -> Edge<N> {
    if a <= b {
        (a, b)
    } else {
        (b, a)
    }
}

/// A simple undirected graph
///
/// Self-loops and parallel edges are rejected at construction, so every
/// layer derived from a `Graph` is simple as well. Edges are always reported
/// in canonical order, which is the processing order of every heuristic.
#[derive(Clone)]
pub struct Graph<N>
where
    N: Vertex,
{
    inner: UnGraphMap<N, ()>,
}

impl<N: Vertex> Default for Graph<N> {
    fn default() -> Self {
        Self {
            inner: UnGraphMap::new(),
        }
    }
}

impl<N: Vertex> Graph<N> {
    /// Create an empty graph
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a graph from a sequence of unordered vertex pairs
    ///
    /// # Errors
    /// Returns an error on the first self-loop or repeated pair, in either
    /// orientation.
    pub fn from_edges<I>(edges: I) -> Result<Self, GraphError<N>>
    where
        I: IntoIterator<Item = (N, N)>,
    {
        let mut graph = Self::new();
        for (a, b) in edges {
            if a == b {
                return Err(GraphError::SelfLoop(a));
            }
            if graph.inner.add_edge(a, b, ()).is_some() {
                let (a, b) = canonical(a, b);
                return Err(GraphError::DuplicateEdge(a, b));
            }
        }
        Ok(graph)
    }

    /// Build an edgeless graph on the given vertices
    pub fn with_vertices<I>(vertices: I) -> Self
    where
        I: IntoIterator<Item = N>,
    {
        let mut graph = Self::new();
        for vertex in vertices {
            graph.inner.add_node(vertex);
        }
        graph
    }

    /// An edgeless graph with the same vertex set
    pub fn empty_like(&self) -> Self {
        Self::with_vertices(self.inner.nodes())
    }

    /// Add an isolated vertex (no-op when it already exists)
    pub fn add_vertex(&mut self, vertex: N) {
        self.inner.add_node(vertex);
    }

    pub fn vertex_count(&self) -> usize {
        self.inner.node_count()
    }

    pub fn edge_count(&self) -> usize {
        self.inner.edge_count()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.edge_count() == 0
    }

    /// Vertices in ascending order
    pub fn vertices(&self) -> Vec<N> {
        let mut vertices: Vec<N> = self.inner.nodes().collect();
        vertices.sort_unstable();
        vertices
    }

    /// Edges in canonical form, sorted lexicographically
    pub fn edges(&self) -> Vec<Edge<N>> {
        let mut edges: Vec<Edge<N>> = self
            .inner
            .all_edges()
            .map(|(a, b, _)| canonical(a, b))
            .collect();
        edges.sort_unstable();
        edges
    }

    pub fn contains_vertex(&self, vertex: N) -> bool {
        self.inner.contains_node(vertex)
    }

    pub fn contains_edge(&self, a: N, b: N) -> bool {
        self.inner.contains_edge(a, b)
    }

    /// Number of vertices with at least one incident edge
    pub fn non_isolated_count(&self) -> usize {
        self.inner
            .nodes()
            .filter(|&n| self.inner.neighbors(n).next().is_some())
            .count()
    }

    /// Whether every pair of distinct vertices is adjacent
    pub fn is_complete(&self) -> bool {
        self.edge_count() == complete_edge_count(self.vertex_count())
    }

    /// Whether `a` and `b` lie in the same connected component
    pub fn connects(&self, a: N, b: N) -> bool {
        has_path_connecting(&self.inner, a, b, None)
    }

    /// Length of a shortest path between `a` and `b`, in edges
    pub fn distance(&self, a: N, b: N) -> Option<usize> {
        dijkstra(&self.inner, a, Some(b), |_| 1usize).get(&b).copied()
    }

    /// Underlying petgraph representation
    pub fn as_graphmap(&self) -> &UnGraphMap<N, ()> {
        &self.inner
    }

    /// Insert an edge whose endpoints are already known to be distinct and
    /// absent from this graph
    pub(crate) fn insert_edge(&mut self, (a, b): Edge<N>) {
        debug_assert!(a != b, "self-loop {a:?}");
        let previous = self.inner.add_edge(a, b, ());
        debug_assert!(previous.is_none(), "duplicate edge {a:?} -- {b:?}");
    }

    pub(crate) fn remove_edge(&mut self, (a, b): Edge<N>) {
        self.inner.remove_edge(a, b);
    }
}

/// Number of edges of the complete graph on `n` vertices
pub fn complete_edge_count(n: usize) -> usize {
    n * n.saturating_sub(1) / 2
}

impl<N: Vertex> PartialEq for Graph<N> {
    fn eq(&self, other: &Self) -> bool {
        self.vertex_count() == other.vertex_count()
            && self.edge_count() == other.edge_count()
            && self.inner.nodes().all(|n| other.contains_vertex(n))
            && self.inner.all_edges().all(|(a, b, _)| other.contains_edge(a, b))
    }
}

impl<N: Vertex> Eq for Graph<N> {}

impl<N: Vertex> fmt::Debug for Graph<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Graph")
            .field("vertices", &self.vertices())
            .field("edges", &self.edges())
            .finish()
    }
}

/// Set of canonical edges, handy for exact edge-set comparisons
pub fn edge_set<N: Vertex>(graph: &Graph<N>) -> BTreeSet<Edge<N>> {
    graph.edges().into_iter().collect()
}
