use crate::graph::{Graph, Vertex};

/// Decides whether a graph can be drawn in the plane without crossings
///
/// Oracles must be deterministic and free of side effects: the layering
/// strategies call them once per tentative edge insertion and trust the
/// answer without re-checking.
pub trait PlanarityOracle<N: Vertex> {
    /// Whether `graph` is planar
    fn is_planar(&self, graph: &Graph<N>) -> bool;
}

// Blanket implementation for closures
impl<N, F> PlanarityOracle<N> for F
where
    N: Vertex,
    F: Fn(&Graph<N>) -> bool,
{
    fn is_planar(&self, graph: &Graph<N>) -> bool {
        self(graph)
    }
}
