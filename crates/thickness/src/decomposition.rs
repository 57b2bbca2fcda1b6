use crate::graph::{Edge, Graph, Vertex};
use crate::PlanarityOracle;
use std::collections::HashMap;
use std::fmt;
use thiserror::Error;

/// Reasons a sequence of layers fails to decompose a graph
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DecompositionError<N>
where
    N: fmt::Debug,
{
    /// A layer lacks one of the source graph's vertices
    #[error("layer {layer} is missing vertex {vertex:?}")]
    MissingVertex { layer: usize, vertex: N },

    /// Two layers share an edge
    #[error("edge {edge:?} appears in layers {first} and {second}")]
    DuplicateEdge {
        edge: Edge<N>,
        first: usize,
        second: usize,
    },

    /// A source edge is in no layer
    #[error("edge {0:?} is not covered by any layer")]
    MissingEdge(Edge<N>),

    /// A layer holds an edge the source graph does not have
    #[error("layer {layer} holds edge {edge:?} which is not in the graph")]
    ForeignEdge { layer: usize, edge: Edge<N> },

    /// A layer is not planar
    #[error("layer {0} is not planar")]
    NonPlanarLayer(usize),
}

/// An ordered sequence of layers partitioning a graph's edges
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Decomposition<N>
where
    N: Vertex,
{
    layers: Vec<Graph<N>>,
}

impl<N: Vertex> Decomposition<N> {
    pub fn new(layers: Vec<Graph<N>>) -> Self {
        Self { layers }
    }

    /// Number of layers
    pub fn len(&self) -> usize {
        self.layers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.layers.is_empty()
    }

    pub fn layers(&self) -> &[Graph<N>] {
        &self.layers
    }

    pub fn into_layers(self) -> Vec<Graph<N>> {
        self.layers
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Graph<N>> {
        self.layers.iter()
    }

    /// Check that the layers partition exactly the edges of `source`
    ///
    /// Every layer must carry all of the source's vertices, no edge may
    /// appear twice or outside the source, every source edge must be covered,
    /// and every layer must be planar under `oracle`. Edges are compared as
    /// labeled pairs, so a relabeled copy of the source is rejected.
    ///
    /// # Errors
    /// Returns the first violation found.
    pub fn verify<O>(&self, source: &Graph<N>, oracle: &O) -> Result<(), DecompositionError<N>>
    where
        O: PlanarityOracle<N>,
    {
        let vertices = source.vertices();
        let mut owner: HashMap<Edge<N>, usize> = HashMap::with_capacity(source.edge_count());

        for (index, layer) in self.layers.iter().enumerate() {
            if let Some(&vertex) = vertices.iter().find(|&&v| !layer.contains_vertex(v)) {
                return Err(DecompositionError::MissingVertex {
                    layer: index,
                    vertex,
                });
            }

            for edge in layer.edges() {
                if !source.contains_edge(edge.0, edge.1) {
                    return Err(DecompositionError::ForeignEdge { layer: index, edge });
                }
                if let Some(first) = owner.insert(edge, index) {
                    return Err(DecompositionError::DuplicateEdge {
                        edge,
                        first,
                        second: index,
                    });
                }
            }
        }

        if let Some(edge) = source.edges().into_iter().find(|e| !owner.contains_key(e)) {
            return Err(DecompositionError::MissingEdge(edge));
        }

        match self.layers.iter().position(|layer| !oracle.is_planar(layer)) {
            Some(index) => Err(DecompositionError::NonPlanarLayer(index)),
            None => Ok(()),
        }
    }
}

impl<'a, N: Vertex> IntoIterator for &'a Decomposition<N> {
    type Item = &'a Graph<N>;
    type IntoIter = std::slice::Iter<'a, Graph<N>>;

    fn into_iter(self) -> Self::IntoIter {
        self.layers.iter()
    }
}
