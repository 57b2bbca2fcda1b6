use super::first_fit;
use crate::graph::{Graph, Vertex};
use crate::{Decomposition, PlanarityOracle};
use tracing::debug;

/// Greedy first-fit layering
///
/// Every edge goes into the first layer that stays planar; a new layer is
/// opened when none accepts it. Always yields at least one layer.
pub fn incremental<N, O>(graph: &Graph<N>, oracle: &O) -> Decomposition<N>
where
    N: Vertex,
    O: PlanarityOracle<N>,
{
    let mut layers = vec![graph.empty_like()];

    for edge in graph.edges() {
        if first_fit(&mut layers, edge, oracle).is_none() {
            let mut layer = graph.empty_like();
            layer.insert_edge(edge);
            layers.push(layer);
        }
    }

    debug!("Incremental layering used {} layers", layers.len());
    Decomposition::new(layers)
}
