use super::{first_fit, incremental, try_insert};
use crate::graph::{Graph, Vertex};
use crate::{Decomposition, PlanarityOracle};
use tracing::debug;

/// Round-robin layering with one layer fewer than the greedy bound
///
/// Runs [`incremental`] to get `k` layers, then deals the canonical edges
/// over `k - 1` layers in turn. Edges that would break planarity are set
/// aside and first-fit afterwards. If any of them still cannot be placed the
/// greedy decomposition is returned instead.
pub fn round_robin<N, O>(graph: &Graph<N>, oracle: &O) -> Decomposition<N>
where
    N: Vertex,
    O: PlanarityOracle<N>,
{
    let greedy = incremental(graph, oracle);
    let target = greedy.len().saturating_sub(1);
    if target == 0 {
        return greedy;
    }

    let mut layers = vec![graph.empty_like(); target];
    let mut deferred = Vec::new();
    for (i, edge) in graph.edges().into_iter().enumerate() {
        if !try_insert(&mut layers[i % target], edge, oracle) {
            deferred.push(edge);
        }
    }

    debug!(
        "Round robin over {target} layers deferred {} edges",
        deferred.len()
    );
    for edge in deferred {
        if first_fit(&mut layers, edge, oracle).is_none() {
            debug!("Round robin could not place {edge:?}, keeping {} layers", greedy.len());
            return greedy;
        }
    }

    Decomposition::new(layers)
}
