//! Layering strategies.
//!
//! Each strategy turns a graph into a [`Decomposition`](crate::Decomposition) whose layer count is
//! an upper bound on the thickness, except [`exact_search`] which certifies
//! minimality for small graphs. All of them process edges in the canonical
//! order of [`Graph::edges`], so results are reproducible.

mod compress;
mod exact;
mod incremental;
mod round_robin;
mod tree;

use crate::graph::{Edge, Graph, Vertex};
use crate::PlanarityOracle;
use tracing::trace;

pub use compress::compress;
pub use exact::{exact_search, ExactOutcome, ExactSearchCfg};
pub use incremental::incremental;
pub use round_robin::round_robin;
pub use tree::tree;

/// Insert `edge` into `layer` if the result stays planar
pub(crate) fn try_insert<N, O>(layer: &mut Graph<N>, edge: Edge<N>, oracle: &O) -> bool
where
    N: Vertex,
    O: PlanarityOracle<N>,
{
    layer.insert_edge(edge);
    if oracle.is_planar(layer) {
        return true;
    }
    layer.remove_edge(edge);
    false
}

/// Insert `edge` into the first layer that stays planar
///
/// Returns the index of the accepting layer, or `None` if every layer
/// rejected the edge (layers are then left untouched).
pub(crate) fn first_fit<N, O>(layers: &mut [Graph<N>], edge: Edge<N>, oracle: &O) -> Option<usize>
where
    N: Vertex,
    O: PlanarityOracle<N>,
{
    let index = layers
        .iter_mut()
        .position(|layer| try_insert(layer, edge, oracle));
    trace!("First fit of {edge:?}: {index:?}");
    index
}
