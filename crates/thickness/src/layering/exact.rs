use crate::graph::{Edge, Graph, Vertex};
use crate::partitions::{split_by_labels, PartitionEnumerator};
use crate::{Decomposition, PlanarityOracle};
use tracing::debug;

/// Limits of the brute-force search
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExactSearchCfg {
    /// Only graphs with strictly fewer edges are searched
    pub max_edges: usize,

    /// Largest layer count tried
    pub max_layers: usize,

    /// Total number of partitions examined before giving up, across all
    /// layer counts. `None` means unbounded.
    pub max_partitions: Option<u64>,
}

impl Default for ExactSearchCfg {
    fn default() -> Self {
        Self {
            max_edges: 16,
            max_layers: 3,
            max_partitions: Some(1_000_000),
        }
    }
}

/// Result of [`exact_search`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExactOutcome<N>
where
    N: Vertex,
{
    /// A planar partition with the fewest layers; every smaller layer count
    /// was ruled out exhaustively
    Found(Decomposition<N>),

    /// The graph has too many edges for the search
    Skipped,

    /// No planar partition exists with at most `max_layers` layers
    Exhausted,

    /// The partition budget ran out before an answer was certified
    BudgetExceeded,
}

/// Minimum-layer planar partition of the edges, by exhaustive enumeration
///
/// Layer counts are tried in increasing order, starting from one, and for
/// each count every partition of the canonical edge sequence is checked.
/// The first fully planar partition is therefore certified minimal.
pub fn exact_search<N, O, P>(
    graph: &Graph<N>,
    oracle: &O,
    enumerator: &P,
    cfg: &ExactSearchCfg,
) -> ExactOutcome<N>
where
    N: Vertex,
    O: PlanarityOracle<N>,
    P: PartitionEnumerator,
{
    let edges = graph.edges();
    if edges.len() >= cfg.max_edges {
        return ExactOutcome::Skipped;
    }
    if edges.is_empty() {
        return ExactOutcome::Found(Decomposition::new(vec![graph.empty_like()]));
    }

    let mut budget = cfg.max_partitions;
    for blocks in 1..=cfg.max_layers.min(edges.len()) {
        for labels in enumerator.partitions(edges.len(), blocks) {
            if let Some(left) = budget.as_mut() {
                if *left == 0 {
                    debug!("Exact search ran out of budget at {blocks} layers");
                    return ExactOutcome::BudgetExceeded;
                }
                *left -= 1;
            }

            if let Some(layers) = planar_blocks(graph, &edges, &labels, blocks, oracle) {
                debug!("Exact search found a planar partition into {blocks} layers");
                return ExactOutcome::Found(Decomposition::new(layers));
            }
        }
        debug!("No planar partition into {blocks} layers");
    }

    ExactOutcome::Exhausted
}

/// Layers of one partition, if all of them are planar
fn planar_blocks<N, O>(
    graph: &Graph<N>,
    edges: &[Edge<N>],
    labels: &[usize],
    blocks: usize,
    oracle: &O,
) -> Option<Vec<Graph<N>>>
where
    N: Vertex,
    O: PlanarityOracle<N>,
{
    let layers: Vec<Graph<N>> = split_by_labels(edges, labels, blocks)
        .into_iter()
        .map(|group| {
            let mut layer = graph.empty_like();
            for edge in group {
                layer.insert_edge(edge);
            }
            layer
        })
        .collect();
    layers
        .iter()
        .all(|layer| oracle.is_planar(layer))
        .then_some(layers)
}
