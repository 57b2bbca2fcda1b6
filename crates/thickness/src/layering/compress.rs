use super::{first_fit, try_insert};
use crate::graph::Vertex;
use crate::{Decomposition, PlanarityOracle};
use tracing::{debug, trace};

/// Repeatedly try to drop one layer from a decomposition
///
/// The last layer seeds the first target layer, the other layers are copied
/// onto their own targets and whatever breaks planarity is first-fit into
/// the targets after the first. A round that cannot place every edge stops
/// the process and the last successful decomposition is returned.
/// Decompositions with fewer than three layers are returned unchanged.
pub fn compress<N, O>(decomposition: Decomposition<N>, oracle: &O) -> Decomposition<N>
where
    N: Vertex,
    O: PlanarityOracle<N>,
{
    let initial = decomposition.len();
    let mut current = decomposition;

    // Each successful round removes a layer
    for _ in 0..initial {
        if current.len() < 3 {
            break;
        }
        match compress_once(&current, oracle) {
            Some(smaller) => current = smaller,
            None => break,
        }
    }

    if current.len() < initial {
        debug!("Compressed {initial} layers down to {}", current.len());
    }
    current
}

fn compress_once<N, O>(decomposition: &Decomposition<N>, oracle: &O) -> Option<Decomposition<N>>
where
    N: Vertex,
    O: PlanarityOracle<N>,
{
    let (last, rest) = decomposition.layers().split_last()?;

    let mut targets = vec![last.empty_like(); rest.len()];
    for edge in last.edges() {
        targets[0].insert_edge(edge);
    }

    let mut unplaced = Vec::new();
    for (target, source) in targets.iter_mut().zip(rest) {
        for edge in source.edges() {
            if !try_insert(target, edge, oracle) {
                unplaced.push(edge);
            }
        }
    }

    trace!(
        "Compressing {} layers: {} edges to re-place",
        decomposition.len(),
        unplaced.len()
    );
    for edge in unplaced {
        first_fit(&mut targets[1..], edge, oracle)?;
    }

    Some(Decomposition::new(targets))
}
