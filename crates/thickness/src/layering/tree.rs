use super::try_insert;
use crate::graph::{Edge, Graph, Vertex};
use crate::{Decomposition, PlanarityOracle};
use tracing::{debug, trace};

/// Spanning-forest-first layering
///
/// Each layer starts as a spanning forest of the remaining edges, which is
/// planar by construction. The edges left over are then tried in order of
/// the distance between their endpoints inside the layer, shortest first,
/// restarting from distance 2 whenever an edge is accepted. Whatever does not
/// fit carries over to the next layer.
pub fn tree<N, O>(graph: &Graph<N>, oracle: &O) -> Decomposition<N>
where
    N: Vertex,
    O: PlanarityOracle<N>,
{
    let mut remaining = graph.edges();
    let mut layers = Vec::new();

    while !remaining.is_empty() {
        let mut layer = graph.empty_like();
        let mut deferred = Vec::new();
        for (a, b) in remaining {
            if layer.connects(a, b) {
                deferred.push((a, b));
            } else {
                layer.insert_edge((a, b));
            }
        }

        let forest = layer.edge_count();
        remaining = fill_by_distance(&mut layer, deferred, oracle);
        trace!(
            "Tree layer {}: {forest} forest edges, {} by distance, {} left",
            layers.len(),
            layer.edge_count() - forest,
            remaining.len()
        );
        layers.push(layer);
    }

    if layers.is_empty() {
        layers.push(graph.empty_like());
    }

    debug!("Tree layering used {} layers", layers.len());
    Decomposition::new(layers)
}

/// Add deferred edges to `layer` by increasing endpoint distance
///
/// Returns the edges that could not be added.
fn fill_by_distance<N, O>(
    layer: &mut Graph<N>,
    mut deferred: Vec<Edge<N>>,
    oracle: &O,
) -> Vec<Edge<N>>
where
    N: Vertex,
    O: PlanarityOracle<N>,
{
    let mut length = 2;
    loop {
        let distances: Vec<Option<usize>> = deferred
            .iter()
            .map(|&(a, b)| layer.distance(a, b))
            .collect();

        let mut added = false;
        let mut kept = Vec::with_capacity(deferred.len());
        for (&edge, &distance) in deferred.iter().zip(&distances) {
            if distance == Some(length) && try_insert(layer, edge, oracle) {
                added = true;
            } else {
                kept.push(edge);
            }
        }
        deferred = kept;

        if added {
            length = 2;
            continue;
        }
        if !distances.iter().flatten().any(|&d| d > length) {
            return deferred;
        }
        length += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::BoyerMyrvold;
    use petgraph::unionfind::UnionFind;
    use test_log::test;

    fn complete(n: u32) -> Graph<u32> {
        Graph::from_edges((0..n).flat_map(|u| (u + 1..n).map(move |v| (u, v)))).unwrap()
    }

    #[test]
    fn planar_graph_is_one_layer() {
        let mut edges: Vec<(u32, u32)> = (1..7).map(|v| (0, v)).collect();
        edges.extend((1..7).map(|v| (v, v % 6 + 1)));
        let wheel = Graph::from_edges(edges).unwrap();

        let d = tree(&wheel, &BoyerMyrvold);
        assert_eq!(d.len(), 1);
        assert_eq!(d.layers()[0], wheel);
    }

    #[test]
    fn first_layer_spans_every_component() {
        let k5 = complete(5);
        let d = tree(&k5, &BoyerMyrvold);
        assert_eq!(d.len(), 2);
        assert_eq!(d.verify(&k5, &BoyerMyrvold), Ok(()));
        // A planar graph on 5 vertices has at most 9 edges
        assert_eq!(d.layers()[0].edge_count(), 9);
    }

    #[test]
    fn forest_only_oracle_peels_spanning_forests() {
        let forests = |g: &Graph<u32>| {
            let mut sets = UnionFind::new(g.vertex_count());
            g.edges()
                .into_iter()
                .all(|(a, b)| sets.union(a as usize, b as usize))
        };
        // The star around 0 blocks every other edge of K4 at distance 2
        let k4 = complete(4);
        let d = tree(&k4, &forests);
        let sizes: Vec<usize> = d.iter().map(Graph::edge_count).collect();
        assert_eq!(sizes, vec![3, 2, 1]);
        assert_eq!(d.verify(&k4, &forests), Ok(()));
    }

    #[test]
    fn edgeless_graph_keeps_one_empty_layer() {
        let graph: Graph<u32> = Graph::with_vertices([4, 2]);
        let d = tree(&graph, &BoyerMyrvold);
        assert_eq!(d.len(), 1);
        assert_eq!(d.layers()[0].vertices(), vec![2, 4]);
    }
}
