//! Default planarity oracle.

mod edge_addition;
mod lists;

use crate::graph::{Graph, Vertex};
use crate::PlanarityOracle;
use edge_addition::{Adjacency, EdgeAddition};
use std::collections::HashMap;

/// Linear-time Boyer–Myrvold planarity test
///
/// Small graphs and graphs that exceed Euler's edge bound are decided from
/// their counts alone; everything else is indexed densely and handed to the
/// edge-addition test.
#[derive(Debug, Clone, Copy, Default)]
pub struct BoyerMyrvold;

impl<N: Vertex> PlanarityOracle<N> for BoyerMyrvold {
    fn is_planar(&self, graph: &Graph<N>) -> bool {
        // K5 and K3,3 need at least 9 edges and 5 vertices
        let edges = graph.edge_count();
        let active = graph.non_isolated_count();
        if edges < 9 || active < 5 {
            return true;
        }
        if edges > 3 * active - 6 {
            return false;
        }

        // Sorted numbering and canonical edges, independent of insertion order
        let index: HashMap<N, u32> = graph
            .vertices()
            .into_iter()
            .enumerate()
            .map(|(i, node)| (node, i as u32))
            .collect();
        let pairs: Vec<[u32; 2]> = graph
            .edges()
            .into_iter()
            .map(|(a, b)| [index[&a], index[&b]])
            .collect();

        is_planar_indexed(index.len(), &pairs)
    }
}

/// Planarity of the simple graph on `0..n_verts` with the given edges
pub fn is_planar_indexed(n_verts: usize, edges: &[[u32; 2]]) -> bool {
    debug_assert!(
        edges.iter().all(|&[u, v]| u != v),
        "the input graph has self-loops"
    );
    EdgeAddition::new(Adjacency::from_edges(n_verts, edges)).run()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::seq::SliceRandom;
    use rand::{Rng, SeedableRng};
    use test_log::test;

    fn complete(n: u32) -> Vec<[u32; 2]> {
        (0..n)
            .flat_map(|u| (u + 1..n).map(move |v| [u, v]))
            .collect()
    }

    fn complete_bipartite(a: u32, b: u32) -> Vec<[u32; 2]> {
        (0..a)
            .flat_map(|u| (0..b).map(move |v| [u, a + v]))
            .collect()
    }

    fn grid(w: u32, h: u32) -> Vec<[u32; 2]> {
        let mut edges = Vec::new();
        for y in 0..h {
            for x in 0..w {
                let u = y * w + x;
                if x + 1 < w {
                    edges.push([u, u + 1]);
                }
                if y + 1 < h {
                    edges.push([u, u + w]);
                }
            }
        }
        edges
    }

    #[test]
    fn kuratowski_graphs_are_not_planar() {
        assert!(!is_planar_indexed(5, &complete(5)));
        assert!(!is_planar_indexed(6, &complete_bipartite(3, 3)));
        assert!(!is_planar_indexed(8, &complete(8)));
    }

    #[test]
    fn planar_families() {
        assert!(is_planar_indexed(4, &complete(4)));
        assert!(is_planar_indexed(20, &grid(4, 5)));
        assert!(is_planar_indexed(5, &complete_bipartite(2, 3)));

        // Wheel on 7 spokes
        let mut wheel: Vec<[u32; 2]> = (1..8).map(|v| [0, v]).collect();
        wheel.extend((1..8).map(|v| [v, v % 7 + 1]));
        assert!(is_planar_indexed(8, &wheel));
    }

    #[test]
    fn k5_minus_an_edge_is_planar() {
        let mut edges = complete(5);
        edges.pop();
        assert!(is_planar_indexed(5, &edges));
    }

    #[test]
    fn subdivided_k33_is_not_planar() {
        // Every edge of K3,3 split by a fresh vertex
        let mut edges = Vec::new();
        let mut next = 6;
        for [u, v] in complete_bipartite(3, 3) {
            edges.push([u, next]);
            edges.push([next, v]);
            next += 1;
        }
        assert!(!is_planar_indexed(next as usize, &edges));
    }

    #[test]
    fn petersen_graph_is_not_planar() {
        let mut edges = Vec::new();
        for i in 0..5 {
            edges.push([i, (i + 1) % 5]);
            edges.push([i, i + 5]);
            edges.push([i + 5, (i + 2) % 5 + 5]);
        }
        assert!(!is_planar_indexed(10, &edges));
    }

    #[test]
    fn disconnected_components_are_tested_independently() {
        let mut edges = complete(4);
        edges.extend(complete(5).into_iter().map(|[u, v]| [u + 4, v + 4]));
        assert!(!is_planar_indexed(9, &edges));

        let mut edges = complete(4);
        edges.extend(complete(4).into_iter().map(|[u, v]| [u + 4, v + 4]));
        assert!(is_planar_indexed(10, &edges));
    }

    #[test]
    fn oracle_shortcuts() {
        let k5 = Graph::from_edges((0..5).flat_map(|u| (u + 1..5).map(move |v| (u, v)))).unwrap();
        assert!(!BoyerMyrvold.is_planar(&k5));

        let mut sparse = Graph::with_vertices(0..100);
        for edge in [(0, 1), (1, 2), (2, 3)] {
            sparse.insert_edge(edge);
        }
        assert!(BoyerMyrvold.is_planar(&sparse));
    }

    /// Random graphs on 7 to 10 vertices, labeled by an independent
    /// planarity test
    const LABELED: &[(usize, bool, &[[u32; 2]])] = &[
        (8, true, &[
            [0, 1], [0, 3], [0, 4], [1, 4], [1, 5], [2, 6], [2, 7], [3, 4], [3, 6], [3, 7], [4, 6],
            [5, 6], [5, 7],
        ]),
        (9, true, &[
            [0, 1], [0, 4], [0, 6], [0, 7], [1, 4], [1, 8], [2, 3], [2, 4], [2, 5], [3, 6], [3, 7],
            [5, 7], [6, 7], [7, 8],
        ]),
        (9, true, &[
            [0, 1], [0, 6], [0, 8], [1, 2], [1, 3], [1, 4], [1, 6], [1, 8], [2, 7], [3, 5], [3, 6],
            [3, 7], [3, 8], [4, 5], [4, 7], [6, 7],
        ]),
        (10, true, &[
            [0, 1], [0, 2], [0, 9], [1, 5], [1, 6], [1, 8], [2, 7], [3, 6], [3, 9], [4, 6], [4, 7],
            [4, 9], [5, 9], [6, 7],
        ]),
        (8, true, &[
            [0, 3], [0, 5], [0, 6], [0, 7], [1, 5], [1, 6], [2, 5], [2, 7], [3, 5], [3, 7], [4, 7],
            [5, 6], [5, 7], [6, 7],
        ]),
        (9, true, &[
            [0, 1], [0, 5], [1, 2], [1, 6], [2, 3], [3, 4], [3, 7], [4, 8], [5, 7], [5, 8], [6, 8],
            [7, 8],
        ]),
        (7, true, &[
            [0, 2], [0, 3], [0, 4], [1, 3], [1, 6], [2, 3], [2, 4], [2, 6], [3, 5], [3, 6], [4, 5],
            [4, 6], [5, 6],
        ]),
        (10, true, &[
            [0, 2], [0, 3], [0, 5], [1, 7], [1, 8], [2, 8], [2, 9], [3, 7], [3, 8], [4, 5], [4, 9],
            [5, 6], [6, 7], [7, 9],
        ]),
        (8, true, &[
            [0, 5], [0, 6], [1, 2], [1, 4], [1, 5], [2, 7], [3, 4], [3, 6], [3, 7], [5, 6], [5, 7],
            [6, 7],
        ]),
        (10, true, &[
            [0, 3], [1, 7], [1, 8], [2, 3], [3, 5], [3, 6], [3, 8], [4, 5], [4, 8], [5, 7], [5, 9],
            [6, 7], [6, 8], [8, 9],
        ]),
        (10, true, &[
            [0, 6], [1, 3], [1, 7], [2, 5], [2, 7], [3, 5], [3, 6], [3, 7], [3, 8], [3, 9], [4, 8],
            [4, 9], [5, 6], [5, 8],
        ]),
        (10, true, &[
            [0, 2], [0, 3], [1, 2], [1, 3], [1, 9], [2, 5], [2, 7], [2, 9], [3, 5], [3, 7], [4, 6],
            [4, 8], [5, 6], [5, 7], [5, 9],
        ]),
        (9, true, &[
            [0, 3], [0, 6], [1, 3], [1, 4], [1, 8], [2, 3], [2, 4], [2, 8], [3, 6], [3, 7], [4, 7],
            [4, 8], [5, 8], [6, 7],
        ]),
        (8, true, &[
            [0, 1], [0, 4], [0, 5], [0, 7], [1, 2], [1, 4], [1, 6], [1, 7], [2, 4], [3, 4], [3, 5],
            [3, 7], [4, 7],
        ]),
        (8, false, &[
            [0, 1], [0, 3], [0, 5], [0, 6], [0, 7], [1, 2], [1, 6], [2, 5], [2, 7], [3, 6], [3, 7],
            [4, 5], [4, 6], [4, 7], [5, 6], [5, 7], [6, 7],
        ]),
        (9, false, &[
            [0, 2], [0, 3], [0, 4], [0, 6], [1, 2], [1, 3], [1, 6], [1, 8], [2, 3], [2, 5], [2, 7],
            [2, 8], [3, 4], [3, 6], [4, 5], [4, 6], [4, 7], [5, 6], [5, 7], [6, 7], [6, 8],
        ]),
        (9, false, &[
            [0, 4], [0, 6], [0, 7], [1, 2], [1, 3], [1, 4], [1, 6], [2, 4], [2, 6], [2, 8], [3, 4],
            [3, 5], [3, 6], [3, 7], [3, 8], [4, 5], [4, 6], [4, 7], [5, 7], [6, 8],
        ]),
        (9, true, &[
            [0, 4], [1, 3], [1, 4], [1, 6], [1, 7], [2, 3], [2, 4], [2, 5], [2, 6], [3, 5], [4, 8],
            [5, 6],
        ]),
        (8, false, &[
            [0, 1], [0, 2], [0, 5], [0, 6], [1, 3], [1, 4], [1, 5], [1, 7], [2, 3], [2, 5], [2, 7],
            [3, 4], [3, 5], [3, 7], [4, 5], [4, 7], [5, 6], [5, 7],
        ]),
        (8, false, &[
            [0, 1], [0, 2], [0, 4], [0, 5], [1, 5], [1, 6], [2, 3], [2, 4], [2, 5], [2, 7], [3, 4],
            [3, 5], [4, 7], [5, 6], [5, 7],
        ]),
        (10, false, &[
            [0, 1], [0, 3], [0, 4], [0, 5], [0, 6], [0, 7], [1, 3], [1, 4], [1, 5], [1, 8], [2, 3],
            [2, 5], [2, 9], [3, 7], [4, 6], [5, 6], [5, 7], [5, 8], [6, 7], [6, 8], [7, 9], [8, 9],
        ]),
        (9, true, &[
            [0, 2], [0, 4], [0, 8], [1, 2], [1, 5], [2, 8], [3, 7], [3, 8], [4, 5], [4, 8], [5, 7],
            [5, 8], [6, 8],
        ]),
        (7, true, &[
            [0, 1], [0, 3], [0, 4], [0, 6], [1, 2], [1, 5], [1, 6], [3, 5], [3, 6], [5, 6],
        ]),
        (7, false, &[
            [0, 2], [0, 3], [0, 4], [0, 5], [1, 2], [1, 3], [1, 4], [1, 6], [2, 4], [2, 5], [3, 5],
            [3, 6], [4, 5], [4, 6], [5, 6],
        ]),
    ];

    /// Same graph under a random vertex numbering, edge order and edge
    /// orientation
    fn renumber(rng: &mut StdRng, n: usize, edges: &[[u32; 2]]) -> Vec<[u32; 2]> {
        let mut perm: Vec<u32> = (0..n as u32).collect();
        perm.shuffle(rng);
        let mut renumbered: Vec<[u32; 2]> = edges
            .iter()
            .map(|&[u, v]| {
                let (u, v) = (perm[u as usize], perm[v as usize]);
                if rng.gen_bool(0.5) {
                    [u, v]
                } else {
                    [v, u]
                }
            })
            .collect();
        renumbered.shuffle(rng);
        renumbered
    }

    #[test]
    fn labeled_random_graphs() {
        let mut rng = StdRng::seed_from_u64(17);
        for (i, &(n, planar, edges)) in LABELED.iter().enumerate() {
            assert_eq!(is_planar_indexed(n, edges), planar, "graph {i}");
            for _ in 0..200 {
                let renumbered = renumber(&mut rng, n, edges);
                assert_eq!(
                    is_planar_indexed(n, &renumbered),
                    planar,
                    "graph {i} as {renumbered:?}"
                );
            }
        }
    }

    #[test]
    fn child_rooted_at_current_vertex_is_walked_first() {
        // Planar; under many numberings the DFS meets a vertex with two
        // pertinent children, only one of them externally active
        let edges = [
            [5, 3], [5, 6], [5, 9], [8, 9], [8, 7], [1, 2], [1, 7], [3, 4], [6, 9], [6, 7],
            [4, 0], [4, 9], [0, 2],
        ];
        assert!(is_planar_indexed(10, &edges));

        let mut rng = StdRng::seed_from_u64(5);
        for _ in 0..2000 {
            let renumbered = renumber(&mut rng, 10, &edges);
            assert!(is_planar_indexed(10, &renumbered), "{renumbered:?}");
        }
    }

    #[test]
    fn families_under_every_numbering() {
        let mut wheel: Vec<[u32; 2]> = (1..8).map(|v| [0, v]).collect();
        wheel.extend((1..8).map(|v| [v, v % 7 + 1]));
        let mut k5_minus = complete(5);
        k5_minus.pop();
        let planar = [(20, grid(4, 5)), (8, wheel), (5, k5_minus), (4, complete(4))];

        let mut petersen = Vec::new();
        for i in 0..5 {
            petersen.extend([[i, (i + 1) % 5], [i, i + 5], [i + 5, (i + 2) % 5 + 5]]);
        }
        let non_planar = [
            (5, complete(5)),
            (6, complete_bipartite(3, 3)),
            (10, petersen),
            (8, complete_bipartite(4, 4)),
        ];

        let mut rng = StdRng::seed_from_u64(29);
        for _ in 0..100 {
            for (n, edges) in &planar {
                let renumbered = renumber(&mut rng, *n, edges);
                assert!(is_planar_indexed(*n, &renumbered), "{renumbered:?}");
            }
            for (n, edges) in &non_planar {
                let renumbered = renumber(&mut rng, *n, edges);
                assert!(!is_planar_indexed(*n, &renumbered), "{renumbered:?}");
            }
        }
    }

    #[test]
    fn oracle_ignores_insertion_order() {
        let edges = [
            (475, 468), (281, 862), (468, 862), (440, 468), (132, 281), (560, 321), (560, 958),
            (475, 321), (440, 132), (475, 862), (560, 862), (862, 958), (132, 862), (132, 321),
            (475, 132),
        ];
        let forward: Graph<u32> = Graph::from_edges(edges).unwrap();
        let backward: Graph<u32> = Graph::from_edges(edges.iter().rev().copied()).unwrap();
        assert!(BoyerMyrvold.is_planar(&forward));
        assert!(BoyerMyrvold.is_planar(&backward));
    }
}
