use thickness::{Graph, GraphError};

/// A named edge list
#[derive(Debug, Clone)]
pub struct Fixture {
    pub name: &'static str,
    pub edges: Vec<(u32, u32)>,
}

impl Fixture {
    fn new(name: &'static str, edges: Vec<(u32, u32)>) -> Self {
        Self { name, edges }
    }

    pub fn graph(&self) -> Result<Graph<u32>, GraphError<u32>> {
        Graph::from_edges(self.edges.iter().copied())
    }
}

/// Built-in fixtures, in display order
pub fn all() -> Vec<Fixture> {
    let mut k5_minus = complete(5);
    k5_minus.retain(|&e| e != (3, 4));
    let mut k7_minus = complete(7);
    k7_minus.retain(|&e| e != (0, 1));

    vec![
        Fixture::new("k5", complete(5)),
        Fixture::new("k5-minus-edge", k5_minus),
        Fixture::new("k6", complete(6)),
        Fixture::new("k8", complete(8)),
        Fixture::new("k9", complete(9)),
        Fixture::new("k10", complete(10)),
        Fixture::new("k3-3", complete_bipartite(3, 3)),
        Fixture::new("petersen", petersen()),
        Fixture::new("grid-4x4", grid(4, 4)),
        Fixture::new("cube", cube()),
        Fixture::new("k4-4", complete_bipartite(4, 4)),
        Fixture::new("k7-minus-edge", k7_minus),
    ]
}

pub fn find(name: &str) -> Option<Fixture> {
    all().into_iter().find(|f| f.name == name)
}

fn complete(n: u32) -> Vec<(u32, u32)> {
    (0..n)
        .flat_map(|u| (u + 1..n).map(move |v| (u, v)))
        .collect()
}

fn complete_bipartite(a: u32, b: u32) -> Vec<(u32, u32)> {
    (0..a)
        .flat_map(|u| (0..b).map(move |v| (u, a + v)))
        .collect()
}

// Outer 5-cycle 0..5, spokes to i + 5, inner pentagram
fn petersen() -> Vec<(u32, u32)> {
    (0..5)
        .flat_map(|i| [(i, (i + 1) % 5), (i, i + 5), (i + 5, (i + 2) % 5 + 5)])
        .collect()
}

fn grid(w: u32, h: u32) -> Vec<(u32, u32)> {
    let mut edges = Vec::new();
    for y in 0..h {
        for x in 0..w {
            let u = y * w + x;
            if x + 1 < w {
                edges.push((u, u + 1));
            }
            if y + 1 < h {
                edges.push((u, u + w));
            }
        }
    }
    edges
}

fn cube() -> Vec<(u32, u32)> {
    (0..8u32)
        .flat_map(|u| [1, 2, 4].map(|bit| (u, u ^ bit)))
        .filter(|(u, v)| u < v)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;
    use test_log::test;

    #[test]
    fn fixtures_are_valid_graphs() {
        for fixture in all() {
            let graph = fixture.graph().unwrap();
            assert_eq!(graph.edge_count(), fixture.edges.len(), "{}", fixture.name);
        }
    }

    #[test]
    fn names_are_unique() {
        let fixtures = all();
        let names: HashSet<_> = fixtures.iter().map(|f| f.name).collect();
        assert_eq!(names.len(), fixtures.len());
    }

    #[test]
    fn sizes() {
        let size = |name| {
            let graph = find(name).unwrap().graph().unwrap();
            (graph.vertex_count(), graph.edge_count())
        };
        assert_eq!(size("k9"), (9, 36));
        assert_eq!(size("k5-minus-edge"), (5, 9));
        assert_eq!(size("petersen"), (10, 15));
        assert_eq!(size("cube"), (8, 12));
        assert_eq!(size("grid-4x4"), (16, 24));
        assert_eq!(size("k4-4"), (8, 16));
        assert_eq!(size("k7-minus-edge"), (7, 20));
        assert!(find("k11").is_none());
    }
}
