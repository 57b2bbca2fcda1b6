//! Thickness of undirected graphs
//!
//! The thickness of a graph is the fewest planar subgraphs ("layers") whose
//! edge sets partition its edges. This crate computes it exactly where it can
//! (complete graphs, planar graphs, small graphs) and otherwise returns the
//! best upper bound found by a set of layering heuristics.
//!
//! Planarity testing and set-partition enumeration are pluggable through the
//! [`PlanarityOracle`] and [`PartitionEnumerator`] traits; the defaults are a
//! linear-time [`BoyerMyrvold`] test and [`RestrictedGrowth`] strings.
//!
//! # Example
//!
//! ```
//! use thickness::{Graph, Thickness, ThicknessSolver};
//!
//! // K3,3 is not planar but splits into two planar layers
//! let graph = Graph::from_edges((0..3).flat_map(|u| (3..6).map(move |v| (u, v)))).unwrap();
//!
//! let solver: ThicknessSolver = ThicknessSolver::default();
//! assert_eq!(solver.thickness(&graph), Thickness::Exact(2));
//!
//! // Or run a single heuristic and check its layers
//! let layers = solver.compress(solver.tree(&graph));
//! layers.verify(&graph, solver.oracle()).unwrap();
//! ```

mod decomposition;
mod formula;
mod graph;
mod oracle;
mod partitions;
mod planarity;
mod solver;
mod thickness;

pub mod layering;

// Re-export core types and traits
pub use decomposition::{Decomposition, DecompositionError};
pub use formula::complete_graph_thickness;
pub use graph::{canonical, complete_edge_count, edge_set, Edge, Graph, GraphError, Vertex};
pub use oracle::PlanarityOracle;
pub use partitions::{
    split_by_labels, PartitionEnumerator, RestrictedGrowth, RestrictedGrowthStrings,
};
pub use planarity::{is_planar_indexed, BoyerMyrvold};
pub use solver::{HeuristicRun, Route, Solution, SolverCfg, Strategy, ThicknessSolver};
pub use thickness::Thickness;

pub use layering::{ExactOutcome, ExactSearchCfg};

// Re-export petgraph's node bound for vertex identifiers
pub use petgraph::graphmap::NodeTrait;

/// Thickness of the graph with the given edges, using the default solver
///
/// # Errors
/// Returns an error if the edges contain a self-loop or a repeated pair.
pub fn thickness<N, I>(edges: I) -> Result<Thickness, GraphError<N>>
where
    N: Vertex,
    I: IntoIterator<Item = (N, N)>,
{
    let graph = Graph::from_edges(edges)?;
    let solver: ThicknessSolver = ThicknessSolver::default();
    Ok(solver.thickness(&graph))
}
