use crate::formula::complete_graph_thickness;
use crate::graph::{Graph, Vertex};
use crate::layering::{self, ExactOutcome, ExactSearchCfg};
use crate::partitions::{PartitionEnumerator, RestrictedGrowth};
use crate::planarity::BoyerMyrvold;
use crate::{Decomposition, PlanarityOracle, Thickness};
use derive_more::Display;
use tracing::debug;

/// Upper-bound heuristics, in tie-breaking priority order
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Strategy {
    #[display("incremental")]
    Incremental,
    #[display("round-robin")]
    RoundRobin,
    #[display("tree")]
    Tree,
}

impl Strategy {
    pub const ALL: [Strategy; 3] = [Strategy::Incremental, Strategy::RoundRobin, Strategy::Tree];
}

/// How a thickness value was obtained
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Route {
    #[display("no edges")]
    Edgeless,
    #[display("complete graph formula")]
    CompleteFormula,
    #[display("planarity test")]
    Planar,
    #[display("exact search")]
    ExactSearch,
    #[display("{_0} heuristic")]
    Heuristic(Strategy),
}

/// Thickness of a graph with the decomposition that witnesses it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Solution<N>
where
    N: Vertex,
{
    pub thickness: Thickness,
    pub route: Route,

    /// Layers achieving `thickness`; absent when the value comes from the
    /// complete-graph formula
    pub decomposition: Option<Decomposition<N>>,
}

/// Layer counts of one heuristic, before and after compression
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HeuristicRun {
    pub strategy: Strategy,
    pub layers: usize,
    pub compressed: usize,
}

/// Solver configuration
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SolverCfg {
    pub exact: ExactSearchCfg,
}

/// Picks the cheapest certifiable route to a graph's thickness
///
/// Routes, first match wins:
/// 1. no edges: exactly 0
/// 2. complete graph: closed formula, exact
/// 3. planar graph: exactly 1
/// 4. few edges: exhaustive partition search, exact when it concludes
/// 5. otherwise: best compressed heuristic, upper bound
#[derive(Debug, Clone)]
pub struct ThicknessSolver<O = BoyerMyrvold, P = RestrictedGrowth> {
    oracle: O,
    enumerator: P,

    pub cfg: SolverCfg,
}

impl Default for ThicknessSolver {
    fn default() -> Self {
        Self::new(BoyerMyrvold, RestrictedGrowth)
    }
}

impl<O, P> ThicknessSolver<O, P> {
    /// Create a solver from a planarity oracle and a partition enumerator
    pub fn new(oracle: O, enumerator: P) -> Self {
        Self {
            oracle,
            enumerator,
            cfg: SolverCfg::default(),
        }
    }

    pub fn with_cfg(self, cfg: SolverCfg) -> Self {
        Self { cfg, ..self }
    }

    pub fn oracle(&self) -> &O {
        &self.oracle
    }
}

impl<O, P> ThicknessSolver<O, P>
where
    P: PartitionEnumerator,
{
    /// Thickness of `graph`, exact or as an upper bound
    pub fn thickness<N>(&self, graph: &Graph<N>) -> Thickness
    where
        N: Vertex,
        O: PlanarityOracle<N>,
    {
        self.solve(graph).thickness
    }

    /// Thickness of `graph` together with the route taken and a witness
    pub fn solve<N>(&self, graph: &Graph<N>) -> Solution<N>
    where
        N: Vertex,
        O: PlanarityOracle<N>,
    {
        if graph.is_empty() {
            return Solution {
                thickness: Thickness::Exact(0),
                route: Route::Edgeless,
                decomposition: Some(Decomposition::new(Vec::new())),
            };
        }

        if graph.is_complete() {
            let n = graph.vertex_count();
            debug!("K{n}: using the complete graph formula");
            return Solution {
                thickness: Thickness::Exact(complete_graph_thickness(n)),
                route: Route::CompleteFormula,
                decomposition: None,
            };
        }

        if self.oracle.is_planar(graph) {
            return Solution {
                thickness: Thickness::Exact(1),
                route: Route::Planar,
                decomposition: Some(Decomposition::new(vec![graph.clone()])),
            };
        }

        match self.exact(graph) {
            ExactOutcome::Found(decomposition) => {
                return Solution {
                    thickness: Thickness::Exact(decomposition.len()),
                    route: Route::ExactSearch,
                    decomposition: Some(decomposition),
                };
            }
            ExactOutcome::Skipped => {}
            outcome => debug!("Exact search inconclusive ({outcome:?}), using heuristics"),
        }

        let (strategy, decomposition) = self.best_upper_bound(graph);
        Solution {
            thickness: Thickness::UpperBound(decomposition.len()),
            route: Route::Heuristic(strategy),
            decomposition: Some(decomposition),
        }
    }

    /// Greedy first-fit layering
    pub fn incremental<N>(&self, graph: &Graph<N>) -> Decomposition<N>
    where
        N: Vertex,
        O: PlanarityOracle<N>,
    {
        layering::incremental(graph, &self.oracle)
    }

    /// Round-robin layering over one layer fewer than the greedy bound
    pub fn round_robin<N>(&self, graph: &Graph<N>) -> Decomposition<N>
    where
        N: Vertex,
        O: PlanarityOracle<N>,
    {
        layering::round_robin(graph, &self.oracle)
    }

    /// Spanning-forest-first layering
    pub fn tree<N>(&self, graph: &Graph<N>) -> Decomposition<N>
    where
        N: Vertex,
        O: PlanarityOracle<N>,
    {
        layering::tree(graph, &self.oracle)
    }

    pub fn compress<N>(&self, decomposition: Decomposition<N>) -> Decomposition<N>
    where
        N: Vertex,
        O: PlanarityOracle<N>,
    {
        layering::compress(decomposition, &self.oracle)
    }

    /// Exhaustive search within the configured limits
    pub fn exact<N>(&self, graph: &Graph<N>) -> ExactOutcome<N>
    where
        N: Vertex,
        O: PlanarityOracle<N>,
    {
        layering::exact_search(graph, &self.oracle, &self.enumerator, &self.cfg.exact)
    }

    /// Uncompressed result of one heuristic
    pub fn run<N>(&self, strategy: Strategy, graph: &Graph<N>) -> Decomposition<N>
    where
        N: Vertex,
        O: PlanarityOracle<N>,
    {
        match strategy {
            Strategy::Incremental => self.incremental(graph),
            Strategy::RoundRobin => self.round_robin(graph),
            Strategy::Tree => self.tree(graph),
        }
    }

    /// Compressed result of every heuristic, in priority order
    pub fn compressed_heuristics<N>(&self, graph: &Graph<N>) -> [(Strategy, Decomposition<N>); 3]
    where
        N: Vertex,
        O: PlanarityOracle<N>,
    {
        Strategy::ALL.map(|strategy| (strategy, self.compress(self.run(strategy, graph))))
    }

    /// Layer counts of every heuristic before and after compression
    pub fn heuristic_runs<N>(&self, graph: &Graph<N>) -> Vec<HeuristicRun>
    where
        N: Vertex,
        O: PlanarityOracle<N>,
    {
        Strategy::ALL
            .into_iter()
            .map(|strategy| {
                let raw = self.run(strategy, graph);
                let layers = raw.len();
                HeuristicRun {
                    strategy,
                    layers,
                    compressed: self.compress(raw).len(),
                }
            })
            .collect()
    }

    /// Fewest layers among the compressed heuristics
    ///
    /// Ties go to the earlier strategy in [`Strategy::ALL`].
    pub fn best_upper_bound<N>(&self, graph: &Graph<N>) -> (Strategy, Decomposition<N>)
    where
        N: Vertex,
        O: PlanarityOracle<N>,
    {
        let [first, rest @ ..] = self.compressed_heuristics(graph);
        debug!("{}: {} layers after compression", first.0, first.1.len());
        rest.into_iter().fold(first, |best, (strategy, decomposition)| {
            debug!("{strategy}: {} layers after compression", decomposition.len());
            if decomposition.len() < best.1.len() {
                (strategy, decomposition)
            } else {
                best
            }
        })
    }
}
