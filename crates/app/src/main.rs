use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use thickness::{ExactSearchCfg, Graph, SolverCfg, ThicknessSolver};
use tracing::debug;
use tracing_subscriber::{prelude::*, EnvFilter};

mod fixtures;

use fixtures::Fixture;

#[derive(Parser)]
#[command(author, version, about)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// List the built-in graphs
    List,

    /// Compute the thickness of built-in graphs
    Run(RunArgs),
}

#[derive(Args, Debug, Default)]
struct RunArgs {
    /// Graph to run, repeatable; all of them when omitted
    #[arg(short, long = "fixture", value_name = "NAME")]
    fixtures: Vec<String>,

    /// Also print the layer counts of every heuristic
    #[arg(long)]
    strategies: bool,

    /// Check every produced decomposition
    #[arg(long)]
    verify: bool,

    /// Only search graphs with fewer edges exhaustively
    #[arg(long, value_name = "N")]
    exact_max_edges: Option<usize>,

    /// Largest layer count tried by the exhaustive search
    #[arg(long, value_name = "N")]
    exact_max_layers: Option<usize>,

    /// Partitions examined before the exhaustive search gives up
    #[arg(long, value_name = "N")]
    exact_budget: Option<u64>,
}

impl RunArgs {
    fn solver_cfg(&self) -> SolverCfg {
        let defaults = ExactSearchCfg::default();
        SolverCfg {
            exact: ExactSearchCfg {
                max_edges: self.exact_max_edges.unwrap_or(defaults.max_edges),
                max_layers: self.exact_max_layers.unwrap_or(defaults.max_layers),
                max_partitions: self.exact_budget.or(defaults.max_partitions),
            },
        }
    }

    fn selected(&self) -> Result<Vec<Fixture>> {
        if self.fixtures.is_empty() {
            return Ok(fixtures::all());
        }
        self.fixtures
            .iter()
            .map(|name| fixtures::find(name).with_context(|| format!("Unknown graph {name:?}")))
            .collect()
    }
}

fn list() {
    for fixture in fixtures::all() {
        match fixture.graph() {
            Ok(graph) => println!(
                "{}: {} vertices, {} edges",
                fixture.name,
                graph.vertex_count(),
                graph.edge_count()
            ),
            Err(err) => println!("{}: {err}", fixture.name),
        }
    }
}

fn run(args: &RunArgs) -> Result<Vec<String>> {
    let solver: ThicknessSolver = ThicknessSolver::default().with_cfg(args.solver_cfg());
    debug!("Solver configuration: {:?}", solver.cfg);

    let mut lines = Vec::new();
    for fixture in args.selected()? {
        let graph = fixture
            .graph()
            .with_context(|| format!("Failed to build {}", fixture.name))?;

        let solution = solver.solve(&graph);
        lines.push(format!(
            "{}: {} ({})",
            fixture.name, solution.thickness, solution.route
        ));

        if args.verify {
            if let Some(decomposition) = &solution.decomposition {
                decomposition
                    .verify(&graph, solver.oracle())
                    .with_context(|| format!("Invalid decomposition of {}", fixture.name))?;
            }
        }

        if args.strategies {
            lines.extend(strategies(&solver, &fixture, &graph, args.verify)?);
        }
    }
    Ok(lines)
}

fn strategies(
    solver: &ThicknessSolver,
    fixture: &Fixture,
    graph: &Graph<u32>,
    verify: bool,
) -> Result<Vec<String>> {
    if verify {
        for (strategy, decomposition) in solver.compressed_heuristics(graph) {
            decomposition
                .verify(graph, solver.oracle())
                .with_context(|| format!("Invalid {strategy} decomposition of {}", fixture.name))?;
        }
    }

    Ok(solver
        .heuristic_runs(graph)
        .into_iter()
        .map(|run| {
            format!(
                "  {}: {} layers, {} after compression",
                run.strategy, run.layers, run.compressed
            )
        })
        .collect())
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(EnvFilter::from_default_env())
        .init();

    match cli.command {
        Command::List => list(),
        Command::Run(args) => {
            for line in run(&args)? {
                println!("{line}");
            }
        }
    }
    Ok(())
}
