use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use wayfarer_lib::{
    load_graph, load_heuristic, plan_search, Algorithm, Dedup, Heuristic, SearchRequest,
};

#[derive(Parser, Debug)]
#[command(author, version, about = "Graph search utilities")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Compute a path between two states of a JSON adjacency graph.
    Route {
        /// Path to the graph file: a JSON object of state -> neighbor list.
        #[arg(long)]
        graph: PathBuf,

        /// Start state.
        #[arg(long = "from")]
        from: String,

        /// Goal state.
        #[arg(long = "to")]
        to: String,

        /// Search algorithm: dfs, bfs, or best-first.
        #[arg(long, default_value_t = Algorithm::BreadthFirst)]
        algorithm: Algorithm,

        /// Path to a heuristic file (JSON object of state -> estimate);
        /// only consulted by best-first search. Missing entries count as 0.
        #[arg(long)]
        heuristic: Option<PathBuf>,

        /// Re-expand states instead of tracking a visited set. Reproduces
        /// the naive traversal; unsafe on cyclic graphs.
        #[arg(long)]
        naive: bool,

        /// Emit the plan as JSON instead of text.
        #[arg(long)]
        json: bool,
    },
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();

    match cli.command {
        Command::Route {
            graph,
            from,
            to,
            algorithm,
            heuristic,
            naive,
            json,
        } => handle_route(
            &graph,
            &from,
            &to,
            algorithm,
            heuristic.as_deref(),
            naive,
            json,
        ),
    }
}

fn handle_route(
    graph_path: &Path,
    from: &str,
    to: &str,
    algorithm: Algorithm,
    heuristic_path: Option<&Path>,
    naive: bool,
    json: bool,
) -> Result<()> {
    let graph = load_graph(graph_path)
        .with_context(|| format!("failed to load graph from {}", graph_path.display()))?;

    let heuristic = match heuristic_path {
        Some(path) => load_heuristic(path)
            .with_context(|| format!("failed to load heuristic from {}", path.display()))?,
        None => Heuristic::new(),
    };

    let dedup = if naive { Dedup::Naive } else { Dedup::Tracked };
    let request = SearchRequest::new(from.to_string(), to.to_string(), algorithm)
        .with_dedup(dedup)
        .with_heuristic(heuristic);

    let plan = plan_search(&graph, &request)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&plan)?);
        return Ok(());
    }

    println!(
        "Path from {} to {} ({}, {} hops):",
        plan.start,
        plan.goal,
        plan.algorithm,
        plan.hop_count()
    );
    for state in &plan.steps {
        println!("- {state}");
    }

    Ok(())
}

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(env_filter)
        .finish();

    let _ = tracing::subscriber::set_global_default(subscriber);
}
