use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use waypath_lib::{load_map, plan_route, Graph, RouteAlgorithm, RouteRequest, WaypointGraph};

#[derive(Parser, Debug)]
#[command(author, version, about = "Waypath map and route planning utilities")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Compute a route between two waypoint names on a map.
    Route {
        /// Path to the JSON map file.
        #[arg(long)]
        map: PathBuf,
        /// Starting waypoint name.
        #[arg(long = "from")]
        from: String,
        /// Destination waypoint name.
        #[arg(long = "to")]
        to: String,
        /// Algorithm to use when planning the route.
        #[arg(long, value_enum, default_value = "a-star")]
        algorithm: AlgorithmArg,
        /// Output format.
        #[arg(long, value_enum, default_value = "plain")]
        format: OutputFormat,
    },
    /// Report waypoint and link counts for a map.
    Info {
        /// Path to the JSON map file.
        #[arg(long)]
        map: PathBuf,
    },
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
enum AlgorithmArg {
    AStar,
    Dijkstra,
}

impl From<AlgorithmArg> for RouteAlgorithm {
    fn from(value: AlgorithmArg) -> Self {
        match value {
            AlgorithmArg::AStar => RouteAlgorithm::AStar,
            AlgorithmArg::Dijkstra => RouteAlgorithm::Dijkstra,
        }
    }
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
enum OutputFormat {
    Plain,
    Json,
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();

    match cli.command {
        Command::Route {
            map,
            from,
            to,
            algorithm,
            format,
        } => handle_route(&map, &from, &to, algorithm, format),
        Command::Info { map } => handle_info(&map),
    }
}

fn handle_route(
    map_path: &Path,
    from: &str,
    to: &str,
    algorithm: AlgorithmArg,
    format: OutputFormat,
) -> Result<()> {
    let graph = load_graph(map_path)?;

    let request = RouteRequest {
        start: from.to_string(),
        goal: to.to_string(),
        algorithm: algorithm.into(),
    };
    let plan = plan_route(&graph, &request)?;

    match format {
        OutputFormat::Plain => {
            println!("Route ({}):", plan.algorithm);
            for &step in &plan.steps {
                let name = graph.waypoint_name(step).unwrap_or("<unknown>");
                println!("- {} ({})", name, step);
            }
            println!("Total cost: {:.2} over {} hops", plan.total_cost, plan.hop_count());
        }
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&plan)?);
        }
    }

    Ok(())
}

fn handle_info(map_path: &Path) -> Result<()> {
    let graph = load_graph(map_path)?;
    println!(
        "Map contains {} waypoints and {} links",
        graph.len(),
        graph.link_count()
    );
    Ok(())
}

fn load_graph(map_path: &Path) -> Result<WaypointGraph> {
    load_map(map_path)
        .with_context(|| format!("failed to load map from {}", map_path.display()))
}

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(env_filter)
        .finish();

    let _ = tracing::subscriber::set_global_default(subscriber);
}
