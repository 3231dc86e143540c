use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use pisteroute_lib::{
    build_graph, load_elevations, load_plateaus, load_ways, plan_route, ElevationMap, Graph,
    NodeId, Plateau, RouteSummary,
};

#[derive(Parser, Debug)]
#[command(version, about = "Piste-map routing utilities")]
struct Cli {
    /// Overpass JSON export with the resort's piste and lift ways.
    #[arg(long)]
    ways: PathBuf,

    /// Optional JSON object mapping node ids to elevations in metres.
    #[arg(long)]
    elevations: Option<PathBuf>,

    /// Optional JSON list of plateau rectangles.
    #[arg(long)]
    plateaus: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Compute a route between two node ids over the built graph.
    Route {
        /// Starting node id.
        #[arg(long = "from")]
        from: NodeId,
        /// Destination node id.
        #[arg(long = "to")]
        to: NodeId,
        /// Emit the route as pretty-printed JSON instead of text.
        #[arg(long)]
        json: bool,
    },
    /// Build the graph and report its size.
    Stats,
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();
    let graph = load_and_build(&cli)?;

    match cli.command {
        Command::Route { from, to, json } => handle_route(&graph, from, to, json),
        Command::Stats => handle_stats(&graph),
    }
}

fn load_and_build(cli: &Cli) -> Result<Graph> {
    let ways = load_ways(&cli.ways)
        .with_context(|| format!("failed to load ways from {}", cli.ways.display()))?;
    let elevations = match &cli.elevations {
        Some(path) => load_elevations(path)
            .with_context(|| format!("failed to load elevations from {}", path.display()))?,
        None => ElevationMap::new(),
    };
    let plateaus: Vec<Plateau> = match &cli.plateaus {
        Some(path) => load_plateaus(path)
            .with_context(|| format!("failed to load plateaus from {}", path.display()))?,
        None => Vec::new(),
    };
    Ok(build_graph(&ways, &elevations, &plateaus))
}

fn handle_route(graph: &Graph, from: NodeId, to: NodeId, json: bool) -> Result<()> {
    let plan = plan_route(graph, from, to)?;
    let summary = RouteSummary::from_plan(&plan)?;
    if json {
        println!("{}", serde_json::to_string_pretty(&summary)?);
    } else {
        print!("{}", summary.render_plain());
    }
    Ok(())
}

fn handle_stats(graph: &Graph) -> Result<()> {
    println!(
        "{} vertices, {} edges",
        graph.vertex_count(),
        graph.edge_count()
    );
    Ok(())
}

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(env_filter)
        .finish();

    let _ = tracing::subscriber::set_global_default(subscriber);
}
