use anyhow::Result;
use clap::{Parser, Subcommand};
use composition_graph::app::engine::Visualizer;
use composition_graph::cli;
use composition_graph::domain::builder::BuildOptions;
use composition_graph::domain::type_ref::TypeRef;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(
    name = "cgviz",
    version,
    about = "Render the dependency graph of a composition container snapshot"
)]
struct Cli {
    /// Container snapshot (JSON)
    snapshot: PathBuf,

    /// Generic definition treated as a streamable sequence, e.g.
    /// "System.Collections.Generic.IEnumerable`1" (repeatable, replaces the default)
    #[arg(long = "sequence-type", value_name = "DEF", global = true)]
    sequence_types: Vec<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Write the Graphviz description of ROOT's dependencies
    Dot {
        /// Root type, e.g. "App.Root" or "App.IRepository`1<App.User>"
        root: TypeRef,

        /// Write to this file instead of stdout
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,
    },
    /// List the edges discovered from ROOT
    Edges {
        root: TypeRef,

        #[arg(long)]
        json: bool,

        /// Print fully qualified type names
        #[arg(long)]
        qualified: bool,
    },
    /// Print node and edge counts, the roots, and whether the graph is cyclic
    Summary {
        root: TypeRef,

        #[arg(long)]
        json: bool,
    },
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    init_tracing();
    let args = Cli::parse();

    let mut options = BuildOptions::default();
    if !args.sequence_types.is_empty() {
        options.sequence_definitions = args.sequence_types.clone();
    }
    let visualizer = Visualizer::load_snapshot(&args.snapshot, options)?;

    match &args.command {
        Commands::Dot { root, output } => cli::write_dot(&visualizer, root, output.as_deref()),
        Commands::Edges {
            root,
            json,
            qualified,
        } => cli::print_edges(&visualizer, root, *json, *qualified),
        Commands::Summary { root, json } => cli::print_summary(&visualizer, root, *json),
    }
}
