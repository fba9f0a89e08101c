use anyhow::{Context, Result};
use clap::Parser;
use log::{info, LevelFilter};
use std::io::{BufWriter, Write};

use mstkit::Graph;

/// mstkit - Minimum spanning tree weight with Kruskal's algorithm
///
/// Builds the built-in five vertex example graph and prints the total weight
/// of its minimum spanning tree
#[derive(Parser, Debug)]
#[clap(author, version, about, long_about = None)]
struct Args {
    /// Also print the edges that make up the tree, one per line
    #[clap(short = 'e', long = "show-edges")]
    show_edges: bool,

    /// Fail if the result is a forest rather than a single spanning tree
    #[clap(long = "require-connected")]
    require_connected: bool,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[clap(short = 'v', long = "verbose", action = clap::ArgAction::Count)]
    verbose: u8,

    /// Quiet mode (no log output)
    #[clap(short = 'q', long = "quiet", conflicts_with = "verbose")]
    quiet: bool,
}

impl Args {
    fn log_level(&self) -> LevelFilter {
        if self.quiet {
            return LevelFilter::Off;
        }
        match self.verbose {
            0 => LevelFilter::Warn,
            1 => LevelFilter::Info,
            2 => LevelFilter::Debug,
            _ => LevelFilter::Trace,
        }
    }
}

fn example_graph() -> Graph {
    let mut graph = Graph::new(5);
    graph.add_edge(0, 1, 2);
    graph.add_edge(0, 3, 6);
    graph.add_edge(1, 2, 3);
    graph.add_edge(1, 3, 8);
    graph.add_edge(1, 4, 5);
    graph.add_edge(2, 4, 7);
    graph.add_edge(3, 4, 9);
    graph
}

fn main() -> Result<()> {
    let args = Args::parse();

    env_logger::Builder::new()
        .filter_level(args.log_level())
        .parse_default_env()
        .init();

    let graph = example_graph();
    info!(
        "Example graph: {} vertices, {} edges",
        graph.vertices(),
        graph.edges().len()
    );

    let forest = graph
        .minimum_spanning_forest()
        .context("Failed to compute minimum spanning tree")?;

    if args.require_connected && !forest.is_spanning_tree() {
        anyhow::bail!(
            "Graph is not connected: {} components after Kruskal",
            forest.component_count()
        );
    }

    let stdout = std::io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    writeln!(
        out,
        "Total weight of the Minimum Spanning Tree: {}",
        forest.total_weight()
    )?;
    if args.show_edges {
        for edge in forest.edges() {
            writeln!(out, "{edge}")?;
        }
    }
    out.flush()?;

    Ok(())
}
