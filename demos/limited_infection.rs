//! Limited-infection simulation: build a random classroom graph, infect
//! whole components until the target count is reached, and print a Graphviz
//! DOT rendering to stdout.
//!
//! Exits non-zero when the requested limit exceeds the graph's node count.

use clap::Parser;
use contagion::{limited_infection, render_dot, Graph};

#[derive(Debug, Parser)]
#[command(about = "Infect approximately --limit nodes of a random classroom graph")]
struct Args {
    /// Number of nodes in the graph.
    #[arg(long, default_value_t = 100)]
    num_nodes: usize,
    /// Desired number of infected nodes.
    #[arg(long, default_value_t = 50)]
    limit: usize,
    /// Seed for graph construction.
    #[arg(long, default_value_t = 42)]
    seed: u64,
}

fn main() -> Result<(), contagion::InfectionError> {
    env_logger::init();
    let args = Args::parse();

    let graph = contagion::generate::classroom_graph(args.num_nodes, args.seed);
    let infected = limited_infection(&graph, args.limit)?;
    log::info!(
        "infected {} of {} nodes (limit {})",
        infected.len(),
        graph.node_count(),
        args.limit
    );

    print!("{}", render_dot(&graph, &infected));
    Ok(())
}
