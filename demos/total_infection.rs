//! Total-infection simulation: build a random classroom graph, infect it
//! from a random root, and print a Graphviz DOT rendering to stdout.
//!
//! ```text
//! cargo run --example total_infection -- --num-nodes 100 | dot -Tpng > infected.png
//! ```

use clap::Parser;
use contagion::{render_dot, total_infection, Graph};
use rand::prelude::*;
use rand_chacha::ChaCha8Rng;

#[derive(Debug, Parser)]
#[command(about = "Infect every node reachable from a random root of a random classroom graph")]
struct Args {
    /// Number of nodes in the graph.
    #[arg(long, default_value_t = 100)]
    num_nodes: usize,
    /// Seed for graph construction and root selection.
    #[arg(long, default_value_t = 42)]
    seed: u64,
}

fn main() -> Result<(), contagion::InfectionError> {
    env_logger::init();
    let args = Args::parse();

    let graph = contagion::generate::classroom_graph(args.num_nodes, args.seed);
    let infected = if graph.node_count() == 0 {
        Default::default()
    } else {
        let mut rng = ChaCha8Rng::seed_from_u64(args.seed);
        let root = rng.random_range(0..graph.node_count());
        let infected = total_infection(&graph, root)?;
        log::info!("infected {} of {} nodes from root {root}", infected.len(), graph.node_count());
        infected
    };

    print!("{}", render_dot(&graph, &infected));
    Ok(())
}
