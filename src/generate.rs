//! Seeded synthetic graph builders for demos, tests, and benches.
//!
//! Every builder is deterministic given its inputs (ChaCha8 RNG keyed by the
//! caller's seed), so demo output and benchmarks are reproducible.

use crate::graph::AdjList;
use rand::prelude::*;
use rand_chacha::ChaCha8Rng;

/// A random classroom/contact graph approximating a tutoring site's user
/// graph.
///
/// Repeatedly picks a random "teacher" node and a random class of 10 to 20
/// distinct "students", connecting the teacher to each student, until about
/// half the nodes have been placed in classrooms. Teachers may run several
/// classes and students may sit in several; the remaining nodes stay
/// isolated (independent learners).
pub fn classroom_graph(node_count: usize, seed: u64) -> AdjList {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let mut graph = AdjList::with_nodes(node_count);
    let mut classroom_users = 0;
    while classroom_users < node_count / 2 {
        let size = rng.random_range(10..20).min(node_count);
        let teacher = rng.random_range(0..node_count);
        for student in rand::seq::index::sample(&mut rng, node_count, size) {
            if student != teacher {
                graph.add_edge(teacher, student);
            }
        }
        classroom_users += size;
    }
    graph
}

/// `clique_count` disjoint cliques of `clique_size` nodes each.
///
/// Every connected component has exactly `clique_size` nodes, which makes
/// the limited-infection overshoot behavior easy to predict.
pub fn caveman_graph(clique_count: usize, clique_size: usize) -> AdjList {
    let mut graph = AdjList::with_nodes(clique_count * clique_size);
    for c in 0..clique_count {
        let base = c * clique_size;
        for i in 0..clique_size {
            for j in (i + 1)..clique_size {
                graph.add_edge(base + i, base + j);
            }
        }
    }
    graph
}

/// A single cycle over `n` nodes.
pub fn ring_graph(n: usize) -> AdjList {
    let mut graph = AdjList::with_nodes(n);
    if n > 1 {
        for i in 0..n {
            graph.add_edge(i, (i + 1) % n);
        }
    }
    graph
}
