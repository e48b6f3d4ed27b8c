//! Graphviz DOT rendering of an infected graph.

use crate::graph::Graph;
use std::collections::HashSet;
use std::fmt::Write as _;

/// Render `graph` as a Graphviz DOT document with infected nodes filled red
/// and the rest green.
///
/// Each undirected edge is emitted once. Neither input is mutated; pipe the
/// output through `dot -Tpng` (or similar) to get a picture.
pub fn render_dot<G: Graph>(graph: &G, infected: &HashSet<usize>) -> String {
    let mut out = String::from("graph contagion {\n  node [style=filled];\n");
    for node in 0..graph.node_count() {
        let color = if infected.contains(&node) { "red" } else { "green" };
        let _ = writeln!(out, "  {node} [fillcolor={color}];");
    }
    for u in 0..graph.node_count() {
        for v in graph.neighbors(u) {
            if u <= v {
                let _ = writeln!(out, "  {u} -- {v};");
            }
        }
    }
    out.push_str("}\n");
    out
}
