//! # contagion
//!
//! Reachability-based "infection" over undirected contact graphs.
//!
//! Given a graph of users and edges representing connections, compute which
//! users become infected from one or more seeds:
//!
//! - [`total_infection`] infects every node reachable from a root.
//! - [`limited_infection`] infects whole connected components until the
//!   infected count reaches or passes a target (components are indivisible,
//!   so the result may overshoot the target).
//!
//! Graphs are supplied through the [`Graph`] / [`GraphRef`] adapter traits;
//! [`AdjList`] is a ready-made undirected adjacency-list implementation, and
//! [`generate`] builds seeded synthetic graphs for demos and benches.
//!
//! ```
//! use contagion::{total_infection, limited_infection, AdjList};
//!
//! // 0 -- 1 -- 2, with 3 and 4 isolated.
//! let mut g = AdjList::with_nodes(5);
//! g.add_edge(0, 1);
//! g.add_edge(1, 2);
//!
//! let infected = total_infection(&g, 1).unwrap();
//! assert_eq!(infected.len(), 3);
//!
//! // Asking for 4 sweeps in the component of 0 (3 nodes) plus node 3.
//! let infected = limited_infection(&g, 4).unwrap();
//! assert_eq!(infected.len(), 4);
//! ```

pub mod generate;
pub mod graph;
pub mod infection;
pub mod render;

pub use graph::{AdjList, Graph, GraphRef};
pub use infection::{
    infect_component, infect_component_ref, limited_infection, limited_infection_ordered,
    limited_infection_ref, total_infection, total_infection_ref, InfectionError,
};
pub use render::render_dot;
