//! Infection traversal and limited-infection accumulation.
//!
//! Two entry points:
//! - [`total_infection`] infects every node reachable from a root.
//! - [`limited_infection`] infects whole connected components until the
//!   infected count reaches or passes a target, so the result may overshoot
//!   the target by up to (size of the last accepted component - 1).
//!
//! Traversal is iterative with an explicit stack. Membership is checked
//! before a node is pushed (mark-before-expand), so cyclic graphs terminate,
//! each node is expanded at most once, and each edge is examined at most
//! twice. The graph is never mutated.

use crate::graph::{Graph, GraphRef};
use std::collections::HashSet;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InfectionError {
    /// A start node or ordering entry is not a node of the graph.
    #[error("node {node} is out of range for a graph of {node_count} nodes")]
    RootOutOfRange { node: usize, node_count: usize },
    /// The requested limit can never be met.
    #[error("limit {limit} exceeds total node count {node_count}")]
    LimitTooLarge { limit: usize, node_count: usize },
}

/// Infect the entire connected component of `start`, folding it into
/// `infected`.
///
/// `infected` may already be non-empty (accumulation across components);
/// on success it is a superset of its prior value. Fails with
/// [`InfectionError::RootOutOfRange`] before touching `infected` if `start`
/// is not a node of the graph.
///
/// O(V + E) over the component reachable from `start`.
pub fn infect_component<G: Graph>(
    graph: &G,
    start: usize,
    infected: &mut HashSet<usize>,
) -> Result<(), InfectionError> {
    let n = graph.node_count();
    if start >= n {
        return Err(InfectionError::RootOutOfRange { node: start, node_count: n });
    }
    if !infected.insert(start) {
        return Ok(());
    }
    let mut stack = vec![start];
    while let Some(node) = stack.pop() {
        for next in graph.neighbors(node) {
            if infected.insert(next) {
                stack.push(next);
            }
        }
    }
    Ok(())
}

/// [`infect_component`] over borrowed neighbor slices.
pub fn infect_component_ref<G: GraphRef>(
    graph: &G,
    start: usize,
    infected: &mut HashSet<usize>,
) -> Result<(), InfectionError> {
    let n = graph.node_count();
    if start >= n {
        return Err(InfectionError::RootOutOfRange { node: start, node_count: n });
    }
    if !infected.insert(start) {
        return Ok(());
    }
    let mut stack = vec![start];
    while let Some(node) = stack.pop() {
        for &next in graph.neighbors_ref(node) {
            if infected.insert(next) {
                stack.push(next);
            }
        }
    }
    Ok(())
}

/// Infect every node reachable from `root`.
///
/// A root with no edges yields the singleton `{root}`.
pub fn total_infection<G: Graph>(graph: &G, root: usize) -> Result<HashSet<usize>, InfectionError> {
    let mut infected = HashSet::new();
    infect_component(graph, root, &mut infected)?;
    Ok(infected)
}

/// [`total_infection`] over borrowed neighbor slices.
pub fn total_infection_ref<G: GraphRef>(graph: &G, root: usize) -> Result<HashSet<usize>, InfectionError> {
    let mut infected = HashSet::new();
    infect_component_ref(graph, root, &mut infected)?;
    Ok(infected)
}

/// Infect at least `limit` nodes by accumulating whole connected components,
/// visiting candidate roots in natural index order `0..node_count`.
///
/// See [`limited_infection_ordered`] for the contract; this is the same
/// operation with the identity ordering.
pub fn limited_infection<G: Graph>(graph: &G, limit: usize) -> Result<HashSet<usize>, InfectionError> {
    let order: Vec<usize> = (0..graph.node_count()).collect();
    limited_infection_ordered(graph, limit, &order)
}

/// Infect at least `limit` nodes by accumulating whole connected components,
/// visiting candidate roots in the order given by `order`.
///
/// Components are indivisible: once a root is accepted its entire component
/// is infected, so the result may exceed `limit` by up to (size of the last
/// accepted component - 1). `limit == 0` returns an empty set without
/// traversing anything. Provided `order` enumerates every node, the result
/// holds at least `limit` nodes; which components are selected depends on
/// `order`, so use a fixed ordering for reproducible output.
///
/// Fails with [`InfectionError::LimitTooLarge`] when `limit` exceeds the
/// node count, and with [`InfectionError::RootOutOfRange`] when `order`
/// contains an out-of-range entry. Both are checked before any traversal;
/// no partial result is ever produced.
pub fn limited_infection_ordered<G: Graph>(
    graph: &G,
    limit: usize,
    order: &[usize],
) -> Result<HashSet<usize>, InfectionError> {
    let n = graph.node_count();
    if limit > n {
        return Err(InfectionError::LimitTooLarge { limit, node_count: n });
    }
    if let Some(&node) = order.iter().find(|&&node| node >= n) {
        return Err(InfectionError::RootOutOfRange { node, node_count: n });
    }

    let mut infected = HashSet::new();
    for &node in order {
        if infected.len() >= limit {
            break;
        }
        if infected.contains(&node) {
            // Swept in by an earlier component.
            continue;
        }
        let before = infected.len();
        infect_component(graph, node, &mut infected)?;
        log::debug!(
            "accepted component rooted at {node}: {} nodes ({} infected of {limit})",
            infected.len() - before,
            infected.len()
        );
    }
    Ok(infected)
}

/// [`limited_infection`] over borrowed neighbor slices.
pub fn limited_infection_ref<G: GraphRef>(graph: &G, limit: usize) -> Result<HashSet<usize>, InfectionError> {
    let n = graph.node_count();
    if limit > n {
        return Err(InfectionError::LimitTooLarge { limit, node_count: n });
    }
    let mut infected = HashSet::new();
    for node in 0..n {
        if infected.len() >= limit {
            break;
        }
        if infected.contains(&node) {
            continue;
        }
        let before = infected.len();
        infect_component_ref(graph, node, &mut infected)?;
        log::debug!(
            "accepted component rooted at {node}: {} nodes ({} infected of {limit})",
            infected.len() - before,
            infected.len()
        );
    }
    Ok(infected)
}
