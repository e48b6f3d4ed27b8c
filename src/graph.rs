//! Graph adapter traits and a concrete adjacency-list graph.
//!
//! Node identifiers are `usize` indices in `0..node_count`. A node exists
//! iff its index is in range; isolated nodes are representable because the
//! node count is independent of the edge set.

/// Minimal read-only view of an undirected graph.
pub trait Graph {
    fn node_count(&self) -> usize;
    fn neighbors(&self, node: usize) -> Vec<usize>;
    fn degree(&self, node: usize) -> usize {
        self.neighbors(node).len()
    }
}

/// A graph view that can return **borrowed** neighbor slices.
///
/// This is the allocation-light adapter: it avoids building a new `Vec`
/// for every node expanded during a traversal.
pub trait GraphRef {
    fn node_count(&self) -> usize;
    fn neighbors_ref(&self, node: usize) -> &[usize];
    fn degree(&self, node: usize) -> usize {
        self.neighbors_ref(node).len()
    }
}

/// Undirected adjacency-list graph.
///
/// Neighbor lists are kept sorted and deduplicated, so node enumeration and
/// neighbor enumeration are both stable. Self-loops are stored once.
#[derive(Debug, Clone, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AdjList {
    adj: Vec<Vec<usize>>,
}

impl AdjList {
    /// An edgeless graph with nodes `0..n`.
    pub fn with_nodes(n: usize) -> Self {
        Self { adj: vec![Vec::new(); n] }
    }

    /// Add the undirected edge `u -- v`.
    ///
    /// Duplicate edges are ignored. Panics if either endpoint is out of
    /// range: edges referencing missing nodes are a caller-side bug, not a
    /// recoverable condition.
    pub fn add_edge(&mut self, u: usize, v: usize) {
        let n = self.adj.len();
        assert!(u < n && v < n, "edge ({u}, {v}) out of range for {n} nodes");
        Self::insert_sorted(&mut self.adj[u], v);
        if u != v {
            Self::insert_sorted(&mut self.adj[v], u);
        }
    }

    pub fn edge_count(&self) -> usize {
        let half: usize = self.adj.iter().map(Vec::len).sum();
        let self_loops = (0..self.adj.len()).filter(|&u| self.adj[u].binary_search(&u).is_ok()).count();
        (half + self_loops) / 2
    }

    fn insert_sorted(list: &mut Vec<usize>, value: usize) {
        if let Err(pos) = list.binary_search(&value) {
            list.insert(pos, value);
        }
    }
}

impl Graph for AdjList {
    fn node_count(&self) -> usize {
        self.adj.len()
    }
    fn neighbors(&self, node: usize) -> Vec<usize> {
        self.adj.get(node).cloned().unwrap_or_default()
    }
}

impl GraphRef for AdjList {
    fn node_count(&self) -> usize {
        self.adj.len()
    }
    fn neighbors_ref(&self, node: usize) -> &[usize] {
        self.adj.get(node).map(Vec::as_slice).unwrap_or(&[])
    }
}

#[cfg(feature = "petgraph")]
impl<N, E, Ix> Graph for petgraph::Graph<N, E, petgraph::Undirected, Ix>
where
    Ix: petgraph::graph::IndexType,
{
    fn node_count(&self) -> usize {
        self.node_count()
    }
    fn neighbors(&self, node: usize) -> Vec<usize> {
        self.neighbors(petgraph::graph::NodeIndex::new(node)).map(|idx| idx.index()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_edge_dedups_and_sorts() {
        let mut g = AdjList::with_nodes(4);
        g.add_edge(2, 0);
        g.add_edge(0, 2);
        g.add_edge(0, 1);
        assert_eq!(g.neighbors(0), vec![1, 2]);
        assert_eq!(g.neighbors(2), vec![0]);
        assert_eq!(g.edge_count(), 2);
    }

    #[test]
    fn test_self_loop_stored_once() {
        let mut g = AdjList::with_nodes(2);
        g.add_edge(1, 1);
        assert_eq!(g.neighbors(1), vec![1]);
        assert_eq!(g.edge_count(), 1);
    }

    #[test]
    #[should_panic(expected = "out of range")]
    fn test_add_edge_out_of_range_panics() {
        let mut g = AdjList::with_nodes(2);
        g.add_edge(0, 2);
    }

    #[test]
    fn test_neighbors_of_out_of_range_node_is_empty() {
        let g = AdjList::with_nodes(1);
        assert!(Graph::neighbors(&g, 5).is_empty());
        assert!(GraphRef::neighbors_ref(&g, 5).is_empty());
    }
}
