//! Id-resolved graph topology.
//!
//! Layout algorithms receive nodes and edges as parallel slices keyed by
//! string identifiers. `GraphIndex` resolves that representation once per
//! layout call into a petgraph `StableGraph` whose node weights are slot
//! indices into the caller's node slice. Edges whose source or target
//! identifier is absent from the node set are silently skipped; they are
//! expected input, not an error.

use petgraph::Directed;
use petgraph::stable_graph::{NodeIndex, StableGraph};
use petgraph::visit::{EdgeRef, IntoEdgeReferences};
use std::collections::HashMap;

use super::{Edge, Node};

/// Resolved topology over a node/edge slice pair.
///
/// Node weights are slots into the original node slice; edge weights carry
/// the edge's relationship strength.
pub struct GraphIndex {
    graph: StableGraph<usize, f32, Directed>,
    index_of_slot: Vec<NodeIndex>,
}

impl GraphIndex {
    /// Build the index. Dangling edges are dropped; for duplicate node ids
    /// the first occurrence wins.
    pub fn build(nodes: &[Node], edges: &[Edge]) -> Self {
        let mut graph = StableGraph::with_capacity(nodes.len(), edges.len());
        let mut index_of_id: HashMap<&str, NodeIndex> = HashMap::with_capacity(nodes.len());
        let mut index_of_slot = Vec::with_capacity(nodes.len());

        for (slot, node) in nodes.iter().enumerate() {
            let index = graph.add_node(slot);
            index_of_id.entry(node.id.as_str()).or_insert(index);
            index_of_slot.push(index);
        }

        for edge in edges {
            let (Some(&source), Some(&target)) = (
                index_of_id.get(edge.source.as_str()),
                index_of_id.get(edge.target.as_str()),
            ) else {
                continue;
            };
            graph.add_edge(source, target, edge.weight);
        }

        Self {
            graph,
            index_of_slot,
        }
    }

    /// Number of nodes.
    pub fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    /// Number of resolved (non-dangling) edges.
    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    /// Resolved edges as `(source_slot, target_slot, weight)` triples.
    pub fn edges(&self) -> impl Iterator<Item = (usize, usize, f32)> + '_ {
        self.graph
            .edge_references()
            .map(|e| (self.graph[e.source()], self.graph[e.target()], *e.weight()))
    }

    /// In-degree of every slot, counting one per resolved edge (parallel
    /// edges and self-loops included).
    pub fn in_degrees(&self) -> Vec<usize> {
        let mut degrees = vec![0usize; self.index_of_slot.len()];
        for e in self.graph.edge_references() {
            degrees[self.graph[e.target()]] += 1;
        }
        degrees
    }

    /// Successor slots of a node, one entry per outgoing edge.
    pub fn successors(&self, slot: usize) -> impl Iterator<Item = usize> + '_ {
        self.graph
            .neighbors(self.index_of_slot[slot])
            .map(|n| self.graph[n])
    }
}
