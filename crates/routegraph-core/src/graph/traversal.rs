use crate::graph::types::{Destination, NodeIdx};
use crate::graph::Graph;

/// Trait for providing graph adjacency to the walk engine
pub trait GraphProvider {
    /// Outgoing connections of `node`, in insertion order; empty for terminal nodes
    fn outbound(&self, node: NodeIdx) -> &[Destination];
    fn node_id(&self, node: NodeIdx) -> &str;
    fn node_count(&self) -> usize;
}

impl GraphProvider for Graph {
    fn outbound(&self, node: NodeIdx) -> &[Destination] {
        self.outbound_at(node)
            .map(|set| set.destinations())
            .unwrap_or(&[])
    }

    fn node_id(&self, node: NodeIdx) -> &str {
        self.node_at(node).id()
    }

    fn node_count(&self) -> usize {
        Graph::node_count(self)
    }
}
