use crate::error::{Result, RouteError};
use crate::graph::edge_set::{EdgeConflict, EdgeSet};
use crate::graph::types::{Distance, NodeIdx};
use crate::node::Node;
use std::collections::HashMap;
use tracing::{debug, trace};

/// Weighted, directed route graph.
///
/// Nodes live in an arena indexed by [`NodeIdx`]; adjacency refers to nodes by
/// index. Both grow monotonically: routes can be added but never removed.
#[derive(Debug, Clone, Default)]
pub struct Graph {
    nodes: Vec<Node>,
    index: HashMap<String, NodeIdx>,
    edge_sets: HashMap<NodeIdx, EdgeSet>,
}

impl Graph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a weighted route `from -> to`.
    ///
    /// Rejects self-loops and duplicate `(from, to)` pairs with
    /// [`RouteError::InvalidEdge`] before touching any state. On success both
    /// nodes are registered; an existing node with the same id is replaced by
    /// the one passed in.
    pub fn add_route(&mut self, from: &Node, to: &Node, distance: u32) -> Result<&mut Self> {
        if from.id() == to.id() {
            return Err(RouteError::self_loop(from.name()));
        }

        if let (Some(from_idx), Some(to_idx)) = (self.lookup(from.id()), self.lookup(to.id())) {
            if let Some(edge_set) = self.edge_sets.get(&from_idx) {
                edge_set
                    .check_destination(to_idx)
                    .map_err(|conflict| edge_error(conflict, from, to))?;
            }
        }

        let from_idx = self.upsert(from);
        let to_idx = self.upsert(to);

        self.edge_sets
            .entry(from_idx)
            .or_insert_with(|| EdgeSet::new(from_idx))
            .add_destination(to_idx, distance)
            .map_err(|conflict| edge_error(conflict, from, to))?;

        trace!(from = %from.id(), to = %to.id(), distance, "add_route");
        Ok(self)
    }

    /// Look up a node by id, ignoring case
    pub fn node(&self, id: &str) -> Option<&Node> {
        self.lookup(&id.to_lowercase())
            .map(|idx| &self.nodes[idx.index()])
    }

    /// Nodes in the order they were first seen
    pub fn nodes(&self) -> impl Iterator<Item = &Node> {
        self.nodes.iter()
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edge_sets.values().map(EdgeSet::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Outgoing connections of `node`; `None` for terminal or unknown nodes
    pub fn edge_set(&self, node: &Node) -> Option<&EdgeSet> {
        self.lookup(node.id())
            .and_then(|idx| self.edge_sets.get(&idx))
    }

    /// All routes as `(from, to, weight)`, grouped by source in node order
    pub fn edges(&self) -> impl Iterator<Item = (&Node, &Node, u32)> {
        self.nodes.iter().enumerate().flat_map(move |(i, from)| {
            self.edge_sets
                .get(&NodeIdx::new(i))
                .map(|set| set.destinations())
                .unwrap_or(&[])
                .iter()
                .map(move |dest| (from, &self.nodes[dest.node.index()], dest.weight))
        })
    }

    /// Smallest edge weight in the graph
    pub fn min_weight(&self) -> Option<u32> {
        self.edge_sets
            .values()
            .flat_map(|set| set.destinations().iter().map(|d| d.weight))
            .min()
    }

    /// Total distance along an explicit node sequence.
    ///
    /// Two identical nodes are trivially `Route(0)`. Otherwise every
    /// consecutive hop must have an edge; the first missing hop makes the
    /// whole sequence `NoSuchRoute`.
    pub fn distance(&self, nodes: &[&Node]) -> Result<Distance> {
        if nodes.len() < 2 {
            crate::bail_query!("please specify both start and destination nodes");
        }
        if nodes.len() == 2 && nodes[0].id() == nodes[1].id() {
            return Ok(Distance::Route(0));
        }

        let mut total: u64 = 0;
        for hop in nodes.windows(2) {
            match self.hop_weight(hop[0], hop[1]) {
                Some(weight) => total += u64::from(weight),
                None => {
                    debug!(from = %hop[0].id(), to = %hop[1].id(), "missing hop");
                    return Ok(Distance::NoSuchRoute);
                }
            }
        }

        Ok(Distance::Route(total))
    }

    fn hop_weight(&self, from: &Node, to: &Node) -> Option<u32> {
        let to_idx = self.lookup(to.id())?;
        self.edge_set(from)?.weight_to(to_idx)
    }

    pub(crate) fn lookup(&self, id: &str) -> Option<NodeIdx> {
        self.index.get(id).copied()
    }

    pub(crate) fn node_at(&self, idx: NodeIdx) -> &Node {
        &self.nodes[idx.index()]
    }

    pub(crate) fn outbound_at(&self, idx: NodeIdx) -> Option<&EdgeSet> {
        self.edge_sets.get(&idx)
    }

    fn upsert(&mut self, node: &Node) -> NodeIdx {
        match self.lookup(node.id()) {
            Some(idx) => {
                self.nodes[idx.index()] = node.clone();
                idx
            }
            None => {
                let idx = NodeIdx::new(self.nodes.len());
                self.nodes.push(node.clone());
                self.index.insert(node.id().to_string(), idx);
                idx
            }
        }
    }
}

fn edge_error(conflict: EdgeConflict, from: &Node, to: &Node) -> RouteError {
    match conflict {
        EdgeConflict::SelfLoop => RouteError::self_loop(from.name()),
        EdgeConflict::Duplicate => RouteError::duplicate_route(from.name(), to.name()),
    }
}
