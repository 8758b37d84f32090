use crate::graph::types::{Destination, NodeIdx};

/// Why a destination could not be added to an edge-set
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EdgeConflict {
    SelfLoop,
    Duplicate,
}

/// The weighted outgoing connections of one node.
///
/// Destinations keep insertion order; walk enumeration follows it.
#[derive(Debug, Clone)]
pub struct EdgeSet {
    source: NodeIdx,
    destinations: Vec<Destination>,
}

impl EdgeSet {
    pub(crate) fn new(source: NodeIdx) -> Self {
        EdgeSet {
            source,
            destinations: Vec::new(),
        }
    }

    pub fn source(&self) -> NodeIdx {
        self.source
    }

    pub fn destinations(&self) -> &[Destination] {
        &self.destinations
    }

    pub fn len(&self) -> usize {
        self.destinations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.destinations.is_empty()
    }

    /// Weight of the edge to `to`, if one exists
    pub fn weight_to(&self, to: NodeIdx) -> Option<u32> {
        self.destinations
            .iter()
            .find(|d| d.node == to)
            .map(|d| d.weight)
    }

    /// Check whether `to` may be added without breaking the edge-set invariants
    pub fn check_destination(&self, to: NodeIdx) -> Result<(), EdgeConflict> {
        if to == self.source {
            return Err(EdgeConflict::SelfLoop);
        }
        if self.weight_to(to).is_some() {
            return Err(EdgeConflict::Duplicate);
        }
        Ok(())
    }

    pub(crate) fn add_destination(&mut self, to: NodeIdx, weight: u32) -> Result<(), EdgeConflict> {
        self.check_destination(to)?;
        self.destinations.push(Destination { node: to, weight });
        Ok(())
    }
}
