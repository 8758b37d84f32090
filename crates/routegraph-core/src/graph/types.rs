use serde::{Deserialize, Serialize};
use std::fmt;

/// Text reported when a route cannot be followed
pub const NO_SUCH_ROUTE: &str = "NO SUCH ROUTE";

/// Index of a node in the graph's node arena
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeIdx(usize);

impl NodeIdx {
    pub(crate) fn new(index: usize) -> Self {
        NodeIdx(index)
    }

    pub fn index(self) -> usize {
        self.0
    }
}

/// One weighted outgoing connection
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Destination {
    pub node: NodeIdx,
    pub weight: u32,
}

/// A walk that reached the destination, with its accumulated cost
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PathRecord {
    /// Node ids in visiting order, start first
    pub path: Vec<String>,
    pub cost: u64,
}

impl PathRecord {
    /// Number of edges traversed (path length minus one)
    pub fn stops(&self) -> usize {
        self.path.len().saturating_sub(1)
    }
}

/// Result of following an explicit node sequence
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Distance {
    /// Every hop resolved; the sum of hop weights
    Route(u64),
    /// Some hop had no edge
    NoSuchRoute,
}

impl Distance {
    pub fn value(&self) -> Option<u64> {
        match self {
            Distance::Route(d) => Some(*d),
            Distance::NoSuchRoute => None,
        }
    }

    pub fn is_route(&self) -> bool {
        matches!(self, Distance::Route(_))
    }
}

impl fmt::Display for Distance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Distance::Route(d) => write!(f, "{}", d),
            Distance::NoSuchRoute => write!(f, "{}", NO_SUCH_ROUTE),
        }
    }
}
