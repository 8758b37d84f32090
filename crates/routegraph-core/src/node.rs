//! Graph nodes
//!
//! A node is identified case-insensitively: its `id` is the lowercased label,
//! while `name` keeps the label as it was first written.

use serde::Serialize;
use std::fmt;

/// A named vertex in the route graph
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Node {
    id: String,
    name: String,
}

impl Node {
    /// Create a node from a display label, deriving the id by lowercasing it
    pub fn new(label: &str) -> Self {
        Node {
            id: label.to_lowercase(),
            name: label.to_string(),
        }
    }

    /// Create a node with an explicit id and display name.
    /// An empty name falls back to the id.
    pub fn with_id(id: impl Into<String>, name: impl Into<String>) -> Self {
        let id = id.into();
        let name = name.into();
        let name = if name.is_empty() { id.clone() } else { name };
        Node { id, name }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}
