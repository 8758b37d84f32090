//! Route graph model and path queries
//!
//! Provides the weighted, directed graph and the operations over it:
//! - Route insertion with self-loop and duplicate rejection
//! - Exact-route distance over an explicit node sequence
//! - Breadth-first walk enumeration bounded by path length
//! - Stop-, distance- and cost-based queries built on that enumeration

pub mod bfs;
pub mod edge_set;
pub mod model;
pub mod query;
pub mod traversal;
pub mod types;

pub use bfs::bfs_find_paths;
pub use edge_set::EdgeSet;
pub use model::Graph;
pub use traversal::GraphProvider;
pub use types::{Destination, Distance, NodeIdx, PathRecord, NO_SUCH_ROUTE};
