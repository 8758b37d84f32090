//! Routegraph Core Library
//!
//! Weighted, directed route graph with exact-route distances, bounded walk
//! enumeration and shortest-route queries, plus the route loader and
//! configuration used by the `routegraph` CLI.

pub mod config;
pub mod error;
pub mod format;
pub mod graph;
pub mod loader;
pub mod logging;
pub mod node;

pub use graph::{Distance, Graph, PathRecord};
pub use node::Node;
