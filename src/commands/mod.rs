//! CLI commands for routegraph

pub mod dispatch;
pub mod distance;
pub mod load;
pub mod nodes;
pub mod paths;
pub mod render;
pub mod shortest;
