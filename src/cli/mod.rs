//! CLI argument parsing for routegraph
//!
//! Uses clap for argument parsing.
//! Supports global flags: --routes, --config, --format, --quiet, --verbose, --strict

pub mod args;
pub mod parse;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

pub use args::PathsArgs;
use parse::parse_output_format;
use routegraph_core::format::OutputFormat;

/// routegraph - distances, trips and shortest routes over a route graph
#[derive(Parser, Debug)]
#[command(name = "routegraph")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Routes file, e.g. containing `AB5, BC4, CD8`
    #[arg(long, short, global = true, env = "ROUTEGRAPH_ROUTES")]
    pub routes: Option<PathBuf>,

    /// Config file (default: routegraph.toml next to the routes file)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Output format: human, json or records (overrides the config file)
    #[arg(long, global = true, value_parser = parse_output_format)]
    pub format: Option<OutputFormat>,

    /// Suppress non-essential output
    #[arg(long, short, global = true)]
    pub quiet: bool,

    /// Report timing for major phases
    #[arg(long, short, global = true)]
    pub verbose: bool,

    /// Log level or filter directive (e.g. debug, routegraph_core=trace)
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// Emit logs as JSON
    #[arg(long, global = true)]
    pub log_json: bool,

    /// Fail on malformed route tokens instead of skipping them
    #[arg(long, global = true)]
    pub strict: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Total distance along an exact route
    Distance {
        /// Route as dash-separated nodes, e.g. A-B-C
        route: String,
    },

    /// Enumerate trips between two nodes
    Paths(PathsArgs),

    /// Cheapest trip between two nodes (at least one stop)
    Shortest {
        /// Start node
        from: String,

        /// Destination node
        to: String,
    },

    /// List nodes and their outgoing routes
    Nodes,

    /// Load the routes file and report what was read
    Load,
}
