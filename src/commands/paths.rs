//! `routegraph paths` - enumerate trips under a stop or distance bound

use serde::Serialize;

use crate::cli::PathsArgs;
use crate::commands::dispatch::{resolve_node, CommandContext};
use crate::commands::render::{display_path, path_record_line, print_json, records_header};
use routegraph_core::config::QueryConfig;
use routegraph_core::error::Result;
use routegraph_core::format::OutputFormat;
use routegraph_core::PathRecord;

/// Which bound the trips were enumerated under
#[derive(Debug, Clone, Copy, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TripBound {
    MaxStops(usize),
    ExactStops(usize),
    MaxDistance(u64),
}

impl TripBound {
    /// Stop bounds are checked against `query.max_stops` here; a distance
    /// bound can only be checked once the graph is loaded.
    fn from_args(args: &PathsArgs, query: &QueryConfig) -> Result<Self> {
        match (args.max_stops, args.exact_stops, args.max_distance) {
            (Some(n), None, None) => {
                query.check_stops("--max-stops", n)?;
                Ok(TripBound::MaxStops(n))
            }
            (None, Some(n), None) => {
                query.check_stops("--exact-stops", n)?;
                Ok(TripBound::ExactStops(n))
            }
            (None, None, Some(d)) => Ok(TripBound::MaxDistance(d)),
            _ => routegraph_core::bail_usage!(
                "specify exactly one of --max-stops, --exact-stops or --max-distance"
            ),
        }
    }

    fn records_field(&self) -> String {
        match self {
            TripBound::MaxStops(n) => format!("max_stops={}", n),
            TripBound::ExactStops(n) => format!("exact_stops={}", n),
            TripBound::MaxDistance(d) => format!("max_distance={}", d),
        }
    }
}

#[derive(Serialize)]
struct PathsOutput<'a> {
    from: &'a str,
    to: &'a str,
    bound: TripBound,
    count: usize,
    paths: &'a [PathRecord],
}

/// Execute the paths command
pub fn execute(ctx: &CommandContext, args: &PathsArgs) -> Result<()> {
    let bound = TripBound::from_args(args, &ctx.config.query)?;
    let graph = ctx.load_graph_reporting()?;
    if let TripBound::MaxDistance(d) = bound {
        if let Some(stops) = graph.stop_bound_for_distance(d) {
            ctx.config.query.check_stops("--max-distance", stops)?;
        }
    }
    let from = resolve_node(&graph, &args.from)?;
    let to = resolve_node(&graph, &args.to)?;

    let paths = match bound {
        TripBound::MaxStops(n) => graph.paths_with_max_stops(from, to, n),
        TripBound::ExactStops(n) => graph.paths_with_exact_stops(from, to, n),
        TripBound::MaxDistance(d) => graph.paths_under_max_distance(from, to, d),
    };

    match ctx.format() {
        OutputFormat::Json => {
            print_json(&PathsOutput {
                from: from.id(),
                to: to.id(),
                bound,
                count: paths.len(),
                paths: &paths,
            })?;
        }
        OutputFormat::Records => {
            let extra = format!(
                "from={} to={} {} count={}",
                from.id(),
                to.id(),
                bound.records_field(),
                paths.len()
            );
            println!("{}", records_header(ctx, "paths", &extra));
            for record in &paths {
                println!("{}", path_record_line(record));
            }
        }
        OutputFormat::Human => {
            for record in &paths {
                println!("{} ({})", display_path(&graph, &record.path), record.cost);
            }
            if !ctx.cli.quiet {
                println!("{} trips from {} to {}", paths.len(), from, to);
            }
        }
    }

    Ok(())
}
