//! `routegraph distance` - total distance along an exact route

use crate::cli::parse::parse_route;
use crate::commands::dispatch::{resolve_node, CommandContext};
use crate::commands::render::{display_path, print_json, records_header};
use routegraph_core::error::{Result, RouteError};
use routegraph_core::format::OutputFormat;
use routegraph_core::graph::NO_SUCH_ROUTE;
use routegraph_core::{Distance, Node};

/// Execute the distance command
pub fn execute(ctx: &CommandContext, route: &str) -> Result<()> {
    let labels = parse_route(route).map_err(RouteError::UsageError)?;
    let graph = ctx.load_graph_reporting()?;

    let nodes = labels
        .iter()
        .map(|label| resolve_node(&graph, label))
        .collect::<Result<Vec<&Node>>>()?;
    let distance = graph.distance(&nodes)?;

    let ids: Vec<String> = nodes.iter().map(|n| n.id().to_string()).collect();

    match ctx.format() {
        OutputFormat::Json => {
            let output = match distance {
                Distance::Route(value) => serde_json::json!({
                    "route": ids,
                    "found": true,
                    "distance": value,
                }),
                Distance::NoSuchRoute => serde_json::json!({
                    "route": ids,
                    "found": false,
                    "distance": null,
                    "message": NO_SUCH_ROUTE,
                }),
            };
            print_json(&output)?;
        }
        OutputFormat::Records => {
            println!(
                "{}",
                records_header(ctx, "distance", &format!("route={}", ids.join("-")))
            );
            match distance {
                Distance::Route(value) => println!("R distance={}", value),
                Distance::NoSuchRoute => println!("R distance=none"),
            }
        }
        OutputFormat::Human => {
            if ctx.cli.verbose {
                println!("{}: {}", display_path(&graph, &ids), distance);
            } else {
                println!("{}", distance);
            }
        }
    }

    Ok(())
}
