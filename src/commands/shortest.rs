//! `routegraph shortest` - cheapest trip between two nodes

use crate::commands::dispatch::{resolve_node, CommandContext};
use crate::commands::render::{display_path, path_record_line, print_json, records_header};
use routegraph_core::error::Result;
use routegraph_core::format::OutputFormat;
use routegraph_core::graph::NO_SUCH_ROUTE;

/// Execute the shortest command
pub fn execute(ctx: &CommandContext, from: &str, to: &str) -> Result<()> {
    let graph = ctx.load_graph_reporting()?;
    let from = resolve_node(&graph, from)?;
    let to = resolve_node(&graph, to)?;

    let shortest = graph.shortest_path(from, to);

    match ctx.format() {
        OutputFormat::Json => {
            let output = match &shortest {
                Some(record) => serde_json::json!({
                    "from": from.id(),
                    "to": to.id(),
                    "found": true,
                    "path": record.path,
                    "cost": record.cost,
                }),
                None => serde_json::json!({
                    "from": from.id(),
                    "to": to.id(),
                    "found": false,
                    "path": null,
                    "cost": null,
                    "message": NO_SUCH_ROUTE,
                }),
            };
            print_json(&output)?;
        }
        OutputFormat::Records => {
            let extra = format!(
                "from={} to={} found={}",
                from.id(),
                to.id(),
                shortest.is_some()
            );
            println!("{}", records_header(ctx, "shortest", &extra));
            if let Some(record) = &shortest {
                println!("{}", path_record_line(record));
            }
        }
        OutputFormat::Human => match &shortest {
            Some(record) => println!("{} ({})", display_path(&graph, &record.path), record.cost),
            None => println!("{}", NO_SUCH_ROUTE),
        },
    }

    Ok(())
}
