//! `routegraph nodes` - list nodes and their outgoing routes

use serde::Serialize;

use crate::commands::dispatch::CommandContext;
use crate::commands::render::{print_json, records_header};
use routegraph_core::error::Result;
use routegraph_core::format::OutputFormat;
use routegraph_core::{Graph, Node};

#[derive(Serialize)]
struct RouteEntry<'a> {
    to: &'a str,
    distance: u32,
}

#[derive(Serialize)]
struct NodeEntry<'a> {
    id: &'a str,
    name: &'a str,
    routes: Vec<RouteEntry<'a>>,
}

fn outgoing<'g>(graph: &'g Graph, node: &Node) -> Vec<(&'g Node, u32)> {
    graph
        .edges()
        .filter(|(from, _, _)| from.id() == node.id())
        .map(|(_, to, weight)| (to, weight))
        .collect()
}

/// Execute the nodes command
pub fn execute(ctx: &CommandContext) -> Result<()> {
    let graph = ctx.load_graph_reporting()?;

    match ctx.format() {
        OutputFormat::Json => {
            let entries: Vec<NodeEntry> = graph
                .nodes()
                .map(|node| NodeEntry {
                    id: node.id(),
                    name: node.name(),
                    routes: outgoing(&graph, node)
                        .into_iter()
                        .map(|(to, distance)| RouteEntry {
                            to: to.id(),
                            distance,
                        })
                        .collect(),
                })
                .collect();
            print_json(&serde_json::json!({
                "node_count": graph.node_count(),
                "route_count": graph.edge_count(),
                "nodes": entries,
            }))?;
        }
        OutputFormat::Records => {
            let extra = format!(
                "nodes={} routes={}",
                graph.node_count(),
                graph.edge_count()
            );
            println!("{}", records_header(ctx, "nodes", &extra));
            for node in graph.nodes() {
                println!("N {} name={}", node.id(), node.name());
            }
            for (from, to, weight) in graph.edges() {
                println!("E {} {} distance={}", from.id(), to.id(), weight);
            }
        }
        OutputFormat::Human => {
            if graph.is_empty() {
                if !ctx.cli.quiet {
                    println!("No routes loaded");
                }
                return Ok(());
            }
            for node in graph.nodes() {
                let routes = outgoing(&graph, node);
                if routes.is_empty() {
                    println!("{} (terminal)", node);
                } else {
                    let list = routes
                        .iter()
                        .map(|(to, weight)| format!("{}({})", to, weight))
                        .collect::<Vec<_>>()
                        .join(", ");
                    println!("{} -> {}", node, list);
                }
            }
        }
    }

    Ok(())
}
