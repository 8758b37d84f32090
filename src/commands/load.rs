//! `routegraph load` - load the routes file and report what was read

use crate::commands::dispatch::CommandContext;
use crate::commands::render::{print_json, records_header};
use routegraph_core::error::Result;
use routegraph_core::format::OutputFormat;

/// Execute the load command
pub fn execute(ctx: &CommandContext) -> Result<()> {
    let (graph, report) = ctx.load_graph()?;

    match ctx.format() {
        OutputFormat::Json => {
            print_json(&serde_json::json!({
                "status": "ok",
                "routes_added": report.routes_added,
                "nodes": graph.node_count(),
                "strict": ctx.config.loader.strict,
                "diagnostics": report.diagnostics,
            }))?;
        }
        OutputFormat::Records => {
            let extra = format!(
                "status=ok routes_added={} nodes={} skipped={}",
                report.routes_added,
                graph.node_count(),
                report.diagnostics.len()
            );
            println!("{}", records_header(ctx, "load", &extra));
            for diagnostic in &report.diagnostics {
                println!(
                    "D warning invalid-route position={} \"{}\"",
                    diagnostic.position, diagnostic.token
                );
            }
        }
        OutputFormat::Human => {
            if !ctx.cli.quiet {
                println!(
                    "Loaded {} routes between {} nodes",
                    report.routes_added,
                    graph.node_count()
                );
            }
            for diagnostic in &report.diagnostics {
                println!("  skipped: {}", diagnostic);
            }
        }
    }

    Ok(())
}
