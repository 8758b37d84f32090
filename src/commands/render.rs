//! Shared output helpers for the human, json and records formats

use serde::Serialize;

use crate::commands::dispatch::CommandContext;
use routegraph_core::error::Result;
use routegraph_core::{Graph, PathRecord};

/// Render node ids as display names joined by dashes, e.g. `A-B-C`
pub fn display_path(graph: &Graph, path: &[String]) -> String {
    path.iter()
        .map(|id| graph.node(id).map(|n| n.name()).unwrap_or(id.as_str()))
        .collect::<Vec<_>>()
        .join("-")
}

/// Node ids joined by dashes, the form used in records output
pub fn id_path(path: &[String]) -> String {
    path.join("-")
}

/// First line of records output
pub fn records_header(ctx: &CommandContext, mode: &str, extra: &str) -> String {
    let routes = ctx
        .cli
        .routes
        .as_ref()
        .map(|p| p.display().to_string())
        .unwrap_or_else(|| "-".to_string());
    let mut header = format!("H routegraph=1 records=1 routes={} mode={}", routes, mode);
    if !extra.is_empty() {
        header.push(' ');
        header.push_str(extra);
    }
    header
}

pub fn path_record_line(record: &PathRecord) -> String {
    format!("P path={} cost={}", id_path(&record.path), record.cost)
}

pub fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
