//! Route loading
//!
//! Routes are written as delimited tokens of the form `<Letter><Letter><Digits>`,
//! e.g. `AB5, BC4, CD8`: a route from `A` to `B` of weight 5. Node ids are the
//! lowercased letters; the original case is kept as the display name.
//!
//! Malformed tokens are skipped with a diagnostic unless the loader is strict.

use std::fmt;
use std::path::Path;

use regex::Regex;
use serde::Serialize;
use tracing::{debug, warn};

use crate::config::LoaderConfig;
use crate::error::{Result, RouteError};
use crate::graph::Graph;
use crate::node::Node;

const ROUTE_PATTERN: &str = r"^([A-Za-z])([A-Za-z])([0-9]+)$";

/// One parsed route token
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RouteTriple {
    pub from: String,
    pub to: String,
    pub weight: u32,
}

/// A token that was skipped while parsing
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LoadDiagnostic {
    /// 1-based position of the token in the input
    pub position: usize,
    pub token: String,
    pub reason: String,
}

impl fmt::Display for LoadDiagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "invalid input \"{}\" at route {}: {}",
            self.token, self.position, self.reason
        )
    }
}

#[derive(Debug, Clone, Default)]
pub struct ParsedRoutes {
    pub routes: Vec<RouteTriple>,
    pub diagnostics: Vec<LoadDiagnostic>,
}

/// Outcome of loading routes into a graph
#[derive(Debug, Clone, Default, Serialize)]
pub struct LoadReport {
    pub routes_added: usize,
    pub diagnostics: Vec<LoadDiagnostic>,
}

/// Split and parse route text into triples.
///
/// Empty tokens (blank input, trailing delimiters) are ignored. In strict
/// mode the first malformed token fails with [`RouteError::InvalidRoute`].
pub fn parse_routes(text: &str, opts: &LoaderConfig) -> Result<ParsedRoutes> {
    let route_re = Regex::new(ROUTE_PATTERN)
        .map_err(|e| RouteError::Other(format!("failed to compile route pattern: {}", e)))?;

    let mut parsed = ParsedRoutes::default();

    for (i, raw) in text.split(opts.delimiter).enumerate() {
        let token = raw.trim();
        if token.is_empty() {
            continue;
        }

        match parse_token(&route_re, token) {
            Ok(route) => parsed.routes.push(route),
            Err(reason) => {
                if opts.strict {
                    return Err(RouteError::InvalidRoute {
                        token: token.to_string(),
                        reason,
                    });
                }
                let diagnostic = LoadDiagnostic {
                    position: i + 1,
                    token: token.to_string(),
                    reason,
                };
                warn!(token = %diagnostic.token, position = diagnostic.position, reason = %diagnostic.reason, "skipping route");
                parsed.diagnostics.push(diagnostic);
            }
        }
    }

    Ok(parsed)
}

fn parse_token(route_re: &Regex, token: &str) -> std::result::Result<RouteTriple, String> {
    let Some(caps) = route_re.captures(token) else {
        return Err("expected <letter><letter><distance>, e.g. AB5".to_string());
    };

    let weight: u32 = caps[3]
        .parse()
        .map_err(|_| format!("distance {} is out of range", &caps[3]))?;
    if weight == 0 {
        return Err("distance must be positive".to_string());
    }

    Ok(RouteTriple {
        from: caps[1].to_string(),
        to: caps[2].to_string(),
        weight,
    })
}

/// Parse route text and add every route to `graph`.
///
/// A node already registered under the same id is reused. An invalid edge
/// (self-loop or duplicate) stops the load; routes added before it remain.
pub fn load_routes(graph: &mut Graph, text: &str, opts: &LoaderConfig) -> Result<LoadReport> {
    let parsed = parse_routes(text, opts)?;
    let mut report = LoadReport {
        routes_added: 0,
        diagnostics: parsed.diagnostics,
    };

    for route in &parsed.routes {
        let from = graph
            .node(&route.from)
            .cloned()
            .unwrap_or_else(|| Node::new(&route.from));
        let to = graph
            .node(&route.to)
            .cloned()
            .unwrap_or_else(|| Node::new(&route.to));

        graph.add_route(&from, &to, route.weight)?;
        report.routes_added += 1;
    }

    debug!(
        routes_added = report.routes_added,
        skipped = report.diagnostics.len(),
        nodes = graph.node_count(),
        "load_routes"
    );
    Ok(report)
}

/// Read a route file and load it into `graph`
pub fn load_routes_from_file(
    graph: &mut Graph,
    path: &Path,
    opts: &LoaderConfig,
) -> Result<LoadReport> {
    let text = std::fs::read_to_string(path).map_err(|e| RouteError::io(path, e))?;
    load_routes(graph, &text, opts)
}

impl Graph {
    /// Build a graph from route text using default loader settings
    pub fn from_routes_str(text: &str) -> Result<Graph> {
        let mut graph = Graph::new();
        load_routes(&mut graph, text, &LoaderConfig::default())?;
        Ok(graph)
    }
}
