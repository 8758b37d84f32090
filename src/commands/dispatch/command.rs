//! Command trait and context for dispatching commands

use std::path::Path;
use std::time::Instant;

use crate::cli::Cli;
use routegraph_core::config::RouteConfig;
use routegraph_core::error::{Result, RouteError};
use routegraph_core::format::OutputFormat;
use routegraph_core::loader::{load_routes_from_file, LoadReport};
use routegraph_core::{trace_time, Graph, Node};

/// Shared context for command execution
pub struct CommandContext<'a> {
    pub cli: &'a Cli,
    pub start: Instant,
    pub config: RouteConfig,
}

impl<'a> CommandContext<'a> {
    pub fn new(cli: &'a Cli, start: Instant) -> Result<Self> {
        let config = resolve_config(cli)?;
        Ok(Self { cli, start, config })
    }

    pub fn format(&self) -> OutputFormat {
        self.cli.format.unwrap_or(self.config.output.format)
    }

    pub fn routes_path(&self) -> Result<&Path> {
        match &self.cli.routes {
            Some(path) => Ok(path.as_path()),
            None => routegraph_core::bail_usage!(
                "no routes file given (use --routes or set ROUTEGRAPH_ROUTES)"
            ),
        }
    }

    /// Load the routes file into a fresh graph
    pub fn load_graph(&self) -> Result<(Graph, LoadReport)> {
        let path = self.routes_path()?;
        let mut graph = Graph::new();
        let report = load_routes_from_file(&mut graph, path, &self.config.loader)?;

        if self.cli.verbose {
            trace_time!(
                self.start,
                "load_routes",
                routes = report.routes_added,
                skipped = report.diagnostics.len()
            );
        }

        Ok((graph, report))
    }

    /// Load the routes file, warning on stderr about skipped tokens
    pub fn load_graph_reporting(&self) -> Result<Graph> {
        let (graph, report) = self.load_graph()?;
        if !self.cli.quiet {
            for diagnostic in &report.diagnostics {
                eprintln!("warning: {}", diagnostic);
            }
        }
        Ok(graph)
    }
}

/// Resolve configuration: explicit `--config`, else `routegraph.toml` next to
/// the routes file, else defaults. CLI flags override file settings.
pub fn resolve_config(cli: &Cli) -> Result<RouteConfig> {
    let config_path = match (&cli.config, &cli.routes) {
        (Some(path), _) => Some(path.clone()),
        (None, Some(routes)) => RouteConfig::discover(routes),
        (None, None) => None,
    };

    let mut config = match config_path {
        Some(path) => {
            tracing::debug!(path = %path.display(), "load_config");
            RouteConfig::load(&path)?
        }
        None => RouteConfig::default(),
    };

    if cli.strict {
        config.loader.strict = true;
    }

    Ok(config)
}

/// Output format in effect: `--format`, else the config file, else human.
/// A config file that fails to load counts as absent.
pub fn effective_format(cli: &Cli) -> OutputFormat {
    cli.format.unwrap_or_else(|| {
        resolve_config(cli)
            .map(|config| config.output.format)
            .unwrap_or_default()
    })
}

/// Find a node by label, ignoring case
pub fn resolve_node<'g>(graph: &'g Graph, label: &str) -> Result<&'g Node> {
    graph.node(label).ok_or_else(|| RouteError::NodeNotFound {
        id: label.to_string(),
    })
}

/// Trait for commands that can be executed
pub trait Command {
    fn execute(&self, ctx: &CommandContext) -> Result<()>;
}

/// No-op command (when no subcommand is provided)
pub struct NoCommand;

impl Command for NoCommand {
    fn execute(&self, _ctx: &CommandContext) -> Result<()> {
        println!("routegraph {}", env!("CARGO_PKG_VERSION"));
        println!();
        println!("Distances, trips and shortest routes over a route graph.");
        println!();
        println!("Run `routegraph --help` for usage information.");
        Ok(())
    }
}
