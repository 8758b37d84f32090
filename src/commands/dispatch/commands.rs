//! Command implementations for all routegraph commands

use crate::cli::Commands;
use crate::commands::dispatch::command::{Command, CommandContext};
use crate::commands::{distance, load, nodes, paths, shortest};
use routegraph_core::error::Result;
use tracing::debug;

impl Command for Commands {
    fn execute(&self, ctx: &CommandContext) -> Result<()> {
        let result = match self {
            Commands::Distance { route } => distance::execute(ctx, route),
            Commands::Paths(args) => paths::execute(ctx, args),
            Commands::Shortest { from, to } => shortest::execute(ctx, from, to),
            Commands::Nodes => nodes::execute(ctx),
            Commands::Load => load::execute(ctx),
        };

        if ctx.cli.verbose {
            debug!(elapsed = ?ctx.start.elapsed(), "execute_command");
        }
        result
    }
}
