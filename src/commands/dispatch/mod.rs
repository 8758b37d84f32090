//! Command dispatch logic for routegraph

use std::time::Instant;

use crate::cli::Cli;
use routegraph_core::error::Result;
use tracing::debug;

mod command;
mod commands;

pub use command::{effective_format, resolve_node, CommandContext};
use command::{Command, NoCommand};

pub fn run(cli: &Cli, start: Instant) -> Result<()> {
    let ctx = CommandContext::new(cli, start)?;

    debug!(elapsed = ?start.elapsed(), format = %ctx.format(), "resolve_config");

    match &cli.command {
        None => NoCommand.execute(&ctx),
        Some(cmd) => cmd.execute(&ctx),
    }
}
