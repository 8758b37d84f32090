//! routegraph - route graph query CLI
//!
//! Loads a routes file (tokens such as `AB5, BC4`) and answers distance,
//! trip enumeration and shortest-route queries over it.

mod cli;
mod commands;

use std::env;
use std::process::ExitCode;
use std::time::Instant;

use clap::Parser;

use cli::Cli;
use routegraph_core::error::{ExitCode as RouteExitCode, RouteError};
use routegraph_core::format::OutputFormat;
use routegraph_core::logging;

fn main() -> ExitCode {
    let start = Instant::now();

    let argv_format_json = argv_requests_json();

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            // Parsing can fail before `Cli.format` exists; honour a JSON request anyway.
            if argv_format_json {
                let route_error = match err.kind() {
                    clap::error::ErrorKind::DisplayHelp
                    | clap::error::ErrorKind::DisplayVersion => err.exit(),
                    _ => RouteError::UsageError(err.to_string()),
                };

                eprintln!("{}", route_error.to_json());
                return ExitCode::from(route_error.exit_code() as u8);
            }

            err.exit();
        }
    };

    if let Err(e) = logging::init_tracing(cli.verbose, cli.log_level.as_deref(), cli.log_json) {
        eprintln!("Warning: Failed to initialize logging: {}", e);
    }

    tracing::debug!(elapsed = ?start.elapsed(), "parse_args");

    let result = commands::dispatch::run(&cli, start);

    match result {
        Ok(()) => ExitCode::from(RouteExitCode::Success as u8),
        Err(e) => {
            let exit_code = e.exit_code();

            if argv_format_json
                || commands::dispatch::effective_format(&cli) == OutputFormat::Json
            {
                eprintln!("{}", e.to_json());
            } else if !cli.quiet {
                eprintln!("error: {}", e);
            }

            ExitCode::from(exit_code as u8)
        }
    }
}

fn argv_requests_json() -> bool {
    let mut args = env::args().skip(1);
    while let Some(arg) = args.next() {
        if arg == "--format" {
            if args.next().is_some_and(|v| v.eq_ignore_ascii_case("json")) {
                return true;
            }
        } else if arg.eq_ignore_ascii_case("--format=json") {
            return true;
        }
    }
    false
}
