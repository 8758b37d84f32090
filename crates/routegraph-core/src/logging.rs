use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Env var that overrides `RUST_LOG` and the CLI flags
pub const LOG_ENV_VAR: &str = "ROUTEGRAPH_LOG";

/// Helper macro for logging elapsed time at trace level.
///
/// Usage:
/// ```rust,ignore
/// let start = Instant::now();
/// // ... some work ...
/// trace_time!(start, "load_routes");
/// // Or with additional fields:
/// trace_time!(start, "load_routes", routes = report.routes_added);
/// ```
#[macro_export]
macro_rules! trace_time {
    ($start:expr, $name:expr) => {
        tracing::trace!(elapsed = ?$start.elapsed(), $name);
    };
    ($start:expr, $name:expr $(, $field:ident = $value:expr)*) => {
        tracing::trace!(elapsed = ?$start.elapsed(), $($field = $value),*, $name);
    };
}

/// Initialize structured logging based on CLI arguments
pub fn init_tracing(
    verbose: bool,
    log_level: Option<&str>,
    log_json: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let level = match (verbose, log_level) {
        (true, None) => "routegraph=debug,routegraph_core=debug",
        (false, None) => "routegraph=warn,routegraph_core=warn",
        (_, Some(level)) => return init_with_level(level, log_json),
    };

    init_with_level(level, log_json)
}

/// Filter directive for a bare level (`debug`) or a full directive (`routegraph_core=trace`)
fn level_directive(level: &str) -> String {
    if level.contains('=') {
        level.to_string()
    } else {
        format!("routegraph={level},routegraph_core={level}")
    }
}

/// Pick the filter: `ROUTEGRAPH_LOG`, then `RUST_LOG`, then the CLI level.
/// Empty variables are ignored.
fn filter_directive(app_env: Option<String>, rust_log: Option<String>, level: &str) -> String {
    app_env
        .filter(|v| !v.trim().is_empty())
        .or_else(|| rust_log.filter(|v| !v.trim().is_empty()))
        .unwrap_or_else(|| level_directive(level))
}

fn init_with_level(level: &str, log_json: bool) -> Result<(), Box<dyn std::error::Error>> {
    let directive = filter_directive(
        std::env::var(LOG_ENV_VAR).ok(),
        std::env::var(EnvFilter::DEFAULT_ENV).ok(),
        level,
    );
    let filter = EnvFilter::try_new(&directive)
        .unwrap_or_else(|_| EnvFilter::new(level_directive(level)));

    let registry = tracing_subscriber::registry().with(filter);

    if log_json {
        registry
            .with(
                fmt::layer()
                    .json()
                    .with_writer(std::io::stderr)
                    .with_ansi(false)
                    .with_span_events(
                        tracing_subscriber::fmt::format::FmtSpan::NEW
                            | tracing_subscriber::fmt::format::FmtSpan::CLOSE,
                    ),
            )
            .try_init()?;
    } else {
        registry
            .with(
                fmt::layer()
                    .compact()
                    .with_target(false)
                    .with_writer(std::io::stderr)
                    .with_ansi(false),
            )
            .try_init()?;
    }

    Ok(())
}
