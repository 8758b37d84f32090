//! Error types and exit codes for routegraph
//!
//! Exit codes:
//! - 0: Success
//! - 1: Generic failure
//! - 2: Usage error (bad flags/args, malformed query)
//! - 3: Data error (invalid route, unknown node)
//!
//! "No such route" is not an error. Queries report it as a value
//! (`Distance::NoSuchRoute`, an empty path list or `None`).

mod macros;

use std::path::PathBuf;
use thiserror::Error;

/// Exit codes for the routegraph binary
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    /// Success (0)
    Success = 0,
    /// Generic failure (1)
    Failure = 1,
    /// Usage error - bad flags/args (2)
    Usage = 2,
    /// Data error - invalid route, unknown node (3)
    Data = 3,
}

impl From<ExitCode> for i32 {
    fn from(code: ExitCode) -> i32 {
        code as i32
    }
}

/// Errors that can occur while building or querying a route graph
#[derive(Error, Debug)]
pub enum RouteError {
    // Usage errors (exit code 2)
    #[error("{0}")]
    UsageError(String),

    #[error("invalid query: {0}")]
    InvalidQuery(String),

    #[error("invalid {context}: {value}")]
    InvalidValue { context: String, value: String },

    // Data errors (exit code 3)
    #[error("invalid edge {from} => {to}: {reason}")]
    InvalidEdge {
        from: String,
        to: String,
        reason: String,
    },

    #[error("invalid route \"{token}\": {reason}")]
    InvalidRoute { token: String, reason: String },

    #[error("node not found: {id}")]
    NodeNotFound { id: String },

    // Generic failures (exit code 1)
    #[error("failed to read {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("{0}")]
    Other(String),
}

impl RouteError {
    /// Self-loop rejected by `add_route`
    pub fn self_loop(name: &str) -> Self {
        RouteError::InvalidEdge {
            from: name.to_string(),
            to: name.to_string(),
            reason: "start and end nodes cannot be the same".to_string(),
        }
    }

    /// Duplicate `(from, to)` pair rejected by `add_route`
    pub fn duplicate_route(from: &str, to: &str) -> Self {
        RouteError::InvalidEdge {
            from: from.to_string(),
            to: to.to_string(),
            reason: "route already exists".to_string(),
        }
    }

    /// Create an error for an invalid value or configuration
    pub fn invalid_value(context: &str, value: impl std::fmt::Display) -> Self {
        RouteError::InvalidValue {
            context: context.to_string(),
            value: value.to_string(),
        }
    }

    /// Create an error for a failed file read
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        RouteError::Io {
            path: path.into(),
            source,
        }
    }

    /// Get the appropriate exit code for this error
    pub fn exit_code(&self) -> ExitCode {
        match self {
            RouteError::UsageError(_)
            | RouteError::InvalidQuery(_)
            | RouteError::InvalidValue { .. } => ExitCode::Usage,

            RouteError::InvalidEdge { .. }
            | RouteError::InvalidRoute { .. }
            | RouteError::NodeNotFound { .. } => ExitCode::Data,

            RouteError::Io { .. }
            | RouteError::Toml(_)
            | RouteError::Json(_)
            | RouteError::Other(_) => ExitCode::Failure,
        }
    }

    /// Get the error type identifier
    fn error_type(&self) -> &'static str {
        match self {
            RouteError::UsageError(_) => "usage_error",
            RouteError::InvalidQuery(_) => "invalid_query",
            RouteError::InvalidValue { .. } => "invalid_value",
            RouteError::InvalidEdge { .. } => "invalid_edge",
            RouteError::InvalidRoute { .. } => "invalid_route",
            RouteError::NodeNotFound { .. } => "node_not_found",
            RouteError::Io { .. } => "io_error",
            RouteError::Toml(_) => "toml_error",
            RouteError::Json(_) => "json_error",
            RouteError::Other(_) => "other",
        }
    }

    /// Convert error to JSON representation for structured error output.
    pub fn to_json(&self) -> serde_json::Value {
        serde_json::json!({
            "error": {
                "code": self.exit_code() as i32,
                "type": self.error_type(),
                "message": self.to_string(),
            }
        })
    }
}

/// Result type alias for routegraph operations
pub type Result<T> = std::result::Result<T, RouteError>;
