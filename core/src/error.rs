//! Error types for the devports-core library.

use std::time::Duration;

use thiserror::Error;

/// Result type alias for devports operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised by command execution, parsing and configuration.
#[derive(Error, Debug)]
pub enum Error {
    /// Failed to execute a system command, or it exited unsuccessfully.
    #[error("Command execution failed: {0}")]
    CommandFailed(String),

    /// Failed to parse command output.
    #[error("Failed to parse output: {0}")]
    ParseError(String),

    /// A command did not finish within its time bound.
    #[error("Command `{command}` timed out after {}s", .after.as_secs())]
    Timeout { command: String, after: Duration },

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization/deserialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(String),
}

/// Terminal outcomes of a discovery call.
///
/// The `Display` text is the message surfaced to callers through
/// [`DiscoveryReport::error`](crate::domain::DiscoveryReport::error).
#[derive(Error, Debug)]
pub enum DiscoveryError {
    /// One or more required external tools are not on the search path.
    #[error(
        "Missing required system commands: {}. Please install these tools to use port monitoring.",
        .missing.join(", ")
    )]
    EnvironmentUnavailable { missing: Vec<String> },

    /// Listener enumeration failed, including its unfiltered fallback.
    #[error("Error scanning ports: {0}")]
    EnumerationFailure(#[source] Error),
}
