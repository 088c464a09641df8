//! Error types for Leadpulse

use thiserror::Error;

/// Errors that can occur while publishing reports or processing engagement
#[derive(Debug, Error)]
pub enum EngineError {
    #[error("No report content available for publishing")]
    NoReport,

    #[error("Transport failure: {0}")]
    Transport(String),

    #[error("Remote rejected publish (status {status}): {body}")]
    RemoteRejected { status: u16, body: String },

    #[error("Missing required field: {0}")]
    MissingField(String),

    #[error("Malformed timestamp: {0}")]
    MalformedTimestamp(String),

    #[error("Invalid JSON: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("Missing configuration: {0}")]
    Config(String),
}
