//! Error types for the Boardsight library.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for Boardsight operations.
#[derive(Debug, Error)]
pub enum BoardsightError {
    /// The board service could not be reached.
    #[error("Transport error: {0}")]
    Transport(#[source] reqwest::Error),

    /// The board service answered with a non-success HTTP status.
    #[error("Board API error ({status}): {body}")]
    Status { status: u16, body: String },

    /// The board service reported query-level errors.
    #[error("GraphQL error: {}", .0.join("; "))]
    Query(Vec<String>),

    /// The response carried no board for the requested identifier.
    #[error("Board '{0}' not found in response")]
    MissingBoard(String),

    /// Error reading or writing a file.
    #[error("IO error for '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Error from the CSV library.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// JSON serialization/deserialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Failure talking to the language model.
    #[error("LLM error: {0}")]
    Llm(String),
}

/// Result type alias for Boardsight operations.
pub type Result<T> = std::result::Result<T, BoardsightError>;
