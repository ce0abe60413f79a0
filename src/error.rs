/// Structured error types for csvstore.
///
/// Uses `thiserror` for better API surface and error composition.
/// Every operation maps driver errors to its own kind, so callers can
/// branch on "missing" vs "broken" without string matching.
use thiserror::Error;

/// Main error type for record store operations
#[derive(Error, Debug)]
pub enum StoreError {
    /// Could not establish or verify the database connection
    #[error("failed to connect to database: {0}")]
    Connect(#[source] sqlx::Error),

    /// Schema DDL was rejected by the database
    #[error("failed to create schema: {0}")]
    Schema(#[source] sqlx::Error),

    /// Input rows could not be encoded as JSON
    #[error("failed to encode records as JSON: {0}")]
    Serialize(#[source] serde_json::Error),

    /// Insert statement failed
    #[error("failed to insert record: {0}")]
    Write(#[source] sqlx::Error),

    /// Select statement failed
    #[error("failed to query records: {0}")]
    Query(#[source] sqlx::Error),

    /// Select-by-id matched zero rows
    #[error("record not found: id {id}")]
    NotFound { id: i32 },

    /// A stored payload could not be decoded as JSON
    #[error("failed to decode stored payload for record {id}: {source}")]
    Deserialize {
        id: i32,
        source: serde_json::Error,
    },

    /// Configuration error
    #[error("configuration error: {0}")]
    Config(String),
}

/// Result type alias for record store operations
pub type Result<T> = std::result::Result<T, StoreError>;
