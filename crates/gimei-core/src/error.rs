use thiserror::Error;

/// Core error type shared across Gimei crates.
#[derive(Debug, Error)]
pub enum Error {
    /// A table violates its structural invariants.
    #[error("invalid table: {0}")]
    InvalidTable(String),
    /// A string could not be parsed into a known enum value.
    #[error("unknown value: {0}")]
    UnknownValue(String),
    /// The JSON Schema could not be built or compiled.
    #[error("schema error: {0}")]
    Schema(String),
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Convenience alias for results returned by Gimei crates.
pub type Result<T> = std::result::Result<T, Error>;
