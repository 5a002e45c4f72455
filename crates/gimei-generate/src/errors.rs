use thiserror::Error;

/// Errors emitted by the generator.
#[derive(Debug, Error)]
pub enum GenerationError {
    /// A selection was attempted over a table with no entries.
    #[error("cannot choose from an empty {table} table")]
    EmptySelection { table: &'static str },
    #[error("asset error: {0}")]
    Asset(String),
    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),
}
