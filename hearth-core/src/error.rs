use thiserror::Error;

#[derive(Debug, Error)]
pub enum HearthError {
    #[error("I/O error for file '{0}': {1}")]
    FileIO(String, #[source] std::io::Error),

    #[error("Failed to process CSV file '{0}': {1}")]
    CsvError(String, #[source] csv::Error),

    #[error("Survey dataset '{0}' contains no household rows")]
    EmptyDataset(String),

    #[error("Row {row}: could not decode survey answers: {source}")]
    MalformedRow {
        row: usize,
        #[source]
        source: csv::Error,
    },

    #[error("Row {row}: {found} answers for {expected} survey columns")]
    TooManyFields {
        row: usize,
        expected: usize,
        found: usize,
    },

    #[error("Estimate for '{category}' is not a finite number ({value})")]
    NonFiniteEstimate { category: String, value: f64 },

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("An error occurred during logging: {0}")]
    LoggingError(#[from] anyhow::Error),
}
