use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing required field: {field}")]
    MissingField { field: &'static str },
    #[error("invalid value for {field}: {reason}")]
    InvalidValue { field: &'static str, reason: String },
}

#[derive(Debug, Error)]
pub enum DirectoryError {
    #[error("failed to open college directory {path}: {source}")]
    Open {
        path: String,
        source: std::io::Error,
    },
    #[error("failed to read college directory: {0}")]
    Read(#[from] csv::Error),
    #[error("college directory row {row} is missing the full name column")]
    MissingName { row: usize },
}
