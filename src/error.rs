//! Error types shared by the loader, the callback table and the HTTP layer.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum DashboardError {
    #[error("failed to open launch data at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed launch data: {0}")]
    Csv(#[from] csv::Error),

    #[error("invalid launch record on line {line}: {reason}")]
    InvalidRecord { line: u64, reason: String },

    #[error("invalid configuration: {0}")]
    Config(String),

    #[error("invalid input: {0}")]
    InvalidInput(String),

    #[error("no callback bound to output {0}")]
    UnknownOutput(String),
}

pub type Result<T, E = DashboardError> = std::result::Result<T, E>;
