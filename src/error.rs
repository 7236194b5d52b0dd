//! Error types shared by the finance math and CSV readers

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum FinanceError {
    /// A parameter outside the domain of a formula (e.g. non-positive compounding)
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Cannot read '{}'", .path.display())]
    FileAccess {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Missing columns or values that do not convert to numbers
    #[error("Malformed CSV '{path}': {reason}")]
    Format { path: String, reason: String },

    #[error("Insufficient data: need at least {needed} rows, found {found}")]
    InsufficientData { needed: usize, found: usize },
}

pub type Result<T> = std::result::Result<T, FinanceError>;
