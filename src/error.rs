//! Error types for Kona

use crate::config::ConfigLoadError;
use crate::io::CsvError;

/// Result type alias
pub type Result<T> = std::result::Result<T, Error>;

/// Kona error types
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Configuration could not be loaded
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigLoadError),

    /// Scan or point file error
    #[error("CSV error: {0}")]
    Csv(#[from] CsvError),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
