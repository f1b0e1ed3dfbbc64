//! Error types for the data-loader crate.
//!
//! Only the source file itself can fail a load. Bad cells never surface
//! here: they degrade to an empty or null field during coercion.

use thiserror::Error;

/// Errors that can occur while loading the movie catalog
#[derive(Error, Debug)]
pub enum DataLoadError {
    /// The source file does not exist at the configured path
    #[error("Movie dataset not found: {path}")]
    FileNotFound { path: String },

    /// I/O error occurred while opening or reading the source
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    /// The CSV reader could not decode the header or a record
    #[error("CSV error in {source_name}: {reason}")]
    CsvError { source_name: String, reason: String },
}

/// Convenience type alias for Results in this crate
pub type Result<T> = std::result::Result<T, DataLoadError>;
