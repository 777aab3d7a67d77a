//! Error types for ClaimLens
//!
//! This module defines custom error types using `thiserror` for better error handling
//! and more descriptive error messages throughout the library.
//!
//! All failures in the remediation pipeline are local and recoverable: verification
//! strategies catch [`DataSourceError`] internally and degrade to an unverified
//! result, and the processor counts per-issue faults without aborting the batch.

use thiserror::Error;

/// Main error type for ClaimLens
#[derive(Error, Debug)]
pub enum ClaimLensError {
    /// Data-source related errors
    #[error("Data source error: {0}")]
    DataSource(#[from] DataSourceError),
}

/// Errors that occur while loading a JSON data source
#[derive(Error, Debug)]
pub enum DataSourceError {
    /// Failed to read the backing file
    #[error("Failed to read data source '{path}': {source}")]
    Read {
        /// Path to the file that failed to read
        path: String,
        /// The underlying I/O error
        source: std::io::Error,
    },

    /// Failed to parse the file as JSON
    #[error("Failed to parse data source '{path}': {source}")]
    Parse {
        /// Path to the file that failed to parse
        path: String,
        /// The underlying JSON error
        source: serde_json::Error,
    },
}
