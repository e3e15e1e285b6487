//! Error types for the CineDB catalog.
//!
//! The taxonomy is deliberately small. Only two conditions are hard errors:
//! persistence I/O failure (the mutation's effect is not durable) and a
//! malformed backing document under the strict load policy. Expected
//! conditions such as "record not found" are represented as outcome variants
//! in the mutation pipeline, never as errors.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias used throughout the workspace.
pub type Result<T> = std::result::Result<T, CatalogError>;

/// Catalog error type.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// I/O failure reading or writing the backing document.
    ///
    /// On the write path this is the only failure a mutation can surface:
    /// the in-memory change was applied but is not durable.
    #[error("catalog I/O failure at {path}: {source}")]
    Io {
        /// Path of the backing document involved.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The backing document could not be parsed or encoded.
    ///
    /// Only raised at load time under the strict load policy, or if the
    /// collection cannot be encoded on save; the default fail-open policy
    /// substitutes an empty collection at load instead.
    #[error("catalog document is malformed: {0}")]
    Malformed(#[from] serde_json::Error),
}

impl CatalogError {
    /// Build an I/O error tagged with the document path.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        CatalogError::Io {
            path: path.into(),
            source,
        }
    }
}
