//! Error types for catalog loading.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while loading a catalog file.
#[derive(Error, Debug)]
pub enum CatalogError {
    /// The catalog file could not be read from disk.
    #[error("failed to read catalog {}: {}", path.display(), source)]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    /// The file contents were not a valid JSON array of meeting records.
    #[error("failed to parse catalog JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// Convenience alias used throughout horaire-catalog.
pub type Result<T> = std::result::Result<T, CatalogError>;
