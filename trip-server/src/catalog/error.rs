//! Catalog error types.

use std::path::PathBuf;

/// Errors from loading reference data.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    /// The reference data file is missing or unreadable.
    #[error("reference data unavailable at {}: {source}", path.display())]
    DataUnavailable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The reference data file could not be parsed.
    #[error("malformed reference data in {}: {message}", path.display())]
    Malformed { path: PathBuf, message: String },
}
