//! Error types for drill-core.

use thiserror::Error;

/// Result type alias using CatalogError.
pub type Result<T> = std::result::Result<T, CatalogError>;

/// Errors that can occur while loading the vocabulary catalog.
///
/// These are load-time errors only: once a [`crate::catalog::Catalog`] is
/// constructed, every query on it is total and signals "nothing available"
/// with an empty or `None` result instead of an error.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("invalid catalog JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("duplicate entry id {id}")]
    DuplicateId { id: String },

    #[error("entry {id} has an empty hebrew word")]
    EmptyWord { id: String },
}

/// Failure reported by the injected persistence capability.
///
/// The embedding layer produces these; the score ledger only ever logs
/// them and keeps its in-memory state authoritative.
#[derive(Debug, Error)]
#[error("storage operation failed: {0}")]
pub struct StoreError(pub String);

impl StoreError {
    pub fn new(message: impl Into<String>) -> Self {
        Self(message.into())
    }
}
