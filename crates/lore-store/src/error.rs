//! Error types for document lookups
//!
//! A lookup either yields a record or fails; there is no partial result.

use lore_model::Collection;
use std::path::PathBuf;

/// Errors from a single document lookup
#[derive(Debug, thiserror::Error)]
pub enum LookupError {
    /// No record with this id in the collection
    #[error("{collection}/{id} not found")]
    NotFound { collection: Collection, id: String },

    /// Backend unreachable or failed
    #[error("transport error: {0}")]
    Transport(String),

    /// Record exists but does not decode as the expected entity
    #[error("malformed record {collection}/{id}: {source}")]
    Malformed {
        collection: Collection,
        id: String,
        #[source]
        source: serde_json::Error,
    },
}

impl LookupError {
    /// Create not-found error
    #[inline]
    pub fn not_found(collection: Collection, id: impl Into<String>) -> Self {
        Self::NotFound {
            collection,
            id: id.into(),
        }
    }

    /// Create transport error
    #[inline]
    pub fn transport(message: impl Into<String>) -> Self {
        Self::Transport(message.into())
    }

    /// Check if the record was absent
    #[inline]
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}

/// Errors loading a JSON seed file
#[derive(Debug, thiserror::Error)]
pub enum SeedError {
    /// IO error during file read
    #[error("io error reading {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// File is not a valid seed document
    #[error("invalid seed data: {0}")]
    Parse(#[from] serde_json::Error),
}
