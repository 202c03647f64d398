//! Error types for the catalog store

use thiserror::Error;

/// Errors raised by a key-value backend
#[derive(Debug, Error)]
pub enum StorageError {
    /// Reading or writing the backing file failed
    #[error("I/O error on {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// The key cannot be mapped onto the backend
    #[error("Invalid storage key: {0:?}")]
    InvalidKey(String),
}

impl StorageError {
    pub fn io(path: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

/// Errors raised by catalog mutations
#[derive(Debug, Error)]
pub enum StoreError {
    /// The record list could not be written through; nothing was changed
    #[error("Failed to persist catalog: {0}")]
    Persistence(#[from] StorageError),

    /// The id generator kept returning identifiers already in use
    #[error("No free service identifier after {attempts} attempts")]
    IdsExhausted { attempts: usize },

    /// The record list could not be serialized
    #[error("Failed to serialize catalog: {0}")]
    Serialization(#[from] serde_json::Error),
}
