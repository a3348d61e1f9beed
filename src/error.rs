//! Error types for the algorithm catalog

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised by the registry, the JSON invocation boundary and the exporter.
///
/// Inputs outside of an algorithm's domain are not errors, they are reported
/// through a `null` result and the `error` field of the run metadata.
#[derive(Debug, Error)]
pub enum Error {
    /// A second algorithm was registered under an existing name
    #[error("algorithm '{0}' already registered")]
    DuplicateAlgorithm(String),

    /// The metadata handed to the registry describes another algorithm
    #[error("metadata for '{meta}' registered with algorithm '{algorithm}'")]
    MetadataMismatch { algorithm: String, meta: String },

    #[error("algorithm '{0}' is not registered")]
    UnknownAlgorithm(String),

    #[error("unknown algorithm category '{0}'")]
    UnknownCategory(String),

    /// The parameters could not be decoded into the request type of the algorithm
    #[error("invalid parameters for '{algorithm}': {source}")]
    InvalidParameters {
        algorithm: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("serialization failed: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("i/o error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl Error {
    /// Configuration errors are fatal at startup and must not be swallowed.
    pub fn is_configuration(&self) -> bool {
        matches!(
            self,
            Error::DuplicateAlgorithm(_) | Error::MetadataMismatch { .. }
        )
    }

    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Error::Io {
            path: path.into(),
            source,
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
