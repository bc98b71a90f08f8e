//! Error types for schema loading.

use thiserror::Error;

/// Errors that can occur while reading and parsing a schema document.
#[derive(Error, Debug)]
pub enum LoadError {
    /// The schema file could not be read.
    #[error("failed to read '{path}': {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// The document is not valid YAML or does not match the schema shape.
    #[error("failed to parse schema document: {0}")]
    Parse(#[from] serde_yaml::Error),
}

impl LoadError {
    /// Create an Io error carrying the offending path.
    pub fn io(path: &str, source: std::io::Error) -> Self {
        LoadError::Io {
            path: path.to_string(),
            source,
        }
    }
}

/// Result type for loader operations.
pub type LoadResult<T> = Result<T, LoadError>;
