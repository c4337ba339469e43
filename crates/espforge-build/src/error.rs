//! Error types for build-context and emission operations.

use std::path::PathBuf;

/// Errors that can occur while populating a build context or emitting
/// artifacts.
#[derive(Debug, thiserror::Error)]
pub enum BuildError {
    /// An sdkconfig option was set while the active framework has no
    /// sdkconfig concept (pure Arduino).
    #[error("not an esp-idf project: sdkconfig options require the esp-idf or arduino-idf framework")]
    NotAnEspIdfProject,

    /// Filesystem failure while emitting an artifact.
    #[error("I/O error at {path}: {detail}")]
    Io { path: PathBuf, detail: String },
}

/// Result type for build operations.
pub type Result<T> = std::result::Result<T, BuildError>;
