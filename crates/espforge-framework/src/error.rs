//! Configuration error taxonomy.
//!
//! Everything here is a user-facing configuration error: the message names
//! the offending field so the caller can report a path into the manifest.

/// Errors raised while validating a device or framework configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// An alias version token was combined with an explicit source.
    #[error("framework version needs to be explicitly specified when a custom source is used (field 'version')")]
    AliasSourceConflict,

    /// The version string is not a plain `a.b.c` triple.
    #[error("invalid framework version '{value}': expected three dot-separated integers (field 'version')")]
    InvalidVersion { value: String },

    /// ESP-IDF below the minimum supported release.
    #[error("only ESP-IDF 4.0+ is supported, got {version} (field 'version')")]
    UnsupportedIdfVersion { version: semver::Version },

    /// The board is not in the registry and no variant was given.
    #[error("board '{board}' is unknown, please set the variant manually (field 'board')")]
    UnknownBoard { board: String },

    /// Variant token or gate failure from the targets layer.
    #[error(transparent)]
    Target(#[from] espforge_targets::TargetError),
}

/// Result type for configuration operations.
pub type Result<T> = std::result::Result<T, ConfigError>;
