//! Error types for target lookups and variant gating.

/// Errors that can occur during target variant operations.
#[derive(Debug, thiserror::Error)]
pub enum TargetError {
    /// The variant token is not one of the known die variants.
    #[error("unknown variant '{value}', expected one of {expected}")]
    UnknownVariant { value: String, expected: String },

    /// A feature was requested on a variant outside its supported set.
    #[error("this feature is only available on {supported}")]
    OnlySupportedOn { supported: String },

    /// A feature was requested on a variant it is explicitly unavailable on.
    #[error("this feature is not available on {unsupported}")]
    NotAvailableOn { unsupported: String },
}

/// Result type for target operations.
pub type Result<T> = std::result::Result<T, TargetError>;
