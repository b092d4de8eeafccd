//! Error types for the conversion layer.
//!
//! The taxonomy mirrors the severity split documented in [`crate::naming`]:
//! only identity-breaking malformation gets a variant here. Cosmetic
//! failures (bad hash token, unrecognized status text) degrade to safe
//! defaults inside the decoder and classifier and never surface as errors.

/// Result type alias for conversion operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while decoding names and converting listings.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    // =========================================================================
    // Name Format Errors
    // =========================================================================
    /// Encoded name does not carry the managed prefix.
    #[error("container name '{name}' is not managed by this agent")]
    UnmanagedName { name: String },

    /// Encoded name has fewer fields than the grammar requires.
    #[error("container name '{name}' has {fields} fields, expected at least {expected}")]
    TruncatedName {
        name: String,
        fields: usize,
        expected: usize,
    },

    /// Attempt counter field did not parse as a non-negative integer.
    #[error("invalid attempt count '{value}' in container name '{name}'")]
    InvalidAttempt { name: String, value: String },

    /// A required identity field was empty.
    #[error("empty {field} in container name '{name}'")]
    EmptyNameField { name: String, field: &'static str },

    // =========================================================================
    // Composite String Errors
    // =========================================================================
    /// Pod full name was not `<name>_<namespace>`.
    #[error("invalid pod full name: {0}")]
    InvalidPodFullName(String),

    /// Container id string was not `<engine>://<native-id>`.
    #[error("invalid container id: {0}")]
    InvalidContainerId(String),

    // =========================================================================
    // Listing Errors
    // =========================================================================
    /// The engine-query collaborator failed to produce a listing.
    #[error("engine listing failed: {0}")]
    Listing(String),
}
