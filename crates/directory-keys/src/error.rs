//! Error types for directory-keys.
//!
//! Every failure is a typed value returned to the caller. Nothing here is
//! retried internally: all lookups are pure, so the only remedy is a
//! corrected input.

use crate::forgot_password::ForgotPasswordCodeField;
use crate::kind::KeyKind;

/// Error types covering all lookups.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum KeyError {
    #[error("Invalid {kind} lookup key: {raw:?}")]
    InvalidLookupKey { kind: KeyKind, raw: String },

    #[error("Unknown entity category: {0:?}")]
    UnknownCategory(String),

    #[error("No signature attribute for content type: {0}")]
    ContentTypeNotFound(String),

    #[error("No content type for signature attribute: {0}")]
    AttributeNotFound(String),

    #[error("Recovery code is missing field: {0}")]
    MissingCodeField(ForgotPasswordCodeField),

    #[error("Recovery code field {field} has invalid value: {value:?}")]
    InvalidCodeField {
        field: ForgotPasswordCodeField,
        value: String,
    },

    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl KeyError {
    /// True for errors caused by a malformed request value, which a
    /// protocol layer should answer with an "invalid request" response.
    pub fn is_invalid_request(&self) -> bool {
        matches!(
            self,
            Self::InvalidLookupKey { .. } | Self::UnknownCategory(_)
        )
    }
}

/// Convenience Result alias.
pub type Result<T> = std::result::Result<T, KeyError>;
