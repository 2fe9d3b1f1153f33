//! Error types for client-side failures.
//!
//! Remote failures are deliberately not modeled here: once a request has been
//! dispatched, the call resolves to an [`Outcome`](crate::Outcome) variant.
//! This enum covers what can go wrong before a request leaves the process.

use thiserror::Error;

/// Errors raised before any network traffic occurs.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum FreedomPayError {
    /// A required configuration or caller field is missing or empty.
    /// No request was sent.
    #[error("invalid {field}: {reason}")]
    Validation {
        /// Field or parameter name.
        field: String,
        /// Reason the field was rejected.
        reason: String,
    },

    /// The HTTP client could not be constructed.
    #[error("internal error: {0}")]
    Internal(String),
}

impl FreedomPayError {
    /// Create a validation error.
    pub fn validation(field: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::Validation {
            field: field.into(),
            reason: reason.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_display_names_the_field() {
        let err = FreedomPayError::validation("result_url", "must not be empty");
        assert_eq!(err.to_string(), "invalid result_url: must not be empty");
    }
}
