//! Error types for the Brandforge engine.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A shared error type for the entire Brandforge workspace.
///
/// This provides typed, structured error variants with automatic conversion
/// from common error types via the `From` trait.
#[derive(Error, Debug, Clone, Serialize, Deserialize)]
pub enum BrandforgeError {
    /// Entity not found error with type information
    #[error("Entity not found: {entity_type} '{id}'")]
    NotFound {
        entity_type: &'static str,
        id: String,
    },

    /// Step index outside the wizard's valid range
    #[error("Step index {index} out of range (0..{len})")]
    OutOfRange { index: usize, len: usize },

    /// Export format not in the supported set
    #[error("Unsupported export format: '{0}'")]
    UnsupportedFormat(String),

    /// Transient provider failure (retryable)
    #[error("Provider error: {0}")]
    Provider(String),

    /// Serialization/deserialization error
    #[error("Serialization error: {format} - {message}")]
    Serialization {
        format: String, // "JSON", etc.
        message: String,
    },

    /// Internal error (should not happen in normal operation)
    #[error("Internal error: {0}")]
    Internal(String),
}

impl BrandforgeError {
    // ============================================================================
    // Constructor helpers
    // ============================================================================

    /// Creates a NotFound error
    pub fn not_found(entity_type: &'static str, id: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type,
            id: id.into(),
        }
    }

    /// Creates an OutOfRange error
    pub fn out_of_range(index: usize, len: usize) -> Self {
        Self::OutOfRange { index, len }
    }

    /// Creates an UnsupportedFormat error
    pub fn unsupported_format(format: impl Into<String>) -> Self {
        Self::UnsupportedFormat(format.into())
    }

    /// Creates a Provider error
    pub fn provider(message: impl Into<String>) -> Self {
        Self::Provider(message.into())
    }

    /// Creates an Internal error
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal(message.into())
    }

    // ============================================================================
    // Type checking methods
    // ============================================================================

    /// Check if this is a NotFound error
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    /// Check if this is an OutOfRange error
    pub fn is_out_of_range(&self) -> bool {
        matches!(self, Self::OutOfRange { .. })
    }

    /// Check if this is an UnsupportedFormat error
    pub fn is_unsupported_format(&self) -> bool {
        matches!(self, Self::UnsupportedFormat(_))
    }

    /// Check if this error is retryable.
    ///
    /// Returns true only for `Provider` errors: transient provider failures
    /// are surfaced to the caller with a retry action, while navigator and
    /// export misuse are contract violations and must not be retried.
    pub fn is_retryable(&self) -> bool {
        matches!(self, Self::Provider(_))
    }
}

// ============================================================================
// From implementations for automatic conversion
// ============================================================================

impl From<serde_json::Error> for BrandforgeError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization {
            format: "JSON".to_string(),
            message: err.to_string(),
        }
    }
}

/// Conversion from String (for error messages)
impl From<String> for BrandforgeError {
    fn from(err: String) -> Self {
        Self::Internal(err)
    }
}

/// A type alias for `Result<T, BrandforgeError>`.
pub type Result<T> = std::result::Result<T, BrandforgeError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_retryable_classification() {
        assert!(BrandforgeError::provider("timeout").is_retryable());
        assert!(!BrandforgeError::out_of_range(9, 8).is_retryable());
        assert!(!BrandforgeError::unsupported_format("xml").is_retryable());
    }

    #[test]
    fn test_display_messages() {
        let err = BrandforgeError::not_found("brand", "42");
        assert_eq!(err.to_string(), "Entity not found: brand '42'");

        let err = BrandforgeError::out_of_range(8, 8);
        assert_eq!(err.to_string(), "Step index 8 out of range (0..8)");
    }
}
