//! # Error Types
//!
//! Domain-specific error types for ember-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  ember-core errors (this file)                                         │
//! │  └── ValidationError  - Precondition/input failures (InvalidArgument)  │
//! │                                                                         │
//! │  ember-store errors (separate crate)                                   │
//! │  └── StoreError       - Locking, I/O and serialization failures        │
//! │                                                                         │
//! │  Flow: ValidationError → StoreError → Caller                           │
//! │                                                                         │
//! │  Note: a loyalty accrual below the trust threshold is an OUTCOME,      │
//! │  never an error. See `AccrualOutcome::BelowThreshold`.                 │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Include context in error messages (field, value)
//! 3. Errors are enum variants, never String
//! 4. Validation rejects BEFORE any I/O happens

use thiserror::Error;

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors (the InvalidArgument class).
///
/// These errors occur when caller input doesn't meet a precondition.
/// They are raised before any store I/O and are never retried.
#[derive(Debug, Error)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Field value is too long.
    #[error("{field} must be at most {max} characters")]
    TooLong { field: String, max: usize },

    /// Value must be strictly positive (e.g., a base price).
    #[error("{field} must be positive, got {value}")]
    MustBePositive { field: String, value: String },

    /// Value must be zero or greater (e.g., a checkout amount).
    #[error("{field} must not be negative, got {value}")]
    MustBeNonNegative { field: String, value: String },

    /// Invalid format (e.g., a resource key with path separators).
    #[error("{field} has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with ValidationError.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = ValidationError::Required {
            field: "flavor_combo".to_string(),
        };
        assert_eq!(err.to_string(), "flavor_combo is required");

        let err = ValidationError::MustBePositive {
            field: "base_price".to_string(),
            value: "$0.00".to_string(),
        };
        assert_eq!(err.to_string(), "base_price must be positive, got $0.00");
    }

    #[test]
    fn test_invalid_format_message() {
        let err = ValidationError::InvalidFormat {
            field: "resource_key".to_string(),
            reason: "contains '/'".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "resource_key has invalid format: contains '/'"
        );
    }
}
