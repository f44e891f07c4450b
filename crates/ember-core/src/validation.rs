//! # Validation Module
//!
//! Input validation utilities for Ember Ledger.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: Caller (checkout webhook, scheduler)                         │
//! │  ├── Basic format checks before invoking an engine                     │
//! │  └── Immediate feedback to the triggering system                       │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: THIS MODULE - precondition validation                        │
//! │  ├── Runs inside every engine BEFORE any store I/O                     │
//! │  └── A rejected call leaves durable state untouched                    │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 3: Store - key validation, serialization checks                 │
//! │                                                                         │
//! │  Defense in depth: multiple layers catch different errors              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use ember_core::money::Money;
//! use ember_core::validation::{validate_base_price, validate_flavor_combo};
//!
//! validate_flavor_combo("Peach + Mint").unwrap();
//! validate_base_price(Money::from_cents(1000)).unwrap();
//! ```

use crate::error::{ValidationError, ValidationResult};
use crate::money::Money;
use crate::{MAX_FLAVOR_COMBO_LEN, MAX_RESOURCE_KEY_LEN, MAX_USER_ID_LEN};

// =============================================================================
// String Validators
// =============================================================================

/// Validates a flavor combination label.
///
/// ## Rules
/// - Must not be empty or all whitespace
/// - Must be at most 80 characters
pub fn validate_flavor_combo(combo: &str) -> ValidationResult<()> {
    let combo = combo.trim();

    if combo.is_empty() {
        return Err(ValidationError::Required {
            field: "flavor_combo".to_string(),
        });
    }

    if combo.len() > MAX_FLAVOR_COMBO_LEN {
        return Err(ValidationError::TooLong {
            field: "flavor_combo".to_string(),
            max: MAX_FLAVOR_COMBO_LEN,
        });
    }

    Ok(())
}

/// Validates a user identifier.
pub fn validate_user_id(user_id: &str) -> ValidationResult<()> {
    let user_id = user_id.trim();

    if user_id.is_empty() {
        return Err(ValidationError::Required {
            field: "user_id".to_string(),
        });
    }

    if user_id.len() > MAX_USER_ID_LEN {
        return Err(ValidationError::TooLong {
            field: "user_id".to_string(),
            max: MAX_USER_ID_LEN,
        });
    }

    Ok(())
}

/// Validates a resource key.
///
/// ## Rules
/// Keys name files on disk, so they must be non-empty, at most 64
/// characters, and restricted to `[A-Za-z0-9._-]` - no path separators.
pub fn validate_resource_key(key: &str) -> ValidationResult<()> {
    if key.is_empty() {
        return Err(ValidationError::Required {
            field: "resource_key".to_string(),
        });
    }

    if key.len() > MAX_RESOURCE_KEY_LEN {
        return Err(ValidationError::TooLong {
            field: "resource_key".to_string(),
            max: MAX_RESOURCE_KEY_LEN,
        });
    }

    if let Some(bad) = key
        .chars()
        .find(|c| !(c.is_ascii_alphanumeric() || matches!(c, '.' | '_' | '-')))
    {
        return Err(ValidationError::InvalidFormat {
            field: "resource_key".to_string(),
            reason: format!("contains {bad:?}"),
        });
    }

    Ok(())
}

// =============================================================================
// Money Validators
// =============================================================================

/// Validates a checkout amount (zero is allowed; negatives are not).
pub fn validate_amount(amount: Money) -> ValidationResult<()> {
    if amount.is_negative() {
        return Err(ValidationError::MustBeNonNegative {
            field: "amount".to_string(),
            value: amount.to_string(),
        });
    }
    Ok(())
}

/// Validates a base price (must be strictly positive).
pub fn validate_base_price(price: Money) -> ValidationResult<()> {
    if !price.is_positive() {
        return Err(ValidationError::MustBePositive {
            field: "base_price".to_string(),
            value: price.to_string(),
        });
    }
    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flavor_combo_rules() {
        assert!(validate_flavor_combo("Peach + Mint").is_ok());
        assert!(validate_flavor_combo("").is_err());
        assert!(validate_flavor_combo("   ").is_err());
        assert!(validate_flavor_combo(&"x".repeat(81)).is_err());
    }

    #[test]
    fn test_user_id_rules() {
        assert!(validate_user_id("u-1042").is_ok());
        assert!(validate_user_id("").is_err());
        assert!(validate_user_id(&"u".repeat(65)).is_err());
    }

    #[test]
    fn test_resource_key_rules() {
        assert!(validate_resource_key("flavor-log").is_ok());
        assert!(validate_resource_key("loyalty_vault.v2").is_ok());
        assert!(validate_resource_key("").is_err());
        assert!(validate_resource_key("../etc/passwd").is_err());
        assert!(validate_resource_key("a/b").is_err());
        assert!(validate_resource_key(&"k".repeat(65)).is_err());
    }

    #[test]
    fn test_amount_rules() {
        assert!(validate_amount(Money::zero()).is_ok());
        assert!(validate_amount(Money::from_cents(2000)).is_ok());
        assert!(validate_amount(Money::from_cents(-1)).is_err());
    }

    #[test]
    fn test_base_price_rules() {
        assert!(validate_base_price(Money::from_cents(1000)).is_ok());
        assert!(validate_base_price(Money::zero()).is_err());
        assert!(validate_base_price(Money::from_cents(-100)).is_err());
    }
}
