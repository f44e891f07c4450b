//! # Money Module
//!
//! Provides the `Money` type for handling monetary values safely.
//!
//! ## Why Integer Money?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  THE FLOATING POINT PROBLEM                                             │
//! │                                                                         │
//! │  The legacy ledger stored floats:                                       │
//! │    0.1 + 0.2 = 0.30000000000000004  ❌ WRONG!                           │
//! │                                                                         │
//! │  A loyalty ledger folds thousands of gains on every balance read.       │
//! │  Float drift compounds with every fold.                                 │
//! │                                                                         │
//! │  OUR SOLUTION: Integer Cents                                            │
//! │    10% of $20.00 = 2000 cents / 10 = 200 cents, exactly                │
//! │    Rounding happens ONCE, explicitly, at accrual time                  │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use ember_core::money::Money;
//!
//! // Create from cents (preferred)
//! let amount = Money::from_cents(2000); // $20.00
//!
//! // 10% loyalty rate, rounded to the cent (half up)
//! let gain = amount.apply_rate_bps(1000);
//! assert_eq!(gain.cents(), 200);
//!
//! // NEVER construct from floats - no such method exists
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, AddAssign, Sub, SubAssign};

// =============================================================================
// Money Type
// =============================================================================

/// Represents a monetary value in the smallest currency unit (cents for USD).
///
/// ## Design Decisions
/// - **i64 (signed)**: Allows negative values for corrections/refunds
/// - **Single field tuple struct**: Zero-cost abstraction over i64
/// - **Derives**: Full serde support; serializes as a bare integer, so the
///   durable JSON stays a plain numeric price as documented consumers expect
///
/// ## Where Money Flows
/// ```text
/// ┌─────────────────────────────────────────────────────────────────────────┐
/// │  checkout amount ──► LoyaltyTransaction.amount ──► loyalty_gain         │
/// │                                                                         │
/// │  base_price ──► weekend uplift ──► SurgePriceEntry / SurgeDecisionEvent │
/// │                                                                         │
/// │  EVERY monetary value in the ledger flows through this type            │
/// └─────────────────────────────────────────────────────────────────────────┘
/// ```
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
pub struct Money(i64);

impl Money {
    /// Creates a Money value from cents (the smallest currency unit).
    ///
    /// ## Example
    /// ```rust
    /// use ember_core::money::Money;
    ///
    /// let amount = Money::from_cents(2050); // Represents $20.50
    /// assert_eq!(amount.cents(), 2050);
    /// ```
    #[inline]
    pub const fn from_cents(cents: i64) -> Self {
        Money(cents)
    }

    /// Creates a Money value from major and minor units (dollars and cents).
    ///
    /// ## Example
    /// ```rust
    /// use ember_core::money::Money;
    ///
    /// let price = Money::from_major_minor(12, 99); // $12.99
    /// assert_eq!(price.cents(), 1299);
    /// ```
    #[inline]
    pub const fn from_major_minor(major: i64, minor: i64) -> Self {
        if major < 0 {
            Money(major * 100 - minor)
        } else {
            Money(major * 100 + minor)
        }
    }

    /// Returns the value in cents (smallest currency unit).
    #[inline]
    pub const fn cents(&self) -> i64 {
        self.0
    }

    /// Returns the major unit (dollars) portion.
    #[inline]
    pub const fn dollars(&self) -> i64 {
        self.0 / 100
    }

    /// Returns the minor unit (cents) portion (always 0-99).
    #[inline]
    pub const fn cents_part(&self) -> i64 {
        (self.0 % 100).abs()
    }

    /// Returns zero money value.
    #[inline]
    pub const fn zero() -> Self {
        Money(0)
    }

    /// Checks if the value is zero.
    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Checks if the value is positive (greater than zero).
    #[inline]
    pub const fn is_positive(&self) -> bool {
        self.0 > 0
    }

    /// Checks if the value is negative (less than zero).
    #[inline]
    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }

    /// Applies a basis-point rate and rounds half up to the nearest cent.
    ///
    /// ## Basis Points
    /// 1 basis point = 0.01% = 1/10000. The loyalty rate of 10% is 1000 bps.
    ///
    /// ## Rounding
    /// The legacy ledger used `round(amount * 0.1, 2)`; we reproduce that as
    /// integer math with half-up rounding: `(cents * bps + 5000) / 10000`.
    ///
    /// ## Example
    /// ```rust
    /// use ember_core::money::Money;
    ///
    /// let amount = Money::from_cents(2000); // $20.00
    /// let gain = amount.apply_rate_bps(1000); // 10%
    /// assert_eq!(gain.cents(), 200); // $2.00 exactly
    ///
    /// let odd = Money::from_cents(1234); // $12.34
    /// assert_eq!(odd.apply_rate_bps(1000).cents(), 123); // $1.234 → $1.23
    /// ```
    pub fn apply_rate_bps(&self, bps: u32) -> Money {
        // i128 prevents overflow on large amounts
        let cents = (self.0 as i128 * bps as i128 + 5000) / 10000;
        Money::from_cents(cents as i64)
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Display implementation shows money in a human-readable format.
///
/// ## Note
/// This is for confirmations and logs. Receipt renderers do their own
/// localized formatting downstream.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        write!(
            f,
            "{}${}.{:02}",
            sign,
            self.dollars().abs(),
            self.cents_part()
        )
    }
}

/// Addition of two Money values.
impl Add for Money {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        Money(self.0 + other.0)
    }
}

/// Addition assignment (+=), used when folding the loyalty ledger.
impl AddAssign for Money {
    #[inline]
    fn add_assign(&mut self, other: Self) {
        self.0 += other.0;
    }
}

/// Subtraction of two Money values.
impl Sub for Money {
    type Output = Self;

    #[inline]
    fn sub(self, other: Self) -> Self {
        Money(self.0 - other.0)
    }
}

/// Subtraction assignment (-=).
impl SubAssign for Money {
    #[inline]
    fn sub_assign(&mut self, other: Self) {
        self.0 -= other.0;
    }
}

/// Summing an iterator of Money values (ledger folds).
impl std::iter::Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Self {
        iter.fold(Money::zero(), |acc, m| acc + m)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_cents() {
        let money = Money::from_cents(2050);
        assert_eq!(money.cents(), 2050);
        assert_eq!(money.dollars(), 20);
        assert_eq!(money.cents_part(), 50);
    }

    #[test]
    fn test_from_major_minor() {
        let money = Money::from_major_minor(12, 99);
        assert_eq!(money.cents(), 1299);

        let negative = Money::from_major_minor(-5, 50);
        assert_eq!(negative.cents(), -550);
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", Money::from_cents(1299)), "$12.99");
        assert_eq!(format!("{}", Money::from_cents(300)), "$3.00");
        assert_eq!(format!("{}", Money::from_cents(-550)), "-$5.50");
        assert_eq!(format!("{}", Money::from_cents(0)), "$0.00");
    }

    #[test]
    fn test_arithmetic() {
        let a = Money::from_cents(1000);
        let b = Money::from_cents(300);

        assert_eq!((a + b).cents(), 1300);
        assert_eq!((a - b).cents(), 700);
    }

    #[test]
    fn test_rate_exact() {
        // 10% of $20.00 is exactly $2.00
        let amount = Money::from_cents(2000);
        assert_eq!(amount.apply_rate_bps(1000).cents(), 200);
    }

    #[test]
    fn test_rate_rounds_half_up() {
        // 10% of $0.25 = 2.5 cents → 3 cents
        assert_eq!(Money::from_cents(25).apply_rate_bps(1000).cents(), 3);
        // 10% of $0.24 = 2.4 cents → 2 cents
        assert_eq!(Money::from_cents(24).apply_rate_bps(1000).cents(), 2);
    }

    #[test]
    fn test_sum_fold() {
        let gains = [
            Money::from_cents(200),
            Money::from_cents(250),
            Money::from_cents(50),
        ];
        let total: Money = gains.into_iter().sum();
        assert_eq!(total.cents(), 500);
    }

    #[test]
    fn test_zero_and_checks() {
        let zero = Money::zero();
        assert!(zero.is_zero());
        assert!(!zero.is_positive());
        assert!(!zero.is_negative());

        let positive = Money::from_cents(100);
        assert!(positive.is_positive());

        let negative = Money::from_cents(-100);
        assert!(negative.is_negative());
    }
}
