//! # Loyalty Accrual Rules
//!
//! Pure accrual math, separated from the engine that persists transactions.
//!
//! ## The Formula
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  loyalty_gain = round(amount × 10%, cent) + $0.50 surge bonus          │
//! │                                                                         │
//! │  amount $20.00, no surge   →  gain $2.00                               │
//! │  amount $20.00, surge      →  gain $2.50                               │
//! │                                                                         │
//! │  Gate:      trust_arc >= 6.0, else no transaction at all               │
//! │  Milestone: gain >= $1.00 flags the outcome for external notification  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Everything here is deterministic and I/O-free so the accrual engine in
//! ember-store stays a thin persistence wrapper around these functions.

use crate::money::Money;
use crate::{LOYALTY_MILESTONE, LOYALTY_RATE_BPS, LOYALTY_SURGE_BONUS};

/// Computes the loyalty gain for a checkout amount.
///
/// ## Example
/// ```rust
/// use ember_core::loyalty::loyalty_gain;
/// use ember_core::money::Money;
///
/// let amount = Money::from_cents(2000); // $20.00
/// assert_eq!(loyalty_gain(amount, false).cents(), 200); // $2.00
/// assert_eq!(loyalty_gain(amount, true).cents(), 250);  // $2.50
/// ```
pub fn loyalty_gain(amount: Money, surge_active: bool) -> Money {
    let base = amount.apply_rate_bps(LOYALTY_RATE_BPS);
    if surge_active {
        base + LOYALTY_SURGE_BONUS
    } else {
        base
    }
}

/// Checks whether a gain crosses the milestone threshold ($1.00).
///
/// Milestones are surfaced on the outcome; notification is an external
/// collaborator's job.
#[inline]
pub fn is_milestone(gain: Money) -> bool {
    gain >= LOYALTY_MILESTONE
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gain_without_surge() {
        let gain = loyalty_gain(Money::from_cents(2000), false);
        assert_eq!(gain, Money::from_cents(200));
    }

    #[test]
    fn test_gain_with_surge_bonus() {
        let gain = loyalty_gain(Money::from_cents(2000), true);
        assert_eq!(gain, Money::from_cents(250));
    }

    #[test]
    fn test_gain_rounds_to_the_cent() {
        // $12.34 × 10% = $1.234 → $1.23
        let gain = loyalty_gain(Money::from_cents(1234), false);
        assert_eq!(gain, Money::from_cents(123));
    }

    #[test]
    fn test_zero_amount_with_surge_still_earns_bonus() {
        // The surge bonus is flat, not proportional
        let gain = loyalty_gain(Money::zero(), true);
        assert_eq!(gain, Money::from_cents(50));
    }

    #[test]
    fn test_milestone_boundary() {
        assert!(is_milestone(Money::from_cents(100)));
        assert!(is_milestone(Money::from_cents(250)));
        assert!(!is_milestone(Money::from_cents(99)));
    }
}
