//! # Surge Pricing Rules
//!
//! Pure weekend detection and price uplift, separated from the engine that
//! persists pricing decisions.
//!
//! ## The Rule
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  weekend(as_of)  =  as_of.weekday ∈ {Saturday, Sunday}  (UTC)          │
//! │                                                                         │
//! │  surge_price     =  base_price + $3.00   if weekend                    │
//! │                  =  base_price           otherwise                     │
//! │                                                                         │
//! │  Pure in (as_of, base_price): same inputs, same decision, any zone     │
//! │  the process happens to run in.                                        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Why UTC?
//! The weekend boundary is fixed to UTC for determinism and testability.
//! Venue-local boundaries would make the same call site produce different
//! prices depending on deployment zone; if product ever wants venue-local
//! weekends, that becomes an explicit input, not ambient process state.

use chrono::{DateTime, Datelike, Utc, Weekday};

use crate::money::Money;
use crate::WEEKEND_UPLIFT;

/// Checks whether an instant falls on a UTC Saturday or Sunday.
///
/// ## Example
/// ```rust
/// use chrono::{TimeZone, Utc};
/// use ember_core::surge::is_weekend;
///
/// // 2026-08-29 is a Saturday
/// let sat = Utc.with_ymd_and_hms(2026, 8, 29, 12, 0, 0).unwrap();
/// assert!(is_weekend(sat));
///
/// // 2026-08-25 is a Tuesday
/// let tue = Utc.with_ymd_and_hms(2026, 8, 25, 12, 0, 0).unwrap();
/// assert!(!is_weekend(tue));
/// ```
#[inline]
pub fn is_weekend(as_of: DateTime<Utc>) -> bool {
    matches!(as_of.weekday(), Weekday::Sat | Weekday::Sun)
}

/// Applies the weekend uplift to a base price.
pub fn surge_price(base_price: Money, weekend: bool) -> Money {
    if weekend {
        base_price + WEEKEND_UPLIFT
    } else {
        base_price
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn at(y: i32, m: u32, d: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(y, m, d, 12, 0, 0).unwrap()
    }

    #[test]
    fn test_saturday_and_sunday_are_weekend() {
        assert!(is_weekend(at(2026, 8, 29))); // Saturday
        assert!(is_weekend(at(2026, 8, 30))); // Sunday
    }

    #[test]
    fn test_weekdays_are_not_weekend() {
        assert!(!is_weekend(at(2026, 8, 24))); // Monday
        assert!(!is_weekend(at(2026, 8, 25))); // Tuesday
        assert!(!is_weekend(at(2026, 8, 28))); // Friday
    }

    #[test]
    fn test_boundary_is_utc_not_local() {
        // Friday 23:59:59 UTC is still a weekday, whatever the venue zone
        let late_friday = Utc.with_ymd_and_hms(2026, 8, 28, 23, 59, 59).unwrap();
        assert!(!is_weekend(late_friday));

        // Saturday 00:00:00 UTC flips the rule
        let early_saturday = Utc.with_ymd_and_hms(2026, 8, 29, 0, 0, 0).unwrap();
        assert!(is_weekend(early_saturday));
    }

    #[test]
    fn test_uplift_applied_only_on_weekend() {
        let base = Money::from_cents(1000);
        assert_eq!(surge_price(base, true), Money::from_cents(1300));
        assert_eq!(surge_price(base, false), base);
    }
}
