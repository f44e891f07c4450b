//! # Surge Pricing Engine
//!
//! Computes the weekend price override per flavor and records the decision -
//! one store transaction on the `surge-pricing` resource.
//!
//! ## Decision Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Surge Application                                  │
//! │                                                                         │
//! │  scheduled rotation / checkout (external trigger)                      │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  apply("Mint", $10.00, as_of)                                          │
//! │       │                                                                 │
//! │       ├── validate base_price > 0 (rejected → nothing written)         │
//! │       │                                                                 │
//! │       ├── weekend = as_of is UTC Sat/Sun (pure, caller supplies as_of) │
//! │       ├── surge_price = base + $3.00 iff weekend                       │
//! │       │                                                                 │
//! │       └── ONE transaction on "surge-pricing":                          │
//! │            1. overwrite price table entry (full map re-serialized)     │
//! │            2. append SurgeDecisionEvent                                │
//! │            3. commit (both or neither)                                 │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  PriceDecision { surge_price, weekend }                                │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The caller supplies `as_of` rather than the engine reading the clock, so
//! the decision is pure in (timestamp, base_price) and scheduled rotations
//! can price for the instant they fire for, not the instant they run.

use chrono::{DateTime, Utc};
use tracing::debug;

use ember_core::surge::{is_weekend, surge_price};
use ember_core::validation::{validate_base_price, validate_flavor_combo};
use ember_core::{Money, PriceDecision, PriceTable, SurgeDecisionEvent};

use crate::error::StoreResult;
use crate::keys::SURGE_PRICING;
use crate::store::Store;

/// Engine that applies the weekend surge rule and records each decision.
#[derive(Debug, Clone)]
pub struct SurgeEngine {
    store: Store,
}

impl SurgeEngine {
    /// Creates a new surge engine over the shared store.
    pub fn new(store: Store) -> Self {
        SurgeEngine { store }
    }

    /// Applies surge pricing for one flavor as of a given instant.
    ///
    /// ## Arguments
    /// * `flavor` - flavor the price applies to (non-empty)
    /// * `base_price` - price before uplift (must be > 0)
    /// * `as_of` - instant the decision is computed for (UTC weekend rule)
    ///
    /// ## Returns
    /// The decision now current in the pricing table.
    pub async fn apply(
        &self,
        flavor: &str,
        base_price: Money,
        as_of: DateTime<Utc>,
    ) -> StoreResult<PriceDecision> {
        validate_flavor_combo(flavor)?;
        validate_base_price(base_price)?;
        let flavor = flavor.trim();

        let weekend = is_weekend(as_of);
        let price = surge_price(base_price, weekend);

        debug!(flavor, %base_price, %price, weekend, "Applying surge decision");

        let mut txn = self.store.begin(SURGE_PRICING).await?;
        let mut table: PriceTable = txn.snapshot()?.unwrap_or_default();
        table.set_price(flavor, price);
        txn.set_snapshot(&table)?;
        txn.append(&SurgeDecisionEvent {
            flavor: flavor.to_string(),
            base_price,
            surge_price: price,
            weekend,
            timestamp: as_of,
        })?;
        txn.commit().await?;

        Ok(PriceDecision {
            surge_price: price,
            weekend,
        })
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
