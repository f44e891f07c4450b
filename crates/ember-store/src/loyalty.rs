//! # Loyalty Accrual Engine
//!
//! Computes and appends loyalty-gain transactions, gated by the trust
//! threshold - one store transaction on the `loyalty-vault` resource.
//!
//! ## Accrual Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                       Loyalty Accrual                                   │
//! │                                                                         │
//! │  payment event (external trigger)                                      │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  accrue("u1", $20.00, trust_arc=7.0, surge_active=false)               │
//! │       │                                                                 │
//! │       ├── validate user_id, amount >= 0 (rejected → nothing written)   │
//! │       │                                                                 │
//! │       ├── trust_arc < 6.0 ──► Outcome::BelowThreshold                  │
//! │       │                       (NO transaction, NO error)               │
//! │       │                                                                 │
//! │       └── else: gain = round(amount × 10%) [+ $0.50 surge bonus]       │
//! │            append LoyaltyTransaction, commit                           │
//! │            ──► Outcome::Accrued { gain, milestone_reached: gain≥$1 }   │
//! │                                                                         │
//! │  NO BALANCE IS STORED. Readers fold the ledger (Reader::loyalty_       │
//! │  balance); append-only writes have no concurrent-counter races.        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use tracing::{debug, info};

use ember_core::loyalty::{is_milestone, loyalty_gain};
use ember_core::validation::{validate_amount, validate_user_id};
use ember_core::{AccrualOutcome, LoyaltyTransaction, Money, TrustArc};

use crate::error::StoreResult;
use crate::keys::LOYALTY_VAULT;
use crate::store::Store;

/// Engine that accrues loyalty gains into the append-only ledger.
#[derive(Debug, Clone)]
pub struct LoyaltyEngine {
    store: Store,
}

impl LoyaltyEngine {
    /// Creates a new accrual engine over the shared store.
    pub fn new(store: Store) -> Self {
        LoyaltyEngine { store }
    }

    /// Accrues a loyalty gain for a checkout, if the trust gate allows it.
    ///
    /// ## Arguments
    /// * `user_id` - user the gain attaches to (non-empty)
    /// * `amount` - checkout amount (>= 0)
    /// * `trust_arc` - reputation score; below 6.0 nothing is written
    /// * `surge_active` - adds the flat $0.50 bonus when true
    ///
    /// ## Returns
    /// `BelowThreshold` when gated (a normal outcome, not an error), or
    /// `Accrued` with the appended gain and the milestone flag. Milestone
    /// notification is an external collaborator's job; this engine performs
    /// no notification I/O.
    pub async fn accrue(
        &self,
        user_id: &str,
        amount: Money,
        trust_arc: TrustArc,
        surge_active: bool,
    ) -> StoreResult<AccrualOutcome> {
        validate_user_id(user_id)?;
        validate_amount(amount)?;
        let user_id = user_id.trim();

        if !trust_arc.meets_threshold() {
            debug!(user_id, %trust_arc, "Trust arc below threshold; no loyalty delta applied");
            return Ok(AccrualOutcome::BelowThreshold);
        }

        let gain = loyalty_gain(amount, surge_active);
        let milestone_reached = is_milestone(gain);

        let mut txn = self.store.begin(LOYALTY_VAULT).await?;
        txn.append(&LoyaltyTransaction {
            user_id: user_id.to_string(),
            amount,
            trust_arc,
            loyalty_gain: gain,
        })?;
        txn.commit().await?;

        if milestone_reached {
            info!(user_id, gain = %gain, "Loyalty milestone reached");
        } else {
            debug!(user_id, gain = %gain, "Loyalty gain accrued");
        }

        Ok(AccrualOutcome::Accrued {
            loyalty_gain: gain,
            milestone_reached,
        })
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
