//! # Read Façade
//!
//! Typed, read-only access to current snapshots and historical logs for
//! external collaborators (QR/receipt rendering, whisper-notification
//! triggers) without exposing write mechanics.
//!
//! ## Read Model
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Read Façade                                      │
//! │                                                                         │
//! │  checkout_metadata()      ──► current CheckoutMetadataSnapshot          │
//! │  flavor_history(cursor)   ──► FlavorUsageEvents after cursor            │
//! │  loyalty_ledger(cursor)   ──► LoyaltyTransactions after cursor          │
//! │  loyalty_balance(user)    ──► fold of the user's gains (never stored)  │
//! │  price_table()            ──► current flavor → price map                │
//! │  surge_history(cursor)    ──► SurgeDecisionEvents after cursor          │
//! │                                                                         │
//! │  Cursors are opaque resume points: hold the last entry's cursor and    │
//! │  pass it back to continue without re-scanning.                         │
//! │                                                                         │
//! │  No locking beyond what the store's commit atomicity already gives:    │
//! │  a read sees the fully-old or fully-new document, never a mixture.     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use ember_core::{
    CheckoutMetadataSnapshot, FlavorUsageEvent, LoyaltyTransaction, Money, PriceTable,
    SurgeDecisionEvent,
};

use crate::error::StoreResult;
use crate::keys::{FLAVOR_LOG, LOYALTY_VAULT, SURGE_PRICING};
use crate::resource::{Cursor, SequencedEvent};
use crate::store::Store;

/// Read-only façade over the ledger's resources.
#[derive(Debug, Clone)]
pub struct Reader {
    store: Store,
}

impl Reader {
    /// Creates a reader over the shared store.
    pub fn new(store: Store) -> Self {
        Reader { store }
    }

    /// Current checkout metadata, or `None` if never injected.
    pub async fn checkout_metadata(&self) -> StoreResult<Option<CheckoutMetadataSnapshot>> {
        self.store.read_snapshot(FLAVOR_LOG).await
    }

    /// Flavor usage events after `cursor`, in append order.
    pub async fn flavor_history(
        &self,
        cursor: Cursor,
    ) -> StoreResult<Vec<SequencedEvent<FlavorUsageEvent>>> {
        self.store.events_since(FLAVOR_LOG, cursor).await
    }

    /// Loyalty transactions after `cursor`, in append order, all users.
    pub async fn loyalty_ledger(
        &self,
        cursor: Cursor,
    ) -> StoreResult<Vec<SequencedEvent<LoyaltyTransaction>>> {
        self.store.events_since(LOYALTY_VAULT, cursor).await
    }

    /// A user's current balance: the fold of their gains over the whole
    /// ledger.
    ///
    /// O(ledger) by design - the ledger is the single source of truth and
    /// no derived counter exists to race on. A user with no transactions
    /// folds to zero.
    pub async fn loyalty_balance(&self, user_id: &str) -> StoreResult<Money> {
        let ledger = self.loyalty_ledger(Cursor::start()).await?;
        Ok(ledger
            .into_iter()
            .filter(|entry| entry.event.user_id == user_id)
            .map(|entry| entry.event.loyalty_gain)
            .sum())
    }

    /// Current price table, empty if no decision was ever applied.
    pub async fn price_table(&self) -> StoreResult<PriceTable> {
        Ok(self
            .store
            .read_snapshot(SURGE_PRICING)
            .await?
            .unwrap_or_default())
    }

    /// Surge pricing decisions after `cursor`, in append order.
    pub async fn surge_history(
        &self,
        cursor: Cursor,
    ) -> StoreResult<Vec<SequencedEvent<SurgeDecisionEvent>>> {
        self.store.events_since(SURGE_PRICING, cursor).await
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::loyalty::LoyaltyEngine;
    use crate::store::StoreConfig;
    use ember_core::TrustArc;

    async fn fixtures() -> (LoyaltyEngine, Reader) {
        let store = Store::open(StoreConfig::in_memory()).await.unwrap();
        (LoyaltyEngine::new(store.clone()), Reader::new(store))
    }

    #[tokio::test]
    async fn test_balance_folds_only_the_users_gains() {
        let (engine, reader) = fixtures().await;

        let trusted = TrustArc::from_score(8.0);
        engine
            .accrue("u1", Money::from_cents(2000), trusted, false) // +$2.00
            .await
            .unwrap();
        engine
            .accrue("u2", Money::from_cents(5000), trusted, false) // other user
            .await
            .unwrap();
        engine
            .accrue("u1", Money::from_cents(2000), trusted, true) // +$2.50
            .await
            .unwrap();
        engine
            .accrue("u1", Money::from_cents(1000), TrustArc::from_score(2.0), false) // gated
            .await
            .unwrap();

        assert_eq!(
            reader.loyalty_balance("u1").await.unwrap(),
            Money::from_cents(450)
        );
        assert_eq!(
            reader.loyalty_balance("nobody").await.unwrap(),
            Money::zero()
        );
    }

    #[tokio::test]
    async fn test_ledger_cursor_resumes_without_rescanning() {
        let (engine, reader) = fixtures().await;

        let trusted = TrustArc::from_score(8.0);
        for _ in 0..3 {
            engine
                .accrue("u1", Money::from_cents(1000), trusted, false)
                .await
                .unwrap();
        }

        let first = reader.loyalty_ledger(Cursor::start()).await.unwrap();
        assert_eq!(first.len(), 3);

        let resume = first.last().unwrap().cursor;
        assert!(reader.loyalty_ledger(resume).await.unwrap().is_empty());

        engine
            .accrue("u1", Money::from_cents(1000), trusted, false)
            .await
            .unwrap();
        let delta = reader.loyalty_ledger(resume).await.unwrap();
        assert_eq!(delta.len(), 1);
    }

    #[tokio::test]
    async fn test_unwritten_resources_read_as_empty() {
        let (_engine, reader) = fixtures().await;

        assert!(reader.checkout_metadata().await.unwrap().is_none());
        assert!(reader.price_table().await.unwrap().is_empty());
        assert!(reader
            .flavor_history(Cursor::start())
            .await
            .unwrap()
            .is_empty());
        assert!(reader
            .surge_history(Cursor::start())
            .await
            .unwrap()
            .is_empty());
    }
}
