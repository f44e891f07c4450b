//! # Metadata Injector
//!
//! Writes the current checkout-session metadata snapshot and appends a
//! usage event - one store transaction on the `flavor-log` resource.
//!
//! ## Injection Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Metadata Injection                                 │
//! │                                                                         │
//! │  checkout event (external trigger)                                     │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  inject("Peach + Mint", surge_active=true)                             │
//! │       │                                                                 │
//! │       ├── validate combo (empty → rejected, nothing written)           │
//! │       │                                                                 │
//! │       └── ONE transaction on "flavor-log":                             │
//! │            1. overwrite CheckoutMetadataSnapshot  (last-write-wins)    │
//! │            2. append FlavorUsageEvent             (history)            │
//! │            3. commit                              (both or neither)    │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  downstream readers (QR/receipt renderer) observe the new snapshot     │
//! │  immediately after the call returns                                    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use chrono::Utc;
use tracing::debug;

use ember_core::validation::validate_flavor_combo;
use ember_core::{CheckoutMetadataSnapshot, FlavorUsageEvent, Injection};

use crate::error::StoreResult;
use crate::keys::FLAVOR_LOG;
use crate::store::Store;

/// Engine that records per-session flavor/pricing metadata.
#[derive(Debug, Clone)]
pub struct MetadataInjector {
    store: Store,
}

impl MetadataInjector {
    /// Creates a new injector over the shared store.
    pub fn new(store: Store) -> Self {
        MetadataInjector { store }
    }

    /// Injects checkout metadata: overwrites the current snapshot and
    /// appends one immutable usage event, atomically.
    ///
    /// ## Arguments
    /// * `flavor_combo` - flavor combination sold this session (non-empty)
    /// * `surge_active` - whether weekend surge pricing was in effect
    ///
    /// ## Returns
    /// A confirmation referencing the written combo key.
    pub async fn inject(
        &self,
        flavor_combo: &str,
        surge_active: bool,
    ) -> StoreResult<Injection> {
        validate_flavor_combo(flavor_combo)?;
        let flavor_combo = flavor_combo.trim();

        debug!(flavor_combo, surge_active, "Injecting checkout metadata");

        let mut txn = self.store.begin(FLAVOR_LOG).await?;
        txn.set_snapshot(&CheckoutMetadataSnapshot {
            flavor_combo: flavor_combo.to_string(),
            surge_active,
        })?;
        txn.append(&FlavorUsageEvent {
            timestamp: Utc::now(),
            flavor_combo: flavor_combo.to_string(),
            surge_active,
        })?;
        txn.commit().await?;

        Ok(Injection {
            flavor_combo: flavor_combo.to_string(),
            surge_active,
        })
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
