//! # ember-store: Durable Store for Ember Ledger
//!
//! This crate provides the event-sourced ledger and derived-snapshot store:
//! one transactional primitive, three write engines, one read façade.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Ember Ledger Data Flow                             │
//! │                                                                         │
//! │  External trigger (checkout event, scheduled rotation)                 │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                   ember-store (THIS CRATE)                      │   │
//! │  │                                                                 │   │
//! │  │   ┌────────────────┐ ┌───────────────┐ ┌───────────────────┐  │   │
//! │  │   │MetadataInjector│ │ LoyaltyEngine │ │    SurgeEngine    │  │   │
//! │  │   │  flavor-log    │ │ loyalty-vault │ │   surge-pricing   │  │   │
//! │  │   └───────┬────────┘ └───────┬───────┘ └─────────┬─────────┘  │   │
//! │  │           │                  │                   │            │   │
//! │  │           └────────────┬─────┴───────────────────┘            │   │
//! │  │                        ▼                                      │   │
//! │  │   ┌────────────────────────────────────────────────────────┐ │   │
//! │  │   │                  Store (store.rs)                      │ │   │
//! │  │   │  per-key mutex • staged writes • atomic rename commit  │ │   │
//! │  │   └────────────────────────────────────────────────────────┘ │   │
//! │  │                        │                                      │   │
//! │  │   ┌────────────────────▼───────────────────────────────────┐ │   │
//! │  │   │                Reader (reader.rs)                       │ │   │
//! │  │   │  snapshots, histories, cursors, balance folds           │ │   │
//! │  │   └────────────────────────────────────────────────────────┘ │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  <root>/flavor-log.json  loyalty-vault.json  surge-pricing.json        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Module Organization
//!
//! - [`store`] - the transactional resource primitive
//! - [`resource`] - durable document shape, log records, cursors
//! - [`injector`] - checkout metadata injection
//! - [`loyalty`] - trust-gated loyalty accrual
//! - [`surge`] - weekend surge pricing
//! - [`reader`] - read façade for external collaborators
//! - [`error`] - store error types
//!
//! ## Usage
//!
//! ```rust,ignore
//! use ember_store::{MetadataInjector, Reader, Store, StoreConfig};
//!
//! let store = Store::open(StoreConfig::on_disk("./data")).await?;
//!
//! let injector = MetadataInjector::new(store.clone());
//! injector.inject("Peach + Mint", true).await?;
//!
//! let reader = Reader::new(store);
//! let current = reader.checkout_metadata().await?;
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod injector;
pub mod loyalty;
pub mod reader;
pub mod resource;
pub mod store;
pub mod surge;

// =============================================================================
// Resource Keys
// =============================================================================

/// Stable keys of the ledger's resources.
///
/// Each key names one durable unit (snapshot + event log). Operations on
/// different keys never block each other; within one key, writes are
/// strictly serialized.
pub mod keys {
    /// Checkout metadata snapshot + flavor usage history.
    pub const FLAVOR_LOG: &str = "flavor-log";

    /// Append-only loyalty transaction ledger (no snapshot).
    pub const LOYALTY_VAULT: &str = "loyalty-vault";

    /// Current price table + surge decision history.
    pub const SURGE_PRICING: &str = "surge-pricing";
}

// =============================================================================
// Re-exports
// =============================================================================

pub use error::{StoreError, StoreResult};
pub use injector::MetadataInjector;
pub use loyalty::LoyaltyEngine;
pub use reader::Reader;
pub use resource::{Cursor, LogRecord, ResourceDocument, SequencedEvent};
pub use store::{Store, StoreConfig, Transaction};
pub use surge::SurgeEngine;
