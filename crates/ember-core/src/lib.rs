//! # ember-core: Pure Business Logic for Ember Ledger
//!
//! This crate is the **heart** of Ember Ledger. It contains all business
//! rules as pure functions with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Ember Ledger Architecture                          │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │              External Triggers (out of scope)                   │   │
//! │  │   checkout webhook ──► scheduler ──► receipt/QR renderer        │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                ★ ember-core (THIS CRATE) ★                      │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │   types   │  │   money   │  │  loyalty  │  │   surge   │  │   │
//! │  │   │ Snapshot  │  │   Money   │  │ gain calc │  │  weekend  │  │   │
//! │  │   │  Events   │  │ cent math │  │ milestone │  │  uplift   │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO CLOCK READS • NO FILES • PURE FUNCTIONS          │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                 ember-store (Durable Store)                     │   │
//! │  │        per-key locking, atomic JSON commits, engines            │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain types (snapshots, events, outcomes)
//! - [`money`] - Money type with integer arithmetic (no floating point!)
//! - [`loyalty`] - Loyalty gain formula and milestone rule
//! - [`surge`] - Weekend detection and price uplift
//! - [`error`] - Validation error types
//! - [`validation`] - Precondition checks run before any I/O
//!
//! ## Design Principles
//!
//! 1. **Pure Functions**: Every function is deterministic - callers pass
//!    timestamps in, the crate never reads the clock
//! 2. **No I/O**: File system and network access is FORBIDDEN here
//! 3. **Integer Money**: All monetary values are in cents (i64)
//! 4. **Explicit Outcomes**: "no mutation because business rule" is a typed
//!    outcome, never an error and never a silent drop
//!
//! ## Example Usage
//!
//! ```rust
//! use chrono::{TimeZone, Utc};
//! use ember_core::loyalty::loyalty_gain;
//! use ember_core::money::Money;
//! use ember_core::surge::{is_weekend, surge_price};
//!
//! // $20.00 checkout during surge earns $2.50
//! let gain = loyalty_gain(Money::from_cents(2000), true);
//! assert_eq!(gain.cents(), 250);
//!
//! // Saturday uplift: $10.00 → $13.00
//! let sat = Utc.with_ymd_and_hms(2026, 8, 29, 20, 0, 0).unwrap();
//! let price = surge_price(Money::from_cents(1000), is_weekend(sat));
//! assert_eq!(price.cents(), 1300);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod loyalty;
pub mod money;
pub mod surge;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================
// These allow users to do `use ember_core::Money` instead of
// `use ember_core::money::Money`

pub use error::{ValidationError, ValidationResult};
pub use money::Money;
pub use types::*;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Trust score required before any loyalty accrual happens.
///
/// Below this value an accrual call is a no-op (`BelowThreshold`), not an
/// error. The threshold comes from the reputation service's 0-10 scale.
pub const TRUST_ARC_THRESHOLD: f64 = 6.0;

/// Loyalty accrual rate in basis points (1000 bps = 10% of the amount).
pub const LOYALTY_RATE_BPS: u32 = 1000;

/// Flat bonus added to a gain when surge pricing is active ($0.50).
pub const LOYALTY_SURGE_BONUS: Money = Money::from_cents(50);

/// Gain at or above this value flags the outcome as a milestone ($1.00).
pub const LOYALTY_MILESTONE: Money = Money::from_cents(100);

/// Price uplift applied on designated weekend days ($3.00).
pub const WEEKEND_UPLIFT: Money = Money::from_cents(300);

/// Maximum length of a flavor combination label.
pub const MAX_FLAVOR_COMBO_LEN: usize = 80;

/// Maximum length of a user identifier.
pub const MAX_USER_ID_LEN: usize = 64;

/// Maximum length of a resource key (keys become file names).
pub const MAX_RESOURCE_KEY_LEN: usize = 64;
