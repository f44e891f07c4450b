//! # Domain Types
//!
//! Core domain types used throughout Ember Ledger.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌───────────────────┐  ┌───────────────────┐  ┌───────────────────┐   │
//! │  │ CheckoutMetadata  │  │ LoyaltyTransaction│  │ SurgeDecisionEvent│   │
//! │  │ Snapshot          │  │  ───────────────  │  │  ───────────────  │   │
//! │  │  ───────────────  │  │  user_id          │  │  flavor           │   │
//! │  │  flavor_combo     │  │  amount (cents)   │  │  base_price       │   │
//! │  │  surge_active     │  │  trust_arc        │  │  surge_price      │   │
//! │  └───────────────────┘  │  loyalty_gain     │  │  weekend          │   │
//! │                         └───────────────────┘  └───────────────────┘   │
//! │                                                                         │
//! │  ┌───────────────────┐  ┌───────────────────┐  ┌───────────────────┐   │
//! │  │  FlavorUsageEvent │  │     TrustArc      │  │    PriceTable     │   │
//! │  │  (history record) │  │  (f64 score)      │  │ flavor → price    │   │
//! │  └───────────────────┘  └───────────────────┘  └───────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Snapshot vs Event Pattern
//! Snapshot types (`CheckoutMetadataSnapshot`, `PriceTable`) are overwritten
//! in place, last-write-wins. Event types (`FlavorUsageEvent`,
//! `LoyaltyTransaction`, `SurgeDecisionEvent`) are immutable once appended.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

use crate::money::Money;
use crate::TRUST_ARC_THRESHOLD;

// =============================================================================
// Trust Arc
// =============================================================================

/// An externally supplied trust/reputation score gating loyalty accrual.
///
/// ## Why a Newtype?
/// The score arrives from an upstream reputation service as a plain decimal.
/// Wrapping it keeps the threshold comparison in one place and stops raw
/// floats from leaking through accrual signatures.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
pub struct TrustArc(f64);

impl TrustArc {
    /// Creates a trust arc from a raw score.
    #[inline]
    pub const fn from_score(score: f64) -> Self {
        TrustArc(score)
    }

    /// Returns the raw score.
    #[inline]
    pub const fn score(&self) -> f64 {
        self.0
    }

    /// Checks whether the score clears the accrual threshold (6.0).
    ///
    /// Below the threshold no transaction is created - a no-op, not an error.
    #[inline]
    pub fn meets_threshold(&self) -> bool {
        self.0 >= TRUST_ARC_THRESHOLD
    }
}

impl fmt::Display for TrustArc {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.1}", self.0)
    }
}

// =============================================================================
// Checkout Metadata
// =============================================================================

/// The single current checkout-session metadata value (snapshot).
///
/// ## Legacy Encoding
/// `surge_active` is serialized as the string `"true"`/`"false"` because the
/// downstream receipt/QR renderers still read it that way. Flip to a native
/// boolean only in lockstep with those consumers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckoutMetadataSnapshot {
    /// The flavor combination sold in this session.
    pub flavor_combo: String,

    /// Whether weekend surge pricing was in effect.
    #[serde(with = "bool_as_string")]
    pub surge_active: bool,
}

/// One appended record of a metadata injection (history).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FlavorUsageEvent {
    /// When the injection happened (UTC).
    pub timestamp: DateTime<Utc>,

    /// The flavor combination written to the snapshot.
    pub flavor_combo: String,

    /// Whether surge pricing was active at injection time.
    pub surge_active: bool,
}

/// Confirmation returned by a successful metadata injection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Injection {
    pub flavor_combo: String,
    pub surge_active: bool,
}

impl fmt::Display for Injection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Metadata injected for {} (surge_active={})",
            self.flavor_combo, self.surge_active
        )
    }
}

// =============================================================================
// Loyalty
// =============================================================================

/// One immutable loyalty accrual appended to the ledger.
///
/// ## No Stored Balance
/// There is deliberately no per-user aggregate anywhere in the store. A
/// balance is the fold of a user's `loyalty_gain`s, computed on read. This
/// trades read cost for append-only writes with no concurrent-counter races.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoyaltyTransaction {
    /// User the gain is attached to.
    pub user_id: String,

    /// Checkout amount in cents.
    pub amount: Money,

    /// Trust score at accrual time (audit trail for the gate).
    pub trust_arc: TrustArc,

    /// Computed gain in cents (always >= 0).
    pub loyalty_gain: Money,
}

/// Result of a loyalty accrual attempt.
///
/// `BelowThreshold` is a normal outcome, NOT an error: callers must be able
/// to distinguish "no mutation because business rule" from "failure".
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum AccrualOutcome {
    /// Trust arc was below 6.0; nothing was written.
    BelowThreshold,

    /// A transaction was appended to the ledger.
    Accrued {
        /// The gain that was appended.
        loyalty_gain: Money,
        /// True when the gain crossed $1.00 - an external notification
        /// collaborator may react; the engine itself performs no I/O for it.
        milestone_reached: bool,
    },
}

impl AccrualOutcome {
    /// Returns the appended gain, if any mutation happened.
    pub fn loyalty_gain(&self) -> Option<Money> {
        match self {
            AccrualOutcome::BelowThreshold => None,
            AccrualOutcome::Accrued { loyalty_gain, .. } => Some(*loyalty_gain),
        }
    }

    /// True when the accrual crossed the milestone threshold.
    pub fn milestone_reached(&self) -> bool {
        matches!(
            self,
            AccrualOutcome::Accrued {
                milestone_reached: true,
                ..
            }
        )
    }
}

impl fmt::Display for AccrualOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AccrualOutcome::BelowThreshold => {
                write!(f, "TrustArc below threshold; no loyalty delta applied")
            }
            AccrualOutcome::Accrued {
                loyalty_gain,
                milestone_reached,
            } => {
                write!(f, "Loyalty +{loyalty_gain} attached")?;
                if *milestone_reached {
                    write!(f, " | milestone reached")?;
                }
                Ok(())
            }
        }
    }
}

// =============================================================================
// Surge Pricing
// =============================================================================

/// Current price per flavor (snapshot). Re-serialized in full on every
/// write - overwrite semantics, not patch.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PriceTable(BTreeMap<String, Money>);

impl PriceTable {
    /// Creates an empty price table.
    pub fn new() -> Self {
        PriceTable(BTreeMap::new())
    }

    /// Sets the current price for a flavor, replacing any prior value.
    pub fn set_price(&mut self, flavor: impl Into<String>, price: Money) {
        self.0.insert(flavor.into(), price);
    }

    /// Returns the current price for a flavor, if one has been written.
    pub fn price(&self, flavor: &str) -> Option<Money> {
        self.0.get(flavor).copied()
    }

    /// Number of flavors with a current price.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// True when no price has been written yet.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterates flavors and prices in name order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, Money)> {
        self.0.iter().map(|(k, v)| (k.as_str(), *v))
    }
}

/// One immutable pricing decision appended to the surge log.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SurgeDecisionEvent {
    /// Flavor the decision applies to.
    pub flavor: String,

    /// Price before any uplift.
    pub base_price: Money,

    /// Price after the weekend uplift (equals base_price off-weekend).
    pub surge_price: Money,

    /// Whether the decision timestamp fell on a UTC weekend.
    pub weekend: bool,

    /// The `as_of` instant the decision was computed for.
    pub timestamp: DateTime<Utc>,
}

/// Result returned to the caller of a surge application.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PriceDecision {
    /// The price now current for the flavor.
    pub surge_price: Money,

    /// Whether the weekend uplift applied.
    pub weekend: bool,
}

impl fmt::Display for PriceDecision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.weekend {
            write!(f, "Trending Mix +$3.00 | price: {}", self.surge_price)
        } else {
            write!(f, "No surge pricing applied | price: {}", self.surge_price)
        }
    }
}

// =============================================================================
// Legacy Boolean Encoding
// =============================================================================

/// Serializes a bool as `"true"`/`"false"` strings.
///
/// The checkout metadata consumers (receipt renderer, QR generator) predate
/// this system and read string-encoded booleans.
mod bool_as_string {
    use serde::de::{self, Deserialize, Deserializer};
    use serde::Serializer;

    pub fn serialize<S>(value: &bool, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(if *value { "true" } else { "false" })
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<bool, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        match raw.as_str() {
            "true" => Ok(true),
            "false" => Ok(false),
            other => Err(de::Error::custom(format!(
                "expected \"true\" or \"false\", got {other:?}"
            ))),
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
