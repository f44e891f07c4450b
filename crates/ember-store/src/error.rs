//! # Store Error Types
//!
//! Error types for durable-store operations.
//!
//! ## Error Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Propagation                                    │
//! │                                                                         │
//! │  std::io::Error / serde_json::Error                                    │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  StoreError (this module) ← Adds resource key + operation context      │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  Caller decides: retry (ResourceLocked), surface (Io), reject          │
//! │  (Validation) - the store never swallows a failure                     │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Taxonomy
//! - `Validation` - precondition violation, rejected before any I/O
//! - `ResourceLocked` - contention, transient, safe to retry with backoff
//! - `Io` - medium unavailable or write rejected; transaction not applied
//! - `Serialization` - value cannot be (de)serialized; stored state intact

use thiserror::Error;

use ember_core::ValidationError;

/// Durable-store operation errors.
///
/// Every variant carries the resource key so a failure can be diagnosed
/// without inspecting internal store state.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Another holder currently owns the resource; acquisition timed out.
    ///
    /// ## When This Occurs
    /// - A concurrent writer held the key past the configured lock timeout
    ///
    /// Transient: the caller may retry with backoff or fail fast. No retry
    /// happens inside the store.
    #[error("resource '{key}' is locked by another writer")]
    ResourceLocked { key: String },

    /// Underlying medium unavailable or a write was rejected.
    ///
    /// ## When This Occurs
    /// - Disk full, permissions, missing directory
    /// - Injected fault during tests
    ///
    /// The transaction is guaranteed not partially applied: the commit
    /// point is a single rename, so the resource still holds its last
    /// fully committed state.
    #[error("I/O failure on resource '{key}' during {op}: {source}")]
    Io {
        key: String,
        op: &'static str,
        #[source]
        source: std::io::Error,
    },

    /// A value could not be encoded, or stored bytes could not be decoded.
    ///
    /// Fatal for the call, harmless for the store: encoding happens before
    /// any I/O, so existing state is never corrupted.
    #[error("serialization failure on resource '{key}': {source}")]
    Serialization {
        key: String,
        #[source]
        source: serde_json::Error,
    },

    /// Precondition violation (invalid key, empty combo, negative price).
    /// Rejected before any I/O; never retried automatically.
    #[error(transparent)]
    Validation(#[from] ValidationError),
}

impl StoreError {
    /// Helper for I/O errors with key and operation context.
    pub(crate) fn io(key: impl Into<String>, op: &'static str, source: std::io::Error) -> Self {
        StoreError::Io {
            key: key.into(),
            op,
            source,
        }
    }

    /// Helper for serialization errors with key context.
    pub(crate) fn serialization(key: impl Into<String>, source: serde_json::Error) -> Self {
        StoreError::Serialization {
            key: key.into(),
            source,
        }
    }

    /// True for transient contention failures that are safe to retry.
    pub fn is_retryable(&self) -> bool {
        matches!(self, StoreError::ResourceLocked { .. })
    }
}

/// Result type for store operations.
pub type StoreResult<T> = Result<T, StoreError>;

// =============================================================================
// Unit Tests
// =============================================================================
