//! # Resource Documents
//!
//! The durable shape of a resource: one snapshot plus one append-only log,
//! persisted together as a single self-describing JSON document.
//!
//! ## Document Layout
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  <root>/loyalty-vault.json                                             │
//! │                                                                         │
//! │  {                                                                      │
//! │    "snapshot": null,              ← or the current materialized value  │
//! │    "events": [                                                          │
//! │      { "seq": 1,                  ← store-assigned, strictly rising    │
//! │        "recorded_at": "2026-08-29T19:04:11Z",                          │
//! │        "data": { ...domain event... } },                               │
//! │      { "seq": 2, ... }                                                 │
//! │    ]                                                                    │
//! │  }                                                                      │
//! │                                                                         │
//! │  WHY ONE DOCUMENT? The commit is a single temp-file rename, so a       │
//! │  combined snapshot-overwrite + log-append is all-or-nothing without    │
//! │  a journal. Logs at this scale are small enough to rewrite in full.    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use chrono::{DateTime, Utc};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;

// =============================================================================
// Cursor
// =============================================================================

/// Opaque position marker into a resource's event log.
///
/// A cursor is the last-seen sequence number; collaborators hold on to it to
/// resume reading without re-scanning. `Cursor::start()` reads from the
/// beginning.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
pub struct Cursor(u64);

impl Cursor {
    /// Cursor positioned before the first event.
    #[inline]
    pub const fn start() -> Self {
        Cursor(0)
    }

    /// The underlying sequence number (for logging/diagnostics only).
    #[inline]
    pub const fn position(&self) -> u64 {
        self.0
    }

    pub(crate) const fn from_seq(seq: u64) -> Self {
        Cursor(seq)
    }
}

// =============================================================================
// Log Records
// =============================================================================

/// One stored event-log entry: the domain event plus its store envelope.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LogRecord {
    /// Store-assigned sequence number, strictly increasing from 1.
    pub seq: u64,

    /// When the record was appended (UTC, ISO-8601 on disk).
    pub recorded_at: DateTime<Utc>,

    /// The domain event, kept self-describing for external log readers.
    pub data: Value,
}

/// A decoded event handed to read-façade callers, with its resume cursor.
#[derive(Debug, Clone, PartialEq)]
pub struct SequencedEvent<E> {
    /// Cursor positioned at this event; pass back to resume after it.
    pub cursor: Cursor,

    /// When the record was appended.
    pub recorded_at: DateTime<Utc>,

    /// The decoded domain event.
    pub event: E,
}

// =============================================================================
// Resource Document
// =============================================================================

/// In-memory form of a resource's durable document.
///
/// Created lazily on first write: an absent file loads as an empty document
/// (no snapshot, no events).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ResourceDocument {
    /// Latest materialized value, overwritten in place. `None` until the
    /// owning engine writes one.
    pub snapshot: Option<Value>,

    /// Append-only, insertion-ordered history. Never truncated.
    pub events: Vec<LogRecord>,
}

impl ResourceDocument {
    /// Sequence number the next appended record will receive.
    pub fn next_seq(&self) -> u64 {
        self.events.last().map(|r| r.seq).unwrap_or(0) + 1
    }

    /// Appends a record with the next sequence number.
    pub fn push(&mut self, recorded_at: DateTime<Utc>, data: Value) -> u64 {
        let seq = self.next_seq();
        self.events.push(LogRecord {
            seq,
            recorded_at,
            data,
        });
        seq
    }

    /// Decodes all records strictly after `cursor`, in append order.
    pub fn records_after<E: DeserializeOwned>(
        &self,
        cursor: Cursor,
    ) -> Result<Vec<SequencedEvent<E>>, serde_json::Error> {
        self.events
            .iter()
            .filter(|r| r.seq > cursor.position())
            .map(|r| {
                Ok(SequencedEvent {
                    cursor: Cursor::from_seq(r.seq),
                    recorded_at: r.recorded_at,
                    event: serde_json::from_value(r.data.clone())?,
                })
            })
            .collect()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_empty_document_defaults() {
        let doc = ResourceDocument::default();
        assert!(doc.snapshot.is_none());
        assert!(doc.events.is_empty());
        assert_eq!(doc.next_seq(), 1);
    }

    #[test]
    fn test_push_assigns_increasing_seq() {
        let mut doc = ResourceDocument::default();
        let now = Utc::now();
        assert_eq!(doc.push(now, json!({"a": 1})), 1);
        assert_eq!(doc.push(now, json!({"a": 2})), 2);
        assert_eq!(doc.push(now, json!({"a": 3})), 3);
        assert_eq!(doc.next_seq(), 4);
    }

    #[test]
    fn test_records_after_cursor() {
        let mut doc = ResourceDocument::default();
        let now = Utc::now();
        for i in 1..=5 {
            doc.push(now, json!({ "n": i }));
        }

        let all: Vec<SequencedEvent<serde_json::Value>> =
            doc.records_after(Cursor::start()).unwrap();
        assert_eq!(all.len(), 5);

        let resume = all[2].cursor;
        let rest: Vec<SequencedEvent<serde_json::Value>> = doc.records_after(resume).unwrap();
        assert_eq!(rest.len(), 2);
        assert_eq!(rest[0].event["n"], 4);
    }

    #[test]
    fn test_document_round_trips_as_json() {
        let mut doc = ResourceDocument::default();
        doc.snapshot = Some(json!({"flavor_combo": "Mint", "surge_active": "false"}));
        doc.push(Utc::now(), json!({"flavor_combo": "Mint"}));

        let bytes = serde_json::to_vec_pretty(&doc).unwrap();
        let back: ResourceDocument = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(back, doc);
    }
}
