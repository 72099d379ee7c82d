//! Domain events: immutable facts recorded when aggregate state changes.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::id::EventId;

/// A domain event.
///
/// Events are:
/// - **immutable** (treat them as facts)
/// - identified and timestamped once, at construction — never recomputed
/// - queued on their aggregate until an external dispatcher drains them
pub trait DomainEvent: core::fmt::Debug {
    /// Globally unique identifier, fixed at construction.
    fn event_id(&self) -> EventId;

    /// When the event occurred (UTC, business time), fixed at construction.
    fn occurred_at_utc(&self) -> DateTime<Utc>;

    /// Stable event name/type identifier (e.g. "billing.invoice.issued").
    fn event_type(&self) -> &'static str;
}

/// Identity and occurrence time for a domain event.
///
/// Embed one per event type and delegate [`DomainEvent::event_id`] /
/// [`DomainEvent::occurred_at_utc`] to it.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventMetadata {
    event_id: EventId,
    occurred_at_utc: DateTime<Utc>,
}

impl EventMetadata {
    /// Stamp a new event: fresh identifier, current UTC time.
    pub fn new() -> Self {
        Self {
            event_id: EventId::new(),
            occurred_at_utc: Utc::now(),
        }
    }

    /// Rebuild metadata with known values (rehydration from storage).
    pub fn from_parts(event_id: EventId, occurred_at_utc: DateTime<Utc>) -> Self {
        Self {
            event_id,
            occurred_at_utc,
        }
    }

    pub fn event_id(&self) -> EventId {
        self.event_id
    }

    pub fn occurred_at_utc(&self) -> DateTime<Utc> {
        self.occurred_at_utc
    }
}

impl Default for EventMetadata {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn metadata_is_fixed_at_construction() {
        let metadata = EventMetadata::new();
        let id = metadata.event_id();
        let at = metadata.occurred_at_utc();
        assert_eq!(metadata.event_id(), id);
        assert_eq!(metadata.occurred_at_utc(), at);
    }

    #[test]
    fn fresh_metadata_gets_fresh_identity() {
        assert_ne!(EventMetadata::new().event_id(), EventMetadata::new().event_id());
    }

    #[test]
    fn serde_round_trip_preserves_identity() {
        let metadata = EventMetadata::new();
        let json = serde_json::to_string(&metadata).unwrap();
        let back: EventMetadata = serde_json::from_str(&json).unwrap();
        assert_eq!(metadata, back);
    }
}
