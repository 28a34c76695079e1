use serde::{Deserialize, Serialize};
use uuid::Uuid;
use chrono::{DateTime, Utc};
use anyhow::Result;

// ============================================================================
// Event Envelope - Domain Event + Occurrence Metadata
// ============================================================================

/// Wraps a domain event payload with its identity and occurrence time
///
/// Type Parameter:
/// - `E`: The domain event payload (must implement DomainEvent trait)
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct EventEnvelope<E> {
    pub event_id: Uuid,
    pub event_type: String,
    pub occurred_at: DateTime<Utc>,
    pub event_data: E,
}

impl<E: DomainEvent> EventEnvelope<E> {
    /// Stamp a payload as having occurred now
    pub fn new(event_data: E) -> Self {
        Self {
            event_id: Uuid::new_v4(),
            event_type: E::event_type().to_string(),
            occurred_at: Utc::now(),
            event_data,
        }
    }

    pub fn with_occurred_at(mut self, occurred_at: DateTime<Utc>) -> Self {
        self.occurred_at = occurred_at;
        self
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}

// ============================================================================
// Domain Event Trait
// ============================================================================

/// Marks a payload type as a dispatchable domain event.
///
/// The payload type itself is the registry key, so `event_type` is only a
/// stable, human readable name used in logs, metrics and error reports.
pub trait DomainEvent:
    Serialize + for<'de> Deserialize<'de> + Clone + Send + Sync + 'static
{
    fn event_type() -> &'static str where Self: Sized;
}

// ============================================================================
// Tests
// ============================================================================
