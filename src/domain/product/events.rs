use serde::{Deserialize, Serialize};

use crate::event_dispatch::DomainEvent;

// ============================================================================
// Product Domain Events
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductCreatedEvent {
    pub name: String,
    pub description: String,
    pub price: f64,
}

impl DomainEvent for ProductCreatedEvent {
    fn event_type() -> &'static str {
        "ProductCreatedEvent"
    }
}
