use serde::{Deserialize, Serialize};

use crate::event_dispatch::DomainEvent;
use super::value_objects::Address;

// ============================================================================
// Customer Domain Events
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CustomerCreatedEvent {
    pub id: String,
    pub name: String,
    pub active: bool,
}

impl DomainEvent for CustomerCreatedEvent {
    fn event_type() -> &'static str {
        "CustomerCreatedEvent"
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AddressChangedEvent {
    pub id: String,
    pub name: String,
    pub address: Address,
}

impl DomainEvent for AddressChangedEvent {
    fn event_type() -> &'static str {
        "AddressChangedEvent"
    }
}
