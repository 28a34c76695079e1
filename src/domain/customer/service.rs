use anyhow::{Context, Result};

use crate::event_dispatch::{EventDispatcher, EventEnvelope};

use super::entity::Customer;
use super::events::{AddressChangedEvent, CustomerCreatedEvent};
use super::factory::CustomerFactory;
use super::value_objects::Address;

// ============================================================================
// Customer Service
// ============================================================================
//
// Orchestrates: Factory / Entity → Event → Dispatcher
//
// The state change is applied first; handler failures are then returned to
// the caller with context.
//
// ============================================================================

pub struct CustomerService<'a> {
    dispatcher: &'a EventDispatcher,
}

impl<'a> CustomerService<'a> {
    pub fn new(dispatcher: &'a EventDispatcher) -> Self {
        Self { dispatcher }
    }

    /// Create a customer and raise `CustomerCreatedEvent`
    pub fn create(&self, name: &str) -> Result<Customer> {
        let customer = CustomerFactory::create(name)?;

        tracing::debug!(customer_id = %customer.id(), "Customer created");

        let event = EventEnvelope::new(CustomerCreatedEvent {
            id: customer.id().to_string(),
            name: customer.name().to_string(),
            active: customer.is_active(),
        });
        self.dispatcher
            .notify(&event)
            .with_context(|| format!("Failed to notify creation of customer {}", customer.id()))?;

        Ok(customer)
    }

    /// Move a customer to a new address and raise `AddressChangedEvent`
    pub fn change_address(&self, customer: &mut Customer, address: Address) -> Result<()> {
        customer.change_address(address.clone())?;

        let event = EventEnvelope::new(AddressChangedEvent {
            id: customer.id().to_string(),
            name: customer.name().to_string(),
            address,
        });
        self.dispatcher
            .notify(&event)
            .with_context(|| format!("Failed to notify address change of customer {}", customer.id()))?;

        Ok(())
    }
}

// ============================================================================
// Unit Tests
// ============================================================================
