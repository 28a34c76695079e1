use anyhow::Result;

use crate::event_dispatch::{EventEnvelope, EventHandler};
use super::events::{AddressChangedEvent, CustomerCreatedEvent};

// ============================================================================
// Customer Event Handlers
// ============================================================================

/// First of two independent reactions to a new customer
pub struct LogWhenCustomerIsCreatedFirstHandler;

impl EventHandler<CustomerCreatedEvent> for LogWhenCustomerIsCreatedFirstHandler {
    fn handle(&self, event: &EventEnvelope<CustomerCreatedEvent>) -> Result<()> {
        tracing::info!(
            customer_id = %event.event_data.id,
            occurred_at = %event.occurred_at,
            "This is the first log line for event: CustomerCreated"
        );
        Ok(())
    }
}

/// Second of two independent reactions to a new customer
pub struct LogWhenCustomerIsCreatedSecondHandler;

impl EventHandler<CustomerCreatedEvent> for LogWhenCustomerIsCreatedSecondHandler {
    fn handle(&self, event: &EventEnvelope<CustomerCreatedEvent>) -> Result<()> {
        tracing::info!(
            customer_id = %event.event_data.id,
            occurred_at = %event.occurred_at,
            "This is the second log line for event: CustomerCreated"
        );
        Ok(())
    }
}

pub struct LogWhenAddressIsChangedHandler;

impl LogWhenAddressIsChangedHandler {
    pub fn message(event: &AddressChangedEvent) -> String {
        format!(
            "Customer address: {}, {} changed to: {}",
            event.id,
            event.name,
            event.address.notice_line()
        )
    }
}

impl EventHandler<AddressChangedEvent> for LogWhenAddressIsChangedHandler {
    fn handle(&self, event: &EventEnvelope<AddressChangedEvent>) -> Result<()> {
        tracing::info!(
            customer_id = %event.event_data.id,
            "{}",
            Self::message(&event.event_data)
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::customer::Address;

    fn address_changed() -> AddressChangedEvent {
        AddressChangedEvent {
            id: "1".to_string(),
            name: "Epaminondas da Silva".to_string(),
            address: Address {
                street: "Rua XV de Novembro".to_string(),
                number: 500,
                zip: "89023-000".to_string(),
                city: "Blumenau".to_string(),
            },
        }
    }

    #[test]
    fn test_address_changed_message() {
        assert_eq!(
            LogWhenAddressIsChangedHandler::message(&address_changed()),
            "Customer address: 1, Epaminondas da Silva changed to: Rua XV de Novembro, 500 - Blumenau, 89023-000"
        );
    }

    #[test]
    fn test_handlers_succeed() {
        let created = EventEnvelope::new(CustomerCreatedEvent {
            id: "1".to_string(),
            name: "Epaminondas da Silva".to_string(),
            active: true,
        });

        assert!(LogWhenCustomerIsCreatedFirstHandler.handle(&created).is_ok());
        assert!(LogWhenCustomerIsCreatedSecondHandler.handle(&created).is_ok());
        assert!(LogWhenAddressIsChangedHandler.handle(&EventEnvelope::new(address_changed())).is_ok());
    }

    #[test]
    fn test_handler_names_identify_the_type() {
        assert!(EventHandler::<CustomerCreatedEvent>::name(&LogWhenCustomerIsCreatedFirstHandler)
            .ends_with("LogWhenCustomerIsCreatedFirstHandler"));
    }
}
