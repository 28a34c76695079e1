// ============================================================================
// Customer Domain
// ============================================================================
//
// - Value objects (Address)
// - Entity (Customer)
// - Events (CustomerCreatedEvent, AddressChangedEvent)
// - Handlers reacting to those events
// - Errors (CustomerError enum)
// - Factory and service (CustomerFactory, CustomerService)
//
// ============================================================================

pub mod value_objects;
pub mod entity;
pub mod events;
pub mod errors;
pub mod handlers;
pub mod factory;
pub mod service;

// Re-export for convenience
pub use value_objects::*;
pub use entity::*;
pub use events::*;
pub use errors::*;
pub use handlers::*;
pub use factory::*;
pub use service::*;
