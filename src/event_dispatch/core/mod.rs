// ============================================================================
// Event Dispatch Core - Generic Abstractions
// ============================================================================
//
// Key Principles:
// - No domain-specific code (no Order, Customer, Product, etc.)
// - An event kind is a Rust type, so handlers only ever see their own payload
// - New kinds are added without touching the dispatcher
//
// ============================================================================

pub mod event;
pub mod handler;

pub use event::{DomainEvent, EventEnvelope};
pub use handler::EventHandler;
