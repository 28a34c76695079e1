// ============================================================================
// Checkout Domain
// ============================================================================
//
// Orders and their items. Placing an order credits the customer with reward
// points; no events are raised here.
//
// ============================================================================

pub mod order_item;
pub mod order;
pub mod errors;
pub mod factory;
pub mod service;

pub use order_item::*;
pub use order::*;
pub use errors::*;
pub use factory::*;
pub use service::*;
