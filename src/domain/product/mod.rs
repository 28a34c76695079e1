// ============================================================================
// Product Domain
// ============================================================================

pub mod entity;
pub mod events;
pub mod errors;
pub mod handlers;
pub mod factory;
pub mod service;

pub use entity::*;
pub use events::*;
pub use errors::*;
pub use handlers::*;
pub use factory::*;
pub use service::*;
