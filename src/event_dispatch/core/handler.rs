use anyhow::Result;

use super::event::{DomainEvent, EventEnvelope};

// ============================================================================
// Event Handler Trait
// ============================================================================

/// Reaction to one kind of domain event.
///
/// Handlers are shared as `Arc<dyn EventHandler<E>>`; the dispatcher matches
/// them by instance, so registering two structurally equal handlers yields two
/// distinct entries.
pub trait EventHandler<E: DomainEvent>: Send + Sync {
    fn handle(&self, event: &EventEnvelope<E>) -> Result<()>;

    /// Name used when reporting a failure of this handler
    fn name(&self) -> &'static str {
        std::any::type_name::<Self>()
    }
}
