use std::any::{Any, TypeId};
use std::collections::HashMap;
use std::panic::{self, AssertUnwindSafe};
use std::sync::Arc;
use std::time::Instant;

use crate::metrics::DispatchMetrics;

use super::core::{DomainEvent, EventEnvelope, EventHandler};
use super::error::{DispatchError, HandlerFailure};

// ============================================================================
// Event Dispatcher - In-Process Observer Registry
// ============================================================================
//
// Responsibilities:
// 1. Keep, per event kind, the handlers in registration order
// 2. Run every handler of a notified event synchronously, in that order
// 3. Isolate handler failures and report them together once all have run
//
// Mutation needs `&mut self` and notify only `&self`, so the registry cannot
// change while handlers are running. Wrap in a Mutex to share across threads.
//
// ============================================================================

type HandlerList<E> = Vec<Arc<dyn EventHandler<E>>>;

/// Type-erased handler list for one event kind
struct Registration {
    event_type: &'static str,
    handlers: Box<dyn Any + Send + Sync>,
    len: fn(&(dyn Any + Send + Sync)) -> usize,
}

impl Registration {
    fn new<E: DomainEvent>() -> Self {
        Self {
            event_type: E::event_type(),
            handlers: Box::new(HandlerList::<E>::new()),
            len: |handlers| {
                handlers
                    .downcast_ref::<HandlerList<E>>()
                    .map_or(0, Vec::len)
            },
        }
    }

    fn handlers<E: DomainEvent>(&self) -> Option<&HandlerList<E>> {
        self.handlers.downcast_ref()
    }

    fn handlers_mut<E: DomainEvent>(&mut self) -> Option<&mut HandlerList<E>> {
        self.handlers.downcast_mut()
    }

    fn len(&self) -> usize {
        (self.len)(self.handlers.as_ref())
    }
}

#[derive(Default)]
pub struct EventDispatcher {
    registry: HashMap<TypeId, Registration>,
    metrics: Option<Arc<DispatchMetrics>>,
}

impl EventDispatcher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_metrics(mut self, metrics: Arc<DispatchMetrics>) -> Self {
        self.metrics = Some(metrics);
        self
    }

    /// Append a handler for events of kind `E`
    ///
    /// The same instance may be registered more than once and is then run
    /// once per registration.
    pub fn register<E: DomainEvent>(&mut self, handler: Arc<dyn EventHandler<E>>) {
        let registration = self
            .registry
            .entry(TypeId::of::<E>())
            .or_insert_with(Registration::new::<E>);

        if let Some(handlers) = registration.handlers_mut::<E>() {
            tracing::debug!(
                event_type = E::event_type(),
                handler = handler.name(),
                position = handlers.len(),
                "Registered event handler"
            );
            handlers.push(handler);
        }
    }

    /// Remove the first registration of this exact handler instance
    ///
    /// Unknown kinds and absent handlers are ignored. The kind stays known
    /// even when its last handler is removed.
    pub fn unregister<E: DomainEvent>(&mut self, handler: &Arc<dyn EventHandler<E>>) {
        let Some(handlers) = self
            .registry
            .get_mut(&TypeId::of::<E>())
            .and_then(Registration::handlers_mut::<E>)
        else {
            return;
        };

        if let Some(position) = handlers.iter().position(|h| Arc::ptr_eq(h, handler)) {
            handlers.remove(position);
            tracing::debug!(
                event_type = E::event_type(),
                handler = handler.name(),
                position,
                "Unregistered event handler"
            );
        }
    }

    /// Forget every event kind and handler
    pub fn unregister_all(&mut self) {
        tracing::debug!(event_types = self.registry.len(), "Unregistered all event handlers");
        self.registry.clear();
    }

    /// Run every handler registered for the event's kind, in registration order
    ///
    /// A handler that returns an error or panics does not stop the others;
    /// all failures are returned together once every handler has run.
    pub fn notify<E: DomainEvent>(&self, event: &EventEnvelope<E>) -> Result<(), DispatchError> {
        let event_type = E::event_type();

        let Some(handlers) = self.handlers::<E>() else {
            tracing::trace!(event_type, "No handlers registered, skipping");
            return Ok(());
        };

        let started = Instant::now();
        let mut failures = Vec::new();

        for (position, handler) in handlers.iter().enumerate() {
            let outcome = panic::catch_unwind(AssertUnwindSafe(|| handler.handle(event)));

            let message = match outcome {
                Ok(Ok(())) => continue,
                Ok(Err(error)) => format!("{error:#}"),
                Err(payload) => panic_message(payload.as_ref()),
            };

            tracing::warn!(
                event_type,
                event_id = %event.event_id,
                handler = handler.name(),
                position,
                error = %message,
                "Event handler failed, continuing with remaining handlers"
            );

            if let Some(metrics) = &self.metrics {
                metrics.record_handler_failure(event_type, handler.name());
            }

            failures.push(HandlerFailure {
                position,
                handler: handler.name(),
                message,
            });
        }

        if let Some(metrics) = &self.metrics {
            metrics.record_dispatch(event_type, handlers.len(), started.elapsed().as_secs_f64());
        }

        tracing::debug!(
            event_type,
            event_id = %event.event_id,
            handlers = handlers.len(),
            failed = failures.len(),
            "Event dispatched"
        );

        if failures.is_empty() {
            Ok(())
        } else {
            Err(DispatchError::HandlersFailed { event_type, failures })
        }
    }

    // ------------------------------------------------------------------------
    // Read-only view
    // ------------------------------------------------------------------------

    /// Handlers for kind `E`, or `None` if the kind was never registered
    /// (or was cleared by `unregister_all`)
    pub fn handlers<E: DomainEvent>(&self) -> Option<&[Arc<dyn EventHandler<E>>]> {
        self.registry
            .get(&TypeId::of::<E>())
            .and_then(Registration::handlers::<E>)
            .map(Vec::as_slice)
    }

    pub fn handler_count<E: DomainEvent>(&self) -> Option<usize> {
        self.handlers::<E>().map(<[_]>::len)
    }

    pub fn is_registered<E: DomainEvent>(&self) -> bool {
        self.registry.contains_key(&TypeId::of::<E>())
    }

    /// Names of every known event kind, sorted
    pub fn event_types(&self) -> Vec<&'static str> {
        let mut names: Vec<_> = self.registry.values().map(|r| r.event_type).collect();
        names.sort_unstable();
        names
    }

    pub fn is_empty(&self) -> bool {
        self.registry.is_empty()
    }
}

impl std::fmt::Debug for EventDispatcher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut map = f.debug_map();
        for registration in self.registry.values() {
            map.entry(&registration.event_type, &registration.len());
        }
        map.finish()
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(message) = payload.downcast_ref::<&str>() {
        format!("panicked: {message}")
    } else if let Some(message) = payload.downcast_ref::<String>() {
        format!("panicked: {message}")
    } else {
        "panicked".to_string()
    }
}

// ============================================================================
// Unit Tests
// ============================================================================
