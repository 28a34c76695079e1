// ============================================================================
// ddd_events - Domain entities with an in-process event dispatcher
// ============================================================================
//
// - event_dispatch: generic registry of handlers per event kind
// - domain: Customer, Product and Checkout entities, their events and handlers
// - metrics: Prometheus counters for dispatch activity
//
// ============================================================================

pub mod domain;
pub mod event_dispatch;
pub mod metrics;
