use prometheus::{HistogramOpts, HistogramVec, IntCounterVec, Opts, Registry};

// ============================================================================
// Metrics Module - Prometheus metrics for event dispatch
// ============================================================================
//
// Provides metrics for:
// - Events notified per event type
// - Handler invocations and failures
// - Time spent running the handlers of one event
//
// The registry is owned here; callers decide how to expose it.
// ============================================================================

pub struct DispatchMetrics {
    registry: Registry,

    pub events_notified: IntCounterVec,
    pub handler_invocations: IntCounterVec,
    pub handler_failures: IntCounterVec,
    pub dispatch_duration: HistogramVec,
}

impl DispatchMetrics {
    pub fn new() -> anyhow::Result<Self> {
        let registry = Registry::new();

        let events_notified = IntCounterVec::new(
            Opts::new("domain_events_notified_total", "Total domain events notified"),
            &["event_type"],
        )?;
        registry.register(Box::new(events_notified.clone()))?;

        let handler_invocations = IntCounterVec::new(
            Opts::new("domain_event_handler_invocations_total", "Total handler invocations"),
            &["event_type"],
        )?;
        registry.register(Box::new(handler_invocations.clone()))?;

        let handler_failures = IntCounterVec::new(
            Opts::new("domain_event_handler_failures_total", "Total handler invocations that failed"),
            &["event_type", "handler"],
        )?;
        registry.register(Box::new(handler_failures.clone()))?;

        let dispatch_duration = HistogramVec::new(
            HistogramOpts::new("domain_event_dispatch_duration_seconds", "Time spent running all handlers of one event")
                .buckets(vec![0.0001, 0.0005, 0.001, 0.005, 0.01, 0.05, 0.1, 0.5]),
            &["event_type"],
        )?;
        registry.register(Box::new(dispatch_duration.clone()))?;

        Ok(Self {
            registry,
            events_notified,
            handler_invocations,
            handler_failures,
            dispatch_duration,
        })
    }

    /// Get the Prometheus registry for exposing metrics
    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    /// Helper to record one notify call that reached at least one handler
    pub fn record_dispatch(&self, event_type: &str, handlers: usize, duration_secs: f64) {
        self.events_notified.with_label_values(&[event_type]).inc();
        self.handler_invocations
            .with_label_values(&[event_type])
            .inc_by(handlers as u64);
        self.dispatch_duration.with_label_values(&[event_type]).observe(duration_secs);
    }

    /// Helper to record a failed handler
    pub fn record_handler_failure(&self, event_type: &str, handler: &str) {
        self.handler_failures.with_label_values(&[event_type, handler]).inc();
    }
}
