// ============================================================================
// Dispatch Errors
// ============================================================================

/// One handler that failed while an event was being dispatched
#[derive(Debug, Clone, PartialEq)]
pub struct HandlerFailure {
    /// Position of the handler in the registration order
    pub position: usize,
    pub handler: &'static str,
    pub message: String,
}

impl std::fmt::Display for HandlerFailure {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{} {}: {}", self.position, self.handler, self.message)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum DispatchError {
    /// Every handler ran; these are the ones that failed
    #[error("{} handler(s) failed for {event_type}: {}", .failures.len(), join_failures(.failures))]
    HandlersFailed {
        event_type: &'static str,
        failures: Vec<HandlerFailure>,
    },
}

impl DispatchError {
    pub fn failures(&self) -> &[HandlerFailure] {
        match self {
            DispatchError::HandlersFailed { failures, .. } => failures,
        }
    }
}

fn join_failures(failures: &[HandlerFailure]) -> String {
    failures
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}
