// ============================================================================
// Event Handler Interface
// Defines the contract for observing validation outcomes
// ============================================================================

use crate::domain::Rejection;

#[cfg(feature = "serde")]
use serde::Serialize;

/// Events emitted by the validator, one per validation call
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub enum ValidationEvent<'a> {
    /// Candidate conforms to the configured constraints
    Accepted { candidate: &'a str },

    /// Candidate was rejected with reason
    Rejected {
        candidate: Option<&'a str>,
        reason: Rejection,
    },
}

impl ValidationEvent<'_> {
    pub fn is_accepted(&self) -> bool {
        matches!(self, ValidationEvent::Accepted { .. })
    }
}

/// Event handler trait for processing validation events
/// Implementations can handle logging, metrics, auditing, etc.
///
/// Handlers are shared across threads and must not rely on exclusive access.
pub trait EventHandler: Send + Sync {
    /// Handle a validation event
    fn on_event(&self, event: &ValidationEvent<'_>);
}

/// No-op event handler, the validator default
pub struct NoOpEventHandler;

impl EventHandler for NoOpEventHandler {
    fn on_event(&self, _event: &ValidationEvent<'_>) {
        // Do nothing
    }
}

/// Logging event handler
pub struct LoggingEventHandler;

impl EventHandler for LoggingEventHandler {
    fn on_event(&self, event: &ValidationEvent<'_>) {
        match event {
            ValidationEvent::Accepted { candidate } => {
                tracing::debug!(candidate, "Number accepted");
            },
            ValidationEvent::Rejected { candidate, reason } => {
                tracing::debug!(?candidate, %reason, "Number rejected");
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_noop_handler() {
        let handler = NoOpEventHandler;
        handler.on_event(&ValidationEvent::Accepted { candidate: "1.23" });
        // Should not panic
    }

    #[test]
    fn test_logging_handler() {
        let handler = LoggingEventHandler;
        handler.on_event(&ValidationEvent::Rejected {
            candidate: None,
            reason: Rejection::Missing,
        });
        handler.on_event(&ValidationEvent::Accepted { candidate: "-1" });
        // Should not panic without a subscriber
    }

    #[test]
    fn test_is_accepted() {
        assert!(ValidationEvent::Accepted { candidate: "0" }.is_accepted());
        assert!(!ValidationEvent::Rejected {
            candidate: Some("x"),
            reason: Rejection::Malformed,
        }
        .is_accepted());
    }
}
