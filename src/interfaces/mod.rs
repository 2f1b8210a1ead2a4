// ============================================================================
// Interfaces Module
// Contains all trait definitions and contracts
// ============================================================================

mod event_handler;
mod number_rule;

pub use event_handler::{EventHandler, LoggingEventHandler, NoOpEventHandler, ValidationEvent};
pub use number_rule::NumberRule;
