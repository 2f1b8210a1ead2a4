// ============================================================================
// Domain Models Module
// Contains the configuration and value objects of validation
// ============================================================================

pub mod config;
pub mod number;
pub mod rejection;

pub use config::ConstraintConfig;
pub use number::{ParsedNumber, Sign};
pub use rejection::Rejection;
