// ============================================================================
// Number Validator Library
// Precision, scale and sign validation for decimal number strings
// ============================================================================

//! # Number Validator
//!
//! Decides whether arbitrary strings are decimal numbers that fit a
//! configured precision, scale and sign policy.
//!
//! ## Features
//!
//! - **Fail-fast configuration**: impossible precision/scale pairs are
//!   rejected at construction
//! - **Strict grammar**: `[sign] digits [ '.' digits ]`, ASCII digits only,
//!   no trimming, no exponents
//! - **Pluggable rules** behind the [`interfaces::NumberRule`] trait
//! - **Rejection reasons** via [`NumberValidator::explain`](engine::NumberValidator::explain)
//! - **Stateless validation**: one validator can be shared across threads
//!
//! ## Example
//!
//! ```rust
//! use number_validator::prelude::*;
//!
//! let validator = NumberValidator::new(4, 2, false).unwrap();
//!
//! assert!(validator.is_valid("+1.23"));
//! assert!(validator.is_valid("-1.23"));
//! assert!(!validator.is_valid("-12.23")); // sign + 4 digits > precision 4
//! assert!(!validator.is_valid("1.234")); // 3 fractional digits > scale 2
//! assert!(!validator.is_valid_number(None));
//!
//! assert_eq!(
//!     validator.explain(Some("1.234")),
//!     Err(Rejection::ScaleExceeded { fraction_digits: 3, scale: 2 })
//! );
//! ```

pub mod domain;
pub mod engine;
pub mod interfaces;
pub mod numeric;

// Re-exports for convenience
pub mod prelude {
    pub use crate::domain::{ConstraintConfig, ParsedNumber, Rejection, Sign};
    pub use crate::engine::{ConstraintChecker, LexicalMatcher, NumberValidator};
    pub use crate::interfaces::{
        EventHandler, LoggingEventHandler, NoOpEventHandler, NumberRule, ValidationEvent,
    };
    pub use crate::numeric::{ConfigError, NumericError, NumericResult};
}
