// ============================================================================
// Number Validator
// Facade composing configuration, lexical matching and constraint checks
// ============================================================================

use crate::domain::{ConstraintConfig, ParsedNumber, Rejection};
use crate::engine::{ConstraintChecker, LexicalMatcher};
use crate::interfaces::{EventHandler, NoOpEventHandler, ValidationEvent};
use crate::numeric::ConfigError;
use std::fmt;
use std::sync::Arc;

/// Decides whether candidate strings are conforming decimal numbers.
///
/// Configured once, then evaluated any number of times. Validation never
/// mutates the validator, so one instance can be shared across threads.
#[derive(Clone)]
pub struct NumberValidator {
    /// Validated constraints
    config: ConstraintConfig,

    /// Rules derived from the constraints
    checker: Arc<ConstraintChecker>,

    /// Event handler for validation outcomes
    event_handler: Arc<dyn EventHandler>,
}

impl NumberValidator {
    /// Create a validator, failing fast on an invalid configuration.
    ///
    /// # Errors
    /// Any `ConfigError` from [`ConstraintConfig::new`].
    ///
    /// # Example
    /// ```
    /// use number_validator::prelude::*;
    ///
    /// let validator = NumberValidator::new(4, 2, false).unwrap();
    /// assert!(validator.is_valid("-1.23"));
    /// assert!(!validator.is_valid("1.234"));
    ///
    /// assert!(NumberValidator::new(2, 2, false).is_err());
    /// ```
    pub fn new(precision: i32, scale: i32, only_positive: bool) -> Result<Self, ConfigError> {
        ConstraintConfig::new(precision, scale, only_positive).map(Self::from_config)
    }

    /// Create a validator from an already validated configuration
    pub fn from_config(config: ConstraintConfig) -> Self {
        tracing::debug!(
            precision = config.precision(),
            scale = config.scale(),
            only_positive = config.only_positive(),
            "Created number validator"
        );

        Self {
            config,
            checker: Arc::new(ConstraintChecker::from_config(&config)),
            event_handler: Arc::new(NoOpEventHandler),
        }
    }

    /// Builder method: Set the event handler
    pub fn with_event_handler(mut self, handler: Arc<dyn EventHandler>) -> Self {
        self.event_handler = handler;
        self
    }

    #[inline]
    pub fn config(&self) -> &ConstraintConfig {
        &self.config
    }

    /// Decide whether `candidate` is a conforming number.
    ///
    /// `None` stands for an absent candidate and is never valid. This never
    /// panics; a non-conforming candidate is simply `false`.
    pub fn is_valid_number(&self, candidate: Option<&str>) -> bool {
        self.explain(candidate).is_ok()
    }

    /// Shorthand for `is_valid_number(Some(candidate))`
    #[inline]
    pub fn is_valid(&self, candidate: &str) -> bool {
        self.is_valid_number(Some(candidate))
    }

    /// Validate and report either the decomposition or why it was rejected.
    pub fn explain<'a>(&self, candidate: Option<&'a str>) -> Result<ParsedNumber<'a>, Rejection> {
        let outcome = self.evaluate(candidate);

        let event = match &outcome {
            // Only present candidates can be accepted
            Ok(_) => ValidationEvent::Accepted {
                candidate: candidate.unwrap_or_default(),
            },
            Err(reason) => ValidationEvent::Rejected {
                candidate,
                reason: *reason,
            },
        };
        self.event_handler.on_event(&event);

        outcome
    }

    fn evaluate<'a>(&self, candidate: Option<&'a str>) -> Result<ParsedNumber<'a>, Rejection> {
        let candidate = candidate.ok_or(Rejection::Missing)?;
        if candidate.is_empty() {
            return Err(Rejection::Empty);
        }
        if candidate.chars().any(char::is_whitespace) {
            return Err(Rejection::ContainsWhitespace);
        }

        let number = LexicalMatcher::decompose(candidate).ok_or(Rejection::Malformed)?;
        self.checker.check(&number)?;
        Ok(number)
    }
}

impl fmt::Debug for NumberValidator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NumberValidator")
            .field("config", &self.config)
            .field("rules", &self.checker.rule_names())
            .finish()
    }
}
