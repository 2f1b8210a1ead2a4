// ============================================================================
// Constraint Checker
// Applies an ordered list of rules to a matched number
// ============================================================================

use crate::domain::{ConstraintConfig, ParsedNumber, Rejection};
use crate::engine::rules::{PrecisionRule, ScaleRule, SignRule};
use crate::interfaces::NumberRule;

/// Ordered rule set. The first failing rule decides the rejection.
pub struct ConstraintChecker {
    rules: Vec<Box<dyn NumberRule>>,
}

impl ConstraintChecker {
    /// Create a checker with an explicit rule list
    pub fn new(rules: Vec<Box<dyn NumberRule>>) -> Self {
        Self { rules }
    }

    /// Standard rules for a configuration: sign, then precision, then scale
    pub fn from_config(config: &ConstraintConfig) -> Self {
        Self::new(vec![
            Box::new(SignRule::new(config.only_positive())),
            Box::new(PrecisionRule::new(config.precision())),
            Box::new(ScaleRule::new(config.scale())),
        ])
    }

    /// Check a number against every rule in order
    pub fn check(&self, number: &ParsedNumber<'_>) -> Result<(), Rejection> {
        self.rules.iter().try_for_each(|rule| rule.check(number))
    }

    /// Names of the rules, in evaluation order
    pub fn rule_names(&self) -> Vec<&str> {
        self.rules.iter().map(|rule| rule.name()).collect()
    }
}
