// ============================================================================
// Number Rule Interface
// Defines the contract for pluggable constraint rules
// ============================================================================

use crate::domain::{ParsedNumber, Rejection};

/// Strategy pattern interface for constraints applied to a matched number
/// Implementations: SignRule, PrecisionRule, ScaleRule
pub trait NumberRule: Send + Sync {
    /// Check a structurally valid number against this rule
    ///
    /// # Returns
    /// `Ok(())` when the number passes, otherwise the reason it does not
    fn check(&self, number: &ParsedNumber<'_>) -> Result<(), Rejection>;

    /// Get the rule name for logging
    fn name(&self) -> &str;

    /// Convenience wrapper over `check`
    fn passes(&self, number: &ParsedNumber<'_>) -> bool {
        self.check(number).is_ok()
    }
}
