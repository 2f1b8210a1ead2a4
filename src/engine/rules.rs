// ============================================================================
// Constraint Rules
// Sign, precision and scale checks for a matched number
// ============================================================================

use crate::domain::{ParsedNumber, Rejection};
use crate::interfaces::NumberRule;

/// Rejects a minus sign when only positive numbers are allowed.
/// A plus sign always passes.
pub struct SignRule {
    only_positive: bool,
}

impl SignRule {
    pub fn new(only_positive: bool) -> Self {
        Self { only_positive }
    }
}

impl NumberRule for SignRule {
    fn check(&self, number: &ParsedNumber<'_>) -> Result<(), Rejection> {
        if self.only_positive && number.is_negative() {
            return Err(Rejection::NegativeNotAllowed);
        }
        Ok(())
    }

    fn name(&self) -> &str {
        "sign"
    }
}

/// Limits integer plus fractional digits. An explicit `+` or `-` takes up
/// one place of precision as well.
pub struct PrecisionRule {
    precision: u32,
}

impl PrecisionRule {
    pub fn new(precision: u32) -> Self {
        Self { precision }
    }
}

impl NumberRule for PrecisionRule {
    fn check(&self, number: &ParsedNumber<'_>) -> Result<(), Rejection> {
        let digits = number.width();
        // u32 may not fit in usize on 16-bit targets
        if digits > usize::try_from(self.precision).unwrap_or(usize::MAX) {
            return Err(Rejection::PrecisionExceeded {
                digits,
                precision: self.precision,
            });
        }
        Ok(())
    }

    fn name(&self) -> &str {
        "precision"
    }
}

/// Limits fractional digits. Integer-only numbers always pass.
pub struct ScaleRule {
    scale: u32,
}

impl ScaleRule {
    pub fn new(scale: u32) -> Self {
        Self { scale }
    }
}

impl NumberRule for ScaleRule {
    fn check(&self, number: &ParsedNumber<'_>) -> Result<(), Rejection> {
        let fraction_digits = number.fraction_len();
        if fraction_digits > usize::try_from(self.scale).unwrap_or(usize::MAX) {
            return Err(Rejection::ScaleExceeded {
                fraction_digits,
                scale: self.scale,
            });
        }
        Ok(())
    }

    fn name(&self) -> &str {
        "scale"
    }
}
