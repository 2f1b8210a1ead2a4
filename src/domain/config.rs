// ============================================================================
// Constraint Configuration
// Precision, scale and sign policy for a validator
// ============================================================================

use crate::numeric::ConfigError;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Immutable numeric constraints, validated once at construction.
///
/// Invariant: `precision > 0` and `scale < precision`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "RawConstraintConfig"))]
pub struct ConstraintConfig {
    /// Maximum count of integer plus fractional digits
    precision: u32,

    /// Maximum count of fractional digits
    scale: u32,

    /// Whether a leading minus sign is rejected
    only_positive: bool,
}

impl ConstraintConfig {
    /// Create a configuration, rejecting impossible combinations.
    ///
    /// # Errors
    /// - `NonPositivePrecision` if `precision <= 0`
    /// - `NegativeScale` if `scale < 0`
    /// - `ScaleNotBelowPrecision` if `scale >= precision`
    pub fn new(precision: i32, scale: i32, only_positive: bool) -> Result<Self, ConfigError> {
        Self::check(precision, scale).inspect_err(|err| {
            tracing::warn!(precision, scale, only_positive, "Rejected configuration: {}", err);
        })?;

        // Both values are known non-negative here
        Ok(Self {
            precision: precision.unsigned_abs(),
            scale: scale.unsigned_abs(),
            only_positive,
        })
    }

    fn check(precision: i32, scale: i32) -> Result<(), ConfigError> {
        if precision <= 0 {
            return Err(ConfigError::NonPositivePrecision { precision });
        }
        if scale < 0 {
            return Err(ConfigError::NegativeScale { scale });
        }
        if scale >= precision {
            return Err(ConfigError::ScaleNotBelowPrecision { precision, scale });
        }
        Ok(())
    }

    #[inline]
    pub const fn precision(&self) -> u32 {
        self.precision
    }

    #[inline]
    pub const fn scale(&self) -> u32 {
        self.scale
    }

    #[inline]
    pub const fn only_positive(&self) -> bool {
        self.only_positive
    }

    /// Largest number of integer digits an accepted candidate can have.
    #[inline]
    pub const fn max_integer_digits(&self) -> u32 {
        self.precision - self.scale
    }
}

// ============================================================================
// Deserialization goes through the same checks as `new`
// ============================================================================

#[cfg(feature = "serde")]
#[derive(Deserialize)]
struct RawConstraintConfig {
    precision: i32,
    scale: i32,
    #[serde(default)]
    only_positive: bool,
}

#[cfg(feature = "serde")]
impl TryFrom<RawConstraintConfig> for ConstraintConfig {
    type Error = ConfigError;

    fn try_from(raw: RawConstraintConfig) -> Result<Self, Self::Error> {
        Self::new(raw.precision, raw.scale, raw.only_positive)
    }
}
