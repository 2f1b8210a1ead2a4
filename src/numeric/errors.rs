// ============================================================================
// Numeric Errors
// Error types for configuration and decimal conversion
// ============================================================================

use std::fmt;

/// Invalid validator configuration, raised at construction time only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ConfigError {
    /// Precision must be strictly positive
    NonPositivePrecision { precision: i32 },
    /// Scale must not be negative
    NegativeScale { scale: i32 },
    /// Scale must be strictly less than precision
    ScaleNotBelowPrecision { precision: i32, scale: i32 },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::NonPositivePrecision { precision } => {
                write!(f, "invalid configuration: precision must be positive, got {}", precision)
            },
            ConfigError::NegativeScale { scale } => {
                write!(f, "invalid configuration: scale must be non-negative, got {}", scale)
            },
            ConfigError::ScaleNotBelowPrecision { precision, scale } => write!(
                f,
                "invalid configuration: scale {} must be less than precision {}",
                scale, precision
            ),
        }
    }
}

impl std::error::Error for ConfigError {}

/// Errors that can occur when converting an accepted number to a decimal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NumericError {
    /// Mantissa does not fit in 96 bits
    Overflow,
    /// More fractional digits than a decimal can carry
    PrecisionLoss,
    /// Digit run holds a character outside ASCII `0-9`
    InvalidInput,
}

impl fmt::Display for NumericError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NumericError::Overflow => {
                write!(f, "arithmetic overflow: value exceeds decimal range")
            },
            NumericError::PrecisionLoss => write!(
                f,
                "precision loss: conversion would lose significant digits"
            ),
            NumericError::InvalidInput => write!(f, "invalid input: not a decimal digit"),
        }
    }
}

impl std::error::Error for NumericError {}

/// Result type alias for numeric operations
pub type NumericResult<T> = Result<T, NumericError>;
