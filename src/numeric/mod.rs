// ============================================================================
// Numeric Module
// Error types and decimal conversion for validated numbers
// ============================================================================
//
// This module provides:
// - ConfigError: rejected precision/scale combinations
// - NumericError: failures converting an accepted number to a Decimal
// - ParsedNumber::to_decimal: rust_decimal conversion of accepted numbers
//
// Design principles:
// - Configuration errors and validation outcomes never share a type
// - All conversions return Result (no panics)

mod conversion;
mod errors;

pub use errors::{ConfigError, NumericError, NumericResult};
