// ============================================================================
// Decimal Conversion
// Turns an accepted ParsedNumber into rust_decimal::Decimal
// ============================================================================

use super::errors::{NumericError, NumericResult};
use crate::domain::ParsedNumber;
use rust_decimal::Decimal;

/// Largest scale a `Decimal` can carry
const MAX_DECIMAL_SCALE: usize = 28;

/// Accumulate ASCII digits into a mantissa, failing on i128 overflow.
fn accumulate(mantissa: i128, digits: &str) -> NumericResult<i128> {
    digits.chars().try_fold(mantissa, |acc, c| {
        let digit = c.to_digit(10).ok_or(NumericError::InvalidInput)?;
        acc.checked_mul(10)
            .and_then(|acc| acc.checked_add(i128::from(digit)))
            .ok_or(NumericError::Overflow)
    })
}

impl ParsedNumber<'_> {
    /// Convert to `rust_decimal::Decimal`, keeping the written scale.
    ///
    /// `"1.50"` becomes a decimal with scale 2, not 1.5.
    ///
    /// # Errors
    /// - `InvalidInput` if a digit run holds anything but ASCII `0-9`
    /// - `PrecisionLoss` if there are more than 28 fractional digits
    /// - `Overflow` if the digits do not fit in a 96-bit mantissa
    pub fn to_decimal(&self) -> NumericResult<Decimal> {
        let scale = self.fraction_len();
        if scale > MAX_DECIMAL_SCALE {
            return Err(NumericError::PrecisionLoss);
        }

        let mut mantissa = accumulate(0, self.integer_digits())?;
        if let Some(fraction) = self.fractional_digits() {
            mantissa = accumulate(mantissa, fraction)?;
        }
        if self.is_negative() {
            mantissa = -mantissa;
        }

        // scale <= 28 so the cast is lossless
        Decimal::try_from_i128_with_scale(mantissa, scale as u32)
            .map_err(|_| NumericError::Overflow)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Sign;

    #[test]
    fn test_to_decimal() {
        let n = ParsedNumber::new(Some(Sign::Plus), "123", Some("45"));
        let d = n.to_decimal().unwrap();
        assert_eq!(d, Decimal::new(12345, 2));
        assert_eq!(d.scale(), 2);
    }

    #[test]
    fn test_to_decimal_negative() {
        let n = ParsedNumber::new(Some(Sign::Minus), "1", Some("23"));
        assert_eq!(n.to_decimal().unwrap(), Decimal::new(-123, 2));
    }

    #[test]
    fn test_to_decimal_keeps_trailing_zeros() {
        let n = ParsedNumber::new(None, "0", Some("00"));
        let d = n.to_decimal().unwrap();
        assert!(d.is_zero());
        assert_eq!(d.to_string(), "0.00");
    }

    #[test]
    fn test_to_decimal_integer_only() {
        let n = ParsedNumber::new(None, "0042", None);
        let d = n.to_decimal().unwrap();
        assert_eq!(d, Decimal::from(42));
        assert_eq!(d.scale(), 0);
    }

    #[test]
    fn test_to_decimal_too_many_fraction_digits() {
        let fraction = "1".repeat(29);
        let n = ParsedNumber::new(None, "0", Some(&fraction));
        assert_eq!(n.to_decimal(), Err(NumericError::PrecisionLoss));
    }

    #[test]
    fn test_to_decimal_rejects_non_digits() {
        let n = ParsedNumber::new(None, "1+", None);
        assert_eq!(n.to_decimal(), Err(NumericError::InvalidInput));

        let n = ParsedNumber::new(None, "ab", None);
        assert_eq!(n.to_decimal(), Err(NumericError::InvalidInput));

        let n = ParsedNumber::new(Some(Sign::Minus), "1", Some("2/"));
        assert_eq!(n.to_decimal(), Err(NumericError::InvalidInput));
    }

    #[test]
    fn test_to_decimal_overflow() {
        // 30 nines exceed the 96-bit mantissa
        let digits = "9".repeat(30);
        let n = ParsedNumber::new(None, &digits, None);
        assert_eq!(n.to_decimal(), Err(NumericError::Overflow));

        // 45 nines exceed i128 before reaching rust_decimal
        let digits = "9".repeat(45);
        let n = ParsedNumber::new(None, &digits, None);
        assert_eq!(n.to_decimal(), Err(NumericError::Overflow));
    }
}
