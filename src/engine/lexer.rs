// ============================================================================
// Lexical Matcher
// Recognizes `[sign] digits [ '.' digits ]` without applying constraints
// ============================================================================

use crate::domain::{ParsedNumber, Sign};

/// Decimal separator; the only one recognized
pub const DECIMAL_POINT: u8 = b'.';

/// Single-pass scanner over the bytes of a candidate.
///
/// Matching is purely structural: the result says nothing about precision,
/// scale or sign policy. Only ASCII `0-9` count as digits, so whitespace,
/// exponents, separators and non-ASCII input all fail to match.
pub struct LexicalMatcher;

impl LexicalMatcher {
    /// Decompose a candidate, or `None` when it does not have decimal shape.
    ///
    /// # Example
    /// ```
    /// use number_validator::engine::LexicalMatcher;
    ///
    /// let n = LexicalMatcher::decompose("-12.50").unwrap();
    /// assert_eq!(n.integer_digits(), "12");
    /// assert_eq!(n.fractional_digits(), Some("50"));
    ///
    /// assert!(LexicalMatcher::decompose("12.").is_none());
    /// assert!(LexicalMatcher::decompose(".5").is_none());
    /// ```
    pub fn decompose(candidate: &str) -> Option<ParsedNumber<'_>> {
        let bytes = candidate.as_bytes();

        let sign = bytes.first().copied().and_then(Sign::from_byte);
        let int_start = usize::from(sign.is_some());

        let int_end = Self::digit_run_end(bytes, int_start);
        if int_end == int_start {
            return None;
        }
        let integer_digits = &candidate[int_start..int_end];

        if int_end == bytes.len() {
            return Some(ParsedNumber::new(sign, integer_digits, None));
        }

        if bytes[int_end] != DECIMAL_POINT {
            return None;
        }

        let frac_start = int_end + 1;
        let frac_end = Self::digit_run_end(bytes, frac_start);
        if frac_end == frac_start || frac_end != bytes.len() {
            return None;
        }

        Some(ParsedNumber::new(
            sign,
            integer_digits,
            Some(&candidate[frac_start..frac_end]),
        ))
    }

    /// Whether the candidate has decimal shape at all.
    #[inline]
    pub fn matches(candidate: &str) -> bool {
        Self::decompose(candidate).is_some()
    }

    /// Index one past the run of ASCII digits starting at `start`.
    #[inline]
    fn digit_run_end(bytes: &[u8], start: usize) -> usize {
        bytes
            .get(start..)
            .map_or(start, |rest| {
                start + rest.iter().take_while(|b| b.is_ascii_digit()).count()
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use quickcheck::quickcheck;

    #[test]
    fn test_integer_only() {
        let n = LexicalMatcher::decompose("123").unwrap();
        assert_eq!(n.sign(), None);
        assert_eq!(n.integer_digits(), "123");
        assert_eq!(n.fractional_digits(), None);
    }

    #[test]
    fn test_signed_fraction() {
        let n = LexicalMatcher::decompose("+1.23").unwrap();
        assert_eq!(n.sign(), Some(Sign::Plus));
        assert_eq!(n.integer_digits(), "1");
        assert_eq!(n.fractional_digits(), Some("23"));

        let n = LexicalMatcher::decompose("-0.00").unwrap();
        assert_eq!(n.sign(), Some(Sign::Minus));
        assert_eq!(n.integer_digits(), "0");
        assert_eq!(n.fractional_digits(), Some("00"));
    }

    #[test]
    fn test_leading_zeros_are_digits() {
        let n = LexicalMatcher::decompose("00.00").unwrap();
        assert_eq!(n.total_digits(), 4);
    }

    #[test]
    fn test_missing_digits_around_point() {
        assert!(LexicalMatcher::decompose(".0").is_none());
        assert!(LexicalMatcher::decompose("0.").is_none());
        assert!(LexicalMatcher::decompose(".").is_none());
        assert!(LexicalMatcher::decompose("-.5").is_none());
        assert!(LexicalMatcher::decompose("+5.").is_none());
    }

    #[test]
    fn test_bare_signs() {
        assert!(LexicalMatcher::decompose("").is_none());
        assert!(LexicalMatcher::decompose("+").is_none());
        assert!(LexicalMatcher::decompose("-").is_none());
        assert!(LexicalMatcher::decompose("+-1").is_none());
        assert!(LexicalMatcher::decompose("--1").is_none());
    }

    #[test]
    fn test_malformed_shapes() {
        for candidate in [
            "asd", "a23", "1e3", "1E3", "1.a23", "a.sd", "1.2.3", "1,5", "1_000", "1-", "1.+2",
            "0x1F", "١٢٣", "１２", "½", "1.5\u{0}",
        ] {
            assert!(
                LexicalMatcher::decompose(candidate).is_none(),
                "{:?} should not match",
                candidate
            );
        }
    }

    #[test]
    fn test_whitespace_never_trimmed() {
        for candidate in [" 0", "0 ", "1 .5", "1. 5", "\t1", "1\n", "- 1", "1\u{a0}"] {
            assert!(!LexicalMatcher::matches(candidate), "{:?}", candidate);
        }
    }

    #[test]
    fn test_long_digit_runs() {
        let digits = "9".repeat(1000);
        let candidate = format!("-{}.{}", digits, digits);
        let n = LexicalMatcher::decompose(&candidate).unwrap();
        assert_eq!(n.total_digits(), 2000);
    }

    quickcheck! {
        fn prop_whitespace_rejected(prefix: String, suffix: String) -> bool {
            let candidate = format!("{} {}", prefix, suffix);
            !LexicalMatcher::matches(&candidate)
        }

        fn prop_integers_match(value: u64, negative: bool) -> bool {
            let candidate = if negative { format!("-{}", value) } else { value.to_string() };
            LexicalMatcher::decompose(&candidate)
                .map(|n| n.is_negative() == negative && n.fractional_digits().is_none())
                .unwrap_or(false)
        }
    }
}
