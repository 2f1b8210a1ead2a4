// ============================================================================
// Rejection
// Why a candidate is not a conforming number
// ============================================================================

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Reason a candidate was rejected.
///
/// A rejection is an ordinary validation outcome, not an error: the
/// validator itself is fine, the candidate just does not conform.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Rejection {
    /// No candidate was supplied
    Missing,

    /// Candidate is the empty string
    Empty,

    /// Candidate contains whitespace somewhere
    ContainsWhitespace,

    /// Candidate does not have the shape `[sign] digits [ '.' digits ]`
    Malformed,

    /// Minus sign under a positive-only policy
    NegativeNotAllowed,

    /// More digits (plus an explicit sign) than the configured precision
    PrecisionExceeded { digits: usize, precision: u32 },

    /// More fractional digits than the configured scale
    ScaleExceeded { fraction_digits: usize, scale: u32 },
}

impl Rejection {
    /// True for rejections decided by input shape, before any constraint rule.
    pub fn is_structural(&self) -> bool {
        matches!(
            self,
            Rejection::Missing | Rejection::Empty | Rejection::ContainsWhitespace | Rejection::Malformed
        )
    }
}

impl fmt::Display for Rejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Rejection::Missing => write!(f, "no candidate supplied"),
            Rejection::Empty => write!(f, "candidate is empty"),
            Rejection::ContainsWhitespace => write!(f, "candidate contains whitespace"),
            Rejection::Malformed => write!(f, "candidate is not a decimal number"),
            Rejection::NegativeNotAllowed => write!(f, "negative numbers are not allowed"),
            Rejection::PrecisionExceeded { digits, precision } => write!(
                f,
                "{} digits exceed precision {}",
                digits, precision
            ),
            Rejection::ScaleExceeded {
                fraction_digits,
                scale,
            } => write!(
                f,
                "{} fractional digits exceed scale {}",
                fraction_digits, scale
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        assert_eq!(Rejection::Malformed.to_string(), "candidate is not a decimal number");
        assert_eq!(
            Rejection::PrecisionExceeded {
                digits: 5,
                precision: 4
            }
            .to_string(),
            "5 digits exceed precision 4"
        );
        assert_eq!(
            Rejection::ScaleExceeded {
                fraction_digits: 3,
                scale: 2
            }
            .to_string(),
            "3 fractional digits exceed scale 2"
        );
    }

    #[test]
    fn test_is_structural() {
        assert!(Rejection::Missing.is_structural());
        assert!(Rejection::ContainsWhitespace.is_structural());
        assert!(Rejection::Malformed.is_structural());
        assert!(!Rejection::NegativeNotAllowed.is_structural());
        assert!(!Rejection::ScaleExceeded {
            fraction_digits: 3,
            scale: 2
        }
        .is_structural());
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_serde_roundtrip() {
        let r = Rejection::PrecisionExceeded {
            digits: 5,
            precision: 4,
        };
        let json = serde_json::to_string(&r).unwrap();
        let back: Rejection = serde_json::from_str(&json).unwrap();
        assert_eq!(back, r);
    }
}
