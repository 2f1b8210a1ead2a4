// ============================================================================
// Parsed Number
// Structural decomposition of a candidate string
// ============================================================================

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Explicit leading sign of a candidate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Sign {
    Plus,
    Minus,
}

impl Sign {
    /// Map a leading byte to a sign, if it is one.
    #[inline]
    pub const fn from_byte(byte: u8) -> Option<Self> {
        match byte {
            b'+' => Some(Sign::Plus),
            b'-' => Some(Sign::Minus),
            _ => None,
        }
    }

    #[inline]
    pub const fn as_char(self) -> char {
        match self {
            Sign::Plus => '+',
            Sign::Minus => '-',
        }
    }
}

/// A candidate that matched `[sign] digits [ '.' digits ]`.
///
/// Borrows its digit runs from the candidate and lives no longer than a
/// single validation call. Only the lexical matcher builds one, so digit
/// runs always hold ASCII `0-9` only and the integer run is never empty.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct ParsedNumber<'a> {
    /// Leading sign, if one was written
    sign: Option<Sign>,

    /// Digits before the decimal point
    integer_digits: &'a str,

    /// Digits after the decimal point, absent for integer-only candidates
    fractional_digits: Option<&'a str>,
}

impl<'a> ParsedNumber<'a> {
    pub(crate) fn new(
        sign: Option<Sign>,
        integer_digits: &'a str,
        fractional_digits: Option<&'a str>,
    ) -> Self {
        Self {
            sign,
            integer_digits,
            fractional_digits,
        }
    }

    #[inline]
    pub fn sign(&self) -> Option<Sign> {
        self.sign
    }

    #[inline]
    pub fn integer_digits(&self) -> &'a str {
        self.integer_digits
    }

    #[inline]
    pub fn fractional_digits(&self) -> Option<&'a str> {
        self.fractional_digits
    }

    /// Count of fractional digits (zero when there is no decimal point).
    #[inline]
    pub fn fraction_len(&self) -> usize {
        self.fractional_digits.map_or(0, str::len)
    }

    /// Integer plus fractional digits, without the sign.
    #[inline]
    pub fn total_digits(&self) -> usize {
        self.integer_digits.len() + self.fraction_len()
    }

    /// Characters measured against precision: all digits plus an explicit
    /// sign, `+` or `-`. The decimal point is not counted.
    #[inline]
    pub fn width(&self) -> usize {
        self.total_digits() + usize::from(self.sign.is_some())
    }

    #[inline]
    pub fn is_negative(&self) -> bool {
        self.sign == Some(Sign::Minus)
    }
}

impl fmt::Display for ParsedNumber<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(sign) = self.sign {
            write!(f, "{}", sign.as_char())?;
        }
        write!(f, "{}", self.integer_digits)?;
        if let Some(fraction) = self.fractional_digits {
            write!(f, ".{}", fraction)?;
        }
        Ok(())
    }
}
