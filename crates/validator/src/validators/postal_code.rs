//! Israeli postal code (Mikud) validator.
//!
//! Postal codes are exactly 7 digits after separators are removed. There is
//! no check digit and no padding.

use crate::foundation::{RawValue, ReasonCode, Validate, ValidationError};
use crate::outcome::{IdentifierKind, Outcome, rejected};
use crate::sanitizer::digits_only;

/// Number of digits in a postal code.
pub const LENGTH: usize = 7;

option_enum! {
    /// Output style for [`format`].
    #[derive(Default)]
    pub enum PostalStyle {
        /// `2610101`
        #[default]
        Compact => "compact",
        /// `26101 01`
        Spaced => "spaced",
    }
}

fn well_formed(digits: &str) -> bool {
    digits.len() == LENGTH && digits.bytes().all(|b| b.is_ascii_digit())
}

fn check(digits: Option<&str>) -> Result<(), ReasonCode> {
    let reason = match digits {
        None | Some("") => ReasonCode::Blank,
        Some(digits) if well_formed(digits) => return Ok(()),
        Some(_) => ReasonCode::WrongLength,
    };
    Err(rejected(IdentifierKind::PostalCode, reason))
}

/// Validates an Israeli postal code.
///
/// # Examples
///
/// ```rust
/// use israeli_validator::validators::postal_code;
///
/// assert!(postal_code::valid("2610101"));
/// assert!(postal_code::valid("26101-01"));
/// assert!(!postal_code::valid("261010"));
/// ```
#[must_use]
pub fn valid<'a>(value: impl Into<RawValue<'a>>) -> bool {
    invalid_reason(value).is_none()
}

/// Returns `blank`, `wrong_length`, or `None` for a valid postal code.
#[must_use]
pub fn invalid_reason<'a>(value: impl Into<RawValue<'a>>) -> Option<ReasonCode> {
    check(digits_only(value).as_deref()).err()
}

/// Formats a valid postal code; `None` when invalid.
///
/// # Examples
///
/// ```rust
/// use israeli_validator::validators::postal_code::{self, PostalStyle};
///
/// assert_eq!(postal_code::format("26101 01", PostalStyle::Compact).as_deref(), Some("2610101"));
/// assert_eq!(postal_code::format("2610101", PostalStyle::Spaced).as_deref(), Some("26101 01"));
/// ```
#[must_use]
pub fn format<'a>(value: impl Into<RawValue<'a>>, style: PostalStyle) -> Option<String> {
    let digits = digits_only(value)?;
    check(Some(&digits)).ok()?;

    Some(match style {
        PostalStyle::Compact => digits,
        PostalStyle::Spaced => format!("{} {}", &digits[..5], &digits[5..]),
    })
}

/// Validates and returns the full [`Outcome`].
#[must_use]
pub fn parse<'a>(value: impl Into<RawValue<'a>>) -> Outcome {
    let raw = value.into();
    let digits = digits_only(&raw);

    match check(digits.as_deref()) {
        Ok(()) => Outcome::valid(
            IdentifierKind::PostalCode,
            raw,
            digits.unwrap_or_default(),
            None,
        ),
        Err(reason) => Outcome::invalid(IdentifierKind::PostalCode, raw, digits, reason),
    }
}

/// [`Validate`] implementation for Israeli postal codes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct IsraeliPostalCode;

impl Validate for IsraeliPostalCode {
    type Input = str;

    fn validate(&self, input: &str) -> Result<(), ValidationError> {
        match invalid_reason(input) {
            None => Ok(()),
            Some(reason) => Err(ValidationError::from_reason(reason)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_codes() {
        assert!(valid("2610101"));
        assert!(valid("0000000"));
        assert!(valid("26101 01"));
        assert!(valid(2_610_101_u32));
    }

    #[test]
    fn test_wrong_length() {
        assert_eq!(invalid_reason("261010"), Some(ReasonCode::WrongLength));
        assert_eq!(invalid_reason("26101011"), Some(ReasonCode::WrongLength));
        assert_eq!(invalid_reason("ABCDEFG"), Some(ReasonCode::WrongLength));
    }

    #[test]
    fn test_blank() {
        assert_eq!(invalid_reason(""), Some(ReasonCode::Blank));
        assert_eq!(invalid_reason("  "), Some(ReasonCode::Blank));
        assert_eq!(invalid_reason(None::<&str>), Some(ReasonCode::Blank));
    }

    #[test]
    fn test_integer_input_is_not_padded() {
        // 0261010 as an integer loses its leading zero.
        assert!(!valid(261_010_u32));
    }

    #[test]
    fn test_format_styles() {
        assert_eq!(
            format("2610101", PostalStyle::Compact).as_deref(),
            Some("2610101")
        );
        assert_eq!(
            format("26101-01", PostalStyle::Spaced).as_deref(),
            Some("26101 01")
        );
        assert_eq!(format("123", PostalStyle::Compact), None);
    }

    #[test]
    fn test_parse() {
        let outcome = parse("26101 01");
        assert!(outcome.is_valid());
        assert_eq!(outcome.normalized(), Some("2610101"));
        assert_eq!(outcome.formatted().as_deref(), Some("2610101"));
        assert_eq!(
            outcome.formatted_as(PostalStyle::Spaced).as_deref(),
            Some("26101 01")
        );
    }

    #[test]
    fn test_validator_object() {
        assert!(IsraeliPostalCode.validate("2610101").is_ok());
        assert_eq!(
            IsraeliPostalCode.validate("12").unwrap_err().code,
            "wrong_length"
        );
    }
}
