//! Israeli ID number (Mispar Zehut) validator.
//!
//! ID numbers are 9 digits, the last being a Luhn check digit. Shorter
//! inputs are left-padded with zeros (older IDs are often written without
//! their leading zero); longer inputs are always rejected.

use crate::checksum::luhn_valid;
use crate::foundation::{RawValue, ReasonCode, Validate, ValidationError};
use crate::outcome::{IdentifierKind, Outcome, rejected};
use crate::sanitizer::digits_only;

/// Number of digits in a canonical ID.
pub const LENGTH: usize = 9;

/// Runs the pipeline on already-sanitized input and returns the padded ID.
fn check(digits: Option<&str>) -> Result<String, ReasonCode> {
    let digits = match digits {
        Some(digits) if !digits.is_empty() => digits,
        _ => return Err(rejected(IdentifierKind::Id, ReasonCode::Blank)),
    };

    let padded = format!("{digits:0>LENGTH$}");
    if padded.len() != LENGTH || !padded.bytes().all(|b| b.is_ascii_digit()) {
        return Err(rejected(IdentifierKind::Id, ReasonCode::WrongLength));
    }

    if !luhn_valid(&padded) {
        return Err(rejected(IdentifierKind::Id, ReasonCode::InvalidChecksum));
    }

    Ok(padded)
}

/// Validates an Israeli ID number.
///
/// # Examples
///
/// ```rust
/// use israeli_validator::validators::id;
///
/// assert!(id::valid("123456782"));
/// assert!(id::valid("12345678-2"));
/// assert!(id::valid(123_456_782_u32));
/// assert!(id::valid("10000008")); // pads to 010000008
/// assert!(!id::valid("123456789"));
/// assert!(!id::valid("1234567890"));
/// ```
#[must_use]
pub fn valid<'a>(value: impl Into<RawValue<'a>>) -> bool {
    invalid_reason(value).is_none()
}

/// Returns the first failing condition, or `None` for a valid ID.
///
/// Order: `blank`, `wrong_length`, `invalid_checksum`.
#[must_use]
pub fn invalid_reason<'a>(value: impl Into<RawValue<'a>>) -> Option<ReasonCode> {
    check(digits_only(value).as_deref()).err()
}

/// Returns the zero-padded 9-digit ID, or `None` when invalid.
///
/// # Examples
///
/// ```rust
/// use israeli_validator::validators::id;
///
/// assert_eq!(id::format("123-456-782").as_deref(), Some("123456782"));
/// assert_eq!(id::format(10_000_008_u32).as_deref(), Some("010000008"));
/// assert_eq!(id::format("123456789"), None);
/// ```
#[must_use]
pub fn format<'a>(value: impl Into<RawValue<'a>>) -> Option<String> {
    check(digits_only(value).as_deref()).ok()
}

/// Validates and returns the full [`Outcome`].
#[must_use]
pub fn parse<'a>(value: impl Into<RawValue<'a>>) -> Outcome {
    let raw = value.into();
    let digits = digits_only(&raw);

    match check(digits.as_deref()) {
        Ok(padded) => Outcome::valid(IdentifierKind::Id, raw, padded, None),
        Err(reason) => Outcome::invalid(IdentifierKind::Id, raw, digits, reason),
    }
}

// ============================================================================
// VALIDATOR OBJECT
// ============================================================================

/// [`Validate`] implementation for Israeli ID numbers.
///
/// # Examples
///
/// ```rust
/// use israeli_validator::foundation::Validate;
/// use israeli_validator::validators::IsraeliId;
///
/// assert!(IsraeliId.validate("039337423").is_ok());
/// assert_eq!(IsraeliId.validate("123456789").unwrap_err().code, "invalid_checksum");
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct IsraeliId;

impl Validate for IsraeliId {
    type Input = str;

    fn validate(&self, input: &str) -> Result<(), ValidationError> {
        match invalid_reason(input) {
            None => Ok(()),
            Some(reason) => Err(ValidationError::from_reason(reason)),
        }
    }
}

// ============================================================================
// TESTS
// ============================================================================
