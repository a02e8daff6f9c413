//! Top-level convenience functions re-exported from the crate root.
//!
//! Each kind gets a predicate, a rich `parse_*`, a fail-fast `ensure_valid_*`
//! and a `format_*`. They delegate to the per-kind modules in
//! [`validators`](crate::validators) without adding behavior.

use crate::error::InvalidFormatError;
use crate::foundation::RawValue;
use crate::outcome::Outcome;
use crate::validators::{
    AccountFormat, AccountStyle, PhoneKind, PhoneStyle, PhoneType, PostalStyle, bank_account, id,
    phone, postal_code,
};

// ============================================================================
// PREDICATES
// ============================================================================

/// Returns `true` for a valid Israeli ID number.
#[must_use]
pub fn valid_id<'a>(value: impl Into<RawValue<'a>>) -> bool {
    id::valid(value)
}

/// Returns `true` for a valid phone number of `phone_type`.
#[must_use]
pub fn valid_phone<'a>(value: impl Into<RawValue<'a>>, phone_type: PhoneType) -> bool {
    phone::valid(value, phone_type)
}

/// Returns `true` for a valid 7-digit postal code.
#[must_use]
pub fn valid_postal_code<'a>(value: impl Into<RawValue<'a>>) -> bool {
    postal_code::valid(value)
}

/// Returns `true` for a valid bank account in `format`.
#[must_use]
pub fn valid_bank_account<'a>(value: impl Into<RawValue<'a>>, format: AccountFormat) -> bool {
    bank_account::valid(value, format)
}

/// Detects whether a number is mobile, landline or VoIP.
///
/// ```rust
/// use israeli_validator::phone_type;
/// use israeli_validator::validators::PhoneKind;
///
/// assert_eq!(phone_type("+972-3-123-4567"), Some(PhoneKind::Landline));
/// assert_eq!(phone_type("123"), None);
/// ```
#[must_use]
pub fn phone_type<'a>(value: impl Into<RawValue<'a>>) -> Option<PhoneKind> {
    phone::detect_type(value)
}

// ============================================================================
// RICH RESULTS
// ============================================================================

#[must_use]
pub fn parse_id<'a>(value: impl Into<RawValue<'a>>) -> Outcome {
    id::parse(value)
}

#[must_use]
pub fn parse_phone<'a>(value: impl Into<RawValue<'a>>, phone_type: PhoneType) -> Outcome {
    phone::parse(value, phone_type)
}

#[must_use]
pub fn parse_postal_code<'a>(value: impl Into<RawValue<'a>>) -> Outcome {
    postal_code::parse(value)
}

#[must_use]
pub fn parse_bank_account<'a>(value: impl Into<RawValue<'a>>, format: AccountFormat) -> Outcome {
    bank_account::parse(value, format)
}

// ============================================================================
// FAIL-FAST
// ============================================================================

/// Fails with [`InvalidFormatError::Id`] when the ID is invalid.
///
/// # Errors
///
/// Returns the error carrying the first failing [`ReasonCode`](crate::ReasonCode).
pub fn ensure_valid_id<'a>(value: impl Into<RawValue<'a>>) -> Result<(), InvalidFormatError> {
    id::parse(value).into_result().map(drop)
}

/// Fails with [`InvalidFormatError::Phone`] when the number is invalid for
/// `phone_type`.
///
/// # Errors
///
/// Returns the error carrying the first failing [`ReasonCode`](crate::ReasonCode).
pub fn ensure_valid_phone<'a>(
    value: impl Into<RawValue<'a>>,
    phone_type: PhoneType,
) -> Result<(), InvalidFormatError> {
    phone::parse(value, phone_type).into_result().map(drop)
}

/// Fails with [`InvalidFormatError::PostalCode`] when the code is invalid.
///
/// # Errors
///
/// Returns the error carrying the first failing [`ReasonCode`](crate::ReasonCode).
pub fn ensure_valid_postal_code<'a>(
    value: impl Into<RawValue<'a>>,
) -> Result<(), InvalidFormatError> {
    postal_code::parse(value).into_result().map(drop)
}

/// Fails with [`InvalidFormatError::BankAccount`] when the account is invalid
/// for `format`.
///
/// # Errors
///
/// Returns the error carrying the first failing [`ReasonCode`](crate::ReasonCode).
pub fn ensure_valid_bank_account<'a>(
    value: impl Into<RawValue<'a>>,
    format: AccountFormat,
) -> Result<(), InvalidFormatError> {
    bank_account::parse(value, format).into_result().map(drop)
}

// ============================================================================
// FORMATTING
// ============================================================================

#[must_use]
pub fn format_id<'a>(value: impl Into<RawValue<'a>>) -> Option<String> {
    id::format(value)
}

#[must_use]
pub fn format_phone<'a>(value: impl Into<RawValue<'a>>, style: PhoneStyle) -> Option<String> {
    phone::format(value, style)
}

#[must_use]
pub fn format_postal_code<'a>(
    value: impl Into<RawValue<'a>>,
    style: PostalStyle,
) -> Option<String> {
    postal_code::format(value, style)
}

#[must_use]
pub fn format_bank_account<'a>(
    value: impl Into<RawValue<'a>>,
    style: AccountStyle,
) -> Option<String> {
    bank_account::format(value, style)
}
