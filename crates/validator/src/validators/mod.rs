//! Identifier validators
//!
//! One module per identifier kind. Each module exposes the same free-function
//! surface over a [`RawValue`](crate::foundation::RawValue) input:
//!
//! - `valid(..) -> bool`
//! - `invalid_reason(..) -> Option<ReasonCode>`
//! - `format(..) -> Option<String>`
//! - `parse(..) -> Outcome`
//!
//! plus a validator object implementing [`Validate`](crate::foundation::Validate).
//!
//! # Kinds
//!
//! - **ID**: [`id`], 9 digits with a Luhn check digit
//! - **Phone**: [`phone`], mobile / landline / VoIP
//! - **Postal code**: [`postal_code`], 7 digits
//! - **Bank account**: [`bank_account`], domestic 13 digits or IBAN
//!
//! The modules share nothing beyond the sanitizer and checksum leaves.

pub mod bank_account;
pub mod id;
pub mod phone;
pub mod postal_code;

pub use bank_account::{AccountFormat, AccountKind, AccountStyle, IsraeliBankAccount};
pub use id::IsraeliId;
pub use phone::{IsraeliPhone, PhoneKind, PhoneStyle, PhoneType};
pub use postal_code::{IsraeliPostalCode, PostalStyle};

/// Error returned when parsing an unknown type, format or style name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown {kind} `{value}` (expected one of: {expected})")]
pub struct UnknownOption {
    /// Name of the option enum.
    pub kind: &'static str,
    /// The rejected input.
    pub value: String,
    /// Comma-separated accepted names.
    pub expected: String,
}

impl UnknownOption {
    pub(crate) fn new<'a>(
        kind: &'static str,
        value: &str,
        expected: impl Iterator<Item = &'a str>,
    ) -> Self {
        Self {
            kind,
            value: value.to_owned(),
            expected: expected.collect::<Vec<_>>().join(", "),
        }
    }
}
