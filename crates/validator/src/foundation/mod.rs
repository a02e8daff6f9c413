//! Core validation types and traits
//!
//! This module contains the building blocks shared by every identifier kind:
//!
//! - **Input**: [`RawValue`], the borrowed-or-owned text / integer / absent input
//! - **Verdicts**: [`ReasonCode`], the closed set of failure reasons
//! - **Traits**: [`Validate`], implemented by the validator objects
//! - **Errors**: [`ValidationError`], [`ValidationErrors`]
//!
//! # Examples
//!
//! ```rust
//! use israeli_validator::foundation::{RawValue, ReasonCode};
//!
//! let raw = RawValue::from(12_345_678_u32);
//! assert_eq!(raw.text().as_deref(), Some("12345678"));
//! assert_eq!(ReasonCode::WrongLength.as_str(), "wrong_length");
//! ```

pub mod error;
pub mod raw;
pub mod reason;
pub mod traits;

pub use error::{ValidationError, ValidationErrors};
pub use raw::RawValue;
pub use reason::ReasonCode;
pub use traits::Validate;

/// Validates a value with multiple validators, collecting every failure.
///
/// # Examples
///
/// ```rust
/// use israeli_validator::foundation::{Validate, validate_with_all};
/// use israeli_validator::validators::{IsraeliPhone, PhoneType};
///
/// let mobile = IsraeliPhone::new(PhoneType::Mobile);
/// let any = IsraeliPhone::default();
/// assert!(validate_with_all("0501234567", &[&mobile, &any]).is_ok());
/// ```
pub fn validate_with_all<V>(value: &V::Input, validators: &[&V]) -> Result<(), ValidationErrors>
where
    V: Validate + ?Sized,
{
    let mut errors = ValidationErrors::new();

    for validator in validators {
        if let Err(e) = validator.validate(value) {
            errors.add(e);
        }
    }

    errors.into_result(())
}

/// Validates a value with multiple validators (at least one must pass).
pub fn validate_with_any<V>(value: &V::Input, validators: &[&V]) -> Result<(), ValidationErrors>
where
    V: Validate + ?Sized,
{
    let mut errors = ValidationErrors::new();

    for validator in validators {
        match validator.validate(value) {
            Ok(()) => return Ok(()),
            Err(e) => errors.add(e),
        }
    }

    Err(errors)
}
