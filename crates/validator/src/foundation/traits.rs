//! Core traits for the validation system

use crate::foundation::ValidationError;

// ============================================================================
// CORE VALIDATOR TRAIT
// ============================================================================

/// The core trait implemented by every validator object.
///
/// Validators return `Result<(), ValidationError>` so that they plug into
/// pipelines that collect structured errors. The error `code` is the
/// machine-readable reason (for identifier validators, a
/// [`ReasonCode`](crate::foundation::ReasonCode) string).
///
/// # Examples
///
/// ```rust
/// use israeli_validator::foundation::{Validate, ValidationError};
///
/// struct NineDigits;
///
/// impl Validate for NineDigits {
///     type Input = str;
///
///     fn validate(&self, input: &str) -> Result<(), ValidationError> {
///         if input.len() == 9 && input.bytes().all(|b| b.is_ascii_digit()) {
///             Ok(())
///         } else {
///             Err(ValidationError::new("wrong_length", "expected nine digits"))
///         }
///     }
/// }
///
/// assert!(NineDigits.validate("123456782").is_ok());
/// assert!(NineDigits.validate("12").is_err());
/// ```
pub trait Validate {
    /// The type of input being validated.
    ///
    /// Use `?Sized` to allow validation of unsized types like `str`.
    type Input: ?Sized;

    /// Validates the input value.
    fn validate(&self, input: &Self::Input) -> Result<(), ValidationError>;

    /// Returns `true` when [`validate`](Self::validate) succeeds.
    fn is_valid(&self, input: &Self::Input) -> bool {
        self.validate(input).is_ok()
    }
}

impl<V: Validate + ?Sized> Validate for &V {
    type Input = V::Input;

    fn validate(&self, input: &Self::Input) -> Result<(), ValidationError> {
        (**self).validate(input)
    }
}
