//! Israeli bank account validator.
//!
//! Two formats are recognized:
//!
//! - **Domestic**: 13 digits, bank (2) + branch (3) + account (8)
//! - **IBAN**: `IL`, 2 check digits and a 19-digit BBAN, 23 characters,
//!   verified with the ISO 7064 mod-97 check
//!
//! With [`AccountFormat::Any`] domestic is tried first, then IBAN.

use std::sync::LazyLock;

use regex::Regex;

use crate::checksum::iban_checksum_valid;
use crate::foundation::{RawValue, ReasonCode, Validate, ValidationError};
use crate::outcome::{IdentifierKind, Outcome, Subtype, rejected};
use crate::sanitizer::{digits_only, normalize_iban};

static DOMESTIC_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[0-9]{13}$").expect("valid domestic pattern")
});

static IBAN_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^IL[0-9]{21}$").expect("valid iban pattern")
});

option_enum! {
    /// Detected format of a valid account.
    pub enum AccountKind {
        Domestic => "domestic",
        Iban => "iban",
    }
}

option_enum! {
    /// Requested format when validating.
    #[derive(Default)]
    pub enum AccountFormat {
        Domestic => "domestic",
        Iban => "iban",
        #[default]
        Any => "any",
    }
}

option_enum! {
    /// Output style for [`format`]. IBANs ignore it.
    #[derive(Default)]
    pub enum AccountStyle {
        /// `49-856-22815429`
        #[default]
        Domestic => "domestic",
        /// `4985622815429`
        Compact => "compact",
        /// Same as `Compact`; only IBAN input renders as an IBAN.
        Iban => "iban",
    }
}

/// Returns `true` for exactly 13 ASCII digits.
#[must_use]
pub fn valid_domestic(digits: &str) -> bool {
    DOMESTIC_PATTERN.is_match(digits)
}

/// Returns `true` for an `IL` IBAN of the right shape passing mod-97.
///
/// Expects the normalized form (no whitespace, upper-case).
#[must_use]
pub fn valid_iban(iban: &str) -> bool {
    IBAN_PATTERN.is_match(iban) && iban_checksum_valid(iban)
}

/// Both sanitized views of one input.
struct Candidate {
    digits: Option<String>,
    iban: Option<String>,
}

impl Candidate {
    fn new(raw: &RawValue<'_>) -> Self {
        Self {
            digits: digits_only(raw),
            iban: normalize_iban(raw),
        }
    }

    fn is_blank(&self) -> bool {
        self.digits.as_deref().is_none_or(str::is_empty)
    }

    fn domestic(&self) -> Option<&str> {
        self.digits
            .as_deref()
            .filter(|digits| valid_domestic(digits))
    }

    fn iban(&self) -> Option<&str> {
        self.iban.as_deref().filter(|iban| valid_iban(iban))
    }

    fn iban_shaped(&self) -> bool {
        self.iban
            .as_deref()
            .is_some_and(|iban| IBAN_PATTERN.is_match(iban))
    }

    /// The matching format and its normalized value.
    fn detect(&self, format: AccountFormat) -> Option<(AccountKind, &str)> {
        let domestic = || Some((AccountKind::Domestic, self.domestic()?));
        let iban = || Some((AccountKind::Iban, self.iban()?));

        match format {
            AccountFormat::Domestic => domestic(),
            AccountFormat::Iban => iban(),
            AccountFormat::Any => domestic().or_else(iban),
        }
    }

    /// Why `detect(format)` found nothing.
    fn reason(&self, format: AccountFormat) -> ReasonCode {
        if self.is_blank() {
            return ReasonCode::Blank;
        }

        match format {
            AccountFormat::Domestic => ReasonCode::WrongLength,
            AccountFormat::Iban if self.iban_shaped() => ReasonCode::InvalidChecksum,
            AccountFormat::Iban => ReasonCode::WrongLength,
            AccountFormat::Any if self.iban_shaped() => ReasonCode::InvalidChecksum,
            AccountFormat::Any => ReasonCode::InvalidFormat,
        }
    }
}

/// Validates a bank account in the requested format.
///
/// # Examples
///
/// ```rust
/// use israeli_validator::validators::bank_account::{self, AccountFormat};
///
/// assert!(bank_account::valid("49-856-22815429", AccountFormat::Any));
/// assert!(bank_account::valid("IL62 0108 0000 0009 9999 999", AccountFormat::Iban));
/// assert!(!bank_account::valid("4985622815429", AccountFormat::Iban));
/// ```
#[must_use]
pub fn valid<'a>(value: impl Into<RawValue<'a>>, format: AccountFormat) -> bool {
    Candidate::new(&value.into()).detect(format).is_some()
}

/// Returns the format the account matches, domestic first.
#[must_use]
pub fn detect_format<'a>(value: impl Into<RawValue<'a>>) -> Option<AccountKind> {
    Candidate::new(&value.into())
        .detect(AccountFormat::Any)
        .map(|(kind, _)| kind)
}

/// Returns why the account is invalid for `format`, or `None` if valid.
#[must_use]
pub fn invalid_reason<'a>(
    value: impl Into<RawValue<'a>>,
    format: AccountFormat,
) -> Option<ReasonCode> {
    let candidate = Candidate::new(&value.into());
    if candidate.detect(format).is_some() {
        return None;
    }

    let reason = candidate.reason(format);
    Some(rejected(IdentifierKind::BankAccount, reason))
}

/// Formats a valid account; `None` when neither format matches.
///
/// Domestic accounts honour the style; IBANs always render normalized.
///
/// # Examples
///
/// ```rust
/// use israeli_validator::validators::bank_account::{self, AccountStyle};
///
/// assert_eq!(
///     bank_account::format("4985622815429", AccountStyle::Domestic).as_deref(),
///     Some("49-856-22815429")
/// );
/// assert_eq!(
///     bank_account::format("49-856-22815429", AccountStyle::Compact).as_deref(),
///     Some("4985622815429")
/// );
/// assert_eq!(
///     bank_account::format("il62 0108 0000 0009 9999 999", AccountStyle::Domestic).as_deref(),
///     Some("IL620108000000099999999")
/// );
/// ```
#[must_use]
pub fn format<'a>(value: impl Into<RawValue<'a>>, style: AccountStyle) -> Option<String> {
    let candidate = Candidate::new(&value.into());

    match candidate.detect(AccountFormat::Any)? {
        (AccountKind::Domestic, digits) => Some(match style {
            AccountStyle::Domestic => {
                format!("{}-{}-{}", &digits[..2], &digits[2..5], &digits[5..])
            }
            AccountStyle::Compact | AccountStyle::Iban => digits.to_owned(),
        }),
        (AccountKind::Iban, iban) => Some(iban.to_owned()),
    }
}

/// Validates and returns the full [`Outcome`], with the detected format.
///
/// An invalid IBAN request keeps the IBAN-normalized text; every other
/// invalid input keeps the separator-stripped text.
#[must_use]
pub fn parse<'a>(value: impl Into<RawValue<'a>>, format: AccountFormat) -> Outcome {
    let raw = value.into();
    let candidate = Candidate::new(&raw);

    if let Some((kind, normalized)) = candidate.detect(format) {
        return Outcome::valid(
            IdentifierKind::BankAccount,
            raw,
            normalized.to_owned(),
            Some(Subtype::Account(kind)),
        );
    }

    let reason = rejected(IdentifierKind::BankAccount, candidate.reason(format));
    let Candidate { digits, iban } = candidate;
    let normalized = match format {
        AccountFormat::Iban => iban,
        AccountFormat::Domestic | AccountFormat::Any => digits,
    };
    Outcome::invalid(IdentifierKind::BankAccount, raw, normalized, reason)
}

/// [`Validate`] implementation for Israeli bank accounts.
///
/// # Examples
///
/// ```rust
/// use israeli_validator::foundation::Validate;
/// use israeli_validator::validators::{AccountFormat, IsraeliBankAccount};
///
/// let iban = IsraeliBankAccount::new(AccountFormat::Iban);
/// assert!(iban.validate("IL620108000000099999999").is_ok());
/// assert_eq!(iban.validate("IL630108000000099999999").unwrap_err().code, "invalid_checksum");
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct IsraeliBankAccount {
    format: AccountFormat,
}

impl IsraeliBankAccount {
    /// Creates a validator accepting accounts in `format`.
    #[must_use]
    pub fn new(format: AccountFormat) -> Self {
        Self { format }
    }

    /// The format this validator accepts.
    #[must_use]
    pub fn format(&self) -> AccountFormat {
        self.format
    }
}

impl Validate for IsraeliBankAccount {
    type Input = str;

    fn validate(&self, input: &str) -> Result<(), ValidationError> {
        match invalid_reason(input, self.format) {
            None => Ok(()),
            Some(reason) => {
                let error = ValidationError::from_reason(reason);
                Err(error.with_param("expected_format", self.format.as_str()))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const VALID_IBAN: &str = "IL620108000000099999999";

    mod domestic {
        use super::*;

        #[test]
        fn test_plain_and_dashed() {
            assert!(valid("4985622815429", AccountFormat::Domestic));
            assert!(valid("49-856-22815429", AccountFormat::Domestic));
            assert!(valid(4_985_622_815_429_u64, AccountFormat::Domestic));
        }

        #[test]
        fn test_wrong_length() {
            assert_eq!(
                invalid_reason("498562281542", AccountFormat::Domestic),
                Some(ReasonCode::WrongLength)
            );
            assert_eq!(
                invalid_reason(VALID_IBAN, AccountFormat::Domestic),
                Some(ReasonCode::WrongLength)
            );
        }
    }

    mod iban {
        use super::*;

        #[test]
        fn test_valid() {
            assert!(valid(VALID_IBAN, AccountFormat::Iban));
            assert!(valid("il62 0108 0000 0009 9999 999", AccountFormat::Iban));
            assert!(valid("IL960126000000052345678", AccountFormat::Iban));
        }

        #[test]
        fn test_bad_checksum() {
            assert_eq!(
                invalid_reason("IL630108000000099999999", AccountFormat::Iban),
                Some(ReasonCode::InvalidChecksum)
            );
        }

        #[test]
        fn test_not_iban_shaped() {
            assert_eq!(
                invalid_reason("IL6201080000000999999", AccountFormat::Iban),
                Some(ReasonCode::WrongLength)
            );
            assert_eq!(
                invalid_reason("DE89370400440532013000", AccountFormat::Iban),
                Some(ReasonCode::WrongLength)
            );
        }
    }

    mod any {
        use super::*;

        #[test]
        fn test_accepts_both() {
            assert!(valid("4985622815429", AccountFormat::Any));
            assert!(valid(VALID_IBAN, AccountFormat::Any));
        }

        #[test]
        fn test_reasons() {
            assert_eq!(
                invalid_reason("IL630108000000099999999", AccountFormat::Any),
                Some(ReasonCode::InvalidChecksum)
            );
            assert_eq!(
                invalid_reason("123", AccountFormat::Any),
                Some(ReasonCode::InvalidFormat)
            );
            assert_eq!(
                invalid_reason(" ", AccountFormat::Any),
                Some(ReasonCode::Blank)
            );
            assert_eq!(
                invalid_reason(None::<&str>, AccountFormat::Any),
                Some(ReasonCode::Blank)
            );
        }
    }

    #[test]
    fn test_detect_format() {
        assert_eq!(detect_format("4985622815429"), Some(AccountKind::Domestic));
        assert_eq!(detect_format(VALID_IBAN), Some(AccountKind::Iban));
        assert_eq!(detect_format("123"), None);
    }

    #[test]
    fn test_format_iban_ignores_style() {
        for style in AccountStyle::ALL {
            assert_eq!(format(VALID_IBAN, *style).as_deref(), Some(VALID_IBAN));
        }
        assert_eq!(format("123", AccountStyle::Domestic), None);
    }

    #[test]
    fn test_format_domestic_styles() {
        assert_eq!(
            format("4985622815429", AccountStyle::Iban).as_deref(),
            Some("4985622815429")
        );
    }

    #[test]
    fn test_parse() {
        let outcome = parse("49-856-22815429", AccountFormat::Any);
        assert!(outcome.is_domestic());
        assert_eq!(outcome.normalized(), Some("4985622815429"));
        assert_eq!(outcome.formatted().as_deref(), Some("49-856-22815429"));
        assert_eq!(
            outcome.formatted_as(AccountStyle::Compact).as_deref(),
            Some("4985622815429")
        );

        let outcome = parse("il63 0108 0000 0009 9999 999", AccountFormat::Iban);
        assert_eq!(outcome.reason(), Some(ReasonCode::InvalidChecksum));
        assert_eq!(outcome.normalized(), Some("IL630108000000099999999"));
    }

    #[test]
    fn test_validator_object_keeps_format() {
        let iban = IsraeliBankAccount::new(AccountFormat::Iban);
        assert_eq!(iban.format(), AccountFormat::Iban);
        assert_eq!(IsraeliBankAccount::default().format(), AccountFormat::Any);
    }

    #[test]
    fn test_validator_object_params() {
        let err = IsraeliBankAccount::default().validate("123").unwrap_err();
        assert_eq!(err.code, "invalid_format");
        assert_eq!(err.param("expected_format"), Some("any"));
    }
}
