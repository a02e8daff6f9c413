//! Israeli phone number validator.
//!
//! Numbers are classified after sanitizing and folding `+972` / `972` /
//! `00972` back to a leading `0`:
//!
//! - **Mobile**: 10 digits starting with `05`
//! - **Landline**: 9 digits starting with `02`, `03`, `04`, `08` or `09`
//! - **VoIP**: 10 digits starting with `072` through `079`
//!
//! The three categories have disjoint prefixes and lengths, so at most one
//! of them matches any input.

use std::sync::LazyLock;

use regex::Regex;

use crate::foundation::{RawValue, ReasonCode, Validate, ValidationError};
use crate::outcome::{IdentifierKind, Outcome, Subtype, rejected};
use crate::sanitizer::{COUNTRY_CODE, normalize_phone};

static MOBILE_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^05[0-9]{8}$").expect("valid mobile pattern")
});

static LANDLINE_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^0[23489][0-9]{7}$").expect("valid landline pattern")
});

static VOIP_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^07[2-9][0-9]{7}$").expect("valid voip pattern")
});

option_enum! {
    /// Detected category of a phone number.
    pub enum PhoneKind {
        Mobile => "mobile",
        Landline => "landline",
        Voip => "voip",
    }
}

option_enum! {
    /// Requested category when validating; `Any` accepts all three.
    #[derive(Default)]
    pub enum PhoneType {
        Mobile => "mobile",
        Landline => "landline",
        Voip => "voip",
        #[default]
        Any => "any",
    }
}

option_enum! {
    /// Output style for [`format`].
    #[derive(Default)]
    pub enum PhoneStyle {
        /// `050-123-4567` / `02-123-4567`
        #[default]
        Dashed => "dashed",
        /// `+972-501234567`
        International => "international",
        /// `0501234567`
        Compact => "compact",
    }
}

impl PhoneKind {
    fn pattern(self) -> &'static Regex {
        match self {
            Self::Mobile => &MOBILE_PATTERN,
            Self::Landline => &LANDLINE_PATTERN,
            Self::Voip => &VOIP_PATTERN,
        }
    }

    /// Returns `true` when `normalized` has this category's structure.
    #[must_use]
    pub fn matches(self, normalized: &str) -> bool {
        self.pattern().is_match(normalized)
    }
}

impl PhoneType {
    /// Returns `true` when a number of category `kind` satisfies this request.
    #[must_use]
    pub fn accepts(self, kind: PhoneKind) -> bool {
        match self {
            Self::Any => true,
            Self::Mobile => kind == PhoneKind::Mobile,
            Self::Landline => kind == PhoneKind::Landline,
            Self::Voip => kind == PhoneKind::Voip,
        }
    }
}

/// Classifies an already-normalized number, trying mobile, landline, voip.
#[must_use]
pub fn classify(normalized: &str) -> Option<PhoneKind> {
    PhoneKind::ALL
        .iter()
        .copied()
        .find(|kind| kind.matches(normalized))
}

fn check(normalized: Option<&str>, phone_type: PhoneType) -> Result<PhoneKind, ReasonCode> {
    let normalized = match normalized {
        Some(normalized) if !normalized.is_empty() => normalized,
        _ => return Err(rejected(IdentifierKind::Phone, ReasonCode::Blank)),
    };

    let Some(kind) = classify(normalized) else {
        return Err(rejected(IdentifierKind::Phone, ReasonCode::InvalidFormat));
    };

    if !phone_type.accepts(kind) {
        return Err(rejected(IdentifierKind::Phone, ReasonCode::WrongType));
    }

    Ok(kind)
}

/// Validates a phone number against the requested type.
///
/// # Examples
///
/// ```rust
/// use israeli_validator::validators::phone::{self, PhoneType};
///
/// assert!(phone::valid("050-123-4567", PhoneType::Any));
/// assert!(phone::valid("+972501234567", PhoneType::Mobile));
/// assert!(phone::valid("02-123-4567", PhoneType::Landline));
/// assert!(!phone::valid("021234567", PhoneType::Mobile));
/// ```
#[must_use]
pub fn valid<'a>(value: impl Into<RawValue<'a>>, phone_type: PhoneType) -> bool {
    invalid_reason(value, phone_type).is_none()
}

/// Returns the category the number belongs to, or `None` if none matches.
#[must_use]
pub fn detect_type<'a>(value: impl Into<RawValue<'a>>) -> Option<PhoneKind> {
    normalize_phone(value).as_deref().and_then(classify)
}

/// Returns why the number is invalid for `phone_type`, or `None` if valid.
///
/// Order: `blank`, `invalid_format`, `wrong_type`.
#[must_use]
pub fn invalid_reason<'a>(
    value: impl Into<RawValue<'a>>,
    phone_type: PhoneType,
) -> Option<ReasonCode> {
    check(normalize_phone(value).as_deref(), phone_type).err()
}

/// Formats a valid phone number; `None` when invalid.
///
/// # Examples
///
/// ```rust
/// use israeli_validator::validators::phone::{self, PhoneStyle};
///
/// assert_eq!(phone::format("0501234567", PhoneStyle::Dashed).as_deref(), Some("050-123-4567"));
/// assert_eq!(phone::format("021234567", PhoneStyle::Dashed).as_deref(), Some("02-123-4567"));
/// assert_eq!(
///     phone::format("0501234567", PhoneStyle::International).as_deref(),
///     Some("+972-501234567")
/// );
/// assert_eq!(phone::format("050-123-4567", PhoneStyle::Compact).as_deref(), Some("0501234567"));
/// ```
#[must_use]
pub fn format<'a>(value: impl Into<RawValue<'a>>, style: PhoneStyle) -> Option<String> {
    let normalized = normalize_phone(value)?;
    let kind = classify(&normalized)?;
    Some(render(normalized, kind, style))
}

/// Renders a normalized number whose category is already known.
fn render(normalized: String, kind: PhoneKind, style: PhoneStyle) -> String {
    match style {
        PhoneStyle::Dashed => {
            let area = match kind {
                PhoneKind::Mobile | PhoneKind::Voip => 3,
                PhoneKind::Landline => 2,
            };
            format!(
                "{}-{}-{}",
                &normalized[..area],
                &normalized[area..area + 3],
                &normalized[area + 3..]
            )
        }
        PhoneStyle::International => format!("+{COUNTRY_CODE}-{}", &normalized[1..]),
        PhoneStyle::Compact => normalized,
    }
}

/// Validates and returns the full [`Outcome`], with the detected category.
#[must_use]
pub fn parse<'a>(value: impl Into<RawValue<'a>>, phone_type: PhoneType) -> Outcome {
    let raw = value.into();
    let normalized = normalize_phone(&raw);

    match check(normalized.as_deref(), phone_type) {
        Ok(kind) => Outcome::valid(
            IdentifierKind::Phone,
            raw,
            normalized.unwrap_or_default(),
            Some(Subtype::Phone(kind)),
        ),
        Err(reason) => Outcome::invalid(IdentifierKind::Phone, raw, normalized, reason),
    }
}

// ============================================================================
// VALIDATOR OBJECT
// ============================================================================

/// [`Validate`] implementation for Israeli phone numbers.
///
/// On failure the error carries `expected_type` and, when the number matches
/// some other category, `detected_type` parameters.
///
/// # Examples
///
/// ```rust
/// use israeli_validator::foundation::Validate;
/// use israeli_validator::validators::{IsraeliPhone, PhoneType};
///
/// let mobile = IsraeliPhone::new(PhoneType::Mobile);
/// assert!(mobile.validate("054-123-4567").is_ok());
///
/// let err = mobile.validate("03-123-4567").unwrap_err();
/// assert_eq!(err.code, "wrong_type");
/// assert_eq!(err.param("detected_type"), Some("landline"));
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct IsraeliPhone {
    phone_type: PhoneType,
}

impl IsraeliPhone {
    /// Creates a phone validator accepting `phone_type`.
    #[must_use]
    pub fn new(phone_type: PhoneType) -> Self {
        Self { phone_type }
    }

    /// The requested phone type.
    #[must_use]
    pub fn phone_type(&self) -> PhoneType {
        self.phone_type
    }
}

impl Validate for IsraeliPhone {
    type Input = str;

    fn validate(&self, input: &str) -> Result<(), ValidationError> {
        let normalized = normalize_phone(input);
        match check(normalized.as_deref(), self.phone_type) {
            Ok(_) => Ok(()),
            Err(reason) => {
                let mut error = ValidationError::from_reason(reason)
                    .with_param("expected_type", self.phone_type.as_str());
                if let Some(kind) = normalized.as_deref().and_then(classify) {
                    error = error.with_param("detected_type", kind.as_str());
                }
                Err(error)
            }
        }
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    mod mobile {
        use super::*;

        #[test]
        fn test_valid_prefixes() {
            for number in [
                "0501234567",
                "0521234567",
                "0531234567",
                "0541234567",
                "0551234567",
                "0581234567",
            ] {
                assert!(valid(number, PhoneType::Mobile), "{number}");
            }
        }

        #[test]
        fn test_international_forms() {
            assert!(valid("+972501234567", PhoneType::Mobile));
            assert!(valid("972501234567", PhoneType::Mobile));
            assert!(valid("00972501234567", PhoneType::Mobile));
            assert!(valid("+972-50-123-4567", PhoneType::Mobile));
        }

        #[test]
        fn test_wrong_lengths() {
            assert!(!valid("05012345", PhoneType::Mobile));
            assert!(!valid("05012345678", PhoneType::Mobile));
        }

        #[test]
        fn test_unknown_prefix() {
            assert!(!valid("0601234567", PhoneType::Mobile));
            assert_eq!(
                invalid_reason("0601234567", PhoneType::Any),
                Some(ReasonCode::InvalidFormat)
            );
        }
    }

    mod landline {
        use super::*;

        #[test]
        fn test_area_codes() {
            for number in [
                "021234567",
                "031234567",
                "041234567",
                "081234567",
                "091234567",
            ] {
                assert!(valid(number, PhoneType::Landline), "{number}");
            }
        }

        #[test]
        fn test_invalid_area_codes() {
            assert!(!valid("011234567", PhoneType::Landline));
            assert!(!valid("051234567", PhoneType::Landline));
            assert!(!valid("061234567", PhoneType::Landline));
        }
    }

    mod voip {
        use super::*;

        #[test]
        fn test_voip_prefixes() {
            assert!(valid("0721234567", PhoneType::Voip));
            assert!(valid("0771234567", PhoneType::Voip));
            assert!(valid("0791234567", PhoneType::Voip));
        }

        #[test]
        fn test_070_and_071_are_not_voip() {
            assert!(!valid("0701234567", PhoneType::Voip));
            assert!(!valid("0711234567", PhoneType::Any));
        }
    }

    mod reasons {
        use super::*;

        #[test]
        fn test_blank() {
            assert_eq!(invalid_reason("", PhoneType::Any), Some(ReasonCode::Blank));
            assert_eq!(
                invalid_reason(None::<&str>, PhoneType::Any),
                Some(ReasonCode::Blank)
            );
        }

        #[test]
        fn test_invalid_format() {
            assert_eq!(
                invalid_reason("abc", PhoneType::Any),
                Some(ReasonCode::InvalidFormat)
            );
            assert_eq!(
                invalid_reason("invalid", PhoneType::Mobile),
                Some(ReasonCode::InvalidFormat)
            );
        }

        #[test]
        fn test_wrong_type() {
            assert_eq!(
                invalid_reason("021234567", PhoneType::Mobile),
                Some(ReasonCode::WrongType)
            );
            assert_eq!(
                invalid_reason("0501234567", PhoneType::Voip),
                Some(ReasonCode::WrongType)
            );
        }

        #[test]
        fn test_valid_has_no_reason() {
            assert_eq!(invalid_reason("0501234567", PhoneType::Mobile), None);
            assert_eq!(invalid_reason("0501234567", PhoneType::Any), None);
        }
    }

    #[test]
    fn test_detect_type() {
        assert_eq!(detect_type("0501234567"), Some(PhoneKind::Mobile));
        assert_eq!(detect_type("+972501234567"), Some(PhoneKind::Mobile));
        assert_eq!(detect_type("031234567"), Some(PhoneKind::Landline));
        assert_eq!(detect_type("0751234567"), Some(PhoneKind::Voip));
        assert_eq!(detect_type("invalid"), None);
        assert_eq!(detect_type(""), None);
    }

    mod formatting {
        use super::*;

        #[test]
        fn test_dashed() {
            assert_eq!(
                format("0501234567", PhoneStyle::Dashed).as_deref(),
                Some("050-123-4567")
            );
            assert_eq!(
                format("0721234567", PhoneStyle::Dashed).as_deref(),
                Some("072-123-4567")
            );
            assert_eq!(
                format("021234567", PhoneStyle::Dashed).as_deref(),
                Some("02-123-4567")
            );
        }

        #[test]
        fn test_international() {
            assert_eq!(
                format("+972501234567", PhoneStyle::International).as_deref(),
                Some("+972-501234567")
            );
            assert_eq!(
                format("02-123-4567", PhoneStyle::International).as_deref(),
                Some("+972-21234567")
            );
        }

        #[test]
        fn test_compact() {
            assert_eq!(
                format("050-123-4567", PhoneStyle::Compact).as_deref(),
                Some("0501234567")
            );
        }

        #[test]
        fn test_invalid_is_none() {
            assert_eq!(format("123456", PhoneStyle::Dashed), None);
        }
    }

    #[test]
    fn test_parse_subtype_only_when_valid() {
        let outcome = parse("021234567", PhoneType::Any);
        assert_eq!(outcome.subtype(), Some(Subtype::Phone(PhoneKind::Landline)));

        let outcome = parse("021234567", PhoneType::Mobile);
        assert_eq!(outcome.reason(), Some(ReasonCode::WrongType));
        assert_eq!(outcome.subtype(), None);
    }

    #[test]
    fn test_validator_object_params() {
        let any = IsraeliPhone::default();
        let err = any.validate("123").unwrap_err();
        assert_eq!(err.code, "invalid_format");
        assert_eq!(err.param("expected_type"), Some("any"));
        assert_eq!(err.param("detected_type"), None);
    }
}
