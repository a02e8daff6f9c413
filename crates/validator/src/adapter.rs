//! Per-attribute validation hook for host frameworks.
//!
//! A host model implements [`Record`] and, for each validated attribute,
//! calls [`validate_attribute`] with the attribute's [`AttributeRules`].
//! Rules are plain serde data, so they can be loaded from configuration:
//!
//! ```rust
//! use israeli_validator::adapter::{AttributeRules, RuleKind, validate_attribute};
//! use israeli_validator::foundation::ValidationErrors;
//!
//! let rules: AttributeRules =
//!     serde_json::from_str(r#"{ "validates": "israeli_phone", "type": "mobile" }"#).unwrap();
//! assert_eq!(rules.kind, RuleKind::IsraeliPhone);
//!
//! let mut errors = ValidationErrors::new();
//! validate_attribute(&mut errors, "mobile_phone", "02-123-4567", &rules);
//!
//! let error = &errors.errors()[0];
//! assert_eq!(error.message, "is invalid");
//! assert_eq!(error.param("reason"), Some("wrong_type"));
//! assert_eq!(error.param("detected_type"), Some("landline"));
//! ```
//!
//! The engine knows nothing about hosts; this module only calls into it.

use std::borrow::Cow;

use serde::{Deserialize, Serialize};

use crate::foundation::{RawValue, ReasonCode, ValidationError, ValidationErrors};
use crate::validators::{AccountFormat, PhoneType, bank_account, id, phone, postal_code};

/// Message used when the rules do not supply one.
pub const DEFAULT_MESSAGE: &str = "is invalid";

/// Code attached to every adapter error; the reason travels as a param.
pub const ERROR_CODE: &str = "invalid";

/// Anything that can collect attribute errors.
pub trait Record {
    fn add_error(&mut self, attribute: &str, error: ValidationError);
}

impl Record for ValidationErrors {
    fn add_error(&mut self, attribute: &str, error: ValidationError) {
        self.add(error.with_field(attribute.to_owned()));
    }
}

/// Which identifier an attribute must hold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RuleKind {
    IsraeliId,
    IsraeliPhone,
    IsraeliPostalCode,
    IsraeliBankAccount,
}

/// Options for one validated attribute.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AttributeRules {
    #[serde(rename = "validates")]
    pub kind: RuleKind,

    /// Skip absent values and whitespace-only text.
    #[serde(default)]
    pub allow_blank: bool,

    /// Skip absent values.
    #[serde(default)]
    pub allow_nil: bool,

    /// Replaces [`DEFAULT_MESSAGE`].
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,

    /// Phone rules only.
    #[serde(default, rename = "type")]
    pub phone_type: PhoneType,

    /// Bank account rules only.
    #[serde(default)]
    pub format: AccountFormat,
}

impl AttributeRules {
    #[must_use]
    pub fn new(kind: RuleKind) -> Self {
        Self {
            kind,
            allow_blank: false,
            allow_nil: false,
            message: None,
            phone_type: PhoneType::default(),
            format: AccountFormat::default(),
        }
    }

    #[must_use = "builder methods must be chained or built"]
    pub fn allow_blank(mut self) -> Self {
        self.allow_blank = true;
        self
    }

    #[must_use = "builder methods must be chained or built"]
    pub fn allow_nil(mut self) -> Self {
        self.allow_nil = true;
        self
    }

    #[must_use = "builder methods must be chained or built"]
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }

    #[must_use = "builder methods must be chained or built"]
    pub fn with_phone_type(mut self, phone_type: PhoneType) -> Self {
        self.phone_type = phone_type;
        self
    }

    #[must_use = "builder methods must be chained or built"]
    pub fn with_format(mut self, format: AccountFormat) -> Self {
        self.format = format;
        self
    }

    fn message(&self) -> Cow<'static, str> {
        match &self.message {
            Some(message) => Cow::Owned(message.clone()),
            None => Cow::Borrowed(DEFAULT_MESSAGE),
        }
    }

    fn reason(&self, value: &RawValue<'_>) -> Option<ReasonCode> {
        match self.kind {
            RuleKind::IsraeliId => id::invalid_reason(value),
            RuleKind::IsraeliPhone => phone::invalid_reason(value, self.phone_type),
            RuleKind::IsraeliPostalCode => postal_code::invalid_reason(value),
            RuleKind::IsraeliBankAccount => bank_account::invalid_reason(value, self.format),
        }
    }
}

/// Validates one attribute value and records an error on failure.
///
/// Returns `true` when the value passed or was skipped.
pub fn validate_attribute<'a, R>(
    record: &mut R,
    attribute: &str,
    value: impl Into<RawValue<'a>>,
    rules: &AttributeRules,
) -> bool
where
    R: Record + ?Sized,
{
    let value = value.into();

    if (rules.allow_blank && value.is_blank()) || (rules.allow_nil && value.is_absent()) {
        return true;
    }

    let Some(reason) = rules.reason(&value) else {
        return true;
    };

    tracing::debug!(
        target: "israeli_validator",
        attribute,
        rule = ?rules.kind,
        %reason,
        "attribute failed validation"
    );

    let mut error = ValidationError::new(ERROR_CODE, rules.message())
        .with_param("reason", reason.as_str());
    if rules.kind == RuleKind::IsraeliPhone {
        error = error.with_param("expected_type", rules.phone_type.as_str());
        if let Some(detected) = phone::detect_type(&value) {
            error = error.with_param("detected_type", detected.as_str());
        }
    }

    record.add_error(attribute, error);
    false
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[derive(Default)]
    struct Contact {
        errors: Vec<(String, ValidationError)>,
    }

    impl Record for Contact {
        fn add_error(&mut self, attribute: &str, error: ValidationError) {
            self.errors.push((attribute.to_owned(), error));
        }
    }

    #[test]
    fn test_valid_value_adds_nothing() {
        let mut contact = Contact::default();
        let rules = AttributeRules::new(RuleKind::IsraeliId);
        let passed = validate_attribute(&mut contact, "id_number", "123456782", &rules);
        assert!(passed);
        assert!(contact.errors.is_empty());
    }

    #[test]
    fn test_invalid_value_uses_default_message() {
        let mut contact = Contact::default();
        let rules = AttributeRules::new(RuleKind::IsraeliPostalCode);
        assert!(!validate_attribute(&mut contact, "zip", "123", &rules));

        let (attribute, error) = &contact.errors[0];
        assert_eq!(attribute, "zip");
        assert_eq!(error.code, "invalid");
        assert_eq!(error.message, "is invalid");
        assert_eq!(error.param("reason"), Some("wrong_length"));
        assert_eq!(error.param("expected_type"), None);
    }

    #[test]
    fn test_custom_message() {
        let mut errors = ValidationErrors::new();
        let rules = AttributeRules::new(RuleKind::IsraeliBankAccount)
            .with_format(AccountFormat::Iban)
            .with_message("must be an Israeli IBAN");
        validate_attribute(&mut errors, "iban", "4985622815429", &rules);

        assert_eq!(errors.len(), 1);
        let error = &errors.errors()[0];
        assert_eq!(error.message, "must be an Israeli IBAN");
        assert_eq!(error.field.as_deref(), Some("iban"));
    }

    #[test]
    fn test_allow_blank_and_nil() {
        let mut errors = ValidationErrors::new();
        let absent = None::<&str>;

        let blank = AttributeRules::new(RuleKind::IsraeliPhone).allow_blank();
        assert!(validate_attribute(&mut errors, "phone", "  ", &blank));
        assert!(validate_attribute(&mut errors, "phone", absent, &blank));

        let nil = AttributeRules::new(RuleKind::IsraeliPhone).allow_nil();
        assert!(validate_attribute(&mut errors, "phone", absent, &nil));
        assert!(!validate_attribute(&mut errors, "phone", "", &nil));

        assert_eq!(errors.len(), 1);
        assert_eq!(errors.errors()[0].param("reason"), Some("blank"));
    }

    #[test]
    fn test_phone_params() {
        let mut errors = ValidationErrors::new();
        let rules = AttributeRules::new(RuleKind::IsraeliPhone)
            .with_phone_type(PhoneType::Mobile);
        validate_attribute(&mut errors, "phone", "0721234567", &rules);

        let error = &errors.errors()[0];
        assert_eq!(error.param("reason"), Some("wrong_type"));
        assert_eq!(error.param("expected_type"), Some("mobile"));
        assert_eq!(error.param("detected_type"), Some("voip"));
    }

    #[test]
    fn test_rules_from_json() {
        let rules: AttributeRules = serde_json::from_str(
            r#"{ "validates": "israeli_bank_account", "format": "domestic", "allow_nil": true }"#,
        )
        .unwrap();
        assert_eq!(
            rules,
            AttributeRules::new(RuleKind::IsraeliBankAccount)
                .with_format(AccountFormat::Domestic)
                .allow_nil()
        );
    }

    #[test]
    fn test_rules_reject_unknown_keys() {
        let json = r#"{ "validates": "israeli_id", "strict": true }"#;
        assert!(serde_json::from_str::<AttributeRules>(json).is_err());
    }
}
