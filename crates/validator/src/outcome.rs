//! Rich validation results.
//!
//! [`Outcome`] is the value returned by every `parse` function. It records the
//! caller's original input next to the normalized form, the verdict, the
//! first failing reason, and the detected subtype for kinds that have one.
//! Formatting is derived on demand, so an outcome never goes stale.

use std::fmt;

use serde::Serialize;

use crate::error::InvalidFormatError;
use crate::foundation::{RawValue, ReasonCode};
use crate::validators::{AccountKind, AccountStyle, PhoneKind, PhoneStyle, PostalStyle};
use crate::validators::{bank_account, phone, postal_code};

// ============================================================================
// IDENTIFIER KIND
// ============================================================================

/// The four identifier kinds this crate understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum IdentifierKind {
    Id,
    Phone,
    PostalCode,
    BankAccount,
}

impl IdentifierKind {
    /// Stable snake_case name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Id => "id",
            Self::Phone => "phone",
            Self::PostalCode => "postal_code",
            Self::BankAccount => "bank_account",
        }
    }

    /// Human readable label used in error messages.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Id => "Israeli ID",
            Self::Phone => "Israeli phone number",
            Self::PostalCode => "Israeli postal code",
            Self::BankAccount => "Israeli bank account",
        }
    }
}

impl fmt::Display for IdentifierKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Records a rejection at trace level and hands the reason back.
pub(crate) fn rejected(kind: IdentifierKind, reason: ReasonCode) -> ReasonCode {
    tracing::trace!(
        target: "israeli_validator",
        kind = kind.as_str(),
        reason = %reason,
        "identifier rejected"
    );
    reason
}

// ============================================================================
// SUBTYPE AND STYLE
// ============================================================================

/// Detected category of a valid phone number or bank account.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(untagged)]
pub enum Subtype {
    Phone(PhoneKind),
    Account(AccountKind),
}

impl fmt::Display for Subtype {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Phone(kind) => kind.fmt(f),
            Self::Account(kind) => kind.fmt(f),
        }
    }
}

/// Formatting style for any kind that has more than one rendering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Style {
    Phone(PhoneStyle),
    Postal(PostalStyle),
    Account(AccountStyle),
}

impl From<PhoneStyle> for Style {
    fn from(style: PhoneStyle) -> Self {
        Self::Phone(style)
    }
}

impl From<PostalStyle> for Style {
    fn from(style: PostalStyle) -> Self {
        Self::Postal(style)
    }
}

impl From<AccountStyle> for Style {
    fn from(style: AccountStyle) -> Self {
        Self::Account(style)
    }
}

// ============================================================================
// OUTCOME
// ============================================================================

/// Result of validating a single identifier.
///
/// A valid outcome always has a normalized value and no reason; an invalid
/// one always has a reason and no subtype.
///
/// # Examples
///
/// ```rust
/// use israeli_validator::{parse_phone, ReasonCode};
/// use israeli_validator::validators::{PhoneStyle, PhoneType};
///
/// let outcome = parse_phone("+972-50-123-4567", PhoneType::Any);
/// assert!(outcome.is_valid());
/// assert!(outcome.is_mobile());
/// assert_eq!(outcome.normalized(), Some("0501234567"));
/// assert_eq!(outcome.formatted().as_deref(), Some("050-123-4567"));
/// assert_eq!(
///     outcome.formatted_as(PhoneStyle::International).as_deref(),
///     Some("+972-501234567")
/// );
///
/// let outcome = parse_phone("02-123-4567", PhoneType::Mobile);
/// assert_eq!(outcome.reason(), Some(ReasonCode::WrongType));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Outcome {
    kind: IdentifierKind,
    original: RawValue<'static>,
    normalized: Option<String>,
    valid: bool,
    reason: Option<ReasonCode>,
    #[serde(skip_serializing_if = "Option::is_none")]
    subtype: Option<Subtype>,
}

impl Outcome {
    pub(crate) fn valid(
        kind: IdentifierKind,
        raw: RawValue<'_>,
        normalized: String,
        subtype: Option<Subtype>,
    ) -> Self {
        Self {
            kind,
            original: raw.into_owned(),
            normalized: Some(normalized),
            valid: true,
            reason: None,
            subtype,
        }
    }

    pub(crate) fn invalid(
        kind: IdentifierKind,
        raw: RawValue<'_>,
        normalized: Option<String>,
        reason: ReasonCode,
    ) -> Self {
        Self {
            kind,
            original: raw.into_owned(),
            normalized,
            valid: false,
            reason: Some(reason),
            subtype: None,
        }
    }

    /// Which identifier kind was validated.
    #[must_use]
    pub fn kind(&self) -> IdentifierKind {
        self.kind
    }

    /// The input exactly as given.
    #[must_use]
    pub fn original(&self) -> &RawValue<'static> {
        &self.original
    }

    /// The sanitized value; `None` only when the input was absent.
    #[must_use]
    pub fn normalized(&self) -> Option<&str> {
        self.normalized.as_deref()
    }

    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.valid
    }

    #[must_use]
    pub fn is_invalid(&self) -> bool {
        !self.valid
    }

    /// The first failing condition, `None` when valid.
    #[must_use]
    pub fn reason(&self) -> Option<ReasonCode> {
        self.reason
    }

    #[must_use]
    pub fn subtype(&self) -> Option<Subtype> {
        self.subtype
    }

    /// Renders the value in its kind's default style; `None` when invalid.
    ///
    /// IDs render as the padded 9 digits, phones dashed, postal codes
    /// compact and bank accounts in domestic style.
    #[must_use]
    pub fn formatted(&self) -> Option<String> {
        match self.kind {
            IdentifierKind::Id => self.normalized.clone().filter(|_| self.valid),
            IdentifierKind::Phone => self.formatted_as(PhoneStyle::default()),
            IdentifierKind::PostalCode => self.formatted_as(PostalStyle::default()),
            IdentifierKind::BankAccount => self.formatted_as(AccountStyle::default()),
        }
    }

    /// Renders the value in `style`.
    ///
    /// Returns `None` when the outcome is invalid or the style belongs to
    /// another kind. IDs have a single rendering and ignore the style.
    #[must_use]
    pub fn formatted_as(&self, style: impl Into<Style>) -> Option<String> {
        if !self.valid {
            return None;
        }

        match (self.kind, style.into()) {
            (IdentifierKind::Id, _) => self.normalized.clone(),
            (IdentifierKind::Phone, Style::Phone(style)) => phone::format(&self.original, style),
            (IdentifierKind::PostalCode, Style::Postal(style)) => {
                postal_code::format(&self.original, style)
            }
            (IdentifierKind::BankAccount, Style::Account(style)) => {
                bank_account::format(&self.original, style)
            }
            _ => None,
        }
    }

    #[must_use]
    pub fn is_mobile(&self) -> bool {
        self.subtype == Some(Subtype::Phone(PhoneKind::Mobile))
    }

    #[must_use]
    pub fn is_landline(&self) -> bool {
        self.subtype == Some(Subtype::Phone(PhoneKind::Landline))
    }

    #[must_use]
    pub fn is_voip(&self) -> bool {
        self.subtype == Some(Subtype::Phone(PhoneKind::Voip))
    }

    #[must_use]
    pub fn is_domestic(&self) -> bool {
        self.subtype == Some(Subtype::Account(AccountKind::Domestic))
    }

    #[must_use]
    pub fn is_iban(&self) -> bool {
        self.subtype == Some(Subtype::Account(AccountKind::Iban))
    }

    /// Converts to a `Result`, turning an invalid outcome into an
    /// [`InvalidFormatError`] that carries its reason.
    pub fn into_result(self) -> Result<Self, InvalidFormatError> {
        match self.reason {
            None => Ok(self),
            Some(reason) => Err(InvalidFormatError::new(self.kind, reason)),
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.formatted() {
            Some(text) => f.write_str(&text),
            None => Ok(()),
        }
    }
}
