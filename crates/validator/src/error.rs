//! Fail-fast error for the `ensure_valid_*` surface.

use thiserror::Error;

use crate::foundation::ReasonCode;
use crate::outcome::IdentifierKind;

/// An identifier failed validation.
///
/// One variant per identifier kind; each carries the human message and the
/// same [`ReasonCode`] the predicate surface would report.
///
/// # Examples
///
/// ```rust
/// use israeli_validator::{ensure_valid_id, InvalidFormatError, ReasonCode};
///
/// let err = ensure_valid_id("123456789").unwrap_err();
/// assert!(matches!(err, InvalidFormatError::Id { .. }));
/// assert_eq!(err.reason(), ReasonCode::InvalidChecksum);
/// assert_eq!(err.to_string(), "Israeli ID has an invalid check digit");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvalidFormatError {
    #[error("{message}")]
    Id { message: String, reason: ReasonCode },

    #[error("{message}")]
    Phone { message: String, reason: ReasonCode },

    #[error("{message}")]
    PostalCode { message: String, reason: ReasonCode },

    #[error("{message}")]
    BankAccount { message: String, reason: ReasonCode },
}

impl InvalidFormatError {
    /// Builds the error for `kind`, composing the message from the kind label
    /// and the reason.
    #[must_use]
    pub fn new(kind: IdentifierKind, reason: ReasonCode) -> Self {
        let message = format!("{} {}", kind.label(), reason.message());
        match kind {
            IdentifierKind::Id => Self::Id { message, reason },
            IdentifierKind::Phone => Self::Phone { message, reason },
            IdentifierKind::PostalCode => Self::PostalCode { message, reason },
            IdentifierKind::BankAccount => Self::BankAccount { message, reason },
        }
    }

    #[must_use]
    pub fn reason(&self) -> ReasonCode {
        match self {
            Self::Id { reason, .. }
            | Self::Phone { reason, .. }
            | Self::PostalCode { reason, .. }
            | Self::BankAccount { reason, .. } => *reason,
        }
    }

    #[must_use]
    pub fn kind(&self) -> IdentifierKind {
        match self {
            Self::Id { .. } => IdentifierKind::Id,
            Self::Phone { .. } => IdentifierKind::Phone,
            Self::PostalCode { .. } => IdentifierKind::PostalCode,
            Self::BankAccount { .. } => IdentifierKind::BankAccount,
        }
    }

    /// Stable reason code string, e.g. `"wrong_length"`.
    #[must_use]
    pub fn code(&self) -> &'static str {
        self.reason().as_str()
    }

    #[must_use]
    pub fn message(&self) -> &str {
        match self {
            Self::Id { message, .. }
            | Self::Phone { message, .. }
            | Self::PostalCode { message, .. }
            | Self::BankAccount { message, .. } => message,
        }
    }
}
