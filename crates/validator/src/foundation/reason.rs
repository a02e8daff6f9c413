//! Machine-readable failure reasons.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Why a value failed validation.
///
/// A reason is present if and only if the value is invalid; every invalid
/// path maps to exactly one variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReasonCode {
    /// Input is absent or empty after sanitizing.
    Blank,
    /// Digit count does not match the target format.
    WrongLength,
    /// No structural pattern matched.
    InvalidFormat,
    /// Structurally correct, but the checksum fails.
    InvalidChecksum,
    /// Structurally valid for some sub-type, but not the requested one.
    WrongType,
}

impl ReasonCode {
    /// Every reason code, in declaration order.
    pub const ALL: [ReasonCode; 5] = [
        Self::Blank,
        Self::WrongLength,
        Self::InvalidFormat,
        Self::InvalidChecksum,
        Self::WrongType,
    ];

    /// Stable snake_case code.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Blank => "blank",
            Self::WrongLength => "wrong_length",
            Self::InvalidFormat => "invalid_format",
            Self::InvalidChecksum => "invalid_checksum",
            Self::WrongType => "wrong_type",
        }
    }

    /// Default English message.
    #[must_use]
    pub const fn message(self) -> &'static str {
        match self {
            Self::Blank => "can't be blank",
            Self::WrongLength => "has the wrong number of digits",
            Self::InvalidFormat => "is not in a recognized format",
            Self::InvalidChecksum => "has an invalid check digit",
            Self::WrongType => "is not of the requested type",
        }
    }
}

impl fmt::Display for ReasonCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when parsing an unknown reason code.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown reason code `{0}`")]
pub struct UnknownReasonCode(pub String);

impl FromStr for ReasonCode {
    type Err = UnknownReasonCode;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|reason| reason.as_str() == s)
            .ok_or_else(|| UnknownReasonCode(s.to_owned()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_codes_round_trip_through_from_str() {
        for reason in ReasonCode::ALL {
            assert_eq!(reason.as_str().parse::<ReasonCode>(), Ok(reason));
        }
        assert!("nope".parse::<ReasonCode>().is_err());
    }

    #[test]
    fn test_serde_uses_snake_case() {
        let json = serde_json::to_string(&ReasonCode::InvalidChecksum).unwrap();
        assert_eq!(json, "\"invalid_checksum\"");
    }
}
