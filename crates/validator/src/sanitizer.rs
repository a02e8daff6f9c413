//! Input sanitization shared by every identifier kind.
//!
//! Strips the formatting noise people type around identifiers (whitespace,
//! hyphens, periods, plus signs) and folds Israeli international dialing
//! prefixes back to the domestic leading zero.

use crate::foundation::RawValue;

/// Country calling code for Israel.
pub const COUNTRY_CODE: &str = "972";

/// International access code followed by the country code.
const INTERNATIONAL_PREFIX: &str = "00972";

#[inline]
fn is_separator(c: char) -> bool {
    c.is_whitespace() || matches!(c, '-' | '.' | '+')
}

/// Removes separator characters from `text`.
///
/// Only separators are removed; any other character (a stray letter, say) is
/// kept so that downstream digit patterns reject it.
#[must_use]
pub fn strip_separators(text: &str) -> String {
    text.chars().filter(|&c| !is_separator(c)).collect()
}

/// Returns the input with whitespace, `-`, `.` and `+` removed.
///
/// Returns `None` for absent input. Integers are rendered in decimal first.
///
/// # Examples
///
/// ```rust
/// use israeli_validator::sanitizer::digits_only;
///
/// assert_eq!(digits_only("123-456-789").as_deref(), Some("123456789"));
/// assert_eq!(digits_only("12 34.56").as_deref(), Some("123456"));
/// assert_eq!(digits_only(123_456_u32).as_deref(), Some("123456"));
/// assert_eq!(digits_only(None::<&str>), None);
/// ```
#[must_use]
pub fn digits_only<'a>(value: impl Into<RawValue<'a>>) -> Option<String> {
    let raw = value.into();
    raw.text().map(|text| strip_separators(&text))
}

/// Sanitizes a phone number and folds an international prefix to `0`.
///
/// A leading `00972` or `972` is replaced by a single `0`, once, at the start
/// of the string only. Domestic numbers pass through unchanged.
///
/// # Examples
///
/// ```rust
/// use israeli_validator::sanitizer::normalize_phone;
///
/// assert_eq!(normalize_phone("+972-50-123-4567").as_deref(), Some("0501234567"));
/// assert_eq!(normalize_phone("00972501234567").as_deref(), Some("0501234567"));
/// assert_eq!(normalize_phone("050-123-4567").as_deref(), Some("0501234567"));
/// ```
#[must_use]
pub fn normalize_phone<'a>(value: impl Into<RawValue<'a>>) -> Option<String> {
    let cleaned = digits_only(value)?;

    let rest = cleaned
        .strip_prefix(INTERNATIONAL_PREFIX)
        .or_else(|| cleaned.strip_prefix(COUNTRY_CODE));

    Some(match rest {
        Some(rest) => format!("0{rest}"),
        None => cleaned,
    })
}

/// Normalizes an IBAN candidate: whitespace removed, ASCII upper-cased.
#[must_use]
pub fn normalize_iban<'a>(value: impl Into<RawValue<'a>>) -> Option<String> {
    let raw = value.into();
    raw.text().map(|text| {
        text.chars()
            .filter(|c| !c.is_whitespace())
            .map(|c| c.to_ascii_uppercase())
            .collect()
    })
}
