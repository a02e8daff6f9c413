//! Checksum algorithms.
//!
//! - [`luhn_valid`]: mod-10 check used by Israeli ID numbers. The Israeli
//!   variant weighs digits from the left (index 0 has weight 1, index 1 has
//!   weight 2, and so on), so results depend on the input already being
//!   padded to its final length.
//! - [`iso7064_mod97`]: ISO 7064 MOD 97-10 remainder used by IBANs.

/// Validates a digit string with the left-to-right Luhn variant.
///
/// Returns `false` (never panics) for empty input or any non-digit character.
///
/// # Examples
///
/// ```rust
/// use israeli_validator::checksum::luhn_valid;
///
/// assert!(luhn_valid("123456782"));
/// assert!(!luhn_valid("123456789"));
/// assert!(!luhn_valid("12345678A"));
/// ```
#[must_use]
pub fn luhn_valid(digits: &str) -> bool {
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return false;
    }

    let sum: u32 = digits
        .bytes()
        .enumerate()
        .map(|(index, byte)| {
            let weight = if index.is_multiple_of(2) { 1 } else { 2 };
            let value = u32::from(byte - b'0') * weight;
            if value > 9 { value - 9 } else { value }
        })
        .sum();

    sum.is_multiple_of(10)
}

/// Computes the ISO 7064 MOD 97-10 remainder of an IBAN.
///
/// The first four characters are moved to the end, letters are replaced by
/// their two-digit codes (`A` = 10 … `Z` = 35) and the resulting number is
/// reduced modulo 97 incrementally, so arbitrary lengths never overflow.
///
/// Returns `None` when the input is shorter than four characters or contains
/// anything other than `0-9` and `A-Z`.
///
/// # Examples
///
/// ```rust
/// use israeli_validator::checksum::iso7064_mod97;
///
/// assert_eq!(iso7064_mod97("IL620108000000099999999"), Some(1));
/// assert_eq!(iso7064_mod97("IL630108000000099999999"), Some(2));
/// assert_eq!(iso7064_mod97("il62"), None);
/// ```
#[must_use]
pub fn iso7064_mod97(iban: &str) -> Option<u32> {
    if iban.len() < 4 || !iban.is_ascii() {
        return None;
    }

    let (head, tail) = iban.split_at(4);
    let mut remainder: u32 = 0;

    for byte in tail.bytes().chain(head.bytes()) {
        remainder = match byte {
            b'0'..=b'9' => (remainder * 10 + u32::from(byte - b'0')) % 97,
            b'A'..=b'Z' => (remainder * 100 + u32::from(byte - b'A') + 10) % 97,
            _ => return None,
        };
    }

    Some(remainder)
}

/// Returns `true` when the IBAN's MOD 97-10 remainder is 1.
#[must_use]
pub fn iban_checksum_valid(iban: &str) -> bool {
    iso7064_mod97(iban) == Some(1)
}
