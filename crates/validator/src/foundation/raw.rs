//! Raw input accepted by every validator.
//!
//! Callers hand in text, an integer, or nothing at all. [`RawValue`] unifies
//! those shapes without copying borrowed text; integers are rendered as their
//! decimal representation before any sanitizing happens.

use std::borrow::Cow;

use serde::Serialize;

/// Input as given by the caller. Never mutated, only read.
///
/// # Examples
///
/// ```rust
/// use israeli_validator::foundation::RawValue;
///
/// assert_eq!(RawValue::from("050-123-4567").text().as_deref(), Some("050-123-4567"));
/// assert_eq!(RawValue::from(12_345_678_i64).text().as_deref(), Some("12345678"));
/// assert_eq!(RawValue::from(None::<&str>).text(), None);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(untagged)]
pub enum RawValue<'a> {
    /// No value at all.
    #[default]
    Absent,
    /// Textual input, possibly containing separators.
    Text(Cow<'a, str>),
    /// Integer input.
    Integer(i128),
}

impl RawValue<'_> {
    /// Returns the textual form of the value, or `None` when absent.
    #[must_use]
    pub fn text(&self) -> Option<Cow<'_, str>> {
        match self {
            Self::Absent => None,
            Self::Text(text) => Some(Cow::Borrowed(text.as_ref())),
            Self::Integer(n) => Some(Cow::Owned(n.to_string())),
        }
    }

    /// Returns `true` for an absent value.
    #[must_use]
    pub fn is_absent(&self) -> bool {
        matches!(self, Self::Absent)
    }

    /// Returns `true` for an absent value or text that is empty or all whitespace.
    ///
    /// Integers are never blank.
    #[must_use]
    pub fn is_blank(&self) -> bool {
        match self {
            Self::Absent => true,
            Self::Text(text) => text.trim().is_empty(),
            Self::Integer(_) => false,
        }
    }

    /// Detaches the value from any borrowed input.
    #[must_use]
    pub fn into_owned(self) -> RawValue<'static> {
        match self {
            Self::Absent => RawValue::Absent,
            Self::Text(text) => RawValue::Text(Cow::Owned(text.into_owned())),
            Self::Integer(n) => RawValue::Integer(n),
        }
    }
}

impl<'a> From<&'a str> for RawValue<'a> {
    fn from(value: &'a str) -> Self {
        Self::Text(Cow::Borrowed(value))
    }
}

impl<'a> From<&'a String> for RawValue<'a> {
    fn from(value: &'a String) -> Self {
        Self::Text(Cow::Borrowed(value.as_str()))
    }
}

impl From<String> for RawValue<'_> {
    fn from(value: String) -> Self {
        Self::Text(Cow::Owned(value))
    }
}

impl<'a> From<Cow<'a, str>> for RawValue<'a> {
    fn from(value: Cow<'a, str>) -> Self {
        Self::Text(value)
    }
}

impl<'a, T> From<Option<T>> for RawValue<'a>
where
    T: Into<RawValue<'a>>,
{
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Absent, Into::into)
    }
}

impl<'a, 'b> From<&'b RawValue<'a>> for RawValue<'b> {
    fn from(value: &'b RawValue<'a>) -> Self {
        match value {
            RawValue::Absent => RawValue::Absent,
            RawValue::Text(text) => RawValue::Text(Cow::Borrowed(text.as_ref())),
            RawValue::Integer(n) => RawValue::Integer(*n),
        }
    }
}

macro_rules! impl_from_integer {
    ($($ty:ty),* $(,)?) => {
        $(
            impl From<$ty> for RawValue<'_> {
                fn from(value: $ty) -> Self {
                    Self::Integer(i128::from(value))
                }
            }
        )*
    };
}

impl_from_integer!(i8, i16, i32, i64, u8, u16, u32, u64);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_is_borrowed() {
        let raw = RawValue::from("123");
        assert!(matches!(raw.text(), Some(Cow::Borrowed("123"))));
    }

    #[test]
    fn test_integer_renders_decimal() {
        let id = RawValue::from(123_456_782_u32);
        assert_eq!(id.text().as_deref(), Some("123456782"));
        assert_eq!(RawValue::from(-5_i8).text().as_deref(), Some("-5"));
    }

    #[test]
    fn test_blank() {
        assert!(RawValue::Absent.is_blank());
        assert!(RawValue::from("   ").is_blank());
        assert!(RawValue::from("").is_blank());
        assert!(!RawValue::from("0").is_blank());
        assert!(!RawValue::from(0_u8).is_blank());
    }

    #[test]
    fn test_option_conversion() {
        assert!(RawValue::from(None::<String>).is_absent());
        assert_eq!(
            RawValue::from(Some("abc")),
            RawValue::Text(Cow::Borrowed("abc"))
        );
    }

    #[test]
    fn test_into_owned_keeps_content() {
        let owned = {
            let text = String::from("02-123-4567");
            RawValue::from(&text).into_owned()
        };
        assert_eq!(owned.text().as_deref(), Some("02-123-4567"));
    }
}
