//! Macros for the small closed option enums (phone types, styles, formats).
//!
//! # Available Macros
//!
//! - `option_enum!`: enum with stable string names + `Display` + `FromStr` + serde
//!
//! # Examples
//!
//! ```rust,ignore
//! option_enum! {
//!     /// Output style for postal codes.
//!     #[derive(Default)]
//!     pub enum PostalStyle {
//!         #[default]
//!         Compact => "compact",
//!         Spaced => "spaced",
//!     }
//! }
//!
//! assert_eq!("spaced".parse::<PostalStyle>(), Ok(PostalStyle::Spaced));
//! ```

// ============================================================================
// OPTION ENUM MACRO
// ============================================================================

/// Creates a closed option enum whose variants have stable snake_case names.
///
/// Generates:
/// - the enum with `Debug, Clone, Copy, PartialEq, Eq, Hash` and serde derives
///   (each variant renamed to its string name)
/// - `ALL` (declaration order) and `as_str()`
/// - `Display` writing the string name
/// - `FromStr` accepting the string name case-insensitively, failing with
///   [`UnknownOption`](crate::validators::UnknownOption)
macro_rules! option_enum {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $(
                $(#[$vmeta:meta])*
                $variant:ident => $text:literal
            ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ::serde::Serialize, ::serde::Deserialize)]
        $vis enum $name {
            $(
                $(#[$vmeta])*
                #[serde(rename = $text)]
                $variant,
            )+
        }

        impl $name {
            /// Every option, in declaration order.
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            /// Stable string name of the option.
            #[must_use]
            pub const fn as_str(self) -> &'static str {
                match self {
                    $($name::$variant => $text,)+
                }
            }
        }

        impl ::std::fmt::Display for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl ::std::str::FromStr for $name {
            type Err = $crate::validators::UnknownOption;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                let wanted = s.trim().to_ascii_lowercase();
                Self::ALL
                    .iter()
                    .copied()
                    .find(|option| option.as_str() == wanted)
                    .ok_or_else(|| $crate::validators::UnknownOption::new(
                        stringify!($name),
                        s,
                        Self::ALL.iter().map(|option| option.as_str()),
                    ))
            }
        }
    };
}
