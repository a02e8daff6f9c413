//! # israeli-validator
//!
//! Validation, normalization, classification and formatting of Israeli
//! identifiers: national ID numbers (Mispar Zehut), phone numbers, postal
//! codes (Mikud) and bank account numbers (domestic and IBAN).
//!
//! ## Quick Start
//!
//! ```rust
//! use israeli_validator::prelude::*;
//!
//! assert!(valid_id("123456782"));
//! assert!(valid_phone("+972501234567", PhoneType::Mobile));
//! assert_eq!(format_phone("0501234567", PhoneStyle::Dashed).as_deref(), Some("050-123-4567"));
//!
//! let outcome = parse_id("123456789");
//! assert_eq!(outcome.reason(), Some(ReasonCode::InvalidChecksum));
//! ```
//!
//! ## Surfaces
//!
//! - **Predicates**: [`valid_id`], [`valid_phone`], [`valid_postal_code`], [`valid_bank_account`]
//! - **Rich results**: [`parse_id`], [`parse_phone`], [`parse_postal_code`],
//!   [`parse_bank_account`] returning an [`Outcome`]
//! - **Fail-fast**: [`ensure_valid_id`] and friends returning [`InvalidFormatError`]
//! - **Formatting**: [`format_id`], [`format_phone`], [`format_postal_code`],
//!   [`format_bank_account`]
//! - **Validator objects**: [`validators::IsraeliId`] and friends implement
//!   [`Validate`](foundation::Validate)
//! - **Host adapter**: [`adapter::validate_attribute`] for per-attribute hooks
//!
//! Every operation is a pure function. No call observes or mutates shared state.

#[macro_use]
mod macros;

pub mod adapter;
pub mod checksum;
pub mod error;
mod facade;
pub mod foundation;
pub mod outcome;
pub mod prelude;
pub mod sanitizer;
pub mod validators;

pub use error::InvalidFormatError;
pub use facade::*;
pub use foundation::{RawValue, ReasonCode};
pub use outcome::{IdentifierKind, Outcome, Style, Subtype};
