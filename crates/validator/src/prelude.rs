//! Prelude module for convenient imports.
//!
//! Provides a single `use israeli_validator::prelude::*;` import that brings
//! in the facade functions, option enums, result types and validator objects.
//!
//! # Examples
//!
//! ```rust
//! use israeli_validator::prelude::*;
//!
//! assert!(valid_postal_code("2610101"));
//! assert!(IsraeliPhone::new(PhoneType::Voip).validate("072-123-4567").is_ok());
//! ```

// ============================================================================
// FOUNDATION: Core traits, errors, raw input
// ============================================================================

pub use crate::foundation::{
    RawValue, ReasonCode, Validate, ValidationError, ValidationErrors, validate_with_all,
    validate_with_any,
};

// ============================================================================
// VALIDATORS: Objects and option enums
// ============================================================================

pub use crate::validators::{
    AccountFormat, AccountKind, AccountStyle, IsraeliBankAccount, IsraeliId, IsraeliPhone,
    IsraeliPostalCode, PhoneKind, PhoneStyle, PhoneType, PostalStyle,
};

// ============================================================================
// RESULTS AND FACADE
// ============================================================================

pub use crate::error::InvalidFormatError;
pub use crate::facade::*;
pub use crate::outcome::{IdentifierKind, Outcome, Style, Subtype};

// ============================================================================
// ADAPTER
// ============================================================================

pub use crate::adapter::{AttributeRules, Record, RuleKind, validate_attribute};
