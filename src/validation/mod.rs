//! Identifier validation.
//!
//! The entry points are the pure functions [`validate_dni`] and
//! [`validate_ruc`]. Both treat blank input as an unfilled optional field and
//! return `Valid` with an empty value instead of an error; callers that
//! require a value must check [`ValidationResult::is_blank`] themselves.
//!
//! [`ValidationResult::is_blank`]: crate::domain::ValidationResult::is_blank

pub mod checksum;
mod validators;

pub use checksum::{ruc_check_digit, ruc_checksum_is_valid};
pub use validators::{
    validate, validate_dni, validate_ruc, validator_for, DniValidator, IdentifierValidator,
    RucValidator, DNI_LENGTH,
};
