//! DNI and RUC validators.

use super::checksum::ruc_checksum_is_valid;
use crate::domain::{IdentifierKind, InvalidReason, ValidationResult};

/// Number of digits in a DNI.
pub const DNI_LENGTH: usize = 8;

/// A validator for one identifier kind.
pub trait IdentifierValidator: Send + Sync {
    /// The kind this validator accepts.
    fn kind(&self) -> IdentifierKind;

    /// Validate a candidate. Never panics on malformed input.
    fn validate(&self, text: &str) -> ValidationResult;
}

/// Validator for DNI numbers.
#[derive(Debug, Clone, Copy, Default)]
pub struct DniValidator;

/// Validator for RUC numbers.
#[derive(Debug, Clone, Copy, Default)]
pub struct RucValidator;

impl IdentifierValidator for DniValidator {
    fn kind(&self) -> IdentifierKind {
        IdentifierKind::Dni
    }

    fn validate(&self, text: &str) -> ValidationResult {
        validate_dni(text)
    }
}

impl IdentifierValidator for RucValidator {
    fn kind(&self) -> IdentifierKind {
        IdentifierKind::Ruc
    }

    fn validate(&self, text: &str) -> ValidationResult {
        validate_ruc(text)
    }
}

static DNI_VALIDATOR: DniValidator = DniValidator;
static RUC_VALIDATOR: RucValidator = RucValidator;

/// Get the validator for a kind.
pub fn validator_for(kind: IdentifierKind) -> &'static dyn IdentifierValidator {
    match kind {
        IdentifierKind::Dni => &DNI_VALIDATOR,
        IdentifierKind::Ruc => &RUC_VALIDATOR,
    }
}

/// Validate a candidate of the given kind.
pub fn validate(kind: IdentifierKind, text: &str) -> ValidationResult {
    validator_for(kind).validate(text)
}

fn is_blank(text: &str) -> bool {
    text.trim().is_empty()
}

fn is_all_digits(text: &str) -> bool {
    text.bytes().all(|b| b.is_ascii_digit())
}

/// Validate a DNI.
///
/// # Rules
///
/// - Blank input is `Valid` with an empty value
/// - Any character other than `0`-`9` is `NotNumeric`
/// - Anything but exactly 8 digits is `WrongLength`
///
/// Non-blank input is returned unchanged; surrounding whitespace is a
/// non-digit and is rejected, not trimmed.
///
/// # Example
///
/// ```
/// use pe_id_validator::validate_dni;
///
/// assert!(validate_dni("12345678").is_valid());
/// assert!(!validate_dni("1234567").is_valid());
/// ```
pub fn validate_dni(text: &str) -> ValidationResult {
    if is_blank(text) {
        return ValidationResult::blank();
    }
    if !is_all_digits(text) {
        return ValidationResult::invalid(InvalidReason::NotNumeric);
    }
    if text.len() != DNI_LENGTH {
        return ValidationResult::invalid(InvalidReason::WrongLength);
    }

    ValidationResult::valid(text)
}

/// Validate a RUC.
///
/// # Rules
///
/// - Blank input is `Valid` with an empty value
/// - Any character other than `0`-`9` is `NotNumeric`
/// - Lengths other than 8 or 11 are `WrongLength`
/// - A check digit that does not match the layout's modulo-11 scheme is
///   `BadChecksum`
///
/// # Example
///
/// ```
/// use pe_id_validator::validate_ruc;
///
/// assert!(validate_ruc("20131312955").is_valid());
/// assert!(!validate_ruc("20131312954").is_valid());
/// ```
pub fn validate_ruc(text: &str) -> ValidationResult {
    if is_blank(text) {
        return ValidationResult::blank();
    }
    if !is_all_digits(text) {
        return ValidationResult::invalid(InvalidReason::NotNumeric);
    }
    if !IdentifierKind::Ruc.allowed_lengths().contains(&text.len()) {
        return ValidationResult::invalid(InvalidReason::WrongLength);
    }
    if !ruc_checksum_is_valid(text) {
        return ValidationResult::invalid(InvalidReason::BadChecksum);
    }

    ValidationResult::valid(text)
}
