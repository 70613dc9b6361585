//! Property-based tests for the identifier validators.

use pe_id_validator::validation::{ruc_check_digit, validate_dni, validate_ruc};
use pe_id_validator::InvalidReason;
use proptest::prelude::*;

/// Property: any string of exactly 8 ASCII digits is a valid DNI, unchanged.
#[test]
fn prop_eight_digits_are_valid_dni() {
    proptest!(|(dni in "[0-9]{8}")| {
        let result = validate_dni(&dni);
        prop_assert_eq!(result.value(), Some(dni.as_str()));
    });
}

/// Property: all-digit DNIs of any other non-zero length are WrongLength.
#[test]
fn prop_other_lengths_are_wrong_length_dni() {
    proptest!(|(dni in "[0-9]{1,7}|[0-9]{9,20}")| {
        prop_assert_eq!(validate_dni(&dni).reason(), Some(InvalidReason::WrongLength));
    });
}

/// Property: a letter anywhere makes both validators report NotNumeric.
#[test]
fn prop_letters_are_not_numeric() {
    proptest!(|(prefix in "[0-9]{0,6}", letter in "[A-Za-z]", suffix in "[0-9]{0,6}")| {
        let input = format!("{}{}{}", prefix, letter, suffix);
        prop_assert_eq!(validate_dni(&input).reason(), Some(InvalidReason::NotNumeric));
        prop_assert_eq!(validate_ruc(&input).reason(), Some(InvalidReason::NotNumeric));
    });
}

/// Property: RUC lengths other than 8 and 11 are WrongLength whatever the digits.
#[test]
fn prop_ruc_length_gate() {
    proptest!(|(ruc in "[0-9]{1,7}|[0-9]{9,10}|[0-9]{12,20}")| {
        prop_assert_eq!(validate_ruc(&ruc).reason(), Some(InvalidReason::WrongLength));
    });
}

/// Property: every 10-digit body has exactly one valid 11-digit completion.
#[test]
fn prop_eleven_digit_ruc_has_one_check_digit() {
    proptest!(|(body in "[0-9]{10}")| {
        let valid: Vec<u32> = (0..=9)
            .filter(|d| validate_ruc(&format!("{}{}", body, d)).is_valid())
            .collect();
        prop_assert_eq!(valid.len(), 1);
        prop_assert_eq!(Some(valid[0]), ruc_check_digit(&body));
    });
}

/// Property: a 7-digit body has at most one valid 8-digit completion.
#[test]
fn prop_eight_digit_ruc_has_at_most_one_check_digit() {
    proptest!(|(body in "[0-9]{7}")| {
        let valid: Vec<u32> = (0..=9)
            .filter(|d| validate_ruc(&format!("{}{}", body, d)).is_valid())
            .collect();
        prop_assert!(valid.len() <= 1);
        prop_assert_eq!(valid.first().copied(), ruc_check_digit(&body));
    });
}

/// Property: whitespace-only input is a blank pass-through for both validators.
#[test]
fn prop_blank_input_passes_through() {
    proptest!(|(blank in "[ \t\r\n]{0,10}")| {
        prop_assert!(validate_dni(&blank).is_blank());
        prop_assert!(validate_ruc(&blank).is_blank());
    });
}

/// Property: validation is deterministic.
#[test]
fn prop_validation_is_idempotent() {
    proptest!(|(input in "\\PC{0,14}")| {
        prop_assert_eq!(validate_dni(&input), validate_dni(&input));
        prop_assert_eq!(validate_ruc(&input), validate_ruc(&input));
    });
}
