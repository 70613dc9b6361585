//! Shared identifier fixtures for integration tests.

#![allow(dead_code)]

use pe_id_validator::validation::ruc_check_digit;

/// RUCs that pass the checksum, both layouts.
pub const VALID_RUCS: &[&str] = &[
    "10023459",
    "00000060",
    "12345674",
    "00000000001",
    "20131312955",
    "20100070970",
];

/// Well-formed RUCs with a wrong check digit.
pub const BAD_CHECKSUM_RUCS: &[&str] = &[
    "10023450",
    "00000000",
    "12345678",
    "00000000000",
    "20131312954",
    "20100070971",
];

/// Append the computed check digit to a 7- or 10-digit body.
///
/// # Panics
/// Panics if the body has no completing check digit.
pub fn complete_ruc(body: &str) -> String {
    let check = ruc_check_digit(body).expect("body must have a check digit");
    format!("{}{}", body, check)
}

/// Replace the check digit of a RUC with the next digit, modulo 10.
pub fn corrupt_check_digit(ruc: &str) -> String {
    let (body, check) = ruc.split_at(ruc.len() - 1);
    let check: u32 = check.parse().expect("RUC must end in a digit");
    format!("{}{}", body, (check + 1) % 10)
}
