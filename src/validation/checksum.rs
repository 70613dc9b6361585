//! RUC check-digit arithmetic.
//!
//! SUNAT issues two RUC layouts and each has its own modulo-11 scheme:
//!
//! - 8 digits: weights `2,7,6,5,4,3,2` over the first seven digits. A
//!   remainder of 1 is promoted to 11, and the number is valid when the
//!   remainder plus the check digit equals 11.
//! - 11 digits: weights `5,4,3,2,7,6,5,4,3,2` over the first ten digits. The
//!   expected check digit is `11 - remainder`, minus 10 when that is 10 or 11.
//!
//! The two adjustment rules look alike and are easy to mix up, so they are
//! kept apart in [`ruc8_modulo`] and [`ruc11_modulo`].

/// Weights for the body of an 8-digit RUC.
pub const RUC8_WEIGHTS: [u32; 7] = [2, 7, 6, 5, 4, 3, 2];

/// Weights for the body of an 11-digit RUC.
///
/// Not a plain descending run: the sequence restarts at 7 on the fifth digit.
pub const RUC11_WEIGHTS: [u32; 10] = [5, 4, 3, 2, 7, 6, 5, 4, 3, 2];

/// Convert ASCII digits to their values. `None` if any character is not 0-9.
fn to_digits(value: &str) -> Option<Vec<u32>> {
    value.chars().map(|c| c.to_digit(10)).collect()
}

fn weighted_sum(digits: &[u32], weights: &[u32]) -> u32 {
    digits.iter().zip(weights).map(|(d, w)| d * w).sum()
}

/// Adjusted remainder for the 7-digit body of an 8-digit RUC.
fn ruc8_modulo(body: &[u32]) -> u32 {
    let modulo = weighted_sum(body, &RUC8_WEIGHTS) % 11;
    if modulo == 1 {
        11
    } else {
        modulo
    }
}

/// Expected check digit for the 10-digit body of an 11-digit RUC.
fn ruc11_modulo(body: &[u32]) -> u32 {
    let modulo = 11 - weighted_sum(body, &RUC11_WEIGHTS) % 11;
    if modulo >= 10 {
        modulo - 10
    } else {
        modulo
    }
}

/// Check the trailing digit of an 8- or 11-digit RUC.
///
/// Returns `false` for anything that is not exactly 8 or 11 ASCII digits, so
/// the caller decides which rejection reason to report for malformed input.
pub fn ruc_checksum_is_valid(value: &str) -> bool {
    let Some(digits) = to_digits(value) else {
        return false;
    };
    let Some((&check, body)) = digits.split_last() else {
        return false;
    };

    match digits.len() {
        8 => ruc8_modulo(body) + check == 11,
        11 => ruc11_modulo(body) == check,
        _ => false,
    }
}

/// Compute the check digit that completes a RUC body.
///
/// `body` is the first 7 digits of an 8-digit RUC or the first 10 digits of an
/// 11-digit RUC. Returns `None` for any other input, and for 7-digit bodies
/// whose remainder is 0: no single digit can complete those.
pub fn ruc_check_digit(body: &str) -> Option<u32> {
    let digits = to_digits(body)?;

    match digits.len() {
        7 => Some(11 - ruc8_modulo(&digits)).filter(|d| *d <= 9),
        10 => Some(ruc11_modulo(&digits)),
        _ => None,
    }
}
