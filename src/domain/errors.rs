//! Reasons a candidate identifier is rejected.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Why a candidate identifier failed validation.
///
/// These are ordinary outcomes, not faults: the caller is expected to show
/// them to whoever typed the value and ask for a correction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InvalidReason {
    /// The input contains a character that is not an ASCII decimal digit.
    NotNumeric,

    /// The input is all digits but its length is not allowed for the field.
    WrongLength,

    /// Length and digits are fine but the check digit does not match (RUC only).
    BadChecksum,
}

impl InvalidReason {
    /// Stable snake_case code, matching the serialized form.
    pub fn code(&self) -> &'static str {
        match self {
            Self::NotNumeric => "not_numeric",
            Self::WrongLength => "wrong_length",
            Self::BadChecksum => "bad_checksum",
        }
    }
}

impl fmt::Display for InvalidReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotNumeric => write!(f, "identifier must contain only digits"),
            Self::WrongLength => write!(f, "identifier has the wrong number of digits"),
            Self::BadChecksum => write!(f, "identifier check digit does not match"),
        }
    }
}

impl std::error::Error for InvalidReason {}
