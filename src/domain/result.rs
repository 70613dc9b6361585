//! ValidationResult outcome type.

use super::errors::InvalidReason;
use serde::{Deserialize, Serialize};

/// Outcome of validating one candidate identifier.
///
/// `Valid` carries the normalized value. Blank input normalizes to the empty
/// string: an unfilled optional field is not an error, it simply has no value.
///
/// # Example
///
/// ```
/// use pe_id_validator::domain::{InvalidReason, ValidationResult};
/// use pe_id_validator::validate_ruc;
///
/// assert_eq!(
///     validate_ruc("10023450"),
///     ValidationResult::Invalid { reason: InvalidReason::BadChecksum }
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum ValidationResult {
    /// The candidate is acceptable.
    Valid { value: String },

    /// The candidate was rejected.
    Invalid { reason: InvalidReason },
}

impl ValidationResult {
    pub(crate) fn valid(value: impl Into<String>) -> Self {
        Self::Valid {
            value: value.into(),
        }
    }

    pub(crate) fn invalid(reason: InvalidReason) -> Self {
        Self::Invalid { reason }
    }

    /// The result for a blank, unfilled field.
    pub(crate) fn blank() -> Self {
        Self::valid(String::new())
    }

    pub fn is_valid(&self) -> bool {
        matches!(self, Self::Valid { .. })
    }

    /// True for the pass-through result produced by blank input.
    pub fn is_blank(&self) -> bool {
        matches!(self, Self::Valid { value } if value.is_empty())
    }

    /// The normalized value, if valid.
    pub fn value(&self) -> Option<&str> {
        match self {
            Self::Valid { value } => Some(value),
            Self::Invalid { .. } => None,
        }
    }

    /// The rejection reason, if invalid.
    pub fn reason(&self) -> Option<InvalidReason> {
        match self {
            Self::Valid { .. } => None,
            Self::Invalid { reason } => Some(*reason),
        }
    }

    /// Convert into a standard `Result` for use with `?`.
    pub fn into_result(self) -> Result<String, InvalidReason> {
        match self {
            Self::Valid { value } => Ok(value),
            Self::Invalid { reason } => Err(reason),
        }
    }
}

impl From<ValidationResult> for Result<String, InvalidReason> {
    fn from(result: ValidationResult) -> Self {
        result.into_result()
    }
}
